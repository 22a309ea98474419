use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_risk_report;
use crate::domain::overbooking::OverbookingModel;
use crate::services::analysis::build_risk_report;

pub fn risk_command(cmd: Commands) {
    if let Commands::Risk {
        capacity,
        no_show_rate,
        tickets_sold,
        risk_limit,
        ticket_price,
        compensation_cost,
    } = cmd
    {
        if tickets_sold < capacity {
            eprintln!("Tickets sold ({tickets_sold}) must be at least the capacity ({capacity})");
            return;
        }
        if !(risk_limit > 0.0 && risk_limit < 1.0) {
            eprintln!("Risk limit must be within (0, 1)");
            return;
        }
        if !(ticket_price > 0.0) || !(compensation_cost > 0.0) {
            eprintln!("Ticket price and compensation cost must be greater than zero");
            return;
        }

        let model = match OverbookingModel::new(capacity, no_show_rate) {
            Ok(model) => model,
            Err(e) => {
                eprintln!("Failed to build overbooking model: {e:?}");
                return;
            }
        };

        let report = match build_risk_report(
            &model,
            tickets_sold,
            risk_limit,
            ticket_price,
            compensation_cost,
        ) {
            Ok(report) => report,
            Err(e) => {
                eprintln!("Failed to analyze overbooking risk: {e:?}");
                return;
            }
        };

        println!("{}", format_risk_report(&report));
    }
}
