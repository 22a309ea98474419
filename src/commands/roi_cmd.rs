use crate::commands::base_commands::Commands;
use crate::commands::report_format::format_roi_report;
use crate::domain::roi::RoiModel;
use crate::services::analysis::build_roi_report;

pub fn roi_command(cmd: Commands) {
    if let Commands::Roi {
        investment,
        expected_revenue,
        operating_cost,
        actual_revenue,
    } = cmd
    {
        let model = match RoiModel::new(investment, expected_revenue, operating_cost) {
            Ok(model) => model,
            Err(e) => {
                eprintln!("Failed to build ROI model: {e:?}");
                return;
            }
        };

        let report = build_roi_report(&model, actual_revenue);
        println!("{}", format_roi_report(&report));
    }
}
