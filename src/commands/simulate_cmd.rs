use crate::commands::base_commands::Commands;
use crate::commands::report_format::{format_simulation_summary, serialize_report};
use crate::domain::roi::RoiModel;
use crate::services::histogram::write_histogram_png;
use crate::services::monte_carlo::{run_simulation, MonteCarloParams};

pub fn simulate_command(cmd: Commands) {
    if let Commands::Simulate {
        investment,
        expected_revenue,
        operating_cost,
        samples,
        mean_performance,
        std_performance,
        seed,
        output,
        format,
    } = cmd
    {
        if !(0.0..=1.0).contains(&mean_performance) {
            eprintln!("Mean performance must be within [0, 1]");
            return;
        }
        if !(std_performance > 0.0) {
            eprintln!("Performance standard deviation must be greater than zero");
            return;
        }

        let model = match RoiModel::new(investment, expected_revenue, operating_cost) {
            Ok(model) => model,
            Err(e) => {
                eprintln!("Failed to build ROI model: {e:?}");
                return;
            }
        };

        let params = MonteCarloParams {
            samples,
            mean_performance,
            std_performance,
        };
        let simulation = match run_simulation(&model, &params, seed) {
            Ok(simulation) => simulation,
            Err(e) => {
                eprintln!("Failed to run Monte Carlo simulation: {e:?}");
                return;
            }
        };

        let histogram_path = format!("{output}.png");
        if let Err(e) = write_histogram_png(&histogram_path, &simulation.result.rois) {
            eprintln!("Failed to write simulation histogram: {e:?}");
        }

        let contents = match serialize_report(&simulation, format) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize simulation output: {e}");
                return;
            }
        };

        if let Err(e) = std::fs::write(&output, contents) {
            eprintln!("Failed to write simulation output: {e:?}");
        } else {
            println!("{}", format_simulation_summary(&simulation.summary));
            println!("Simulation result for {samples} samples written to {output}");
            println!("Simulation histogram written to {histogram_path}");
        }
    }
}
