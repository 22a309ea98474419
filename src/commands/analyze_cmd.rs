use crate::commands::base_commands::Commands;
use crate::commands::report_format::{format_analysis_report, serialize_report};
use crate::services::analysis::analyze_scenario;
use crate::services::histogram::write_histogram_png;
use crate::services::scenario_yaml::load_scenario_from_yaml_file;

pub fn analyze_command(cmd: Commands) {
    if let Commands::Analyze {
        input,
        output,
        format,
    } = cmd
    {
        let scenario = match load_scenario_from_yaml_file(&input) {
            Ok(scenario) => scenario,
            Err(e) => {
                eprintln!("Failed to load scenario: {e:?}");
                return;
            }
        };

        let analysis = match analyze_scenario(&scenario) {
            Ok(analysis) => analysis,
            Err(e) => {
                eprintln!("Failed to analyze scenario: {e:?}");
                return;
            }
        };

        let histogram_path = format!("{output}.png");
        if let Err(e) = write_histogram_png(&histogram_path, &analysis.result.rois) {
            eprintln!("Failed to write simulation histogram: {e:?}");
        }

        let contents = match serialize_report(&analysis.report, format) {
            Ok(contents) => contents,
            Err(e) => {
                eprintln!("Failed to serialize analysis report: {e}");
                return;
            }
        };

        if let Err(e) = std::fs::write(&output, contents) {
            eprintln!("Failed to write analysis report: {e:?}");
        } else {
            println!("{}", format_analysis_report(&analysis.report));
            println!("Analysis report written to {output}");
            println!("Simulation histogram written to {histogram_path}");
        }
    }
}
