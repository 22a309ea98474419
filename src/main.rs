mod commands;
mod domain;
mod services;
#[cfg(test)]
mod test_support;

use clap::{CommandFactory, Parser};

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::{analyze_cmd, risk_cmd, roi_cmd, simulate_cmd};

fn main() {
    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Risk { .. } => risk_cmd::risk_command(cmd),
        cmd @ Commands::Roi { .. } => roi_cmd::roi_command(cmd),
        cmd @ Commands::Simulate { .. } => simulate_cmd::simulate_command(cmd),
        cmd @ Commands::Analyze { .. } => analyze_cmd::analyze_command(cmd),
        Commands::Completions { shell } => {
            let mut cli = CliArgs::command();
            let name = cli.get_name().to_string();
            clap_complete::generate(shell, &mut cli, name, &mut std::io::stdout());
        }
    }
}
