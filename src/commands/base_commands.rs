use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq)]
pub enum ReportFormat {
    Yaml,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Overbooking risk and expected cost for a single flight
    Risk {
        /// Number of seats on the aircraft
        #[arg(short, long)]
        capacity: u64,
        /// Probability that a ticketed passenger does not show
        #[arg(short, long)]
        no_show_rate: f64,
        /// Tickets sold (must be at least the capacity)
        #[arg(short, long)]
        tickets_sold: u64,
        /// Acceptable overbooking probability
        #[arg(short, long, default_value_t = 0.07)]
        risk_limit: f64,
        /// Revenue per extra ticket sold
        #[arg(long, default_value_t = 500.0)]
        ticket_price: f64,
        /// Compensation paid per denied boarding
        #[arg(long, default_value_t = 1200.0)]
        compensation_cost: f64,
    },
    /// Return on investment for a route configuration
    Roi {
        /// Initial investment
        #[arg(short, long)]
        investment: f64,
        /// Revenue expected at full performance
        #[arg(short, long)]
        expected_revenue: f64,
        /// Operating cost
        #[arg(short, long)]
        operating_cost: f64,
        /// Realized revenue; overrides the expected revenue, zero included
        #[arg(short, long)]
        actual_revenue: Option<f64>,
    },
    /// Monte Carlo simulation of ROI under random revenue performance
    Simulate {
        /// Initial investment
        #[arg(short, long)]
        investment: f64,
        /// Revenue expected at full performance
        #[arg(short, long)]
        expected_revenue: f64,
        /// Operating cost
        #[arg(short = 'c', long)]
        operating_cost: f64,
        /// Number of random draws
        #[arg(short = 'n', long, default_value_t = 10000)]
        samples: usize,
        /// Mean revenue performance, within [0, 1]
        #[arg(short, long, default_value_t = 0.75)]
        mean_performance: f64,
        /// Standard deviation of the revenue performance
        #[arg(long, default_value_t = 0.15)]
        std_performance: f64,
        /// Random seed; the same seed reproduces the same draws
        #[arg(short, long, default_value_t = 42)]
        seed: u64,
        /// Output file for the simulation result
        #[arg(short, long)]
        output: String,
        /// Output file format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Yaml)]
        format: ReportFormat,
    },
    /// Run the full risk and ROI analysis for a scenario file
    Analyze {
        /// Scenario YAML file
        #[arg(short, long)]
        input: String,
        /// Output file for the analysis report
        #[arg(short, long)]
        output: String,
        /// Output file format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Yaml)]
        format: ReportFormat,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
