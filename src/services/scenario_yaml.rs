use serde::Deserialize;
use thiserror::Error;

use crate::domain::overbooking::{OverbookingError, OverbookingModel};
use crate::domain::roi::{RoiError, RoiModel};
use crate::services::monte_carlo::MonteCarloParams;

#[derive(Error, Debug)]
pub enum ScenarioYamlError {
    #[error("failed to read scenario yaml: {0}")]
    Read(#[from] std::io::Error),
    #[error("failed to parse scenario yaml: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error(transparent)]
    Overbooking(#[from] OverbookingError),
    #[error(transparent)]
    Roi(#[from] RoiError),
    #[error("tickets sold ({tickets_sold}) must be at least the capacity ({capacity})")]
    TicketsBelowCapacity { tickets_sold: u64, capacity: u64 },
    #[error("ticket price must be greater than zero")]
    InvalidTicketPrice,
    #[error("compensation cost must be greater than zero")]
    InvalidCompensationCost,
    #[error("risk limit must be within (0, 1)")]
    InvalidRiskLimit,
    #[error("mean performance must be within [0, 1]")]
    InvalidMeanPerformance,
    #[error("performance standard deviation must be greater than zero")]
    InvalidStdPerformance,
}

/// A fully validated scenario: both models plus the boundary parameters the
/// analysis pipeline needs.
#[derive(Debug, Clone, Copy)]
pub struct Scenario {
    pub overbooking: OverbookingModel,
    pub roi: RoiModel,
    pub tickets_sold: u64,
    pub ticket_price: f64,
    pub compensation_cost: f64,
    pub risk_limit: f64,
    pub simulation: MonteCarloParams,
    pub seed: u64,
}

#[derive(Deserialize)]
struct ScenarioRecord {
    flight: FlightRecord,
    investment: InvestmentRecord,
    #[serde(default)]
    simulation: SimulationRecord,
}

#[derive(Deserialize)]
struct FlightRecord {
    capacity: u64,
    no_show_rate: f64,
    tickets_sold: u64,
    #[serde(default = "default_ticket_price")]
    ticket_price: f64,
    #[serde(default = "default_compensation_cost")]
    compensation_cost: f64,
    #[serde(default = "default_risk_limit")]
    risk_limit: f64,
}

#[derive(Deserialize)]
struct InvestmentRecord {
    investment: f64,
    expected_revenue: f64,
    operating_cost: f64,
}

#[derive(Deserialize)]
struct SimulationRecord {
    #[serde(default = "default_samples")]
    samples: usize,
    #[serde(default = "default_mean_performance")]
    mean_performance: f64,
    #[serde(default = "default_std_performance")]
    std_performance: f64,
    #[serde(default = "default_seed")]
    seed: u64,
}

impl Default for SimulationRecord {
    fn default() -> Self {
        Self {
            samples: default_samples(),
            mean_performance: default_mean_performance(),
            std_performance: default_std_performance(),
            seed: default_seed(),
        }
    }
}

fn default_ticket_price() -> f64 {
    500.0
}

fn default_compensation_cost() -> f64 {
    1200.0
}

fn default_risk_limit() -> f64 {
    0.07
}

fn default_samples() -> usize {
    10000
}

fn default_mean_performance() -> f64 {
    0.75
}

fn default_std_performance() -> f64 {
    0.15
}

fn default_seed() -> u64 {
    42
}

pub fn load_scenario_from_yaml_file(path: &str) -> Result<Scenario, ScenarioYamlError> {
    let contents = std::fs::read_to_string(path)?;
    deserialize_scenario_from_yaml_str(&contents)
}

pub fn deserialize_scenario_from_yaml_str(input: &str) -> Result<Scenario, ScenarioYamlError> {
    let record: ScenarioRecord = serde_yaml::from_str(input)?;

    let overbooking = OverbookingModel::new(record.flight.capacity, record.flight.no_show_rate)?;
    let roi = RoiModel::new(
        record.investment.investment,
        record.investment.expected_revenue,
        record.investment.operating_cost,
    )?;

    if record.flight.tickets_sold < record.flight.capacity {
        return Err(ScenarioYamlError::TicketsBelowCapacity {
            tickets_sold: record.flight.tickets_sold,
            capacity: record.flight.capacity,
        });
    }
    if !(record.flight.ticket_price > 0.0) || !record.flight.ticket_price.is_finite() {
        return Err(ScenarioYamlError::InvalidTicketPrice);
    }
    if !(record.flight.compensation_cost > 0.0) || !record.flight.compensation_cost.is_finite() {
        return Err(ScenarioYamlError::InvalidCompensationCost);
    }
    if !(record.flight.risk_limit > 0.0 && record.flight.risk_limit < 1.0) {
        return Err(ScenarioYamlError::InvalidRiskLimit);
    }
    if !(0.0..=1.0).contains(&record.simulation.mean_performance) {
        return Err(ScenarioYamlError::InvalidMeanPerformance);
    }
    if !(record.simulation.std_performance > 0.0)
        || !record.simulation.std_performance.is_finite()
    {
        return Err(ScenarioYamlError::InvalidStdPerformance);
    }

    Ok(Scenario {
        overbooking,
        roi,
        tickets_sold: record.flight.tickets_sold,
        ticket_price: record.flight.ticket_price,
        compensation_cost: record.flight.compensation_cost,
        risk_limit: record.flight.risk_limit,
        simulation: MonteCarloParams {
            samples: record.simulation.samples,
            mean_performance: record.simulation.mean_performance,
            std_performance: record.simulation.std_performance,
        },
        seed: record.simulation.seed,
    })
}
