use serde::Serialize;
use thiserror::Error;

use crate::domain::overbooking::{FinancialAnalysis, OverbookingError, OverbookingModel};
use crate::domain::roi::RoiModel;
use crate::services::monte_carlo::{run_simulation, MonteCarloError};
use crate::services::scenario_yaml::Scenario;
use crate::services::simulation_types::{SimulationResult, SimulationSummary};

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Overbooking(#[from] OverbookingError),
    #[error(transparent)]
    MonteCarlo(#[from] MonteCarloError),
}

#[derive(Serialize, Debug, Clone)]
pub struct RiskReport {
    pub capacity: u64,
    pub no_show_rate: f64,
    pub tickets_sold: u64,
    pub overbooking_probability: f64,
    pub risk_limit: f64,
    pub max_tickets_within_risk: u64,
    pub financial: FinancialAnalysis,
}

#[derive(Serialize, Debug, Clone)]
pub struct RoiReport {
    pub investment: f64,
    pub expected_revenue: f64,
    pub operating_cost: f64,
    pub actual_revenue: Option<f64>,
    pub roi: f64,
}

#[derive(Serialize, Debug, Clone)]
pub struct AnalysisReport {
    pub risk: RiskReport,
    pub roi: RoiReport,
    pub simulation: SimulationSummary,
}

/// Full analysis of one scenario: report plus the raw simulation sequences
/// for downstream rendering.
#[derive(Debug, Clone)]
pub struct ScenarioAnalysis {
    pub report: AnalysisReport,
    pub result: SimulationResult,
}

pub fn build_risk_report(
    model: &OverbookingModel,
    tickets_sold: u64,
    risk_limit: f64,
    ticket_price: f64,
    compensation_cost: f64,
) -> Result<RiskReport, OverbookingError> {
    let extra_tickets = tickets_sold.saturating_sub(model.capacity());
    Ok(RiskReport {
        capacity: model.capacity(),
        no_show_rate: model.no_show_rate(),
        tickets_sold,
        overbooking_probability: model.overbooking_probability(tickets_sold)?,
        risk_limit,
        max_tickets_within_risk: model.max_tickets_for_risk(risk_limit)?,
        financial: model.financial_analysis(extra_tickets, ticket_price, compensation_cost)?,
    })
}

pub fn build_roi_report(model: &RoiModel, actual_revenue: Option<f64>) -> RoiReport {
    RoiReport {
        investment: model.investment(),
        expected_revenue: model.expected_revenue(),
        operating_cost: model.operating_cost(),
        actual_revenue,
        roi: model.compute_roi(actual_revenue),
    }
}

pub fn analyze_scenario(scenario: &Scenario) -> Result<ScenarioAnalysis, AnalysisError> {
    let risk = build_risk_report(
        &scenario.overbooking,
        scenario.tickets_sold,
        scenario.risk_limit,
        scenario.ticket_price,
        scenario.compensation_cost,
    )?;
    let roi = build_roi_report(&scenario.roi, None);
    let simulation = run_simulation(&scenario.roi, &scenario.simulation, scenario.seed)?;

    Ok(ScenarioAnalysis {
        report: AnalysisReport {
            risk,
            roi,
            simulation: simulation.summary,
        },
        result: simulation.result,
    })
}
