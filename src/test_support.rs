use crate::domain::overbooking::OverbookingModel;
use crate::domain::roi::RoiModel;

// The worked example from the original analysis: 120 seats, 12% no-shows.
pub fn overbooking_model() -> OverbookingModel {
    OverbookingModel::new(120, 0.12).unwrap()
}

pub fn roi_model() -> RoiModel {
    RoiModel::new(50000.0, 80000.0, 10000.0).unwrap()
}

pub fn sample_scenario_yaml() -> &'static str {
    "flight:
  capacity: 120
  no_show_rate: 0.12
  tickets_sold: 130
  ticket_price: 500
  compensation_cost: 1200
  risk_limit: 0.07
investment:
  investment: 50000
  expected_revenue: 80000
  operating_cost: 10000
simulation:
  samples: 1000
  mean_performance: 0.75
  std_performance: 0.15
  seed: 42
"
}
