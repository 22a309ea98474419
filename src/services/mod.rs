pub mod analysis;
pub mod histogram;
pub mod monte_carlo;
pub mod percentiles;
pub mod scenario_yaml;
pub mod simulation_types;
