pub mod analyze_cmd;
pub mod base_commands;
pub mod report_format;
pub mod risk_cmd;
pub mod roi_cmd;
pub mod simulate_cmd;
