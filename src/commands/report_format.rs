use crate::commands::base_commands::ReportFormat;
use crate::services::analysis::{AnalysisReport, RiskReport, RoiReport};
use crate::services::simulation_types::SimulationSummary;

pub fn format_risk_report(report: &RiskReport) -> String {
    let mut lines = Vec::new();
    lines.push("Overbooking Risk Report".to_string());
    lines.push(format!("Capacity: {}", report.capacity));
    lines.push(format!("No-show rate: {:.2}%", report.no_show_rate * 100.0));
    lines.push(format!("Tickets sold: {}", report.tickets_sold));
    lines.push(format!(
        "Overbooking probability: {:.2}%",
        report.overbooking_probability * 100.0
    ));
    lines.push(format!(
        "Max tickets within {:.2}% risk: {}",
        report.risk_limit * 100.0,
        report.max_tickets_within_risk
    ));
    lines.push(String::new());
    lines.push("Financial analysis:".to_string());
    lines.push(format!(
        "Expected denied boardings: {:.3}",
        report.financial.expected_excess
    ));
    lines.push(format!(
        "Additional revenue: {:.2}",
        report.financial.additional_revenue
    ));
    lines.push(format!(
        "Expected compensation cost: {:.2}",
        report.financial.expected_cost
    ));
    lines.push(format!(
        "Expected profit: {:.2}",
        report.financial.expected_profit
    ));

    lines.join("\n")
}

pub fn format_roi_report(report: &RoiReport) -> String {
    let revenue = match report.actual_revenue {
        Some(value) => format!("{value:.2} (actual)"),
        None => format!("{:.2} (expected)", report.expected_revenue),
    };

    let mut lines = Vec::new();
    lines.push("ROI Report".to_string());
    lines.push(format!("Investment: {:.2}", report.investment));
    lines.push(format!("Revenue: {revenue}"));
    lines.push(format!("Operating cost: {:.2}", report.operating_cost));
    lines.push(format!("ROI: {:.1}%", report.roi));

    lines.join("\n")
}

pub fn format_simulation_summary(summary: &SimulationSummary) -> String {
    let mut lines = Vec::new();
    lines.push("Monte Carlo Summary".to_string());
    lines.push(format!("Samples: {}", summary.samples));
    lines.push(format!("Seed: {}", summary.seed));
    lines.push(format!("Mean ROI: {:.1}%", summary.mean_roi));
    lines.push(format!("Median ROI: {:.1}%", summary.median_roi));
    lines.push(format!(
        "ROI above 0%: {:.1}% of draws",
        summary.roi_above_zero * 100.0
    ));
    lines.push(format!(
        "ROI above 50%: {:.1}% of draws",
        summary.roi_above_fifty * 100.0
    ));
    lines.push(String::new());
    lines.push("Percentile | ROI (%) | Revenue".to_string());
    lines.push("-----------|---------|--------".to_string());
    let rois = summary.roi_percentiles.as_array();
    let revenues = summary.revenue_percentiles.as_array();
    for (label, (roi, revenue)) in ["P10", "P25", "P50", "P75", "P90"]
        .iter()
        .zip(rois.iter().zip(revenues.iter()))
    {
        lines.push(format!("{label} | {roi:.1} | {revenue:.2}"));
    }

    lines.join("\n")
}

pub fn format_analysis_report(report: &AnalysisReport) -> String {
    [
        format_risk_report(&report.risk),
        format_roi_report(&report.roi),
        format_simulation_summary(&report.simulation),
    ]
    .join("\n\n")
}

/// Serializes any report in the requested output format.
pub fn serialize_report<T: serde::Serialize>(
    value: &T,
    format: ReportFormat,
) -> Result<String, String> {
    match format {
        ReportFormat::Yaml => serde_yaml::to_string(value).map_err(|e| e.to_string()),
        ReportFormat::Json => serde_json::to_string_pretty(value).map_err(|e| e.to_string()),
    }
}
