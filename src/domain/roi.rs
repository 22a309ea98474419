use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum RoiError {
    #[error("investment must be greater than zero")]
    InvalidInvestment,
    #[error("expected revenue must not be negative")]
    InvalidExpectedRevenue,
    #[error("operating cost must not be negative")]
    InvalidOperatingCost,
}

/// Return-on-investment model for a single route configuration.
///
/// A non-positive (or non-finite) investment is rejected at construction,
/// so `compute_roi` never divides by zero.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoiModel {
    investment: f64,
    expected_revenue: f64,
    operating_cost: f64,
}

impl RoiModel {
    pub fn new(
        investment: f64,
        expected_revenue: f64,
        operating_cost: f64,
    ) -> Result<Self, RoiError> {
        if !(investment > 0.0) || !investment.is_finite() {
            return Err(RoiError::InvalidInvestment);
        }
        if !(expected_revenue >= 0.0) {
            return Err(RoiError::InvalidExpectedRevenue);
        }
        if !(operating_cost >= 0.0) {
            return Err(RoiError::InvalidOperatingCost);
        }
        Ok(Self {
            investment,
            expected_revenue,
            operating_cost,
        })
    }

    pub fn investment(&self) -> f64 {
        self.investment
    }

    pub fn expected_revenue(&self) -> f64 {
        self.expected_revenue
    }

    pub fn operating_cost(&self) -> f64 {
        self.operating_cost
    }

    /// ROI in percent. Falls back to the expected revenue only when no
    /// actual revenue is provided; `Some(0.0)` counts as a real revenue
    /// of zero.
    pub fn compute_roi(&self, actual_revenue: Option<f64>) -> f64 {
        let revenue = actual_revenue.unwrap_or(self.expected_revenue);
        (revenue - self.operating_cost) / self.investment * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_positive_investment() {
        assert_eq!(
            RoiModel::new(0.0, 80000.0, 10000.0),
            Err(RoiError::InvalidInvestment)
        );
        assert_eq!(
            RoiModel::new(-1.0, 80000.0, 10000.0),
            Err(RoiError::InvalidInvestment)
        );
        assert_eq!(
            RoiModel::new(f64::NAN, 80000.0, 10000.0),
            Err(RoiError::InvalidInvestment)
        );
    }

    #[test]
    fn rejects_negative_revenue_and_cost() {
        assert_eq!(
            RoiModel::new(50000.0, -1.0, 10000.0),
            Err(RoiError::InvalidExpectedRevenue)
        );
        assert_eq!(
            RoiModel::new(50000.0, 80000.0, -1.0),
            Err(RoiError::InvalidOperatingCost)
        );
    }

    #[test]
    fn roi_uses_expected_revenue_when_no_actual_revenue_given() {
        let model = RoiModel::new(50000.0, 80000.0, 10000.0).unwrap();
        assert_eq!(model.compute_roi(None), 140.0);
    }

    #[test]
    fn roi_honors_an_actual_revenue_of_zero() {
        let model = RoiModel::new(50000.0, 80000.0, 10000.0).unwrap();
        assert_eq!(model.compute_roi(Some(0.0)), -20.0);
    }

    #[test]
    fn roi_uses_actual_revenue_when_provided() {
        let model = RoiModel::new(50000.0, 80000.0, 10000.0).unwrap();
        assert_eq!(model.compute_roi(Some(60000.0)), 100.0);
    }
}
