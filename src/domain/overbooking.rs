use serde::Serialize;
use statrs::distribution::{Binomial, Discrete, DiscreteCDF};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum OverbookingError {
    #[error("capacity must be greater than zero")]
    InvalidCapacity,
    #[error("no-show rate must be within [0, 1], got {0}")]
    InvalidNoShowRate(f64),
    #[error("invalid binomial parameters: {0}")]
    Distribution(String),
}

/// Binomial risk model for a single flight: `capacity` seats, each sold
/// ticket shows up independently with probability `1 - no_show_rate`.
#[derive(Debug, Clone, Copy)]
pub struct OverbookingModel {
    capacity: u64,
    no_show_rate: f64,
    show_probability: f64,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct FinancialAnalysis {
    pub expected_excess: f64,
    pub additional_revenue: f64,
    pub expected_cost: f64,
    pub expected_profit: f64,
    pub overbooking_probability: f64,
}

impl OverbookingModel {
    pub fn new(capacity: u64, no_show_rate: f64) -> Result<Self, OverbookingError> {
        if capacity == 0 {
            return Err(OverbookingError::InvalidCapacity);
        }
        if !(0.0..=1.0).contains(&no_show_rate) {
            return Err(OverbookingError::InvalidNoShowRate(no_show_rate));
        }
        Ok(Self {
            capacity,
            no_show_rate,
            show_probability: 1.0 - no_show_rate,
        })
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn no_show_rate(&self) -> f64 {
        self.no_show_rate
    }

    pub fn show_probability(&self) -> f64 {
        self.show_probability
    }

    /// Probability that more passengers show up than there are seats,
    /// i.e. `P(X > capacity)` with `X ~ Binomial(tickets_sold, show_probability)`.
    pub fn overbooking_probability(&self, tickets_sold: u64) -> Result<f64, OverbookingError> {
        // With at most `capacity` trials the excess mass is exactly zero.
        if tickets_sold <= self.capacity {
            return Ok(0.0);
        }
        let shows = self.shows_distribution(tickets_sold)?;
        Ok(shows.sf(self.capacity))
    }

    /// Largest ticket count within `capacity ..= capacity + 49` whose
    /// overbooking probability stays at or below `risk_limit`. Returns
    /// `capacity` when every count in range stays below the limit.
    pub fn max_tickets_for_risk(&self, risk_limit: f64) -> Result<u64, OverbookingError> {
        for n in self.capacity..self.capacity + 50 {
            if self.overbooking_probability(n)? > risk_limit {
                return Ok(n - 1);
            }
        }
        Ok(self.capacity)
    }

    /// Expected outcome of selling `extra_tickets` beyond capacity.
    ///
    /// `expected_excess` is the exact finite sum over every show-count above
    /// capacity, weighted by its binomial probability.
    pub fn financial_analysis(
        &self,
        extra_tickets: u64,
        ticket_price: f64,
        compensation_cost: f64,
    ) -> Result<FinancialAnalysis, OverbookingError> {
        let total_tickets = self.capacity + extra_tickets;
        let shows = self.shows_distribution(total_tickets)?;

        let mut expected_excess = 0.0;
        for k in self.capacity + 1..=total_tickets {
            expected_excess += shows.pmf(k) * (k - self.capacity) as f64;
        }

        let additional_revenue = extra_tickets as f64 * ticket_price;
        let expected_cost = expected_excess * compensation_cost;

        Ok(FinancialAnalysis {
            expected_excess,
            additional_revenue,
            expected_cost,
            expected_profit: additional_revenue - expected_cost,
            overbooking_probability: self.overbooking_probability(total_tickets)?,
        })
    }

    fn shows_distribution(&self, tickets_sold: u64) -> Result<Binomial, OverbookingError> {
        Binomial::new(self.show_probability, tickets_sold)
            .map_err(|e| OverbookingError::Distribution(e.to_string()))
    }
}
