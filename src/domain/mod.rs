pub mod overbooking;
pub mod roi;
