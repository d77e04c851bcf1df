//! Tiered daily-rate pricing.
//!
//! A listing's base value never is the price paid per day: it goes through a
//! [`RateSchedule`] turning it into a duration-dependent daily rate, and
//! [`pricer`] applies that schedule over a whole rental span.

pub mod pricer;
pub mod schedule;

pub use self::{
    pricer::{
        breakdown, cost_for_span, daily_rate, InvalidDurationError, TierRate,
    },
    schedule::{InvalidScheduleError, RateSchedule, RateTier},
};
