//! Duration pricing over a [`RateSchedule`].

use common::Money;
use derive_more::{Display, Error};

use crate::pricing::schedule::RateSchedule;

/// Error of pricing a rental duration shorter than one day.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display("rental duration must be at least 1 day")]
pub struct InvalidDurationError;

/// Returns the daily rate the provided rental `day` (1-based) is priced at.
///
/// # Errors
///
/// Returns an [`InvalidDurationError`] if `day` is less than `1`.
pub fn daily_rate(
    base_price: Money,
    schedule: &RateSchedule,
    day: u32,
) -> Result<Money, InvalidDurationError> {
    if day < 1 {
        return Err(InvalidDurationError);
    }

    Ok(base_price * schedule.tier_covering(day).rate)
}

/// Returns the total cost of renting for `duration_days`, summing the daily
/// rate of every day of the span.
///
/// Computed in closed form: every tier touched by the span contributes its
/// rate multiplied by the number of span days falling into it, which is
/// exactly the naive day-by-day sum.
///
/// # Errors
///
/// Returns an [`InvalidDurationError`] if `duration_days` is less than `1`.
pub fn cost_for_span(
    base_price: Money,
    schedule: &RateSchedule,
    duration_days: u32,
) -> Result<Money, InvalidDurationError> {
    if duration_days < 1 {
        return Err(InvalidDurationError);
    }

    let mut total = Money::zero(base_price.currency);
    for tier in schedule.tiers() {
        if tier.min_days > duration_days {
            break;
        }

        let last_day =
            tier.max_days.map_or(duration_days, |max| max.min(duration_days));
        let days_in_tier = last_day - tier.min_days + 1;

        total = total
            .checked_add(base_price * tier.rate * days_in_tier)
            .expect("same currency");
    }

    Ok(total)
}

/// Daily rate of a single tier, as rendered in a listing's "daily rate
/// breakdown" preview.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TierRate {
    /// First rental day the rate applies from.
    pub min_days: u32,

    /// Last rental day the rate applies to.
    ///
    /// [`None`] means the rate applies indefinitely.
    pub max_days: Option<u32>,

    /// Price per day within this tier.
    pub daily_rate: Money,
}

/// Returns the per-tier daily rates of the provided `schedule` applied to
/// `base_price`, for listing-creation UIs to render as a preview table.
#[must_use]
pub fn breakdown(base_price: Money, schedule: &RateSchedule) -> Vec<TierRate> {
    schedule
        .tiers()
        .iter()
        .map(|tier| TierRate {
            min_days: tier.min_days,
            max_days: tier.max_days,
            daily_rate: base_price * tier.rate,
        })
        .collect()
}
