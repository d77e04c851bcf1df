//! [`RateSchedule`] definitions.

use common::Percent;
use derive_more::{Display, Error};
use itertools::Itertools as _;
use rust_decimal::Decimal;

/// Day-indexed tier of a [`RateSchedule`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RateTier {
    /// First rental day (1-based) this tier covers.
    pub min_days: u32,

    /// Last rental day this tier covers.
    ///
    /// [`None`] means this tier is unbounded.
    pub max_days: Option<u32>,

    /// Daily rate of this tier, as a [`Percent`] of the listing's base
    /// price.
    pub rate: Percent,
}

impl RateTier {
    /// Indicates whether this [`RateTier`] covers the provided rental `day`.
    #[must_use]
    pub fn covers(&self, day: u32) -> bool {
        day >= self.min_days && self.max_days.map_or(true, |max| day <= max)
    }
}

/// Ordered, non-overlapping, gap-free sequence of [`RateTier`]s covering
/// every rental day from the first one up.
///
/// Rates never increase from tier to tier: a longer commitment is never
/// priced at a higher daily rate than a shorter one.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RateSchedule(Vec<RateTier>);

impl RateSchedule {
    /// Creates a new [`RateSchedule`] by validating the provided [`RateTier`]
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidScheduleError`] if the tiers don't start at day 1,
    /// leave a gap, overlap, end in a bounded tier, carry a zero rate, or
    /// increase their rate as days grow.
    pub fn new(tiers: Vec<RateTier>) -> Result<Self, InvalidScheduleError> {
        use InvalidScheduleError as E;

        let first = tiers.first().ok_or(E::Empty)?;
        if first.min_days != 1 {
            return Err(E::UncoveredLeadingDays {
                first_min_days: first.min_days,
            });
        }

        for tier in &tiers {
            if tier.rate.is_zero() {
                return Err(E::ZeroRate {
                    min_days: tier.min_days,
                });
            }
            if let Some(max) = tier.max_days {
                if max < tier.min_days {
                    return Err(E::InvertedTier {
                        min_days: tier.min_days,
                        max_days: max,
                    });
                }
            }
        }

        for (prev, next) in tiers.iter().tuple_windows() {
            let Some(prev_max) = prev.max_days else {
                return Err(E::UnreachableTier {
                    min_days: next.min_days,
                });
            };
            if next.min_days != prev_max + 1 {
                return Err(E::Discontinuous {
                    expected_min_days: prev_max + 1,
                    found_min_days: next.min_days,
                });
            }
            if next.rate > prev.rate {
                return Err(E::IncreasingRate {
                    min_days: next.min_days,
                });
            }
        }

        if tiers.last().expect("non-empty").max_days.is_some() {
            return Err(E::UncoveredTrailingDays);
        }

        Ok(Self(tiers))
    }

    /// Standard marketplace [`RateSchedule`]: days 1–3 at 5%, 4–7 at 4%,
    /// 8–14 at 3% and 15+ at 2% of the base price.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn standard() -> Self {
        let rate = |v: u32| {
            Percent::new(Decimal::from(v)).expect("infallible")
        };

        Self::new(vec![
            RateTier {
                min_days: 1,
                max_days: Some(3),
                rate: rate(5),
            },
            RateTier {
                min_days: 4,
                max_days: Some(7),
                rate: rate(4),
            },
            RateTier {
                min_days: 8,
                max_days: Some(14),
                rate: rate(3),
            },
            RateTier {
                min_days: 15,
                max_days: None,
                rate: rate(2),
            },
        ])
        .expect("infallible")
    }

    /// Returns the [`RateTier`]s of this [`RateSchedule`].
    #[must_use]
    pub fn tiers(&self) -> &[RateTier] {
        &self.0
    }

    /// Returns the [`RateTier`] covering the provided rental `day` (1-based,
    /// must be at least `1`).
    pub(crate) fn tier_covering(&self, day: u32) -> &RateTier {
        self.0
            .iter()
            .find(|t| t.covers(day))
            .expect("schedule is gap-free")
    }
}

impl Default for RateSchedule {
    fn default() -> Self {
        Self::standard()
    }
}

/// Error of validating a [`RateSchedule`].
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum InvalidScheduleError {
    /// Schedule contains no tiers at all.
    #[display("rate schedule contains no tiers")]
    Empty,

    /// First tier doesn't start at day 1.
    #[display("first tier starts at day {first_min_days} instead of day 1")]
    UncoveredLeadingDays {
        /// First day the first tier covers.
        first_min_days: u32,
    },

    /// Tier ends before it starts.
    #[display("tier starting at day {min_days} ends at day {max_days}")]
    InvertedTier {
        /// First day the tier covers.
        min_days: u32,

        /// Last day the tier covers.
        max_days: u32,
    },

    /// Consecutive tiers leave a gap or overlap.
    #[display(
        "tier expected to start at day {expected_min_days} starts at day \
         {found_min_days}"
    )]
    Discontinuous {
        /// Day the tier should have started at.
        expected_min_days: u32,

        /// Day the tier actually starts at.
        found_min_days: u32,
    },

    /// Tier follows an unbounded one.
    #[display("tier starting at day {min_days} follows an unbounded tier")]
    UnreachableTier {
        /// First day the unreachable tier covers.
        min_days: u32,
    },

    /// Last tier is bounded, leaving later days uncovered.
    #[display("last tier is bounded, leaving later days unpriced")]
    UncoveredTrailingDays,

    /// Tier rate is zero.
    #[display("tier starting at day {min_days} has a zero rate")]
    ZeroRate {
        /// First day the zero-rate tier covers.
        min_days: u32,
    },

    /// Tier rate is higher than the previous tier's one.
    #[display(
        "tier starting at day {min_days} rates higher than the previous one"
    )]
    IncreasingRate {
        /// First day of the higher-rated tier.
        min_days: u32,
    },
}
