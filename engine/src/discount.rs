//! Bundle discount schedules and their resolution.
//!
//! A bundle carries two independent schedules: one keyed by rental duration
//! in months, one keyed by the number of items in the bundle. Both resolve
//! by the same "largest threshold met" rule, and combine at checkout
//! sequentially: `price × (1 − time) × (1 − item)`.

use std::marker::PhantomData;

use common::Percent;
use derive_more::{Debug, Display, Error};
use itertools::Itertools as _;
use rust_decimal::Decimal;

/// Marker type for discounts keyed by rental duration in months.
#[derive(Clone, Copy, Debug)]
pub struct ByMonths;

/// Marker type for discounts keyed by the number of items in a bundle.
#[derive(Clone, Copy, Debug)]
pub struct ByItems;

/// Discount schedule keyed by rental duration in months.
pub type TimeDiscounts = ScheduleOf<ByMonths>;

/// Discount schedule keyed by the number of items in a bundle.
pub type ItemDiscounts = ScheduleOf<ByItems>;

/// Single tier of a discount schedule.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DiscountTier {
    /// Smallest qualifying value (months or items) this tier applies from.
    pub threshold: u32,

    /// [`Percent`] knocked off the price once the threshold is met.
    ///
    /// Always strictly less than `100%`.
    pub percent: Percent,
}

/// Ordered sequence of [`DiscountTier`]s with strictly increasing
/// thresholds.
#[derive(Debug)]
pub struct ScheduleOf<Of: ?Sized = ()> {
    /// Tiers of this schedule, ordered by threshold.
    tiers: Vec<DiscountTier>,

    /// Type parameter describing what the thresholds count.
    #[debug(skip)]
    _of: PhantomData<Of>,
}

impl<Of: ?Sized> ScheduleOf<Of> {
    /// Creates a new schedule by validating the provided [`DiscountTier`]
    /// sequence.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidDiscountScheduleError`] if any threshold is zero,
    /// any percent reaches `100%`, or thresholds are not strictly
    /// increasing.
    pub fn new(
        tiers: Vec<DiscountTier>,
    ) -> Result<Self, InvalidDiscountScheduleError> {
        use InvalidDiscountScheduleError as E;

        for tier in &tiers {
            if tier.threshold < 1 {
                return Err(E::ZeroThreshold);
            }
            if tier.percent.as_decimal() >= Decimal::ONE_HUNDRED {
                return Err(E::FullDiscount {
                    threshold: tier.threshold,
                });
            }
        }

        for (prev, next) in tiers.iter().tuple_windows() {
            if next.threshold <= prev.threshold {
                return Err(E::NonIncreasingThresholds {
                    threshold: next.threshold,
                });
            }
        }

        Ok(Self {
            tiers,
            _of: PhantomData,
        })
    }

    /// Creates an empty schedule, always resolving to [`Percent::ZERO`].
    #[must_use]
    pub fn none() -> Self {
        Self {
            tiers: Vec::new(),
            _of: PhantomData,
        }
    }

    /// Returns the [`DiscountTier`]s of this schedule.
    #[must_use]
    pub fn tiers(&self) -> &[DiscountTier] {
        &self.tiers
    }

    /// Resolves the discount [`Percent`] the provided `value` (months or
    /// items) qualifies for: the tier with the largest threshold met or
    /// exceeded wins.
    ///
    /// [`Percent::ZERO`] is returned if no threshold is met.
    #[must_use]
    pub fn resolve(&self, value: u32) -> Percent {
        self.tiers
            .iter()
            .take_while(|t| t.threshold <= value)
            .last()
            .map_or(Percent::ZERO, |t| t.percent)
    }
}

impl<Of: ?Sized> Clone for ScheduleOf<Of> {
    fn clone(&self) -> Self {
        Self {
            tiers: self.tiers.clone(),
            _of: PhantomData,
        }
    }
}

impl<Of: ?Sized> Default for ScheduleOf<Of> {
    fn default() -> Self {
        Self::none()
    }
}

impl<Of: ?Sized> Eq for ScheduleOf<Of> {}
impl<Of: ?Sized> PartialEq for ScheduleOf<Of> {
    fn eq(&self, other: &Self) -> bool {
        self.tiers == other.tiers
    }
}

/// Error of validating a discount schedule.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
pub enum InvalidDiscountScheduleError {
    /// Tier threshold is zero.
    #[display("discount tier threshold must be at least 1")]
    ZeroThreshold,

    /// Tier discounts the full price (or more).
    #[display("tier at threshold {threshold} discounts the full price")]
    FullDiscount {
        /// Threshold of the offending tier.
        threshold: u32,
    },

    /// Tier thresholds are not strictly increasing.
    #[display("tier at threshold {threshold} does not increase the previous")]
    NonIncreasingThresholds {
        /// Threshold of the offending tier.
        threshold: u32,
    },
}

#[cfg(test)]
mod spec {
    use common::Percent;
    use rust_decimal::Decimal;

    use super::{
        DiscountTier, InvalidDiscountScheduleError, ItemDiscounts,
        TimeDiscounts,
    };

    fn percent(v: &str) -> Percent {
        Percent::new(v.parse::<Decimal>().unwrap()).unwrap()
    }

    fn tier(threshold: u32, p: &str) -> DiscountTier {
        DiscountTier {
            threshold,
            percent: percent(p),
        }
    }

    fn time_discounts() -> TimeDiscounts {
        TimeDiscounts::new(vec![
            tier(1, "10"),
            tier(2, "15"),
            tier(3, "20"),
        ])
        .unwrap()
    }

    fn item_discounts() -> ItemDiscounts {
        ItemDiscounts::new(vec![tier(2, "5"), tier(3, "10"), tier(5, "15")])
            .unwrap()
    }

    #[test]
    fn resolves_largest_threshold_met() {
        let time = time_discounts();

        assert_eq!(time.resolve(1), percent("10"));
        assert_eq!(time.resolve(2), percent("15"));
        assert_eq!(time.resolve(3), percent("20"));
        // A 5-month rental gets the 3-month tier, not zero.
        assert_eq!(time.resolve(5), percent("20"));
    }

    #[test]
    fn resolves_zero_below_lowest_threshold() {
        let items = item_discounts();

        assert_eq!(items.resolve(0), Percent::ZERO);
        assert_eq!(items.resolve(1), Percent::ZERO);
        assert_eq!(items.resolve(2), percent("5"));
        assert_eq!(items.resolve(3), percent("10"));
        assert_eq!(items.resolve(4), percent("10"));
        assert_eq!(items.resolve(5), percent("15"));
        assert_eq!(items.resolve(100), percent("15"));
    }

    #[test]
    fn empty_schedule_resolves_zero() {
        assert_eq!(TimeDiscounts::none().resolve(12), Percent::ZERO);
        assert_eq!(ItemDiscounts::default().resolve(12), Percent::ZERO);
    }

    #[test]
    fn resolution_is_monotonic() {
        let time = time_discounts();

        let mut prev = time.resolve(0);
        for value in 1..=50 {
            let next = time.resolve(value);

            assert!(next >= prev, "discount dropped at {value}");
            prev = next;
        }
    }

    #[test]
    fn compounds_sequentially_not_additively() {
        // 2 months → 15%, 3 items → 10%: 100 × 0.85 × 0.90 = 76.50.
        let time = time_discounts().resolve(2);
        let items = item_discounts().resolve(3);

        let price = Decimal::ONE_HUNDRED
            * time.complement().fraction()
            * items.complement().fraction();

        assert_eq!(price, "76.50".parse().unwrap());
    }

    #[test]
    fn rejects_zero_threshold() {
        assert_eq!(
            TimeDiscounts::new(vec![tier(0, "10")]),
            Err(InvalidDiscountScheduleError::ZeroThreshold),
        );
    }

    #[test]
    fn rejects_full_discount() {
        assert_eq!(
            TimeDiscounts::new(vec![tier(1, "100")]),
            Err(InvalidDiscountScheduleError::FullDiscount { threshold: 1 }),
        );
        assert!(TimeDiscounts::new(vec![tier(1, "99.99")]).is_ok());
    }

    #[test]
    fn rejects_non_increasing_thresholds() {
        assert_eq!(
            TimeDiscounts::new(vec![tier(2, "10"), tier(2, "15")]),
            Err(InvalidDiscountScheduleError::NonIncreasingThresholds {
                threshold: 2,
            }),
        );
        assert_eq!(
            TimeDiscounts::new(vec![tier(3, "10"), tier(1, "15")]),
            Err(InvalidDiscountScheduleError::NonIncreasingThresholds {
                threshold: 1,
            }),
        );
    }
}
