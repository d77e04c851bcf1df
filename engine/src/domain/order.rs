//! [`Order`] definitions.

use common::{define_kind, unit, Date, DateTimeOf, Money};
use derive_more::{Display, Error, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{listing, user};

/// Placed rental order.
///
/// An [`Order`] is created at checkout and is never deleted afterwards: its
/// [`Status`] is the only field mutated (by renter/lister/admin actions
/// outside this engine), everything else is an immutable snapshot.
#[derive(Clone, Debug)]
pub struct Order {
    /// ID of this [`Order`].
    pub id: Id,

    /// ID of the user renting the listings.
    pub renter_id: user::Id,

    /// ID of the user listing them out.
    pub lister_id: user::Id,

    /// [`LineItem`] snapshots of this [`Order`].
    pub line_items: Vec<LineItem>,

    /// [`RentalSpan`] this [`Order`] covers.
    pub span: RentalSpan,

    /// Current [`Status`] of this [`Order`].
    pub status: Status,

    /// Current [`PaymentStatus`] of this [`Order`].
    pub payment_status: PaymentStatus,

    /// [`DateTime`] when this [`Order`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

/// Line of an [`Order`], snapshotted from a listing at checkout.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct LineItem {
    /// ID of the listing this line was snapshotted from.
    pub listing_id: listing::Id,

    /// Day-one daily rate copied at order creation, so that later listing
    /// edits cannot mutate a placed [`Order`].
    pub unit_price_per_day: Money,

    /// Number of units rented.
    pub quantity: Quantity,
}

/// Number of units on a [`LineItem`], at least `1`.
#[derive(
    Clone, Copy, Debug, Display, Eq, Hash, Into, Ord, PartialEq, PartialOrd,
)]
pub struct Quantity(u32);

impl Quantity {
    /// A [`Quantity`] of a single unit.
    pub const ONE: Self = Self(1);

    /// Creates a new [`Quantity`] by checking the provided value is at least
    /// `1`.
    #[must_use]
    pub fn new(value: u32) -> Option<Self> {
        (value >= 1).then_some(Self(value))
    }

    /// Returns the inner value of this [`Quantity`].
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

/// Inclusive span of calendar days an [`Order`] covers.
///
/// Both ends count: a Friday-to-Sunday weekend is a 3-day span.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RentalSpan {
    /// First rented day.
    start: Date,

    /// Last rented day.
    end: Date,
}

impl RentalSpan {
    /// Creates a new [`RentalSpan`] by checking its `end` doesn't precede
    /// its `start`.
    ///
    /// # Errors
    ///
    /// Returns an [`InvalidSpanError`] otherwise.
    pub fn new(start: Date, end: Date) -> Result<Self, InvalidSpanError> {
        if end < start {
            return Err(InvalidSpanError { start, end });
        }
        Ok(Self { start, end })
    }

    /// Returns the first rented day of this [`RentalSpan`].
    #[must_use]
    pub fn start(&self) -> Date {
        self.start
    }

    /// Returns the last rented day of this [`RentalSpan`].
    #[must_use]
    pub fn end(&self) -> Date {
        self.end
    }

    /// Returns the number of days this [`RentalSpan`] covers, both ends
    /// inclusive.
    ///
    /// Always at least `1`.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn duration_days(&self) -> u32 {
        u32::try_from(self.start.days_until(self.end) + 1)
            .expect("`end` not before `start`")
    }

    /// Returns the number of 30-day months this [`RentalSpan`] covers,
    /// rounded up, as time-discount lookups count them.
    #[must_use]
    pub fn duration_months(&self) -> u32 {
        self.duration_days().div_ceil(30)
    }

    /// Indicates whether this [`RentalSpan`]'s window has lapsed as of
    /// `today`.
    #[must_use]
    pub fn has_lapsed(&self, today: Date) -> bool {
        self.end < today
    }
}

/// Error of creating a [`RentalSpan`] whose end precedes its start.
#[derive(Clone, Copy, Debug, Display, Error, Eq, PartialEq)]
#[display("rental span end `{end}` precedes its start `{start}`")]
pub struct InvalidSpanError {
    /// First rented day of the invalid span.
    pub start: Date,

    /// Last rented day of the invalid span.
    pub end: Date,
}

/// ID of an [`Order`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

define_kind! {
    #[doc = "Status of an [`Order`]."]
    enum Status {
        #[doc = "[`Order`] is placed and awaits the lister's confirmation."]
        Pending = 1,

        #[doc = "[`Order`] is confirmed and is being prepared."]
        Processing = 2,

        #[doc = "[`Order`] is handed over and the rental is running."]
        Active = 3,

        #[doc = "[`Order`] is shipped to the renter."]
        Shipped = 4,

        #[doc = "[`Order`] is completed."]
        Completed = 5,

        #[doc = "[`Order`] is returned to the lister."]
        Returned = 6,

        #[doc = "[`Order`] is cancelled before fulfillment."]
        Cancelled = 7,
    }
}

impl Status {
    /// Indicates whether this [`Status`] is settled, meaning no further
    /// fulfillment will happen.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        match self {
            Self::Completed | Self::Returned | Self::Cancelled => true,
            Self::Pending | Self::Processing | Self::Active | Self::Shipped => {
                false
            }
        }
    }

    /// Indicates whether this [`Status`] means the rental is being fulfilled
    /// right now.
    #[must_use]
    pub const fn is_in_progress(self) -> bool {
        match self {
            Self::Active | Self::Shipped => true,
            Self::Pending
            | Self::Processing
            | Self::Completed
            | Self::Returned
            | Self::Cancelled => false,
        }
    }

    /// Indicates whether this [`Status`] means the rental hasn't started yet.
    #[must_use]
    pub const fn is_awaiting_start(self) -> bool {
        match self {
            Self::Pending | Self::Processing => true,
            Self::Active
            | Self::Shipped
            | Self::Completed
            | Self::Returned
            | Self::Cancelled => false,
        }
    }

    /// Indicates whether an [`Order`] may move from this [`Status`] into the
    /// `next` one.
    ///
    /// The engine itself never mutates an [`Order`]'s [`Status`]; this is
    /// advisory for the collaborators that do.
    #[must_use]
    pub const fn can_transition_to(self, next: Self) -> bool {
        match (self, next) {
            (Self::Pending, Self::Processing | Self::Cancelled)
            | (Self::Processing, Self::Active | Self::Shipped | Self::Cancelled)
            | (Self::Active | Self::Shipped, Self::Completed | Self::Returned) => {
                true
            }
            _ => false,
        }
    }
}

define_kind! {
    #[doc = "Payment status of an [`Order`]."]
    enum PaymentStatus {
        #[doc = "Payment is not settled yet."]
        Pending = 1,

        #[doc = "Payment is settled."]
        Paid = 2,

        #[doc = "Payment is refunded."]
        Refunded = 3,
    }
}

/// [`DateTime`] when an [`Order`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Order, unit::Creation)>;

#[cfg(test)]
mod spec {
    use common::Date;

    use super::{Quantity, RentalSpan, Status};

    fn date(s: &str) -> Date {
        s.parse().unwrap()
    }

    fn span(start: &str, end: &str) -> RentalSpan {
        RentalSpan::new(date(start), date(end)).unwrap()
    }

    #[test]
    fn span_counts_both_ends() {
        // Friday to Sunday is a 3-day weekend.
        assert_eq!(span("2024-05-03", "2024-05-05").duration_days(), 3);
        assert_eq!(span("2024-05-03", "2024-05-03").duration_days(), 1);
        assert_eq!(span("2024-05-01", "2024-05-30").duration_days(), 30);
    }

    #[test]
    fn span_rejects_inverted_dates() {
        assert!(RentalSpan::new(date("2024-05-05"), date("2024-05-03"))
            .is_err());
    }

    #[test]
    fn span_months_round_up() {
        assert_eq!(span("2024-05-01", "2024-05-01").duration_months(), 1);
        assert_eq!(span("2024-05-01", "2024-05-30").duration_months(), 1);
        assert_eq!(span("2024-05-01", "2024-05-31").duration_months(), 2);
        assert_eq!(span("2024-01-01", "2024-06-28").duration_months(), 6);
    }

    #[test]
    fn span_lapses_strictly_after_end() {
        let s = span("2024-05-03", "2024-05-05");

        assert!(!s.has_lapsed(date("2024-05-05")));
        assert!(s.has_lapsed(date("2024-05-06")));
        assert!(!s.has_lapsed(date("2024-05-01")));
    }

    #[test]
    fn quantity_is_at_least_one() {
        assert_eq!(Quantity::new(0), None);
        assert_eq!(Quantity::new(1), Some(Quantity::ONE));
        assert_eq!(Quantity::new(4).unwrap().get(), 4);
    }

    #[test]
    fn status_predicates_partition() {
        use Status as S;

        for status in [
            S::Pending,
            S::Processing,
            S::Active,
            S::Shipped,
            S::Completed,
            S::Returned,
            S::Cancelled,
        ] {
            let matched = [
                status.is_settled(),
                status.is_in_progress(),
                status.is_awaiting_start(),
            ]
            .into_iter()
            .filter(|m| *m)
            .count();

            assert_eq!(matched, 1, "{status} matches exactly one predicate");
        }
    }

    #[test]
    fn status_transitions() {
        use Status as S;

        assert!(S::Pending.can_transition_to(S::Processing));
        assert!(S::Pending.can_transition_to(S::Cancelled));
        assert!(S::Processing.can_transition_to(S::Active));
        assert!(S::Processing.can_transition_to(S::Shipped));
        assert!(S::Processing.can_transition_to(S::Cancelled));
        assert!(S::Active.can_transition_to(S::Completed));
        assert!(S::Shipped.can_transition_to(S::Returned));

        assert!(!S::Active.can_transition_to(S::Cancelled));
        assert!(!S::Shipped.can_transition_to(S::Cancelled));
        assert!(!S::Pending.can_transition_to(S::Active));
        assert!(!S::Completed.can_transition_to(S::Pending));
        assert!(!S::Cancelled.can_transition_to(S::Processing));
    }
}
