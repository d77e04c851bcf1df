//! [`Listing`] definitions.

use common::{define_kind, unit, DateTimeOf, Money};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    discount::{ItemDiscounts, TimeDiscounts},
    domain::user,
    pricing::RateSchedule,
};

/// Rentable listing of the marketplace.
///
/// A [`Listing`] owns its rate and discount schedules. Orders never hold a
/// live reference to a [`Listing`]: they copy the prices they were placed
/// with, so a later edit of a [`Listing`] cannot retroactively change a
/// placed order.
#[derive(Clone, Debug, From)]
pub enum Listing {
    #[doc(hidden)]
    Item(Item),
    #[doc(hidden)]
    Bundle(Bundle),
}

impl Listing {
    /// Returns ID of this [`Listing`].
    #[must_use]
    pub fn id(&self) -> Id {
        match self {
            Self::Item(l) => l.id,
            Self::Bundle(l) => l.id,
        }
    }

    /// Returns [`Kind`] of this [`Listing`].
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Self::Item(_) => Kind::Item,
            Self::Bundle(_) => Kind::Bundle,
        }
    }

    /// Returns ID of the user owning this [`Listing`].
    #[must_use]
    pub fn owner_id(&self) -> user::Id {
        match self {
            Self::Item(l) => l.owner_id,
            Self::Bundle(l) => l.owner_id,
        }
    }

    /// Returns the base value of this [`Listing`] all its tiered daily rates
    /// derive from.
    ///
    /// For a [`Bundle`] this is its suggested price.
    #[must_use]
    pub fn base_price(&self) -> Money {
        match self {
            Self::Item(l) => l.base_price,
            Self::Bundle(l) => l.suggested_price,
        }
    }

    /// Returns the [`RateSchedule`] of this [`Listing`].
    #[must_use]
    pub fn rate_schedule(&self) -> &RateSchedule {
        match self {
            Self::Item(l) => &l.rate_schedule,
            Self::Bundle(l) => &l.rate_schedule,
        }
    }

    /// Returns [`DateTime`] when this [`Listing`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    #[must_use]
    pub fn created_at(&self) -> CreationDateTime {
        match self {
            Self::Item(l) => l.created_at,
            Self::Bundle(l) => l.created_at,
        }
    }
}

/// Single rentable item.
#[derive(Clone, Debug)]
pub struct Item {
    /// ID of this [`Item`].
    pub id: Id,

    /// ID of the user owning this [`Item`].
    pub owner_id: user::Id,

    /// Base value this [`Item`]'s daily rates derive from.
    pub base_price: Money,

    /// [`RateSchedule`] of this [`Item`].
    pub rate_schedule: RateSchedule,

    /// [`DateTime`] when this [`Item`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

/// Set of [`Item`]s rented out together at a single suggested price.
#[derive(Clone, Debug)]
pub struct Bundle {
    /// ID of this [`Bundle`].
    pub id: Id,

    /// ID of the user owning this [`Bundle`].
    pub owner_id: user::Id,

    /// Suggested price this [`Bundle`]'s daily rates derive from.
    pub suggested_price: Money,

    /// [`RateSchedule`] of this [`Bundle`].
    pub rate_schedule: RateSchedule,

    /// IDs of the [`Item`]s this [`Bundle`] consists of.
    pub item_ids: Vec<Id>,

    /// Discounts keyed by rental duration in months.
    pub time_discounts: TimeDiscounts,

    /// Discounts keyed by the number of [`Item`]s in this [`Bundle`].
    pub item_discounts: ItemDiscounts,

    /// [`DateTime`] when this [`Bundle`] was created.
    ///
    /// [`DateTime`]: common::DateTime
    pub created_at: CreationDateTime,
}

impl Bundle {
    /// Returns the number of [`Item`]s in this [`Bundle`], feeding its
    /// item-discount lookup.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn item_count(&self) -> u32 {
        u32::try_from(self.item_ids.len()).expect("fits in `u32`")
    }
}

/// ID of a [`Listing`].
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
    #[doc = "Kind of a [`Listing`]."]
    enum Kind {
        #[doc = "[`Item`] [`Listing`]."]
        Item = 1,

        #[doc = "[`Bundle`] [`Listing`]."]
        Bundle = 2,
    }
}

/// [`DateTime`] when a [`Listing`] was created.
///
/// [`DateTime`]: common::DateTime
pub type CreationDateTime = DateTimeOf<(Listing, unit::Creation)>;
