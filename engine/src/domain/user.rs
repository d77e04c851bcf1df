//! Marketplace user definitions.
//!
//! A user participates in an [`Order`] either as its renter or as its lister;
//! the engine only ever needs to refer to them by ID.
//!
//! [`Order`]: crate::domain::Order

use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// ID of a marketplace user (a renter or a lister).
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
