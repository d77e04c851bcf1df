//! Domain model of the rental marketplace.

pub mod listing;
pub mod order;
pub mod user;

pub use self::{listing::Listing, order::Order};
