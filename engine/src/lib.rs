//! Pricing, discount and order-lifecycle rules of the rental marketplace.
//!
//! Everything in here is a pure, synchronous computation: the engine takes
//! plain domain data in and returns plain data out, never touching storage,
//! clocks or any other ambient state. "Now" is always an explicit argument.
//!
//! List of available Cargo features:
#![doc = document_features::document_features!()]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::all,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
#![warn(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    clippy::pedantic,
    clippy::wildcard_enum_match_arm,
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_crate_dependencies,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

pub mod checkout;
pub mod discount;
pub mod domain;
pub mod lifecycle;
pub mod pricing;

pub use self::{
    checkout::Calculator,
    domain::{Listing, Order},
    lifecycle::Bucket,
    pricing::RateSchedule,
};
