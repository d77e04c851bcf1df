//! Order lifecycle classification.
//!
//! Rentals views never group orders by their raw status: they group by the
//! coarser [`Bucket`], derived from the status and the rental span relative
//! to an explicit "today". Which party's orders are classified (the renter's
//! or the lister's) is a query concern of the caller, not a classification
//! one: the rules here are identical for both audiences.

use common::{define_kind, Date};
use derive_more::{Display, Error};

use crate::domain::{order, Order};

define_kind! {
    #[doc = "Lifecycle bucket of an [`Order`]."]
    enum Bucket {
        #[doc = "[`Order`] whose rental is running right now."]
        Active = 1,

        #[doc = "[`Order`] whose rental has not started yet."]
        Upcoming = 2,

        #[doc = "[`Order`] that is settled or whose window has lapsed."]
        Past = 3,
    }
}

/// Classifies the provided [`Order`] into exactly one [`Bucket`] as of
/// `today`.
///
/// Rules, in precedence order:
/// 1. A settled status ([`Completed`]/[`Returned`]/[`Cancelled`]) is `Past`,
///    even if the rental window lies in the future.
/// 2. A lapsed rental window is `Past`, even if the status was never
///    updated from [`Active`].
/// 3. An in-progress status ([`Active`]/[`Shipped`]) is `Active`.
/// 4. An awaiting status ([`Pending`]/[`Processing`]) is `Upcoming`.
///
/// [`Active`]: order::Status::Active
/// [`Cancelled`]: order::Status::Cancelled
/// [`Completed`]: order::Status::Completed
/// [`Pending`]: order::Status::Pending
/// [`Processing`]: order::Status::Processing
/// [`Returned`]: order::Status::Returned
/// [`Shipped`]: order::Status::Shipped
///
/// # Errors
///
/// Returns an [`UnclassifiableOrderError`] if no rule matches. Unreachable
/// for a well-formed [`order::Status`]; exists to catch schema drift.
pub fn classify(
    order: &Order,
    today: Date,
) -> Result<Bucket, UnclassifiableOrderError> {
    let status = order.status;

    if status.is_settled() {
        return Ok(Bucket::Past);
    }

    if order.span.has_lapsed(today) {
        return Ok(Bucket::Past);
    }

    if status.is_in_progress() {
        return Ok(Bucket::Active);
    }

    if status.is_awaiting_start() {
        return Ok(Bucket::Upcoming);
    }

    Err(UnclassifiableOrderError {
        id: order.id,
        status,
    })
}

/// Error of classifying an [`Order`] no lifecycle rule matches.
#[derive(Clone, Copy, Debug, Display, Eq, Error, PartialEq)]
#[display("`Order(id: {id})` with status `{status}` matches no lifecycle rule")]
pub struct UnclassifiableOrderError {
    /// ID of the unclassifiable [`Order`].
    pub id: order::Id,

    /// [`order::Status`] no rule matched.
    pub status: order::Status,
}

/// [`Order`]s grouped by their [`Bucket`].
#[derive(Clone, Debug, Default)]
pub struct Grouped {
    /// [`Bucket::Active`] orders.
    pub active: Vec<Order>,

    /// [`Bucket::Upcoming`] orders.
    pub upcoming: Vec<Order>,

    /// [`Bucket::Past`] orders.
    pub past: Vec<Order>,
}

/// Groups the provided [`Order`]s by their [`Bucket`] as of `today`,
/// preserving their relative order within every group.
///
/// # Errors
///
/// Returns an [`UnclassifiableOrderError`] if any order cannot be
/// classified.
pub fn group(
    orders: impl IntoIterator<Item = Order>,
    today: Date,
) -> Result<Grouped, UnclassifiableOrderError> {
    let mut grouped = Grouped::default();
    for order in orders {
        match classify(&order, today)? {
            Bucket::Active => grouped.active.push(order),
            Bucket::Upcoming => grouped.upcoming.push(order),
            Bucket::Past => grouped.past.push(order),
        }
    }

    Ok(grouped)
}
