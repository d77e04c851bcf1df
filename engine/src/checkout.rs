//! Checkout total computation.
//!
//! The one place a binding total is produced. Subtotals are carried
//! unrounded through the whole computation; the single half-up rounding
//! happens at the service-fee step.

use common::{money::Currency, Money, Percent};
use derive_more::{Display, Error, From};
use rust_decimal::Decimal;
use tracerr::Traced;
use tracing as log;

use crate::{
    domain::{
        order,
        order::{Quantity, RentalSpan},
        Listing,
    },
    pricing::{self, InvalidDurationError},
};

/// [`Calculator`] configuration.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    /// Platform fee charged on top of the discounted subtotal.
    pub service_fee: Percent,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            service_fee: Percent::new(Decimal::TEN).expect("infallible"),
        }
    }
}

/// Draft of an order being checked out.
#[derive(Clone, Debug)]
pub struct Draft {
    /// Lines of the cart.
    pub line_items: Vec<LineItemDraft>,

    /// [`RentalSpan`] the whole cart is rented for.
    pub span: RentalSpan,
}

/// Cart line holding a snapshot of the [`Listing`] being rented.
#[derive(Clone, Debug)]
pub struct LineItemDraft {
    /// Snapshot of the rented [`Listing`].
    pub listing: Listing,

    /// Number of units rented.
    pub quantity: Quantity,
}

impl LineItemDraft {
    /// Freezes this draft line into an [`order::LineItem`] snapshot, copying
    /// the day-one daily rate, so that later [`Listing`] edits cannot mutate
    /// the placed order.
    ///
    /// # Errors
    ///
    /// Propagates an [`InvalidDurationError`] as [`ComputeError`].
    pub fn freeze(&self) -> Result<order::LineItem, Traced<ComputeError>> {
        let unit_price_per_day = pricing::daily_rate(
            self.listing.base_price(),
            self.listing.rate_schedule(),
            1,
        )
        .map_err(tracerr::from_and_wrap!(=> ComputeError))?;

        Ok(order::LineItem {
            listing_id: self.listing.id(),
            unit_price_per_day,
            quantity: self.quantity,
        })
    }
}

/// Checkout totals of a [`Draft`].
///
/// Always satisfies `total = subtotal + service_fee`, with no amount ever
/// negative.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Totals {
    /// Discounted sum of all line costs, unrounded.
    pub subtotal: Money,

    /// Platform fee, rounded half-up to the currency's minor unit.
    pub service_fee: Money,

    /// Final amount to be paid: `subtotal + service_fee`.
    pub total: Money,
}

/// Calculator of binding checkout [`Totals`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Calculator {
    /// Configuration of this [`Calculator`].
    config: Config,
}

impl Calculator {
    /// Creates a new [`Calculator`] with the provided [`Config`].
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Computes the [`Totals`] of the provided [`Draft`].
    ///
    /// Per line: the span cost of the listing's rate schedule multiplied by
    /// the quantity, and, for bundles, further scaled by the compounded
    /// `(1 − time discount) × (1 − item discount)` factors resolved from the
    /// span's month count and the bundle's item count.
    ///
    /// Pure and deterministic: identical inputs always produce identical
    /// [`Totals`], and the [`Draft`] is never mutated.
    ///
    /// # Errors
    ///
    /// - [`ComputeError::EmptyCart`] if the [`Draft`] has no lines.
    /// - [`ComputeError::CurrencyMismatch`] if lines are priced in different
    ///   currencies.
    /// - [`ComputeError::InvalidDuration`] propagated from pricing.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    pub fn compute(
        &self,
        draft: &Draft,
    ) -> Result<Totals, Traced<ComputeError>> {
        use ComputeError as E;

        if draft.line_items.is_empty() {
            return Err(tracerr::new!(E::EmptyCart));
        }

        let duration_days = draft.span.duration_days();
        let duration_months = draft.span.duration_months();

        let mut subtotal: Option<Money> = None;
        for line in &draft.line_items {
            let listing = &line.listing;

            let span_cost = pricing::cost_for_span(
                listing.base_price(),
                listing.rate_schedule(),
                duration_days,
            )
            .map_err(tracerr::from_and_wrap!(=> E))?;

            let mut line_cost = span_cost * line.quantity.get();
            if let Listing::Bundle(bundle) = listing {
                let time = bundle.time_discounts.resolve(duration_months);
                let items = bundle.item_discounts.resolve(bundle.item_count());
                line_cost =
                    line_cost * time.complement() * items.complement();
            }

            subtotal = Some(match subtotal {
                None => line_cost,
                Some(sum) => sum
                    .checked_add(line_cost)
                    .ok_or(E::CurrencyMismatch {
                        expected: sum.currency,
                        found: line_cost.currency,
                    })
                    .map_err(tracerr::wrap!())?,
            });
        }
        let subtotal = subtotal.expect("cart is non-empty");

        let service_fee = (subtotal * self.config.service_fee).rounded();
        let total =
            subtotal.checked_add(service_fee).expect("same currency");

        log::debug!(%subtotal, %service_fee, %total, "checkout computed");

        Ok(Totals {
            subtotal,
            service_fee,
            total,
        })
    }
}

/// Error of computing checkout [`Totals`].
#[derive(Clone, Copy, Debug, Display, Eq, Error, From, PartialEq)]
pub enum ComputeError {
    /// Cart contains no line items.
    #[display("cart contains no line items")]
    EmptyCart,

    /// Cart lines are priced in different currencies.
    #[display("cart mixes `{expected}` and `{found}` prices")]
    CurrencyMismatch {
        /// [`Currency`] of the preceding cart lines.
        expected: Currency,

        /// [`Currency`] of the offending cart line.
        found: Currency,
    },

    /// Rental duration cannot be priced.
    #[display("cannot price the rental duration: {_0}")]
    #[from]
    InvalidDuration(InvalidDurationError),
}
