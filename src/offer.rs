//! Offer summary resolution.
//!
//! A SKU's aggregate offer lists one entry per seller. The page shows a
//! single price block, so the offers collapse into one [`OfferSummary`]:
//! the first in-stock offer if any seller has stock, otherwise the first
//! offer of any availability (its price still renders, struck through
//! the purchase path by the out-of-stock branch).
//!
//! Every field is optional: a product with no offer data at all still
//! renders, it just skips the pricing rows and routes to the
//! out-of-stock view.

use crate::types::{AggregateOffer, Availability};

/// The single offer the page renders, collapsed from an aggregate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OfferSummary {
    pub price: Option<f64>,
    pub list_price: Option<f64>,
    pub currency: Option<String>,
    pub seller: Option<String>,
    pub installments: Option<String>,
    pub availability: Availability,
}

impl OfferSummary {
    /// Collapse an optional aggregate offer into the summary the page
    /// renders. `None` (or an empty offer list) yields the all-`None`
    /// summary with `OutOfStock` availability.
    pub fn resolve(offers: Option<&AggregateOffer>) -> Self {
        let Some(aggregate) = offers else {
            return OfferSummary::default();
        };
        let offer = aggregate
            .offers
            .iter()
            .find(|o| o.availability == Availability::InStock)
            .or_else(|| aggregate.offers.first());
        let Some(offer) = offer else {
            return OfferSummary::default();
        };
        OfferSummary {
            price: Some(offer.price),
            list_price: offer.list_price,
            currency: aggregate.price_currency.clone(),
            seller: offer.seller.clone(),
            installments: offer.installments.clone(),
            availability: offer.availability,
        }
    }

    /// Whether the purchase path renders: in stock and with a seller to
    /// direct the add-to-cart request at.
    pub fn purchasable(&self) -> bool {
        self.availability == Availability::InStock && self.seller.is_some()
    }

    /// List-price discount, zero when either side is missing.
    pub fn discount(&self) -> f64 {
        match (self.price, self.list_price) {
            (Some(price), Some(list)) => list - price,
            _ => 0.0,
        }
    }
}
