//! View-item analytics event and the sink capability.
//!
//! The composer fires exactly one `view_item` event per successful detail
//! render — never for the not-found view. Dispatch is not this crate's
//! concern: the event goes to an injected [`AnalyticsSink`] and whatever
//! that does with it (queue, POST, drop) is fire-and-forget.

use crate::offer::OfferSummary;
use crate::types::ProductDetailsPage;
use serde::Serialize;
use std::cell::RefCell;

/// A `view_item` event with its structured item list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewItemEvent {
    pub name: &'static str,
    pub params: ViewItemParams,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewItemParams {
    pub items: Vec<AnalyticsItem>,
}

/// One item in the event payload, mapped from the product and its
/// breadcrumb context.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsItem {
    pub item_id: String,
    pub item_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_variant: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_group_id: Option<String>,
    /// Breadcrumb trail joined with " / ", current page excluded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_price: Option<f64>,
    pub discount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    pub quantity: u32,
}

/// Build the `view_item` event for a detail render.
pub fn view_item(page: &ProductDetailsPage, summary: &OfferSummary) -> ViewItemEvent {
    let trail = &page.breadcrumb_list.item_list_element;
    let category = match trail.len() {
        0 | 1 => None,
        n => Some(
            trail[..n - 1]
                .iter()
                .map(|item| item.name.as_str())
                .collect::<Vec<_>>()
                .join(" / "),
        ),
    };

    ViewItemEvent {
        name: "view_item",
        params: ViewItemParams {
            items: vec![AnalyticsItem {
                item_id: page.product.product_id.clone(),
                item_name: page.product.name.clone(),
                item_variant: (!page.product.sku.is_empty()).then(|| page.product.sku.clone()),
                item_group_id: page
                    .product
                    .is_variant_of
                    .as_ref()
                    .map(|group| group.product_group_id.clone()),
                item_category: category,
                price: summary.price,
                list_price: summary.list_price,
                discount: summary.discount(),
                currency: summary.currency.clone(),
                quantity: 1,
            }],
        },
    }
}

/// Where events go. Fire-and-forget: implementations must not fail the
/// render, so `emit` returns nothing.
pub trait AnalyticsSink {
    fn emit(&self, event: &ViewItemEvent);
}

/// Drops every event.
pub struct NullSink;

impl AnalyticsSink for NullSink {
    fn emit(&self, _event: &ViewItemEvent) {}
}

/// Collects events in memory. The CLI renders against one of these and
/// writes the collected events out afterwards; tests use it to assert on
/// emission counts.
#[derive(Default)]
pub struct RecordingSink {
    events: RefCell<Vec<ViewItemEvent>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ViewItemEvent> {
        self.events.borrow().clone()
    }
}

impl AnalyticsSink for RecordingSink {
    fn emit(&self, event: &ViewItemEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}
