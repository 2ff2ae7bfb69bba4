//! CLI output formatting.
//!
//! Output is information-centric: the primary line for a render is the
//! product's identity (id + name), with the decisions that shaped the
//! page — layout, availability branch, price — as indented context lines.
//! Format functions are pure and return `Vec<String>` for testability;
//! `print_*` wrappers write to stdout.

use crate::layout::Layout;
use crate::offer::OfferSummary;
use crate::types::{Availability, ProductDetailsPage};

/// Summarize what a payload renders to.
pub fn format_render_output(
    page: Option<&ProductDetailsPage>,
    layout: Layout,
    summary: &OfferSummary,
) -> Vec<String> {
    let Some(page) = page else {
        return vec!["Not found \u{2192} not-found view".to_string()];
    };

    let product = &page.product;
    let branch = if summary.purchasable() {
        "add-to-cart"
    } else {
        "out-of-stock"
    };
    let availability = match summary.availability {
        Availability::InStock => "in stock",
        Availability::OutOfStock => "out of stock",
        Availability::PreOrder => "pre-order",
        Availability::Discontinued => "discontinued",
    };

    let mut lines = vec![
        format!("Product {} {}", product.product_id, product.name),
        format!(
            "    Images: {} ({})",
            product.image.len(),
            layout.as_str()
        ),
        format!("    Availability: {availability} \u{2192} {branch}"),
    ];
    if let Some(price) = summary.price {
        let currency = summary.currency.as_deref().unwrap_or("");
        lines.push(format!("    Price: {price:.2} {currency}").trim_end().to_string());
    }
    lines
}

pub fn print_render_output(
    page: Option<&ProductDetailsPage>,
    layout: Layout,
    summary: &OfferSummary,
) {
    for line in format_render_output(page, layout, summary) {
        println!("{line}");
    }
}
