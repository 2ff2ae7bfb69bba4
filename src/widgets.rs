//! Collaborator capabilities injected into the page composer.
//!
//! Cart mutation, wishlist storage, shipping computation and variant
//! switching all live outside this crate. The composer only needs markup
//! for each of them, so every collaborator is a trait with a single
//! `render` method, and the whole set travels as one [`Collaborators`]
//! struct. The reconciler/selector core never touches these, which keeps
//! it testable with no widget in sight.
//!
//! The stock implementations render plain storefront markup: buttons and
//! forms carrying `data-*` attributes for whatever client-side script the
//! site ships. Swap any of them out by passing your own box.

use crate::types::Product;
use maud::{Markup, html};
use serde::Serialize;

/// Everything the composer asks an add-to-cart widget to carry.
#[derive(Debug, Clone, PartialEq)]
pub struct CartRequest {
    pub sku_id: String,
    pub seller_id: String,
    pub price: f64,
    pub discount: f64,
    pub name: String,
    pub product_group_id: String,
}

/// One line of a shipping estimate request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShippingItem {
    pub id: u64,
    pub quantity: u32,
    pub seller: String,
}

pub trait VariantSelector {
    fn render(&self, product: &Product) -> Markup;
}

pub trait CartWidget {
    fn render(&self, request: &CartRequest) -> Markup;
}

pub trait WishlistWidget {
    fn render(&self, product_id: &str, product_group_id: Option<&str>) -> Markup;
}

pub trait ShippingWidget {
    fn render(&self, items: &[ShippingItem]) -> Markup;
}

/// The full collaborator set the composer receives.
pub struct Collaborators {
    pub selector: Box<dyn VariantSelector>,
    pub cart: Box<dyn CartWidget>,
    pub wishlist: Box<dyn WishlistWidget>,
    pub shipping: Box<dyn ShippingWidget>,
}

impl Collaborators {
    /// The stock storefront widgets.
    pub fn stock() -> Self {
        Collaborators {
            selector: Box::new(StockVariantSelector),
            cart: Box::new(StockCartWidget),
            wishlist: Box::new(StockWishlistWidget),
            shipping: Box::new(StockShippingWidget),
        }
    }
}

/// Renders the sibling SKUs of the product group as pick buttons, the
/// current SKU marked. A product with no group renders nothing.
pub struct StockVariantSelector;

impl VariantSelector for StockVariantSelector {
    fn render(&self, product: &Product) -> Markup {
        let Some(group) = &product.is_variant_of else {
            return html! {};
        };
        html! {
            ul.sku-selector {
                @for variant in &group.has_variant {
                    @let current = variant.product_id == product.product_id;
                    li {
                        button.sku-option.sku-option--current[current]
                            data-sku=(variant.sku)
                            disabled[current]
                        {
                            (variant.name)
                        }
                    }
                }
            }
        }
    }
}

pub struct StockCartWidget;

impl CartWidget for StockCartWidget {
    fn render(&self, request: &CartRequest) -> Markup {
        html! {
            button.btn-add-to-cart
                data-sku=(request.sku_id)
                data-seller=(request.seller_id)
                data-price=(format!("{:.2}", request.price))
                data-discount=(format!("{:.2}", request.discount))
                data-name=(request.name)
                data-product-group=(request.product_group_id)
            {
                "Adicionar ao carrinho"
            }
        }
    }
}

pub struct StockWishlistWidget;

impl WishlistWidget for StockWishlistWidget {
    fn render(&self, product_id: &str, product_group_id: Option<&str>) -> Markup {
        html! {
            button.btn-wishlist
                data-product-id=(product_id)
                data-product-group=[product_group_id]
            {
                span.wishlist-heart { "\u{2661}" }
                " Favoritar"
            }
        }
    }
}

/// Postal-code form carrying the estimate request as a JSON data
/// attribute for the shipping script.
pub struct StockShippingWidget;

impl ShippingWidget for StockShippingWidget {
    fn render(&self, items: &[ShippingItem]) -> Markup {
        let payload = serde_json::to_string(items).unwrap_or_else(|_| "[]".to_string());
        html! {
            form.shipping-simulation data-items=(payload) {
                label for="shipping-postal-code" { "Calcular frete" }
                input #shipping-postal-code
                    type="text"
                    name="postal-code"
                    placeholder="00000-000";
                button type="submit" { "Calcular" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_page;

    #[test]
    fn selector_lists_sibling_skus() {
        let page = sample_page();
        let html = StockVariantSelector.render(&page.product).into_string();
        assert!(html.contains("sku-selector"));
        assert!(html.contains("White Dress"));
        assert!(html.contains("Pink Dress"));
    }

    #[test]
    fn selector_marks_current_sku() {
        let page = sample_page();
        let html = StockVariantSelector.render(&page.product).into_string();
        assert!(html.contains("sku-option--current"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn selector_without_group_renders_nothing() {
        let mut page = sample_page();
        page.product.is_variant_of = None;
        let html = StockVariantSelector.render(&page.product).into_string();
        assert!(html.is_empty());
    }

    #[test]
    fn cart_button_carries_request_data() {
        let request = CartRequest {
            sku_id: "42".to_string(),
            seller_id: "1".to_string(),
            price: 129.9,
            discount: 30.0,
            name: "White Dress".to_string(),
            product_group_id: "7".to_string(),
        };
        let html = StockCartWidget.render(&request).into_string();
        assert!(html.contains(r#"data-sku="42""#));
        assert!(html.contains(r#"data-seller="1""#));
        assert!(html.contains(r#"data-price="129.90""#));
        assert!(html.contains(r#"data-discount="30.00""#));
        assert!(html.contains(r#"data-product-group="7""#));
    }

    #[test]
    fn wishlist_omits_group_attribute_when_absent() {
        let html = StockWishlistWidget.render("42", None).into_string();
        assert!(html.contains(r#"data-product-id="42""#));
        assert!(!html.contains("data-product-group"));
    }

    #[test]
    fn shipping_form_embeds_items_as_json() {
        let items = vec![ShippingItem {
            id: 42,
            quantity: 1,
            seller: "1".to_string(),
        }];
        let html = StockShippingWidget.render(&items).into_string();
        assert!(html.contains("shipping-simulation"));
        // Maud escapes the quotes inside the JSON attribute value.
        assert!(html.contains("&quot;id&quot;:42"));
        assert!(html.contains("&quot;seller&quot;:&quot;1&quot;"));
    }
}
