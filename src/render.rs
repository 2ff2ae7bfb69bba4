//! Product detail page composition.
//!
//! Takes a resolved payload and produces the final HTML document with
//! [maud](https://maud.lambda.xyz/). Composition is presentation glue:
//! reconciled images feed the gallery, the offer summary feeds the price
//! block and the purchase branch, and every outward-facing widget comes
//! in through [`Collaborators`]. Rendering is infallible — a payload that
//! parsed at all renders to something, with each missing optional field
//! falling back (description omitted, pricing row skipped, out-of-stock
//! view, empty gallery).
//!
//! The only page-level state branch is payload presence: `None` routes to
//! the not-found view. A successful detail render emits exactly one
//! `view_item` event to the injected analytics sink.

use crate::analytics::{self, AnalyticsSink};
use crate::config::{self, PageConfig, SectionConfig};
use crate::format::format_price;
use crate::images;
use crate::layout::{GalleryArrangement, Layout, select_layout};
use crate::offer::OfferSummary;
use crate::types::{BreadcrumbList, Image, Product, ProductDetailsPage};
use crate::widgets::{CartRequest, Collaborators, ShippingItem};
use maud::{DOCTYPE, Markup, PreEscaped, html};
use pulldown_cmark::{Parser, html as md_html};

const CSS_STATIC: &str = include_str!("../static/style.css");

/// Currency used when the offer data carries none.
const FALLBACK_CURRENCY: &str = "BRL";

/// Render the full HTML document for a payload (or its absence).
pub fn render_document(
    page: Option<&ProductDetailsPage>,
    config: &PageConfig,
    collaborators: &Collaborators,
    sink: &dyn AnalyticsSink,
) -> Markup {
    let color_css = config::generate_color_css(&config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);
    let title = match page {
        Some(page) => format!("{} | {}", page.product.name, config.page.store_name),
        None => format!("P\u{e1}gina n\u{e3}o encontrada | {}", config.page.store_name),
    };
    base_document(&title, &css, render_page(page, config, collaborators, sink))
}

/// Render the page body: the detail view, or the not-found view when the
/// loader signalled absence.
pub fn render_page(
    page: Option<&ProductDetailsPage>,
    config: &PageConfig,
    collaborators: &Collaborators,
    sink: &dyn AnalyticsSink,
) -> Markup {
    html! {
        div.container {
            @if let Some(page) = page {
                (details(page, config, collaborators, sink))
            } @else {
                (not_found(config))
            }
        }
    }
}

/// Renders the base HTML document structure.
fn base_document(title: &str, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                style { (css) }
            }
            body {
                (content)
            }
        }
    }
}

/// Rendered when the loader returns not-found for the requested product.
fn not_found(config: &PageConfig) -> Markup {
    html! {
        div.not-found {
            span.not-found-title { "P\u{e1}gina n\u{e3}o encontrada" }
            a.btn href=(config.page.home_url) { "Voltar \u{e0} p\u{e1}gina inicial" }
        }
    }
}

fn details(
    page: &ProductDetailsPage,
    config: &PageConfig,
    collaborators: &Collaborators,
    sink: &dyn AnalyticsSink,
) -> Markup {
    let siblings = page
        .product
        .is_variant_of
        .as_ref()
        .map(|group| group.has_variant.as_slice())
        .unwrap_or(&[]);
    let images = images::reconcile(&page.product.image, siblings);
    let layout = select_layout(config.page.layout, Some(images.len()));
    let summary = OfferSummary::resolve(page.product.offers.as_ref());

    // One view_item per successful render, fired before any widget runs
    // so a collaborator panic cannot double-emit on retry.
    sink.emit(&analytics::view_item(page, &summary));

    let info = product_info(page, &summary, config, collaborators);

    match layout {
        Layout::Slider => html! {
            div.product-details.product-details--slider {
                (gallery_slider(&images, config))
                div.product-info-column { (info) }
            }
        },
        Layout::FrontBack => html! {
            div.product-details.product-details--front-back {
                (gallery_front_back(&images, config))
                div.product-info-column { (info) }
            }
        },
    }
}

// ============================================================================
// Galleries
// ============================================================================

fn image_tag(image: &Image, config: &PageConfig, eager: bool) -> Markup {
    html! {
        img src=(image.url)
            alt=(image.alternate_name)
            width=(config.page.image_width)
            height=(config.page.image_height)
            style=(format!("aspect-ratio: {};", config.page.aspect_ratio()))
            loading=(if eager { "eager" } else { "lazy" });
    }
}

/// Carousel with dot previews, arranged per the configured gallery
/// arrangement. The vertical-gallery arrangement drops the carousel for a
/// two-column grid where the third image spans both columns.
fn gallery_slider(images: &[Image], config: &PageConfig) -> Markup {
    if config.page.gallery == GalleryArrangement::VerticalGallery {
        return gallery_vertical(images, config);
    }

    html! {
        div class=(format!("product-gallery {}", config.page.gallery.css_class())) {
            div.gallery-carousel {
                ul.carousel {
                    @for (index, image) in images.iter().enumerate() {
                        li.carousel-item data-index=(index) {
                            (image_tag(image, config, index == 0))
                        }
                    }
                }
                button.carousel-prev disabled { "\u{2039}" }
                button.carousel-next disabled[images.len() < 2] { "\u{203a}" }
            }
            ul.gallery-dots {
                @for (index, image) in images.iter().take(4).enumerate() {
                    li {
                        button.gallery-dot data-index=(index) {
                            img src=(image.url) alt=(image.alternate_name) loading="lazy";
                        }
                    }
                }
            }
        }
    }
}

fn gallery_vertical(images: &[Image], config: &PageConfig) -> Markup {
    html! {
        div.product-gallery.gallery-vertical {
            @for (index, image) in images.iter().enumerate() {
                @let span = index == 2;
                div class=(if span { "gallery-cell gallery-cell--wide" } else { "gallery-cell" }) {
                    (image_tag(image, config, index == 0))
                }
            }
        }
    }
}

/// Two images side by side; a single image renders twice, front and back
/// being the same photo is better than an empty box.
fn gallery_front_back(images: &[Image], config: &PageConfig) -> Markup {
    let pair: Vec<&Image> = match images {
        [] => vec![],
        [only] => vec![only, only],
        [first, second, ..] => vec![first, second],
    };
    html! {
        ul.product-gallery.gallery-front-back {
            @for (index, image) in pair.iter().enumerate() {
                li.gallery-cell {
                    (image_tag(image, config, index == 0))
                }
            }
        }
    }
}

// ============================================================================
// Product info column
// ============================================================================

fn product_info(
    page: &ProductDetailsPage,
    summary: &OfferSummary,
    config: &PageConfig,
    collaborators: &Collaborators,
) -> Markup {
    let product = &page.product;
    let group_id = product
        .is_variant_of
        .as_ref()
        .map(|group| group.product_group_id.as_str());

    html! {
        (breadcrumb(&page.breadcrumb_list))
        div.product-heading {
            @if let Some(gtin) = &product.gtin {
                span.product-code { "Cod. " (gtin) }
            }
            h1.product-name { (product.name) }
            @if let Some(description) = &product.description {
                span.product-description { (description) }
            }
        }
        (price_block(summary))
        div.sku-selector-block {
            (collaborators.selector.render(product))
        }
        (purchase_block(product, summary, group_id, collaborators))
        div.shipping-block {
            (collaborators.shipping.render(&shipping_items(product, summary)))
        }
        (notify_form())
        (info_sections(&config.sections))
    }
}

/// Breadcrumb trail, dropping the last entry — that's the page itself.
fn breadcrumb(list: &BreadcrumbList) -> Markup {
    let trail = &list.item_list_element;
    let shown = trail.len().saturating_sub(1);
    html! {
        nav.breadcrumb {
            @for (index, item) in trail[..shown].iter().enumerate() {
                @if index > 0 { " \u{203a} " }
                a href=(item.item) { (item.name) }
            }
        }
    }
}

/// List price struck through, current price, installment line. Rows the
/// summary lacks are skipped, never rendered empty.
fn price_block(summary: &OfferSummary) -> Markup {
    let currency = summary.currency.as_deref().unwrap_or(FALLBACK_CURRENCY);
    html! {
        @if let Some(price) = summary.price {
            div.price-block {
                div.price-row {
                    @if let Some(list_price) = summary.list_price {
                        span.price-list { (format_price(list_price, currency)) }
                    }
                    span.price-current { (format_price(price, currency)) }
                }
                @if let Some(installments) = &summary.installments {
                    span.price-installments { (installments) }
                }
            }
        }
    }
}

fn purchase_block(
    product: &Product,
    summary: &OfferSummary,
    group_id: Option<&str>,
    collaborators: &Collaborators,
) -> Markup {
    html! {
        div.purchase-block {
            @if summary.purchasable() {
                @let request = CartRequest {
                    sku_id: product.product_id.clone(),
                    seller_id: summary.seller.clone().unwrap_or_default(),
                    price: summary.price.unwrap_or(0.0),
                    discount: summary.discount(),
                    name: product.name.clone(),
                    product_group_id: group_id.unwrap_or("").to_string(),
                };
                (collaborators.cart.render(&request))
                (collaborators.wishlist.render(&product.product_id, group_id))
            } @else {
                div.out-of-stock data-product-id=(product.product_id) {
                    span.out-of-stock-title { "Produto indispon\u{ed}vel" }
                }
            }
        }
    }
}

fn shipping_items(product: &Product, summary: &OfferSummary) -> Vec<ShippingItem> {
    vec![ShippingItem {
        id: product.sku.parse().unwrap_or(0),
        quantity: 1,
        seller: summary.seller.clone().unwrap_or_else(|| "1".to_string()),
    }]
}

/// Back-in-stock email form. Static markup; submission is handled by the
/// storefront script like every other widget surface.
fn notify_form() -> Markup {
    html! {
        div.notify-block {
            h2.notify-title { "Me notifique quando o produto estiver dispon\u{ed}vel" }
            form.notify-form {
                label for="notify-email" { "E-mail" }
                input #notify-email type="email" placeholder="seu.email@exemplo.com";
                button type="submit" { "Notifique-me" }
            }
        }
    }
}

/// Informational accordions from config, markdown bodies converted to
/// HTML.
fn info_sections(sections: &[SectionConfig]) -> Markup {
    html! {
        @for section in sections {
            details.info-section {
                summary.info-section-title { (section.title) }
                div.info-section-body { (PreEscaped(markdown_to_html(&section.body))) }
            }
        }
    }
}

fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::new();
    md_html::push_html(&mut out, parser);
    out
}
