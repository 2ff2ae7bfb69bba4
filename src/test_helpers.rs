//! Shared payload fixtures for the vitrine test suite.
//!
//! Builders mirror what the upstream data loader produces: a product
//! group of sibling SKUs sharing image filenames under different asset
//! URLs, with breadcrumb and offer data attached.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let page = sample_page();
//! assert_eq!(page.product.name, "White Dress");
//! ```

use crate::types::{
    AggregateOffer, Availability, BreadcrumbList, Image, ListItem, Offer, Product,
    ProductDetailsPage, ProductGroup,
};

const FILE_NAMES: [&str; 5] = ["a.jpg", "b.jpg", "c.jpg", "d.jpg", "e.jpg"];

fn image(asset_id: u32, file_name: &str, alt: &str) -> Image {
    Image {
        url: format!("https://cdn.example/ids/{asset_id}/{file_name}"),
        alternate_name: alt.to_string(),
    }
}

fn images_from(base_asset_id: u32) -> Vec<Image> {
    FILE_NAMES
        .iter()
        .enumerate()
        .map(|(index, name)| image(base_asset_id + index as u32, name, &format!("view {index}")))
        .collect()
}

fn variant(product_id: &str, name: &str, base_asset_id: u32) -> Product {
    Product {
        product_id: product_id.to_string(),
        sku: product_id.to_string(),
        gtin: None,
        name: name.to_string(),
        description: None,
        image: images_from(base_asset_id),
        is_variant_of: None,
        offers: None,
    }
}

fn offer(availability: Availability, seller: Option<&str>) -> AggregateOffer {
    AggregateOffer {
        price_currency: Some("BRL".to_string()),
        offers: vec![Offer {
            price: 129.9,
            list_price: Some(159.9),
            seller: seller.map(String::from),
            installments: Some("3x de R$ 43.30".to_string()),
            availability,
        }],
    }
}

fn breadcrumbs() -> BreadcrumbList {
    BreadcrumbList {
        item_list_element: vec![
            ListItem {
                name: "Home".to_string(),
                item: "/".to_string(),
                position: 1,
            },
            ListItem {
                name: "Dresses".to_string(),
                item: "/dresses".to_string(),
                position: 2,
            },
            ListItem {
                name: "White Dress".to_string(),
                item: "/dresses/white-dress".to_string(),
                position: 3,
            },
        ],
    }
}

/// An in-stock SKU with five images, a sibling variant sharing the same
/// filenames under different asset URLs (the sibling's list comes last,
/// so its URLs are canonical), a three-entry breadcrumb trail, and a
/// seller-backed offer.
pub fn sample_page() -> ProductDetailsPage {
    let mut product = variant("42", "White Dress", 100);
    product.gtin = Some("7890000000421".to_string());
    product.description = Some("Cotton midi dress.".to_string());
    product.offers = Some(offer(Availability::InStock, Some("1")));
    product.is_variant_of = Some(ProductGroup {
        product_group_id: "7".to_string(),
        name: Some("Dress".to_string()),
        has_variant: vec![
            variant("42", "White Dress", 100),
            variant("43", "Pink Dress", 200),
        ],
    });

    ProductDetailsPage {
        breadcrumb_list: breadcrumbs(),
        product,
    }
}

/// Same SKU, but no seller has stock.
pub fn out_of_stock_page() -> ProductDetailsPage {
    let mut page = sample_page();
    page.product.offers = Some(offer(Availability::OutOfStock, Some("1")));
    page
}

/// A SKU with a single image and no product group.
pub fn single_image_page() -> ProductDetailsPage {
    let mut page = sample_page();
    page.product.image = vec![image(1, "only.jpg", "the only view")];
    page.product.is_variant_of = None;
    page
}
