//! Stable image URL resolution across sibling SKUs.
//!
//! Some catalogs store the same photo once per SKU: siblings of one
//! product group each carry `a.jpg`, `b.jpg`, `c.jpg`, but every SKU
//! gets its own asset URL for them. Swapping the selected SKU then swaps
//! every image URL on the page and the gallery flashes while the browser
//! re-downloads pixels it already has.
//!
//! [`reconcile`] maps same-named files to one canonical URL so that every
//! sibling renders identical `src` attributes. The match key is the last
//! path segment of the asset URL — `.../ids/123/a.jpg` and
//! `.../ids/321/a.jpg` both key on `a.jpg`. This is deliberately catalog
//! dependent: it assumes filenames are meaningful across siblings, which
//! holds for CDN layouts that encode the asset id in the directory, not
//! the filename.
//!
//! ## Guarantees
//!
//! - URLs are never fabricated. An image either gets a sibling's URL for
//!   the same filename or keeps its own, unchanged.
//! - Iteration order is defined: siblings in list order, images in list
//!   order within each sibling, last write wins. The canonical URL for a
//!   shared filename is therefore the last sibling's.
//! - Known quirk, kept on purpose: a URL with no path (or one that is not
//!   a URL at all) yields an empty-string filename, which is a valid map
//!   key. Two malformed URLs will reconcile onto each other.

use crate::types::{Image, Product};
use std::collections::HashMap;

/// Extract the filename of an asset URL: the last segment of the path
/// component, with query and fragment excluded.
///
/// - `"https://cdn/ids/123/a.jpg?v=1"` → `"a.jpg"`
/// - `"https://cdn/"` → `""`
/// - `"not-a-url"` → `""` (no scheme separator)
pub fn image_file_name(url: &str) -> &str {
    let no_fragment = url.split('#').next().unwrap_or("");
    let no_query = no_fragment.split('?').next().unwrap_or("");
    let Some((_, rest)) = no_query.split_once("://") else {
        return "";
    };
    match rest.split_once('/') {
        Some((_, path)) => path.rsplit('/').next().unwrap_or(""),
        None => "",
    }
}

/// Canonicalize image URLs against the sibling variants of a product
/// group.
///
/// Builds a `filename → url` map over every sibling's images, then maps
/// each input image through it: a filename match substitutes the
/// sibling's URL, everything else passes through untouched. Empty input
/// yields empty output; there are no error paths.
pub fn reconcile(images: &[Image], siblings: &[Product]) -> Vec<Image> {
    let mut canonical: HashMap<&str, &str> = HashMap::new();
    for sibling in siblings {
        for image in &sibling.image {
            if !image.url.is_empty() {
                canonical.insert(image_file_name(&image.url), &image.url);
            }
        }
    }

    images
        .iter()
        .map(|image| {
            let name = image_file_name(&image.url);
            match canonical.get(name) {
                Some(url) => Image {
                    url: (*url).to_string(),
                    ..image.clone()
                },
                None => image.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn img(url: &str) -> Image {
        Image {
            url: url.to_string(),
            alternate_name: String::new(),
        }
    }

    fn sku(urls: &[&str]) -> Product {
        Product {
            product_id: "1".to_string(),
            sku: "1".to_string(),
            gtin: None,
            name: "sku".to_string(),
            description: None,
            image: urls.iter().map(|u| img(u)).collect(),
            is_variant_of: None,
            offers: None,
        }
    }

    #[test]
    fn file_name_is_last_path_segment() {
        assert_eq!(image_file_name("https://cdn/ids/123/a.jpg"), "a.jpg");
        assert_eq!(image_file_name("https://cdn/a.jpg"), "a.jpg");
    }

    #[test]
    fn file_name_excludes_query_and_fragment() {
        assert_eq!(image_file_name("https://cdn/ids/1/a.jpg?v=177"), "a.jpg");
        assert_eq!(image_file_name("https://cdn/ids/1/a.jpg#zoom"), "a.jpg");
        assert_eq!(image_file_name("https://cdn/ids/1/a.jpg?v=1#z"), "a.jpg");
    }

    #[test]
    fn file_name_of_malformed_url_is_empty() {
        assert_eq!(image_file_name("not-a-url"), "");
        assert_eq!(image_file_name(""), "");
        assert_eq!(image_file_name("https://cdn"), "");
        assert_eq!(image_file_name("https://cdn/"), "");
    }

    #[test]
    fn no_shared_filenames_is_identity() {
        let images = vec![img("https://x/ids/1/a.jpg"), img("https://x/ids/2/b.jpg")];
        let siblings = vec![sku(&["https://x/ids/9/c.jpg"])];
        assert_eq!(reconcile(&images, &siblings), images);
    }

    #[test]
    fn sibling_with_same_filename_wins() {
        let images = vec![img("https://x/ids/1/a.jpg"), img("https://x/ids/2/b.jpg")];
        let siblings = vec![sku(&["https://x/ids/9/a.jpg"])];
        let out = reconcile(&images, &siblings);
        assert_eq!(out[0].url, "https://x/ids/9/a.jpg");
        assert_eq!(out[1].url, "https://x/ids/2/b.jpg");
    }

    #[test]
    fn last_matching_sibling_wins() {
        let images = vec![img("https://x/ids/1/a.jpg")];
        let siblings = vec![
            sku(&["https://x/ids/100/a.jpg"]),
            sku(&["https://x/ids/200/a.jpg"]),
        ];
        let out = reconcile(&images, &siblings);
        assert_eq!(out[0].url, "https://x/ids/200/a.jpg");
    }

    #[test]
    fn sibling_includes_self_in_practice() {
        // Product groups usually list the current SKU among the variants,
        // so an image reconciles onto its own group-canonical URL.
        let images = vec![img("https://x/ids/1/a.jpg")];
        let siblings = vec![sku(&["https://x/ids/1/a.jpg"]), sku(&["https://x/ids/5/a.jpg"])];
        let out = reconcile(&images, &siblings);
        assert_eq!(out[0].url, "https://x/ids/5/a.jpg");
    }

    #[test]
    fn other_fields_pass_through_unchanged() {
        let images = vec![Image {
            url: "https://x/ids/1/a.jpg".to_string(),
            alternate_name: "front view".to_string(),
        }];
        let siblings = vec![sku(&["https://x/ids/9/a.jpg"])];
        let out = reconcile(&images, &siblings);
        assert_eq!(out[0].alternate_name, "front view");
    }

    #[test]
    fn empty_sibling_urls_are_skipped() {
        let images = vec![img("not-a-url")];
        let siblings = vec![sku(&[""])];
        let out = reconcile(&images, &siblings);
        assert_eq!(out[0].url, "not-a-url");
    }

    #[test]
    fn malformed_urls_share_the_empty_key() {
        // The degenerate empty-string key is a real key: a malformed
        // sibling URL becomes canonical for every malformed input URL.
        let images = vec![img("not-a-url")];
        let siblings = vec![sku(&["also-not-a-url"])];
        let out = reconcile(&images, &siblings);
        assert_eq!(out[0].url, "also-not-a-url");
    }

    #[test]
    fn empty_input_yields_empty_output() {
        let siblings = vec![sku(&["https://x/ids/9/a.jpg"])];
        assert!(reconcile(&[], &siblings).is_empty());
    }

    #[test]
    fn no_siblings_is_identity() {
        let images = vec![img("https://x/ids/1/a.jpg")];
        assert_eq!(reconcile(&images, &[]), images);
    }
}
