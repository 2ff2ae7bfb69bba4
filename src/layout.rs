//! Gallery layout selection.
//!
//! The detail view has two presentation variants: a `front-back` pair of
//! images side by side, and a full `slider` carousel with thumbnail
//! previews. Which one renders is either fixed in config or chosen
//! automatically from the image count. The choice is a pure function,
//! decoupled from rendering, so the branch is testable without producing
//! any markup.

use serde::{Deserialize, Serialize};

/// A concrete presentation variant for the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layout {
    /// Two images side by side (the second falls back to the first).
    FrontBack,
    /// Image carousel with dot previews and prev/next controls.
    Slider,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::FrontBack => "front-back",
            Layout::Slider => "slider",
        }
    }
}

/// Configured layout: a fixed variant, or `auto` to pick from the image
/// count at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutChoice {
    #[default]
    Auto,
    FrontBack,
    Slider,
}

/// Thumbnail arrangement inside the slider layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GalleryArrangement {
    /// Dot previews in a row below the main image.
    #[default]
    DownPreview,
    /// Dot previews in a column beside the main image.
    SideBySide,
    /// No carousel: two-column grid with the third image spanning both.
    VerticalGallery,
    /// Dot previews in a row, wide main image.
    HorizontalGallery,
}

impl GalleryArrangement {
    pub fn css_class(&self) -> &'static str {
        match self {
            GalleryArrangement::DownPreview => "gallery-down-preview",
            GalleryArrangement::SideBySide => "gallery-side-by-side",
            GalleryArrangement::VerticalGallery => "gallery-vertical",
            GalleryArrangement::HorizontalGallery => "gallery-horizontal",
        }
    }
}

/// Resolve the layout to render.
///
/// Explicit choices pass through. `Auto` picks `FrontBack` when the image
/// count is known and below two — a carousel over one image is just a
/// slow way to show it — and `Slider` otherwise, including when the count
/// is unknown.
pub fn select_layout(choice: LayoutChoice, image_count: Option<usize>) -> Layout {
    match choice {
        LayoutChoice::FrontBack => Layout::FrontBack,
        LayoutChoice::Slider => Layout::Slider,
        LayoutChoice::Auto => match image_count {
            Some(count) if count < 2 => Layout::FrontBack,
            _ => Layout::Slider,
        },
    }
}
