//! Page configuration.
//!
//! Handles loading and validating `config.toml`. Config files are sparse:
//! stock defaults cover everything, user files override just the values
//! they care about, and unknown keys are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [page]
//! store_name = "Storefront"    # Used in the document title
//! home_url = "/"               # Not-found view and breadcrumb root link
//! layout = "auto"              # "auto" | "front-back" | "slider"
//! gallery = "down-preview"     # "down-preview" | "side-by-side" |
//!                              # "vertical-gallery" | "horizontal-gallery"
//! image_width = 360            # Gallery image box width (px)
//! image_height = 500           # Gallery image box height (px)
//!
//! [colors.light]
//! background = "#ffffff"
//! text = "#111111"
//! text_muted = "#666666"       # Code line, struck list price, installments
//! border = "#e0e0e0"
//! accent = "#273746"           # Buttons, current price
//!
//! [colors.dark]
//! background = "#0a0a0a"
//! text = "#eeeeee"
//! text_muted = "#999999"
//! border = "#333333"
//! accent = "#8fa8bd"
//!
//! # Informational accordions below the product info. Body is markdown.
//! [[sections]]
//! title = "Detalhes"
//! body = "..."
//! ```

use crate::layout::{GalleryArrangement, LayoutChoice};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Page configuration loaded from `config.toml`.
///
/// All fields have sensible defaults. User config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    pub page: PageSettings,
    pub colors: ColorConfig,
    /// Informational accordion sections rendered below the product info.
    pub sections: Vec<SectionConfig>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page: PageSettings::default(),
            colors: ColorConfig::default(),
            sections: default_sections(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageSettings {
    /// Store name, used in the document title.
    pub store_name: String,
    /// Home link target for the not-found view and breadcrumb root.
    pub home_url: String,
    /// Gallery layout, or `auto` to pick from the image count.
    pub layout: LayoutChoice,
    /// Thumbnail arrangement inside the slider layout.
    pub gallery: GalleryArrangement,
    /// Gallery image box width in pixels.
    pub image_width: u32,
    /// Gallery image box height in pixels.
    pub image_height: u32,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            store_name: "Storefront".to_string(),
            home_url: "/".to_string(),
            layout: LayoutChoice::Auto,
            gallery: GalleryArrangement::DownPreview,
            image_width: 360,
            image_height: 500,
        }
    }
}

impl PageSettings {
    /// CSS aspect-ratio value for gallery image boxes.
    pub fn aspect_ratio(&self) -> String {
        format!("{} / {}", self.image_width, self.image_height)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub light: ColorScheme,
    pub dark: DarkColorScheme,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorScheme {
    pub background: String,
    pub text: String,
    pub text_muted: String,
    pub border: String,
    pub accent: String,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            background: "#ffffff".to_string(),
            text: "#111111".to_string(),
            text_muted: "#666666".to_string(),
            border: "#e0e0e0".to_string(),
            accent: "#273746".to_string(),
        }
    }
}

/// Same shape as [`ColorScheme`], separate type so the two defaults can
/// differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DarkColorScheme {
    pub background: String,
    pub text: String,
    pub text_muted: String,
    pub border: String,
    pub accent: String,
}

impl Default for DarkColorScheme {
    fn default() -> Self {
        Self {
            background: "#0a0a0a".to_string(),
            text: "#eeeeee".to_string(),
            text_muted: "#999999".to_string(),
            border: "#333333".to_string(),
            accent: "#8fa8bd".to_string(),
        }
    }
}

/// One informational accordion: a title and a markdown body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionConfig {
    pub title: String,
    pub body: String,
}

fn default_sections() -> Vec<SectionConfig> {
    let placeholder = "Edite esta seção no `config.toml` da loja.";
    ["Detalhes", "Trocas e devoluções", "Entrega"]
        .into_iter()
        .map(|title| SectionConfig {
            title: title.to_string(),
            body: placeholder.to_string(),
        })
        .collect()
}

impl PageConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.page.image_width == 0 || self.page.image_height == 0 {
            return Err(ConfigError::Validation(
                "page.image_width and page.image_height must be non-zero".into(),
            ));
        }
        if self.page.home_url.is_empty() {
            return Err(ConfigError::Validation("page.home_url must not be empty".into()));
        }
        for section in &self.sections {
            if section.title.is_empty() {
                return Err(ConfigError::Validation("sections.title must not be empty".into()));
            }
        }
        Ok(())
    }
}

/// Load and validate a `config.toml`. A missing file yields the defaults;
/// a present but invalid file is an error.
pub fn load_config(path: &Path) -> Result<PageConfig, ConfigError> {
    if !path.exists() {
        return Ok(PageConfig::default());
    }
    let content = fs::read_to_string(path)?;
    let config: PageConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Generate CSS custom properties from the color config.
pub fn generate_color_css(colors: &ColorConfig) -> String {
    format!(
        r#":root {{
    --color-bg: {light_bg};
    --color-text: {light_text};
    --color-text-muted: {light_text_muted};
    --color-border: {light_border};
    --color-accent: {light_accent};
}}

@media (prefers-color-scheme: dark) {{
    :root {{
        --color-bg: {dark_bg};
        --color-text: {dark_text};
        --color-text-muted: {dark_text_muted};
        --color-border: {dark_border};
        --color-accent: {dark_accent};
    }}
}}"#,
        light_bg = colors.light.background,
        light_text = colors.light.text,
        light_text_muted = colors.light.text_muted,
        light_border = colors.light.border,
        light_accent = colors.light.accent,
        dark_bg = colors.dark.background,
        dark_text = colors.dark.text,
        dark_text_muted = colors.dark.text_muted,
        dark_border = colors.dark.border,
        dark_accent = colors.dark.accent,
    )
}

/// A stock `config.toml` with every option documented. Printed by
/// `vitrine gen-config` as a starting point for stores.
pub fn stock_config_toml() -> String {
    let defaults = PageSettings::default();
    let light = ColorScheme::default();
    let dark = DarkColorScheme::default();
    format!(
        r##"# vitrine configuration
# All options are optional - values shown are the defaults.

[page]
# Store name, used in the document title ("<product> | <store_name>").
store_name = "{store_name}"
# Home link target for the not-found view.
home_url = "{home_url}"
# Gallery layout: "auto" picks front-back for fewer than two images.
layout = "auto"
# Thumbnail arrangement for the slider layout:
# "down-preview" | "side-by-side" | "vertical-gallery" | "horizontal-gallery"
gallery = "down-preview"
# Gallery image box, in pixels.
image_width = {image_width}
image_height = {image_height}

[colors.light]
background = "{l_bg}"
text = "{l_text}"
text_muted = "{l_muted}"
border = "{l_border}"
accent = "{l_accent}"

[colors.dark]
background = "{d_bg}"
text = "{d_text}"
text_muted = "{d_muted}"
border = "{d_border}"
accent = "{d_accent}"

# Informational accordions below the product info. Repeat the block for
# each section; body is markdown.
[[sections]]
title = "Detalhes"
body = "Edite esta seção no `config.toml` da loja."

[[sections]]
title = "Trocas e devoluções"
body = "Edite esta seção no `config.toml` da loja."

[[sections]]
title = "Entrega"
body = "Edite esta seção no `config.toml` da loja."
"##,
        store_name = defaults.store_name,
        home_url = defaults.home_url,
        image_width = defaults.image_width,
        image_height = defaults.image_height,
        l_bg = light.background,
        l_text = light.text,
        l_muted = light.text_muted,
        l_border = light.border,
        l_accent = light.accent,
        d_bg = dark.background,
        d_text = dark.text,
        d_muted = dark.text_muted,
        d_border = dark.border,
        d_accent = dark.accent,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_config_has_colors_and_sections() {
        let config = PageConfig::default();
        assert_eq!(config.colors.light.background, "#ffffff");
        assert_eq!(config.colors.dark.background, "#0a0a0a");
        assert_eq!(config.sections.len(), 3);
        assert_eq!(config.sections[0].title, "Detalhes");
    }

    #[test]
    fn default_config_validates() {
        PageConfig::default().validate().unwrap();
    }

    #[test]
    fn load_config_returns_default_when_no_file() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(config.page.store_name, "Storefront");
        assert_eq!(config.page.layout, LayoutChoice::Auto);
    }

    #[test]
    fn load_config_reads_sparse_overrides() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(
            &path,
            r##"
[page]
store_name = "Bravtex"
layout = "slider"

[colors.light]
background = "#fafafa"
"##,
        )
        .unwrap();
        let config = load_config(&path).unwrap();
        assert_eq!(config.page.store_name, "Bravtex");
        assert_eq!(config.page.layout, LayoutChoice::Slider);
        assert_eq!(config.colors.light.background, "#fafafa");
        // Unset values keep their defaults.
        assert_eq!(config.colors.light.text, "#111111");
        assert_eq!(config.page.image_width, 360);
    }

    #[test]
    fn load_config_rejects_unknown_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[page]\nstore_nam = \"typo\"\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Toml(_))));
    }

    #[test]
    fn load_config_rejects_zero_dimensions() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[page]\nimage_width = 0\n").unwrap();
        assert!(matches!(load_config(&path), Err(ConfigError::Validation(_))));
    }

    #[test]
    fn color_css_contains_both_schemes() {
        let css = generate_color_css(&ColorConfig::default());
        assert!(css.contains("--color-bg: #ffffff"));
        assert!(css.contains("--color-bg: #0a0a0a"));
        assert!(css.contains("prefers-color-scheme: dark"));
    }

    #[test]
    fn stock_config_round_trips() {
        let config: PageConfig = toml::from_str(&stock_config_toml()).unwrap();
        config.validate().unwrap();
        assert_eq!(config.page.store_name, PageConfig::default().page.store_name);
    }

    #[test]
    fn sections_parse_from_toml_array() {
        let config: PageConfig = toml::from_str(
            r#"
[[sections]]
title = "Care"
body = "Hand wash only."
"#,
        )
        .unwrap();
        assert_eq!(config.sections.len(), 1);
        assert_eq!(config.sections[0].title, "Care");
    }
}
