//! Branding section: names, logo assets, palette and fonts.

use serde::{Deserialize, Serialize};

/// Accent color used when the palette omits one.
pub const DEFAULT_ACCENT_COLOR: &str = "#F5F5F5";

/// Background color used when the palette omits one.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#FFFFFF";

/// Text color used when the palette omits one.
pub const DEFAULT_TEXT_COLOR: &str = "#2C3E50";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct Branding {
    /// Company name, also the source of the domain slug.
    pub company_name: String,

    /// Name shown in the product chrome.
    pub display_name: String,

    pub logo: LogoAssets,

    pub colors: ColorPalette,

    pub fonts: FontPair,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct LogoAssets {
    pub primary: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub favicon: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dark: Option<String>,
}

/// Brand palette. Primary and secondary are required; the rest fall back to
/// platform defaults.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorPalette {
    pub primary: String,

    pub secondary: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub accent: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl ColorPalette {
    pub fn accent_or_default(&self) -> &str {
        self.accent.as_deref().unwrap_or(DEFAULT_ACCENT_COLOR)
    }

    pub fn background_or_default(&self) -> &str {
        self.background.as_deref().unwrap_or(DEFAULT_BACKGROUND_COLOR)
    }

    pub fn text_or_default(&self) -> &str {
        self.text.as_deref().unwrap_or(DEFAULT_TEXT_COLOR)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default, rename_all = "camelCase")]
pub struct FontPair {
    pub primary: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
}

impl FontPair {
    /// Secondary font, or the primary font when none is configured.
    pub fn secondary_or_primary(&self) -> &str {
        self.secondary.as_deref().unwrap_or(&self.primary)
    }
}
