//! Appearance customization settings and the customization-present
//! predicate.
//!
//! Settings arrive from extension storage as JSON: one property bag of
//! camelCase CSS declarations per curated block, plus a free-form `css`
//! override string.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::block::{BlockKind, CURATED_KINDS};

/// Property bag for one curated block: camelCase CSS property names to
/// values. `BTreeMap` keeps generated declaration order deterministic.
pub type BlockStyles = BTreeMap<String, String>;

/// Marker substring a theme stylesheet carries on its root rule.
pub const THEME_ROOT_MARKER: &str = "simpread-theme-root";

const FONT_SIZE_KEY: &str = "fontSize";

/// Appearance customization for the reading mode: one property bag per
/// curated block plus the free-form CSS override.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomSettings {
    pub title: BlockStyles,
    pub desc: BlockStyles,
    pub art: BlockStyles,
    pub pre: BlockStyles,
    pub code: BlockStyles,
    pub css: String,
}

impl CustomSettings {
    /// The property bag backing a curated kind; `None` for the raw kinds,
    /// whose content is the `css` field or fixed text.
    pub fn block(&self, kind: BlockKind) -> Option<&BlockStyles> {
        match kind {
            BlockKind::Title => Some(&self.title),
            BlockKind::Desc => Some(&self.desc),
            BlockKind::Art => Some(&self.art),
            BlockKind::Pre => Some(&self.pre),
            BlockKind::Code => Some(&self.code),
            BlockKind::Css | BlockKind::Markdown => None,
        }
    }

    /// Whether any curated bag carries a non-empty `fontSize` entry.
    fn any_font_size(&self) -> bool {
        [&self.title, &self.desc, &self.art]
            .iter()
            .any(|bag| bag.get(FONT_SIZE_KEY).is_some_and(|v| !v.is_empty()))
    }

    /// Reports whether these settings carry a customization of the given
    /// kind.
    ///
    /// Layout, margin, font-family, and free-form customizations all live
    /// in the `css` override; font size may additionally live in the
    /// title/desc/art bags; a theme is identified by the
    /// [`THEME_ROOT_MARKER`] substring in the override text.
    pub fn is_customized(&self, kind: VerifyKind) -> bool {
        match kind {
            VerifyKind::Layout
            | VerifyKind::Margin
            | VerifyKind::FontFamily
            | VerifyKind::Custom => !self.css.is_empty(),
            VerifyKind::FontSize => self.any_font_size() || !self.css.is_empty(),
            VerifyKind::Theme => self.css.contains(THEME_ROOT_MARKER),
        }
    }
}

/// The customization categories the predicate distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VerifyKind {
    Layout,
    Margin,
    FontFamily,
    FontSize,
    Custom,
    Theme,
}

impl VerifyKind {
    pub fn as_str(self) -> &'static str {
        match self {
            VerifyKind::Layout => "layout",
            VerifyKind::Margin => "margin",
            VerifyKind::FontFamily => "fontfamily",
            VerifyKind::FontSize => "fontsize",
            VerifyKind::Custom => "custom",
            VerifyKind::Theme => "theme",
        }
    }
}

impl fmt::Display for VerifyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known verification kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown verification kind '{0}'")]
pub struct ParseVerifyKindError(pub String);

impl FromStr for VerifyKind {
    type Err = ParseVerifyKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "layout" => Ok(VerifyKind::Layout),
            "margin" => Ok(VerifyKind::Margin),
            "fontfamily" => Ok(VerifyKind::FontFamily),
            "fontsize" => Ok(VerifyKind::FontSize),
            "custom" => Ok(VerifyKind::Custom),
            "theme" => Ok(VerifyKind::Theme),
            other => Err(ParseVerifyKindError(other.to_string())),
        }
    }
}

/// Iterates curated kinds paired with their bags, in preview order.
pub(crate) fn curated_blocks(
    settings: &CustomSettings,
) -> impl Iterator<Item = (BlockKind, &BlockStyles)> {
    CURATED_KINDS
        .into_iter()
        .filter_map(|kind| settings.block(kind).map(|bag| (kind, bag)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_css(css: &str) -> CustomSettings {
        CustomSettings {
            css: css.to_string(),
            ..CustomSettings::default()
        }
    }

    #[test]
    fn test_css_backed_kinds_follow_css_field() {
        let customized = with_css("sr-read { margin: 20px auto; }");
        let empty = with_css("");
        for kind in [
            VerifyKind::Layout,
            VerifyKind::Margin,
            VerifyKind::FontFamily,
            VerifyKind::Custom,
        ] {
            assert!(customized.is_customized(kind));
            assert!(!empty.is_customized(kind));
        }
    }

    #[test]
    fn test_fontsize_from_bag() {
        let mut settings = CustomSettings::default();
        settings
            .art
            .insert("fontSize".to_string(), "18px".to_string());
        assert!(settings.is_customized(VerifyKind::FontSize));
    }

    #[test]
    fn test_fontsize_from_css_fallback() {
        let settings = with_css("sr-rd-content { font-size: 18px; }");
        assert!(settings.is_customized(VerifyKind::FontSize));
    }

    #[test]
    fn test_fontsize_empty_everywhere() {
        let mut settings = CustomSettings::default();
        settings.title.insert("fontSize".to_string(), String::new());
        assert!(!settings.is_customized(VerifyKind::FontSize));
    }

    #[test]
    fn test_theme_marker_detection() {
        let themed = with_css(".simpread-theme-root { background: #222; }");
        assert!(themed.is_customized(VerifyKind::Theme));
        let plain = with_css("body { background: #222; }");
        assert!(!plain.is_customized(VerifyKind::Theme));
    }

    #[test]
    fn test_verify_kind_parse_unknown_fails() {
        let err = "opacity".parse::<VerifyKind>().unwrap_err();
        assert!(err.to_string().contains("opacity"));
    }

    #[test]
    fn test_settings_deserialize_camel_case_bags() {
        let settings: CustomSettings = serde_json::from_str(
            r#"{
                "title": { "fontSize": "1.3em" },
                "css": ".simpread-theme-root {}"
            }"#,
        )
        .unwrap();
        assert_eq!(settings.title.get("fontSize").unwrap(), "1.3em");
        assert!(settings.is_customized(VerifyKind::Theme));
        assert!(settings.desc.is_empty());
    }
}
