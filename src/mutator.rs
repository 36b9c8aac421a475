//! The style mutator: every document-facing appearance operation.

use tracing::debug;

use crate::block::{self, BlockKind, MARKDOWN_DEFAULTS};
use crate::color;
use crate::dom::Document;
use crate::settings::{curated_blocks, BlockStyles, CustomSettings};

/// Selector for the overlay elements receiving the focus-mode tint.
pub const FOCUS_ROOT: &str = ".simpread-focus-root";

/// The reading-mode content container.
pub const READ_CONTAINER: &str = "sr-read";

/// Node id of the site-wide CSS override block.
pub const SITE_CSS_ID: &str = "simpread-site-css";

const ROOT: &str = "html";
const BACKGROUND_COLOR: &str = "background-color";

/// Applies appearance customization to a document.
///
/// Holds the document handle plus the one piece of session state the
/// operations need: the root element's original inline style, captured
/// lazily on the first font-size change and restored when the size is
/// cleared.
///
/// # Example
///
/// ```rust
/// use simpread_style::{MemoryDom, StyleMutator};
///
/// let mut mutator = StyleMutator::new(MemoryDom::new());
/// let applied = mutator.background_color("rgba(235, 235, 235, 0.9)", 50.0);
/// assert_eq!(applied, "rgba(235, 235, 235, 0.5)");
/// ```
#[derive(Debug)]
pub struct StyleMutator<D: Document> {
    dom: D,
    root_baseline: Option<String>,
}

impl<D: Document> StyleMutator<D> {
    /// Creates a mutator over the given document.
    pub fn new(dom: D) -> Self {
        Self {
            dom,
            root_baseline: None,
        }
    }

    /// The underlying document.
    pub fn document(&self) -> &D {
        &self.dom
    }

    /// Consumes the mutator, returning the document.
    pub fn into_document(self) -> D {
        self.dom
    }

    /// Sets the focus-mode background tint from an explicit base color and
    /// an opacity percentage, returning the applied value.
    ///
    /// The value is applied and returned unconditionally; when the base
    /// color carries no channels the composed text embeds the literal
    /// `null`, matching the long-standing behavior callers observe.
    pub fn background_color(&mut self, bgcolor: &str, percent: f64) -> String {
        let channels = color::channels(bgcolor);
        let newval = color::compose(channels.as_deref().unwrap_or("null"), percent / 100.0);
        debug!(value = %newval, "focus background set");
        self.dom.set_style(FOCUS_ROOT, BACKGROUND_COLOR, &newval);
        newval
    }

    /// Re-tints the focus-mode background at a new opacity percentage,
    /// deriving the base color from the document's current value.
    ///
    /// Returns `None` — and leaves the document untouched — when no
    /// channeled background color is currently in effect. Unlike
    /// [`background_color`](Self::background_color) this adjusts rather
    /// than sets, which is why the base comes from the document.
    pub fn opacity(&mut self, percent: f64) -> Option<String> {
        let current = self.dom.style(FOCUS_ROOT, BACKGROUND_COLOR).unwrap_or_default();
        let channels = color::channels(&current)?;
        let newval = color::compose(&channels, percent / 100.0);
        debug!(value = %newval, "focus background opacity adjusted");
        self.dom.set_style(FOCUS_ROOT, BACKGROUND_COLOR, &newval);
        Some(newval)
    }

    /// Sets the reading container's font family. The sentinel `"default"`
    /// clears the property instead of naming a font.
    pub fn font_family(&mut self, family: &str) {
        let value = if family == "default" { "" } else { family };
        self.dom.set_style(READ_CONTAINER, "font-family", value);
    }

    /// Sets the document-wide font size by rewriting the root element's
    /// inline style, or restores the original style when `value` is empty.
    ///
    /// The pre-existing inline style (absent attribute reads as empty) is
    /// captured as the baseline on the first call and never re-captured
    /// for the lifetime of this mutator.
    pub fn font_size(&mut self, value: &str) {
        if self.root_baseline.is_none() {
            let captured = self.dom.attr(ROOT, "style").unwrap_or_default();
            debug!(baseline = %captured, "root style baseline captured");
            self.root_baseline = Some(captured);
        }
        let baseline = self.root_baseline.as_deref().unwrap_or("");
        if value.is_empty() {
            self.dom.set_attr(ROOT, "style", baseline);
        } else {
            let styled = format!("font-size: {}!important;{}", value, baseline);
            self.dom.set_attr(ROOT, "style", &styled);
        }
    }

    /// Sets the reading container's layout width via its margin, or clears
    /// the margin when `width` is empty.
    pub fn layout(&mut self, width: &str) {
        if width.is_empty() {
            self.dom.set_style(READ_CONTAINER, "margin", "");
        } else {
            self.dom
                .set_style(READ_CONTAINER, "margin", &format!("20px {}", width));
        }
    }

    /// Writes a curated custom style block from a property bag.
    ///
    /// camelCase property names become kebab-case declarations, empty
    /// values are skipped, and the joined body is wrapped in the kind's
    /// selector. The block is inserted on first write and updated in place
    /// thereafter; at most one node per kind ever exists.
    pub fn custom(&mut self, kind: BlockKind, props: &BlockStyles) {
        let text = block::rule_text(kind, &block::rule_body(props));
        self.upsert_block(kind.node_id(), &text);
    }

    /// Writes a style block from pre-formed CSS text, with the same
    /// insert-or-update semantics as [`custom`](Self::custom). Used for
    /// the free-form user override and the markdown defaults.
    pub fn css(&mut self, kind: BlockKind, styles: &str) {
        self.upsert_block(kind.node_id(), styles);
    }

    /// Installs or removes the site-wide CSS override.
    ///
    /// Non-empty text is written to the single fixed-id block; empty text
    /// removes the block entirely. This is the one writer that removes —
    /// the custom/css writers only ever insert or update.
    pub fn site_css(&mut self, styles: &str) {
        if styles.is_empty() {
            debug!(id = SITE_CSS_ID, "site css removed");
            self.dom.remove_style_block(SITE_CSS_ID);
        } else {
            self.upsert_block(SITE_CSS_ID, styles);
        }
    }

    /// Applies a full settings preview: every curated block, then the
    /// free-form override — the latter unconditionally, so an empty
    /// override writes an empty block rather than removing one.
    pub fn preview(&mut self, settings: &CustomSettings) {
        for (kind, bag) in curated_blocks(settings) {
            self.custom(kind, bag);
        }
        self.css(BlockKind::Css, &settings.css);
    }

    /// Idempotently installs the markdown default stylesheet. Presence is
    /// decided by node id, not content.
    pub fn markdown_defaults(&mut self) {
        let id = BlockKind::Markdown.node_id();
        if self.dom.style_block(id).is_none() {
            debug!(id, "markdown defaults installed");
            self.dom.append_style_block(id, MARKDOWN_DEFAULTS);
        }
    }

    fn upsert_block(&mut self, id: &str, css: &str) {
        if self.dom.style_block(id).is_some() {
            debug!(id, bytes = css.len(), "style block updated");
            self.dom.replace_style_block(id, css);
        } else {
            debug!(id, bytes = css.len(), "style block appended");
            self.dom.append_style_block(id, css);
        }
    }
}
