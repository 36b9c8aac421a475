//! Document seam for style injection.
//!
//! The mutator never talks to a browser directly; it drives a [`Document`],
//! the narrow slice of DOM behavior the stylesheet operations need:
//!
//! - inline-style get/set on all elements matching a selector
//! - attribute get/set (the root element's `style` attribute)
//! - head `<style>` block lookup/append/replace/remove by id
//!
//! [`MemoryDom`] is the bundled in-memory implementation, used by the test
//! suite and for headless preview rendering.

mod memory;

pub use memory::{MemoryDom, StyleBlock};

/// The document surface the style mutator writes through.
///
/// Implementations are expected to be synchronous and single-threaded;
/// every method either completes immediately or is a no-op (removing a
/// block that does not exist, reading a style that was never set).
pub trait Document {
    /// Returns the current value of `property` on elements matching
    /// `selector`, or `None` when no such style is in effect.
    fn style(&self, selector: &str, property: &str) -> Option<String>;

    /// Sets `property` on all elements matching `selector`. An empty value
    /// clears the property.
    fn set_style(&mut self, selector: &str, property: &str, value: &str);

    /// Returns the value of attribute `name` on the first element matching
    /// `selector`, or `None` when the attribute is absent.
    fn attr(&self, selector: &str, name: &str) -> Option<String>;

    /// Sets attribute `name` on elements matching `selector`. An empty
    /// value is stored as-is (an empty attribute, not an absent one).
    fn set_attr(&mut self, selector: &str, name: &str, value: &str);

    /// Returns the text of the style block with the given id, if present.
    fn style_block(&self, id: &str) -> Option<String>;

    /// Appends a new style block with the given id to the document head.
    fn append_style_block(&mut self, id: &str, css: &str);

    /// Replaces the text of an existing style block in place. Blocks the
    /// document does not contain are left untouched.
    fn replace_style_block(&mut self, id: &str, css: &str);

    /// Removes every style block with the given id. No-op when absent.
    fn remove_style_block(&mut self, id: &str);
}
