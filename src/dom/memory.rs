//! In-memory document backing.

use std::collections::HashMap;

use super::Document;

/// One `<style>` element in the head, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleBlock {
    pub id: String,
    pub css: String,
}

/// An in-memory [`Document`].
///
/// Inline styles and attributes are keyed by the selector text they were
/// written with; style blocks live in an ordered list modelling head
/// children. Duplicate block ids are representable on purpose — the
/// one-node-per-purpose invariant belongs to the mutator, and tests need
/// to observe violations of it.
#[derive(Debug, Clone, Default)]
pub struct MemoryDom {
    styles: HashMap<(String, String), String>,
    attrs: HashMap<(String, String), String>,
    blocks: Vec<StyleBlock>,
}

impl MemoryDom {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// All head style blocks, in insertion order.
    pub fn blocks(&self) -> &[StyleBlock] {
        &self.blocks
    }

    /// Number of style blocks carrying the given id.
    pub fn block_count(&self, id: &str) -> usize {
        self.blocks.iter().filter(|b| b.id == id).count()
    }
}

impl Document for MemoryDom {
    fn style(&self, selector: &str, property: &str) -> Option<String> {
        self.styles
            .get(&(selector.to_string(), property.to_string()))
            .cloned()
    }

    fn set_style(&mut self, selector: &str, property: &str, value: &str) {
        let key = (selector.to_string(), property.to_string());
        if value.is_empty() {
            self.styles.remove(&key);
        } else {
            self.styles.insert(key, value.to_string());
        }
    }

    fn attr(&self, selector: &str, name: &str) -> Option<String> {
        self.attrs
            .get(&(selector.to_string(), name.to_string()))
            .cloned()
    }

    fn set_attr(&mut self, selector: &str, name: &str, value: &str) {
        self.attrs
            .insert((selector.to_string(), name.to_string()), value.to_string());
    }

    fn style_block(&self, id: &str) -> Option<String> {
        self.blocks
            .iter()
            .find(|b| b.id == id)
            .map(|b| b.css.clone())
    }

    fn append_style_block(&mut self, id: &str, css: &str) {
        self.blocks.push(StyleBlock {
            id: id.to_string(),
            css: css.to_string(),
        });
    }

    fn replace_style_block(&mut self, id: &str, css: &str) {
        if let Some(block) = self.blocks.iter_mut().find(|b| b.id == id) {
            block.css = css.to_string();
        }
    }

    fn remove_style_block(&mut self, id: &str) {
        self.blocks.retain(|b| b.id != id);
    }
}
