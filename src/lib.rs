#![forbid(unsafe_code)]

//! Stylesheet injection and appearance customization for a reading-mode
//! overlay.
//!
//! This crate is the styling glue behind theme/appearance customization:
//! focus-mode background tinting, read-mode font family/size and layout
//! width, per-purpose custom style blocks, free-form user CSS, a site-wide
//! CSS toggle, and markdown display defaults. It provides:
//!
//! - [`StyleMutator`]: every document-facing operation, plus the
//!   session-scoped font-size baseline
//! - [`Document`]: the narrow DOM seam the mutator drives, with
//!   [`MemoryDom`] as the bundled in-memory implementation
//! - [`BlockKind`]: the purpose tags naming each generated style block
//! - [`CustomSettings`]: the serde-backed settings model and its
//!   customization-present predicate
//!
//! # Example
//!
//! ```rust
//! use simpread_style::{BlockKind, Document, MemoryDom, StyleMutator};
//! use std::collections::BTreeMap;
//!
//! let mut mutator = StyleMutator::new(MemoryDom::new());
//!
//! let mut title = BTreeMap::new();
//! title.insert("fontSize".to_string(), "1.3em".to_string());
//! mutator.custom(BlockKind::Title, &title);
//!
//! let dom = mutator.into_document();
//! assert_eq!(
//!     dom.style_block("simpread-custom-title").as_deref(),
//!     Some("sr-rd-title {font-size: 1.3em;}")
//! );
//! ```

pub mod block;
pub mod color;
pub mod dom;
pub mod mutator;
pub mod settings;

pub use block::{BlockKind, ParseBlockKindError, CURATED_KINDS, MARKDOWN_DEFAULTS};
pub use dom::{Document, MemoryDom, StyleBlock};
pub use mutator::{StyleMutator, FOCUS_ROOT, READ_CONTAINER, SITE_CSS_ID};
pub use settings::{
    BlockStyles, CustomSettings, ParseVerifyKindError, VerifyKind, THEME_ROOT_MARKER,
};
