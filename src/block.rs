//! Purpose-tagged style blocks.
//!
//! Every generated stylesheet the reading mode injects is tagged by
//! purpose, and each purpose owns exactly one head node. The mapping is an
//! explicit table rather than inline branching:
//!
//! | Kind       | Node id                    | Selector scope                |
//! |------------|----------------------------|-------------------------------|
//! | `Title`    | `simpread-custom-title`    | `sr-rd-title`                 |
//! | `Desc`     | `simpread-custom-desc`     | `sr-rd-desc`                  |
//! | `Art`      | `simpread-custom-art`      | article body (`sr-rd-content`)|
//! | `Pre`      | `simpread-custom-pre`      | `sr-rd-content pre`           |
//! | `Code`     | `simpread-custom-code`     | code inside `pre`             |
//! | `Css`      | `simpread-custom-css`      | free-form user CSS (raw)      |
//! | `Markdown` | `simpread-custom-markdown` | markdown defaults (raw)       |
//!
//! The first five are *curated* kinds: their content is generated from a
//! property bag and wrapped in the fixed selector above. `Css` and
//! `Markdown` carry pre-formed CSS text and have no selector of their own.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::settings::BlockStyles;

/// A purpose tag identifying one generated style block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Title,
    Desc,
    Art,
    Pre,
    Code,
    Css,
    Markdown,
}

/// The curated kinds, in the order the preview applier writes them.
pub const CURATED_KINDS: [BlockKind; 5] = [
    BlockKind::Title,
    BlockKind::Desc,
    BlockKind::Art,
    BlockKind::Pre,
    BlockKind::Code,
];

impl BlockKind {
    /// The tag text as it appears in node ids and settings keys.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Title => "title",
            BlockKind::Desc => "desc",
            BlockKind::Art => "art",
            BlockKind::Pre => "pre",
            BlockKind::Code => "code",
            BlockKind::Css => "css",
            BlockKind::Markdown => "markdown",
        }
    }

    /// The head node id owned by this kind.
    pub fn node_id(self) -> &'static str {
        match self {
            BlockKind::Title => "simpread-custom-title",
            BlockKind::Desc => "simpread-custom-desc",
            BlockKind::Art => "simpread-custom-art",
            BlockKind::Pre => "simpread-custom-pre",
            BlockKind::Code => "simpread-custom-code",
            BlockKind::Css => "simpread-custom-css",
            BlockKind::Markdown => "simpread-custom-markdown",
        }
    }

    /// The selector a curated kind's rule body is wrapped in, or `None`
    /// for the raw kinds.
    pub fn selector(self) -> Option<&'static str> {
        match self {
            BlockKind::Title => Some("sr-rd-title"),
            BlockKind::Desc => Some("sr-rd-desc"),
            BlockKind::Art => {
                Some("sr-rd-content *, sr-rd-content p, sr-rd-content div")
            }
            BlockKind::Pre => Some("sr-rd-content pre"),
            BlockKind::Code => {
                Some("sr-rd-content pre code, sr-rd-content pre code *")
            }
            BlockKind::Css | BlockKind::Markdown => None,
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string names no known block kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown style block kind '{0}'")]
pub struct ParseBlockKindError(pub String);

impl FromStr for BlockKind {
    type Err = ParseBlockKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(BlockKind::Title),
            "desc" => Ok(BlockKind::Desc),
            "art" => Ok(BlockKind::Art),
            "pre" => Ok(BlockKind::Pre),
            "code" => Ok(BlockKind::Code),
            "css" => Ok(BlockKind::Css),
            "markdown" => Ok(BlockKind::Markdown),
            other => Err(ParseBlockKindError(other.to_string())),
        }
    }
}

/// Converts a camelCase property name to its kebab-case CSS spelling.
pub(crate) fn kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 2);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Formats a property bag as a joined run of `prop: value;` declarations,
/// skipping empty values.
pub(crate) fn rule_body(props: &BlockStyles) -> String {
    props
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(name, value)| format!("{}: {};", kebab_case(name), value))
        .collect()
}

/// Wraps a rule body in a kind's selector; raw kinds pass the body through.
pub(crate) fn rule_text(kind: BlockKind, body: &str) -> String {
    match kind.selector() {
        Some(selector) => format!("{} {{{}}}", selector, body),
        None => body.to_string(),
    }
}

/// Markdown spacing/line-height normalization installed by the markdown
/// defaults installer.
pub const MARKDOWN_DEFAULTS: &str = "sr-rd-content{line-height:initial!important}sr-rd-content h1,sr-rd-content h2,sr-rd-content h3,sr-rd-content h4,sr-rd-content h5{margin:0!important;padding:0!important}sr-rd-content p{margin:0!important}sr-rd-content ol,sr-rd-content ul{margin-bottom:0!important;line-height:0!important}sr-rd-content sr-blockquote{padding-top:0!important;padding-bottom:0!important;line-height:.5}sr-rd-content sr-blockquote *{line-height:1.8!important}sr-rd-content ol li,sr-rd-content ol li *,sr-rd-content ul li,sr-rd-content ul li *{line-height:initial!important}";
