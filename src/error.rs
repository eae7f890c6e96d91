//! Structured error types for the arrangement engine.
//!
//! Three failure kinds cover the real error sources: bad configuration or
//! picture geometry, an exhausted selection pool, and placement-derived
//! queries made before layout ran. A fourth wraps JSON parse failures at the
//! `arrange_json` boundary. All failures are local and synchronous; nothing
//! is retried, and no partial arrangement is ever returned.

use thiserror::Error;

/// The unified error type returned by all public wallplan API functions.
#[derive(Debug, Error)]
pub enum ArrangeError {
    /// Invalid margin, non-positive picture dimensions, a duplicate picture
    /// id, or an unreadable picture file.
    #[error("configuration error: {0}")]
    Config(String),

    /// A selection heuristic was asked for more pictures than remain in the
    /// pool. Also raised for a gallery with no pictures at all.
    #[error("selection pool exhausted: requested {requested}, {remaining} remaining")]
    EmptyPool { requested: usize, remaining: usize },

    /// A placement-derived result (wall size, fine placements, realignment)
    /// was requested before a layout strategy assigned coordinates.
    #[error("invalid state: {0}")]
    State(String),

    /// Gallery JSON failed to parse.
    #[error("failed to parse gallery: {source}{hint}")]
    Parse {
        source: serde_json::Error,
        /// Preformatted hint line, empty when there is nothing useful to say.
        hint: String,
    },
}

impl From<serde_json::Error> for ArrangeError {
    fn from(e: serde_json::Error) -> Self {
        let hint = match e.classify() {
            serde_json::error::Category::Syntax => {
                "\n  Hint: check for trailing commas, missing quotes, or unescaped characters."
            }
            serde_json::error::Category::Data => {
                "\n  Hint: the JSON is valid but doesn't match the gallery schema. Check field names and types."
            }
            serde_json::error::Category::Eof => "\n  Hint: unexpected end of input — is the JSON truncated?",
            serde_json::error::Category::Io => "",
        };
        ArrangeError::Parse {
            source: e,
            hint: hint.to_string(),
        }
    }
}
