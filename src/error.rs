//! Error types for ZSON transcoding and parsing.
//!
//! Two failure classes exist and they are kept distinct:
//!
//! - **Transcoder errors**: a comment or string literal left open at end of
//!   input. These are raised before any delegate runs and carry the line and
//!   column where the offending construct opened.
//! - **Delegate errors**: whatever the selected delegate raises on the
//!   transcoded text. The standard parser's errors surface unmodified; this
//!   crate does not wrap or reinterpret them.
//!
//! ## Examples
//!
//! ```rust
//! use serde_zson::{parse, Error};
//!
//! let err = parse("/* never closed").unwrap_err();
//! assert!(matches!(err, Error::Unterminated { .. }));
//! assert!(err.to_string().contains("block comment"));
//! ```

use std::fmt;
use thiserror::Error;

/// The kind of construct left open at end of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Construct {
    /// A `/* */` comment.
    BlockComment,
    /// An ordinary `"` string literal.
    String,
    /// A `"""` string literal.
    MultiLineString,
}

impl fmt::Display for Construct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Construct::BlockComment => "block comment",
            Construct::String => "string",
            Construct::MultiLineString => "multi-line string",
        })
    }
}

/// Represents all possible errors from transcoding and parsing ZSON.
#[derive(Debug, Error)]
pub enum Error {
    /// End of input was reached inside a comment or string literal.
    #[error("unterminated {construct} starting at line {line}, column {column}")]
    Unterminated {
        construct: Construct,
        line: usize,
        column: usize,
    },

    /// The transcoded text was rejected by the standard JSON parser.
    ///
    /// Raised by the `Standard` delegate and the typed `from_*` functions;
    /// the underlying error is passed through untouched.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Error raised by a caller-supplied delegate, or any other failure
    /// carried as a plain message.
    #[error("{0}")]
    Custom(String),

    /// IO error while reading input.
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an unterminated-construct error at the position where the
    /// construct opened.
    pub(crate) fn unterminated(construct: Construct, line: usize, column: usize) -> Self {
        Error::Unterminated {
            construct,
            line,
            column,
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// Useful inside `Custom` delegates for carrying a foreign error type:
    ///
    /// ```rust
    /// use serde_zson::Error;
    ///
    /// let err = Error::custom("not a number");
    /// assert_eq!(err.to_string(), "not a number");
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for read failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
