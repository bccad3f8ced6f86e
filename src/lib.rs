//! # serde_zson
//!
//! A Serde-compatible parser for ZSON, a human-friendly superset of JSON.
//!
//! ## What is ZSON?
//!
//! ZSON is JSON with three conveniences for hand-written documents:
//!
//! - **Comments**: single-line (`//`) and multi-line (`/* */`)
//! - **Multi-line strings**: `"""` fences spanning raw newlines
//! - **Digit separators**: underscores in numbers, `1_000_000`
//!
//! A single-pass transcoder rewrites ZSON into strict JSON text, which is
//! then handed to [`serde_json`] (or returned verbatim, or routed to a
//! parser of your choosing). Every JSON document is already valid ZSON, so
//! adopting it costs nothing.
//!
//! ## Key Features
//!
//! - **Single-Pass**: O(n) transcoding with three characters of lookahead
//! - **Serde Compatible**: deserialize straight into your own types via
//!   `#[derive(Deserialize)]`
//! - **Pluggable Delegates**: get a value tree, the normalized JSON text,
//!   or feed the text to a custom parser
//! - **No Unsafe Code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! serde_zson = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Deserializing annotated configuration
//!
//! ```rust
//! use serde::Deserialize;
//! use serde_zson::from_str;
//!
//! #[derive(Deserialize, PartialEq, Debug)]
//! struct Server {
//!     host: String,
//!     port: u16,
//!     max_connections: u32,
//! }
//!
//! let config = r#"
//! // Production settings.
//! {
//!   "host": "db.internal", // resolved by the mesh
//!   "port": 5_432,
//!   "max_connections": 10_000
//! }
//! "#;
//!
//! let server: Server = from_str(config).unwrap();
//! assert_eq!(server.port, 5432);
//! assert_eq!(server.max_connections, 10_000);
//! ```
//!
//! ### Dynamic values and multi-line strings
//!
//! ```rust
//! let value = serde_zson::parse("\"\"\"Dear reader,\nhello.\"\"\"").unwrap();
//! assert_eq!(value, serde_json::json!("Dear reader,\nhello."));
//! ```
//!
//! ### Getting the normalized JSON text
//!
//! ```rust
//! let json = serde_zson::transcode("[1_000, /* pad */ 2]").unwrap();
//! assert_eq!(json, "[1000,  2]");
//! ```
//!
//! ## Format Reference
//!
//! See the [`format`] module for the full notation reference, including the
//! documented edge cases (comment deletion joining adjacent numeric tokens,
//! permissive underscore placement, quote handling inside `"""` fences).
//!
//! ## Examples
//!
//! See the `demos/` directory for runnable examples:
//!
//! - **`simple.rs`** - deserializing a commented document into a struct
//! - **`normalize.rs`** - emitting normalized JSON text
//!
//! Run any example with: `cargo run --example <name>`

pub mod delegate;
pub mod error;
pub mod format;
pub mod transcode;

pub use delegate::{Custom, Delegate, Identity, Standard};
pub use error::{Construct, Error, Result};
pub use transcode::{transcode, Transcoder};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::io;

/// Parses ZSON text into a [`serde_json::Value`].
///
/// Equivalent to [`parse_with`] with the [`Standard`] delegate.
///
/// # Examples
///
/// ```rust
/// use serde_zson::parse;
///
/// let value = parse(r#"[1_000, "two", true] // a mixed bag"#).unwrap();
/// assert_eq!(value, serde_json::json!([1000, "two", true]));
/// ```
///
/// # Errors
///
/// Returns [`Error::Unterminated`] for a comment or string left open, or
/// [`Error::Json`] if the transcoded text is rejected by the JSON parser.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse(text: &str) -> Result<Value> {
    parse_with(text, Standard)
}

/// Parses ZSON text with an explicit [`Delegate`].
///
/// The text is transcoded to strict JSON first; the delegate then decides
/// what to make of it. Transcoding failures are reported before the
/// delegate ever runs.
///
/// # Examples
///
/// ```rust
/// use serde_zson::{parse_with, Identity};
///
/// let json = parse_with("{/*excise*/}", Identity).unwrap();
/// assert_eq!(json, "{}");
/// ```
///
/// # Errors
///
/// Returns [`Error::Unterminated`] from the transcoder, or whatever the
/// delegate raises, unmodified.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn parse_with<D: Delegate>(text: &str, delegate: D) -> Result<D::Output> {
    let json = transcode(text)?;
    delegate.apply(json)
}

/// Deserialize an instance of type `T` from a string of ZSON text.
///
/// # Examples
///
/// ```rust
/// use serde::Deserialize;
/// use serde_zson::from_str;
///
/// #[derive(Deserialize, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let point: Point = from_str("{\"x\": 1, \"y\": 2_000} // a point").unwrap();
/// assert_eq!(point, Point { x: 1, y: 2000 });
/// ```
///
/// # Errors
///
/// Returns an error if the input is not valid ZSON or the transcoded JSON
/// cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_str<T>(text: &str) -> Result<T>
where
    T: DeserializeOwned,
{
    let json = transcode(text)?;
    serde_json::from_str(&json).map_err(Error::from)
}

/// Deserialize an instance of type `T` from an I/O stream of ZSON.
///
/// The entire stream is read into memory before transcoding begins; there
/// is no incremental mode.
///
/// # Examples
///
/// ```rust
/// use serde_zson::from_reader;
/// use std::io::Cursor;
///
/// let doc = Cursor::new(b"[1, 2, 3] // from a reader");
/// let nums: Vec<i32> = from_reader(doc).unwrap();
/// assert_eq!(nums, vec![1, 2, 3]);
/// ```
///
/// # Errors
///
/// Returns an error if reading fails, the input is not valid ZSON, or the
/// data cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_reader<R, T>(mut reader: R) -> Result<T>
where
    R: io::Read,
    T: DeserializeOwned,
{
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|e| Error::io(&e.to_string()))?;
    from_str(&text)
}

/// Deserialize an instance of type `T` from bytes of ZSON text.
///
/// # Errors
///
/// Returns an error if the bytes are not valid UTF-8, not valid ZSON, or
/// cannot be deserialized to type `T`.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn from_slice<T>(v: &[u8]) -> Result<T>
where
    T: DeserializeOwned,
{
    let text = std::str::from_utf8(v).map_err(Error::custom)?;
    from_str(text)
}

/// Serialize any `T: Serialize` to a JSON string.
///
/// ZSON is a read-side superset; output is plain JSON, so this is a
/// passthrough to [`serde_json::to_string`]. Anything it produces parses
/// back with [`from_str`].
///
/// # Examples
///
/// ```rust
/// use serde_zson::to_string;
///
/// assert_eq!(to_string(&vec![1, 2, 3]).unwrap(), "[1,2,3]");
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string(value).map_err(Error::from)
}

/// Serialize any `T: Serialize` to a pretty-printed JSON string.
///
/// # Errors
///
/// Returns an error if the value cannot be serialized.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_pretty<T>(value: &T) -> Result<String>
where
    T: ?Sized + Serialize,
{
    serde_json::to_string_pretty(value).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Point {
        x: i32,
        y: i32,
    }

    #[test]
    fn test_roundtrip_through_stringify() {
        let point = Point { x: 1, y: 2 };
        let json = to_string(&point).unwrap();
        let point_back: Point = from_str(&json).unwrap();
        assert_eq!(point, point_back);
    }

    #[test]
    fn test_from_str_with_extensions() {
        let point: Point = from_str(
            "{\n  \"x\": 1_000, // grouped\n  \"y\": -2 /* inline */\n}",
        )
        .unwrap();
        assert_eq!(point, Point { x: 1000, y: -2 });
    }

    #[test]
    fn test_parse_default_delegate() {
        let value = parse("[true, false, null] // all three").unwrap();
        assert_eq!(value, serde_json::json!([true, false, null]));
    }

    #[test]
    fn test_parse_with_identity() {
        assert_eq!(parse_with("1_2_3", Identity).unwrap(), "123");
    }

    #[test]
    fn test_parse_with_custom() {
        let fixed = parse_with("\"code number?\"", Custom(|_: &str| Ok(3))).unwrap();
        assert_eq!(fixed, 3);
    }

    #[test]
    fn test_from_slice() {
        let nums: Vec<i32> = from_slice(b"[1, 2, 3] // bytes").unwrap();
        assert_eq!(nums, vec![1, 2, 3]);
    }

    #[test]
    fn test_empty_input_fails_at_delegate() {
        // Empty transcoded text is not valid JSON; the parser rejects it.
        let err = parse("").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_delegate_error_is_not_wrapped() {
        // A malformed trailing comma survives transcoding and fails
        // downstream with the parser's own error.
        let err = parse("[1, 2,] // oops").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }
}
