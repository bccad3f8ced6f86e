//! Delegate strategies applied to transcoded text.
//!
//! The transcoder produces strict JSON text; a [`Delegate`] decides what
//! happens to it. Three strategies are provided:
//!
//! - [`Standard`]: parse with [`serde_json`] into a [`serde_json::Value`]
//! - [`Identity`]: return the text itself, unparsed
//! - [`Custom`]: hand the text to a caller-supplied function
//!
//! ## Examples
//!
//! ```rust
//! use serde_zson::{parse_with, Custom, Identity, Standard};
//!
//! // Standard: a value tree.
//! let value = parse_with("{/*excise*/}", Standard).unwrap();
//! assert_eq!(value, serde_json::json!({}));
//!
//! // Identity: the normalized text.
//! let text = parse_with("{/*excise*/}", Identity).unwrap();
//! assert_eq!(text, "{}");
//!
//! // Custom: anything the caller wants to make of it.
//! let len = parse_with("{/*excise*/}", Custom(|json: &str| Ok(json.len()))).unwrap();
//! assert_eq!(len, 2);
//! ```

use crate::error::{Error, Result};
use serde_json::Value;

/// A strategy that turns transcoded JSON text into a final result.
///
/// The transcoder does not inspect or constrain what a delegate produces;
/// whatever the delegate raises propagates to the caller unmodified.
pub trait Delegate {
    /// The result type this delegate produces.
    type Output;

    /// Consumes the transcoded JSON text and produces the final result.
    fn apply(self, json: String) -> Result<Self::Output>;
}

/// Parses the transcoded text with the standard JSON parser.
///
/// This is the delegate [`crate::parse`] uses. Syntax errors raised by
/// [`serde_json`] are propagated unchanged as [`Error::Json`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Standard;

impl Delegate for Standard {
    type Output = Value;

    fn apply(self, json: String) -> Result<Value> {
        serde_json::from_str(&json).map_err(Error::from)
    }
}

/// Returns the transcoded text without parsing it.
///
/// Used when the caller wants the normalized JSON text rather than a value
/// tree. [`crate::transcode`] is the same operation as a free function.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Delegate for Identity {
    type Output = String;

    fn apply(self, json: String) -> Result<String> {
        Ok(json)
    }
}

/// Invokes a caller-supplied parser on the transcoded text.
///
/// The function receives the JSON text and its result, success or failure,
/// is returned as-is. Foreign error types can be carried with
/// [`Error::custom`].
///
/// ```rust
/// use serde_zson::{parse_with, Custom, Error};
///
/// let n = parse_with(
///     "4_2 // the answer",
///     Custom(|json: &str| json.trim().parse::<u32>().map_err(Error::custom)),
/// )
/// .unwrap();
/// assert_eq!(n, 42);
/// ```
pub struct Custom<F>(pub F);

impl<T, F> Delegate for Custom<F>
where
    F: FnOnce(&str) -> Result<T>,
{
    type Output = T;

    fn apply(self, json: String) -> Result<T> {
        (self.0)(&json)
    }
}
