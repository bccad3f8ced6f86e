//! ZSON Format Reference
//!
//! This module documents the ZSON notation as implemented by this library.
//!
//! # Overview
//!
//! ZSON is a superset of JSON intended for hand-written configuration and
//! fixtures. Every JSON document is a valid ZSON document; ZSON adds three
//! conveniences on top, all of which are removed by transcoding so that any
//! standard JSON parser can consume the result.
//!
//! # Comments
//!
//! Comments may appear anywhere two JSON tokens may be separated:
//!
//! ```text
//! // A single-line comment runs to the end of the line.
//! {
//!   "name": "Alice", /* a multi-line comment
//!                       can span lines */
//!   "age": 30 // or trail a value
//! }
//! ```
//!
//! **Rules**:
//! - `//` deletes everything up to (not including) the next newline. End of
//!   input also closes it.
//! - `/*` deletes everything up to and including the next `*/`. Block
//!   comments do not nest; the first `*/` closes the comment.
//! - Comment markers inside string literals are content, never comments:
//!   `"http://example.com"` is untouched.
//! - A block comment left open at end of input is an error.
//! - Because comments are deleted outright, a comment between two numeric
//!   tokens joins them: `2/*x*/3` transcodes to `23`. This is a documented
//!   consequence of single-pass deletion, not an accident.
//!
//! # Multi-line strings
//!
//! A string fenced by triple quotes may span raw newlines:
//!
//! ```text
//! """Dear reader,
//! this is one string."""
//! ```
//!
//! **Rules**:
//! - Each raw newline becomes the escape sequence `\n` in the transcoded
//!   string.
//! - A lone `"` inside the fence is preserved literally (it is escaped in
//!   the output): `"""say "hi" there"""` keeps its inner quotes.
//! - A `"` immediately followed by two more `"` closes the fence. To end a
//!   string's *content* with a quote, escape it: `""""quote\""""` yields
//!   the string `"quote"`.
//! - Backslash escapes behave as in JSON strings; `\"` never closes the
//!   fence.
//! - `""""""` is the empty string.
//! - A fence left open at end of input is an error.
//!
//! # Numbers with digit separators
//!
//! Underscores may be used to group digits:
//!
//! ```text
//! { "mibi": 1_048_576, "giga": 1_000_000_000 }
//! ```
//!
//! **Rules**:
//! - Underscores are stripped wherever a numeric literal is being read,
//!   which begins at `-` or a digit and continues through digits, `e`, `-`,
//!   and `+`.
//! - Placement is not validated: `1__0`, `8_0000_0000`, and an underscore
//!   next to `e` are all accepted and stripped. Grouping is for the writer's
//!   eyes only.
//! - Underscores outside numeric position are ordinary content; object keys
//!   like `"8_yi"` are untouched.
//!
//! # Grammar
//!
//! Informally, over the JSON grammar:
//!
//! ```text
//! value        := json-value
//! comment      := "//" any-char-except-newline*
//!               | "/*" any-char* "*/"
//! multi-string := '"""' raw-char* '"""'
//! number       := ('-')? digits ('.' digits)? (('e'|'E') ('+'|'-')? digits)?
//! digits       := (digit | '_')+
//! ```
//!
//! # What transcoding does not do
//!
//! The transcoder guarantees only what the state machine naturally
//! guarantees. It does not validate that its output is well-formed JSON: a
//! trailing comma in the source is passed through verbatim and rejected by
//! the downstream parser, whose error surfaces unchanged.
