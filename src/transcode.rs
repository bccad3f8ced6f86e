//! The ZSON transcoder.
//!
//! This module implements the single-pass state machine that rewrites ZSON
//! text into strict JSON. The machine walks the input exactly once with two
//! characters of lookahead, deleting comments and underscore separators and
//! folding multi-line string literals into ordinary JSON strings.
//!
//! ## Overview
//!
//! - **Single-pass**: O(n) over the input, no backtracking beyond a single
//!   re-dispatch when a number ends
//! - **Character-based**: the input is indexed as characters, not bytes, so
//!   lookahead never splits a multi-byte sequence
//! - **Append-only output**: each step emits zero or more characters into a
//!   growing buffer; the input is never mutated
//!
//! ## Usage
//!
//! Most users should call [`crate::parse`] or [`crate::from_str`] instead.
//! Use [`transcode`] directly when you want the normalized JSON text itself:
//!
//! ```rust
//! use serde_zson::transcode;
//!
//! let json = transcode("[1, 2] // pair").unwrap();
//! assert_eq!(json, "[1, 2] ");
//!
//! let json = transcode("1_000_000").unwrap();
//! assert_eq!(json, "1000000");
//! ```

use crate::error::{Construct, Error, Result};

/// Lexical state of the transcoder.
///
/// Exactly one mode is active at any cursor position. The two string modes
/// carry their own escape flag so that single-line and multi-line handling
/// stay independent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Plain JSON content between tokens.
    Content,
    /// Inside a `//` comment, terminated by newline or end of input.
    SingleLineComment,
    /// Inside a `/* */` comment.
    MultiLineComment,
    /// Inside an ordinary `"` string literal.
    SingleLineString { escaped: bool },
    /// Inside a `"""` string literal.
    MultiLineString { escaped: bool },
    /// Inside a numeric literal, where underscores are stripped.
    Number,
}

/// The ZSON transcoder.
///
/// Consumes the full input up front and produces strict JSON text, or an
/// error if a comment or string literal is left open at end of input. Each
/// `Transcoder` is good for one [`run`](Transcoder::run); no state persists
/// across calls.
///
/// ```rust
/// use serde_zson::Transcoder;
///
/// let json = Transcoder::new("{ /* pad */ }").run().unwrap();
/// assert_eq!(json, "{  }");
/// ```
pub struct Transcoder {
    chars: Vec<char>,
    cursor: usize,
    line: usize,
    column: usize,
    out: String,
}

impl Transcoder {
    /// Creates a transcoder over the given input text.
    pub fn new(input: &str) -> Self {
        Transcoder {
            chars: input.chars().collect(),
            cursor: 0,
            line: 1,
            column: 1,
            out: String::with_capacity(input.len()),
        }
    }

    /// Runs the state machine to completion and returns the JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Unterminated`] if end of input is reached inside a
    /// block comment or a string literal. A `//` comment open at end of
    /// input is closed implicitly, like it is by a newline.
    pub fn run(mut self) -> Result<String> {
        let mut mode = Mode::Content;
        // Where the currently open comment or string began, for reporting.
        let mut opened = (self.line, self.column);

        while self.cursor < self.chars.len() {
            let chr = self.chars[self.cursor];
            let look1 = self.chars.get(self.cursor + 1).copied();
            let look2 = self.chars.get(self.cursor + 2).copied();

            mode = match mode {
                Mode::Content => match chr {
                    '"' if look1 == Some('"') && look2 == Some('"') => {
                        opened = (self.line, self.column);
                        // Keep one quote, drop the other two of the fence.
                        self.out.push('"');
                        self.advance(3);
                        Mode::MultiLineString { escaped: false }
                    }
                    '"' => {
                        opened = (self.line, self.column);
                        self.out.push('"');
                        self.advance(1);
                        Mode::SingleLineString { escaped: false }
                    }
                    '/' if look1 == Some('/') => {
                        self.advance(2);
                        Mode::SingleLineComment
                    }
                    '/' if look1 == Some('*') => {
                        opened = (self.line, self.column);
                        self.advance(2);
                        Mode::MultiLineComment
                    }
                    // Re-dispatch this character under Number without
                    // advancing the cursor.
                    '-' | '0'..='9' => Mode::Number,
                    _ => {
                        self.out.push(chr);
                        self.advance(1);
                        Mode::Content
                    }
                },
                Mode::SingleLineComment => {
                    if chr == '\n' {
                        self.out.push('\n');
                        self.advance(1);
                        Mode::Content
                    } else {
                        self.advance(1);
                        Mode::SingleLineComment
                    }
                }
                Mode::MultiLineComment => {
                    if chr == '*' && look1 == Some('/') {
                        self.advance(2);
                        Mode::Content
                    } else {
                        self.advance(1);
                        Mode::MultiLineComment
                    }
                }
                Mode::SingleLineString { escaped: true } => {
                    self.out.push(chr);
                    self.advance(1);
                    Mode::SingleLineString { escaped: false }
                }
                Mode::SingleLineString { escaped: false } => match chr {
                    '\\' => {
                        self.out.push('\\');
                        self.advance(1);
                        Mode::SingleLineString { escaped: true }
                    }
                    '"' => {
                        self.out.push('"');
                        self.advance(1);
                        Mode::Content
                    }
                    _ => {
                        self.out.push(chr);
                        self.advance(1);
                        Mode::SingleLineString { escaped: false }
                    }
                },
                Mode::MultiLineString { escaped: true } => {
                    self.out.push(chr);
                    self.advance(1);
                    Mode::MultiLineString { escaped: false }
                }
                Mode::MultiLineString { escaped: false } => match chr {
                    '\\' => {
                        self.out.push('\\');
                        self.advance(1);
                        Mode::MultiLineString { escaped: true }
                    }
                    '\n' => {
                        // Fold the raw newline into an escape sequence.
                        self.out.push_str("\\n");
                        self.advance(1);
                        Mode::MultiLineString { escaped: false }
                    }
                    '"' if look1 == Some('"') && look2 == Some('"') => {
                        // Closing fence; keep one quote, drop two.
                        self.out.push('"');
                        self.advance(3);
                        Mode::Content
                    }
                    '"' => {
                        // A lone quote inside the literal must be escaped.
                        self.out.push_str("\\\"");
                        self.advance(1);
                        Mode::MultiLineString { escaped: false }
                    }
                    _ => {
                        self.out.push(chr);
                        self.advance(1);
                        Mode::MultiLineString { escaped: false }
                    }
                },
                Mode::Number => match chr {
                    '_' => {
                        // Underscores are group separators; drop them. No
                        // adjacency rules are enforced here.
                        self.advance(1);
                        Mode::Number
                    }
                    '0'..='9' | 'e' | '-' | '+' => {
                        self.out.push(chr);
                        self.advance(1);
                        Mode::Number
                    }
                    // Anything else ends the number. Re-check the same
                    // character as content without advancing.
                    _ => Mode::Content,
                },
            };
        }

        match mode {
            // A line comment is terminated by end of input as well as by a
            // newline.
            Mode::Content | Mode::Number | Mode::SingleLineComment => Ok(self.out),
            Mode::MultiLineComment => {
                Err(Error::unterminated(Construct::BlockComment, opened.0, opened.1))
            }
            Mode::SingleLineString { .. } => {
                Err(Error::unterminated(Construct::String, opened.0, opened.1))
            }
            Mode::MultiLineString { .. } => {
                Err(Error::unterminated(Construct::MultiLineString, opened.0, opened.1))
            }
        }
    }

    fn advance(&mut self, n: usize) {
        for _ in 0..n {
            if let Some(&c) = self.chars.get(self.cursor) {
                self.cursor += 1;
                if c == '\n' {
                    self.line += 1;
                    self.column = 1;
                } else {
                    self.column += 1;
                }
            }
        }
    }
}

/// Transcodes ZSON text into strict JSON text.
///
/// This is the `Identity` path of [`crate::parse_with`] exposed directly:
/// comments and underscore separators are removed and multi-line strings
/// are folded, but the result is not parsed.
///
/// # Examples
///
/// ```rust
/// use serde_zson::transcode;
///
/// assert_eq!(transcode("{/*excise*/}").unwrap(), "{}");
/// assert_eq!(transcode("\"\"\"A\nB\"\"\"").unwrap(), "\"A\\nB\"");
/// ```
///
/// # Errors
///
/// Returns [`Error::Unterminated`] for a block comment or string literal
/// still open at end of input.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn transcode(input: &str) -> Result<String> {
    Transcoder::new(input).run()
}
