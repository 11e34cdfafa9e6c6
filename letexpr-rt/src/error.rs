//! Source positions, spans, and the runtime's diagnostic error type.
//!
//! This module provides:
//! - [`Position`]: a 0-based line/column location in source text,
//! - [`Span`]: a half-open `[start, end)` range of positions,
//! - [`RtError`]: a flattened error carrying a message and an optional span,
//! - a convenient `span!` macro for building `Option<Span>` values inline.
//!
//! Columns count bytes from the start of the line, which is what the lexer
//! advances by.
//!
//! # Examples
//!
//! ```rust
//! # use letexpr_rt::{RtError, Span, Position, span};
//! let sp = Span::new(Position::new(0, 5), Position::new(0, 10));
//! assert!(!sp.is_empty());
//! assert_eq!(sp.line_range(), (0, 0));
//!
//! let err = RtError::new("stack underflow").with_span(Some(sp));
//! assert!(err.to_string().contains("stack underflow"));
//!
//! let sp_opt = span!(0, 1, 0, 5);
//! assert!(sp_opt.is_some());
//! ```

use thiserror::Error;

/// A 0-based line/column position in source text.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
    /// 0-based line number.
    pub line: usize,
    /// 0-based byte column within the line.
    pub column: usize,
}

impl Position {
    /// Creates a new `Position`.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Advances past `bytes`, moving to the next line after each `\n`.
    pub fn advance(&mut self, bytes: &[u8]) {
        for &b in bytes {
            if b == b'\n' {
                self.line += 1;
                self.column = 0;
            } else {
                self.column += 1;
            }
        }
    }
}

/// A half-open source range: `[start, end)`.
///
/// Invariants are not enforced here, but it is conventional for `start <= end`
/// in lexicographic `(line, column)` ordering.
#[derive(Debug, Clone, Default, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    /// Creates a new `Span`.
    #[inline]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Start (or restart) this span at its current `end` position (empty span at end).
    /// Effect: span(x,y, z,w) -> span(z,w, z,w)
    pub fn collapse(&mut self) {
        self.start = self.end;
    }

    /// Merge with another span by covering both.
    pub fn merge(&self, other: &Span) -> Span {
        let start = if self.start <= other.start {
            self.start
        } else {
            other.start
        };
        let end = if self.end >= other.end {
            self.end
        } else {
            other.end
        };
        Span { start, end }
    }

    /// Is this span empty (start == end)?
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the inclusive line range spanned by this `Span`.
    #[inline]
    pub fn line_range(&self) -> (usize, usize) {
        (self.start.line, self.end.line)
    }

    /// Pretty-print for diagnostics (human-readable).
    #[inline]
    pub fn display(&self) -> String {
        format!(
            "span {}:{} to {}:{}",
            self.start.line, self.start.column, self.end.line, self.end.column
        )
    }
}

/// A simple error type for lexer/parser runtime diagnostics.
///
/// Carries only a message and an optional [`Span`]. Table inconsistencies,
/// driver failures, and DFA construction problems are all reported this way;
/// language crates wrap it in their own typed errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}{}", .span.map(|s| format!(" at {}", s.display())).unwrap_or_default())]
pub struct RtError {
    /// Human-readable message.
    pub message: String,
    /// Optional source span for pinpointing the error.
    pub span: Option<Span>,
}

impl RtError {
    /// Creates an error without a span.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: None,
        }
    }

    /// Replaces the span when `span.is_some()`.
    #[must_use]
    pub fn with_span(mut self, span: Option<Span>) -> Self {
        if span.is_some() {
            self.span = span;
        }
        self
    }

    /// Convert any error into `RtError`, preserving an existing `RtError`
    /// (pass-through) and optionally attaching/overriding the span.
    pub fn from_err<E>(err: E, span: Option<Span>) -> Self
    where
        E: std::fmt::Display + 'static,
    {
        if let Some(e) = (&err as &dyn std::any::Any).downcast_ref::<RtError>() {
            e.clone().with_span(span)
        } else {
            RtError {
                message: err.to_string(),
                span,
            }
        }
    }
}

/// Build an `Option<Span>` inline from 0-based line/column coordinates.
///
/// ```rust
/// # use letexpr_rt::span;
/// let s = span!(0, 1, 0, 5);
/// assert_eq!(s.unwrap().end.column, 5);
/// ```
#[macro_export]
macro_rules! span {
    ($line_start:expr, $col_start:expr, $line_end:expr, $col_end:expr) => {
        Some($crate::Span {
            start: $crate::Position {
                line: $line_start,
                column: $col_start,
            },
            end: $crate::Position {
                line: $line_end,
                column: $col_end,
            },
        })
    };
}
