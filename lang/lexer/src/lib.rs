//! Lexer for BLOG, a language for probabilistic models.
//!
//! Scanning tries an ordered [`RuleTable`] at every offset and keeps the
//! first rule that matches. Whitespace and comments stay in the output, so
//! the token texts always concatenate back to the input.

/// Token kinds and positioned tokens.
pub mod token;
pub use token::*;
/// The ordered rule table and its matchers.
pub mod rules;
pub use rules::{Emit, Rule, RuleTable, ScanContext};
/// The scanning iterator.
pub mod lexer;
pub use lexer::{Lexer, ScanState, tokenize};
/// The collected output of one scan.
pub mod stream;
pub use stream::TokenStream;
/// Lexical errors.
pub mod err;
pub use err::*;
