use blog_utils::span::{FileInfo, Span};
use thiserror::Error;

/// The only lexical error: no rule accepts the character at the cursor.
/// The scanner recovers on its own, so this is reported, never raised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unrecognized character {ch:?} at {span}")]
    UnrecognizedCharacter { ch: char, span: Span },
}

impl LexError {
    pub fn span(&self) -> Span {
        match self {
            | LexError::UnrecognizedCharacter { span, .. } => *span,
        }
    }
    /// Render as `path:line:column: message`.
    pub fn located(&self, info: &FileInfo) -> String {
        let pos = info.position(self.span().start());
        let path =
            info.path().map(|p| p.display().to_string()).unwrap_or_else(|| "<input>".to_owned());
        match self {
            | LexError::UnrecognizedCharacter { ch, .. } => {
                format!("{path}:{pos}: unrecognized character {ch:?}")
            }
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} unrecognized character(s)", .0.len())]
pub struct LexErrors(pub Vec<LexError>);

/// Failure to build a rule table.
#[derive(Error, Debug)]
pub enum RuleError {
    #[error("rule `{name}` has an invalid pattern: {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
    #[error("rule `{name}` has {found} capture groups but emits {expected} kinds")]
    GroupCount { name: &'static str, found: usize, expected: usize },
}
