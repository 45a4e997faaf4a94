use blog_utils::span::{Cursor1, Span};
use std::fmt::{Debug, Display};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Identifier,
    /// an identifier directly followed by `(`
    FunctionName,
    TypeName,
    Keyword,
    /// `true`, `false` and `null`
    KeywordConstant,
    Operator,
    Punctuation,
    StringLiteral,
    IntegerLiteral,
    FloatLiteral,
    LineComment,
    BlockComment,
    Whitespace,
    /// a single character no rule accepts
    Error,
}

impl TokenKind {
    pub const ALL: [TokenKind; 14] = [
        TokenKind::Identifier,
        TokenKind::FunctionName,
        TokenKind::TypeName,
        TokenKind::Keyword,
        TokenKind::KeywordConstant,
        TokenKind::Operator,
        TokenKind::Punctuation,
        TokenKind::StringLiteral,
        TokenKind::IntegerLiteral,
        TokenKind::FloatLiteral,
        TokenKind::LineComment,
        TokenKind::BlockComment,
        TokenKind::Whitespace,
        TokenKind::Error,
    ];

    /// Whitespace and comments; a parser skips them.
    pub fn is_trivia(self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::LineComment | TokenKind::BlockComment)
    }
    pub fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::StringLiteral
                | TokenKind::IntegerLiteral
                | TokenKind::FloatLiteral
                | TokenKind::KeywordConstant
        )
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            | TokenKind::Identifier => "Identifier",
            | TokenKind::FunctionName => "FunctionName",
            | TokenKind::TypeName => "TypeName",
            | TokenKind::Keyword => "Keyword",
            | TokenKind::KeywordConstant => "KeywordConstant",
            | TokenKind::Operator => "Operator",
            | TokenKind::Punctuation => "Punctuation",
            | TokenKind::StringLiteral => "StringLiteral",
            | TokenKind::IntegerLiteral => "IntegerLiteral",
            | TokenKind::FloatLiteral => "FloatLiteral",
            | TokenKind::LineComment => "LineComment",
            | TokenKind::BlockComment => "BlockComment",
            | TokenKind::Whitespace => "Whitespace",
            | TokenKind::Error => "Error",
        };
        f.pad(s)
    }
}

/// A classified slice of the source. `text` is always `&source[start..end]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub text: &'src str,
    pub start: Cursor1,
    pub end: Cursor1,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, source: &'src str, start: Cursor1, end: Cursor1) -> Self {
        Token { kind, text: &source[start..end], start, end }
    }
    pub fn span(&self) -> Span {
        Span::new(self.start, self.end)
    }
    pub fn len(&self) -> usize {
        self.end - self.start
    }
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Token { kind, text, start, end } = self;
        write!(f, "{kind}({text:?})@{start}..{end}")
    }
}

impl Debug for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Display::fmt(self, f)
    }
}
