use crate::{LexError, LexErrors, Token, TokenKind};
use std::ops::Index;

/// Every token of one completed scan, in source order. Read-only.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TokenStream<'src> {
    source: &'src str,
    tokens: Vec<Token<'src>>,
}

impl<'src> TokenStream<'src> {
    pub fn new(source: &'src str, tokens: Vec<Token<'src>>) -> Self {
        TokenStream { source, tokens }
    }
    pub fn source(&self) -> &'src str {
        self.source
    }
    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }
    pub fn len(&self) -> usize {
        self.tokens.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, Token<'src>> {
        self.tokens.iter()
    }
    pub fn kinds(&self) -> Vec<TokenKind> {
        self.tokens.iter().map(|tok| tok.kind).collect()
    }
    /// Tokens other than whitespace and comments.
    pub fn significant(&self) -> impl Iterator<Item = &Token<'src>> {
        self.tokens.iter().filter(|tok| !tok.kind.is_trivia())
    }
    /// Concatenated token texts; equal to the source for any complete scan.
    pub fn reconstruct(&self) -> String {
        self.tokens.iter().map(|tok| tok.text).collect()
    }
    pub fn errors(&self) -> Vec<LexError> {
        (self.tokens.iter())
            .filter(|tok| tok.kind == TokenKind::Error)
            .filter_map(|tok| {
                let ch = tok.text.chars().next()?;
                Some(LexError::UnrecognizedCharacter { ch, span: tok.span() })
            })
            .collect()
    }
    pub fn check(&self) -> Result<(), LexErrors> {
        let errors = self.errors();
        if errors.is_empty() { Ok(()) } else { Err(LexErrors(errors)) }
    }
    pub fn into_tokens(self) -> Vec<Token<'src>> {
        self.tokens
    }
}

impl<'src> Index<usize> for TokenStream<'src> {
    type Output = Token<'src>;
    fn index(&self, index: usize) -> &Self::Output {
        &self.tokens[index]
    }
}

impl<'a, 'src> IntoIterator for &'a TokenStream<'src> {
    type Item = &'a Token<'src>;
    type IntoIter = std::slice::Iter<'a, Token<'src>>;
    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
