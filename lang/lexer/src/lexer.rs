use crate::{RuleTable, ScanContext, Token, TokenKind, TokenStream};
use blog_utils::span::Cursor1;
use std::{
    collections::VecDeque,
    iter::FusedIterator,
    sync::atomic::{AtomicBool, Ordering},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScanState {
    Scanning,
    /// terminal; no token follows
    Done,
}

/// Lazily scans one source buffer into tokens.
///
/// At every offset the rules are tried in table order and the first match
/// wins. When no rule matches, a single-character [`TokenKind::Error`]
/// token is produced and scanning resumes after it.
pub struct Lexer<'src, 'r> {
    rules: &'r RuleTable,
    source: &'src str,
    cursor: Cursor1,
    /// tokens of a multi-token match not yet handed out
    pending: VecDeque<Token<'src>>,
    context: ScanContext,
    state: ScanState,
    cancel: Option<&'r AtomicBool>,
    cancelled: bool,
}

impl<'src> Lexer<'src, 'static> {
    pub fn new(source: &'src str) -> Self {
        Lexer::with_rules(RuleTable::standard(), source)
    }
}

impl<'src, 'r> Lexer<'src, 'r> {
    pub fn with_rules(rules: &'r RuleTable, source: &'src str) -> Self {
        Lexer {
            rules,
            source,
            cursor: 0,
            pending: VecDeque::new(),
            context: ScanContext::new(),
            state: ScanState::Scanning,
            cancel: None,
            cancelled: false,
        }
    }
    /// Stop scanning once `flag` is set. The flag is read between matches,
    /// never during one.
    pub fn cancel_on<'c>(self, flag: &'c AtomicBool) -> Lexer<'src, 'c>
    where
        'r: 'c,
    {
        let Lexer { rules, source, cursor, pending, context, state, cancelled, .. } = self;
        Lexer { rules, source, cursor, pending, context, state, cancel: Some(flag), cancelled }
    }
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
    pub fn state(&self) -> ScanState {
        self.state
    }
    pub fn cursor(&self) -> Cursor1 {
        self.cursor
    }
    pub fn source(&self) -> &'src str {
        self.source
    }
    pub fn context(&self) -> &ScanContext {
        &self.context
    }
    /// Input not yet consumed by a match.
    pub fn remaining(&self) -> &'src str {
        &self.source[self.cursor..]
    }

    fn step(&mut self) {
        for rule in self.rules {
            let matched = rule.apply(self.source, self.cursor, &mut self.context, &mut self.pending);
            if let Some(end) = matched {
                log::trace!("[{}] {}..{}", rule.name(), self.cursor, end);
                self.cursor = end;
                return;
            }
        }
        let Some(ch) = self.remaining().chars().next() else {
            self.state = ScanState::Done;
            return;
        };
        let end = self.cursor + ch.len_utf8();
        log::debug!("unrecognized character {:?} at {}", ch, self.cursor);
        self.pending.push_back(Token::new(TokenKind::Error, self.source, self.cursor, end));
        self.cursor = end;
    }
}

impl<'src> Iterator for Lexer<'src, '_> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(tok) = self.pending.pop_front() {
                break Some(tok);
            }
            if self.state == ScanState::Done {
                break None;
            }
            if self.cursor >= self.source.len() {
                log::trace!("scan finished at {}", self.cursor);
                self.state = ScanState::Done;
                continue;
            }
            if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                log::trace!("scan cancelled at {}", self.cursor);
                self.cancelled = true;
                self.state = ScanState::Done;
                continue;
            }
            self.step();
        }
    }
}

impl FusedIterator for Lexer<'_, '_> {}

/// Scan the whole of `source` with the standard rules.
pub fn tokenize(source: &str) -> TokenStream<'_> {
    TokenStream::new(source, Lexer::new(source).collect())
}
