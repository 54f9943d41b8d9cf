//! Parser state
//!
//! One-token lookahead over the lexer. `bump()` routes skipped
//! comment/annotation tokens into the comment index and remembers the last
//! consumed grammar token so productions can close their token ranges.

use super::ast::TokenRange;
use super::comments::CommentIndex;
use crate::frontend::error::{CompileError, CompileResult};
use crate::frontend::lexer::tokens::{Token, TokenKind};
use crate::frontend::lexer::Lexer;
use crate::util::diagnostic::Diagnostic;
use crate::util::span::{Position, SourceFile, Span};

pub struct ParserState<'a> {
    lexer: Lexer<'a>,
    source: &'a SourceFile,
    /// One-token lookahead
    look: Token,
    /// Last consumed grammar token; None before anything was consumed
    prev: Option<Token>,
    comments: CommentIndex,
}

impl<'a> ParserState<'a> {
    pub fn new(source: &'a SourceFile) -> CompileResult<Self> {
        let mut lexer = Lexer::new(source)?;
        let mut comments = CommentIndex::new();
        let look = Self::next_grammar_token(&mut lexer, &mut comments)?;
        Ok(Self {
            lexer,
            source,
            look,
            prev: None,
            comments,
        })
    }

    fn next_grammar_token(
        lexer: &mut Lexer<'a>,
        comments: &mut CommentIndex,
    ) -> CompileResult<Token> {
        loop {
            let token = lexer.scan()?;
            if token.kind.is_comment() {
                comments.insert(token);
                continue;
            }
            return Ok(token);
        }
    }

    /// The current lookahead token
    pub fn look(&self) -> &Token {
        &self.look
    }

    /// Whether the lookahead matches a kind
    pub fn at(&self, kind: &TokenKind) -> bool {
        &self.look.kind == kind
    }

    /// Whether the lookahead is the terminal token
    pub fn at_end(&self) -> bool {
        matches!(self.look.kind, TokenKind::Eof)
    }

    /// Consume the lookahead and return it, loading the next grammar token
    pub fn bump(&mut self) -> CompileResult<Token> {
        let next = Self::next_grammar_token(&mut self.lexer, &mut self.comments)?;
        let consumed = std::mem::replace(&mut self.look, next);
        self.prev = Some(consumed.clone());
        Ok(consumed)
    }

    /// Consume the lookahead if it matches
    pub fn eat(&mut self, kind: &TokenKind) -> CompileResult<bool> {
        if self.at(kind) {
            self.bump()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Consume a token of the given kind or fault with the expectation text
    pub fn expect(&mut self, kind: &TokenKind, expectation: &str) -> CompileResult<Token> {
        if self.at(kind) {
            self.bump()
        } else {
            Err(self.fault(expectation))
        }
    }

    /// Consume an identifier token, returning its text
    pub fn expect_identifier(&mut self, expectation: &str) -> CompileResult<String> {
        match &self.look.kind {
            TokenKind::Identifier(name) => {
                let name = name.clone();
                self.bump()?;
                Ok(name)
            }
            _ => Err(self.fault(expectation)),
        }
    }

    /// Consume a virtual-identifier token, returning its text
    pub fn expect_virtual_id(&mut self, expectation: &str) -> CompileResult<String> {
        match &self.look.kind {
            TokenKind::VirtualId(name) => {
                let name = name.clone();
                self.bump()?;
                Ok(name)
            }
            _ => Err(self.fault(expectation)),
        }
    }

    /// Syntax fault at the lookahead: unexpected token + expectation text
    pub fn fault(&self, expectation: &str) -> CompileError {
        self.fault_message(format!(
            "unexpected token {}, expect {}",
            self.look.kind.describe(),
            expectation
        ))
    }

    /// Syntax fault at the lookahead with a fully formed message
    pub fn fault_message(&self, message: impl Into<String>) -> CompileError {
        let position = self.look.span.start;
        CompileError::Syntax(Diagnostic::at(message, self.source, position))
    }

    /// Mark the start of a production: first token index + start position
    pub fn open(&self) -> (usize, Position) {
        (self.look.index, self.look.span.start)
    }

    /// Close a production over everything consumed since `open`
    pub fn close(&self, first: usize, start: Position) -> (TokenRange, Span) {
        match &self.prev {
            Some(prev) => (
                TokenRange::new(first, prev.index),
                Span::new(start, prev.span.end),
            ),
            None => (TokenRange::new(first, first), Span::new(start, start)),
        }
    }

    /// The comment index collected so far
    pub fn into_comments(self) -> CommentIndex {
        self.comments
    }
}
