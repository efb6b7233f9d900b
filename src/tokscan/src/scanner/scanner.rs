// tokscan/src/scanner/scanner.rs

//! Core scanner implementation: fills destination slots from a token stream.

use super::lexer::{Lexer, Mode};
use crate::error::{Result, ScanError};
use crate::outcome::ScanOutcome;
use crate::slot::Destination;
use crate::token::{Position, Token};
use log::{debug, trace};
use std::io::BufRead;

/// Default upper bound on the length of a single token, in bytes.
pub const DEFAULT_MAX_TOKEN_LEN: usize = 1 << 20;

/// Scanner configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Longest token accepted, in bytes
    pub max_token_len: usize,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum token length (default: 1 MiB). Zero is treated as one.
    pub fn with_max_token_len(mut self, limit: usize) -> Self {
        self.max_token_len = limit.max(1);
        self
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_token_len: DEFAULT_MAX_TOKEN_LEN,
        }
    }
}

/// Whitespace-delimited token scanner over a buffered reader.
///
/// The scanner never reads ahead past the byte that ends a token, so the
/// reader can be recovered with [`Scanner::into_inner`] and handed to other
/// code at exactly the point scanning stopped.
pub struct Scanner<R> {
    lexer: Lexer<R>,
    options: ScanOptions,
}

impl<R: BufRead> Scanner<R> {
    /// Create a new scanner with default options.
    pub fn new(reader: R) -> Self {
        Self::with_options(reader, ScanOptions::default())
    }

    pub fn with_options(reader: R, options: ScanOptions) -> Self {
        Self {
            lexer: Lexer::new(reader, options.max_token_len),
            options,
        }
    }

    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    /// Position of the next unread byte.
    pub fn position(&self) -> Position {
        self.lexer.position()
    }

    pub fn get_ref(&self) -> &R {
        self.lexer.get_ref()
    }

    pub fn into_inner(self) -> R {
        self.lexer.into_inner()
    }

    /// Fill `destinations` in order, treating newlines as ordinary whitespace.
    ///
    /// Stops at the first token that fails to convert or when the input runs
    /// out. An empty destination list returns immediately without reading.
    pub fn scan(&mut self, destinations: &mut [&mut dyn Destination]) -> ScanOutcome {
        self.scan_in(Mode::Words, destinations)
    }

    /// Like [`Scanner::scan`], but the tokens must all sit on the current
    /// line and the line must end right after the last one.
    pub fn scan_line(&mut self, destinations: &mut [&mut dyn Destination]) -> ScanOutcome {
        self.scan_in(Mode::Line, destinations)
    }

    /// Read the next token, or `None` once the input is exhausted.
    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.lexer.clear_eof();
        match self.lexer.skip_separators(Mode::Words)? {
            None => Ok(None),
            Some(_) => self.lexer.read_token().map(Some),
        }
    }

    /// Iterate over the remaining tokens. Iteration ends after the first error.
    pub fn tokens(&mut self) -> Tokens<'_, R> {
        Tokens {
            scanner: self,
            done: false,
        }
    }

    fn scan_in(&mut self, mode: Mode, destinations: &mut [&mut dyn Destination]) -> ScanOutcome {
        if destinations.is_empty() {
            return ScanOutcome::complete(0);
        }
        self.lexer.clear_eof();

        debug!(
            "scanning {} destination(s) in {:?} mode at {}",
            destinations.len(),
            mode,
            self.position()
        );

        let mut filled = 0;
        for dest in destinations.iter_mut() {
            let token = match self.token_for(mode) {
                Ok(token) => token,
                Err(err) => return self.stop(filled, err),
            };
            trace!("token {:?} at {}", token.text, token.position);

            if let Err(reason) = dest.fill(&token.text) {
                let err =
                    ScanError::conversion(token.text.as_str(), dest.type_name(), reason.as_str());
                return self.stop(filled, err);
            }
            filled += 1;
        }

        if mode == Mode::Line {
            if let Err(err) = self.finish_line() {
                return self.stop(filled, err);
            }
        }

        ScanOutcome::complete(filled)
    }

    fn token_for(&mut self, mode: Mode) -> Result<Token> {
        match self.lexer.skip_separators(mode)? {
            None => Err(ScanError::UnexpectedEof),
            Some(b'\n') => {
                self.lexer.bump()?;
                Err(ScanError::UnexpectedNewline)
            }
            Some(_) => self.lexer.read_token(),
        }
    }

    /// Accept trailing blanks followed by a newline (consumed) or end of input.
    ///
    /// Anything else is an error; the offending character is consumed, the
    /// rest of the line is left unread.
    fn finish_line(&mut self) -> Result<()> {
        match self.lexer.skip_separators(Mode::Line)? {
            None => Ok(()),
            Some(b'\n') => self.lexer.bump(),
            Some(_) => {
                let found = self
                    .lexer
                    .read_char()?
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                Err(ScanError::ExpectedNewline { found })
            }
        }
    }

    fn stop(&self, filled: usize, err: ScanError) -> ScanOutcome {
        debug!("scan stopped after {} slot(s) at {}: {}", filled, self.position(), err);
        ScanOutcome::partial(filled, err)
    }
}

/// Iterator over the tokens of a [`Scanner`].
pub struct Tokens<'a, R> {
    scanner: &'a mut Scanner<R>,
    done: bool,
}

impl<R: BufRead> Iterator for Tokens<'_, R> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.scanner.next_token() {
            Ok(Some(token)) => Some(Ok(token)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<R: BufRead> std::iter::FusedIterator for Tokens<'_, R> {}
