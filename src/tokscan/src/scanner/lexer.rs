// tokscan/src/scanner/lexer.rs

//! Low-level byte cursor over a buffered reader.
//!
//! The lexer only ever consumes bytes it has decided to keep. Lookahead goes
//! through `BufRead::fill_buf`, so the byte that ends a token stays in the
//! reader for the next call.

use crate::error::{Result, ScanError};
use crate::token::{Position, Token};
use std::io::{BufRead, ErrorKind};

/// Which bytes separate tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Newlines are ordinary whitespace
    Words,
    /// Newlines end the scan; only blanks separate tokens
    Line,
}

/// Space, tab, newline, vertical tab, form feed and carriage return.
pub fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b'\x0b' | b'\x0c')
}

fn is_blank(b: u8) -> bool {
    b != b'\n' && is_space(b)
}

pub struct Lexer<R> {
    reader: R,
    position: Position,
    max_token_len: usize,
    at_eof: bool,
}

impl<R: BufRead> Lexer<R> {
    pub fn new(reader: R, max_token_len: usize) -> Self {
        Self {
            reader,
            position: Position::start(),
            max_token_len,
            at_eof: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn get_ref(&self) -> &R {
        &self.reader
    }

    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Forget an end of input seen by an earlier call.
    ///
    /// Once the reader reports end of input the lexer stops reading until
    /// this is called, so data arriving later (a second Ctrl-D on a terminal)
    /// is never glued onto the current scan.
    pub fn clear_eof(&mut self) {
        self.at_eof = false;
    }

    /// Skip separators for `mode` and return the next byte without consuming it.
    ///
    /// In line mode this stops in front of a newline.
    pub fn skip_separators(&mut self, mode: Mode) -> Result<Option<u8>> {
        if self.at_eof {
            return Ok(None);
        }
        loop {
            let (skipped, next) = {
                let buf = fill(&mut self.reader)?;
                if buf.is_empty() {
                    self.at_eof = true;
                    return Ok(None);
                }
                let skip = match mode {
                    Mode::Words => buf.iter().position(|&b| !is_space(b)),
                    Mode::Line => buf.iter().position(|&b| !is_blank(b)),
                };
                match skip {
                    Some(n) => (n, Some(buf[n])),
                    None => (buf.len(), None),
                }
            };
            self.consume_tracked(skipped)?;
            if next.is_some() {
                return Ok(next);
            }
        }
    }

    /// Consume and decode one character, refilling as often as it takes.
    ///
    /// An invalid or truncated sequence decodes to `U+FFFD`.
    pub fn read_char(&mut self) -> Result<Option<char>> {
        if self.at_eof {
            return Ok(None);
        }
        let mut bytes = [0u8; 4];
        let mut len = 0;
        let mut need = 1;

        while len < need {
            let take = {
                let buf = fill(&mut self.reader)?;
                if buf.is_empty() {
                    self.at_eof = true;
                    break;
                }
                if len == 0 {
                    need = utf8_len(buf[0]);
                }
                let take = (need - len).min(buf.len());
                bytes[len..len + take].copy_from_slice(&buf[..take]);
                take
            };
            self.position.advance(&bytes[len..len + take]);
            self.reader.consume(take);
            len += take;
        }

        if len == 0 {
            return Ok(None);
        }
        let c = std::str::from_utf8(&bytes[..len])
            .ok()
            .and_then(|s| s.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER);
        Ok(Some(c))
    }

    /// Consume one byte that the caller has already peeked.
    pub fn bump(&mut self) -> Result<()> {
        self.consume_tracked(1)
    }

    /// Read the token that starts at the current byte.
    ///
    /// Stops in front of the first whitespace byte or at end of input. The
    /// caller is expected to have skipped separators first.
    pub fn read_token(&mut self) -> Result<Token> {
        let start = self.position;
        let mut bytes = Vec::new();

        loop {
            let (take, at_space) = {
                let buf = fill(&mut self.reader)?;
                if buf.is_empty() {
                    self.at_eof = true;
                    break;
                }
                let end = buf.iter().position(|&b| is_space(b));
                let run = end.unwrap_or(buf.len());
                let room = self.max_token_len - bytes.len();
                if run > room {
                    bytes.extend_from_slice(&buf[..room]);
                    (room, None)
                } else {
                    bytes.extend_from_slice(&buf[..run]);
                    (run, Some(end.is_some()))
                }
            };

            self.position.advance(&bytes[bytes.len() - take..]);
            self.reader.consume(take);

            match at_space {
                None => {
                    return Err(ScanError::TokenTooLong {
                        limit: self.max_token_len,
                    })
                }
                Some(true) => break,
                Some(false) => {}
            }
        }

        let text = String::from_utf8(bytes).map_err(|e| ScanError::InvalidUtf8 {
            offset: start.offset + e.utf8_error().valid_up_to(),
        })?;
        Ok(Token::new(text, start))
    }

    fn consume_tracked(&mut self, n: usize) -> Result<()> {
        if n == 0 {
            return Ok(());
        }
        let buf = fill(&mut self.reader)?;
        self.position.advance(&buf[..n]);
        self.reader.consume(n);
        Ok(())
    }
}

/// `fill_buf`, retrying on `Interrupted`.
///
/// The reader is asked for more data exactly once per successful call: an
/// empty buffer means end of input and must not trigger another read.
fn fill<R: BufRead>(reader: &mut R) -> Result<&[u8]> {
    let exhausted = loop {
        match reader.fill_buf() {
            Ok(buf) => break buf.is_empty(),
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(ScanError::from(e)),
        }
    };
    if exhausted {
        return Ok(&[]);
    }
    // Data is buffered now, so this hands it back without reading again.
    reader.fill_buf().map_err(ScanError::from)
}

/// Length of the UTF-8 sequence introduced by `lead`; 1 for invalid leads.
fn utf8_len(lead: u8) -> usize {
    match lead {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}
