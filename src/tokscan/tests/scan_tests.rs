// tokscan/tests/scan_tests.rs

use std::io::{BufRead, BufReader, Cursor, Read};
use tokscan::error::Result;
use tokscan::{scan, scan_line, ScanError, ScanOptions, ScanOutcome, Scanner};

#[test]
fn exact_token_count_fills_every_slot() {
    let mut input = Cursor::new("one two three");
    let mut a = String::new();
    let mut b = String::new();
    let mut c = String::new();

    let outcome = scan(&mut input, &mut [&mut a, &mut b, &mut c]);

    assert_eq!(outcome, ScanOutcome::complete(3));
    assert_eq!([a, b, c], ["one", "two", "three"]);
}

#[test]
fn fewer_tokens_than_slots_reports_eof_with_count() {
    let mut input = Cursor::new("  first\n second \n");
    let mut a = String::new();
    let mut b = String::new();
    let mut c = String::new();
    let mut d = String::new();

    let outcome = scan(&mut input, &mut [&mut a, &mut b, &mut c, &mut d]);

    assert_eq!(outcome.filled, 2);
    assert_eq!(outcome.error, Some(ScanError::UnexpectedEof));
    assert_eq!([a, b, c, d], ["first", "second", "", ""]);
}

#[test]
fn empty_slot_list_leaves_stream_untouched() {
    let mut input = Cursor::new("anything at all");
    let outcome = scan(&mut input, &mut []);
    assert_eq!(outcome, ScanOutcome::complete(0));
    assert_eq!(input.position(), 0);
}

#[test]
fn empty_slot_list_on_empty_stream_is_not_an_error() {
    let mut input = Cursor::new("");
    assert!(scan(&mut input, &mut []).is_complete());
}

#[test]
fn whitespace_only_input_is_eof() {
    let mut input = Cursor::new(" \t\n\r\n ");
    let mut a = String::from("keep");
    let outcome = scan(&mut input, &mut [&mut a]);
    assert_eq!(outcome, ScanOutcome::partial(0, ScanError::UnexpectedEof));
    assert_eq!(a, "keep");
}

#[test]
fn caller_can_resume_on_the_same_reader() {
    let mut input = Cursor::new("10 20 thirty 40");
    let mut x = 0u32;
    let mut y = 0u32;

    let first = scan(&mut input, &mut [&mut x, &mut y]);
    assert!(first.is_complete());
    assert_eq!((x, y), (10, 20));

    let second = scan(&mut input, &mut [&mut x, &mut y]);
    assert_eq!(second.filled, 0);
    assert!(matches!(
        second.error,
        Some(ScanError::Conversion { ref token, ref target, .. }) if token == "thirty" && target == "u32"
    ));
    assert_eq!((x, y), (10, 20));

    let third = scan(&mut input, &mut [&mut y]);
    assert!(third.is_complete());
    assert_eq!(y, 40);
}

#[test]
fn reader_position_is_left_at_the_delimiter() -> Result<()> {
    let mut input = Cursor::new("key value\nremaining line\n");
    let mut key = String::new();
    let mut value = String::new();
    scan(&mut input, &mut [&mut key, &mut value]).into_result()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    assert_eq!(line, "\n");
    line.clear();
    input.read_line(&mut line)?;
    assert_eq!(line, "remaining line\n");
    Ok(())
}

#[test]
fn line_mode_reads_one_record_per_call() -> Result<()> {
    let mut input = BufReader::new(Cursor::new("a 1\nb 2\nc\n"));
    let mut name = String::new();
    let mut value = 0i32;

    scan_line(&mut input, &mut [&mut name, &mut value]).into_result()?;
    assert_eq!((name.as_str(), value), ("a", 1));

    scan_line(&mut input, &mut [&mut name, &mut value]).into_result()?;
    assert_eq!((name.as_str(), value), ("b", 2));

    let outcome = scan_line(&mut input, &mut [&mut name, &mut value]);
    assert_eq!(outcome, ScanOutcome::partial(1, ScanError::UnexpectedNewline));
    assert_eq!(name, "c");
    Ok(())
}

#[test]
fn line_mode_extra_input_consumes_one_character() {
    let mut input = Cursor::new("x yz\n");
    let mut a = String::new();
    let outcome = scan_line(&mut input, &mut [&mut a]);
    assert_eq!(
        outcome,
        ScanOutcome::partial(1, ScanError::ExpectedNewline { found: 'y' })
    );

    let mut rest = String::new();
    input.read_to_string(&mut rest).unwrap();
    assert_eq!(rest, "z\n");
}

#[test]
fn line_mode_reports_multibyte_character_split_across_refills() {
    let mut input = BufReader::with_capacity(1, Cursor::new("a é\n"));
    let mut a = String::new();
    let outcome = scan_line(&mut input, &mut [&mut a]);
    assert_eq!(
        outcome,
        ScanOutcome::partial(1, ScanError::ExpectedNewline { found: 'é' })
    );
}

#[test]
fn scanner_tracks_position_across_calls() {
    let mut scanner = Scanner::new(Cursor::new("ab\ncd ef"));
    let mut s = String::new();

    assert!(scanner.scan(&mut [&mut s]).is_complete());
    assert!(scanner.scan(&mut [&mut s]).is_complete());
    assert_eq!(s, "cd");

    let pos = scanner.position();
    assert_eq!((pos.line, pos.column, pos.offset), (2, 3, 5));

    let token = scanner.next_token().unwrap().unwrap();
    assert_eq!(token.text, "ef");
    assert_eq!((token.line(), token.column(), token.offset()), (2, 4, 6));
}

#[test]
fn unicode_tokens_survive_small_buffers() {
    let reader = BufReader::with_capacity(3, Cursor::new("größe\tñandú 東京"));
    let mut scanner = Scanner::new(reader);
    let texts: Vec<String> = scanner
        .tokens()
        .map(|t| t.map(|t| t.text))
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(texts, ["größe", "ñandú", "東京"]);
}

#[test]
fn token_limit_is_configurable() {
    let options = ScanOptions::new().with_max_token_len(5);
    let mut scanner = Scanner::with_options(Cursor::new("short toolongtoken"), options);
    let mut a = String::new();
    let mut b = String::new();

    let outcome = scanner.scan(&mut [&mut a, &mut b]);
    assert_eq!(outcome, ScanOutcome::partial(1, ScanError::TokenTooLong { limit: 5 }));
    assert_eq!(a, "short");
    assert_eq!(scanner.options().max_token_len, 5);
}

/// Hands out one chunk per `read`; an empty chunk reads as end of input,
/// the way a terminal reports Ctrl-D while more typing may follow.
struct Chunks {
    chunks: Vec<&'static str>,
    reads: usize,
}

impl Chunks {
    fn new(chunks: &[&'static str]) -> Self {
        Self {
            chunks: chunks.to_vec(),
            reads: 0,
        }
    }
}

impl Read for Chunks {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        self.reads += 1;
        if self.chunks.is_empty() {
            return Ok(0);
        }
        let chunk = self.chunks.remove(0).as_bytes();
        buf[..chunk.len()].copy_from_slice(chunk);
        Ok(chunk.len())
    }
}

#[test]
fn end_of_input_stops_the_scan_even_if_more_data_follows() {
    let mut input = BufReader::new(Chunks::new(&["a", "", "b"]));
    let mut first = String::new();
    let mut second = String::from("unchanged");

    let outcome = scan(&mut input, &mut [&mut first, &mut second]);
    assert_eq!(outcome, ScanOutcome::partial(1, ScanError::UnexpectedEof));
    assert_eq!(first, "a");
    assert_eq!(second, "unchanged");
    assert_eq!(input.get_ref().reads, 2);

    // A later call sees the data that arrived after end of input.
    let outcome = scan(&mut input, &mut [&mut second]);
    assert!(outcome.is_complete());
    assert_eq!(second, "b");
}

#[test]
fn end_of_input_after_full_line_completes_line_mode() {
    let mut input = BufReader::new(Chunks::new(&["x y", "", "z\n"]));
    let mut a = String::new();
    let mut b = String::new();
    assert!(scan_line(&mut input, &mut [&mut a, &mut b]).is_complete());
    assert_eq!((a.as_str(), b.as_str()), ("x", "y"));
}

/// Fails with `Interrupted` before every chunk of real data.
struct Interrupting {
    data: &'static [u8],
    interrupt_next: bool,
}

impl Read for Interrupting {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        if self.interrupt_next && !self.data.is_empty() {
            self.interrupt_next = false;
            return Err(std::io::Error::new(
                std::io::ErrorKind::Interrupted,
                "signal",
            ));
        }
        self.interrupt_next = true;
        let n = self.data.len().min(buf.len()).min(3);
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[test]
fn interrupted_reads_are_retried() {
    let reader = Interrupting {
        data: b"first second",
        interrupt_next: true,
    };
    let mut input = BufReader::new(reader);
    let mut a = String::new();
    let mut b = String::new();

    let outcome = scan(&mut input, &mut [&mut a, &mut b]);
    assert_eq!(outcome, ScanOutcome::complete(2));
    assert_eq!((a.as_str(), b.as_str()), ("first", "second"));
}

struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
        Err(std::io::Error::new(std::io::ErrorKind::Other, "device gone"))
    }
}

#[test]
fn reader_errors_are_reported_not_swallowed() {
    let mut input = BufReader::new(FailingReader);
    let mut a = String::new();
    let outcome = scan(&mut input, &mut [&mut a]);
    assert_eq!(outcome.filled, 0);
    assert_eq!(outcome.error, Some(ScanError::Io("device gone".to_string())));
}

#[test]
fn tokens_serialize_with_their_position() {
    let mut scanner = Scanner::new(Cursor::new("\n  tok"));
    let token = scanner.next_token().unwrap().unwrap();
    let json = serde_json::to_value(&token).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "text": "tok",
            "position": { "line": 2, "column": 3, "offset": 3 }
        })
    );
}
