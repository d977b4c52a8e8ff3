//! Helpers shared by the integration tests.

#![allow(dead_code)]

use rotalog::{Error, Level, Sink};
use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Cloneable in-memory writer so a console sink's output can be inspected.
#[derive(Clone, Default)]
pub struct SharedBuf(Arc<Mutex<Vec<u8>>>);

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Counts calls and keeps every line it receives.
#[derive(Clone, Default)]
pub struct RecordingSink {
    pub writes: Arc<AtomicUsize>,
    pub lines: Arc<Mutex<Vec<(Level, String)>>>,
}

impl RecordingSink {
    pub fn count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    pub fn lines(&self) -> Vec<(Level, String)> {
        self.lines.lock().unwrap().clone()
    }
}

impl Sink for RecordingSink {
    fn write_line(&mut self, line: &str, level: Level) -> Result<(), Error> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.lines.lock().unwrap().push((level, line.to_string()));
        Ok(())
    }
}

/// Always fails, like a file sink whose rotation could not open a new file.
pub struct FailingSink;

impl Sink for FailingSink {
    fn write_line(&mut self, _line: &str, _level: Level) -> Result<(), Error> {
        Err(Error::Io(io::Error::other("disk gone")))
    }
}

/// Pieces of a `[<code> <date> <time> <thread> <file>:<line>]<body>` line.
#[derive(Debug)]
pub struct Parsed<'a> {
    pub code: char,
    pub date: &'a str,
    pub time: &'a str,
    pub thread: &'a str,
    pub file: &'a str,
    pub line: u32,
    pub body: &'a str,
}

/// `None` for anything that is not exactly one well-formed line.
pub fn parse_line(line: &str) -> Option<Parsed<'_>> {
    let rest = line.strip_prefix('[')?;
    let (header, body) = rest.split_once(']')?;
    let mut parts = header.split(' ');
    let code = parts.next()?;
    let date = parts.next()?;
    let time = parts.next()?;
    let thread = parts.next()?;
    let location = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let mut code_chars = code.chars();
    let code = code_chars.next()?;
    if code_chars.next().is_some() || !"DIWEF".contains(code) {
        return None;
    }
    if !is_pattern(date, "dddd-dd-dd") || !is_pattern(time, "dd:dd:dd") {
        return None;
    }
    if thread.is_empty() || !thread.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let (file, line_no) = location.rsplit_once(':')?;
    let line = line_no.parse().ok()?;
    if body.contains('\n') || body.contains('[') || body.contains(']') {
        return None;
    }

    Some(Parsed {
        code,
        date,
        time,
        thread,
        file,
        line,
        body,
    })
}

fn is_pattern(s: &str, pattern: &str) -> bool {
    s.len() == pattern.len()
        && s.chars().zip(pattern.chars()).all(|(c, p)| match p {
            'd' => c.is_ascii_digit(),
            _ => c == p,
        })
}
