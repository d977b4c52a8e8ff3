//! Tests for the rotating file sink.

mod common;

use common::parse_line;
use rotalog::{DEFAULT_SIZE_LIMIT, Error, FileSink, Level, Logger, Sink};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::thread;
use tempfile::TempDir;

/// Files created for `prefix` inside `dir`, oldest name first is not guaranteed.
fn log_files(dir: &Path, prefix: &str) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .filter(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with(&format!("{prefix}_")))
        })
        .collect()
}

#[test]
fn file_name_has_timestamp_and_salt() {
    let tmp_dir = TempDir::new().unwrap();
    let sink = FileSink::new(tmp_dir.path().join("app"), 100).unwrap();

    let name = sink.path().file_name().unwrap().to_str().unwrap().to_string();
    let rest = name.strip_prefix("app_").unwrap();
    let parts: Vec<&str> = rest.split('.').collect();
    assert_eq!(parts.len(), 3, "name: {name}");

    let (date, time) = parts[0].split_once('_').unwrap();
    assert_eq!(date.len(), 8);
    assert_eq!(time.len(), 6);
    assert_eq!(parts[1].len(), 3);
    assert!(parts[2].parse::<u32>().is_ok());
    assert!(sink.path().exists());
}

#[test]
fn default_limit_is_one_mebibyte() {
    let tmp_dir = TempDir::new().unwrap();
    let sink = FileSink::with_default_limit(tmp_dir.path().join("app")).unwrap();
    assert_eq!(sink.size_limit(), 1_048_576);
    assert_eq!(DEFAULT_SIZE_LIMIT, 1_048_576);
}

#[test]
fn same_prefix_same_instant_gets_distinct_files() {
    let tmp_dir = TempDir::new().unwrap();
    let prefix = tmp_dir.path().join("app");

    let a = FileSink::new(&prefix, 100).unwrap();
    let b = FileSink::new(&prefix, 100).unwrap();

    assert_ne!(a.path(), b.path());
    assert_eq!(log_files(tmp_dir.path(), "app").len(), 2);
}

#[test]
fn rotates_before_overshooting_ceiling() {
    let tmp_dir = TempDir::new().unwrap();
    let mut sink = FileSink::new(tmp_dir.path().join("app"), 100).unwrap();
    let first = sink.path().to_path_buf();
    // 40 bytes with the terminator.
    let line = "x".repeat(39);

    sink.write_line(&line, Level::Info).unwrap();
    sink.write_line(&line, Level::Info).unwrap();
    assert_eq!(sink.rotations(), 0);
    assert_eq!(sink.current_size(), 80);

    sink.write_line(&line, Level::Info).unwrap();
    assert_eq!(sink.rotations(), 1);
    assert_ne!(sink.path(), first);
    assert_eq!(sink.current_size(), 40);

    assert_eq!(fs::metadata(&first).unwrap().len(), 80);
    assert_eq!(fs::metadata(sink.path()).unwrap().len(), 40);
    assert_eq!(fs::read_to_string(&first).unwrap().lines().count(), 2);
}

#[test]
fn exact_fit_does_not_rotate() {
    let tmp_dir = TempDir::new().unwrap();
    let mut sink = FileSink::new(tmp_dir.path().join("app"), 100).unwrap();
    let line = "y".repeat(49);

    sink.write_line(&line, Level::Info).unwrap();
    sink.write_line(&line, Level::Info).unwrap();
    assert_eq!(sink.rotations(), 0);
    assert_eq!(fs::metadata(sink.path()).unwrap().len(), 100);

    sink.write_line("z", Level::Info).unwrap();
    assert_eq!(sink.rotations(), 1);
}

#[test]
fn oversized_line_goes_into_fresh_file() {
    let tmp_dir = TempDir::new().unwrap();
    let mut sink = FileSink::new(tmp_dir.path().join("app"), 10).unwrap();
    let first = sink.path().to_path_buf();

    sink.write_line("this line is longer than ten bytes", Level::Error).unwrap();
    assert_eq!(sink.rotations(), 0);
    assert_eq!(sink.path(), first);

    sink.write_line("short", Level::Error).unwrap();
    assert_eq!(sink.rotations(), 1);
    assert_eq!(log_files(tmp_dir.path(), "app").len(), 2);
}

#[test]
fn open_failure_at_construction() {
    let tmp_dir = TempDir::new().unwrap();
    let prefix = tmp_dir.path().join("missing").join("app");

    let err = FileSink::new(&prefix, 100).unwrap_err();
    assert!(matches!(err, Error::Open { .. }), "err: {err}");
    assert!(Logger::file(&prefix, Level::Debug).is_err());
}

#[test]
fn open_failure_at_rotation_reaches_writer() {
    let tmp_dir = TempDir::new().unwrap();
    let dir = tmp_dir.path().join("logs");
    fs::create_dir(&dir).unwrap();

    let logger = Logger::file_with_limit(dir.join("app"), Level::Debug, 10).unwrap();
    logger.log(Level::Info, "fills the first file").unwrap();

    fs::remove_dir_all(&dir).unwrap();
    let err = logger.log(Level::Info, "needs a new file").unwrap_err();
    assert!(matches!(err, Error::Open { .. }), "err: {err}");
}

#[test]
fn logger_writes_formatted_lines() {
    let tmp_dir = TempDir::new().unwrap();
    let logger = Logger::builder()
        .level(Level::Info)
        .file(tmp_dir.path().join("app"))
        .done()
        .build()
        .unwrap();

    logger.debug("This is DEBUG");
    logger.stream(Level::Info).append("This is INFO").append(5);
    logger.warning("This is WARNING");
    logger.flush().unwrap();
    drop(logger);

    let files = log_files(tmp_dir.path(), "app");
    assert_eq!(files.len(), 1);
    let content = fs::read_to_string(&files[0]).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let info = parse_line(lines[0]).unwrap();
    assert_eq!(info.code, 'I');
    assert_eq!(info.body, "This is INFO5");
    let warning = parse_line(lines[1]).unwrap();
    assert_eq!(warning.code, 'W');
    assert!(!content.contains('\x1b'));
}

#[test]
fn concurrent_writers_across_rotations() {
    const CEILING: u64 = 2048;

    let tmp_dir = TempDir::new().unwrap();
    let logger = Logger::builder()
        .level(Level::Debug)
        .file(tmp_dir.path().join("app"))
        .size_limit(CEILING)
        .done()
        .build()
        .unwrap();

    thread::scope(|s| {
        for t in 0..5 {
            let logger = &logger;
            s.spawn(move || {
                for i in 0..100 {
                    let level = Level::all()[i % 5];
                    logger.stream(level).append("t").append(t).append(" r").append(i);
                }
            });
        }
    });
    drop(logger);

    let files = log_files(tmp_dir.path(), "app");
    assert!(files.len() > 1, "expected rotation, got {} file(s)", files.len());

    let mut bodies = HashSet::new();
    let mut total = 0;
    for path in &files {
        let content = fs::read_to_string(path).unwrap();
        assert!(content.len() as u64 <= CEILING, "{} is {} bytes", path.display(), content.len());
        for line in content.lines() {
            let parsed = parse_line(line).unwrap_or_else(|| panic!("malformed: {line}"));
            bodies.insert(parsed.body.to_string());
            total += 1;
        }
    }

    assert_eq!(total, 500);
    assert_eq!(bodies.len(), 500);
}
