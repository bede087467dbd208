//! Common test utilities for coauthor integration tests
//!
//! Small hand-written corpora with known structure, plus helpers for
//! writing them to disk in the formats the loader accepts.

#![allow(dead_code)]

use coauthor::{CoauthorApi, Config, Record};
use std::io::Write;
use tempfile::NamedTempFile;

/// A small publication corpus:
///
/// - "Jane Smith" (2 papers) and "John Smithson" (3 papers) share a name
///   fragment
/// - "J. Smith" and "jane  smith" are spellings of Jane Smith
/// - Ada, Alan and Grace form a 4-cycle with Jane
/// - "Solo Author" never collaborates
pub fn publication_records() -> Vec<Record> {
    vec![
        Record::new("Sparse Cuts", "10.1/1", "Jane Smith; Ada Lovelace"),
        Record::new("Dense Cuts", "10.1/2", "Ada Lovelace | Alan Turing"),
        Record::new("Halting", "10.1/3", "Alan Turing and Grace Hopper"),
        Record::new("Compilers", "10.1/4", "Grace Hopper, jane  smith."),
        Record::new("Spectra", "10.1/5", "John Smithson; Bob Stone"),
        Record::new("Spectra II", "10.1/6", "John Smithson; Bob Stone"),
        Record::new("Spectra III", "10.1/7", "John Smithson"),
        Record::new("Monograph", "10.1/8", "Solo Author"),
        Record::new("Broken", "10.1/9", "nan"),
    ]
}

/// Records forming a plain 4-cycle A-B-C-D-A
pub fn cycle_records() -> Vec<Record> {
    vec![
        Record::new("AB", "1", "A; B"),
        Record::new("BC", "2", "B; C"),
        Record::new("CD", "3", "C; D"),
        Record::new("DA", "4", "D; A"),
    ]
}

pub fn publication_api() -> CoauthorApi {
    CoauthorApi::from_records(publication_records(), Config::default())
}

/// Write records as JSON Lines to a temporary file
pub fn write_jsonl(records: &[Record]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for record in records {
        let line = serde_json::to_string(record).expect("Failed to serialize record");
        writeln!(file, "{}", line).expect("Failed to write record");
    }
    file
}
