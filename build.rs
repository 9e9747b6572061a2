//! Build script that embeds the Word Hunt word lists
//!
//! Each list becomes a `&[&str]` constant plus a `_COUNT` constant in OUT_DIR.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

/// (source file, generated file, constant name, doc line)
const LISTS: &[(&str, &str, &str, &str)] = &[
    (
        "data/words.txt",
        "words.rs",
        "WORDS",
        "Dictionary of accepted Word Hunt words",
    ),
    (
        "data/frequent_words.txt",
        "frequent.rs",
        "FREQUENT",
        "Common English words ordered by frequency (most common first)",
    ),
];

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("cargo sets OUT_DIR"));

    for &(source, target, const_name, doc) in LISTS {
        println!("cargo:rerun-if-changed={source}");

        let content = fs::read_to_string(source)
            .unwrap_or_else(|e| panic!("Failed to read {source}: {e}"));
        write_list(&out_dir.join(target), const_name, doc, &entries(&content));
    }
}

/// Non-blank lines, trimmed and lowercased; order and duplicates are kept
fn entries(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_ascii_lowercase())
        .filter(|line| !line.is_empty())
        .collect()
}

fn write_list(path: &Path, const_name: &str, doc: &str, words: &[String]) {
    let mut source = String::with_capacity(words.len() * 12 + 256);

    let _ = writeln!(source, "// Generated from a data/ word list; do not edit.");
    let _ = writeln!(source);
    let _ = writeln!(source, "/// {doc}");
    let _ = writeln!(source, "pub const {const_name}: &[&str] = &[");
    for word in words {
        let _ = writeln!(source, "    {word:?},");
    }
    let _ = writeln!(source, "];");
    let _ = writeln!(source);
    let _ = writeln!(source, "/// Number of entries in {const_name}");
    let _ = writeln!(source, "pub const {const_name}_COUNT: usize = {};", words.len());

    fs::write(path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", path.display()));
}
