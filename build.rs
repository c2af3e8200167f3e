//! Build script to generate the embedded word corpus
//!
//! Reads the per-level word tables and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("corpus.rs");

    let mut output = fs::File::create(&output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated word corpus").unwrap();
    writeln!(output).unwrap();

    for (input_path, const_name, doc_comment) in [
        ("data/easy.tsv", "EASY", "Easy level entries: everyday virtues and values"),
        ("data/medium.tsv", "MEDIUM", "Medium level entries: electronics and programming"),
        ("data/hard.tsv", "HARD", "Hard level entries: systems and engineering terms"),
    ] {
        generate_table(&mut output, input_path, const_name, doc_comment);
        println!("cargo:rerun-if-changed={input_path}");
    }
}

fn generate_table(output: &mut fs::File, input_path: &str, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let rows: Vec<Vec<&str>> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| line.split('\t').map(str::trim).collect())
        .collect();

    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, [&str; 3])] = &[").unwrap();

    for (number, row) in rows.iter().enumerate() {
        assert!(
            row.len() == 4,
            "{input_path}:{}: expected word and three hints, got {} fields",
            number + 1,
            row.len()
        );
        writeln!(
            output,
            "    ({:?}, [{:?}, {:?}, {:?}]),",
            row[0], row[1], row[2], row[3]
        )
        .unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {};", rows.len()).unwrap();
    writeln!(output).unwrap();
}
