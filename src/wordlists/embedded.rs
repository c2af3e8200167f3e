//! Embedded word corpus
//!
//! Per-level word tables compiled into the binary at build time.

// Include generated tables from build script
include!(concat!(env!("OUT_DIR"), "/corpus.rs"));
