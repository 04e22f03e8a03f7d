//! # Pilum
//!
//! A compact lexical search and ranking library for Rust.
//!
//! ## Features
//!
//! - Configurable text analysis pipeline (char filters, tokenizers, token filters)
//! - In-memory inverted index with positional postings
//! - BM25 scoring with match, phrase, and multi-match query modes
//! - Fuzzy term matching via Levenshtein edit distance, with full matrix
//!   and alignment path output
//! - Snapshot-swap engine for consistent reads under concurrent mutation

pub mod analysis;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod search;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
