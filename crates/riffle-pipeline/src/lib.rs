//! Example text pipeline for riffle: the word-count walkthrough.
//!
//! Wires read → tokenize → count → format → write over plain text files.
//! There is no novel algorithmic content here — the point is to show the
//! transform shapes a riffle pipeline is built from. The interesting parts of
//! this repository live in `riffle-monitor`.

pub mod text;
pub mod transforms;

pub use transforms::{count_lines, count_words, extract_words, format_counts};
