//! Text normalization.

pub mod tokenizer;

pub use tokenizer::{Token, tokenize};
