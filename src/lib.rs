//! Kana Keyboard Trainer - typing drills for the JIS kana layout
//!
//! Sentences are normalized to hiragana with split voiced marks, turned into
//! the key sequence a US keyboard needs under the kana layout, and each
//! keystroke is judged against it.

pub mod error;
pub mod kana;
pub mod sentences;
pub mod session;

#[cfg(test)]
mod tests;

pub use error::TrainerError;
