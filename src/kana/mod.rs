//! Kana handling: key table, normalization and practice targets
//!
//! # Components
//! - `table.rs`: KeyKanaTable (key code ↔ kana)
//! - `normalize.rs`: katakana folding and voiced-mark splitting
//! - `target.rs`: Target (sentence + expected keystrokes)

pub mod normalize;
pub mod table;
pub mod target;

pub use normalize::normalize;
pub use table::{KeyCode, KeyKanaTable, CANCEL_KEY};
pub use target::Target;
