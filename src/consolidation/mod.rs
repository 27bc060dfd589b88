//! Consolidation engine: row normalization, date parsing, the weekday bonus
//! and the merge itself

pub mod bonus;
pub mod date;
pub mod engine;
pub mod rows;

pub use bonus::*;
pub use date::*;
pub use engine::*;
pub use rows::*;
