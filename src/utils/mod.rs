//! Utility modules

pub mod memory_storage;
pub mod sheet_values;
pub mod validation;

pub use memory_storage::*;
pub use sheet_values::*;
pub use validation::*;
