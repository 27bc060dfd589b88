//! # Pallet Agenda
//!
//! Consolidates pallet scheduling from three independently maintained sheets
//! into one per-date agenda.
//!
//! ## Features
//!
//! - **Consolidation engine**: per-source status filtering, additive merge by date key,
//!   deterministic calendar ordering
//! - **Weekday bonus**: fixed Base3 adjustment on Wednesdays and Fridays
//! - **Sheet decoding**: header-mapped rows from tabular value grids
//! - **Storage abstraction**: replace-all persistence behind a trait
//! - **Sync orchestration**: per-source failure isolation and read-side statistics
//!
//! ## Quick Start
//!
//! ```rust
//! use pallet_agenda::{consolidate, RawRow};
//!
//! let row: RawRow = [("Data", "06/03/2024"), ("Pallet", "20")]
//!     .iter()
//!     .map(|(k, v)| (k.to_string(), v.to_string()))
//!     .collect();
//!
//! let agenda = consolidate(&[], &[], &[row]);
//! assert_eq!(agenda[0].total_pallets, 120); // Wednesday bonus
//! ```

pub mod consolidation;
pub mod sync;
pub mod traits;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use consolidation::*;
pub use sync::*;
pub use traits::*;
pub use types::*;
