//! # Formwork Hardware
//!
//! Tie hardware and the safety factors applied to it.
//!
//! ## Example
//!
//! ```rust
//! use formwork_core::hardware::{SafetyFactor, TieCatalog, TieType};
//!
//! let capacity = TieCatalog::standard().capacity(TieType::SnapTie.name()).unwrap();
//! let swl = capacity.0 / SafetyFactor::TwoAndHalf.value();
//! assert_eq!(swl, 1800.0);
//! ```

pub mod safety;
pub mod ties;

pub use safety::SafetyFactor;
pub use ties::{TieCatalog, TieEntry, TieType};
