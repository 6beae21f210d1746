//! Carton - The toolbox for Maquette.
//!
//! Small utilities shared by every Maquette crate, kept in one place the way a
//! carton (artist's portfolio case) holds the tools an artist reaches for most.
//!
//! # Modules
//!
//! - **case**: identifier case conversion (property names to attribute names)
//!
//! # Example
//!
//! ```
//! use maquette_carton::to_kebab_case;
//!
//! assert_eq!(to_kebab_case("ariaLabel"), "aria-label");
//! ```

pub mod case;

// Re-export rustc-hash for fast hash maps/sets
pub use rustc_hash::{FxHashMap, FxHashSet};

pub use case::{split_words, to_kebab_case};
