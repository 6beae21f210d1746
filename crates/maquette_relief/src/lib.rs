//! # maquette_relief
//!
//! Relief - Relaxed JSON for Maquette.
//!
//! ## Name Origin
//!
//! A **relief** is a sculpture raised from a flat surface. This crate raises
//! loosely written JSON text (unquoted keys, single quotes, trailing commas,
//! comments) into structured [`serde_json::Value`]s, and carves values back
//! into the same relaxed notation.
//!
//! ## Usage
//!
//! ```rust
//! use maquette_relief::{from_str, parse, to_string_pretty};
//!
//! let value = parse("{ name: 'label', tags: ['a', 'b',], }").unwrap();
//! assert_eq!(value["name"], "label");
//!
//! let text = to_string_pretty(&value, 2);
//! assert_eq!(text, "{\n  name: 'label',\n  tags: [\n    'a',\n    'b'\n  ]\n}");
//!
//! #[derive(serde::Deserialize)]
//! struct Size {
//!     width: u32,
//! }
//! let size: Size = from_str("{width: 0x10}").unwrap();
//! assert_eq!(size.width, 16);
//! ```

mod error;
mod parse;
mod stringify;

pub use error::{Json5Error, Json5Result};
pub use parse::parse;
pub use stringify::{is_identifier, number_to_string, quote_string, to_string, to_string_pretty};

use serde::de::DeserializeOwned;
use serde::Serialize;

/// Parse relaxed JSON text and deserialize it into `T`.
#[inline]
pub fn from_str<T: DeserializeOwned>(source: &str) -> Json5Result<T> {
    let value = parse(source)?;
    serde_json::from_value(value).map_err(|e| Json5Error::Deserialize(e.to_string()))
}

/// Serialize `value` and write it as relaxed JSON with `indent` spaces per level.
#[inline]
pub fn serialize_pretty<T: Serialize + ?Sized>(value: &T, indent: usize) -> Json5Result<String> {
    let value = serde_json::to_value(value).map_err(|e| Json5Error::Serialize(e.to_string()))?;
    Ok(to_string_pretty(&value, indent))
}
