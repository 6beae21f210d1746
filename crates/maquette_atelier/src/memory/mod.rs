//! In-memory element host.
//!
//! A toolkit-free implementation of [`ElementHost`](crate::target::ElementHost)
//! and [`TargetElement`](crate::target::TargetElement). Elements are shared
//! handles, so a test (or the CLI) can keep one and observe what the
//! playground did to it.

mod element;
mod host;
mod markup;

pub use element::MemoryElement;
pub use host::MemoryHost;
pub use markup::{read_elements, unescape_attribute};
