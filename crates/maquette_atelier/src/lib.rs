//! # maquette_atelier
//!
//! Atelier - The workshop where a component is tried out.
//!
//! ## Name Origin
//!
//! An **atelier** is the studio where a piece is shaped before it is shown.
//! This crate is the playground a design-system site puts next to a custom
//! element: form controls for each configurable property, a live instance
//! that follows every edit, and the markup needed to use the element as
//! configured.
//!
//! ## Concepts
//!
//! - **Descriptor**: one configurable property ([`PropertyDescriptor`]) or slot
//!   ([`SlotDescriptor`])
//! - **Target**: the element being configured, reached through [`TargetElement`]
//! - **Usage snippet**: markup showing the target with its active attributes
//!
//! ## Usage
//!
//! ```rust
//! use maquette_atelier::memory::{MemoryElement, MemoryHost};
//! use maquette_atelier::{Playground, PlaygroundConfig, TargetElement};
//!
//! let button = MemoryElement::new("my-button");
//! let host = MemoryHost::new().with_element(button.clone());
//! let config = PlaygroundConfig::new(
//!     "my-button",
//!     "[{name: 'label', value: 'Go', type: 'string', default: ''}]",
//! );
//!
//! let mut playground = Playground::new(config, host).unwrap();
//! playground.mount();
//! assert_eq!(button.get("label"), Some(serde_json::json!("Go")));
//!
//! playground.update_prop_value("label", "Stop".into());
//! assert_eq!(playground.usage(), "<my-button\n  label=\"Stop\"\n></my-button>");
//! ```

pub mod config;
pub mod diagnostics;
pub mod edit;
pub mod loader;
pub mod memory;
pub mod output;
pub mod panel;
pub mod playground;
pub mod slots;
pub mod sync;
pub mod target;
pub mod types;
pub mod value;

// Re-exports for convenience
pub use config::PlaygroundConfig;
pub use diagnostics::{
    Diagnostics, MemoryDiagnostics, NoopDiagnostics, Record, Severity, TracingDiagnostics,
};
pub use edit::{compute_value, update_prop_value, ControlInput, EditOutcome, NullEditPolicy};
pub use loader::{
    load_props, load_slots, validate_descriptors, DescriptorIssue, LoadError, LoadResult,
};
pub use output::{Clipboard, MemoryClipboard, OutputEvent, UsageOutput, COPIED_RESET};
pub use panel::{control_for, ControlKind, ControlOption, PanelEvent, PropControl, PropsPanel};
pub use playground::{ConfigPanel, Playground, PlaygroundEvent};
pub use slots::{extract_tag_content, filled_slots, seed_slot_state, toggle_slot};
pub use sync::{apply_props, get_usage, usage_attribute};
pub use target::{ElementHost, TargetElement};
pub use types::{
    DescriptorInput, PropType, PropertyDescriptor, PropsInput, SelectOption, SlotDescriptor,
    SlotsInput,
};
pub use value::{display_value, is_null_value, is_truthy};
