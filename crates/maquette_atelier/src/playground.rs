//! The playground.
//!
//! Owns the descriptor list and drives the Sync Engine against a target
//! element found once, by selector, inside the playground's own content.
//!
//! The flow is explicit: load descriptors at construction, [`mount`] to
//! resolve the target and run the first sync, then after each edit the
//! playground re-applies the list itself.
//!
//! [`mount`]: Playground::mount

use crate::config::PlaygroundConfig;
use crate::diagnostics::{Diagnostics, NoopDiagnostics};
use crate::edit::{update_prop_value, ControlInput, EditOutcome, NullEditPolicy};
use crate::loader::{load_props, load_slots, validate_descriptors, LoadResult};
use crate::output::{Clipboard, OutputEvent, UsageOutput};
use crate::panel::{PanelEvent, PropControl, PropsPanel};
use crate::slots::{extract_tag_content, seed_slot_state, toggle_slot};
use crate::sync::{apply_props, get_usage};
use crate::target::{ElementHost, TargetElement};
use crate::types::{PropType, PropertyDescriptor, SlotDescriptor};
use serde_json::Value;
use std::time::Instant;

/// Visibility of the configuration panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConfigPanel {
    #[default]
    Open,
    Closed,
}

/// Events emitted by the playground.
#[derive(Debug, Clone)]
pub enum PlaygroundEvent<E> {
    /// The target was resolved and the first sync is done.
    Loaded(E),
}

/// A component playground bound to an element host.
pub struct Playground<H: ElementHost, D: Diagnostics = NoopDiagnostics> {
    tag: String,
    block: bool,
    code: Option<String>,
    props: Vec<PropertyDescriptor>,
    slots: Vec<SlotDescriptor>,
    host: H,
    target: Option<H::Element>,
    mounted: bool,
    panel: PropsPanel,
    config_panel: ConfigPanel,
    output: UsageOutput,
    diagnostics: D,
}

impl<H: ElementHost> Playground<H> {
    /// Create a playground that reports nothing.
    ///
    /// Fails when `props` or `slots` text is not valid relaxed JSON.
    pub fn new(config: PlaygroundConfig, host: H) -> LoadResult<Self> {
        Self::with_diagnostics(config, host, NoopDiagnostics)
    }
}

impl<H: ElementHost, D: Diagnostics> Playground<H, D> {
    /// Create a playground reporting through `diagnostics`.
    pub fn with_diagnostics(config: PlaygroundConfig, host: H, diagnostics: D) -> LoadResult<Self> {
        let code = config.code().map(str::to_string);
        let props = load_props(config.props)?;
        let slots = load_slots(config.slots)?;

        for issue in validate_descriptors(&props) {
            diagnostics.warn(&issue.to_string());
        }

        Ok(Self {
            tag: config.tag,
            block: config.block,
            code,
            props,
            slots,
            host,
            target: None,
            mounted: false,
            panel: PropsPanel::new(config.null_edit_policy),
            config_panel: ConfigPanel::default(),
            output: UsageOutput::new(),
            diagnostics,
        })
    }

    /// Resolve the target and run the first sync.
    ///
    /// With example markup, the markup is rendered first and the descriptor
    /// values are read back from the element instead of being applied.
    /// Returns the `Loaded` event, or `None` when the target is missing (in
    /// which case the playground stays inert) or it was already mounted.
    pub fn mount(&mut self) -> Option<PlaygroundEvent<H::Element>> {
        if self.mounted {
            self.diagnostics.debug("Playground is already mounted");
            return None;
        }
        self.mounted = true;

        if let Some(code) = &self.code {
            self.host.set_inner_html(code);
        }

        let Some(mut target) = self.host.query_selector(&self.tag) else {
            self.diagnostics
                .error(&format!("Target element not found: {}", self.tag));
            return None;
        };

        match self.code.clone() {
            Some(code) => {
                self.seed_from_element(&target);
                match extract_tag_content(&code, &self.tag) {
                    Some(inner) => seed_slot_state(&mut self.slots, &inner),
                    None => self
                        .diagnostics
                        .error(&format!("Tag not found in code: {}", self.tag)),
                }
            }
            None => apply_props(&mut target, &self.props),
        }

        self.diagnostics.debug(&format!(
            "Loaded <{}> with {} props",
            target.tag_name(),
            self.props.len()
        ));
        self.target = Some(target.clone());
        Some(PlaygroundEvent::Loaded(target))
    }

    /// Read each descriptor's value from the element's attributes.
    fn seed_from_element(&mut self, target: &H::Element) {
        for prop in &mut self.props {
            let attribute = target.get_attribute(&prop.attribute_name());
            prop.value = match (prop.kind, attribute) {
                (PropType::Boolean, attribute) => Value::Bool(attribute.is_some()),
                (_, None) => Value::Null,
                (kind, Some(text)) if kind.is_structured() => {
                    maquette_relief::parse(&text).unwrap_or(Value::String(text))
                }
                (_, Some(text)) => Value::String(text),
            };
        }
    }

    /// Re-apply the descriptor list to the target, if there is one.
    pub fn sync(&mut self) {
        let Some(target) = self.target.as_mut() else {
            return;
        };
        apply_props(target, &self.props);
        self.diagnostics.debug(&get_usage(&self.tag, &self.props));
    }

    /// Store one control edit and sync.
    pub fn update_prop_value(&mut self, name: &str, input: ControlInput) -> EditOutcome {
        let outcome = update_prop_value(&mut self.props, name, input, self.panel.policy);
        match outcome {
            EditOutcome::NotFound => {
                self.diagnostics.warn(&format!("No prop named '{}'", name));
            }
            _ => self.sync(),
        }
        outcome
    }

    /// Replace the whole list, as sent by the props panel, and sync.
    pub fn handle_props_change(&mut self, props: Vec<PropertyDescriptor>) {
        self.props = props;
        self.sync();
    }

    /// Route a props panel event.
    pub fn handle_panel_event(&mut self, event: PanelEvent) {
        match event {
            PanelEvent::PropChange(props) => self.handle_props_change(props),
        }
    }

    /// Edit through the props panel: the panel computes the revised list
    /// and the playground takes it over.
    pub fn edit_control(&mut self, name: &str, input: ControlInput) -> bool {
        match self.panel.edit(&self.props, name, input) {
            Some(event) => {
                self.handle_panel_event(event);
                true
            }
            None => false,
        }
    }

    /// Controls for the props panel.
    #[inline]
    pub fn controls(&self) -> Vec<PropControl> {
        self.panel.controls(&self.props)
    }

    /// Usage snippet. Empty until a target has been resolved.
    pub fn usage(&self) -> String {
        if self.target.is_none() {
            return String::new();
        }
        get_usage(&self.tag, &self.props)
    }

    /// Copy the usage snippet and arm the copied indicator.
    pub fn copy_usage(&mut self, clipboard: &mut impl Clipboard, now: Instant) -> bool {
        match self.output.copy_click(now) {
            OutputEvent::Copy => clipboard.write_text(&self.usage()),
        }
    }

    #[inline]
    pub fn output(&self) -> &UsageOutput {
        &self.output
    }

    #[inline]
    pub fn output_mut(&mut self) -> &mut UsageOutput {
        &mut self.output
    }

    #[inline]
    pub fn config_panel(&self) -> ConfigPanel {
        self.config_panel
    }

    #[inline]
    pub fn open_config_panel(&mut self) {
        self.config_panel = ConfigPanel::Open;
    }

    #[inline]
    pub fn close_config_panel(&mut self) {
        self.config_panel = ConfigPanel::Closed;
    }

    pub fn toggle_config_panel(&mut self) {
        self.config_panel = match self.config_panel {
            ConfigPanel::Open => ConfigPanel::Closed,
            ConfigPanel::Closed => ConfigPanel::Open,
        };
    }

    /// Flip a slot's `checked` state.
    pub fn toggle_slot(&mut self, name: &str) -> Option<bool> {
        toggle_slot(&mut self.slots, name)
    }

    #[inline]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    #[inline]
    pub fn block(&self) -> bool {
        self.block
    }

    #[inline]
    pub fn props(&self) -> &[PropertyDescriptor] {
        &self.props
    }

    #[inline]
    pub fn slots(&self) -> &[SlotDescriptor] {
        &self.slots
    }

    #[inline]
    pub fn target(&self) -> Option<&H::Element> {
        self.target.as_ref()
    }

    #[inline]
    pub fn null_edit_policy(&self) -> NullEditPolicy {
        self.panel.policy
    }

    #[inline]
    pub fn host(&self) -> &H {
        &self.host
    }
}
