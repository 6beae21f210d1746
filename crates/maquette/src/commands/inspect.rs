//! Inspect command - Mount a playground definition against an in-memory element

use super::{read_config, CommandError, OutputFormat};
use clap::Args;
use maquette_atelier::memory::{MemoryElement, MemoryHost};
use maquette_atelier::{
    ControlInput, ControlKind, Playground, PlaygroundEvent, PropControl, TargetElement,
    TracingDiagnostics,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args)]
pub struct InspectArgs {
    /// Playground definition (relaxed JSON)
    pub file: PathBuf,

    /// Edit to apply after mounting, as `name=value` (repeatable).
    /// Boolean props take `true`/`false`.
    #[arg(short, long = "set", value_name = "NAME=VALUE")]
    pub edits: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report {
    tag: String,
    loaded: bool,
    controls: Vec<PropControl>,
    attributes: Vec<(String, String)>,
    properties: Vec<(String, serde_json::Value)>,
    usage: String,
}

pub fn run(args: InspectArgs, verbose: bool) -> Result<(), CommandError> {
    let config = read_config(&args.file)?;
    let diagnostics = TracingDiagnostics::new(config.debug || verbose);

    // Without example markup, stand in a bare, reflecting element
    let host = match config.code() {
        Some(_) => MemoryHost::new(),
        None => MemoryHost::new().with_element(MemoryElement::reflecting(&config.tag)),
    };

    let mut playground = Playground::with_diagnostics(config, host, diagnostics)?;
    let loaded = match playground.mount() {
        Some(PlaygroundEvent::Loaded(element)) => Some(element),
        None => None,
    };

    for edit in &args.edits {
        let Some((name, value)) = edit.split_once('=') else {
            tracing::warn!("Ignoring edit without '=': {}", edit);
            continue;
        };
        let input = edit_input(&playground.controls(), name, value);
        playground.update_prop_value(name, input);
    }

    let report = Report {
        tag: playground.tag().to_string(),
        loaded: loaded.is_some(),
        controls: playground.controls(),
        attributes: loaded.as_ref().map(|e| e.attributes()).unwrap_or_default(),
        properties: loaded.as_ref().map(|e| e.properties()).unwrap_or_default(),
        usage: playground.usage(),
    };

    match args.format {
        OutputFormat::Json => match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => tracing::error!("Failed to write report: {}", e),
        },
        OutputFormat::Text => print_report(&report, loaded.as_ref()),
    }

    Ok(())
}

/// Raw control input for `name=value`, shaped by the control kind.
fn edit_input(controls: &[PropControl], name: &str, value: &str) -> ControlInput {
    let kind = controls.iter().find(|c| c.name == name).map(|c| c.kind);
    match kind {
        Some(ControlKind::Checkbox) => ControlInput::Checked(value == "true"),
        Some(ControlKind::MultiSelect) => ControlInput::Selection(
            value
                .split(',')
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        ),
        _ => ControlInput::Text(value.to_string()),
    }
}

fn print_report(report: &Report, element: Option<&MemoryElement>) {
    let Some(element) = element else {
        println!("<{}> was not found; nothing was synchronized", report.tag);
        return;
    };

    println!("Target <{}>", element.tag_name());

    println!("\nControls:");
    for control in &report.controls {
        let state = match control.kind {
            ControlKind::Checkbox => control.checked.to_string(),
            _ => control.text.replace('\n', " "),
        };
        println!("  {:<16} {:<12} {}", control.name, format!("{:?}", control.kind), state);
    }

    println!("\nAttributes:");
    for (name, value) in &report.attributes {
        println!("  {}=\"{}\"", name, value);
    }

    println!("\nProperties:");
    for (name, value) in &report.properties {
        println!("  {} = {}", name, maquette_relief::to_string(value));
    }

    println!("\nUsage:\n{}", report.usage);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn control(name: &str, kind: ControlKind) -> PropControl {
        PropControl {
            name: name.to_string(),
            kind,
            text: String::new(),
            checked: false,
            options: Vec::new(),
        }
    }

    #[test]
    fn test_edit_input_follows_control_kind() {
        let controls = vec![
            control("disabled", ControlKind::Checkbox),
            control("tags", ControlKind::MultiSelect),
            control("label", ControlKind::Text),
        ];

        assert_eq!(
            edit_input(&controls, "disabled", "true"),
            ControlInput::Checked(true)
        );
        assert_eq!(
            edit_input(&controls, "tags", "a,b"),
            ControlInput::Selection(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(
            edit_input(&controls, "label", "Go"),
            ControlInput::Text("Go".to_string())
        );
        assert_eq!(
            edit_input(&controls, "unknown", "x"),
            ControlInput::Text("x".to_string())
        );
    }
}
