//! Playground behaviour end to end, against the in-memory host.

use maquette_atelier::memory::{MemoryElement, MemoryHost};
use maquette_atelier::{
    get_usage, load_props, ControlInput, MemoryDiagnostics, NullEditPolicy, Playground,
    PlaygroundConfig, PlaygroundEvent, PropType, PropertyDescriptor, SelectOption, Severity,
    TargetElement,
};
use serde_json::{json, Value};

fn descriptor_list() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::string("label", "Go"),
        PropertyDescriptor::boolean("disabled", false),
        PropertyDescriptor::select(
            "size",
            "md",
            vec![
                SelectOption::labeled("sm", "Small"),
                SelectOption::labeled("md", "Medium"),
                SelectOption::Labeled {
                    value: None,
                    label: Some("Default".to_string()),
                },
            ],
        ),
        PropertyDescriptor::new("items", PropType::Array, json!([{"id": 1}, {"id": 2}]))
            .with_default(json!([])),
        PropertyDescriptor::new("config", PropType::Object, json!({"dense": true})),
        PropertyDescriptor::new("maxLength", PropType::Number, json!(12)),
        PropertyDescriptor::new("ratio", PropType::Number, json!(2.0)).with_default(json!(1.0)),
    ]
}

// =============================================================================
// Usage snippet
// =============================================================================

mod usage {
    use super::*;

    #[test]
    fn button_scenario() {
        let props = vec![
            PropertyDescriptor::string("label", "Go"),
            PropertyDescriptor::boolean("disabled", false),
        ];
        assert_eq!(
            get_usage("my-button", &props),
            "<my-button\n  label=\"Go\"\n></my-button>"
        );
    }

    #[test]
    fn one_segment_per_plain_descriptor_in_order() {
        let props = vec![
            PropertyDescriptor::string("heading", "Title"),
            PropertyDescriptor::new("maxItems", PropType::Number, json!(3)),
            PropertyDescriptor::select("tone", "warm", vec![SelectOption::plain("warm")]),
            PropertyDescriptor::boolean("open", true),
        ];

        let usage = get_usage("x-panel", &props);
        let segments: Vec<&str> = usage.lines().skip(1).filter(|l| l.starts_with("  ")).collect();
        assert_eq!(
            segments,
            vec![
                "  heading=\"Title\"",
                "  max-items=\"3\"",
                "  tone=\"warm\"",
                "  open=\"true\""
            ]
        );
    }

    #[test]
    fn full_descriptor_list() {
        insta::assert_snapshot!(get_usage("my-widget", &descriptor_list()), @r#"
        <my-widget
          label="Go"
          size="md"
          items="[
            {
                id: 1
            },
            {
                id: 2
            }
        ]"
          config="{
            dense: true
        }"
          max-length="12"
          ratio="2"
        ></my-widget>
        "#);
    }
}

// =============================================================================
// Loader
// =============================================================================

mod loader {
    use super::*;

    #[test]
    fn relaxed_json_text_round_trips() {
        let original = descriptor_list();
        let text = maquette_relief::serialize_pretty(&original, 2).unwrap();

        assert!(text.contains("value: 2.0"));

        let loaded = load_props(text.into()).unwrap();
        assert_eq!(loaded, original);
        assert!(loaded[6].value.is_f64());
    }

    #[test]
    fn compact_text_round_trips() {
        let original = descriptor_list();
        let text = maquette_relief::to_string(&serde_json::to_value(&original).unwrap());

        assert_eq!(load_props(text.into()).unwrap(), original);
    }

    #[test]
    fn malformed_text_fails_construction() {
        let result = Playground::new(
            PlaygroundConfig::new("my-button", "[{name: 'label'"),
            MemoryHost::new(),
        );
        assert!(result.is_err());
    }
}

// =============================================================================
// Edits
// =============================================================================

mod edits {
    use super::*;

    fn mounted(policy: NullEditPolicy) -> (Playground<MemoryHost>, MemoryElement) {
        let widget = MemoryElement::new("my-widget").with_attribute("config", "{dense: true}");
        let host = MemoryHost::new().with_element(widget.clone());
        let config = PlaygroundConfig::new("my-widget", descriptor_list()).with_null_edit_policy(policy);
        let mut playground = Playground::new(config, host).unwrap();
        assert!(playground.mount().is_some());
        (playground, widget)
    }

    #[test]
    fn checking_disabled_adds_attribute() {
        let (mut playground, widget) = mounted(NullEditPolicy::KeepDescriptor);
        assert!(!playground.usage().contains("disabled="));

        playground.update_prop_value("disabled", ControlInput::Checked(true));

        assert!(playground.usage().contains("  disabled=\"true\"\n"));
        assert_eq!(widget.get("disabled"), Some(json!(true)));
    }

    #[test]
    fn unparsable_object_disappears() {
        let (mut playground, widget) = mounted(NullEditPolicy::KeepDescriptor);
        assert!(widget.has_attribute("config"));

        playground.update_prop_value("config", "{dense: ".into());

        let config = playground.props().iter().find(|p| p.name == "config").unwrap();
        assert_eq!(config.value, Value::Null);
        assert!(!playground.usage().contains("config="));
        assert!(!widget.has_attribute("config"));
    }

    #[test]
    fn drop_policy_removes_descriptor() {
        let (mut playground, _) = mounted(NullEditPolicy::DropDescriptor);
        playground.update_prop_value("config", "nope".into());

        let names: Vec<_> = playground.props().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["label", "disabled", "size", "items", "maxLength", "ratio"]);
    }

    #[test]
    fn number_edit_stores_text() {
        let (mut playground, widget) = mounted(NullEditPolicy::KeepDescriptor);
        playground.update_prop_value("maxLength", "20".into());

        assert_eq!(widget.get("maxLength"), Some(json!("20")));
        assert!(playground.usage().contains("max-length=\"20\""));
    }

    #[test]
    fn null_select_option_removes_attribute() {
        let widget = MemoryElement::reflecting("my-widget");
        let host = MemoryHost::new().with_element(widget.clone());
        let mut playground = Playground::new(PlaygroundConfig::new("my-widget", descriptor_list()), host).unwrap();
        playground.mount();
        assert_eq!(widget.get_attribute("size").as_deref(), Some("md"));

        assert!(playground.edit_control("size", "null".into()));

        assert!(!widget.has_attribute("size"));
        assert!(!playground.usage().contains("size="));
    }

    #[test]
    fn edits_through_the_panel_keep_order() {
        let (mut playground, _) = mounted(NullEditPolicy::KeepDescriptor);
        assert!(playground.edit_control("label", "Stop".into()));
        assert!(!playground.edit_control("missing", "x".into()));

        let names: Vec<_> = playground.props().iter().map(|p| p.name.clone()).collect();
        assert_eq!(names[0], "label");
        assert_eq!(playground.props()[0].value, json!("Stop"));
        assert_eq!(playground.controls()[0].text, "Stop");
    }
}

// =============================================================================
// Example markup
// =============================================================================

mod markup {
    use super::*;

    const CODE: &str = r#"<my-card heading="Welcome" elevated items="[1, 2]">
  <span slot="footer">Footer</span>
</my-card>"#;

    const CARD_PROPS: &str = r#"[
  {name: 'heading', value: '', type: 'string'},
  {name: 'elevated', value: false, type: 'boolean'},
  {name: 'items', value: [], type: 'array'},
  {name: 'subtitle', value: 'x', type: 'string'},
]"#;

    #[test]
    fn values_are_read_from_rendered_markup() {
        let diagnostics = MemoryDiagnostics::new();
        let config = PlaygroundConfig::new("my-card", CARD_PROPS)
            .with_code(CODE)
            .with_slots("[{name: 'footer'}, {name: 'media', docs: 'Top image'}]");
        let mut playground =
            Playground::with_diagnostics(config, MemoryHost::new(), &diagnostics).unwrap();

        let Some(PlaygroundEvent::Loaded(card)) = playground.mount() else {
            panic!("expected a loaded event");
        };
        assert_eq!(card.get_attribute("heading").as_deref(), Some("Welcome"));

        let values: Vec<_> = playground.props().iter().map(|p| p.value.clone()).collect();
        assert_eq!(values, vec![json!("Welcome"), json!(true), json!([1, 2]), Value::Null]);

        let slots: Vec<_> = playground.slots().iter().map(|s| s.is_checked()).collect();
        assert_eq!(slots, vec![true, false]);
        assert!(diagnostics.messages(Severity::Error).is_empty());
    }

    #[test]
    fn missing_tag_in_code_is_reported() {
        let diagnostics = MemoryDiagnostics::new();
        let config = PlaygroundConfig::new("my-card", CARD_PROPS).with_code("<other-card></other-card>");
        let mut playground =
            Playground::with_diagnostics(config, MemoryHost::new(), &diagnostics).unwrap();

        assert!(playground.mount().is_none());
        assert_eq!(
            diagnostics.messages(Severity::Error),
            vec!["Target element not found: my-card"]
        );
    }
}
