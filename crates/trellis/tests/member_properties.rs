//! Property tests for visibility classification and diagram framing

use proptest::prelude::*;

use trellis::prelude::*;
use trellis::Visibility;

/// Strategy for member-ish names: optional underscore prefixes and
/// suffixes around an identifier core.
fn member_name_strategy() -> impl Strategy<Value = String> {
    "(_{0,3})?[a-z][a-z0-9]{0,12}(_{0,3})?"
}

struct NoInterfaces;

impl Analysis for NoInterfaces {
    fn is_interface(&self, _node: NodeId) -> bool {
        false
    }

    fn format_args(&self, args: &ArgList) -> String {
        args.names.join(", ")
    }
}

proptest! {
    #[test]
    fn classification_follows_prefix_suffix_rules(name in member_name_strategy()) {
        let vis = Visibility::of(&name);
        let expected = if name.starts_with("__") && !name.ends_with("__") {
            Visibility::Private
        } else if name.starts_with('_') && !name.ends_with("__") {
            Visibility::Protected
        } else {
            Visibility::Public
        };
        prop_assert_eq!(vis, expected);
    }

    #[test]
    fn describe_always_starts_with_a_symbol(name in member_name_strategy()) {
        let desc = trellis::describe(&name);
        let first = desc.chars().next().unwrap();
        prop_assert!(matches!(first, '+' | '#' | '-'));
    }

    #[test]
    fn class_diagram_framed_exactly_once(
        title in "[a-z][a-z0-9]{0,10}",
        names in prop::collection::vec("[A-Z][a-z]{0,8}", 0..6),
    ) {
        let mut diagram = Diagram::new(title);
        for (index, name) in names.iter().enumerate() {
            diagram.add_object(Object::new(name.clone(), NodeId(index as u32)));
        }

        let renderer = TemplateRenderer::new();
        let text = renderer.class_diagram_text(&diagram, &NoInterfaces);

        prop_assert!(text.starts_with("@startuml\n"));
        prop_assert!(text.ends_with("@enduml\n"));
        prop_assert_eq!(text.matches("@startuml").count(), 1);
        prop_assert_eq!(text.matches("@enduml").count(), 1);
    }

    #[test]
    fn package_diagram_framed_exactly_once(
        title in "[a-z][a-z0-9]{0,10}",
        modules in prop::collection::vec("[a-z][a-z0-9.]{0,12}", 0..6),
    ) {
        let mut diagram = Diagram::new(title);
        for module in modules {
            diagram.add_module(Module::new(module));
        }

        let renderer = TemplateRenderer::new();
        let text = renderer.package_diagram_text(&diagram);

        prop_assert!(text.starts_with("@startuml\n"));
        prop_assert!(text.ends_with("@enduml\n"));
        prop_assert_eq!(text.matches("@startuml").count(), 1);
        prop_assert_eq!(text.matches("@enduml").count(), 1);
    }
}
