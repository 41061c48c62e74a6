//! Integration tests for the printer renderer protocol

use std::fs;

use tempfile::tempdir;
use trellis::prelude::*;
use trellis::render::{node_label, EdgeAttrs, NodeAttrs};

struct StubAnalysis;

impl Analysis for StubAnalysis {
    fn is_interface(&self, node: NodeId) -> bool {
        node == NodeId(0)
    }

    fn format_args(&self, args: &ArgList) -> String {
        args.names.join(", ")
    }
}

fn diagram() -> Diagram {
    let mut diagram = Diagram::new("proj");
    diagram.add_object(Object::new("proj.Base", NodeId(0)));
    diagram.add_object(Object::new("proj.Widget", NodeId(1)));
    diagram.set_methods(
        NodeId(1),
        vec![
            Method::new(
                "refresh",
                ArgList::new(vec!["self".to_string(), "force".to_string()]),
            ),
            Method::new("clear", ArgList::new(vec!["self".to_string()])),
        ],
    );
    diagram.add_relationship(Relationship::new(
        RelationshipKind::Implements,
        "proj.Widget",
        "proj.Base",
    ));
    diagram
}

#[test]
fn test_driver_writes_nodes_then_edges() {
    let dir = tempdir().unwrap();
    let renderer = PrinterRenderer::with_out_dir(dir.path());

    let path = renderer.write_class_diagram(&diagram(), &StubAnalysis).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    assert!(text.starts_with("@startuml\n\n"));
    assert!(text.ends_with("@enduml\n\n"));
    // Labels use basenames, methods stay in traversal order.
    assert!(text.contains("interface Base \n"));
    assert!(text.contains("class Widget {\n"));
    let refresh = text.find("    +refresh(force)\n").unwrap();
    let clear = text.find("    +clear()\n").unwrap();
    assert!(refresh < clear);
    // Edge after both nodes, to-endpoint first, kind notation applied.
    let edge = text.find("Base o-- Widget\n").unwrap();
    assert!(edge > clear);
}

#[test]
fn test_driver_never_hits_unknown_node() {
    // Edges whose endpoints are not objects get skipped, so a well-formed
    // diagram renders without tripping the lookup contract.
    let mut d = diagram();
    d.add_relationship(Relationship::new(
        RelationshipKind::Association,
        "proj.Widget",
        "other.Stranger",
    ));

    let dir = tempdir().unwrap();
    let renderer = PrinterRenderer::with_out_dir(dir.path());
    let path = renderer.write_class_diagram(&d, &StubAnalysis).unwrap();
    let text = fs::read_to_string(&path).unwrap();

    assert!(!text.contains("Stranger"));
    assert!(text.contains("Base o-- Widget\n"));
}

#[test]
fn test_protocol_against_fixed_contract() {
    // The documented contract: node 1 "Foo", node 2 "Bar", then edge
    // (1, 2, "*--") renders "Bar *-- Foo".
    let mut printer = PlantUmlPrinter::new(Vec::new());
    printer
        .emit_node(
            NodeId(1),
            NodeAttrs {
                label: String::new(),
                name: Some("Foo".to_string()),
            },
        )
        .unwrap();
    printer
        .emit_node(
            NodeId(2),
            NodeAttrs {
                label: String::new(),
                name: Some("Bar".to_string()),
            },
        )
        .unwrap();
    printer
        .emit_edge(NodeId(1), NodeId(2), EdgeAttrs::new("*--"))
        .unwrap();

    let text = String::from_utf8(printer.into_inner()).unwrap();
    assert_eq!(text, "Bar *-- Foo\n");
}

#[test]
fn test_node_label_matches_template_member_formatting() {
    let d = diagram();
    let attrs = node_label(&d, &d.objects[1], &StubAnalysis);

    assert_eq!(attrs.name.as_deref(), Some("Widget"));
    assert!(attrs.label.starts_with("class Widget {\n"));
    assert!(attrs.label.ends_with("}\n"));
}
