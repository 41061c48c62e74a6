//! Printer renderer
//!
//! Adapts PlantUML output to a generic open/node/edge graph-visitor
//! protocol, so a diagram engine can drive this backend the same way it
//! drives a dot writer. Node labels are registered under opaque ids as they
//! are emitted; edges render by looking their endpoints up in that table,
//! which makes nodes-before-edges a hard caller contract.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::{describe, Analysis, Diagram, NodeId, Object, RenderError};

use super::syntax;

/// Attributes for a node emission: the pre-rendered block text and an
/// optional display name for later edge lookups.
#[derive(Debug, Clone)]
pub struct NodeAttrs {
    /// Fully rendered class/interface block, written verbatim.
    pub label: String,
    /// Display name registered for edges; falls back to the label.
    pub name: Option<String>,
}

/// Attributes for an edge emission.
#[derive(Debug, Clone)]
pub struct EdgeAttrs {
    /// One of the four fixed notations: `+--`, `<|--`, `*--`, `o--`.
    pub edge_type: &'static str,
    /// Optional edge annotation, rendered as ` : label`.
    pub label: Option<String>,
}

impl EdgeAttrs {
    pub fn new(edge_type: &'static str) -> Self {
        Self {
            edge_type,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }
}

/// PlantUML backend for the generic graph-writer protocol.
pub struct PlantUmlPrinter<W: Write> {
    stream: W,
    // Cosmetic bookkeeping only; the current output is never indented, but
    // the counter is kept symmetric with open/close.
    indent: String,
    labels: HashMap<NodeId, String>,
}

impl<W: Write> PlantUmlPrinter<W> {
    pub fn new(stream: W) -> Self {
        Self {
            stream,
            indent: String::new(),
            labels: HashMap::new(),
        }
    }

    /// Consume the printer, returning the underlying sink.
    pub fn into_inner(self) -> W {
        self.stream
    }

    /// Write the diagram-open marker.
    pub fn open_graph(&mut self) -> Result<(), RenderError> {
        writeln!(self.stream, "{}", syntax::STARTUML)?;
        self.inc_indent();
        Ok(())
    }

    /// Write the diagram-close marker and flush the sink.
    pub fn close_graph(&mut self) -> Result<(), RenderError> {
        self.dec_indent();
        writeln!(self.stream, "{}", syntax::ENDUML)?;
        self.stream.flush()?;
        Ok(())
    }

    fn inc_indent(&mut self) {
        self.indent.push_str("  ");
    }

    fn dec_indent(&mut self) {
        self.indent.truncate(self.indent.len().saturating_sub(2));
    }

    /// Emit a node: write its label verbatim and register its display name
    /// for later edge lookups.
    pub fn emit_node(&mut self, id: NodeId, attrs: NodeAttrs) -> Result<(), RenderError> {
        self.stream.write_all(attrs.label.as_bytes())?;
        let display = attrs.name.unwrap_or(attrs.label);
        self.labels.insert(id, display);
        Ok(())
    }

    /// Emit an edge between two previously emitted nodes.
    ///
    /// The `to` endpoint prints first. Referencing an id that was never
    /// registered is an ordering-contract violation and fails with
    /// [`RenderError::UnknownNode`].
    pub fn emit_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        attrs: EdgeAttrs,
    ) -> Result<(), RenderError> {
        let to_name = self
            .labels
            .get(&to)
            .ok_or(RenderError::UnknownNode { id: to })?;
        let from_name = self
            .labels
            .get(&from)
            .ok_or(RenderError::UnknownNode { id: from })?;

        write!(self.stream, "{} {} {}", to_name, attrs.edge_type, from_name)?;
        if let Some(label) = &attrs.label {
            write!(self.stream, " : {}", label)?;
        }
        writeln!(self.stream)?;
        Ok(())
    }
}

/// Build the node attributes for an object: the class/interface block and
/// the basename used as display name.
///
/// Attributes sort lexicographically like the template renderer's, but
/// methods stay in traversal order and their argument lists are synthesized
/// here, dropping a leading receiver argument literally named `self`.
pub fn node_label(diagram: &Diagram, object: &Object, analysis: &dyn Analysis) -> NodeAttrs {
    let name = object.basename().to_string();
    let attributes = diagram.get_attrs(object.node);
    let methods = diagram.get_methods(object.node);
    let interface = analysis.is_interface(object.node);

    let mut label = String::new();
    if !attributes.is_empty() || !methods.is_empty() {
        label.push_str(&if interface {
            syntax::interface_open(&name)
        } else {
            syntax::class_open(&name)
        });

        let mut attributes: Vec<&String> = attributes.iter().collect();
        attributes.sort();
        for attr in attributes {
            label.push_str(&syntax::attr_line(&describe(attr)));
        }

        for method in methods {
            let mut names = method.args.names.as_slice();
            if names.first().map(String::as_str) == Some("self") {
                names = &names[1..];
            }
            label.push_str(&syntax::method_line(&describe(&method.name), &names.join(", ")));
        }

        label.push_str(syntax::CLOSE);
    } else {
        label.push_str(&if interface {
            syntax::interface_decl(&name)
        } else {
            syntax::class_decl(&name)
        });
    }

    NodeAttrs {
        label,
        name: Some(name),
    }
}

/// Drives the printer protocol over a class diagram: every object is
/// emitted as a node before any relationship is emitted as an edge.
pub struct PrinterRenderer {
    out_dir: PathBuf,
}

impl PrinterRenderer {
    pub fn new() -> Self {
        Self::with_out_dir(".")
    }

    pub fn with_out_dir(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Render a class diagram through the printer protocol, writing
    /// `<title>_classes.txt`.
    pub fn write_class_diagram(
        &self,
        diagram: &Diagram,
        analysis: &dyn Analysis,
    ) -> Result<PathBuf, RenderError> {
        let path = self.out_dir.join(format!("{}_classes.txt", diagram.title));
        let file = File::create(&path)?;
        let mut printer = PlantUmlPrinter::new(BufWriter::new(file));

        printer.open_graph()?;

        let mut ids: HashMap<&str, NodeId> = HashMap::new();
        for (index, object) in diagram.objects.iter().enumerate() {
            let id = NodeId(index as u32);
            ids.insert(object.title.as_str(), id);
            printer.emit_node(id, node_label(diagram, object, analysis))?;
        }

        for rel in diagram.all_relationships() {
            let (Some(&from), Some(&to)) = (ids.get(rel.from.as_str()), ids.get(rel.to.as_str()))
            else {
                debug!(from = %rel.from, to = %rel.to, "skipping edge with non-object endpoint");
                continue;
            };
            printer.emit_edge(from, to, EdgeAttrs::new(rel.kind.notation()))?;
        }

        printer.close_graph()?;
        info!(path = %path.display(), objects = diagram.objects.len(), "wrote class diagram");
        Ok(path)
    }
}

impl Default for PrinterRenderer {
    fn default() -> Self {
        Self::new()
    }
}
