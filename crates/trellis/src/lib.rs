//! Trellis - render class and package diagram models as PlantUML source
//!
//! A formatting adapter: it walks an already-built diagram object graph
//! (objects, attributes, methods, relationships) supplied by an external
//! static-analysis collaborator and emits PlantUML diagram text, optionally
//! shelling out to a local `plantuml.jar` for image rendering.
//!
//! # Quick Start
//!
//! ```rust
//! use trellis::prelude::*;
//!
//! struct NoInterfaces;
//!
//! impl Analysis for NoInterfaces {
//!     fn is_interface(&self, _node: NodeId) -> bool {
//!         false
//!     }
//!     fn format_args(&self, args: &ArgList) -> String {
//!         args.names.join(", ")
//!     }
//! }
//!
//! let mut diagram = Diagram::new("demo");
//! diagram.add_object(Object::new("demo.Widget", NodeId(0)));
//! diagram.add_relationship(Relationship::new(
//!     RelationshipKind::Specialization,
//!     "demo.Widget",
//!     "demo.Base",
//! ));
//!
//! let renderer = TemplateRenderer::new();
//! let text = renderer.class_diagram_text(&diagram, &NoInterfaces);
//! assert!(text.contains("demo.Base <|-- demo.Widget"));
//! ```
//!
//! # Rendering strategies
//!
//! [`render::TemplateRenderer`] emits a flat text stream per diagram;
//! [`render::PlantUmlPrinter`] implements a generic open/node/edge visitor
//! protocol driven by [`render::PrinterRenderer`] or an external engine.

pub mod core;
pub mod preview;
pub mod render;

pub use crate::core::*;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{
        Analysis, ArgList, Diagram, Method, Module, NodeId, Object, Relationship,
        RelationshipKind, RenderError, Visibility,
    };
    pub use crate::render::{PlantUmlPrinter, PrinterRenderer, TemplateRenderer};
}

/// Render a project's diagram definitions to PlantUML files in the current
/// directory, returning the written paths.
///
/// Diagrams are a package/class pair, or a single class diagram when no
/// package diagram was produced.
pub fn render(
    diagrams: &[Diagram],
    analysis: &dyn Analysis,
) -> anyhow::Result<Vec<std::path::PathBuf>> {
    let renderer = render::TemplateRenderer::new();
    Ok(renderer.render_project(diagrams, analysis)?)
}
