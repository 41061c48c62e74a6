//! PlantUML rendering strategies
//!
//! Two alternate backends over the same model: a flat stream template
//! renderer and a node/edge printer compatible with a generic graph-writer
//! protocol.

mod printer;
mod syntax;
mod template;

pub use printer::{node_label, EdgeAttrs, NodeAttrs, PlantUmlPrinter, PrinterRenderer};
pub use template::TemplateRenderer;
