//! Template renderer
//!
//! Walks a diagram once and emits a flat PlantUML text stream, one
//! self-contained file per diagram. File names derive from the diagram
//! title: `<title>_packages.txt` for package diagrams, `<title>_classes.txt`
//! for class diagrams.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::{describe, Analysis, Diagram, Method, RenderError};

use super::syntax;

/// Flat stream renderer for package and class diagrams.
pub struct TemplateRenderer {
    out_dir: PathBuf,
}

impl TemplateRenderer {
    /// Renderer writing into the current directory.
    pub fn new() -> Self {
        Self::with_out_dir(".")
    }

    /// Renderer writing into the given directory.
    pub fn with_out_dir(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    pub fn out_dir(&self) -> &Path {
        &self.out_dir
    }

    /// Build the PlantUML source for a package diagram.
    ///
    /// Package diagrams only carry containment, so every relationship of
    /// every kind renders as a `+--` edge. The recorded child-to-parent
    /// direction is inverted on output: parent first, then `+--`, then
    /// child, matching how the analysis library records containment.
    pub fn package_diagram_text(&self, diagram: &Diagram) -> String {
        let mut stream = String::from(syntax::STARTUML);
        stream.push_str(syntax::STYLE_PACKAGE);
        stream.push_str(&syntax::title_line(&diagram.title));

        for module in diagram.modules() {
            stream.push_str(&syntax::package_decl(&module.title));
        }

        for rel in diagram.all_relationships() {
            stream.push_str(&syntax::edge_line(&rel.to, "+--", &rel.from));
        }

        stream.push('\n');
        stream.push_str(syntax::ENDUML);
        stream
    }

    /// Build the PlantUML source for a class diagram.
    pub fn class_diagram_text(&self, diagram: &Diagram, analysis: &dyn Analysis) -> String {
        let mut stream = String::from(syntax::STARTUML);
        stream.push_str(syntax::STYLE_CLASS);

        for obj in &diagram.objects {
            let attributes = diagram.get_attrs(obj.node);
            let methods = diagram.get_methods(obj.node);
            let interface = analysis.is_interface(obj.node);

            if !attributes.is_empty() || !methods.is_empty() {
                stream.push_str(&if interface {
                    syntax::interface_open(&obj.title)
                } else {
                    syntax::class_open(&obj.title)
                });

                // Sort on the full descriptor string, before the visibility
                // prefix is stripped.
                let mut attributes: Vec<&String> = attributes.iter().collect();
                attributes.sort();
                for attr in attributes {
                    stream.push_str(&syntax::attr_line(&describe(attr)));
                }

                let mut methods: Vec<&Method> = methods.iter().collect();
                methods.sort_by(|a, b| a.name.cmp(&b.name));
                for method in methods {
                    stream.push_str(&syntax::method_line(
                        &describe(&method.name),
                        &analysis.format_args(&method.args),
                    ));
                }

                stream.push_str(syntax::CLOSE);
            } else {
                stream.push_str(&if interface {
                    syntax::interface_decl(&obj.title)
                } else {
                    syntax::class_decl(&obj.title)
                });
            }
        }

        stream.push('\n');

        for rel in diagram.all_relationships() {
            stream.push_str(&syntax::edge_line(&rel.to, rel.kind.notation(), &rel.from));
        }

        stream.push('\n');
        stream.push_str(syntax::ENDUML);
        stream
    }

    /// Render a package diagram and write it to `<title>_packages.txt`.
    pub fn write_package_diagram(&self, diagram: &Diagram) -> Result<PathBuf, RenderError> {
        let path = self.out_dir.join(format!("{}_packages.txt", diagram.title));
        let stream = self.package_diagram_text(diagram);
        fs::write(&path, &stream)?;
        info!(path = %path.display(), modules = diagram.modules().len(), "wrote package diagram");
        Ok(path)
    }

    /// Render a class diagram and write it to `<title>_classes.txt`.
    pub fn write_class_diagram(
        &self,
        diagram: &Diagram,
        analysis: &dyn Analysis,
    ) -> Result<PathBuf, RenderError> {
        let path = self.out_dir.join(format!("{}_classes.txt", diagram.title));
        let stream = self.class_diagram_text(diagram, analysis);
        fs::write(&path, &stream)?;
        info!(path = %path.display(), objects = diagram.objects.len(), "wrote class diagram");
        Ok(path)
    }

    /// Render a project's diagram definitions, returning the written paths.
    ///
    /// A pair is package diagram first, class diagram second. When only one
    /// diagram is supplied, the missing package diagram is recovered locally
    /// by treating the sole element as the class diagram.
    pub fn render_project(
        &self,
        diagrams: &[Diagram],
        analysis: &dyn Analysis,
    ) -> Result<Vec<PathBuf>, RenderError> {
        match diagrams {
            [] => Err(RenderError::EmptyProject),
            [class_diagram] => {
                debug!("no package diagram supplied, rendering classes only");
                Ok(vec![self.write_class_diagram(class_diagram, analysis)?])
            }
            [package_diagram, class_diagram, ..] => Ok(vec![
                self.write_package_diagram(package_diagram)?,
                self.write_class_diagram(class_diagram, analysis)?,
            ]),
        }
    }
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}
