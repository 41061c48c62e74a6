//! JSON model manifest
//!
//! Stand-in input contract for the external static-analysis model builder:
//! a manifest file declares modules, classes, members, and relationships,
//! and deserializes into the diagram model the renderers consume. The
//! manifest also answers the two analysis capability queries (interface
//! flags come from the manifest itself; argument lists are formatted as
//! declared).

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use trellis::prelude::*;

#[derive(Debug, Deserialize)]
pub struct ProjectManifest {
    pub title: String,
    #[serde(default)]
    pub modules: Vec<String>,
    #[serde(default)]
    pub module_relations: Vec<EdgeManifest>,
    #[serde(default)]
    pub classes: Vec<ClassManifest>,
    #[serde(default)]
    pub relations: Vec<RelationManifest>,
}

/// Containment edge between two modules, recorded child-to-parent.
#[derive(Debug, Deserialize)]
pub struct EdgeManifest {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Deserialize)]
pub struct ClassManifest {
    /// Qualified name, e.g. `pkg.sub.Widget`.
    pub name: String,
    #[serde(default)]
    pub interface: bool,
    /// Attribute descriptors in `"name : type"` form.
    #[serde(default)]
    pub attributes: Vec<String>,
    #[serde(default)]
    pub methods: Vec<MethodManifest>,
}

#[derive(Debug, Deserialize)]
pub struct MethodManifest {
    pub name: String,
    /// Positional argument names, receiver included as declared.
    #[serde(default)]
    pub args: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RelationManifest {
    pub kind: KindManifest,
    pub from: String,
    pub to: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KindManifest {
    Specialization,
    Association,
    Implements,
    Depends,
}

impl From<KindManifest> for RelationshipKind {
    fn from(value: KindManifest) -> Self {
        match value {
            KindManifest::Specialization => RelationshipKind::Specialization,
            KindManifest::Association => RelationshipKind::Association,
            KindManifest::Implements => RelationshipKind::Implements,
            KindManifest::Depends => RelationshipKind::Depends,
        }
    }
}

/// Analysis seam backed by manifest declarations.
pub struct ManifestAnalysis {
    interfaces: HashSet<NodeId>,
}

impl Analysis for ManifestAnalysis {
    fn is_interface(&self, node: NodeId) -> bool {
        self.interfaces.contains(&node)
    }

    fn format_args(&self, args: &ArgList) -> String {
        args.names.join(", ")
    }
}

/// Load a manifest from a JSON file.
pub fn load(path: &Path) -> Result<ProjectManifest> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read model manifest '{}'", path.display()))?;
    let manifest: ProjectManifest = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse model manifest '{}'", path.display()))?;
    Ok(manifest)
}

impl ProjectManifest {
    /// Build the diagram definitions: a package/class pair when any module
    /// data is present, otherwise the class diagram alone.
    pub fn into_diagrams(self) -> (Vec<Diagram>, ManifestAnalysis) {
        let mut diagrams = Vec::new();

        if !self.modules.is_empty() || !self.module_relations.is_empty() {
            let mut packages = Diagram::new(self.title.clone());
            for module in &self.modules {
                packages.add_module(Module::new(module.clone()));
            }
            for edge in &self.module_relations {
                packages.add_relationship(Relationship::new(
                    RelationshipKind::Depends,
                    edge.from.clone(),
                    edge.to.clone(),
                ));
            }
            diagrams.push(packages);
        }

        let mut classes = Diagram::new(self.title.clone());
        let mut interfaces = HashSet::new();
        for (index, class) in self.classes.iter().enumerate() {
            let node = NodeId(index as u32);
            classes.add_object(Object::new(class.name.clone(), node));
            if class.interface {
                interfaces.insert(node);
            }
            classes.set_attrs(node, class.attributes.clone());
            classes.set_methods(
                node,
                class
                    .methods
                    .iter()
                    .map(|m| Method::new(m.name.clone(), ArgList::new(m.args.clone())))
                    .collect(),
            );
        }
        for rel in &self.relations {
            classes.add_relationship(Relationship::new(
                rel.kind.into(),
                rel.from.clone(),
                rel.to.clone(),
            ));
        }
        diagrams.push(classes);

        (diagrams, ManifestAnalysis { interfaces })
    }
}
