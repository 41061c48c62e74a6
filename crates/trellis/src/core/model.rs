//! Diagram model data holders
//!
//! The model is produced by an external static-analysis collaborator and
//! consumed read-only by the renderers. Everything here is plain data:
//! fields, constructors, accessors, no rendering behavior.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Opaque handle naming a syntax node inside the external analysis model.
///
/// Renderers never look inside a node; they only pass handles back to the
/// [`Analysis`] seam or use them as map keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A class or interface in a class diagram.
#[derive(Debug, Clone)]
pub struct Object {
    /// Qualified name, e.g. `pkg.sub.Widget`.
    pub title: String,
    /// Handle into the analysis model, used only for capability queries.
    pub node: NodeId,
}

impl Object {
    pub fn new(title: impl Into<String>, node: NodeId) -> Self {
        Self {
            title: title.into(),
            node,
        }
    }

    /// Display name with any leading module path stripped.
    pub fn basename(&self) -> &str {
        self.title.rsplit('.').next().unwrap_or(&self.title)
    }
}

/// A package in a package diagram.
#[derive(Debug, Clone)]
pub struct Module {
    /// Package path, e.g. `pkg.sub`.
    pub title: String,
}

impl Module {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Positional argument names of a method, in declaration order.
///
/// May include the implicit receiver name; the renderers decide whether to
/// keep or strip it.
#[derive(Debug, Clone, Default)]
pub struct ArgList {
    pub names: Vec<String>,
}

impl ArgList {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// A method descriptor on an object.
#[derive(Debug, Clone)]
pub struct Method {
    pub name: String,
    pub args: ArgList,
}

impl Method {
    pub fn new(name: impl Into<String>, args: ArgList) -> Self {
        Self {
            name: name.into(),
            args,
        }
    }
}

/// Kind tag of a relationship between two diagram entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RelationshipKind {
    Specialization,
    Association,
    Implements,
    /// Unlabeled containment kind carried by package diagrams.
    Depends,
}

impl RelationshipKind {
    /// The fixed PlantUML edge notation for this kind.
    ///
    /// The association/implements symbol assignment is part of the output
    /// contract and is kept as given, conventional UML reading aside.
    pub fn notation(self) -> &'static str {
        match self {
            RelationshipKind::Specialization => "<|--",
            RelationshipKind::Association => "*--",
            RelationshipKind::Implements => "o--",
            RelationshipKind::Depends => "+--",
        }
    }
}

impl fmt::Display for RelationshipKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelationshipKind::Specialization => "specialization",
            RelationshipKind::Association => "association",
            RelationshipKind::Implements => "implements",
            RelationshipKind::Depends => "depends",
        };
        write!(f, "{}", name)
    }
}

/// A directed relationship between two entities, identified by title.
///
/// Endpoints may name objects or modules; rendering only ever needs the
/// titles.
#[derive(Debug, Clone)]
pub struct Relationship {
    pub kind: RelationshipKind,
    pub from: String,
    pub to: String,
}

impl Relationship {
    pub fn new(kind: RelationshipKind, from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            kind,
            from: from.into(),
            to: to.into(),
        }
    }
}

/// One diagram definition: a titled set of objects (class diagrams) or
/// modules (package diagrams) plus relationships grouped by kind.
///
/// Attribute and method descriptors are keyed by node handle, mirroring the
/// shape the analysis collaborator hands over. Rebuilt from scratch for
/// every render pass; nothing here is cached across calls.
#[derive(Debug, Clone, Default)]
pub struct Diagram {
    pub title: String,
    pub objects: Vec<Object>,
    modules: Vec<Module>,
    pub relationships: BTreeMap<RelationshipKind, Vec<Relationship>>,
    attrs: HashMap<NodeId, Vec<String>>,
    methods: HashMap<NodeId, Vec<Method>>,
}

impl Diagram {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn add_object(&mut self, object: Object) {
        self.objects.push(object);
    }

    pub fn add_module(&mut self, module: Module) {
        self.modules.push(module);
    }

    pub fn add_relationship(&mut self, rel: Relationship) {
        self.relationships.entry(rel.kind).or_default().push(rel);
    }

    pub fn set_attrs(&mut self, node: NodeId, attrs: Vec<String>) {
        self.attrs.insert(node, attrs);
    }

    pub fn set_methods(&mut self, node: NodeId, methods: Vec<Method>) {
        self.methods.insert(node, methods);
    }

    /// Attribute descriptors (`"name : type"` form) for a node.
    pub fn get_attrs(&self, node: NodeId) -> &[String] {
        self.attrs.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Method descriptors for a node, in traversal order.
    pub fn get_methods(&self, node: NodeId) -> &[Method] {
        self.methods.get(&node).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    /// All relationships of every kind, in kind order.
    pub fn all_relationships(&self) -> impl Iterator<Item = &Relationship> {
        self.relationships.values().flatten()
    }
}

/// Narrow seam onto the analysis library that produced the model.
///
/// Exactly the two capabilities the renderers need: interface-ness of a
/// node and the pre-formatted argument list of a method.
pub trait Analysis {
    fn is_interface(&self, node: NodeId) -> bool;
    fn format_args(&self, args: &ArgList) -> String;
}
