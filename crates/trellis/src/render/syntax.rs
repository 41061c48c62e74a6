//! PlantUML text fragments
//!
//! The fixed pieces of PlantUML syntax both renderers assemble their output
//! from. Whitespace here is part of the output contract, trailing spaces
//! included.

pub(crate) const STARTUML: &str = "@startuml\n";
pub(crate) const ENDUML: &str = "@enduml\n";
pub(crate) const CLOSE: &str = "}\n";

/// Cosmetic style block for class diagrams: white boxes, grey arrows,
/// black borders.
pub(crate) const STYLE_CLASS: &str = "
skinparam class {
    BackgroundColor White
    ArrowColor Grey
    BorderColor Black
}
";

/// Cosmetic style block for package diagrams, framed package style.
pub(crate) const STYLE_PACKAGE: &str = "
skinparam package {
    BackgroundColor White
    ArrowColor Grey
    BorderColor Black
}
skinparam packageStyle frame
";

pub(crate) fn title_line(title: &str) -> String {
    format!("title {}\n", title)
}

/// Empty package container declaration.
pub(crate) fn package_decl(name: &str) -> String {
    format!("package {} {{\n}}\n", name)
}

/// Bare class declaration, no body.
pub(crate) fn class_decl(name: &str) -> String {
    format!("class {} \n", name)
}

pub(crate) fn class_open(name: &str) -> String {
    format!("class {} {{\n", name)
}

/// Bare interface declaration, no body.
pub(crate) fn interface_decl(name: &str) -> String {
    format!("interface {} \n", name)
}

pub(crate) fn interface_open(name: &str) -> String {
    format!("interface {} {{\n", name)
}

pub(crate) fn attr_line(desc: &str) -> String {
    format!("    {}\n", desc)
}

pub(crate) fn method_line(desc: &str, args: &str) -> String {
    format!("    {}({})\n", desc, args)
}

/// Relationship edge, `to` endpoint first.
pub(crate) fn edge_line(to: &str, notation: &str, from: &str) -> String {
    format!("{} {} {}\n", to, notation, from)
}
