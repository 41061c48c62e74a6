//! Visibility classification and member descriptor formatting
//!
//! Visibility is derived from the Python underscore naming convention.
//! Magic (dunder) members count as public even though they start with
//! underscores, so a name only classifies as private or protected when it
//! does *not* also end with a double underscore.

/// Visibility of an attribute or method, derived from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Public,    // +
    Protected, // #
    Private,   // -
}

impl Visibility {
    /// Classify a member name by naming convention.
    pub fn of(name: &str) -> Self {
        if name.starts_with("__") && !name.ends_with("__") {
            Visibility::Private
        } else if name.starts_with('_') && !name.ends_with("__") {
            Visibility::Protected
        } else {
            Visibility::Public
        }
    }

    /// The PlantUML prefix symbol for this visibility.
    pub fn symbol(self) -> char {
        match self {
            Visibility::Public => '+',
            Visibility::Protected => '#',
            Visibility::Private => '-',
        }
    }
}

/// Name part of an attribute descriptor: `"x : int"` -> `"x"`.
///
/// Descriptors without a type annotation come back whole, trimmed.
pub fn base_name(attr: &str) -> &str {
    attr.split(':').next().unwrap_or(attr).trim()
}

/// Visibility-prefixed base name, e.g. `"_x : int"` -> `"#x"`.
///
/// The underscores that signaled the visibility are dropped from the
/// display name; dunder names classify public and keep their underscores.
pub fn describe(member: &str) -> String {
    let base = base_name(member);
    let vis = Visibility::of(base);
    let display = match vis {
        Visibility::Private => base.strip_prefix("__").unwrap_or(base),
        Visibility::Protected => base.strip_prefix('_').unwrap_or(base),
        Visibility::Public => base,
    };
    format!("{}{}", vis.symbol(), display)
}
