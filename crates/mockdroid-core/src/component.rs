//! Component name type and its flatten/unflatten string form.
//!
//! A component name is a `(package, class)` pair. The flattened form is
//! `package/class`; the short form abbreviates a class that lives inside its
//! own package to a leading-dot suffix (`com.foo/.Bar`), and
//! [`ComponentName::unflatten_from_string`] reverses both.

use std::fmt;

/// Fully-qualified reference to a class within a package.
///
/// Both fields are always present; the type has no partial or null state.
/// Immutable after construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComponentName {
    package: String,
    class: String,
}

impl ComponentName {
    pub fn new(package: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            class: class.into(),
        }
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn class(&self) -> &str {
        &self.class
    }

    /// The class name, shortened to a leading-`.` suffix when it is nested
    /// under the package (`com.foo` + `com.foo.Bar` => `.Bar`).
    ///
    /// This is a pure prefix trim: a class that merely shares a prefix with
    /// the package without the `.` separator is returned unchanged.
    pub fn short_class_name(&self) -> &str {
        if let Some(rest) = self.class.strip_prefix(self.package.as_str()) {
            if rest.starts_with('.') {
                return rest;
            }
        }
        &self.class
    }

    /// `package/class`. Reversible via [`Self::unflatten_from_string`].
    pub fn flatten_to_string(&self) -> String {
        format!("{}/{}", self.package, self.class)
    }

    /// Same as [`Self::flatten_to_string`] but abbreviates the class via
    /// [`Self::short_class_name`]. Still reversible.
    pub fn flatten_to_short_string(&self) -> String {
        format!("{}/{}", self.package, self.short_class_name())
    }

    /// Recover a component name from its flattened form.
    ///
    /// Splits at the first `/`: left is the package, right the class. A class
    /// part starting with `.` is expanded to `package + class`, so
    /// `"com.foo/.Bar"` becomes `("com.foo", "com.foo.Bar")`.
    ///
    /// Returns `None` when there is no `/` or nothing follows it. This is a
    /// non-error "no result" signal, not a failure.
    pub fn unflatten_from_string(s: &str) -> Option<ComponentName> {
        let sep = s.find('/')?;
        if sep + 1 >= s.len() {
            return None;
        }
        let package = &s[..sep];
        let class = &s[sep + 1..];
        let class = if class.starts_with('.') {
            format!("{package}{class}")
        } else {
            class.to_string()
        };
        Some(ComponentName {
            package: package.to_string(),
            class,
        })
    }
}

impl fmt::Display for ComponentName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.package, self.class)
    }
}
