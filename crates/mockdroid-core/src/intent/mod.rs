//! Intent record: action, target component, data locator, mime type, launch
//! flags, pass-through fields, and the typed extras map.
//!
//! The record is built incrementally through chainable setters, one field at
//! a time, with no transactional semantics. The URI codec lives in
//! [`codec`]; extras value types in [`extra`].

use std::collections::{BTreeMap, BTreeSet};

use bytes::Bytes;

use crate::component::ComponentName;
use crate::uri::Locator;

pub mod codec;
pub mod extra;

pub use codec::{ACTION_VIEW, URI_INTENT_SCHEME};
pub use extra::{Extra, Structured};

/// A directive with an action, optional target, optional data locator,
/// optional mime type, launch flags, and an open extras map.
///
/// Default-constructed intents have every field empty/zero. Extras are kept
/// in a `BTreeMap`, so the encode order of the URI form is deterministic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Intent {
    action: Option<String>,
    data: Option<Locator>,
    mime_type: Option<String>,
    flags: u32,
    component: Option<ComponentName>,
    package: Option<String>,
    categories: BTreeSet<String>,
    source_bounds: Option<String>,
    extras: BTreeMap<String, Extra>,
}

impl Intent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intent pre-populated with an action, the constructor shape most tests
    /// start from.
    pub fn with_action(action: impl Into<String>) -> Self {
        let mut intent = Self::default();
        intent.set_action(action);
        intent
    }

    pub fn set_action(&mut self, action: impl Into<String>) -> &mut Self {
        self.action = Some(action.into());
        self
    }

    pub fn action(&self) -> Option<&str> {
        self.action.as_deref()
    }

    pub fn set_data(&mut self, data: Locator) -> &mut Self {
        self.data = Some(data);
        self
    }

    pub fn data(&self) -> Option<&Locator> {
        self.data.as_ref()
    }

    pub fn set_mime_type(&mut self, mime_type: impl Into<String>) -> &mut Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    pub fn mime_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    pub fn set_flags(&mut self, flags: u32) -> &mut Self {
        self.flags = flags;
        self
    }

    pub fn flags(&self) -> u32 {
        self.flags
    }

    pub fn set_component(&mut self, component: ComponentName) -> &mut Self {
        self.component = Some(component);
        self
    }

    /// Target the component named by a `(package, class)` pair.
    pub fn set_class_name(
        &mut self,
        package: impl Into<String>,
        class: impl Into<String>,
    ) -> &mut Self {
        self.component = Some(ComponentName::new(package, class));
        self
    }

    pub fn component(&self) -> Option<&ComponentName> {
        self.component.as_ref()
    }

    pub fn set_package(&mut self, package: impl Into<String>) -> &mut Self {
        self.package = Some(package.into());
        self
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn add_category(&mut self, category: impl Into<String>) -> &mut Self {
        self.categories.insert(category.into());
        self
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    pub fn categories(&self) -> &BTreeSet<String> {
        &self.categories
    }

    /// Opaque source-bounds text, decode-side pass-through only.
    pub fn source_bounds(&self) -> Option<&str> {
        self.source_bounds.as_deref()
    }

    // --- extras -----------------------------------------------------------

    /// Insert a scalar or blob extra.
    pub fn put_extra(&mut self, key: impl Into<String>, value: impl Into<Extra>) -> &mut Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Insert a structured extra, storing a deep, independent copy: later
    /// mutation of `value` is not observable through this intent.
    pub fn put_structured(&mut self, key: impl Into<String>, value: &dyn Structured) -> &mut Self {
        self.extras
            .insert(key.into(), Extra::Structured(value.deep_copy()));
        self
    }

    /// Replace this intent's extras with a copy of another intent's map.
    /// Structured values are deep-copied, never shared.
    pub fn put_extras(&mut self, src: &Intent) -> &mut Self {
        self.extras = src.extras.clone();
        self
    }

    pub fn has_extra(&self, key: &str) -> bool {
        self.extras.contains_key(key)
    }

    pub fn remove_extra(&mut self, key: &str) -> Option<Extra> {
        self.extras.remove(key)
    }

    pub fn extra(&self, key: &str) -> Option<&Extra> {
        self.extras.get(key)
    }

    pub fn extras(&self) -> &BTreeMap<String, Extra> {
        &self.extras
    }

    pub fn string_extra(&self, key: &str) -> Option<&str> {
        match self.extras.get(key) {
            Some(Extra::Str(v)) => Some(v),
            _ => None,
        }
    }

    pub fn bool_extra(&self, key: &str, default: bool) -> bool {
        match self.extras.get(key) {
            Some(Extra::Bool(v)) => *v,
            _ => default,
        }
    }

    pub fn byte_extra(&self, key: &str, default: i8) -> i8 {
        match self.extras.get(key) {
            Some(Extra::Byte(v)) => *v,
            _ => default,
        }
    }

    pub fn char_extra(&self, key: &str, default: char) -> char {
        match self.extras.get(key) {
            Some(Extra::Char(v)) => *v,
            _ => default,
        }
    }

    pub fn double_extra(&self, key: &str, default: f64) -> f64 {
        match self.extras.get(key) {
            Some(Extra::Double(v)) => *v,
            _ => default,
        }
    }

    pub fn float_extra(&self, key: &str, default: f32) -> f32 {
        match self.extras.get(key) {
            Some(Extra::Float(v)) => *v,
            _ => default,
        }
    }

    pub fn int_extra(&self, key: &str, default: i32) -> i32 {
        match self.extras.get(key) {
            Some(Extra::Int(v)) => *v,
            _ => default,
        }
    }

    pub fn long_extra(&self, key: &str, default: i64) -> i64 {
        match self.extras.get(key) {
            Some(Extra::Long(v)) => *v,
            _ => default,
        }
    }

    pub fn short_extra(&self, key: &str, default: i16) -> i16 {
        match self.extras.get(key) {
            Some(Extra::Short(v)) => *v,
            _ => default,
        }
    }

    pub fn blob_extra(&self, key: &str) -> Option<&Bytes> {
        match self.extras.get(key) {
            Some(Extra::Blob(v)) => Some(v),
            _ => None,
        }
    }

    /// Typed access to a structured extra.
    pub fn structured_extra<T: 'static>(&self, key: &str) -> Option<&T> {
        match self.extras.get(key) {
            Some(Extra::Structured(v)) => v.as_any().downcast_ref::<T>(),
            _ => None,
        }
    }
}
