//! Typed extra values carried in an intent's extension map.
//!
//! The URI form can only represent the nine scalar kinds with a one-letter
//! type tag; blobs and structured payloads live in the map but are skipped on
//! encode. Structured payloads are stored by deep copy to emulate
//! cross-process hand-off: producer and reader must never observe shared
//! mutable state through an extra.

use std::any::Any;
use std::fmt;

use bytes::Bytes;

/// Structured extra payloads, stored and cloned by deep copy.
///
/// Implemented automatically for any `Any + Clone + PartialEq + Debug + Send`
/// type; `Clone` is the explicit copy capability the map relies on.
pub trait Structured: fmt::Debug + Send {
    /// Produce a deep, independent copy of the payload.
    fn deep_copy(&self) -> Box<dyn Structured>;
    /// Downcast support for typed retrieval.
    fn as_any(&self) -> &dyn Any;
    /// Equality across the trait object boundary.
    fn eq_dyn(&self, other: &dyn Structured) -> bool;
}

impl<T> Structured for T
where
    T: Any + Clone + PartialEq + fmt::Debug + Send,
{
    fn deep_copy(&self) -> Box<dyn Structured> {
        Box::new(self.clone())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn eq_dyn(&self, other: &dyn Structured) -> bool {
        other.as_any().downcast_ref::<T>().is_some_and(|o| o == self)
    }
}

/// A single extension value. Exactly one variant per representable kind;
/// construction is explicit (via the variants or the `From` impls), never by
/// runtime type inspection.
#[derive(Debug)]
pub enum Extra {
    Str(String),
    Bool(bool),
    Byte(i8),
    Char(char),
    Double(f64),
    Float(f32),
    Int(i32),
    Long(i64),
    Short(i16),
    /// Opaque binary payload. Never appears in the URI form.
    Blob(Bytes),
    /// Structured payload, held as a deep copy. Never appears in the URI form.
    Structured(Box<dyn Structured>),
}

impl Extra {
    /// The one-letter URI type tag, or `None` for kinds the URI form cannot
    /// carry (those are skipped on encode, by contract).
    pub fn uri_tag(&self) -> Option<char> {
        match self {
            Extra::Str(_) => Some('S'),
            Extra::Bool(_) => Some('B'),
            Extra::Byte(_) => Some('b'),
            Extra::Char(_) => Some('c'),
            Extra::Double(_) => Some('d'),
            Extra::Float(_) => Some('f'),
            Extra::Int(_) => Some('i'),
            Extra::Long(_) => Some('l'),
            Extra::Short(_) => Some('s'),
            Extra::Blob(_) | Extra::Structured(_) => None,
        }
    }

    /// Canonical text form used by the URI codec (before percent escaping).
    /// Only meaningful for variants with a [`Self::uri_tag`].
    pub fn encode_value(&self) -> String {
        match self {
            Extra::Str(v) => v.clone(),
            Extra::Bool(v) => v.to_string(),
            Extra::Byte(v) => v.to_string(),
            Extra::Char(v) => v.to_string(),
            Extra::Double(v) => v.to_string(),
            Extra::Float(v) => v.to_string(),
            Extra::Int(v) => v.to_string(),
            Extra::Long(v) => v.to_string(),
            Extra::Short(v) => v.to_string(),
            Extra::Blob(_) | Extra::Structured(_) => String::new(),
        }
    }
}

impl Clone for Extra {
    fn clone(&self) -> Self {
        match self {
            Extra::Str(v) => Extra::Str(v.clone()),
            Extra::Bool(v) => Extra::Bool(*v),
            Extra::Byte(v) => Extra::Byte(*v),
            Extra::Char(v) => Extra::Char(*v),
            Extra::Double(v) => Extra::Double(*v),
            Extra::Float(v) => Extra::Float(*v),
            Extra::Int(v) => Extra::Int(*v),
            Extra::Long(v) => Extra::Long(*v),
            Extra::Short(v) => Extra::Short(*v),
            Extra::Blob(v) => Extra::Blob(v.clone()),
            // Cloning the map must not introduce sharing.
            Extra::Structured(v) => Extra::Structured(v.deep_copy()),
        }
    }
}

impl PartialEq for Extra {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Extra::Str(a), Extra::Str(b)) => a == b,
            (Extra::Bool(a), Extra::Bool(b)) => a == b,
            (Extra::Byte(a), Extra::Byte(b)) => a == b,
            (Extra::Char(a), Extra::Char(b)) => a == b,
            (Extra::Double(a), Extra::Double(b)) => a == b,
            (Extra::Float(a), Extra::Float(b)) => a == b,
            (Extra::Int(a), Extra::Int(b)) => a == b,
            (Extra::Long(a), Extra::Long(b)) => a == b,
            (Extra::Short(a), Extra::Short(b)) => a == b,
            (Extra::Blob(a), Extra::Blob(b)) => a == b,
            (Extra::Structured(a), Extra::Structured(b)) => a.eq_dyn(b.as_ref()),
            _ => false,
        }
    }
}

impl From<&str> for Extra {
    fn from(v: &str) -> Self {
        Extra::Str(v.to_string())
    }
}

impl From<String> for Extra {
    fn from(v: String) -> Self {
        Extra::Str(v)
    }
}

impl From<bool> for Extra {
    fn from(v: bool) -> Self {
        Extra::Bool(v)
    }
}

impl From<i8> for Extra {
    fn from(v: i8) -> Self {
        Extra::Byte(v)
    }
}

impl From<char> for Extra {
    fn from(v: char) -> Self {
        Extra::Char(v)
    }
}

impl From<f64> for Extra {
    fn from(v: f64) -> Self {
        Extra::Double(v)
    }
}

impl From<f32> for Extra {
    fn from(v: f32) -> Self {
        Extra::Float(v)
    }
}

impl From<i32> for Extra {
    fn from(v: i32) -> Self {
        Extra::Int(v)
    }
}

impl From<i64> for Extra {
    fn from(v: i64) -> Self {
        Extra::Long(v)
    }
}

impl From<i16> for Extra {
    fn from(v: i16) -> Self {
        Extra::Short(v)
    }
}

impl From<Bytes> for Extra {
    fn from(v: Bytes) -> Self {
        Extra::Blob(v)
    }
}

impl From<Vec<u8>> for Extra {
    fn from(v: Vec<u8>) -> Self {
        Extra::Blob(Bytes::from(v))
    }
}
