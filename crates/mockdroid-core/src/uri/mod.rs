//! URI building blocks shared by the intent codec.
//!
//! - `percent`: Android-style percent escaping (total, lenient decode).
//! - `locator`: the opaque data-locator reference carried by an intent.
//!
//! Both are panic-free: malformed input is reported as `MockDroidError` (or
//! tolerated, where the platform behavior is lenient) instead of indexing
//! past the end of a buffer.

pub mod locator;
pub mod percent;

pub use locator::Locator;
