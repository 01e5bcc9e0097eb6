//! mockdroid core: test-double codecs for Android component names and intents.
//!
//! This crate re-implements, in isolation, the two text encodings a unit-test
//! harness needs from the platform classes it cannot load: the
//! `package/class` flatten/unflatten form of a component name, and the
//! `#Intent;...;end` URI form of an intent (action, component, data locator,
//! mime type, launch flags, typed extras). It carries no dispatch, transport,
//! or runtime dependencies.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `MockDroidError`/`Result` so malformed
//! URI input can never crash the host test process.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod component;
pub mod error;
pub mod intent;
pub mod uri;

pub use component::ComponentName;
pub use error::{ErrorCode, MockDroidError, Result};
pub use intent::{Extra, Intent, Structured, ACTION_VIEW, URI_INTENT_SCHEME};
pub use uri::Locator;
