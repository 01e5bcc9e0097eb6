//! Top-level facade crate for mockdroid.
//!
//! Re-exports the core codec types so test harnesses can depend on a single
//! crate.

pub mod core {
    pub use mockdroid_core::*;
}

pub use mockdroid_core::{
    ComponentName, ErrorCode, Extra, Intent, Locator, MockDroidError, Result, Structured,
    ACTION_VIEW, URI_INTENT_SCHEME,
};
