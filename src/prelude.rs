//! Prelude module for lunar_calendar crate.
//!
//! Re-exports the derive macros from derive_more and the tracing macros used
//! across modules.

#[allow(unused_imports)]
pub use derive_more::{Display, Into};
#[allow(unused_imports)]
pub use tracing::{debug, trace, warn};
