//! Wire-level gateway types and formatting primitives for `lambda-shim`.
//!
//! This crate holds the pieces shared by the decode and encode halves of the
//! shim:
//!
//! - [`events`]: serde models of the gateway event envelopes
//! - [`header`]: multi-value header folding
//! - [`content`]: binary/text classification and content-type sniffing

mod content;
mod events;
mod header;

pub use content::*;
pub use events::*;
pub use header::*;
