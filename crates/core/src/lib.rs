//! `solid-core` — shared building blocks for the checkout and registration
//! crates.
//!
//! Nothing here knows about payments or students; it only carries the error
//! model and the identifiers.

pub mod error;
pub mod id;

pub use error::{DomainError, DomainResult};
pub use id::{OrderId, ReceiptId};
