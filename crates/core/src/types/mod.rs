//! Core types for Anfa.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod handle;
pub mod id;
pub mod price;

pub use handle::{HandleError, ProductHandle};
pub use id::*;
pub use price::{CurrencyCode, Price};
