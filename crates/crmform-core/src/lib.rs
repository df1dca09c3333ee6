//! # crmform-core - Core Form Domain Types
//!
//! Foundation crate for crmform. Provides the field/value model, error
//! handling, and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Fields (`field`)
//! - [`FieldDescriptor`] - Static metadata for one input (name, label, kind, required)
//! - [`FieldKind`] - Input kind with kind-specific options
//! - [`FormSchema`] - Ordered, duplicate-free list of descriptors
//!
//! ### Values (`value`)
//! - [`FieldValue`] - Text, number, boolean or null
//! - [`FormValues`] - Field name to value record
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum grouped by layer
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! ```rust
//! use crmform_core::prelude::*;
//! ```

pub mod error;
pub mod field;
pub mod logging;
pub mod value;

/// Prelude for common imports used throughout all crmform crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, trace, warn};
}

pub use error::{Error, Result, ResultExt};
pub use field::{FieldDescriptor, FieldKind, FormSchema, SelectOption};
pub use value::{FieldValue, FormValues};
