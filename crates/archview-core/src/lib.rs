//! # archview-core - Core Domain Types
//!
//! Foundation crate for archview. Provides the service catalog, the diagram
//! tree, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** and no UI dependencies.
//!
//! ## Public API
//!
//! ### Components (`component`)
//! - [`ComponentId`] - Closed set of services shown in the diagram
//!
//! ### Catalog (`catalog`)
//! - [`describe()`] - Total lookup from [`ComponentId`] to [`ComponentRecord`]
//! - [`validate_catalog()`] - Startup check that no entry is blank
//!
//! ### Diagram (`diagram`)
//! - [`Diagram`] - Arena of [`Region`]s with parent links
//! - [`ClickBinding`] - What a click on a region selects, and whether it bubbles
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use archview_core::prelude::*;
//! ```

pub mod catalog;
pub mod component;
pub mod diagram;
pub mod error;
pub mod highlights;
pub mod logging;
pub mod prelude;

// Re-export commonly used types at crate root for convenience
pub use catalog::{describe, validate_catalog, ComponentRecord};
pub use component::ComponentId;
pub use diagram::{
    ClickBinding, Diagram, Glyph, Region, RegionId, RegionKind, RegionSpec, Tone,
};
pub use error::{Error, Result, ResultExt};
pub use highlights::{Highlight, HIGHLIGHTS};
