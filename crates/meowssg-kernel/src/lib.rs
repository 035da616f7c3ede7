//! # MeowSSG Kernel
//!
//! Document inspection and repair for the pre-render pipeline: parse a
//! rendered HTML string, judge it against the structural/SEO checklist,
//! and rebuild failing documents from extracted-or-fallback fragments.
//!
//! This crate is pure over its inputs: no network, no filesystem
//! writes. The pipeline stages that surround it (route discovery, page
//! rendering, output writing) live in their own crates.
//!
//! ```text
//! Route                ← URL path scheduled for generation
//!     │
//! validate::inspect    ← one parse, every checklist fact
//!     │
//! ValidationReport     ← pass/fail plus the named missing items
//!     │
//! fix::fix             ← extract-or-fallback document reassembly
//! ```

pub mod dom;
pub mod error;
pub mod escape;
pub mod fallback;
pub mod fix;
pub mod route;
pub mod validate;

pub use error::KernelError;
pub use fix::{FixOptions, fix};
pub use route::{Route, RouteKind, resolve_routes};
pub use validate::{
    ChecklistItem, DocumentFacts, MIN_INTERNAL_LINKS, MIN_WORD_COUNT, ValidationReport, inspect,
    validate,
};
