//! Version layer for picking a Python release out of asdf output
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Specifier  │────▶│  Selector   │◀────│ Candidates  │
//! │ (requested) │     │ (best match)│     │ (asdf list) │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │ VersionKey  │
//!                     │ (ordering)  │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`flavor`]: Known runtime flavors (pypy, anaconda, ...)
//! - [`key`]: Ordering key parsed from a candidate string
//! - [`selector`]: Best-match selection over candidates
//! - [`specifier`]: Requested version tokens and `basepython` normalization

pub mod flavor;
pub mod key;
pub mod selector;
pub mod specifier;

pub use selector::best_version;
pub use specifier::Specifier;
