//! # BIM Extract
//!
//! Classifies objects selected in a BIM authoring host and writes one JSON
//! metadata file per object.
//!
//! ## Features
//!
//! - Fixed-priority classification (families, walls, floors, ceilings, stairs, railings)
//! - Type-level attributes for family instances, own attributes otherwise
//! - Deterministic, order-preserving JSON output
//! - Collision-aware file naming with a `Fail(X)_` prefix for unrecognized objects
//! - Optional CSV batch report
//!
//! ## Example
//!
//! ```no_run
//! use bim_extract::config::ExportConfig;
//! use bim_extract::extract::Extractor;
//! use bim_extract::host::Selection;
//!
//! let selection = Selection::load("selection.json").expect("Failed to load");
//! let summary = Extractor::new(ExportConfig::new("out"))
//!     .run(selection.iter())
//!     .expect("Export failed");
//! println!("Written: {}", summary.written.len());
//! ```

pub mod config;
pub mod error;
pub mod export;
pub mod extract;
pub mod host;
pub mod model;
