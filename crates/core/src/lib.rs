//! Core library for slugo
//!
//! This crate implements the **Functional Core** of the slugo application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The slugo project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`slugo_core`** (this crate): Slug generation and batch processing with zero I/O
//! - **`slugo`**: Flag parsing, input detection, printing and clipboard (the Imperative Shell)
//!
//! ## Functional Core Principles
//!
//! All functions in this crate adhere to these principles:
//!
//! - **Pure functions**: Same input always produces the same output
//! - **No side effects**: No printing, no logging, no process exit
//! - **Caller owned resources**: Files and streams are opened by the shell and
//!   handed in as line sources
//!
//! # Module Organization
//!
//! - [`slug`]: Text to slug transformation and slug decoration (prefix, suffix, truncation)
//! - [`batch`]: Line oriented processing with per-line failure isolation
//! - [`error`]: Failure classification for slugs and line sources
//!
//! # Example Usage
//!
//! ```rust
//! use slugo_core::batch::process;
//! use slugo_core::slug::slugify;
//!
//! assert_eq!(slugify("Çocuklar & Gençler").unwrap(), "cocuklar-gencler");
//!
//! let lines = ["Valid Text", "@#$%", "Another Valid"]
//!     .into_iter()
//!     .map(|line| Ok::<_, std::io::Error>(line.to_string()));
//!
//! let report = process(lines).unwrap();
//! assert_eq!(report.succeeded(), 2);
//! assert_eq!(report.failed(), 1);
//! ```

pub mod batch;
pub mod error;
pub mod slug;

pub use batch::{BatchEngine, BatchItem, BatchReport, BatchSummary, PartialBatch, SlugResult};
pub use error::{Error, FailureKind, SlugError};
pub use slug::{slugify, slugify_with_options, SlugOptions};
