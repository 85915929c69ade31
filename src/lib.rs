//! # htmlref - Terminal HTML Element Reference
//!
//! htmlref is a terminal reference guide for HTML elements: a compiled-in
//! catalog of element documentation browsed through an interactive TUI
//! with filter-as-you-type and per-category filtering, or queried from
//! the plain CLI for scripting.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`catalog`] - The static element catalog and code samples
//! - [`filter`] - Pure filtering of the catalog by search text and category
//! - [`tui`] - Interactive terminal UI (behind the `interactive` feature)
//! - [`output`] - Colored CLI result formatting
//!
//! ## Quick Start
//!
//! ```
//! use htmlref::catalog;
//! use htmlref::filter::{filter_entries, CategoryFilter};
//!
//! let hits = filter_entries(catalog::entries(), "img", &CategoryFilter::All);
//! assert_eq!(hits[0].tag, "<img>");
//! ```
//!
//! All data is static and compiled in: there is no network, no on-disk
//! state, and filtering is a synchronous linear scan over ~58 records.

pub mod catalog;
pub mod filter;
pub mod output;
#[cfg(feature = "interactive")]
pub mod tui;
