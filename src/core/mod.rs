//! Core module - Contains the fundamental data structures and helpers
//!
//! This module provides:
//! - Scanned file entries and recency ranking
//! - Exclusion pattern matching
//! - The result-set size guard
//! - Preview rendering for the picker
//! - Common utilities

pub mod entry;
pub mod error;
pub mod exclude;
pub mod guard;
pub mod preview;
pub mod util;
