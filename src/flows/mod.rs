//! Flows module - Multi-step commands built on the backends
//!
//! Provides:
//! - recent: Scan, rank, print the newest entries
//! - red: Scan, rank, pick interactively, open in the editor

pub mod recent;
pub mod red;
