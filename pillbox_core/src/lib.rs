#![forbid(unsafe_code)]

//! Core domain model and persistence for Pillbox, a daily medication and
//! supplement tracker.
//!
//! This crate provides:
//! - Domain types (medication records, quick-add presets)
//! - Key-value persistence (file-backed and in-memory)
//! - The medication store and its view projection
//! - Action dispatch and the supplement reference table

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod kv;
pub mod ids;
pub mod reference;
pub mod render;
pub mod store;
pub mod dispatch;
pub mod theme;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use render::{render, HtmlList, ListView, PillView, TextList};
pub use store::MedicationStore;
pub use dispatch::{dispatch, Action, Outcome};
pub use theme::Theme;
