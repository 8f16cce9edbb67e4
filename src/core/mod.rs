//! core/mod.rs
//!
//! The brain of the app:
//! - In-memory library (genre -> artist -> songs)
//! - Playback state machine + the rodio engine thread
//! - Tag hints for the import form
//!
//! Plain data and plain functions. No iced imports, so everything here is
//! unit-testable without a window.

pub mod error;
pub mod library;
pub mod playback;
pub mod tags;
pub mod types;
