//! Core types and utilities for Tempora
//!
//! This crate defines the foundations shared by every codec:
//! - Error: typed decode/construction failures (Format, Range, UnknownZone)
//! - ticks: the 100 ns tick unit and its conversions
//! - text: strict ASCII grammar reading for canonical formats
//! - index_key: fixed-width order-preserving keys for signed tick counts
//!
//! Everything here is pure and allocation-light; the value types themselves
//! live in `tempora-codec`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod index_key;
pub mod text;
pub mod ticks;

pub use error::{Error, Result};
