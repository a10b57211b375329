//! Essence identifiers for the video-management control plane.
//!
//! A video essence is one video output exposed by a subsystem instance on
//! a device (a mixer, an RTP receiver, an SDI input, ...). This crate
//! provides the type-safe key used to refer to one:
//!
//! - [`EssenceType`]: the subsystem category tag
//! - [`EssenceLocator`]: a `(type, index)` pair, with `{N/A, -1}` as the
//!   "no such essence" sentinel

mod essence;

pub use essence::{EssenceLocator, EssenceType};

/// Common error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown essence type: {0}")]
    UnknownEssenceType(String),

    #[error("invalid essence index: {0}")]
    InvalidEssenceIndex(String),

    #[error("invalid essence locator format: {0} (expected type[index])")]
    InvalidLocator(String),
}
