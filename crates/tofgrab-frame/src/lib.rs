//! Channel identifiers and decoded-frame containers for O3-series ToF cameras.
//!
//! A device acquisition decodes into a [`Frame`]: payloads keyed by
//! [`ChannelId`] plus the acquisition timestamps. Frames are immutable after
//! construction — one decode, many readers.

pub mod channel;
pub mod error;
pub mod frame;

pub use channel::ChannelId;
pub use error::UnknownChannelId;
pub use frame::{Frame, Timestamp};
