//! Output-schema compilation for O3-series ToF camera streams.
//!
//! A device is configured for streaming by sending it a schema document
//! describing exactly which data elements to emit, in what order, with what
//! encoding. This crate compiles a requested [`ChannelId`] set into that
//! document for each device family:
//!
//! - O3D / O3R — ordered element lists framed by start/stop sentinels, each
//!   family with its own channel-to-element dialect
//! - O3X — a fixed flag document enabling well-known output categories
//!
//! Compilation is pure and synchronous over static registries; the same
//! request always compiles to the same bytes.
//!
//! ```
//! use std::collections::BTreeSet;
//! use tofgrab_frame::ChannelId;
//! use tofgrab_schema::{DeviceFamily, SchemaCompiler};
//!
//! let channels: BTreeSet<ChannelId> =
//!     [ChannelId::RadialDistance, ChannelId::Confidence].into_iter().collect();
//! let json = SchemaCompiler::new()
//!     .compile_to_json(&channels, DeviceFamily::O3d)
//!     .unwrap();
//! assert!(json.contains("distance_image"));
//! ```

pub mod compiler;
pub mod document;
pub mod element;
pub mod error;
pub mod family;
pub mod registry;

pub use compiler::{SchemaCompiler, UnsupportedChannelPolicy};
pub use document::{ElementListSchema, FlagSchema, SchemaDocument, START_SENTINEL, STOP_SENTINEL};
pub use element::{ByteOrder, ChannelElements, DataEncoding, WireElement, WireFormat, WireType};
pub use error::{Result, SchemaError};
pub use family::DeviceFamily;
