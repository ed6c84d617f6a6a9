//! Compiles a requested channel set into a device output schema.
//!
//! Compilation is a pure, synchronous computation over the caller's set and
//! the static registries — no shared state, callable from any thread. The
//! requested set is iterated in [`ChannelId`]'s canonical order, so the
//! compiled document depends only on set membership, never on how the
//! caller assembled it.

use std::collections::BTreeSet;

use tofgrab_frame::ChannelId;

use crate::document::{ElementListSchema, FlagSchema, SchemaDocument, START_SENTINEL, STOP_SENTINEL};
use crate::error::{Result, SchemaError};
use crate::family::DeviceFamily;
use crate::registry;

/// What to do with a requested channel the family has no wire mapping for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnsupportedChannelPolicy {
    /// Omit the channel from the compiled schema.
    ///
    /// The default: deployed callers rely on compilation always producing
    /// a transmittable document. Drops are logged at debug level.
    #[default]
    Drop,
    /// Fail the whole compilation with
    /// [`SchemaError::UnsupportedChannel`].
    Reject,
}

/// Compiles requested channel sets into per-family schema documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaCompiler {
    policy: UnsupportedChannelPolicy,
}

impl SchemaCompiler {
    /// Compiler with the default [`UnsupportedChannelPolicy::Drop`] policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiler with an explicit unsupported-channel policy.
    pub fn with_policy(policy: UnsupportedChannelPolicy) -> Self {
        Self { policy }
    }

    /// The active unsupported-channel policy.
    pub fn policy(&self) -> UnsupportedChannelPolicy {
        self.policy
    }

    /// Compile `channels` into `family`'s schema document.
    ///
    /// O3D and O3R produce an element-list document framed by the start and
    /// stop sentinels; an empty request yields a sentinel-only document.
    /// O3X produces the fixed flag document; an empty request yields the
    /// all-false document. Errors only under the `Reject` policy — the
    /// flag document has a fixed shape, so channels outside its categories
    /// are outside the policy's domain and never fail O3X compilation.
    pub fn compile(
        &self,
        channels: &BTreeSet<ChannelId>,
        family: DeviceFamily,
    ) -> Result<SchemaDocument> {
        match family {
            DeviceFamily::O3x => Ok(SchemaDocument::Flags(flag_schema(channels))),
            DeviceFamily::O3d | DeviceFamily::O3r => self
                .element_list(channels, family)
                .map(SchemaDocument::ElementList),
        }
    }

    /// Compile straight to the UTF-8 wire form.
    pub fn compile_to_json(
        &self,
        channels: &BTreeSet<ChannelId>,
        family: DeviceFamily,
    ) -> Result<String> {
        self.compile(channels, family)?.to_json()
    }

    fn element_list(
        &self,
        channels: &BTreeSet<ChannelId>,
        family: DeviceFamily,
    ) -> Result<ElementListSchema> {
        let mut elements = vec![START_SENTINEL];

        for &channel in channels {
            match registry::lookup(family, channel) {
                Some(entry) => elements.extend_from_slice(entry.as_slice()),
                None => match self.policy {
                    UnsupportedChannelPolicy::Drop => {
                        tracing::debug!(
                            %channel,
                            %family,
                            "channel has no wire mapping, omitted from schema"
                        );
                    }
                    UnsupportedChannelPolicy::Reject => {
                        return Err(SchemaError::UnsupportedChannel { channel, family });
                    }
                },
            }
        }

        elements.push(STOP_SENTINEL);
        Ok(ElementListSchema::new(elements))
    }
}

/// Channels that raise the O3X XYZ flag; any one of them suffices.
const XYZ_SOURCES: [ChannelId; 5] = [
    ChannelId::CartesianX,
    ChannelId::CartesianY,
    ChannelId::CartesianZ,
    ChannelId::CartesianAll,
    ChannelId::Xyz,
];

fn flag_schema(channels: &BTreeSet<ChannelId>) -> FlagSchema {
    FlagSchema {
        distance: channels.contains(&ChannelId::RadialDistance),
        amplitude: channels.contains(&ChannelId::Amplitude),
        grayscale: channels.contains(&ChannelId::Grayscale),
        xyz: XYZ_SOURCES.iter().any(|id| channels.contains(id)),
        distance_noise: channels.contains(&ChannelId::DistanceNoise),
        confidence: channels.contains(&ChannelId::Confidence),
    }
}
