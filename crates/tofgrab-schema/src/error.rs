use tofgrab_frame::ChannelId;

use crate::family::DeviceFamily;

/// Errors that can occur while compiling an output schema.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// A requested channel has no wire mapping for the target family.
    ///
    /// Only produced under
    /// [`UnsupportedChannelPolicy::Reject`](crate::UnsupportedChannelPolicy::Reject);
    /// the default policy drops the channel instead.
    #[error("channel {channel} is not supported by {family} devices")]
    UnsupportedChannel {
        channel: ChannelId,
        family: DeviceFamily,
    },

    /// The compiled document failed to serialize.
    #[error("failed to serialize schema document: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SchemaError>;
