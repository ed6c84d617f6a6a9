/// A raw chunk id with no corresponding [`ChannelId`](crate::ChannelId).
///
/// Produced when resolving wire chunk ids, e.g. while decoding a stream
/// from a newer firmware than this crate knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unknown channel id {0}")]
pub struct UnknownChannelId(pub u32);
