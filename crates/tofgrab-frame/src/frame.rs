//! Decoded-frame container.
//!
//! The stream decoder turns one device acquisition into a [`Frame`]:
//! channel payloads keyed by [`ChannelId`] plus the acquisition timestamps.
//! Frames are built once and read-only afterwards — consumers on any number
//! of threads can share one freely.

use std::collections::btree_map;
use std::collections::BTreeMap;

use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::channel::ChannelId;

/// Acquisition timestamp attached to a decoded frame.
pub type Timestamp = DateTime<Utc>;

/// Decoded results of one device acquisition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frame {
    payloads: BTreeMap<ChannelId, Bytes>,
    timestamps: Vec<Timestamp>,
}

impl Frame {
    /// Create a frame from decoded payloads and acquisition timestamps.
    ///
    /// Timestamps must already be in acquisition order; the frame never
    /// reorders or mutates them.
    pub fn new(payloads: BTreeMap<ChannelId, Bytes>, timestamps: Vec<Timestamp>) -> Self {
        Self {
            payloads,
            timestamps,
        }
    }

    /// Whether the frame carries a payload for `id`.
    ///
    /// This is the authoritative presence test — [`Frame::channel`] alone
    /// cannot distinguish an absent channel from an empty payload.
    pub fn has_channel(&self, id: ChannelId) -> bool {
        self.payloads.contains_key(&id)
    }

    /// Payload for `id`, or `None` if the frame doesn't carry it.
    pub fn get(&self, id: ChannelId) -> Option<&Bytes> {
        self.payloads.get(&id)
    }

    /// Payload for `id`; an absent channel yields an empty payload.
    pub fn channel(&self, id: ChannelId) -> Bytes {
        self.payloads.get(&id).cloned().unwrap_or_else(Bytes::new)
    }

    /// Acquisition timestamps, one per acquisition event, in order.
    pub fn timestamps(&self) -> &[Timestamp] {
        &self.timestamps
    }

    /// Number of channels in the frame.
    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    /// Whether the frame carries no channels at all.
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }

    /// Iterate `(channel, payload)` pairs in ascending channel order.
    ///
    /// Each call starts a fresh traversal.
    pub fn iter(&self) -> btree_map::Iter<'_, ChannelId, Bytes> {
        self.payloads.iter()
    }
}

impl<'a> IntoIterator for &'a Frame {
    type Item = (&'a ChannelId, &'a Bytes);
    type IntoIter = btree_map::Iter<'a, ChannelId, Bytes>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn sample_frame() -> Frame {
        let mut payloads = BTreeMap::new();
        payloads.insert(ChannelId::Confidence, Bytes::from_static(b"conf"));
        payloads.insert(ChannelId::RadialDistance, Bytes::from_static(b"dist"));
        payloads.insert(ChannelId::ExposureTime, Bytes::new());

        let timestamps = vec![
            Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            Utc.timestamp_opt(1_700_000_000, 250_000).unwrap(),
        ];

        Frame::new(payloads, timestamps)
    }

    #[test]
    fn membership_matches_construction() {
        let frame = sample_frame();

        assert!(frame.has_channel(ChannelId::RadialDistance));
        assert!(frame.has_channel(ChannelId::Confidence));
        assert!(frame.has_channel(ChannelId::ExposureTime));
        assert!(!frame.has_channel(ChannelId::Amplitude));
        assert_eq!(frame.len(), 3);
        assert!(!frame.is_empty());
    }

    #[test]
    fn absent_channel_yields_empty_payload() {
        let frame = sample_frame();

        assert!(frame.channel(ChannelId::Amplitude).is_empty());
        assert_eq!(frame.get(ChannelId::Amplitude), None);
    }

    #[test]
    fn empty_payload_is_distinguishable_via_get() {
        let frame = sample_frame();

        // Both lookups return empty bytes, but only one channel is present.
        assert!(frame.channel(ChannelId::ExposureTime).is_empty());
        assert!(frame.channel(ChannelId::Amplitude).is_empty());
        assert!(frame.get(ChannelId::ExposureTime).is_some());
        assert!(frame.get(ChannelId::Amplitude).is_none());
    }

    #[test]
    fn timestamps_are_returned_unmodified() {
        let timestamps = vec![
            Utc.timestamp_opt(10, 0).unwrap(),
            Utc.timestamp_opt(5, 0).unwrap(),
            Utc.timestamp_opt(20, 0).unwrap(),
        ];
        let frame = Frame::new(BTreeMap::new(), timestamps.clone());

        // Acquisition order, not sorted.
        assert_eq!(frame.timestamps(), timestamps.as_slice());
    }

    #[test]
    fn iteration_is_ordered_and_restartable() {
        let frame = sample_frame();

        let first: Vec<ChannelId> = frame.iter().map(|(id, _)| *id).collect();
        let second: Vec<ChannelId> = frame.iter().map(|(id, _)| *id).collect();

        assert_eq!(
            first,
            vec![
                ChannelId::RadialDistance,
                ChannelId::Confidence,
                ChannelId::ExposureTime,
            ]
        );
        assert_eq!(first, second);
    }

    #[test]
    fn ref_into_iterator_visits_each_pair_once() {
        let frame = sample_frame();
        let mut seen = 0usize;
        for (id, payload) in &frame {
            if *id == ChannelId::RadialDistance {
                assert_eq!(payload.as_ref(), b"dist");
            }
            seen += 1;
        }
        assert_eq!(seen, frame.len());
    }
}
