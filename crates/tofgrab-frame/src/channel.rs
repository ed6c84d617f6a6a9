//! Logical output channels.
//!
//! A channel is one category of data a device can emit — an image, a
//! calibration blob, acquisition metadata. Discriminants are the chunk ids
//! the firmware uses on the wire, grouped by hundreds: distance/amplitude
//! images 1xx, cartesian data 2xx, confidence 3xx, sensor info 4xx,
//! calibration 5xx, acquisition metadata 6xx, diagnostics 9xx.

use serde::{Deserialize, Serialize};

use crate::error::UnknownChannelId;

/// A logical data channel a device can be asked to stream.
///
/// The enum is closed: devices only ever emit channels listed here, and the
/// discriminant order is the canonical channel order used wherever a
/// deterministic iteration is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u32)]
pub enum ChannelId {
    /// Radial distance image.
    RadialDistance = 100,
    /// Normalized amplitude image.
    Amplitude = 101,
    /// Raw (un-normalized) amplitude image.
    RawAmplitude = 103,
    /// Ambient-light grayscale image.
    Grayscale = 104,
    /// Distance noise estimate image.
    DistanceNoise = 105,
    /// Cartesian X component image.
    CartesianX = 200,
    /// Cartesian Y component image.
    CartesianY = 201,
    /// Cartesian Z component image.
    CartesianZ = 202,
    /// All cartesian components in one chunk.
    CartesianAll = 203,
    /// Combined XYZ point image.
    Xyz = 204,
    /// Unit vector matrices for cartesian reconstruction.
    UnitVectors = 223,
    /// JPEG-compressed 2D image.
    Jpeg = 260,
    /// Pixel confidence image.
    Confidence = 300,
    /// Time-of-flight acquisition info block.
    TofInfo = 420,
    /// Intrinsic calibration parameters.
    IntrinsicCalibration = 500,
    /// Inverse intrinsic calibration parameters.
    InverseIntrinsicCalibration = 501,
    /// Extrinsic calibration parameters.
    ExtrinsicCalibration = 502,
    /// Device model description as JSON.
    JsonModel = 510,
    /// Per-phase exposure times of the acquisition.
    ExposureTime = 600,
    /// Illumination module temperature.
    IlluminationTemperature = 601,
    /// Vendor algorithm debug blob.
    AlgoDebug = 900,
}

impl ChannelId {
    /// Every channel in canonical (discriminant) order.
    pub const ALL: &'static [ChannelId] = &[
        ChannelId::RadialDistance,
        ChannelId::Amplitude,
        ChannelId::RawAmplitude,
        ChannelId::Grayscale,
        ChannelId::DistanceNoise,
        ChannelId::CartesianX,
        ChannelId::CartesianY,
        ChannelId::CartesianZ,
        ChannelId::CartesianAll,
        ChannelId::Xyz,
        ChannelId::UnitVectors,
        ChannelId::Jpeg,
        ChannelId::Confidence,
        ChannelId::TofInfo,
        ChannelId::IntrinsicCalibration,
        ChannelId::InverseIntrinsicCalibration,
        ChannelId::ExtrinsicCalibration,
        ChannelId::JsonModel,
        ChannelId::ExposureTime,
        ChannelId::IlluminationTemperature,
        ChannelId::AlgoDebug,
    ];

    /// The raw chunk id used on the wire.
    pub fn raw(self) -> u32 {
        self as u32
    }

    /// Stable lowercase name for logs and diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ChannelId::RadialDistance => "radial_distance",
            ChannelId::Amplitude => "amplitude",
            ChannelId::RawAmplitude => "raw_amplitude",
            ChannelId::Grayscale => "grayscale",
            ChannelId::DistanceNoise => "distance_noise",
            ChannelId::CartesianX => "cartesian_x",
            ChannelId::CartesianY => "cartesian_y",
            ChannelId::CartesianZ => "cartesian_z",
            ChannelId::CartesianAll => "cartesian_all",
            ChannelId::Xyz => "xyz",
            ChannelId::UnitVectors => "unit_vectors",
            ChannelId::Jpeg => "jpeg",
            ChannelId::Confidence => "confidence",
            ChannelId::TofInfo => "tof_info",
            ChannelId::IntrinsicCalibration => "intrinsic_calibration",
            ChannelId::InverseIntrinsicCalibration => "inverse_intrinsic_calibration",
            ChannelId::ExtrinsicCalibration => "extrinsic_calibration",
            ChannelId::JsonModel => "json_model",
            ChannelId::ExposureTime => "exposure_time",
            ChannelId::IlluminationTemperature => "illumination_temperature",
            ChannelId::AlgoDebug => "algo_debug",
        }
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u32> for ChannelId {
    type Error = UnknownChannelId;

    /// Resolve a raw chunk id, e.g. at the stream-decoder boundary.
    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        ChannelId::ALL
            .iter()
            .copied()
            .find(|channel| channel.raw() == raw)
            .ok_or(UnknownChannelId(raw))
    }
}
