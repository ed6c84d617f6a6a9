//! Per-family channel registries.
//!
//! Each element-list family owns an independent, static table mapping a
//! logical channel to the wire elements the device emits for it. Absence
//! from a family's table means the family cannot stream that channel — an
//! expected state, surfaced as `None` so callers decide what it means.
//! O3X sensors never consult a registry; their flag document is assembled
//! directly from channel-set membership.

use tofgrab_frame::ChannelId;

use crate::element::{ChannelElements, WireElement};
use crate::family::DeviceFamily;

const EXPOSURE_TIME_ELEMENTS: &[WireElement] = &[
    WireElement::marker("exposure_times", "extime"),
    WireElement::uint32_le("exposure_time_1"),
    WireElement::uint32_le("exposure_time_2"),
    WireElement::uint32_le("exposure_time_3"),
];

const ILLUMINATION_TEMP_ELEMENTS: &[WireElement] = &[
    WireElement::marker("temp_illu", "temp_illu"),
    WireElement::float32_le("temp_illu"),
];

// Tables are sorted by channel id; element ids are the firmware's
// frame-layout identifiers and must match it byte for byte.

const O3D_TABLE: &[(ChannelId, ChannelElements)] = &[
    (
        ChannelId::RadialDistance,
        ChannelElements::Single(WireElement::blob("distance_image")),
    ),
    (
        ChannelId::Amplitude,
        ChannelElements::Single(WireElement::blob("normalized_amplitude_image")),
    ),
    (
        ChannelId::RawAmplitude,
        ChannelElements::Single(WireElement::blob("amplitude_image")),
    ),
    (
        ChannelId::Grayscale,
        ChannelElements::Single(WireElement::blob("grayscale_image")),
    ),
    (
        ChannelId::CartesianX,
        ChannelElements::Single(WireElement::blob("x_image")),
    ),
    (
        ChannelId::CartesianY,
        ChannelElements::Single(WireElement::blob("y_image")),
    ),
    (
        ChannelId::CartesianZ,
        ChannelElements::Single(WireElement::blob("z_image")),
    ),
    (
        ChannelId::UnitVectors,
        ChannelElements::Single(WireElement::blob("all_unit_vector_matrices")),
    ),
    (
        ChannelId::Confidence,
        ChannelElements::Single(WireElement::blob("confidence_image")),
    ),
    (
        ChannelId::IntrinsicCalibration,
        ChannelElements::Single(WireElement::blob("intrinsic_calibration")),
    ),
    (
        ChannelId::InverseIntrinsicCalibration,
        ChannelElements::Single(WireElement::blob("inverse_intrinsic_calibration")),
    ),
    (
        ChannelId::ExtrinsicCalibration,
        ChannelElements::Single(WireElement::blob("extrinsic_calibration")),
    ),
    (
        ChannelId::JsonModel,
        ChannelElements::Single(WireElement::blob("json_model")),
    ),
    (
        ChannelId::ExposureTime,
        ChannelElements::Group(EXPOSURE_TIME_ELEMENTS),
    ),
    (
        ChannelId::IlluminationTemperature,
        ChannelElements::Group(ILLUMINATION_TEMP_ELEMENTS),
    ),
];

const O3R_TABLE: &[(ChannelId, ChannelElements)] = &[
    (
        ChannelId::RadialDistance,
        ChannelElements::Single(WireElement::blob("RADIAL_DISTANCE_COMPRESSED")),
    ),
    (
        ChannelId::Amplitude,
        ChannelElements::Single(WireElement::blob("AMPLITUDE_COMPRESSED")),
    ),
    (
        ChannelId::DistanceNoise,
        ChannelElements::Single(WireElement::blob("RADIAL_DISTANCE_NOISE")),
    ),
    (
        ChannelId::Jpeg,
        ChannelElements::Single(WireElement::blob("JPEG_IMAGE")),
    ),
    (
        ChannelId::Confidence,
        ChannelElements::Single(WireElement::blob("CONFIDENCE")),
    ),
    (
        ChannelId::TofInfo,
        ChannelElements::Single(WireElement::blob("TOF_INFO")),
    ),
    (
        ChannelId::IntrinsicCalibration,
        ChannelElements::Single(WireElement::blob("intrinsic_calibration")),
    ),
    (
        ChannelId::InverseIntrinsicCalibration,
        ChannelElements::Single(WireElement::blob("inverse_intrinsic_calibration")),
    ),
    (
        ChannelId::AlgoDebug,
        ChannelElements::Single(WireElement::blob("ALGO_DEBUG")),
    ),
];

/// Wire elements `family` emits for `id`, or `None` if unsupported.
///
/// Pure lookup over static data; safe to call from any thread.
pub fn lookup(family: DeviceFamily, id: ChannelId) -> Option<&'static ChannelElements> {
    table_for(family)?
        .iter()
        .find(|(channel, _)| *channel == id)
        .map(|(_, elements)| elements)
}

/// Whether `family` can stream `id` at all.
pub fn is_supported(family: DeviceFamily, id: ChannelId) -> bool {
    lookup(family, id).is_some()
}

fn table_for(family: DeviceFamily) -> Option<&'static [(ChannelId, ChannelElements)]> {
    match family {
        DeviceFamily::O3d => Some(O3D_TABLE),
        DeviceFamily::O3r => Some(O3R_TABLE),
        // Flag documents bypass the registry entirely.
        DeviceFamily::O3x => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tables_are_sorted_by_channel() {
        for table in [O3D_TABLE, O3R_TABLE] {
            for pair in table.windows(2) {
                assert!(pair[0].0 < pair[1].0);
            }
        }
    }

    #[test]
    fn o3d_maps_distance_to_blob() {
        let entry = lookup(DeviceFamily::O3d, ChannelId::RadialDistance).unwrap();
        assert_eq!(entry.as_slice()[0].id, "distance_image");
    }

    #[test]
    fn dialects_disagree_on_element_ids() {
        let o3d = lookup(DeviceFamily::O3d, ChannelId::RadialDistance).unwrap();
        let o3r = lookup(DeviceFamily::O3r, ChannelId::RadialDistance).unwrap();
        assert_eq!(o3d.as_slice()[0].id, "distance_image");
        assert_eq!(o3r.as_slice()[0].id, "RADIAL_DISTANCE_COMPRESSED");
    }

    #[test]
    fn exposure_time_expands_to_four_elements() {
        let entry = lookup(DeviceFamily::O3d, ChannelId::ExposureTime).unwrap();
        let ids: Vec<&str> = entry.as_slice().iter().map(|e| e.id).collect();
        assert_eq!(
            ids,
            vec![
                "exposure_times",
                "exposure_time_1",
                "exposure_time_2",
                "exposure_time_3",
            ]
        );
    }

    #[test]
    fn illumination_temperature_expands_to_label_and_reading() {
        let entry = lookup(DeviceFamily::O3d, ChannelId::IlluminationTemperature).unwrap();
        assert_eq!(entry.as_slice().len(), 2);
    }

    #[test]
    fn support_differs_per_family() {
        // O3D-only channels.
        assert!(is_supported(DeviceFamily::O3d, ChannelId::Grayscale));
        assert!(!is_supported(DeviceFamily::O3r, ChannelId::Grayscale));
        assert!(is_supported(DeviceFamily::O3d, ChannelId::ExposureTime));
        assert!(!is_supported(DeviceFamily::O3r, ChannelId::ExposureTime));

        // O3R-only channels.
        assert!(is_supported(DeviceFamily::O3r, ChannelId::TofInfo));
        assert!(!is_supported(DeviceFamily::O3d, ChannelId::TofInfo));
        assert!(is_supported(DeviceFamily::O3r, ChannelId::AlgoDebug));
        assert!(!is_supported(DeviceFamily::O3d, ChannelId::AlgoDebug));
    }

    #[test]
    fn o3x_never_resolves_through_the_registry() {
        for &channel in ChannelId::ALL {
            assert!(lookup(DeviceFamily::O3x, channel).is_none());
        }
    }
}
