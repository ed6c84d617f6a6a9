//! Wire-element descriptors.
//!
//! An element-list schema is an ordered sequence of these descriptors; the
//! device emits one physical field per element, in sequence order. Field
//! spellings in the serialized form (`type`, `id`, `value`,
//! `format.dataencoding`, `format.order`) are fixed by the firmware parser.

use serde::Serialize;

/// Physical type of one wire element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WireType {
    /// ASCII string field, optionally with a fixed literal value.
    String,
    /// Opaque binary chunk (images, calibration data).
    Blob,
    /// 32-bit unsigned integer field.
    Uint32,
    /// 32-bit IEEE float field.
    Float32,
}

/// Byte order of a binary-encoded numeric element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ByteOrder {
    Little,
    Big,
}

/// Text-vs-binary encoding of an element's payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataEncoding {
    Ascii,
    Binary,
}

/// Per-element encoding metadata.
///
/// Elements without one inherit the document's default encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WireFormat {
    pub dataencoding: DataEncoding,
    pub order: ByteOrder,
}

impl WireFormat {
    /// Binary little-endian, the encoding of all numeric sub-elements.
    pub const BINARY_LITTLE: WireFormat = WireFormat {
        dataencoding: DataEncoding::Binary,
        order: ByteOrder::Little,
    };
}

/// One physical element in a device output schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WireElement {
    #[serde(rename = "type")]
    pub wire_type: WireType,
    pub id: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<WireFormat>,
}

impl WireElement {
    /// An opaque binary chunk identified by its frame-layout id.
    pub const fn blob(id: &'static str) -> Self {
        Self {
            wire_type: WireType::Blob,
            id,
            value: None,
            format: None,
        }
    }

    /// A string element carrying a fixed literal value.
    pub const fn marker(id: &'static str, value: &'static str) -> Self {
        Self {
            wire_type: WireType::String,
            id,
            value: Some(value),
            format: None,
        }
    }

    /// A binary little-endian uint32 sub-field.
    pub const fn uint32_le(id: &'static str) -> Self {
        Self {
            wire_type: WireType::Uint32,
            id,
            value: None,
            format: Some(WireFormat::BINARY_LITTLE),
        }
    }

    /// A binary little-endian float32 sub-field.
    pub const fn float32_le(id: &'static str) -> Self {
        Self {
            wire_type: WireType::Float32,
            id,
            value: None,
            format: Some(WireFormat::BINARY_LITTLE),
        }
    }
}

/// The wire elements one channel contributes to a schema.
///
/// Most channels map to a single element. A few expand into a fixed group —
/// a textual label followed by numeric sub-fields — whose internal order is
/// part of the wire contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelElements {
    Single(WireElement),
    Group(&'static [WireElement]),
}

impl ChannelElements {
    /// Expand into the ordered element sequence this entry contributes.
    ///
    /// Groups keep their declared order; nothing is ever reordered.
    pub fn as_slice(&self) -> &[WireElement] {
        match self {
            ChannelElements::Single(element) => std::slice::from_ref(element),
            ChannelElements::Group(elements) => elements,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_expands_to_one_element() {
        let entry = ChannelElements::Single(WireElement::blob("distance_image"));
        let elements = entry.as_slice();
        assert_eq!(elements.len(), 1);
        assert_eq!(elements[0].id, "distance_image");
    }

    #[test]
    fn group_expands_in_declared_order() {
        const GROUP: &[WireElement] = &[
            WireElement::marker("label", "label"),
            WireElement::uint32_le("a"),
            WireElement::uint32_le("b"),
        ];
        let entry = ChannelElements::Group(GROUP);
        let ids: Vec<&str> = entry.as_slice().iter().map(|e| e.id).collect();
        assert_eq!(ids, vec!["label", "a", "b"]);
    }

    #[test]
    fn blob_serializes_without_optional_fields() {
        let json = serde_json::to_string(&WireElement::blob("confidence_image")).unwrap();
        assert_eq!(json, r#"{"type":"blob","id":"confidence_image"}"#);
    }

    #[test]
    fn marker_serializes_with_literal_value() {
        let json = serde_json::to_string(&WireElement::marker("start_string", "star")).unwrap();
        assert_eq!(json, r#"{"type":"string","id":"start_string","value":"star"}"#);
    }

    #[test]
    fn numeric_sub_field_serializes_with_format() {
        let json = serde_json::to_string(&WireElement::uint32_le("exposure_time_1")).unwrap();
        assert_eq!(
            json,
            r#"{"type":"uint32","id":"exposure_time_1","format":{"dataencoding":"binary","order":"little"}}"#
        );

        let json = serde_json::to_string(&WireElement::float32_le("temp_illu")).unwrap();
        assert_eq!(
            json,
            r#"{"type":"float32","id":"temp_illu","format":{"dataencoding":"binary","order":"little"}}"#
        );
    }
}
