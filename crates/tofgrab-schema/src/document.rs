//! Compiled schema documents.
//!
//! Two shapes exist. Element-list documents (O3D, O3R) declare a layout
//! strategy, a default text encoding, and the ordered element sequence the
//! device must emit, framed by start/stop sentinels. Flag documents (O3X)
//! enable well-known output categories through string-boolean fields.

use serde::Serialize;

use crate::element::{DataEncoding, WireElement};
use crate::error::Result;

/// Start-of-frame sentinel; always the first element of an element list.
///
/// `"star"` is the literal start marker the firmware expects.
pub const START_SENTINEL: WireElement = WireElement::marker("start_string", "star");

/// End-of-frame sentinel; always the last element of an element list.
pub const STOP_SENTINEL: WireElement = WireElement::marker("end_string", "stop");

/// Layout strategy tag understood by the firmware layouter.
const LAYOUTER_FLEXIBLE: &str = "flexible";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
struct DefaultEncoding {
    dataencoding: DataEncoding,
}

/// Element-list schema for the O3D and O3R dialects.
///
/// Invariant: the element sequence starts with [`START_SENTINEL`] and ends
/// with [`STOP_SENTINEL`], whatever was requested — including nothing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ElementListSchema {
    layouter: &'static str,
    format: DefaultEncoding,
    elements: Vec<WireElement>,
}

impl ElementListSchema {
    /// Wrap an already-framed element sequence in the document envelope.
    pub(crate) fn new(elements: Vec<WireElement>) -> Self {
        Self {
            layouter: LAYOUTER_FLEXIBLE,
            format: DefaultEncoding {
                dataencoding: DataEncoding::Ascii,
            },
            elements,
        }
    }

    /// The ordered element sequence, sentinels included.
    pub fn elements(&self) -> &[WireElement] {
        &self.elements
    }
}

/// Output-category flags for O3X sensors.
///
/// The serialized form always carries all six `Output*Image` fields with
/// `"true"`/`"false"` string values, plus the app `Index`. Channels outside
/// these categories have no representation in this dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlagSchema {
    pub distance: bool,
    pub amplitude: bool,
    pub grayscale: bool,
    pub xyz: bool,
    pub distance_noise: bool,
    pub confidence: bool,
}

#[derive(Serialize)]
struct AppFlags {
    #[serde(rename = "Index")]
    index: &'static str,
    #[serde(rename = "OutputDistanceImage")]
    distance: &'static str,
    #[serde(rename = "OutputAmplitudeImage")]
    amplitude: &'static str,
    #[serde(rename = "OutputGrayscaleImage")]
    grayscale: &'static str,
    #[serde(rename = "OutputXYZImage")]
    xyz: &'static str,
    #[serde(rename = "OutputDistanceNoiseImage")]
    distance_noise: &'static str,
    #[serde(rename = "OutputConfidenceImage")]
    confidence: &'static str,
}

#[derive(Serialize)]
struct FlagDocument {
    #[serde(rename = "Apps")]
    apps: [AppFlags; 1],
}

/// String form the firmware expects for booleans.
fn flag(enabled: bool) -> &'static str {
    if enabled {
        "true"
    } else {
        "false"
    }
}

impl Serialize for FlagSchema {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        FlagDocument {
            apps: [AppFlags {
                index: "1",
                distance: flag(self.distance),
                amplitude: flag(self.amplitude),
                grayscale: flag(self.grayscale),
                xyz: flag(self.xyz),
                distance_noise: flag(self.distance_noise),
                confidence: flag(self.confidence),
            }],
        }
        .serialize(serializer)
    }
}

/// A compiled output schema, ready for transmission.
///
/// Immutable once compiled; one document per configuration request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum SchemaDocument {
    ElementList(ElementListSchema),
    Flags(FlagSchema),
}

impl SchemaDocument {
    /// Serialize to the UTF-8 text form the device accepts.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Element sequence of an element-list document, `None` for flags.
    pub fn elements(&self) -> Option<&[WireElement]> {
        match self {
            SchemaDocument::ElementList(schema) => Some(schema.elements()),
            SchemaDocument::Flags(_) => None,
        }
    }

    /// Flag view of an O3X document, `None` for element lists.
    pub fn as_flags(&self) -> Option<&FlagSchema> {
        match self {
            SchemaDocument::ElementList(_) => None,
            SchemaDocument::Flags(flags) => Some(flags),
        }
    }
}
