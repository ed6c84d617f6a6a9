use serde::{Deserialize, Serialize};

/// A class of devices sharing one schema dialect and channel mapping.
///
/// The family picks the compilation strategy: O3D and O3R devices take
/// element-list documents (each with its own channel table), O3X sensors
/// take a fixed flag document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceFamily {
    /// Legacy ToF cameras with snake_case frame-layout ids.
    O3d,
    /// Current-generation camera heads with an uppercase id dialect.
    O3r,
    /// Single-app sensors configured through output flags.
    O3x,
}

impl DeviceFamily {
    /// Marketing-style family name for logs and error messages.
    pub fn name(self) -> &'static str {
        match self {
            DeviceFamily::O3d => "O3D",
            DeviceFamily::O3r => "O3R",
            DeviceFamily::O3x => "O3X",
        }
    }
}

impl std::fmt::Display for DeviceFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
