//! Process identity attached to every record.

use serde::{Deserialize, Serialize};

/// Process-wide identity block, serialized into every record's `sys` field.
///
/// Set once during startup and shared read-only at event-build time.
/// Replacing it mid-flight is permitted but produces records with mixed
/// identities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Datacenter the process runs in.
    pub idc: String,
    /// Host IP address.
    #[serde(rename = "IP")]
    pub ip: String,
    /// Application version.
    pub ver: String,
}

impl Identity {
    /// Create an identity from its three fields.
    pub fn new(idc: impl Into<String>, ip: impl Into<String>, ver: impl Into<String>) -> Self {
        Self {
            idc: idc.into(),
            ip: ip.into(),
            ver: ver.into(),
        }
    }
}
