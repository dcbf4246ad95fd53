use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Process-wide settings (theme flag and similar toggles), loaded once at
/// startup by the client and written back on change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SettingsResponse {
    pub settings: HashMap<String, String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateSettingRequest {
    pub value: String,
}
