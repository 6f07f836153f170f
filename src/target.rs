//! Targets shown on attack status lines

use serde::{Deserialize, Serialize};

/// Anything that can be named on an attack status line.
pub trait StatusTarget {
    /// Name to display when it is known
    fn display_name(&self) -> &str;
    /// Whether the display name is known (hidden names show as "unknown")
    fn name_known(&self) -> bool;
    /// Signal power in dB
    fn power(&self) -> i32;
}

/// A plain target record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    /// Network name
    pub essid: String,
    /// False when the network hides its name
    #[serde(default = "default_essid_known")]
    pub essid_known: bool,
    /// Signal power in dB
    pub power: i32,
}

const fn default_essid_known() -> bool {
    true
}

impl Target {
    /// Create a target with a known name
    #[must_use]
    pub fn new(essid: &str, power: i32) -> Self {
        Self {
            essid: essid.to_string(),
            essid_known: true,
            power,
        }
    }

    /// Create a target whose name is hidden
    #[must_use]
    pub const fn hidden(power: i32) -> Self {
        Self {
            essid: String::new(),
            essid_known: false,
            power,
        }
    }
}

impl StatusTarget for Target {
    fn display_name(&self) -> &str {
        &self.essid
    }

    fn name_known(&self) -> bool {
        self.essid_known
    }

    fn power(&self) -> i32 {
        self.power
    }
}
