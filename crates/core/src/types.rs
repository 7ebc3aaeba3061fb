//! Domain record types
//!
//! Driver groups own their drivers. Rule sets and drivers hold IDs of
//! records in other collections (`driver_group_ids`, `incompatibles`);
//! those references are kept consistent by delete-bus cleanup, not by
//! constraints.
//!
//! Files written by earlier releases may carry `null` in place of an empty
//! list, so list fields decode `null` as empty.

use crate::record::{Identified, RecordKind};
use serde::{Deserialize, Deserializer, Serialize};

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Drivers
// ============================================================================

/// Hardware category a driver targets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverType {
    /// Network adapters
    Network,
    /// Display adapters
    Display,
    /// Anything else
    #[default]
    Miscellaneous,
}

/// A single installable driver
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    /// Opaque ID, unique across all groups
    #[serde(default)]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Hardware category
    #[serde(rename = "type", default)]
    pub driver_type: DriverType,
    /// Path to the installer executable
    #[serde(default)]
    pub path: String,
    /// Command-line flags passed to the installer
    #[serde(default, deserialize_with = "null_as_default")]
    pub flags: Vec<String>,
    /// Minimum execution time in seconds before the run counts as successful
    #[serde(default)]
    pub min_exe_time: f32,
    /// Exit codes accepted as success besides zero
    #[serde(default, deserialize_with = "null_as_default")]
    pub allow_rt_codes: Vec<i32>,
    /// IDs of drivers that must not be installed together with this one
    #[serde(default, deserialize_with = "null_as_default")]
    pub incompatibles: Vec<String>,
}

impl Identified for Driver {
    const KIND: RecordKind = RecordKind::Driver;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

/// An ordered group of drivers shown and installed together
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DriverGroup {
    /// Opaque ID
    #[serde(default)]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Hardware category
    #[serde(rename = "type", default)]
    pub driver_type: DriverType,
    /// Owned drivers, in install order
    #[serde(default, deserialize_with = "null_as_default")]
    pub drivers: Vec<Driver>,
}

impl DriverGroup {
    /// IDs of all nested drivers, in order
    pub fn driver_ids(&self) -> Vec<String> {
        self.drivers.iter().map(|d| d.id.clone()).collect()
    }
}

impl Identified for DriverGroup {
    const KIND: RecordKind = RecordKind::DriverGroup;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

// ============================================================================
// Hardware matching rules
// ============================================================================

/// Hardware property a rule inspects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleSource {
    /// Processor name
    Cpu,
    /// Motherboard model
    Motherboard,
    /// Graphics adapters
    Gpu,
    /// Memory modules
    Memory,
    /// Network adapters
    Nic,
    /// Storage devices
    Storage,
}

/// Comparison applied to the inspected property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleType {
    /// Property contains any value
    Contain,
    /// Property contains none of the values
    NotContain,
    /// Property equals any value
    Equal,
    /// Property equals none of the values
    NotEqual,
    /// Property matches any value as a regular expression
    Regex,
}

/// A single hardware-matching condition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Inspected property
    pub source: RuleSource,
    /// Comparison
    #[serde(rename = "type")]
    pub rule_type: RuleType,
    /// Whether comparison is case sensitive
    #[serde(default)]
    pub is_case_sensitive: bool,
    /// Values compared against
    #[serde(default, deserialize_with = "null_as_default")]
    pub values: Vec<String>,
}

/// A named set of rules selecting driver groups to install
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleSet {
    /// Opaque ID
    #[serde(default)]
    pub id: String,
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Conditions, all of which must hold
    #[serde(default, deserialize_with = "null_as_default")]
    pub rules: Vec<Rule>,
    /// Driver groups selected when the rules match
    #[serde(default, deserialize_with = "null_as_default")]
    pub driver_group_ids: Vec<String>,
}

impl Identified for RuleSet {
    const KIND: RecordKind = RecordKind::RuleSet;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}

// ============================================================================
// Application setting
// ============================================================================

/// What to do after all drivers installed successfully
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuccessAction {
    /// Leave the machine as is
    #[default]
    Nothing,
    /// Restart the machine
    Reboot,
    /// Power the machine off
    Shutdown,
}

/// Application-wide settings, stored as a single value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSetting {
    /// Create a partition before installing
    pub create_partition: bool,
    /// Set a user password after installing
    pub set_password: bool,
    /// Password applied when `set_password` is on
    pub password: String,
    /// Install drivers in parallel
    pub parallel_install: bool,
    /// Action after a successful run
    pub success_action: SuccessAction,
    /// Seconds to wait before `success_action`
    pub success_action_delay: i32,
    /// Hide miniport network adapters
    pub filter_miniport_nic: bool,
    /// Hide Microsoft virtual network adapters
    pub filter_microsoft_nic: bool,
    /// UI language code
    pub language: String,
    /// Where driver packages are downloaded from
    pub driver_download_url: String,
    /// Check for updates on start
    pub auto_check_update: bool,
    /// Hide rule sets whose driver groups are not found
    pub hide_not_found: bool,
}

impl Default for AppSetting {
    fn default() -> Self {
        Self {
            create_partition: false,
            set_password: false,
            password: String::new(),
            parallel_install: true,
            success_action: SuccessAction::Nothing,
            success_action_delay: 5,
            filter_miniport_nic: true,
            filter_microsoft_nic: true,
            language: "en".to_string(),
            driver_download_url: String::new(),
            auto_check_update: true,
            hide_not_found: false,
        }
    }
}
