//! Versioned profiles that classify checks as mandatory or optional.
//!
//! A profile is selected by vendor type and version. An unknown vendor type
//! falls back to the default profile, and an unknown version falls back to
//! the newest version available for the vendor type.

mod builtin;


use serde::{Deserialize, Serialize};

use crate::checks::CheckType;
use crate::config::values::{lookup_string, Values};
use crate::error::{Error, Result};

pub use builtin::builtin_profiles;

pub const VENDOR_TYPE_CONFIG_NAME: &str = "profile.vendortype";
pub const VERSION_CONFIG_NAME: &str = "profile.version";

pub const PARTNER_PROFILE: &str = "partner";
pub const REDHAT_PROFILE: &str = "redhat";
pub const COMMUNITY_PROFILE: &str = "community";

pub const DEFAULT_PROFILE: &str = PARTNER_PROFILE;
pub const DEFAULT_PROFILE_VERSION: &str = "v1.0";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileCheck {
    /// Full check identifier, e.g. `v1.0/has-readme`.
    pub name: String,
    #[serde(rename = "type")]
    pub check_type: CheckType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(rename = "vendorType")]
    pub vendor_type: String,
    pub version: String,
    #[serde(default)]
    pub checks: Vec<ProfileCheck>,
}

impl Profile {
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::Parse(format!("profile: {e}")))
    }

    /// Classification of a check, `None` if the profile does not list it.
    pub fn check_type(&self, check: &str) -> Option<CheckType> {
        self.checks
            .iter()
            .find(|c| c.name == check)
            .map(|c| c.check_type)
    }

    pub fn mandatory_checks(&self) -> impl Iterator<Item = &ProfileCheck> {
        self.checks
            .iter()
            .filter(|c| c.check_type == CheckType::Mandatory)
    }
}

/// The set of profiles a verifier or summarizer resolves against.
#[derive(Debug, Clone)]
pub struct ProfileSet {
    profiles: Vec<Profile>,
}

impl Default for ProfileSet {
    fn default() -> Self {
        Self {
            profiles: builtin_profiles(),
        }
    }
}

impl ProfileSet {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self { profiles }
    }

    /// Add a profile, replacing any existing one with the same vendor type and version.
    pub fn add(&mut self, profile: Profile) -> &mut Self {
        self.profiles.retain(|p| {
            !(p.vendor_type.eq_ignore_ascii_case(&profile.vendor_type)
                && p.version == profile.version)
        });
        self.profiles.push(profile);
        self
    }

    pub fn profiles(&self) -> &[Profile] {
        &self.profiles
    }

    /// Resolve a profile by vendor type and version.
    ///
    /// Returns `None` only when the set holds no profile for the requested
    /// vendor type nor for the default vendor type.
    pub fn resolve(&self, vendor_type: Option<&str>, version: Option<&str>) -> Option<&Profile> {
        let for_vendor = |vendor: &str| -> Vec<&Profile> {
            self.profiles
                .iter()
                .filter(|p| p.vendor_type.eq_ignore_ascii_case(vendor))
                .collect()
        };

        let mut candidates = vendor_type.map(for_vendor).unwrap_or_default();
        if candidates.is_empty() {
            candidates = for_vendor(DEFAULT_PROFILE);
        }

        if let Some(version) = version {
            if let Some(exact) = candidates.iter().find(|p| p.version == version) {
                return Some(*exact);
            }
        }

        candidates
            .into_iter()
            .max_by_key(|p| parse_profile_version(&p.version))
    }

    /// Resolve a profile from `profile.vendortype` / `profile.version` entries.
    pub fn resolve_from_values(&self, values: &Values) -> Option<&Profile> {
        let vendor_type = lookup_string(values, VENDOR_TYPE_CONFIG_NAME);
        let version = lookup_string(values, VERSION_CONFIG_NAME);
        self.resolve(
            vendor_type.as_deref().filter(|v| !v.is_empty()),
            version.as_deref().filter(|v| !v.is_empty()),
        )
    }
}

/// Parse `v1.0` / `1.2.3` style profile versions for ordering.
fn parse_profile_version(version: &str) -> Option<semver::Version> {
    let trimmed = version.trim_start_matches(['v', 'V']);
    let padded = match trimmed.split('.').count() {
        1 => format!("{trimmed}.0.0"),
        2 => format!("{trimmed}.0"),
        _ => trimmed.to_string(),
    };
    semver::Version::parse(&padded).ok()
}
