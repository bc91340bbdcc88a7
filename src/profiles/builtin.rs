use super::{Profile, ProfileCheck, COMMUNITY_PROFILE, PARTNER_PROFILE, REDHAT_PROFILE};
use crate::checks::{catalog, CheckType, CATALOG_VERSION};

fn profile_for(vendor_type: &str, classify: impl Fn(&str) -> CheckType) -> Profile {
    Profile {
        vendor_type: vendor_type.to_string(),
        version: CATALOG_VERSION.to_string(),
        checks: catalog::catalog()
            .into_iter()
            .map(|id| ProfileCheck {
                check_type: classify(&id.name),
                name: id.to_string(),
            })
            .collect(),
    }
}

/// Profiles shipped with the verifier.
///
/// Partners and Red Hat must pass every check; the community profile only
/// requires the chart to be a Helm 3 chart.
pub fn builtin_profiles() -> Vec<Profile> {
    vec![
        profile_for(PARTNER_PROFILE, |_| CheckType::Mandatory),
        profile_for(REDHAT_PROFILE, |_| CheckType::Mandatory),
        profile_for(COMMUNITY_PROFILE, |name| {
            if name == catalog::IS_HELM_V3 {
                CheckType::Mandatory
            } else {
                CheckType::Optional
            }
        }),
    ]
}
