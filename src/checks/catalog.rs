//! The static catalog of checks a verifier knows about.

use super::types::CheckId;

/// Version shared by every check in the catalog.
pub const CATALOG_VERSION: &str = "v1.0";

pub const HAS_README: &str = "has-readme";
pub const IS_HELM_V3: &str = "is-helm-v3";
pub const CONTAINS_TEST: &str = "contains-test";
pub const CONTAINS_VALUES: &str = "contains-values";
pub const CONTAINS_VALUES_SCHEMA: &str = "contains-values-schema";
pub const HAS_KUBEVERSION: &str = "has-kubeversion";
pub const NOT_CONTAINS_CRDS: &str = "not-contains-crds";
pub const HELM_LINT: &str = "helm-lint";
pub const NOT_CONTAIN_CSI_OBJECTS: &str = "not-contain-csi-objects";
pub const IMAGES_ARE_CERTIFIED: &str = "images-are-certified";
pub const CHART_TESTING: &str = "chart-testing";
pub const REQUIRED_ANNOTATIONS_PRESENT: &str = "required-annotations-present";

/// Catalog order. Selected checks are always executed and reported in this order.
pub const CHECK_NAMES: [&str; 12] = [
    HAS_README,
    IS_HELM_V3,
    CONTAINS_TEST,
    CONTAINS_VALUES,
    CONTAINS_VALUES_SCHEMA,
    HAS_KUBEVERSION,
    NOT_CONTAINS_CRDS,
    HELM_LINT,
    NOT_CONTAIN_CSI_OBJECTS,
    IMAGES_ARE_CERTIFIED,
    CHART_TESTING,
    REQUIRED_ANNOTATIONS_PRESENT,
];

/// All catalog checks as versioned identifiers.
pub fn catalog() -> Vec<CheckId> {
    CHECK_NAMES
        .iter()
        .map(|name| CheckId::new(*name, CATALOG_VERSION))
        .collect()
}

pub fn is_known(name: &str) -> bool {
    CHECK_NAMES.contains(&name)
}

/// Look up a check by bare name (`has-readme`) or full identifier (`v1.0/has-readme`).
pub fn lookup(name: &str) -> Option<CheckId> {
    let bare = match name.split_once('/') {
        Some((version, bare)) if version == CATALOG_VERSION => bare,
        Some(_) => return None,
        None => name,
    };
    is_known(bare).then(|| CheckId::new(bare, CATALOG_VERSION))
}
