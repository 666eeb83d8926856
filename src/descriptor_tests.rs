use super::{DescriptorSpec, ProjectDescriptor, SUPPORTED_POLICY_VERSIONS};
use crate::error::ConfigError;
use std::collections::BTreeMap;

fn kdtools_spec() -> DescriptorSpec {
    DescriptorSpec {
        project: "KDTools".to_string(),
        version: "2.3.99".to_string(),
        subprojects: ["KDToolsCore", "KDToolsGui", "KDUnitTest", "KDUpdater"]
            .iter()
            .map(|name| name.to_string())
            .collect(),
        prefixed: false,
        forward_headers: BTreeMap::from([(
            "KDUpdater/KDUpdater".to_string(),
            "kdupdater.h".to_string(),
        )]),
        policy_version: 2,
    }
}

#[test]
fn accepts_the_kdtools_request() {
    let descriptor = ProjectDescriptor::new(kdtools_spec()).expect("valid spec");
    assert_eq!(descriptor.project(), "KDTools");
    assert_eq!(descriptor.version().to_string(), "2.3.99");
    assert_eq!(
        descriptor.subprojects(),
        ["KDToolsCore", "KDToolsGui", "KDUnitTest", "KDUpdater"]
    );
    assert!(!descriptor.prefixed());
    assert_eq!(
        descriptor.forward_headers().get("KDUpdater/KDUpdater"),
        Some(&"kdupdater.h".to_string())
    );
    assert_eq!(descriptor.policy_version(), 2);
}

#[test]
fn preserves_subproject_declaration_order() {
    let mut spec = kdtools_spec();
    spec.subprojects.reverse();
    spec.forward_headers.clear();
    let descriptor = ProjectDescriptor::new(spec).expect("valid spec");
    assert_eq!(
        descriptor.subprojects(),
        ["KDUpdater", "KDUnitTest", "KDToolsGui", "KDToolsCore"]
    );
}

#[test]
fn rejects_missing_project_identifier() {
    for project in ["", "   "] {
        let mut spec = kdtools_spec();
        spec.project = project.to_string();
        assert_eq!(
            ProjectDescriptor::new(spec),
            Err(ConfigError::MissingProject)
        );
    }
}

#[test]
fn rejects_empty_subproject_list() {
    let mut spec = kdtools_spec();
    spec.subprojects.clear();
    spec.forward_headers.clear();
    assert_eq!(
        ProjectDescriptor::new(spec),
        Err(ConfigError::EmptySubprojects)
    );
}

#[test]
fn rejects_duplicate_subprojects() {
    let mut spec = kdtools_spec();
    spec.subprojects.push("KDToolsGui".to_string());
    assert_eq!(
        ProjectDescriptor::new(spec),
        Err(ConfigError::DuplicateSubproject("KDToolsGui".to_string()))
    );
}

#[test]
fn rejects_malformed_version_strings() {
    for version in ["", "2.3.x", "v2.3.99", "2..3"] {
        let mut spec = kdtools_spec();
        spec.version = version.to_string();
        assert_eq!(
            ProjectDescriptor::new(spec),
            Err(ConfigError::MalformedVersion(version.to_string()))
        );
    }
}

#[test]
fn rejects_forward_header_for_unknown_subproject() {
    let mut spec = kdtools_spec();
    spec.forward_headers
        .insert("Nonexistent/Foo".to_string(), "foo.h".to_string());
    assert_eq!(
        ProjectDescriptor::new(spec),
        Err(ConfigError::ForwardHeaderUnknownSubproject(
            "Nonexistent/Foo".to_string()
        ))
    );
}

#[test]
fn rejects_forward_header_keys_that_do_not_decompose() {
    for key in ["KDUpdater", "KDUpdater/", "/KDUpdater"] {
        let mut spec = kdtools_spec();
        spec.forward_headers = BTreeMap::from([(key.to_string(), "kdupdater.h".to_string())]);
        assert_eq!(
            ProjectDescriptor::new(spec),
            Err(ConfigError::ForwardHeaderUnknownSubproject(key.to_string())),
            "accepted key {key:?}"
        );
    }
}

#[test]
fn rejects_unsupported_policy_versions() {
    for policy_version in [0, SUPPORTED_POLICY_VERSIONS.end() + 1, 99] {
        let mut spec = kdtools_spec();
        spec.policy_version = policy_version;
        assert_eq!(
            ProjectDescriptor::new(spec),
            Err(ConfigError::UnsupportedPolicyVersion(policy_version))
        );
    }
}

#[test]
fn serializes_to_the_generator_handoff_shape() {
    let descriptor = ProjectDescriptor::new(kdtools_spec()).expect("valid spec");
    let value = serde_json::to_value(&descriptor).expect("serialize descriptor");
    assert_eq!(
        value,
        serde_json::json!({
            "project": "KDTools",
            "version": "2.3.99",
            "subprojects": ["KDToolsCore", "KDToolsGui", "KDUnitTest", "KDUpdater"],
            "prefixed": false,
            "forwardHeaderMap": { "KDUpdater/KDUpdater": "kdupdater.h" },
            "policyVersion": 2,
        })
    );
}
