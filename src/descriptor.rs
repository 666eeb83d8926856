//! The Project Descriptor and its construction-time validation.
//!
//! The descriptor is the single record driving one generation run: project
//! identity, the ordered subproject list, the header-prefixing flag, the
//! forward-header rename map, and the policy version. It is validated in full
//! at construction and immutable afterwards, so the generator never sees a
//! partially valid request.
use crate::error::ConfigError;
use crate::version::DottedVersion;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::ops::RangeInclusive;

/// Policy versions the generator recognizes. Ruleset 2 is current; ruleset 1
/// remains accepted for distributions that have not migrated their layout.
pub const SUPPORTED_POLICY_VERSIONS: RangeInclusive<u32> = 1..=2;

/// Raw, unvalidated inputs for one generation request.
///
/// Field values are supplied as literals at startup; `ProjectDescriptor::new`
/// is the only path from here to a descriptor.
#[derive(Debug, Clone)]
pub struct DescriptorSpec {
    pub project: String,
    pub version: String,
    /// Declaration order is the generator's processing and emission order.
    pub subprojects: Vec<String>,
    pub prefixed: bool,
    /// `<subproject>/<header>` logical path to generated forwarding filename.
    pub forward_headers: BTreeMap<String, String>,
    pub policy_version: u32,
}

/// A validated, immutable generation request.
///
/// Serializes to the camelCase JSON shape the external generator consumes;
/// the BTreeMap keeps forward-header ordering stable across runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDescriptor {
    project: String,
    version: DottedVersion,
    subprojects: Vec<String>,
    prefixed: bool,
    #[serde(rename = "forwardHeaderMap")]
    forward_headers: BTreeMap<String, String>,
    policy_version: u32,
}

impl ProjectDescriptor {
    /// Validate a raw spec and seal it into a descriptor.
    ///
    /// Every rule is checked before the descriptor exists; the first failure
    /// aborts construction with the matching `ConfigError`.
    pub fn new(spec: DescriptorSpec) -> Result<Self, ConfigError> {
        if spec.project.trim().is_empty() {
            return Err(ConfigError::MissingProject);
        }
        if spec.subprojects.is_empty() {
            return Err(ConfigError::EmptySubprojects);
        }
        let mut seen = BTreeSet::new();
        for subproject in &spec.subprojects {
            if !seen.insert(subproject.as_str()) {
                return Err(ConfigError::DuplicateSubproject(subproject.clone()));
            }
        }
        let version: DottedVersion = spec
            .version
            .parse()
            .map_err(|_| ConfigError::MalformedVersion(spec.version.clone()))?;
        for key in spec.forward_headers.keys() {
            if !forward_key_resolves(key, &seen) {
                return Err(ConfigError::ForwardHeaderUnknownSubproject(key.clone()));
            }
        }
        if !SUPPORTED_POLICY_VERSIONS.contains(&spec.policy_version) {
            return Err(ConfigError::UnsupportedPolicyVersion(spec.policy_version));
        }
        Ok(ProjectDescriptor {
            project: spec.project,
            version,
            subprojects: spec.subprojects,
            prefixed: spec.prefixed,
            forward_headers: spec.forward_headers,
            policy_version: spec.policy_version,
        })
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn version(&self) -> &DottedVersion {
        &self.version
    }

    /// Subprojects in declared (emission) order.
    pub fn subprojects(&self) -> &[String] {
        &self.subprojects
    }

    /// Whether generated public header paths carry their subproject prefix.
    pub fn prefixed(&self) -> bool {
        self.prefixed
    }

    pub fn forward_headers(&self) -> &BTreeMap<String, String> {
        &self.forward_headers
    }

    pub fn policy_version(&self) -> u32 {
        self.policy_version
    }
}

/// A forward-header key must decompose as `<subproject>/<header>` with a
/// declared subproject and a non-empty header name.
fn forward_key_resolves(key: &str, subprojects: &BTreeSet<&str>) -> bool {
    match key.split_once('/') {
        Some((subproject, header)) => !header.is_empty() && subprojects.contains(subproject),
        None => false,
    }
}

#[cfg(test)]
#[path = "descriptor_tests.rs"]
mod tests;
