//! Embedded configuration for the KDTools distribution.
//!
//! The generation request is deliberately a set of source-level literals, not
//! a config file or CLI flags: the driver describes exactly one distribution
//! and the descriptor is rebuilt and revalidated from these values each run.
use crate::descriptor::{DescriptorSpec, ProjectDescriptor};
use crate::error::ConfigError;

const PROJECT: &str = "KDTools";
const VERSION: &str = "2.3.99";
// Declaration order is the generator's emission order.
const SUBPROJECTS: [&str; 4] = ["KDToolsCore", "KDToolsGui", "KDUnitTest", "KDUpdater"];
const PREFIXED: bool = false;
const FORWARD_HEADERS: [(&str, &str); 1] = [("KDUpdater/KDUpdater", "kdupdater.h")];
const POLICY_VERSION: u32 = 2;

/// Build and validate the descriptor for this distribution.
pub fn descriptor() -> Result<ProjectDescriptor, ConfigError> {
    ProjectDescriptor::new(DescriptorSpec {
        project: PROJECT.to_string(),
        version: VERSION.to_string(),
        subprojects: SUBPROJECTS.iter().map(|name| name.to_string()).collect(),
        prefixed: PREFIXED,
        forward_headers: FORWARD_HEADERS
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect(),
        policy_version: POLICY_VERSION,
    })
}
