//! Error taxonomy for the generation driver.
//!
//! `ConfigError` is raised locally before any generation side effect and is
//! never retried. `GenerationError` originates in the external generator once
//! invoked; this layer propagates it unchanged to the process boundary.
use std::process::ExitStatus;
use thiserror::Error;

/// A descriptor validation failure. Construction aborts before handoff.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing project identifier")]
    MissingProject,

    #[error("invalid subproject list: no subprojects declared")]
    EmptySubprojects,

    #[error("invalid subproject list: duplicate entry {0:?}")]
    DuplicateSubproject(String),

    #[error("malformed version string {0:?}")]
    MalformedVersion(String),

    #[error("forward header references unknown subproject: {0:?}")]
    ForwardHeaderUnknownSubproject(String),

    #[error("unsupported policy version {0}")]
    UnsupportedPolicyVersion(u32),
}

/// A failure while locating, spawning, or running the external generator.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("generator not found: {0}")]
    NotFound(String),

    #[error("invalid generator command override: {0}")]
    Override(String),

    #[error("serialize descriptor handoff: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("generator handoff failed: {0}")]
    Handoff(#[from] std::io::Error),

    #[error("generator exited with {status}: {stderr}")]
    Failed { status: ExitStatus, stderr: String },
}
