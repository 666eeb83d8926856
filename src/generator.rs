//! Handoff to the external `autogen` generator.
//!
//! The generator owns all filesystem side effects (headers, build scaffolding,
//! one write-set per subproject in declared order). This layer only encodes the
//! validated descriptor and invokes the collaborator exactly once per run.
use crate::descriptor::ProjectDescriptor;
use crate::error::GenerationError;
use std::io::Write;
use std::process::{Command, Stdio};

/// Environment variable overriding the generator invocation. The value is a
/// full command line, split shell-style.
pub const AUTOGEN_ENV: &str = "AUTOGEN";

const AUTOGEN_PROGRAM: &str = "autogen";

/// The consumed generator interface: one synchronous, side-effecting call.
pub trait Generate {
    fn generate(&self, descriptor: &ProjectDescriptor) -> Result<(), GenerationError>;
}

/// Production generator backed by the external `autogen` executable.
///
/// The descriptor is written to the child's stdin as pretty JSON; stdout and
/// stderr are captured so a failure surfaces the generator's own diagnostics.
pub struct AutogenCommand {
    command: Vec<String>,
}

impl AutogenCommand {
    /// Resolve the generator: `AUTOGEN` override first, then `autogen` on PATH.
    pub fn from_env() -> Result<Self, GenerationError> {
        if let Ok(raw) = std::env::var(AUTOGEN_ENV) {
            if !raw.trim().is_empty() {
                return Self::from_command_line(&raw);
            }
        }
        let program = which::which(AUTOGEN_PROGRAM)
            .map_err(|_| GenerationError::NotFound(AUTOGEN_PROGRAM.to_string()))?;
        Ok(AutogenCommand {
            command: vec![program.display().to_string()],
        })
    }

    fn from_command_line(raw: &str) -> Result<Self, GenerationError> {
        let command =
            shell_words::split(raw).map_err(|err| GenerationError::Override(err.to_string()))?;
        if command.is_empty() {
            return Err(GenerationError::Override(
                "override resolves to an empty command".to_string(),
            ));
        }
        Ok(AutogenCommand { command })
    }
}

impl Generate for AutogenCommand {
    fn generate(&self, descriptor: &ProjectDescriptor) -> Result<(), GenerationError> {
        let payload = handoff_payload(descriptor)?;
        let mut child = Command::new(&self.command[0])
            .args(&self.command[1..])
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;
        if let Some(mut stdin) = child.stdin.take() {
            stdin.write_all(payload.as_bytes())?;
        }
        let output = child.wait_with_output()?;
        tracing::debug!(
            status = ?output.status.code(),
            stdout_bytes = output.stdout.len(),
            "generator exited"
        );
        if !output.status.success() {
            return Err(GenerationError::Failed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        Ok(())
    }
}

/// Encode the descriptor for handoff. Deterministic for an unchanged
/// descriptor: field order is fixed and the forward-header map is sorted.
pub fn handoff_payload(descriptor: &ProjectDescriptor) -> Result<String, GenerationError> {
    Ok(serde_json::to_string_pretty(descriptor)?)
}

/// Hand the validated descriptor to the generator, once.
pub fn run<G: Generate>(
    descriptor: &ProjectDescriptor,
    generator: &G,
) -> Result<(), GenerationError> {
    tracing::info!(
        project = descriptor.project(),
        version = %descriptor.version(),
        subprojects = descriptor.subprojects().len(),
        forward_headers = descriptor.forward_headers().len(),
        policy_version = descriptor.policy_version(),
        "handing descriptor to generator"
    );
    generator.generate(descriptor)
}
