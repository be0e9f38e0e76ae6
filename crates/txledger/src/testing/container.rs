//! Container management for the DynamoDB Local test dependency.
//!
//! Follows the Functional Core - Imperative Shell pattern:
//!
//! - **Pure functions** build the `run` command arguments and parse port
//!   mappings. These have no side effects.
//! - **I/O functions** detect the container runtime, start containers, and
//!   resolve the host-side ephemeral port.

use anyhow::{anyhow, Context, Result};
use tokio::process::Command;

/// DynamoDB Local image coordinate. The store inside listens on TCP 8000.
pub const DYNAMODB_LOCAL_IMAGE: &str =
    "public.ecr.aws/aws-dynamodb-local/aws-dynamodb-local:1.19.0";

/// Container port DynamoDB Local listens on.
const CONTAINER_PORT: u16 = 8000;

/// Container runtime (Docker or Podman).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ContainerRuntime {
    #[default]
    Docker,
    Podman,
}

/// Returns the command name for the container runtime.
pub fn runtime_command(runtime: ContainerRuntime) -> &'static str {
    match runtime {
        ContainerRuntime::Docker => "docker",
        ContainerRuntime::Podman => "podman",
    }
}

/// Builds arguments for `docker run` / `podman run`.
///
/// The container is detached, and port 8000 is published on an ephemeral
/// loopback port so concurrently running harnesses never collide.
pub fn container_run_args() -> Vec<String> {
    vec![
        "run".to_string(),
        "-d".to_string(),
        "-p".to_string(),
        format!("127.0.0.1::{}", CONTAINER_PORT),
        DYNAMODB_LOCAL_IMAGE.to_string(),
    ]
}

/// Parses the host port out of `docker port` / `podman port` output.
///
/// Expected shape: one `host:port` binding per line, e.g. `127.0.0.1:49153`.
pub fn parse_host_port(output: &str) -> Result<u16> {
    let line = output
        .lines()
        .next()
        .ok_or_else(|| anyhow!("no port binding reported for {}/tcp", CONTAINER_PORT))?;
    let port = line
        .rsplit(':')
        .next()
        .ok_or_else(|| anyhow!("malformed port binding: {line}"))?;
    port.trim()
        .parse::<u16>()
        .with_context(|| format!("malformed port binding: {line}"))
}

/// Detects which container runtime is available.
///
/// Checks Docker first, then Podman. Returns an error if neither runtime
/// responds to `--version`.
pub async fn detect_runtime() -> Result<ContainerRuntime> {
    for runtime in [ContainerRuntime::Docker, ContainerRuntime::Podman] {
        let output = Command::new(runtime_command(runtime))
            .arg("--version")
            .output()
            .await;

        if let Ok(output) = output {
            if output.status.success() {
                return Ok(runtime);
            }
        }
    }

    Err(anyhow!("Neither docker nor podman found in PATH"))
}

/// A running DynamoDB Local container.
///
/// Dropping the value removes the container (and its anonymous volumes),
/// releasing the ephemeral host port. Removal also runs when a test panics,
/// since the guard lives on the unwinding stack.
#[derive(Debug)]
pub struct DynamoDbLocal {
    runtime: ContainerRuntime,
    id: String,
    host_port: u16,
}

impl DynamoDbLocal {
    /// Starts a fresh DynamoDB Local container and resolves the host-side
    /// port mapped to 8000.
    pub async fn start(runtime: ContainerRuntime) -> Result<Self> {
        let cmd = runtime_command(runtime);

        let args = container_run_args();
        let output = Command::new(cmd)
            .args(&args)
            .output()
            .await
            .with_context(|| format!("failed to execute {cmd} run"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!(
                "Failed to start container from '{}': {}",
                DYNAMODB_LOCAL_IMAGE,
                stderr
            ));
        }

        let id = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if id.is_empty() {
            return Err(anyhow!("{cmd} run reported no container id"));
        }

        // The guard exists from here on, so the container is removed even if
        // resolving the port mapping fails.
        let mut container = Self {
            runtime,
            id,
            host_port: 0,
        };
        container.host_port = container.resolve_host_port().await?;

        tracing::debug!(
            id = %container.id,
            port = container.host_port,
            "started DynamoDB Local container"
        );
        Ok(container)
    }

    /// The host-side ephemeral port mapped to the store's port 8000.
    pub fn host_port(&self) -> u16 {
        self.host_port
    }

    async fn resolve_host_port(&self) -> Result<u16> {
        let cmd = runtime_command(self.runtime);

        let output = Command::new(cmd)
            .args(["port", &self.id, &format!("{CONTAINER_PORT}/tcp")])
            .output()
            .await
            .with_context(|| format!("failed to execute {cmd} port"))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(anyhow!("Failed to inspect port mapping: {}", stderr));
        }

        parse_host_port(&String::from_utf8_lossy(&output.stdout))
    }
}

impl Drop for DynamoDbLocal {
    fn drop(&mut self) {
        // Synchronous removal: Drop cannot await, and the runtime may already
        // be shutting down. Errors are ignored since the container might have
        // been removed out of band.
        let cmd = runtime_command(self.runtime);
        let _ = std::process::Command::new(cmd)
            .args(["rm", "-f", "-v", &self.id])
            .output();
        tracing::debug!(id = %self.id, "removed DynamoDB Local container");
    }
}
