//! Driven port for dependency health probes.

use async_trait::async_trait;

use super::define_port_error;

define_port_error! {
    /// Errors raised when probing a dependency.
    pub enum ConnectionTestError {
        /// The dependency could not be reached or did not answer.
        Unreachable { message: String } => "dependency unreachable: {message}",
    }
}

/// A single dependency probe consulted by the status endpoint.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ConnectionTester: Send + Sync {
    /// Short dependency name reported when the probe fails.
    fn name(&self) -> &'static str;

    /// Check the dependency once. No retries.
    async fn test_connection(&self) -> Result<(), ConnectionTestError>;
}
