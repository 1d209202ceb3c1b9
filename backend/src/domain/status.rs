//! Service health aggregated from registered dependency probes.

use std::sync::Arc;

use serde_json::json;
use tracing::warn;

use crate::domain::Error;
use crate::domain::ports::ConnectionTester;

/// Runs every registered [`ConnectionTester`] in registration order.
#[derive(Clone, Default)]
pub struct StatusService {
    testers: Vec<Arc<dyn ConnectionTester>>,
}

impl StatusService {
    /// Create a service over `testers`.
    pub fn new(testers: Vec<Arc<dyn ConnectionTester>>) -> Self {
        Self { testers }
    }

    /// Names of the registered probes, in order.
    pub fn dependencies(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.testers.iter().map(|tester| tester.name())
    }

    /// Probe each dependency once, stopping at the first failure.
    ///
    /// # Errors
    /// Returns a `service_unavailable` error naming the failing dependency.
    pub async fn check(&self) -> Result<(), Error> {
        for tester in &self.testers {
            if let Err(err) = tester.test_connection().await {
                let dependency = tester.name();
                warn!(dependency, error = %err, "status probe failed");
                return Err(
                    Error::service_unavailable(format!("{dependency} is unavailable"))
                        .with_details(json!({ "dependency": dependency })),
                );
            }
        }
        Ok(())
    }
}
