//! Probe for the in-process store, which is always reachable.

use async_trait::async_trait;

use crate::domain::ports::{ConnectionTestError, ConnectionTester};

/// Connection tester reporting the in-memory store as healthy.
#[derive(Debug, Clone, Copy, Default)]
pub struct InMemoryConnectionTester;

#[async_trait]
impl ConnectionTester for InMemoryConnectionTester {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn test_connection(&self) -> Result<(), ConnectionTestError> {
        Ok(())
    }
}
