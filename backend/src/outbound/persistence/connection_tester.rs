//! Database reachability probe for `/status`.

use async_trait::async_trait;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ConnectionTestError, ConnectionTester};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::pool::DbPool;

/// Runs `SELECT 1` on a pooled connection.
#[derive(Clone)]
pub struct DbPoolConnectionTester {
    pool: DbPool,
}

impl DbPoolConnectionTester {
    /// Probe the database behind `pool`.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConnectionTester for DbPoolConnectionTester {
    fn name(&self) -> &'static str {
        "database"
    }

    async fn test_connection(&self) -> Result<(), ConnectionTestError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, ConnectionTestError::unreachable))?;

        diesel::sql_query("SELECT 1")
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    ConnectionTestError::unreachable,
                    ConnectionTestError::unreachable,
                )
            })
    }
}
