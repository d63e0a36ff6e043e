//! PostgreSQL-backed `AdminRepository` implementation using Diesel ORM.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use zeroize::Zeroizing;

use crate::domain::ports::{AdminPersistenceError, AdminRepository};
use crate::domain::{AdminAccount, AdminId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::AdminRow;
use super::pool::DbPool;
use super::schema::admins;

/// Diesel-backed implementation of the admin repository port.
#[derive(Clone)]
pub struct DieselAdminRepository {
    pool: DbPool,
}

impl DieselAdminRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AdminRepository for DieselAdminRepository {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<AdminAccount>, AdminPersistenceError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, AdminPersistenceError::connection))?;

        let row = admins::table
            .filter(admins::email.eq(email))
            .select(AdminRow::as_select())
            .first::<AdminRow>(&mut conn)
            .await
            .optional()
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    AdminPersistenceError::query,
                    AdminPersistenceError::connection,
                )
            })?;

        Ok(row.map(|row| AdminAccount {
            id: AdminId::new(row.id),
            username: row.username,
            email: row.email,
            stored_password: Zeroizing::new(row.password),
        }))
    }
}
