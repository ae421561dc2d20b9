use std::{
    future::Future,
    ops::{Deref, DerefMut},
    sync::{Arc, Mutex as StdMutex, PoisonError},
};

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool, Postgres, Transaction, pool::PoolConnection};
use tokio::sync::{Mutex, OwnedMappedMutexGuard, OwnedMutexGuard};
use tracing::{debug, warn};

use crate::shared::{
    domain::model::enums::catalog_domain_error::CatalogDomainError,
    infrastructure::persistence::repositories::{
        postgres::sqlx_search_support::map_infra_error,
        unit_of_work::{AfterCommitEffect, UnitOfWork},
    },
};

type TransactionSlot = Option<Transaction<'static, Postgres>>;

struct TransactionScope {
    transaction: Arc<Mutex<TransactionSlot>>,
    pending_effects: StdMutex<Vec<AfterCommitEffect>>,
}

impl TransactionScope {
    fn new(transaction: Transaction<'static, Postgres>) -> Self {
        Self {
            transaction: Arc::new(Mutex::new(Some(transaction))),
            pending_effects: StdMutex::new(Vec::new()),
        }
    }

    async fn take_transaction(&self) -> TransactionSlot {
        self.transaction.lock().await.take()
    }

    fn take_effects(&self) -> Vec<AfterCommitEffect> {
        std::mem::take(
            &mut *self
                .pending_effects
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }
}

tokio::task_local! {
    static CURRENT_SCOPE: Arc<TransactionScope>;
}

/// Connection handed to repositories: the open transaction of the current
/// task when there is one, a pooled connection otherwise.
pub enum SqlxConnection {
    Transaction(OwnedMappedMutexGuard<TransactionSlot, PgConnection>),
    Pooled(PoolConnection<Postgres>),
}

impl Deref for SqlxConnection {
    type Target = PgConnection;

    fn deref(&self) -> &PgConnection {
        match self {
            Self::Transaction(guard) => &**guard,
            Self::Pooled(connection) => &**connection,
        }
    }
}

impl DerefMut for SqlxConnection {
    fn deref_mut(&mut self) -> &mut PgConnection {
        match self {
            Self::Transaction(guard) => &mut **guard,
            Self::Pooled(connection) => &mut **connection,
        }
    }
}

/// PostgreSQL unit of work. The transaction lives in a task-local scope, so
/// concurrent requests sharing this instance never share a transaction.
pub struct SqlxUnitOfWorkImpl {
    pool: PgPool,
}

impl SqlxUnitOfWorkImpl {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn in_transaction(&self) -> bool {
        CURRENT_SCOPE.try_with(|_| ()).is_ok()
    }

    pub async fn connection(&self) -> Result<SqlxConnection, CatalogDomainError> {
        if let Ok(scope) = CURRENT_SCOPE.try_with(Arc::clone) {
            let guard = scope.transaction.clone().lock_owned().await;
            return OwnedMutexGuard::try_map(guard, |slot| slot.as_deref_mut())
                .map(SqlxConnection::Transaction)
                .map_err(|_| {
                    CatalogDomainError::InfrastructureError(
                        "transaction already finished".to_string(),
                    )
                });
        }

        let connection = self.pool.acquire().await.map_err(map_infra_error)?;
        Ok(SqlxConnection::Pooled(connection))
    }
}

#[async_trait]
impl UnitOfWork for SqlxUnitOfWorkImpl {
    async fn run<T, F>(&self, work: F) -> Result<T, CatalogDomainError>
    where
        T: Send,
        F: Future<Output = Result<T, CatalogDomainError>> + Send,
    {
        if self.in_transaction() {
            return work.await;
        }

        let transaction = self.pool.begin().await.map_err(map_infra_error)?;
        let scope = Arc::new(TransactionScope::new(transaction));
        debug!("transaction started");

        let outcome = CURRENT_SCOPE.scope(scope.clone(), work).await;
        let transaction = scope.take_transaction().await;
        let effects = scope.take_effects();

        match outcome {
            Ok(value) => {
                if let Some(transaction) = transaction {
                    transaction.commit().await.map_err(map_infra_error)?;
                }
                debug!("transaction committed");
                effects.into_iter().for_each(|effect| effect());
                Ok(value)
            }
            Err(error) => {
                if let Some(transaction) = transaction {
                    if let Err(rollback_error) = transaction.rollback().await {
                        warn!(error = %rollback_error, "transaction rollback failed");
                    }
                }
                debug!(error = %error, "transaction rolled back");
                Err(error)
            }
        }
    }

    fn after_commit(&self, effect: AfterCommitEffect) {
        match CURRENT_SCOPE.try_with(Arc::clone) {
            Ok(scope) => scope
                .pending_effects
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .push(effect),
            Err(_) => effect(),
        }
    }
}
