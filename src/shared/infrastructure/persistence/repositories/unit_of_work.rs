use std::future::Future;

use async_trait::async_trait;

use crate::shared::domain::model::enums::catalog_domain_error::CatalogDomainError;

pub type AfterCommitEffect = Box<dyn FnOnce() + Send + 'static>;

/// Transactional boundary around several repository writes.
#[async_trait]
pub trait UnitOfWork: Send + Sync {
    /// Runs `work` inside a transaction: commit on `Ok`, rollback on `Err`.
    /// A call made while a transaction is already open joins it.
    async fn run<T, F>(&self, work: F) -> Result<T, CatalogDomainError>
    where
        T: Send,
        F: Future<Output = Result<T, CatalogDomainError>> + Send;

    /// Defers `effect` until the enclosing transaction commits. Outside of a
    /// transaction the effect runs immediately.
    fn after_commit(&self, effect: AfterCommitEffect);
}
