use std::{
    future::Future,
    sync::{
        Mutex, PoisonError,
        atomic::{AtomicUsize, Ordering},
    },
};

use async_trait::async_trait;

use crate::shared::{
    domain::model::enums::catalog_domain_error::CatalogDomainError,
    infrastructure::persistence::repositories::unit_of_work::{AfterCommitEffect, UnitOfWork},
};

/// Test double: records how often `run` was called and executes the work
/// directly. Nothing is rolled back on failure.
#[derive(Default)]
pub struct InMemoryUnitOfWork {
    run_calls: AtomicUsize,
    depth: AtomicUsize,
    pending_effects: Mutex<Vec<AfterCommitEffect>>,
}

impl InMemoryUnitOfWork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run_calls(&self) -> usize {
        self.run_calls.load(Ordering::SeqCst)
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

#[async_trait]
impl UnitOfWork for InMemoryUnitOfWork {
    async fn run<T, F>(&self, work: F) -> Result<T, CatalogDomainError>
    where
        T: Send,
        F: Future<Output = Result<T, CatalogDomainError>> + Send,
    {
        self.run_calls.fetch_add(1, Ordering::SeqCst);
        self.depth.fetch_add(1, Ordering::SeqCst);

        let outcome = work.await;
        if self.depth.fetch_sub(1, Ordering::SeqCst) > 1 {
            return outcome;
        }

        let effects = self.take_effects();
        if outcome.is_ok() {
            effects.into_iter().for_each(|effect| effect());
        }
        outcome
    }

    fn after_commit(&self, effect: AfterCommitEffect) {
        if self.depth.load(Ordering::SeqCst) == 0 {
            effect();
            return;
        }
        self.pending_effects
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(effect);
    }
}
