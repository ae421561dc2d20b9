use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::domain::model::queries::search_result::SearchResult;

#[derive(Debug, Clone, Deserialize, Serialize, ToSchema)]
pub struct PaginationMetaResource {
    pub total: u64,
    pub current_page: u64,
    pub last_page: u64,
    pub per_page: u64,
}

impl<E> From<&SearchResult<E>> for PaginationMetaResource {
    fn from(result: &SearchResult<E>) -> Self {
        Self {
            total: result.total(),
            current_page: result.current_page(),
            last_page: result.last_page(),
            per_page: result.per_page(),
        }
    }
}
