use std::sync::Arc;

use video_catalog_api::category::{
    application::{
        command_services::category_command_service_impl::CategoryCommandServiceImpl,
        query_services::category_query_service_impl::CategoryQueryServiceImpl,
    },
    domain::model::entities::category::Category,
    infrastructure::persistence::repositories::{
        category_repository::CategoryRepository,
        in_memory::category_in_memory_repository::{
            CategoryInMemoryRepository, CategorySearchPolicy,
        },
    },
    interfaces::rest::controllers::category_rest_controller::CategoryRestControllerState,
};

use super::fakes::UnavailableCategoryRepository;

pub struct CategoryTestHarness {
    pub repository: Arc<CategoryInMemoryRepository>,
    pub command_service: Arc<CategoryCommandServiceImpl>,
    pub query_service: Arc<CategoryQueryServiceImpl>,
}

impl CategoryTestHarness {
    pub fn state(&self) -> CategoryRestControllerState {
        CategoryRestControllerState {
            command_service: self.command_service.clone(),
            query_service: self.query_service.clone(),
        }
    }
}

pub fn create_harness(categories: Vec<Category>) -> CategoryTestHarness {
    let repository = Arc::new(CategoryInMemoryRepository::with_items(
        CategorySearchPolicy,
        categories,
    ));

    CategoryTestHarness {
        command_service: Arc::new(CategoryCommandServiceImpl::new(repository.clone())),
        query_service: Arc::new(CategoryQueryServiceImpl::new(repository.clone())),
        repository,
    }
}

pub fn create_unavailable_harness() -> CategoryRestControllerState {
    let repository: Arc<dyn CategoryRepository> = Arc::new(UnavailableCategoryRepository);

    CategoryRestControllerState {
        command_service: Arc::new(CategoryCommandServiceImpl::new(repository.clone())),
        query_service: Arc::new(CategoryQueryServiceImpl::new(repository)),
    }
}
