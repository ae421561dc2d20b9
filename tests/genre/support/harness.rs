use std::sync::Arc;

use video_catalog_api::{
    category::{
        application::validations::categories_id_exists_in_storage_validator::CategoriesIdExistsInStorageValidator,
        domain::model::entities::category::Category,
    },
    genre::{
        application::{
            command_services::genre_command_service_impl::GenreCommandServiceImpl,
            query_services::genre_query_service_impl::GenreQueryServiceImpl,
        },
        domain::model::entities::genre::Genre,
        infrastructure::persistence::repositories::in_memory::genre_in_memory_repository::{
            GenreInMemoryRepository, GenreSearchPolicy,
        },
    },
    shared::infrastructure::persistence::repositories::in_memory::in_memory_unit_of_work::InMemoryUnitOfWork,
};

use super::fakes::CountingCategoryRepository;

pub struct GenreTestHarness {
    pub genre_repository: Arc<GenreInMemoryRepository>,
    pub category_repository: Arc<CountingCategoryRepository>,
    pub unit_of_work: Arc<InMemoryUnitOfWork>,
    pub command_service: GenreCommandServiceImpl<InMemoryUnitOfWork>,
    pub query_service: GenreQueryServiceImpl,
}

pub fn create_harness(categories: Vec<Category>, genres: Vec<Genre>) -> GenreTestHarness {
    let genre_repository = Arc::new(GenreInMemoryRepository::with_items(
        GenreSearchPolicy,
        genres,
    ));
    let category_repository = Arc::new(CountingCategoryRepository::with_items(categories));
    let unit_of_work = Arc::new(InMemoryUnitOfWork::new());

    let command_service = GenreCommandServiceImpl::new(
        genre_repository.clone(),
        CategoriesIdExistsInStorageValidator::new(category_repository.clone()),
        unit_of_work.clone(),
    );
    let query_service =
        GenreQueryServiceImpl::new(genre_repository.clone(), category_repository.clone());

    GenreTestHarness {
        genre_repository,
        category_repository,
        unit_of_work,
        command_service,
        query_service,
    }
}
