use std::sync::Arc;

use axum::Router;

use crate::{
    category::{
        application::validations::categories_id_exists_in_storage_validator::CategoriesIdExistsInStorageValidator,
        infrastructure::persistence::repositories::{
            category_repository::CategoryRepository,
            postgres::sqlx_category_repository_impl::SqlxCategoryRepositoryImpl,
        },
    },
    genre::{
        application::{
            command_services::genre_command_service_impl::GenreCommandServiceImpl,
            query_services::genre_query_service_impl::GenreQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_genre_repository_impl::SqlxGenreRepositoryImpl,
        interfaces::rest::controllers::genre_rest_controller::{GenreRestControllerState, router},
    },
    shared::infrastructure::persistence::repositories::postgres::sqlx_unit_of_work_impl::SqlxUnitOfWorkImpl,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_genre_router(unit_of_work: Arc<SqlxUnitOfWorkImpl>) -> Router {
    let genre_repository = Arc::new(SqlxGenreRepositoryImpl::new(unit_of_work.clone()));
    let category_repository: Arc<dyn CategoryRepository> =
        Arc::new(SqlxCategoryRepositoryImpl::new(unit_of_work.clone()));

    let command_service = Arc::new(GenreCommandServiceImpl::new(
        genre_repository.clone(),
        CategoriesIdExistsInStorageValidator::new(category_repository.clone()),
        unit_of_work,
    ));
    let query_service = Arc::new(GenreQueryServiceImpl::new(
        genre_repository,
        category_repository,
    ));

    router(GenreRestControllerState {
        command_service,
        query_service,
    })
}
