use std::sync::Arc;

use axum::Router;

use crate::{
    category::{
        application::{
            command_services::category_command_service_impl::CategoryCommandServiceImpl,
            query_services::category_query_service_impl::CategoryQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_category_repository_impl::SqlxCategoryRepositoryImpl,
        interfaces::rest::controllers::category_rest_controller::{
            CategoryRestControllerState, router,
        },
    },
    shared::infrastructure::persistence::repositories::postgres::sqlx_unit_of_work_impl::SqlxUnitOfWorkImpl,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_category_router(unit_of_work: Arc<SqlxUnitOfWorkImpl>) -> Router {
    let category_repository = Arc::new(SqlxCategoryRepositoryImpl::new(unit_of_work));

    let command_service = Arc::new(CategoryCommandServiceImpl::new(category_repository.clone()));
    let query_service = Arc::new(CategoryQueryServiceImpl::new(category_repository));

    router(CategoryRestControllerState {
        command_service,
        query_service,
    })
}
