use std::sync::Arc;

use axum::Router;

use crate::{
    cast_member::{
        application::{
            command_services::cast_member_command_service_impl::CastMemberCommandServiceImpl,
            query_services::cast_member_query_service_impl::CastMemberQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_cast_member_repository_impl::SqlxCastMemberRepositoryImpl,
        interfaces::rest::controllers::cast_member_rest_controller::{
            CastMemberRestControllerState, router,
        },
    },
    shared::infrastructure::persistence::repositories::postgres::sqlx_unit_of_work_impl::SqlxUnitOfWorkImpl,
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_cast_member_router(unit_of_work: Arc<SqlxUnitOfWorkImpl>) -> Router {
    let cast_member_repository = Arc::new(SqlxCastMemberRepositoryImpl::new(unit_of_work));

    let command_service = Arc::new(CastMemberCommandServiceImpl::new(
        cast_member_repository.clone(),
    ));
    let query_service = Arc::new(CastMemberQueryServiceImpl::new(cast_member_repository));

    router(CastMemberRestControllerState {
        command_service,
        query_service,
    })
}
