use std::sync::Arc;

use axum::Router;

use crate::{
    cast_member::{
        application::validations::cast_members_id_exists_in_storage_validator::CastMembersIdExistsInStorageValidator,
        infrastructure::persistence::repositories::{
            cast_member_repository::CastMemberRepository,
            postgres::sqlx_cast_member_repository_impl::SqlxCastMemberRepositoryImpl,
        },
    },
    category::{
        application::validations::categories_id_exists_in_storage_validator::CategoriesIdExistsInStorageValidator,
        infrastructure::persistence::repositories::{
            category_repository::CategoryRepository,
            postgres::sqlx_category_repository_impl::SqlxCategoryRepositoryImpl,
        },
    },
    genre::{
        application::validations::genres_id_exists_in_storage_validator::GenresIdExistsInStorageValidator,
        infrastructure::persistence::repositories::{
            genre_repository::GenreRepository,
            postgres::sqlx_genre_repository_impl::SqlxGenreRepositoryImpl,
        },
    },
    shared::infrastructure::persistence::repositories::postgres::sqlx_unit_of_work_impl::SqlxUnitOfWorkImpl,
    video::{
        application::{
            command_services::video_command_service_impl::{
                VideoCommandServiceImpl, VideoRelationValidators,
            },
            query_services::video_query_service_impl::VideoQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_video_repository_impl::SqlxVideoRepositoryImpl,
        interfaces::rest::controllers::video_rest_controller::{VideoRestControllerState, router},
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_video_router(unit_of_work: Arc<SqlxUnitOfWorkImpl>) -> Router {
    let video_repository = Arc::new(SqlxVideoRepositoryImpl::new(unit_of_work.clone()));
    let category_repository: Arc<dyn CategoryRepository> =
        Arc::new(SqlxCategoryRepositoryImpl::new(unit_of_work.clone()));
    let genre_repository: Arc<dyn GenreRepository> =
        Arc::new(SqlxGenreRepositoryImpl::new(unit_of_work.clone()));
    let cast_member_repository: Arc<dyn CastMemberRepository> =
        Arc::new(SqlxCastMemberRepositoryImpl::new(unit_of_work.clone()));

    let validators = VideoRelationValidators {
        categories_id: CategoriesIdExistsInStorageValidator::new(category_repository),
        genres_id: GenresIdExistsInStorageValidator::new(genre_repository),
        cast_members_id: CastMembersIdExistsInStorageValidator::new(cast_member_repository),
    };

    let command_service = Arc::new(VideoCommandServiceImpl::new(
        video_repository.clone(),
        validators,
        unit_of_work,
    ));
    let query_service = Arc::new(VideoQueryServiceImpl::new(video_repository));

    router(VideoRestControllerState {
        command_service,
        query_service,
    })
}
