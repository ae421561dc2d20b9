use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    shared::{
        domain::model::enums::catalog_domain_error::CatalogDomainError,
        interfaces::rest::{
            error_mapping::{RestError, map_domain_error, map_request_validation_error},
            resources::{
                error_response_resource::ErrorResponseResource,
                search_query_resource::SearchQueryResource,
            },
        },
    },
    video::{
        domain::{
            model::{
                commands::{
                    create_video_command::CreateVideoCommand,
                    delete_video_command::DeleteVideoCommand,
                    update_video_command::{UpdateVideoChanges, UpdateVideoCommand},
                },
                queries::{get_video_query::GetVideoQuery, list_videos_query::ListVideosQuery},
            },
            services::{
                video_command_service::VideoCommandService,
                video_query_service::VideoQueryService,
            },
        },
        interfaces::rest::resources::{
            create_video_request_resource::CreateVideoRequestResource,
            update_video_request_resource::UpdateVideoRequestResource,
            video_resource::{VideoCollectionResource, VideoResource},
        },
    },
};

const VIDEO_FILTER_KEYS: &[&str] = &["title", "categories_id", "genres_id", "cast_members_id"];

#[derive(Clone)]
pub struct VideoRestControllerState {
    pub command_service: Arc<dyn VideoCommandService>,
    pub query_service: Arc<dyn VideoQueryService>,
}

pub fn router(state: VideoRestControllerState) -> Router {
    Router::new()
        .route("/videos", get(list_videos).post(create_video))
        .route(
            "/videos/:video_id",
            get(get_video)
                .patch(update_video)
                .delete(delete_video),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/videos",
    tag = "videos",
    request_body = CreateVideoRequestResource,
    responses(
        (status = 201, description = "Video created", body = VideoResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 422, description = "Video failed validation", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn create_video(
    State(state): State<VideoRestControllerState>,
    Json(request): Json<CreateVideoRequestResource>,
) -> Result<(StatusCode, Json<VideoResource>), RestError> {
    request.validate().map_err(map_request_validation_error)?;

    let command = CreateVideoCommand {
        title: request.title,
        description: request.description,
        year_launched: request.year_launched,
        duration: request.duration,
        rating: request.rating,
        is_opened: request.is_opened,
        categories_id: request.categories_id,
        genres_id: request.genres_id,
        cast_members_id: request.cast_members_id,
    };
    let created = state
        .command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(VideoResource::from(&created))))
}

#[utoipa::path(
    get,
    path = "/videos",
    tag = "videos",
    params(SearchQueryResource),
    responses(
        (status = 200, description = "Page of videos", body = VideoCollectionResource),
        (status = 422, description = "Invalid filter", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn list_videos(
    State(state): State<VideoRestControllerState>,
    Query(query): Query<SearchQueryResource>,
) -> Result<Json<VideoCollectionResource>, RestError> {
    let query = ListVideosQuery::new(query.into_search_input(VIDEO_FILTER_KEYS))
        .map_err(|error| map_domain_error(CatalogDomainError::from(error)))?;
    let result = state
        .query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(VideoCollectionResource::from(result)))
}

#[utoipa::path(
    get,
    path = "/videos/{video_id}",
    tag = "videos",
    params(("video_id" = String, Path, description = "Video identifier")),
    responses(
        (status = 200, description = "Video found", body = VideoResource),
        (status = 400, description = "Invalid video id", body = ErrorResponseResource),
        (status = 404, description = "Video not found", body = ErrorResponseResource)
    )
)]
pub async fn get_video(
    State(state): State<VideoRestControllerState>,
    Path(video_id): Path<String>,
) -> Result<Json<VideoResource>, RestError> {
    let query = GetVideoQuery::new(video_id)
        .map_err(|error| map_domain_error(CatalogDomainError::from(error)))?;
    let video = state
        .query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(VideoResource::from(&video)))
}

#[utoipa::path(
    patch,
    path = "/videos/{video_id}",
    tag = "videos",
    params(("video_id" = String, Path, description = "Video identifier")),
    request_body = UpdateVideoRequestResource,
    responses(
        (status = 200, description = "Video updated", body = VideoResource),
        (status = 400, description = "Invalid payload or id", body = ErrorResponseResource),
        (status = 404, description = "Video not found", body = ErrorResponseResource),
        (status = 422, description = "Video failed validation", body = ErrorResponseResource)
    )
)]
pub async fn update_video(
    State(state): State<VideoRestControllerState>,
    Path(video_id): Path<String>,
    Json(request): Json<UpdateVideoRequestResource>,
) -> Result<Json<VideoResource>, RestError> {
    request.validate().map_err(map_request_validation_error)?;

    let changes = UpdateVideoChanges {
        title: request.title,
        description: request.description,
        year_launched: request.year_launched,
        duration: request.duration,
        rating: request.rating,
        is_opened: request.is_opened,
        categories_id: request.categories_id,
        genres_id: request.genres_id,
        cast_members_id: request.cast_members_id,
    };
    let command = UpdateVideoCommand::new(video_id, changes)
        .map_err(|error| map_domain_error(CatalogDomainError::from(error)))?;
    let updated = state
        .command_service
        .handle_update(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(VideoResource::from(&updated)))
}

#[utoipa::path(
    delete,
    path = "/videos/{video_id}",
    tag = "videos",
    params(("video_id" = String, Path, description = "Video identifier")),
    responses(
        (status = 204, description = "Video deleted"),
        (status = 400, description = "Invalid video id", body = ErrorResponseResource),
        (status = 404, description = "Video not found", body = ErrorResponseResource)
    )
)]
pub async fn delete_video(
    State(state): State<VideoRestControllerState>,
    Path(video_id): Path<String>,
) -> Result<StatusCode, RestError> {
    let command = DeleteVideoCommand::new(video_id)
        .map_err(|error| map_domain_error(CatalogDomainError::from(error)))?;
    state
        .command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}
