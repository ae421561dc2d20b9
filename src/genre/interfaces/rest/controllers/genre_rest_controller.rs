use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    genre::{
        domain::{
            model::{
                commands::{
                    create_genre_command::CreateGenreCommand,
                    delete_genre_command::DeleteGenreCommand,
                    update_genre_command::UpdateGenreCommand,
                },
                queries::{
                    get_genre_query::GetGenreQuery,
                    list_genres_query::ListGenresQuery,
                },
            },
            services::{
                genre_command_service::GenreCommandService,
                genre_query_service::GenreQueryService,
            },
        },
        interfaces::rest::resources::{
            genre_resource::{GenreCollectionResource, GenreResource},
            create_genre_request_resource::CreateGenreRequestResource,
            update_genre_request_resource::UpdateGenreRequestResource,
        },
    },
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
};

const GENRE_FILTER_KEYS: &[&str] = &["name", "categories_id"];

#[derive(Clone)]
pub struct GenreRestControllerState {
    pub command_service: Arc<dyn GenreCommandService>,
    pub query_service: Arc<dyn GenreQueryService>,
}

pub fn router(state: GenreRestControllerState) -> Router {
    Router::new()
        .route("/genres", get(list_genres).post(create_genre))
        .route(
            "/genres/:genre_id",
            get(get_genre)
                .patch(update_genre)
                .delete(delete_genre),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/genres",
    tag = "genres",
    request_body = CreateGenreRequestResource,
    responses(
        (status = 201, description = "Genre created", body = GenreResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 422, description = "Genre failed validation", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn create_genre(
    State(state): State<GenreRestControllerState>,
    Json(request): Json<CreateGenreRequestResource>,
) -> Result<(StatusCode, Json<GenreResource>), RestError> {
    request.validate().map_err(map_request_validation_error)?;

    let command = CreateGenreCommand::new(request.name, request.categories_id, request.is_active);
    let created = state
        .command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(GenreResource::from(&created))))
}

#[utoipa::path(
    get,
    path = "/genres",
    tag = "genres",
    params(SearchQueryResource),
    responses(
        (status = 200, description = "Page of genres", body = GenreCollectionResource),
        (status = 422, description = "Invalid filter", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn list_genres(
    State(state): State<GenreRestControllerState>,
    Query(query): Query<SearchQueryResource>,
) -> Result<Json<GenreCollectionResource>, RestError> {
    let query = ListGenresQuery::new(query.into_search_input(GENRE_FILTER_KEYS))
        .map_err(|error| map_domain_error(CatalogDomainError::from(error)))?;
    let result = state
        .query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(GenreCollectionResource::from(result)))
}

#[utoipa::path(
    get,
    path = "/genres/{genre_id}",
    tag = "genres",
    params(("genre_id" = String, Path, description = "Genre identifier")),
    responses(
        (status = 200, description = "Genre found", body = GenreResource),
        (status = 400, description = "Invalid genre id", body = ErrorResponseResource),
        (status = 404, description = "Genre not found", body = ErrorResponseResource)
    )
)]
pub async fn get_genre(
    State(state): State<GenreRestControllerState>,
    Path(genre_id): Path<String>,
) -> Result<Json<GenreResource>, RestError> {
    let query = GetGenreQuery::new(genre_id)
        .map_err(|error| map_domain_error(CatalogDomainError::from(error)))?;
    let genre = state
        .query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(GenreResource::from(&genre)))
}

#[utoipa::path(
    patch,
    path = "/genres/{genre_id}",
    tag = "genres",
    params(("genre_id" = String, Path, description = "Genre identifier")),
    request_body = UpdateGenreRequestResource,
    responses(
        (status = 200, description = "Genre updated", body = GenreResource),
        (status = 400, description = "Invalid payload or id", body = ErrorResponseResource),
        (status = 404, description = "Genre not found", body = ErrorResponseResource),
        (status = 422, description = "Genre failed validation", body = ErrorResponseResource)
    )
)]
pub async fn update_genre(
    State(state): State<GenreRestControllerState>,
    Path(genre_id): Path<String>,
    Json(request): Json<UpdateGenreRequestResource>,
) -> Result<Json<GenreResource>, RestError> {
    request.validate().map_err(map_request_validation_error)?;

    let command = UpdateGenreCommand::new(
        genre_id,
        request.name,
        request.categories_id,
        request.is_active,
    )
    .map_err(|error| map_domain_error(CatalogDomainError::from(error)))?;
    let updated = state
        .command_service
        .handle_update(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(GenreResource::from(&updated)))
}

#[utoipa::path(
    delete,
    path = "/genres/{genre_id}",
    tag = "genres",
    params(("genre_id" = String, Path, description = "Genre identifier")),
    responses(
        (status = 204, description = "Genre deleted"),
        (status = 400, description = "Invalid genre id", body = ErrorResponseResource),
        (status = 404, description = "Genre not found", body = ErrorResponseResource)
    )
)]
pub async fn delete_genre(
    State(state): State<GenreRestControllerState>,
    Path(genre_id): Path<String>,
) -> Result<StatusCode, RestError> {
    let command = DeleteGenreCommand::new(genre_id)
        .map_err(|error| map_domain_error(CatalogDomainError::from(error)))?;
    state
        .command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}
