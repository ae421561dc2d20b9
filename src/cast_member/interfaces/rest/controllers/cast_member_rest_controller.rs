use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    cast_member::{
        domain::{
            model::{
                commands::{
                    create_cast_member_command::CreateCastMemberCommand,
                    delete_cast_member_command::DeleteCastMemberCommand,
                    update_cast_member_command::UpdateCastMemberCommand,
                },
                queries::{
                    get_cast_member_query::GetCastMemberQuery,
                    list_cast_members_query::ListCastMembersQuery,
                },
            },
            services::{
                cast_member_command_service::CastMemberCommandService,
                cast_member_query_service::CastMemberQueryService,
            },
        },
        interfaces::rest::resources::{
            cast_member_resource::{CastMemberCollectionResource, CastMemberResource},
            create_cast_member_request_resource::CreateCastMemberRequestResource,
            update_cast_member_request_resource::UpdateCastMemberRequestResource,
        },
    },
    shared::{
        domain::model::enums::catalog_domain_error::CatalogDomainError,
        interfaces::rest::{
            error_mapping::{RestError, map_domain_error},
            resources::{
                error_response_resource::ErrorResponseResource,
                search_query_resource::SearchQueryResource,
            },
        },
    },
};

const CAST_MEMBER_FILTER_KEYS: &[&str] = &["name", "type"];

#[derive(Clone)]
pub struct CastMemberRestControllerState {
    pub command_service: Arc<dyn CastMemberCommandService>,
    pub query_service: Arc<dyn CastMemberQueryService>,
}

pub fn router(state: CastMemberRestControllerState) -> Router {
    Router::new()
        .route(
            "/cast-members",
            get(list_cast_members).post(create_cast_member),
        )
        .route(
            "/cast-members/:cast_member_id",
            get(get_cast_member)
                .patch(update_cast_member)
                .delete(delete_cast_member),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/cast-members",
    tag = "cast-members",
    request_body = CreateCastMemberRequestResource,
    responses(
        (status = 201, description = "Cast member created", body = CastMemberResource),
        (status = 422, description = "Cast member failed validation", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn create_cast_member(
    State(state): State<CastMemberRestControllerState>,
    Json(request): Json<CreateCastMemberRequestResource>,
) -> Result<(StatusCode, Json<CastMemberResource>), RestError> {
    let command = CreateCastMemberCommand::new(request.name, request.cast_member_type);
    let created = state
        .command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(CastMemberResource::from(&created))))
}

#[utoipa::path(
    get,
    path = "/cast-members",
    tag = "cast-members",
    params(SearchQueryResource),
    responses(
        (status = 200, description = "Page of cast members", body = CastMemberCollectionResource),
        (status = 422, description = "Invalid filter", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn list_cast_members(
    State(state): State<CastMemberRestControllerState>,
    Query(query): Query<SearchQueryResource>,
) -> Result<Json<CastMemberCollectionResource>, RestError> {
    let query = ListCastMembersQuery::new(query.into_search_input(CAST_MEMBER_FILTER_KEYS))
        .map_err(|error| map_domain_error(CatalogDomainError::from(error)))?;
    let result = state
        .query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(CastMemberCollectionResource::from(result)))
}

#[utoipa::path(
    get,
    path = "/cast-members/{cast_member_id}",
    tag = "cast-members",
    params(("cast_member_id" = String, Path, description = "Cast member identifier")),
    responses(
        (status = 200, description = "Cast member found", body = CastMemberResource),
        (status = 400, description = "Invalid cast member id", body = ErrorResponseResource),
        (status = 404, description = "Cast member not found", body = ErrorResponseResource)
    )
)]
pub async fn get_cast_member(
    State(state): State<CastMemberRestControllerState>,
    Path(cast_member_id): Path<String>,
) -> Result<Json<CastMemberResource>, RestError> {
    let query = GetCastMemberQuery::new(cast_member_id)
        .map_err(|error| map_domain_error(CatalogDomainError::from(error)))?;
    let cast_member = state
        .query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(CastMemberResource::from(&cast_member)))
}

#[utoipa::path(
    patch,
    path = "/cast-members/{cast_member_id}",
    tag = "cast-members",
    params(("cast_member_id" = String, Path, description = "Cast member identifier")),
    request_body = UpdateCastMemberRequestResource,
    responses(
        (status = 200, description = "Cast member updated", body = CastMemberResource),
        (status = 400, description = "Invalid payload or id", body = ErrorResponseResource),
        (status = 404, description = "Cast member not found", body = ErrorResponseResource),
        (status = 422, description = "Cast member failed validation", body = ErrorResponseResource)
    )
)]
pub async fn update_cast_member(
    State(state): State<CastMemberRestControllerState>,
    Path(cast_member_id): Path<String>,
    Json(request): Json<UpdateCastMemberRequestResource>,
) -> Result<Json<CastMemberResource>, RestError> {
    let command =
        UpdateCastMemberCommand::new(cast_member_id, request.name, request.cast_member_type)
            .map_err(|error| map_domain_error(CatalogDomainError::from(error)))?;
    let updated = state
        .command_service
        .handle_update(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(CastMemberResource::from(&updated)))
}

#[utoipa::path(
    delete,
    path = "/cast-members/{cast_member_id}",
    tag = "cast-members",
    params(("cast_member_id" = String, Path, description = "Cast member identifier")),
    responses(
        (status = 204, description = "Cast member deleted"),
        (status = 400, description = "Invalid cast member id", body = ErrorResponseResource),
        (status = 404, description = "Cast member not found", body = ErrorResponseResource)
    )
)]
pub async fn delete_cast_member(
    State(state): State<CastMemberRestControllerState>,
    Path(cast_member_id): Path<String>,
) -> Result<StatusCode, RestError> {
    let command = DeleteCastMemberCommand::new(cast_member_id)
        .map_err(|error| map_domain_error(CatalogDomainError::from(error)))?;
    state
        .command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}
