use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use validator::Validate;

use crate::{
    category::{
        domain::{
            model::{
                commands::{
                    create_category_command::CreateCategoryCommand,
                    delete_category_command::DeleteCategoryCommand,
                    update_category_command::UpdateCategoryCommand,
                },
                queries::{
                    get_category_query::GetCategoryQuery,
                    list_categories_query::ListCategoriesQuery,
                },
            },
            services::{
                category_command_service::CategoryCommandService,
                category_query_service::CategoryQueryService,
            },
        },
        interfaces::rest::resources::{
            category_resource::{CategoryCollectionResource, CategoryResource},
            create_category_request_resource::CreateCategoryRequestResource,
            update_category_request_resource::UpdateCategoryRequestResource,
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

const CATEGORY_FILTER_KEYS: &[&str] = &["name"];

#[derive(Clone)]
pub struct CategoryRestControllerState {
    pub command_service: Arc<dyn CategoryCommandService>,
    pub query_service: Arc<dyn CategoryQueryService>,
}

pub fn router(state: CategoryRestControllerState) -> Router {
    Router::new()
        .route("/categories", get(list_categories).post(create_category))
        .route(
            "/categories/:category_id",
            get(get_category)
                .patch(update_category)
                .delete(delete_category),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/categories",
    tag = "categories",
    request_body = CreateCategoryRequestResource,
    responses(
        (status = 201, description = "Category created", body = CategoryResource),
        (status = 400, description = "Invalid payload", body = ErrorResponseResource),
        (status = 422, description = "Category failed validation", body = ErrorResponseResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn create_category(
    State(state): State<CategoryRestControllerState>,
    Json(request): Json<CreateCategoryRequestResource>,
) -> Result<(StatusCode, Json<CategoryResource>), RestError> {
    request.validate().map_err(map_request_validation_error)?;

    let command = CreateCategoryCommand::new(request.name, request.description, request.is_active);
    let created = state
        .command_service
        .handle_create(command)
        .await
        .map_err(map_domain_error)?;

    Ok((StatusCode::CREATED, Json(CategoryResource::from(&created))))
}

#[utoipa::path(
    get,
    path = "/categories",
    tag = "categories",
    params(SearchQueryResource),
    responses(
        (status = 200, description = "Page of categories", body = CategoryCollectionResource),
        (status = 500, description = "Infrastructure failure", body = ErrorResponseResource)
    )
)]
pub async fn list_categories(
    State(state): State<CategoryRestControllerState>,
    Query(query): Query<SearchQueryResource>,
) -> Result<Json<CategoryCollectionResource>, RestError> {
    let query = ListCategoriesQuery::new(query.into_search_input(CATEGORY_FILTER_KEYS));
    let result = state
        .query_service
        .handle_list(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(CategoryCollectionResource::from(result)))
}

#[utoipa::path(
    get,
    path = "/categories/{category_id}",
    tag = "categories",
    params(("category_id" = String, Path, description = "Category identifier")),
    responses(
        (status = 200, description = "Category found", body = CategoryResource),
        (status = 400, description = "Invalid category id", body = ErrorResponseResource),
        (status = 404, description = "Category not found", body = ErrorResponseResource)
    )
)]
pub async fn get_category(
    State(state): State<CategoryRestControllerState>,
    Path(category_id): Path<String>,
) -> Result<Json<CategoryResource>, RestError> {
    let query = GetCategoryQuery::new(category_id)
        .map_err(|error| map_domain_error(CatalogDomainError::from(error)))?;
    let category = state
        .query_service
        .handle_get(query)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(CategoryResource::from(&category)))
}

#[utoipa::path(
    patch,
    path = "/categories/{category_id}",
    tag = "categories",
    params(("category_id" = String, Path, description = "Category identifier")),
    request_body = UpdateCategoryRequestResource,
    responses(
        (status = 200, description = "Category updated", body = CategoryResource),
        (status = 400, description = "Invalid payload or id", body = ErrorResponseResource),
        (status = 404, description = "Category not found", body = ErrorResponseResource),
        (status = 422, description = "Category failed validation", body = ErrorResponseResource)
    )
)]
pub async fn update_category(
    State(state): State<CategoryRestControllerState>,
    Path(category_id): Path<String>,
    Json(request): Json<UpdateCategoryRequestResource>,
) -> Result<Json<CategoryResource>, RestError> {
    request.validate().map_err(map_request_validation_error)?;

    let command = UpdateCategoryCommand::new(
        category_id,
        request.name,
        request.description,
        request.is_active,
    )
    .map_err(|error| map_domain_error(CatalogDomainError::from(error)))?;
    let updated = state
        .command_service
        .handle_update(command)
        .await
        .map_err(map_domain_error)?;

    Ok(Json(CategoryResource::from(&updated)))
}

#[utoipa::path(
    delete,
    path = "/categories/{category_id}",
    tag = "categories",
    params(("category_id" = String, Path, description = "Category identifier")),
    responses(
        (status = 204, description = "Category deleted"),
        (status = 400, description = "Invalid category id", body = ErrorResponseResource),
        (status = 404, description = "Category not found", body = ErrorResponseResource)
    )
)]
pub async fn delete_category(
    State(state): State<CategoryRestControllerState>,
    Path(category_id): Path<String>,
) -> Result<StatusCode, RestError> {
    let command = DeleteCategoryCommand::new(category_id)
        .map_err(|error| map_domain_error(CatalogDomainError::from(error)))?;
    state
        .command_service
        .handle_delete(command)
        .await
        .map_err(map_domain_error)?;

    Ok(StatusCode::NO_CONTENT)
}
