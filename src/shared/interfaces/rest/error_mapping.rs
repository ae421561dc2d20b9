use axum::{Json, http::StatusCode};
use tracing::error;

use crate::shared::{
    domain::model::enums::catalog_domain_error::CatalogDomainError,
    interfaces::rest::resources::error_response_resource::ErrorResponseResource,
};

pub type RestError = (StatusCode, Json<ErrorResponseResource>);

pub fn map_domain_error(error: CatalogDomainError) -> RestError {
    let (status, errors) = match &error {
        CatalogDomainError::InvalidUuid(_) => (StatusCode::BAD_REQUEST, None),
        CatalogDomainError::NotFound(_) => (StatusCode::NOT_FOUND, None),
        CatalogDomainError::EntityValidation(validation) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Some(validation.to_json()))
        }
        CatalogDomainError::SearchValidation(validation) => {
            (StatusCode::UNPROCESSABLE_ENTITY, Some(validation.to_json()))
        }
        CatalogDomainError::LoadEntity(_) | CatalogDomainError::InfrastructureError(_) => {
            error!(error = %error, "request failed");
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponseResource::message("internal server error")),
            );
        }
    };

    (
        status,
        Json(ErrorResponseResource {
            message: error.to_string(),
            errors,
        }),
    )
}

pub fn map_request_validation_error(error: validator::ValidationErrors) -> RestError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponseResource::message(error.to_string())),
    )
}
