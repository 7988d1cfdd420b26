use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use freshkeep_core::domain::{common::entities::app_errors::CoreError, recipe::RecipeSuggestion};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

pub const NO_DATA_PROVIDED: &str = "No data provided";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    /// Rendered with the recipe shape so clients can display it as is.
    #[error("{}", .0.instructions)]
    RecipeGenerationFailed(RecipeSuggestion),
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ApiErrorResponse {
    pub error: String,
    pub status: u16,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InternalServerError(_) | ApiError::RecipeGenerationFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            ApiError::RecipeGenerationFailed(recipe) => (status, Json(recipe)).into_response(),
            other => (
                status,
                Json(ApiErrorResponse {
                    error: other.to_string(),
                    status: status.as_u16(),
                }),
            )
                .into_response(),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::NotFound => ApiError::NotFound(error.to_string()),
            CoreError::ValidationError(message) => ApiError::BadRequest(message),
            CoreError::ServiceUnavailable(_) => ApiError::ServiceUnavailable(error.to_string()),
            CoreError::ExternalServiceError(_) | CoreError::InternalServerError => {
                error!("request failed: {error}");
                ApiError::InternalServerError(error.to_string())
            }
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) | JsonRejection::BytesRejection(_) => {
                ApiError::BadRequest(NO_DATA_PROVIDED.to_string())
            }
            other => ApiError::BadRequest(other.body_text()),
        }
    }
}

/// JSON body extractor that runs the payload's `validator` rules.
///
/// Decoding and validation failures both answer 400.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if !has_json_content_type(req.headers()) {
            return Err(ApiError::BadRequest(NO_DATA_PROVIDED.to_string()));
        }

        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::BadRequest(NO_DATA_PROVIDED.to_string()))?;
        if is_blank_body(&bytes) {
            return Err(ApiError::BadRequest(NO_DATA_PROVIDED.to_string()));
        }

        let Json(value) = Json::<T>::from_bytes(&bytes)?;
        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(first_message(&errors)))?;

        Ok(ValidateJson(value))
    }
}

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json"
                || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

/// An empty body or a bare `null` carries no data.
fn is_blank_body(bytes: &[u8]) -> bool {
    let trimmed = bytes.trim_ascii();
    trimmed.is_empty() || trimmed == b"null"
}

fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_values()
        .flat_map(|field_errors| field_errors.iter())
        .find_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .unwrap_or_else(|| errors.to_string())
}
