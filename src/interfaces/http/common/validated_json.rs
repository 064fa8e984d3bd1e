//! Validated JSON extractor for Axum
//!
//! `ValidatedJson<T>` works like `axum::Json<T>`, but additionally runs
//! `validator::Validate::validate()` on the deserialized value. On failure
//! it rejects with 400 and the same structured error entries the
//! data-access layer produces, so clients see one error shape everywhere.

use axum::extract::rejection::JsonRejection;
use axum::extract::FromRequest;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use super::ApiResponse;
use crate::shared::types::ValidationError;

/// An extractor that deserializes JSON and validates it.
///
/// ```ignore
/// #[derive(Deserialize, Validate)]
/// struct CreateCategoryRequest {
///     #[validate(length(min = 1, max = 50))]
///     name: String,
/// }
///
/// async fn handler(ValidatedJson(body): ValidatedJson<CreateCategoryRequest>) {
///     // `body` is guaranteed to pass validation
/// }
/// ```
pub struct ValidatedJson<T>(pub T);

/// Error type for `ValidatedJson` extraction failures.
pub enum ValidatedJsonRejection {
    /// JSON parsing failed.
    JsonError(JsonRejection),
    /// Validation failed.
    ValidationError(validator::ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        let errors = match self {
            Self::JsonError(rejection) => vec![ValidationError::invalid_type(
                None,
                format!("Invalid request body: {}", rejection.body_text()),
            )],
            Self::ValidationError(failures) => {
                let mut errors: Vec<ValidationError> = failures
                    .field_errors()
                    .iter()
                    .flat_map(|(field, field_failures)| {
                        let field: &str = field;
                        field_failures.iter().map(move |failure| {
                            let detail = failure
                                .message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("{} is invalid", field));
                            field_error(field, failure.code.as_ref(), detail)
                        })
                    })
                    .collect();

                // field_errors() iterates a map; keep the output stable.
                errors.sort_by(|a, b| a.source.cmp(&b.source));
                errors
            }
        };

        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::<()>::errors(errors)),
        )
            .into_response()
    }
}

fn field_error(field: &str, code: &str, detail: String) -> ValidationError {
    match code {
        "length" => ValidationError::invalid_length(field, detail),
        "required" => ValidationError::is_required(field, detail),
        _ => ValidationError::invalid_type(Some(field), detail),
    }
}

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: axum::extract::Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(ValidatedJsonRejection::JsonError)?;

        value
            .validate()
            .map_err(ValidatedJsonRejection::ValidationError)?;

        Ok(ValidatedJson(value))
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::post;
    use axum::Router;
    use serde::Deserialize;
    use validator::Validate;

    use crate::shared::types::AppErrorCode;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(length(min = 1, max = 10, message = "name must be 1-10 characters"))]
        name: String,
        #[validate(range(min = 0.0, message = "price must be non-negative"))]
        price: f64,
    }

    async fn handler(ValidatedJson(_body): ValidatedJson<TestBody>) -> &'static str {
        "ok"
    }

    fn app() -> Router {
        Router::new().route("/test", post(handler))
    }

    async fn send(body: serde_json::Value) -> axum::http::Response<Body> {
        use tower::Service;
        let req = Request::builder()
            .method("POST")
            .uri("/test")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();
        let mut svc = app().into_service();
        svc.call(req).await.unwrap()
    }

    async fn body_errors(resp: axum::http::Response<Body>) -> Vec<ValidationError> {
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: ApiResponse<()> = serde_json::from_slice(&bytes).unwrap();
        body.errors.unwrap()
    }

    #[tokio::test]
    async fn valid_body_reaches_the_handler() {
        let resp = send(serde_json::json!({"name": "Mobiles", "price": 10.0})).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn over_long_name_rejects_with_invalid_length() {
        let resp = send(serde_json::json!({"name": "far too long a name", "price": 1.0})).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let errors = body_errors(resp).await;
        assert_eq!(errors[0].code, AppErrorCode::InvalidLength);
        assert_eq!(errors[0].source.as_deref(), Some("name"));
    }

    #[tokio::test]
    async fn negative_price_rejects_with_invalid_type() {
        let resp = send(serde_json::json!({"name": "ok", "price": -1.0})).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let errors = body_errors(resp).await;
        assert_eq!(errors[0].code, AppErrorCode::InvalidType);
        assert_eq!(errors[0].source.as_deref(), Some("price"));
    }

    #[tokio::test]
    async fn malformed_json_rejects_with_invalid_type() {
        let resp = send(serde_json::json!({"name": "ok"})).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let errors = body_errors(resp).await;
        assert_eq!(errors[0].code, AppErrorCode::InvalidType);
        assert_eq!(errors[0].source, None);
    }
}
