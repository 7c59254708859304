use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use iceapple_core::AppError;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join(", ")
}

/// JSON body extractor that also runs `validator` rules.
///
/// Every rejection is a 400, matching how the reservation backend reports
/// malformed admin requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                let error_msg = rejection.body_text();

                if error_msg.contains("missing field") {
                    let field = error_msg
                        .split("missing field `")
                        .nth(1)
                        .and_then(|s| s.split('`').next())
                        .unwrap_or("unknown");
                    return AppError::bad_request(anyhow!("{} is required", field));
                }

                if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
                    return AppError::bad_request(anyhow!(
                        "Missing 'Content-Type: application/json' header"
                    ));
                }

                if matches!(rejection, JsonRejection::JsonDataError(_)) {
                    return AppError::bad_request(anyhow!("Invalid field value in request"));
                }

                AppError::bad_request(anyhow!("Invalid request body"))
            })?;

        value
            .validate()
            .map_err(|errors| AppError::bad_request(anyhow!("{}", format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::StatusCode};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Payload {
        #[validate(length(min = 1, message = "name must not be empty"))]
        name: String,
    }

    fn json_request(body: &'static str) -> Request {
        axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_valid_payload() {
        let ValidatedJson(payload) =
            ValidatedJson::<Payload>::from_request(json_request(r#"{"name":"hall"}"#), &())
                .await
                .unwrap();
        assert_eq!(payload.name, "hall");
    }

    #[tokio::test]
    async fn test_missing_field() {
        let err = ValidatedJson::<Payload>::from_request(json_request("{}"), &())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.to_string(), "name is required");
    }

    #[tokio::test]
    async fn test_validation_message() {
        let err = ValidatedJson::<Payload>::from_request(json_request(r#"{"name":""}"#), &())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert_eq!(err.error.to_string(), "name must not be empty");
    }

    #[tokio::test]
    async fn test_missing_content_type() {
        let req = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(r#"{"name":"hall"}"#))
            .unwrap();
        let err = ValidatedJson::<Payload>::from_request(req, &())
            .await
            .unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }
}
