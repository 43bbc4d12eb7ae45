use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use stockroom_core::AppError;

/// Joins field messages, listing each distinct message once.
fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = Vec::new();

    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    for (field, field_errors) in fields {
        for error in field_errors {
            let message = error
                .message
                .as_ref()
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| format!("{} is invalid", field));

            if !messages.contains(&message) {
                messages.push(message);
            }
        }
    }

    messages.join(", ")
}

fn rejection_message(rejection: &JsonRejection) -> String {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return "Missing 'Content-Type: application/json' header".to_string();
    }

    let body = rejection.body_text();

    if body.contains("unknown variant") {
        return "Invalid role, expected 'user' or 'admin'".to_string();
    }

    if body.contains("invalid type") {
        return "Invalid field type in request".to_string();
    }

    "Invalid request body".to_string()
}

/// JSON body extractor that runs `validator` rules before the handler.
///
/// Both malformed bodies and failed validation are rejected with 400.
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
            .map_err(|rejection| AppError::bad_request(anyhow!(rejection_message(&rejection))))?;

        value
            .validate()
            .map_err(|errors| AppError::bad_request(anyhow!(format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct Credentials {
        #[validate(length(min = 1, message = "Username and password are required"))]
        username: String,
        #[validate(length(min = 1, message = "Username and password are required"))]
        password: String,
    }

    #[test]
    fn test_format_errors_deduplicates() {
        let creds = Credentials {
            username: String::new(),
            password: String::new(),
        };
        let errors = creds.validate().unwrap_err();
        assert_eq!(format_errors(&errors), "Username and password are required");
    }

    #[test]
    fn test_format_errors_single_field() {
        let creds = Credentials {
            username: "alice".to_string(),
            password: String::new(),
        };
        let errors = creds.validate().unwrap_err();
        assert_eq!(format_errors(&errors), "Username and password are required");
    }
}
