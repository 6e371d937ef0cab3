//! Request body extractor with field rules.

use std::collections::BTreeMap;

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::errors::AppError;

/// Parses the body as `T` and checks its `validator` rules.
///
/// Both failures become [`AppError::InvalidInput`].
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(body) = Json::<T>::from_request(req, state)
            .await
            .map_err(malformed_body)?;

        match body.validate() {
            Ok(()) => Ok(ValidatedJson(body)),
            Err(violations) => Err(AppError::invalid_input(describe_violations(&violations))),
        }
    }
}

fn malformed_body(rejection: JsonRejection) -> AppError {
    AppError::invalid_input(format!("malformed request body: {}", rejection.body_text()))
}

/// `field: message` pairs ordered by field name, joined with "; ".
fn describe_violations(violations: &ValidationErrors) -> String {
    let by_field: BTreeMap<_, _> = violations.field_errors().into_iter().collect();

    by_field
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => format!("{}: {}", field, message),
                None => format!("{}: failed '{}' check", field, error.code),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}
