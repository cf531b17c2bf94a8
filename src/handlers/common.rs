use crate::errors::ServiceError;
use axum::{
    async_trait,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use validator::Validate;

/// Standard success response
pub fn success_response<T: Serialize>(data: T) -> Response {
    (StatusCode::OK, Json(data)).into_response()
}

/// Standard no content response
pub fn no_content_response() -> Response {
    StatusCode::NO_CONTENT.into_response()
}

/// 204 for an empty list, 200 with the items otherwise.
pub fn list_response<T: Serialize>(items: Vec<T>) -> Response {
    if items.is_empty() {
        no_content_response()
    } else {
        success_response(items)
    }
}

/// 200 with the item, or a 404 when the service found nothing.
pub fn found_response<T: Serialize>(
    item: Option<T>,
    resource: &str,
    id: i32,
) -> Result<Response, ServiceError> {
    item.map(success_response)
        .ok_or_else(|| ServiceError::NotFound(format!("{resource} {id}")))
}

/// A create that yields nothing is a server fault, not a client one.
pub fn created_response<T: Serialize>(
    item: Option<T>,
    resource: &str,
) -> Result<Response, ServiceError> {
    item.map(success_response)
        .ok_or_else(|| ServiceError::InternalError(format!("{resource} was not created")))
}

/// JSON body extractor that also runs the `validator` constraints.
/// Both malformed JSON and constraint violations reject with 400.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ServiceError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| ServiceError::ValidationError(rejection.body_text()))?;
        value.validate()?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::CategoryRequest;
    use axum::body::Body;

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[test]
    fn empty_list_is_no_content() {
        assert_eq!(
            list_response(Vec::<i32>::new()).status(),
            StatusCode::NO_CONTENT
        );
        assert_eq!(list_response(vec![1]).status(), StatusCode::OK);
    }

    #[test]
    fn missing_item_is_not_found_and_failed_create_is_internal() {
        let err = found_response(None::<i32>, "category", 9).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);

        let err = created_response(None::<i32>, "category").unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn constraint_violation_is_rejected() {
        let result = ValidatedJson::<CategoryRequest>::from_request(
            json_request(r#"{"name":"","description":"x"}"#),
            &(),
        )
        .await;
        let err = result.err().unwrap();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_field_is_rejected() {
        let result = ValidatedJson::<CategoryRequest>::from_request(
            json_request(r#"{"name":"Books"}"#),
            &(),
        )
        .await;
        assert!(matches!(result, Err(ServiceError::ValidationError(_))));
    }

    #[tokio::test]
    async fn valid_body_passes_through() {
        let ValidatedJson(request) = ValidatedJson::<CategoryRequest>::from_request(
            json_request(r#"{"name":"Books","description":"All books"}"#),
            &(),
        )
        .await
        .ok()
        .unwrap();
        assert_eq!(request.name, "Books");
    }
}
