//! Extractores de request
//!
//! Envuelven `Json` y `Query` de axum para que sus rechazos salgan con el
//! mismo cuerpo JSON que el resto de errores.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;

use crate::utils::errors::AppError;

/// Body JSON deserializado
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ApiJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

/// Query string deserializado
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ApiQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{self, StatusCode},
    };
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Filter {
        vehicle_id: i32,
    }

    #[tokio::test]
    async fn test_query_rejection_becomes_invalid_request() {
        let request = http::Request::builder()
            .uri("/fuel_logs?vehicle_id=abc")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let error = ApiQuery::<Filter>::from_request_parts(&mut parts, &())
            .await
            .unwrap_err();
        assert!(matches!(error, AppError::InvalidRequest { .. }));
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_query_is_extracted() {
        let request = http::Request::builder()
            .uri("/fuel_logs?vehicle_id=7")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let ApiQuery(filter) = ApiQuery::<Filter>::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert_eq!(filter.vehicle_id, 7);
    }

    #[tokio::test]
    async fn test_json_without_content_type_is_rejected() {
        let request = http::Request::builder()
            .method("POST")
            .uri("/trips")
            .body(Body::from(r#"{"vehicle_id": 1}"#))
            .unwrap();

        let error = ApiJson::<Filter>::from_request(request, &()).await.unwrap_err();
        assert_eq!(error.status_code(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    }
}
