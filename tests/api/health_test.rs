// Integration tests for the health endpoint
use axum::{
  body::Body,
  http::{Request, StatusCode},
};
use tower::ServiceExt;

use crate::common::{body_string, setup_test_db, test_router, unreachable_db};

#[tokio::test]
async fn test_health_reports_unreachable_database() {
  let app = test_router(unreachable_db());

  let response = app
    .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
  let body = body_string(response).await;
  assert!(body.contains("unhealthy"));
}

#[tokio::test]
#[ignore = "requires TEST_DATABASE_URL"]
async fn test_health_reports_healthy_database() {
  let db = setup_test_db()
    .await
    .expect("Failed to setup test database");
  let app = test_router(db);

  let response = app
    .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
    .await
    .unwrap();

  assert_eq!(response.status(), StatusCode::OK);
  let body = body_string(response).await;
  assert!(body.contains(r#""status":"healthy""#));
}
