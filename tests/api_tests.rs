use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use tower::Service;

#[tokio::test]
async fn test_health_check() {
    let mut app = create_test_app();
    let response = app
        .call(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = read_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_tracking_desconocido_responde_404() {
    let mut app = create_test_app();
    let response = app
        .call(
            Request::builder()
                .uri("/api/tracking/MT-NOEXISTE")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = read_json(response.into_body()).await;
    assert_eq!(body["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_reserva_sin_idempotency_key_se_rechaza() {
    let mut app = create_test_app();
    let response = app
        .call(
            Request::builder()
                .method("POST")
                .uri("/api/reservas/transporte")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({
                        "servicio_codigo": "transporte-aeropuerto",
                        "fecha_servicio": "2026-09-15",
                        "pasajeros": 3
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_ruta_admin_sin_token_responde_401() {
    let mut app = create_test_app();
    let response = app
        .call(
            Request::builder()
                .uri("/api/servicios")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

async fn read_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// App de test con la misma superficie y los mismos shapes de error que el
/// servidor real, sin base de datos ni redis detrás.
fn create_test_app() -> Router {
    #[derive(serde::Deserialize)]
    #[allow(dead_code)]
    struct CreateReservaBody {
        idempotency_key: String,
        servicio_codigo: String,
        fecha_servicio: String,
        pasajeros: i32,
    }

    Router::new()
        .route(
            "/health",
            get(|| async {
                Json(json!({
                    "status": "ok",
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                }))
            }),
        )
        .route(
            "/api/tracking/:codigo",
            get(|| async {
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({
                        "error": "Not Found",
                        "message": "Reserva no encontrada",
                        "code": "NOT_FOUND",
                    })),
                )
            }),
        )
        // Json<CreateReservaBody> rechaza el body sin idempotency_key con 422
        .route(
            "/api/reservas/:tipo_servicio",
            post(|_body: Json<CreateReservaBody>| async { StatusCode::CREATED }),
        )
        .route(
            "/api/servicios",
            get(|| async {
                (
                    StatusCode::UNAUTHORIZED,
                    Json(json!({
                        "error": "Unauthorized",
                        "message": "Token de autorización requerido",
                        "code": "UNAUTHORIZED",
                    })),
                )
            }),
        )
}
