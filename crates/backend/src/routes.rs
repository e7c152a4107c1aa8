use axum::{extract::DefaultBodyLimit, routing::get, Router};

use crate::handlers;
use crate::shared::config::get_config;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    build_router(get_config().upload.max_bytes)
}

fn build_router(max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // Pages
        .route("/", get(handlers::pages::index))
        .route("/report", get(handlers::pages::report))
        // D001 Sales report
        .route("/api/sales", get(handlers::d001_sales_report::list_sales))
        // U001 Import spreadsheet
        .route(
            "/spreadsheet/new",
            get(handlers::u001_import_spreadsheet::new_form)
                .post(handlers::u001_import_spreadsheet::upload),
        )
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data::db::{connect_in_memory, set_connection_for_tests};
    use crate::usecases::u001_import_spreadsheet::test_support::{
        valid_xlsx, xlsx_with_unknown_category, xlsx_without_sales,
    };
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request, StatusCode};
    use axum::response::Response;
    use tower::ServiceExt;

    const BOUNDARY: &str = "XBOUNDARY";

    async fn body_text(response: Response) -> String {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(body.to_vec()).unwrap()
    }

    async fn get_page(uri: &str) -> (StatusCode, String) {
        let response = configure_routes()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        (status, body_text(response).await)
    }

    fn upload_request(file_name: &str, bytes: &[u8]) -> Request<Body> {
        let mut body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"{name}\"\r\n\
             Content-Type: application/octet-stream\r\n\r\n",
            b = BOUNDARY,
            name = file_name
        )
        .into_bytes();
        body.extend_from_slice(bytes);
        body.extend_from_slice(format!("\r\n--{}--\r\n", BOUNDARY).as_bytes());

        Request::builder()
            .method(Method::POST)
            .uri("/spreadsheet/new")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        assert_eq!(get_page("/health").await, (StatusCode::OK, "ok".to_string()));
    }

    #[tokio::test]
    async fn test_pages_are_served() {
        let (status, body) = get_page("/report").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("/api/sales"));
        assert!(body.contains(r#"id="date-from""#));
        assert!(body.contains(r#"id="date-to""#));

        let (status, body) = get_page("/spreadsheet/new").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"name="file""#));
        assert!(body.contains("multipart/form-data"));

        let (status, _) = get_page("/").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_upload_without_file_field_is_bad_request() {
        let body = format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"comment\"\r\n\r\nhello\r\n--{b}--\r\n",
            b = BOUNDARY
        );
        let request = Request::builder()
            .method(Method::POST)
            .uri("/spreadsheet/new")
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={}", BOUNDARY),
            )
            .body(Body::from(body))
            .unwrap();

        let response = configure_routes().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_upload_without_multipart_body_is_rejected() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/spreadsheet/new")
            .header(header::CONTENT_TYPE, "text/plain")
            .body(Body::from("not multipart"))
            .unwrap();

        let response = configure_routes().oneshot(request).await.unwrap();
        assert!(response.status().is_client_error());
    }

    #[tokio::test]
    async fn test_upload_over_body_limit_is_payload_too_large() {
        let request = upload_request("sales.xlsx", &[b'x'; 4096]);

        let response = build_router(256).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    /// Единственный тест с глобальным подключением: сценарий идёт по шагам
    #[tokio::test]
    async fn test_upload_and_report_over_http() {
        set_connection_for_tests(connect_in_memory().await);

        let (status, body) = get_page("/api/sales").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "[]");

        // Формат не тот: нет листа sales
        let response = configure_routes()
            .oneshot(upload_request("sales.xlsx", &xlsx_without_sales()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_ACCEPTABLE);
        let body = body_text(response).await;
        assert!(body.starts_with(
            "Spreadsheet does not meet the expected format.\nCannot find all required worksheets."
        ));

        // Товар ссылается на несуществующую категорию
        let response = configure_routes()
            .oneshot(upload_request("sales.xlsx", &xlsx_with_unknown_category()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(response).await.contains("Referential integrity violation"));

        let response = configure_routes()
            .oneshot(upload_request("sales.xlsx", &valid_xlsx()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], "/");

        let (status, body) = get_page("/api/sales").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#""category":"Café""#));
        assert!(body.contains(r#""date":"2024-01-01","name":"Tea","quantity":2"#));

        // Повторный импорт тех же id
        let response = configure_routes()
            .oneshot(upload_request("sales.xlsx", &valid_xlsx()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body_text(response).await.starts_with("Import failed: Database error"));
    }
}
