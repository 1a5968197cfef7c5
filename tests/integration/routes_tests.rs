//! HTTP route integration tests
//!
//! Full actix application over the in-memory store, plus one pass through the
//! real reqwest client against wiremock.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{MISSING_ID, append_text, batch, delete};
    use crate::common::{MemoryStore, PAGE_ID, relay_config};
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use notion_relay::server::{AppState, HttpServer};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state(store: Arc<MemoryStore>) -> web::Data<AppState> {
        let mut config = relay_config("https://api.notion.com/v1");
        config.batch.max_payload = 300;
        web::Data::new(AppState::new(config, store).unwrap())
    }

    #[actix_web::test]
    async fn test_execute_then_read() {
        let store = Arc::new(MemoryStore::new());
        let old = store.insert("old line");
        let app = test::init_service(HttpServer::create_app(state(Arc::clone(&store)))).await;

        let req = test::TestRequest::post()
            .uri("/execute")
            .set_json(batch(vec![delete(&old), append_text("fresh line")]))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let report: Value = test::read_body_json(resp).await;
        assert_eq!(report["errors"], json!([]));
        assert_eq!(report["executed"].as_array().unwrap().len(), 2);

        let req = test::TestRequest::get().uri("/read").to_request();
        let resp = test::call_service(&app, req).await;
        let listing: Value = test::read_body_json(resp).await;
        let results = listing["results"].as_array().unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(
            results[0]["paragraph"]["rich_text"][0]["text"]["content"],
            "fresh line"
        );
    }

    #[actix_web::test]
    async fn test_execute_only_errors_is_still_200() {
        let store = Arc::new(MemoryStore::new());
        let app = test::init_service(HttpServer::create_app(state(store))).await;

        let req = test::TestRequest::post()
            .uri("/execute")
            .set_json(batch(vec![delete("not-a-real-id")]))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let report: Value = test::read_body_json(resp).await;
        assert_eq!(report["executed"], json!([]));
        assert!(
            report["errors"][0]["error"]
                .as_str()
                .unwrap()
                .contains("Invalid block ID format")
        );
    }

    #[actix_web::test]
    async fn test_execute_empty_body_object() {
        let store = Arc::new(MemoryStore::new());
        let app = test::init_service(HttpServer::create_app(state(store))).await;

        let req = test::TestRequest::post()
            .uri("/execute")
            .set_json(json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::OK);
        let report: Value = test::read_body_json(resp).await;
        assert_eq!(report, json!({"executed": [], "errors": []}));
    }

    #[actix_web::test]
    async fn test_delete_route_is_idempotent() {
        let store = Arc::new(MemoryStore::new());
        let id = store.insert("bye");
        let app = test::init_service(HttpServer::create_app(state(Arc::clone(&store)))).await;

        let first = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/delete?id={}", id))
                .to_request(),
        )
        .await;
        assert_eq!(first.status(), StatusCode::OK);
        let body: Value = test::read_body_json(first).await;
        assert_eq!(body["archived"], true);

        let second = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/delete?id={}", id))
                .to_request(),
        )
        .await;
        assert_eq!(second.status(), StatusCode::OK);
        let body: Value = test::read_body_json(second).await;
        assert_eq!(body["note"], "Block was already archived, skipped");

        let missing = test::call_service(
            &app,
            test::TestRequest::delete()
                .uri(&format!("/delete?id={}", MISSING_ID))
                .to_request(),
        )
        .await;
        let body: Value = test::read_body_json(missing).await;
        assert_eq!(body["note"], "Block already deleted or not found");
    }

    #[actix_web::test]
    async fn test_append_route_budget() {
        let store = Arc::new(MemoryStore::new());
        let app = test::init_service(HttpServer::create_app(state(Arc::clone(&store)))).await;

        let ok = test::TestRequest::post()
            .uri("/append")
            .set_json(json!({"text": "fits"}))
            .to_request();
        assert_eq!(test::call_service(&app, ok).await.status(), StatusCode::OK);

        let too_big = test::TestRequest::post()
            .uri("/append")
            .set_json(json!({"block": {"type": "paragraph", "paragraph": {"rich_text": [
                {"type": "text", "text": {"content": "y".repeat(400)}}
            ]}}}))
            .to_request();
        let resp = test::call_service(&app, too_big).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        assert_eq!(store.live_texts(), vec!["fits"]);
    }

    #[actix_web::test]
    async fn test_routes_over_real_client() {
        let notion = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/blocks/{}/children", PAGE_ID)))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "object": "error",
                "status": 401,
                "code": "unauthorized"
            })))
            .mount(&notion)
            .await;

        let state = AppState::from_config(relay_config(&notion.uri())).unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get().uri("/read").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["code"], "unauthorized");
    }

    #[actix_web::test]
    async fn test_unreachable_notion_maps_to_bad_gateway() {
        // Nothing listens on port 9 of localhost
        let state = AppState::from_config(relay_config("http://127.0.0.1:9")).unwrap();
        let app = test::init_service(HttpServer::create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get().uri("/read").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_GATEWAY);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "HTTP_CLIENT_ERROR");
    }
}
