//! Notion client integration tests
//!
//! Stands up a fake Notion API with wiremock and checks what the reqwest
//! client sends and how it reads the answers.

#[cfg(test)]
mod tests {
    use crate::common::PAGE_ID;
    use notion_relay::RelayError;
    use notion_relay::config::NotionConfig;
    use notion_relay::core::blocks::{BlockId, paragraph};
    use notion_relay::core::notion::{DocumentClient, NotionClient};
    use serde_json::json;
    use std::time::Duration;
    use wiremock::matchers::{body_json, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const BLOCK: &str = "0123456789abcdef0123456789abcdef";

    fn client_for(server: &MockServer) -> NotionClient {
        let config = NotionConfig {
            token: "secret_wire".to_string(),
            page_id: PAGE_ID.to_string(),
            api_base: server.uri(),
            ..Default::default()
        };
        NotionClient::new(&config).unwrap()
    }

    fn block() -> BlockId {
        BlockId::parse(BLOCK).unwrap()
    }

    #[tokio::test]
    async fn test_requests_carry_auth_and_version() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/blocks/{}", BLOCK)))
            .and(header("authorization", "Bearer secret_wire"))
            .and(header("notion-version", "2025-09-03"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"object": "block"})))
            .expect(1)
            .mount(&server)
            .await;

        let response = client_for(&server).fetch_block(&block()).await.unwrap();
        assert!(response.found);
        assert_eq!(response.status, 200);
    }

    #[tokio::test]
    async fn test_fetch_404_is_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"code": "object_not_found"})),
            )
            .mount(&server)
            .await;

        let response = client_for(&server).fetch_block(&block()).await.unwrap();
        assert!(!response.found);
        assert_eq!(response.body["code"], "object_not_found");
    }

    #[tokio::test]
    async fn test_fetch_other_errors_count_as_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded"))
            .mount(&server)
            .await;

        let response = client_for(&server).fetch_block(&block()).await.unwrap();
        assert!(response.found);
        assert_eq!(response.body, json!("upstream exploded"));
    }

    #[tokio::test]
    async fn test_append_sends_children_and_reads_id() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .and(path(format!("/blocks/{}/children", PAGE_ID)))
            .and(body_json(json!({"children": [paragraph("hi")]})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "object": "list",
                "results": [{"object": "block", "id": "created-1"}]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = BlockId::parse(PAGE_ID).unwrap();
        let response = client_for(&server)
            .append_children(&page, vec![paragraph("hi")])
            .await
            .unwrap();

        assert!(response.ok);
        assert_eq!(response.created_block_id().as_deref(), Some("created-1"));
    }

    #[tokio::test]
    async fn test_append_rejection_is_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("PATCH"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(json!({"code": "validation_error"})),
            )
            .mount(&server)
            .await;

        let page = BlockId::parse(PAGE_ID).unwrap();
        let response = client_for(&server)
            .append_children(&page, vec![paragraph("x")])
            .await
            .unwrap();
        assert!(!response.ok);
        assert_eq!(response.status, 400);
    }

    #[tokio::test]
    async fn test_archive_sends_flag_and_keeps_body_text() {
        let server = MockServer::start().await;
        let message =
            "Can't edit block that is archived. You must unarchive the block before editing.";
        Mock::given(method("PATCH"))
            .and(path(format!("/blocks/{}", BLOCK)))
            .and(body_json(json!({"archived": true})))
            .respond_with(ResponseTemplate::new(400).set_body_json(json!({
                "object": "error",
                "status": 400,
                "message": message
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let response = client.archive_block(&block()).await.unwrap();

        assert!(!response.ok);
        assert!(client.is_already_archived(&response.body_text));
    }

    #[tokio::test]
    async fn test_list_children_passes_page_size() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(format!("/blocks/{}/children", PAGE_ID)))
            .and(query_param("page_size", "100"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"object": "list", "results": []})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let page = BlockId::parse(PAGE_ID).unwrap();
        let response = client_for(&server).list_children(&page, 100).await.unwrap();
        assert_eq!(response.status, 200);
        assert_eq!(response.body["object"], "list");
    }

    #[tokio::test]
    async fn test_timeout_is_transport_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
            .mount(&server)
            .await;

        let config = NotionConfig {
            token: "secret_wire".to_string(),
            page_id: PAGE_ID.to_string(),
            api_base: server.uri(),
            timeout: 1,
            ..Default::default()
        };
        let client = NotionClient::new(&config).unwrap();

        let err = client.fetch_block(&block()).await.unwrap_err();
        assert!(matches!(err, RelayError::HttpClient(ref e) if e.is_timeout()));
    }
}
