//! Tests for model listing, deletion and response decoding over HTTP.

use integrations_watson_nlu::services::models::{DeleteModelOptions, ListModelsOptions};
use integrations_watson_nlu::services::sentiment::GetSentimentModelOptions;
use integrations_watson_nlu::{
    create_client, ModelStatus, NaturalLanguageUnderstanding, NluClient, NluConfig, NluError,
};
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> NaturalLanguageUnderstanding {
    let config = NluConfig::builder()
        .service_url(server.uri())
        .version("2022-04-07")
        .bearer_token("token-123")
        .build()
        .unwrap();
    create_client(config).unwrap()
}

#[tokio::test]
async fn test_list_models() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/models"))
        .and(query_param("version", "2022-04-07"))
        .and(header("authorization", "Bearer token-123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [
                {
                    "model_id": "m1",
                    "status": "available",
                    "language": "en",
                    "version": "1.0",
                    "workspace_id": "ws-1",
                    "created": "2022-05-01T10:00:00Z"
                },
                {"model_id": "m2", "status": "retired"}
            ]
        })))
        .mount(&server)
        .await;

    let models = client_for(&server)
        .models()
        .list_models(ListModelsOptions::new())
        .await
        .unwrap()
        .into_result()
        .unwrap()
        .models
        .unwrap();

    assert_eq!(models.len(), 2);
    assert_eq!(models[0].status, Some(ModelStatus::Available));
    assert_eq!(models[1].status, Some(ModelStatus::Other("retired".to_string())));
}

#[tokio::test]
async fn test_delete_model_escapes_id() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/models/my%20model"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"deleted": "my model"})))
        .expect(1)
        .mount(&server)
        .await;

    let deleted = client_for(&server)
        .models()
        .delete_model(DeleteModelOptions::new("my model"))
        .await
        .unwrap();

    assert_eq!(deleted.result.unwrap().deleted.as_deref(), Some("my model"));
}

#[tokio::test]
async fn test_empty_success_body_has_no_result() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/v1/models/m1"))
        .respond_with(ResponseTemplate::new(200).insert_header("x-request-id", "r-1"))
        .mount(&server)
        .await;

    let response = client_for(&server)
        .models()
        .delete_model(DeleteModelOptions::new("m1"))
        .await
        .unwrap();

    assert_eq!(response.status_code, 200);
    assert!(response.result.is_none());
    assert_eq!(response.header("x-request-id"), Some("r-1"));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error_with_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/models/sentiment/s1"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("x-global-transaction-id", "tx-9")
                .set_body_string("<html>gateway</html>"),
        )
        .mount(&server)
        .await;

    let error = client_for(&server)
        .sentiment()
        .get_sentiment_model(GetSentimentModelOptions::new("s1"))
        .await
        .unwrap_err();

    match &error {
        NluError::Decode { response, .. } => {
            assert_eq!(response.status, 200);
            assert_eq!(&response.body[..], b"<html>gateway</html>");
            assert!(response.headers.contains_key("x-global-transaction-id"));
        }
        other => panic!("expected decode error, got {:?}", other),
    }
    assert!(error.response().is_some());
}

#[tokio::test]
async fn test_invalid_timestamp_keeps_rest_of_model() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/models/sentiment/s1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model_id": "s1",
            "status": "training",
            "created": "yesterday",
            "last_trained": "2022-06-01"
        })))
        .mount(&server)
        .await;

    let model = client_for(&server)
        .sentiment()
        .get_sentiment_model(GetSentimentModelOptions::new("s1"))
        .await
        .unwrap()
        .into_result()
        .unwrap();

    assert_eq!(model.model_id.as_deref(), Some("s1"));
    assert!(!model.created.unwrap().is_valid());
    assert!(model.last_trained.unwrap().is_valid());
}

#[test_case(404, "NotFound" ; "missing model")]
#[test_case(429, "RateLimit" ; "throttled")]
#[test_case(500, "Server" ; "internal error")]
#[tokio::test]
async fn test_error_statuses(status: u16, expected: &str) {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .respond_with(
            ResponseTemplate::new(status).set_body_json(json!({"error": "nope", "code": status})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let error = client_for(&server)
        .models()
        .delete_model(DeleteModelOptions::new("m1"))
        .await
        .unwrap_err();

    let variant = match &error {
        NluError::NotFound { .. } => "NotFound",
        NluError::RateLimit { .. } => "RateLimit",
        NluError::Server { .. } => "Server",
        _ => "other",
    };
    assert_eq!(variant, expected);
    assert_eq!(error.status_code(), Some(status));
    assert_eq!(error.response().unwrap().status, status);
}

#[tokio::test]
async fn test_http_failure_keeps_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/models/sentiment/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .insert_header("x-global-transaction-id", "tx-9")
                .set_body_json(json!({"error": "nope", "code": 404})),
        )
        .mount(&server)
        .await;

    let error = client_for(&server)
        .sentiment()
        .get_sentiment_model(GetSentimentModelOptions::new("missing"))
        .await
        .unwrap_err();

    assert!(matches!(&error, NluError::NotFound { message, .. } if message == "nope"));
    let envelope = error.response().unwrap();
    assert_eq!(envelope.status, 404);
    assert_eq!(
        envelope.headers.get("x-global-transaction-id").unwrap(),
        "tx-9"
    );
    let body: serde_json::Value = serde_json::from_slice(&envelope.body).unwrap();
    assert_eq!(body["error"], "nope");
}
