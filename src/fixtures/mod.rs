//! Test fixtures for the Watson NLU client.
//!
//! Response bodies shaped like the ones the service returns.

use serde_json::{json, Value};

/// `POST /v1/analyze` response exercising most features.
pub fn analysis_results() -> Value {
    json!({
        "language": "en",
        "analyzed_text": "IBM Watson helps Acme analyze reviews. Customers love it.",
        "usage": {"text_units": 1, "text_characters": 58, "features": 5},
        "entities": [{
            "type": "Company",
            "text": "IBM Watson",
            "relevance": 0.98,
            "confidence": 0.91,
            "count": 1,
            "mentions": [{"text": "IBM Watson", "location": [0, 10], "confidence": 0.91}],
            "sentiment": {"score": 0.7},
            "disambiguation": {
                "name": "Watson (computer)",
                "dbpedia_resource": "http://dbpedia.org/resource/Watson_(computer)",
                "subtype": ["Software"]
            }
        }],
        "keywords": [{
            "text": "reviews",
            "relevance": 0.84,
            "count": 1,
            "emotion": {"anger": 0.02, "disgust": 0.01, "fear": 0.03, "joy": 0.81, "sadness": 0.05}
        }],
        "sentiment": {
            "document": {"label": "positive", "score": 0.86},
            "targets": [{"text": "Acme", "score": 0.4}]
        },
        "categories": [{
            "label": "/technology and computing/software",
            "score": 0.93,
            "explanation": {"relevant_text": [{"text": "IBM Watson"}]}
        }],
        "syntax": {
            "tokens": [
                {"text": "IBM", "part_of_speech": "PROPN", "location": [0, 3], "lemma": "IBM"},
                {"text": "helps", "part_of_speech": "VERB", "location": [11, 16], "lemma": "help"}
            ],
            "sentences": [{"text": "IBM Watson helps Acme analyze reviews.", "location": [0, 38]}]
        }
    })
}

/// A custom sentiment model as returned after training.
pub fn sentiment_model() -> Value {
    json!({
        "model_id": "b4ea1d6c-7e1f-4b2e-9d8a-2f9c1a3e5b70",
        "status": "available",
        "language": "en",
        "name": "product-reviews",
        "model_version": "1.0.0",
        "features": ["sentiment"],
        "notices": [],
        "created": "2022-06-01T12:00:00Z",
        "last_trained": "2022-06-01T12:30:00Z",
        "last_deployed": "2022-06-01T13:00:00Z"
    })
}

/// Error body in the service's format.
pub fn error_body(code: u16, message: &str) -> Value {
    json!({"error": message, "code": code})
}
