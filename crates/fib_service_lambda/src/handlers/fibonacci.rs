use std::panic::{catch_unwind, AssertUnwindSafe};
use std::time::Instant;

use fib_service_core::contract::{extract_input, validate_index, SequenceResponse};
use fib_service_core::sequence::fibonacci_sequence;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiGatewayResponse {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: Value,
    pub body: String,
}

/// Runs the extract → validate → generate chain for one invocation and maps
/// the outcome onto the response envelope: 400 for contract violations, 200
/// with the echoed index and its sequence otherwise.
///
/// The whole chain sits inside a fault boundary; panics and encoding failures
/// surface as a generic 500 with no internal detail in the body.
pub fn handle_fibonacci_event(event: &Value) -> ApiGatewayResponse {
    let started_at = Instant::now();
    match catch_unwind(AssertUnwindSafe(|| respond_to_event(event, started_at))) {
        Ok(response) => response,
        Err(_) => {
            log_handler_error(
                "handler_panicked",
                json!({ "duration_ms": started_at.elapsed().as_millis() }),
            );
            internal_error_response()
        }
    }
}

fn respond_to_event(event: &Value, started_at: Instant) -> ApiGatewayResponse {
    log_handler_info(
        "request_received",
        json!({ "has_parameter": extract_input(event).is_some() }),
    );

    if !event.is_object() {
        log_handler_error("malformed_event", json!({ "reason": "event is not a JSON object" }));
        return internal_error_response();
    }

    let index = match validate_index(extract_input(event)) {
        Ok(value) => value,
        Err(error) => {
            log_handler_info("request_rejected", json!({ "reason": error.message() }));
            return validation_error_response(error.message());
        }
    };

    let sequence = fibonacci_sequence(index);
    let payload = match SequenceResponse::from_terms(index, &sequence) {
        Ok(value) => value,
        Err(message) => {
            log_handler_error(
                "response_encoding_failed",
                json!({ "n": index, "error": message }),
            );
            return internal_error_response();
        }
    };

    log_handler_info(
        "request_completed",
        json!({
            "n": index,
            "sequence_length": sequence.len(),
            "duration_ms": started_at.elapsed().as_millis(),
        }),
    );
    success_response(200, payload)
}

fn validation_error_response(message: &str) -> ApiGatewayResponse {
    error_response(400, json!({ "error": message }))
}

fn internal_error_response() -> ApiGatewayResponse {
    error_response(500, json!({ "error": INTERNAL_ERROR_MESSAGE }))
}

fn success_response(status_code: u16, payload: impl Serialize) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: serde_json::to_string(&payload).expect("response payload should serialize"),
    }
}

fn error_response(status_code: u16, payload: Value) -> ApiGatewayResponse {
    ApiGatewayResponse {
        status_code,
        headers: json!({"Content-Type": "application/json"}),
        body: payload.to_string(),
    }
}

fn log_handler_info(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "fibonacci_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}

fn log_handler_error(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "fibonacci_handler",
            "level": "error",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
