use num_bigint::BigUint;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

pub const MAX_SEQUENCE_INDEX: u64 = 1_000;

pub const MISSING_INPUT_MESSAGE: &str = "Input parameter 'n' is required";
pub const NON_INTEGER_INPUT_MESSAGE: &str = "Input must be an integer";
pub const NEGATIVE_INPUT_MESSAGE: &str = "Input must be a non-negative integer";
pub const INPUT_TOO_LARGE_MESSAGE: &str = "Input must not exceed 1000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SequenceResponse {
    pub n: u64,
    pub sequence: Vec<Number>,
}

impl SequenceResponse {
    /// Shapes generated terms into the response contract. Terms beyond F(92)
    /// overflow u64, so each one round-trips through its decimal rendering
    /// and stays an exact JSON integer.
    pub fn from_terms(n: u64, terms: &[BigUint]) -> Result<Self, String> {
        let mut sequence = Vec::with_capacity(terms.len());
        for term in terms {
            let number: Number = serde_json::from_str(&term.to_string())
                .map_err(|error| format!("term does not encode as a JSON number: {error}"))?;
            sequence.push(number);
        }

        Ok(Self { n, sequence })
    }
}

/// Looks up the `"n"` parameter on the inbound event. A total lookup: no
/// validation and no transformation happen here.
pub fn extract_input(event: &Value) -> Option<&Value> {
    event.get("n")
}

/// Checks a raw `"n"` value against the contract rules, first failure wins:
/// present, integral, non-negative, and at most [`MAX_SEQUENCE_INDEX`].
///
/// Numeric strings and floats are rejected rather than coerced; an explicit
/// JSON `null` counts as a missing parameter.
pub fn validate_index(raw: Option<&Value>) -> Result<u64, ValidationError> {
    let number = match raw {
        None | Some(Value::Null) => {
            return Err(ValidationError::new(MISSING_INPUT_MESSAGE));
        }
        Some(Value::Number(number)) => number,
        Some(_) => {
            return Err(ValidationError::new(NON_INTEGER_INPUT_MESSAGE));
        }
    };

    if let Some(index) = number.as_u64() {
        if index > MAX_SEQUENCE_INDEX {
            return Err(ValidationError::new(INPUT_TOO_LARGE_MESSAGE));
        }
        return Ok(index);
    }

    // Integral but not u64-representable means negative.
    if number.as_i64().is_some() {
        return Err(ValidationError::new(NEGATIVE_INPUT_MESSAGE));
    }

    // Integer literals beyond 64 bits still classify by sign, not by type.
    let literal = number.to_string();
    if !literal.contains(['.', 'e', 'E']) {
        if literal.starts_with('-') {
            return Err(ValidationError::new(NEGATIVE_INPUT_MESSAGE));
        }
        return Err(ValidationError::new(INPUT_TOO_LARGE_MESSAGE));
    }

    Err(ValidationError::new(NON_INTEGER_INPUT_MESSAGE))
}
