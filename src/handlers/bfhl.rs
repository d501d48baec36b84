use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::Json;
use serde_json::Value;

use crate::error::AppError;
use crate::models::{json_integer, Envelope, Operation};
use crate::services::math;
use crate::services::providers::TextProvider;
use crate::startup::AppState;

/// `POST /bfhl`: validate the one-key body, run the operation, wrap the
/// result in the envelope. Every validation failure short-circuits with a
/// 400 envelope carrying its specific message.
#[tracing::instrument(skip(state, payload))]
pub async fn bfhl(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Envelope>, AppError> {
    let Json(body) = payload.map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        AppError::BadRequest("Invalid JSON body".to_string())
    })?;

    let operation =
        Operation::from_body(&body).map_err(|msg| AppError::BadRequest(msg.to_string()))?;

    let data = match operation {
        Operation::Fibonacci(n) => fibonacci_json(math::fibonacci(n)),
        Operation::Prime(values) => Value::Array(
            values
                .into_iter()
                .filter(|v| json_integer(v).is_some_and(math::is_prime))
                .collect(),
        ),
        Operation::Lcm(values) => math::lcm_fold(&values)
            .map(Value::from)
            .ok_or_else(|| AppError::BadRequest("Invalid LCM input".to_string()))?,
        Operation::Hcf(values) => math::gcd_fold(&values)
            .map(Value::from)
            .ok_or_else(|| AppError::BadRequest("Invalid HCF input".to_string()))?,
        Operation::Ai(prompt) => {
            Value::String(first_token(state.text_provider.as_ref(), &prompt).await)
        }
    };

    Ok(Json(Envelope::success(data)))
}

/// Resolve the AI operation to a single token. Provider failures are
/// logged and swallowed: the caller always gets a 200 with a sentinel.
async fn first_token(provider: &dyn TextProvider, prompt: &str) -> String {
    match provider.generate(prompt).await {
        Ok(Some(text)) => text
            .split_whitespace()
            .next()
            .map_or_else(|| "Unknown".to_string(), str::to_string),
        Ok(None) => "Unknown".to_string(),
        Err(e) => {
            tracing::warn!(error = %e, "Text provider call failed");
            "Unavailable".to_string()
        }
    }
}

/// Fibonacci terms that are still exact integers (< 2^53) serialize as
/// JSON integers; larger terms fall back to doubles.
fn fibonacci_json(sequence: Vec<f64>) -> Value {
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;
    Value::Array(
        sequence
            .into_iter()
            .map(|v| {
                if v < MAX_EXACT {
                    Value::from(v as u64)
                } else {
                    Value::from(v)
                }
            })
            .collect(),
    )
}
