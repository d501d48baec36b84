use serde_json::Value;

const FIBONACCI_MAX: i64 = 1000;

/// Prompts are truncated to this many characters before leaving the service.
const AI_PROMPT_LIMIT: usize = 500;

/// A validated request, one variant per accepted key.
///
/// The request body is an object with exactly one key from the allow-list
/// `fibonacci | prime | lcm | hcf | AI`; parsing it into a tagged enum keeps
/// all downstream dispatch static.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// First N Fibonacci numbers, N in [0, 1000].
    Fibonacci(u32),
    /// Raw elements to filter down to primes; non-integers are dropped later.
    Prime(Vec<Value>),
    /// Positive integers to reduce with a least-common-multiple fold.
    Lcm(Vec<u64>),
    /// Positive integers to reduce with a greatest-common-divisor fold.
    Hcf(Vec<u64>),
    /// Prompt for the external text provider, already truncated.
    Ai(String),
}

impl Operation {
    /// Validate the envelope shape and the keyed value, in request order.
    ///
    /// Failures are categorized messages, never panics; the handler maps
    /// them onto 400 responses.
    pub fn from_body(body: &Value) -> Result<Self, &'static str> {
        let map = body.as_object().ok_or("Invalid JSON body")?;

        // The prototype-pollution key is rejected outright, before key
        // counting, so it can never masquerade as a valid operation.
        if map.contains_key("__proto__") {
            return Err("Invalid input");
        }

        if map.len() != 1 {
            return Err("Exactly one key is required");
        }
        let Some((key, value)) = map.iter().next() else {
            return Err("Exactly one key is required");
        };

        match key.as_str() {
            "fibonacci" => {
                let n = json_integer(value)
                    .filter(|n| (0..=FIBONACCI_MAX).contains(n))
                    .ok_or("Invalid fibonacci input")?;
                Ok(Self::Fibonacci(n as u32))
            }
            "prime" => {
                let values = value
                    .as_array()
                    .filter(|a| !a.is_empty())
                    .ok_or("Prime input must be non-empty array")?;
                Ok(Self::Prime(values.clone()))
            }
            "lcm" => positive_integers(value).map(Self::Lcm).ok_or("Invalid LCM input"),
            "hcf" => positive_integers(value).map(Self::Hcf).ok_or("Invalid HCF input"),
            "AI" => {
                let prompt = value
                    .as_str()
                    .filter(|s| !s.trim().is_empty())
                    .ok_or("Invalid AI input")?;
                Ok(Self::Ai(prompt.chars().take(AI_PROMPT_LIMIT).collect()))
            }
            _ => Err("Invalid key"),
        }
    }
}

/// Integer view of a JSON value. Whole-valued doubles count as integers,
/// matching `Number.isInteger` semantics for bodies like `{"fibonacci": 5.0}`.
pub fn json_integer(value: &Value) -> Option<i64> {
    if let Some(n) = value.as_i64() {
        return Some(n);
    }
    value
        .as_f64()
        .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
        .map(|f| f as i64)
}

/// Non-empty array of strictly positive integers, or `None`.
fn positive_integers(value: &Value) -> Option<Vec<u64>> {
    let array = value.as_array().filter(|a| !a.is_empty())?;
    array
        .iter()
        .map(|v| json_integer(v).filter(|n| *n > 0).map(|n| n as u64))
        .collect()
}
