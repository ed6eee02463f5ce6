//! Request validation: body decoding, the ordered field checks run before
//! any write, and the lookup gate for path-addressed pastes.
//!
//! Checks run in a fixed order and stop at the first failure: every required
//! field must be present, then `exposure`, `syntax` and `expiration` must hold
//! legal values. Each value is parsed once, by the check that validates it.

use crate::error::ApiError;
use crate::models::{Exposure, NewPaste, PasteUpdate, Syntax, UserId};
use crate::store::PasteStore;
use axum::http::{header, HeaderMap};
use serde_json::{Map, Value};

/// The nested `data` object of a request body
pub type Data = Map<String, Value>;

/// Presence order for create requests
pub const CREATE_FIELDS: [&str; 6] = ["name", "syntax", "exposure", "expiration", "text", "user_id"];

/// `user_id` is fixed at creation, so updates never check it.
pub const UPDATE_FIELDS: [&str; 5] = ["name", "syntax", "exposure", "expiration", "text"];

static MISSING: Value = Value::Null;

pub fn validate_create(data: &Data) -> Result<NewPaste, ApiError> {
    let [name, syntax, exposure, expiration, text, user_id] = present(data, CREATE_FIELDS)?;

    let exposure = parse_exposure(exposure)?;
    let syntax = parse_syntax(syntax)?;
    let expiration = parse_expiration(expiration)?;

    Ok(NewPaste {
        name: as_text(name),
        syntax,
        exposure,
        expiration,
        text: as_text(text),
        user_id: UserId(user_id.clone()),
    })
}

pub fn validate_update(data: &Data) -> Result<PasteUpdate, ApiError> {
    let [name, syntax, exposure, expiration, text] = present(data, UPDATE_FIELDS)?;

    let exposure = parse_exposure(exposure)?;
    let syntax = parse_syntax(syntax)?;
    let expiration = parse_expiration(expiration)?;

    Ok(PasteUpdate {
        name: as_text(name),
        syntax,
        exposure,
        expiration,
        text: as_text(text),
    })
}

/// Extracts the `data` object from a raw request body.
///
/// Only `application/json` bodies are parsed. An empty or non-JSON body, a
/// non-object body and a non-object `data` all yield an empty object so the
/// presence checks report what is missing.
pub fn body_data(headers: &HeaderMap, body: &[u8]) -> Result<Data, ApiError> {
    if !is_json(headers) || body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Data::new());
    }

    let data = match serde_json::from_slice::<Value>(body)? {
        Value::Object(mut root) => match root.remove("data") {
            Some(Value::Object(data)) => data,
            _ => Data::new(),
        },
        _ => Data::new(),
    };
    Ok(data)
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .is_some_and(|mime| mime.trim().eq_ignore_ascii_case("application/json"))
}

/// Lookup gate: resolves a path identifier to the id of an existing paste.
pub fn paste_exists(store: &PasteStore, paste_id: &str) -> Result<u64, ApiError> {
    coerce_id(paste_id)
        .filter(|id| store.find(*id).is_some())
        .ok_or_else(|| ApiError::PasteNotFound(paste_id.to_string()))
}

/// Numeric reading of a path identifier: `"01"`, `" 1 "`, `"1.0"` and
/// `"0x1"` all mean 1.
pub fn coerce_id(raw: &str) -> Option<u64> {
    let trimmed = raw.trim();

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.starts_with('+') {
            return None;
        }
        return u64::from_str_radix(digits, radix).ok();
    }

    trimmed.parse::<u64>().ok().or_else(|| {
        trimmed
            .parse::<f64>()
            .ok()
            .and_then(whole_number)
    })
}

/// Presence checks, in order. Returns the values in the order of `fields`.
fn present<'a, const N: usize>(
    data: &'a Data,
    fields: [&'static str; N],
) -> Result<[&'a Value; N], ApiError> {
    let mut found: [&'a Value; N] = [&MISSING; N];
    for (slot, field) in found.iter_mut().zip(fields) {
        *slot = data
            .get(field)
            .filter(|value| is_truthy(value))
            .ok_or_else(|| ApiError::Validation(format!("Must include a {} property.", field)))?;
    }
    Ok(found)
}

fn parse_exposure(value: &Value) -> Result<Exposure, ApiError> {
    value.as_str().and_then(Exposure::parse).ok_or_else(|| {
        let legal: Vec<&str> = Exposure::ALL.iter().map(|e| e.as_str()).collect();
        ApiError::Validation(format!(
            "Value of the 'exposure' property must be {}. Received: {}",
            legal.join(" or "),
            as_text(value)
        ))
    })
}

fn parse_syntax(value: &Value) -> Result<Syntax, ApiError> {
    value.as_str().and_then(Syntax::parse).ok_or_else(|| {
        let legal: Vec<&str> = Syntax::ALL.iter().map(|s| s.as_str()).collect();
        ApiError::Validation(format!(
            "Value of the syntax property must be one of {}. Received: {}",
            legal.join(", "),
            as_text(value)
        ))
    })
}

fn parse_expiration(value: &Value) -> Result<u64, ApiError> {
    value
        .as_u64()
        .or_else(|| value.as_f64().and_then(whole_number))
        .filter(|n| *n > 0)
        .ok_or_else(|| ApiError::Validation("Expiration requires a valid number.".to_string()))
}

fn whole_number(f: f64) -> Option<u64> {
    (f.is_finite() && f.fract() == 0.0 && f >= 0.0 && f <= u64::MAX as f64).then_some(f as u64)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
