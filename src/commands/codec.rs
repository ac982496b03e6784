//! Candid Value Conversions
//!
//! The JS agent hands back candid values in JS shapes: `opt` as a 0/1
//! element array, `nat` as `BigInt`, `principal` as an object with
//! `toText()`. These helpers turn them into plain Rust values and build the
//! argument arrays going the other way.

use js_sys::{Array, BigInt, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use crate::error::{ClientError, ClientResult};

/// Largest integer a JS number holds exactly
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// Read a record field, failing if absent
pub fn field(record: &JsValue, name: &str) -> ClientResult<JsValue> {
    let value = Reflect::get(record, &JsValue::from_str(name))
        .map_err(|_| ClientError::Decode(format!("cannot read field `{}`", name)))?;
    if value.is_undefined() {
        return Err(ClientError::Decode(format!("missing field `{}`", name)));
    }
    Ok(value)
}

pub fn text(value: &JsValue) -> ClientResult<String> {
    value
        .as_string()
        .ok_or_else(|| ClientError::Decode(format!("expected text, got {:?}", value)))
}

pub fn text_field(record: &JsValue, name: &str) -> ClientResult<String> {
    text(&field(record, name)?)
}

/// `nat` / `nat64` / `int` as `u64`, from either a BigInt or a safe number
pub fn nat(value: &JsValue) -> ClientResult<u64> {
    if let Some(n) = value.as_f64() {
        if n >= 0.0 && n.fract() == 0.0 && n <= MAX_SAFE_INTEGER {
            return Ok(n as u64);
        }
        return Err(ClientError::Decode(format!("{} is not a natural number", n)));
    }
    if value.is_bigint() {
        let digits: String = value
            .unchecked_ref::<BigInt>()
            .to_string(10)
            .map_err(|_| ClientError::Decode("unprintable BigInt".to_string()))?
            .into();
        return parse_nat(&digits);
    }
    Err(ClientError::Decode(format!("expected nat, got {:?}", value)))
}

pub fn nat_field(record: &JsValue, name: &str) -> ClientResult<u64> {
    nat(&field(record, name)?)
}

/// Decimal digits of a BigInt as `u64`
pub fn parse_nat(digits: &str) -> ClientResult<u64> {
    digits
        .trim_end_matches('n')
        .parse::<u64>()
        .map_err(|e| ClientError::Decode(format!("`{}` does not fit u64: {}", digits, e)))
}

/// Principal as text; accepts an already-textual principal
pub fn principal(value: &JsValue) -> ClientResult<String> {
    if let Some(s) = value.as_string() {
        return Ok(s);
    }
    let to_text = Reflect::get(value, &JsValue::from_str("toText"))
        .ok()
        .and_then(|f| f.dyn_into::<Function>().ok())
        .ok_or_else(|| ClientError::Decode(format!("expected principal, got {:?}", value)))?;
    let rendered = to_text
        .call0(value)
        .map_err(|e| ClientError::Decode(format!("toText threw: {}", describe(&e))))?;
    text(&rendered)
}

pub fn principal_field(record: &JsValue, name: &str) -> ClientResult<String> {
    principal(&field(record, name)?)
}

/// `opt T`: `[]` is none, `[x]` is some. Bare null/undefined are tolerated.
pub fn opt(value: &JsValue) -> Option<JsValue> {
    if value.is_null() || value.is_undefined() {
        return None;
    }
    if Array::is_array(value) {
        let array = value.unchecked_ref::<Array>();
        return if array.length() == 0 { None } else { Some(array.get(0)) };
    }
    Some(value.clone())
}

/// `vec T` decoded element by element
pub fn vec<T>(value: &JsValue, decode: impl Fn(&JsValue) -> ClientResult<T>) -> ClientResult<Vec<T>> {
    if !Array::is_array(value) {
        return Err(ClientError::Decode(format!("expected vector, got {:?}", value)));
    }
    value.unchecked_ref::<Array>().iter().map(|item| decode(&item)).collect()
}

pub fn bool(value: &JsValue) -> ClientResult<bool> {
    Ok(serde_wasm_bindgen::from_value(value.clone())?)
}

pub fn nat_arg(value: u64) -> JsValue {
    BigInt::from(value).into()
}

pub fn text_arg(value: &str) -> JsValue {
    JsValue::from_str(value)
}

/// Best-effort message from a thrown JS value
pub fn describe(error: &JsValue) -> String {
    if let Some(s) = error.as_string() {
        return s;
    }
    Reflect::get(error, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{:?}", error))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nat() {
        assert_eq!(parse_nat("42").unwrap(), 42);
        assert_eq!(parse_nat("42n").unwrap(), 42);
        assert_eq!(parse_nat("18446744073709551615").unwrap(), u64::MAX);
        assert!(parse_nat("18446744073709551616").is_err());
        assert!(parse_nat("-1").is_err());
    }
}
