//! Value Codec Module
//!
//! The only translation layer between JSON text and structured values.
//!
//! Numbers follow double-precision semantics: every parsed number is folded
//! through an `f64` and written back in ECMAScript `Number#toString` form.
//! Equal numbers therefore always serialize to the same text, which keeps
//! cache keys deterministic. Literals outside the f64 range become `null`.

use serde_json::{Number, Value};
use thiserror::Error;

/// Deepest array/object nesting the parser accepts.
///
/// Values nested deeper could be built by mutation but never parsed back
/// from their own text.
pub const MAX_DEPTH: usize = 127;

// == Codec Error ==
/// Failure to turn text into a value.
#[derive(Error, Debug)]
pub enum CodecError {
    /// The text is not valid JSON
    #[error("Malformed JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

// == Parse ==
/// Parses JSON text into a normalized value.
///
/// Object keys keep the order in which they were encountered.
pub fn parse(text: &str) -> Result<Value, CodecError> {
    let mut value: Value = serde_json::from_str(text)?;
    normalize(&mut value);
    Ok(value)
}

// == Serialize ==
/// Serializes a value to its canonical text.
///
/// Objects emit keys in stored order, arrays in element order, and no
/// insignificant whitespace is produced.
pub fn serialize(value: &Value) -> String {
    value.to_string()
}

// == Depth ==
/// Nesting depth of a value: 0 for scalars, 1 for a flat array or object.
pub fn depth(value: &Value) -> usize {
    match value {
        Value::Array(items) => 1 + items.iter().map(depth).max().unwrap_or(0),
        Value::Object(map) => 1 + map.values().map(depth).max().unwrap_or(0),
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => 0,
    }
}

// == Number Normalization ==
/// Rewrites every number in `value` to its canonical double-precision form.
pub fn normalize(value: &mut Value) {
    match value {
        Value::Number(n) => {
            let canonical = canonical_number(n);
            *value = canonical;
        }
        Value::Array(items) => items.iter_mut().for_each(normalize),
        Value::Object(map) => map.values_mut().for_each(normalize),
        Value::Null | Value::Bool(_) | Value::String(_) => {}
    }
}

/// Numbers keep their source literal, so this is the only rounding step.
fn canonical_number(n: &Number) -> Value {
    let f: f64 = match n.to_string().parse() {
        Ok(f) => f,
        Err(_) => return Value::Null,
    };
    if !f.is_finite() {
        return Value::Null;
    }

    serde_json::from_str::<Number>(&ecmascript_number(f))
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

// == ECMAScript Number Formatting ==
/// Formats a finite f64 the way ECMAScript's `Number#toString` does:
/// shortest round-trip digits, plain notation for decimal exponents in
/// `[-6, 21)`, and `d.ddde±x` otherwise.
fn ecmascript_number(f: f64) -> String {
    // Also folds -0 into 0.
    if f == 0.0 {
        return "0".to_string();
    }
    let sign = if f < 0.0 { "-" } else { "" };

    // Shortest round-trip digits in scientific form, e.g. "1.2345e-7".
    let sci = format!("{:e}", f.abs());
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    let k = digits.len() as i32;
    let n = exponent.parse::<i32>().unwrap_or(0) + 1;

    let body = if k <= n && n <= 21 {
        format!("{}{}", digits, "0".repeat((n - k) as usize))
    } else if 0 < n && n <= 21 {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{}.{}", int_part, frac_part)
    } else if -6 < n && n <= 0 {
        format!("0.{}{}", "0".repeat((-n) as usize), digits)
    } else {
        let exp = n - 1;
        let exp_sign = if exp < 0 { '-' } else { '+' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{}e{}{}", lead, exp_sign, exp.abs())
        } else {
            format!("{}.{}e{}{}", lead, rest, exp_sign, exp.abs())
        }
    };

    format!("{}{}", sign, body)
}
