use super::structured::Value;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValueType {
    Auto,
    String,
    Integer,
    Double,
    Boolean,
    Null,
    Array,
}

impl ValueType {
    /// Unknown tokens fall back to `Auto`.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "string" => ValueType::String,
            "integer" | "int" => ValueType::Integer,
            "double" | "float" => ValueType::Double,
            "boolean" | "bool" => ValueType::Boolean,
            "null" => ValueType::Null,
            "array" => ValueType::Array,
            _ => ValueType::Auto,
        }
    }
}

/// Infers null, then boolean, then integer, then double, then string.
pub fn auto_value(literal: &str) -> Value {
    let s = literal.trim();
    if s.is_empty() || s == "null" {
        return Value::NullValue(());
    }
    if s.eq_ignore_ascii_case("true") {
        return Value::BooleanValue(true);
    }
    if s.eq_ignore_ascii_case("false") {
        return Value::BooleanValue(false);
    }
    if let Ok(i) = s.parse::<i64>() {
        return Value::IntegerValue(i.to_string());
    }
    if let Ok(f) = s.parse::<f64>() {
        if f.is_finite() {
            return Value::DoubleValue(f);
        }
    }
    Value::StringValue(s.to_string())
}

/// Forces `literal` into `ty`. Unparseable numbers become zero.
pub fn typed_value(ty: ValueType, literal: &str) -> Value {
    match ty {
        ValueType::Auto => auto_value(literal),
        ValueType::String => Value::StringValue(literal.to_string()),
        ValueType::Integer => {
            let i = literal.trim().parse::<i64>().unwrap_or(0);
            Value::IntegerValue(i.to_string())
        }
        ValueType::Double => {
            let f = literal
                .trim()
                .parse::<f64>()
                .ok()
                .filter(|f| f.is_finite())
                .unwrap_or(0.0);
            Value::DoubleValue(f)
        }
        ValueType::Boolean => {
            let s = literal.trim();
            Value::BooleanValue(s.eq_ignore_ascii_case("true") || s == "1")
        }
        ValueType::Null => Value::NullValue(()),
        ValueType::Array => Value::ArrayValue {
            values: literal
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .map(auto_value)
                .collect(),
        },
    }
}
