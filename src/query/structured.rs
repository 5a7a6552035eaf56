//! Wire shape of a structured query request.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredQuery {
    pub from: Vec<CollectionSelector>,

    #[serde(rename = "where", default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<Filter>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub order_by: Vec<Order>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionSelector {
    pub collection_id: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Filter {
    FieldFilter(FieldFilter),
    CompositeFilter(CompositeFilter),
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldFilter {
    pub field: FieldReference,
    pub op: FieldOperator,
    pub value: Value,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CompositeFilter {
    pub op: CompositeOperator,
    pub filters: Vec<Filter>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CompositeOperator {
    And,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldReference {
    pub field_path: String,
}

impl FieldReference {
    pub fn new(path: &str) -> Self {
        Self {
            field_path: path.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FieldOperator {
    Equal,
    NotEqual,
    LessThan,
    LessThanOrEqual,
    GreaterThan,
    GreaterThanOrEqual,
    In,
    NotIn,
    ArrayContains,
    ArrayContainsAny,
}

impl FieldOperator {
    /// Maps symbolic (`>=`, `not-in`) and canonical (`GREATER_THAN_OR_EQUAL`)
    /// tokens. Anything unrecognized is equality.
    pub fn from_token(token: &str) -> Self {
        let token = token.trim();
        match token {
            "==" | "=" => return FieldOperator::Equal,
            "!=" => return FieldOperator::NotEqual,
            "<" => return FieldOperator::LessThan,
            "<=" => return FieldOperator::LessThanOrEqual,
            ">" => return FieldOperator::GreaterThan,
            ">=" => return FieldOperator::GreaterThanOrEqual,
            _ => {}
        }
        match token.to_ascii_uppercase().replace('-', "_").as_str() {
            "NOT_EQUAL" => FieldOperator::NotEqual,
            "LESS_THAN" => FieldOperator::LessThan,
            "LESS_THAN_OR_EQUAL" => FieldOperator::LessThanOrEqual,
            "GREATER_THAN" => FieldOperator::GreaterThan,
            "GREATER_THAN_OR_EQUAL" => FieldOperator::GreaterThanOrEqual,
            "IN" => FieldOperator::In,
            "NOT_IN" => FieldOperator::NotIn,
            "ARRAY_CONTAINS" => FieldOperator::ArrayContains,
            "ARRAY_CONTAINS_ANY" => FieldOperator::ArrayContainsAny,
            _ => FieldOperator::Equal,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub field: FieldReference,
    pub direction: Direction,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Direction {
    Ascending,
    Descending,
}

impl Direction {
    pub fn from_token(token: &str) -> Self {
        match token.trim() {
            "DESC" | "DESCENDING" => Direction::Descending,
            _ => Direction::Ascending,
        }
    }
}

/// Typed literal as the store expects it. Integers travel as decimal strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    NullValue(()),
    BooleanValue(bool),
    IntegerValue(String),
    DoubleValue(f64),
    StringValue(String),
    ArrayValue { values: Vec<Value> },
}
