use crate::model::last_segment;

use super::draft::{FilterDraft, QueryDraft};
use super::structured::{
    CollectionSelector, CompositeFilter, CompositeOperator, Direction, FieldFilter,
    FieldOperator, FieldReference, Filter, Order, StructuredQuery,
};
use super::value::{ValueType, typed_value};

/// Builds the request for `draft`. Total: bad tokens degrade to defaults.
pub fn translate(draft: &QueryDraft) -> StructuredQuery {
    let filter = match draft.filters.as_slice() {
        [] => None,
        [only] => Some(field_filter(only)),
        many => Some(Filter::CompositeFilter(CompositeFilter {
            op: CompositeOperator::And,
            filters: many.iter().map(field_filter).collect(),
        })),
    };

    let order_by = if draft.order_by.trim().is_empty() {
        Vec::new()
    } else {
        vec![Order {
            field: FieldReference::new(draft.order_by.trim()),
            direction: Direction::from_token(&draft.order_dir),
        }]
    };

    StructuredQuery {
        from: vec![CollectionSelector {
            collection_id: last_segment(&draft.collection_path).to_string(),
        }],
        filter,
        order_by,
        limit: (draft.limit > 0).then_some(draft.limit),
    }
}

fn field_filter(f: &FilterDraft) -> Filter {
    Filter::FieldFilter(FieldFilter {
        field: FieldReference::new(&f.field),
        op: FieldOperator::from_token(&f.op),
        value: typed_value(ValueType::from_token(&f.value_type), &f.value),
    })
}

#[cfg(test)]
#[path = "../tests/query/translate_tests.rs"]
mod tests;
