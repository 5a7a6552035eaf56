//! Query drafts and their translation into store requests.
//!
//! A [`QueryDraft`] is the editable shape behind the query builder: a list of
//! field filters, an optional order, and a limit, plus a cursor over the
//! virtual grid the builder renders. [`translate`] turns a draft into the
//! wire-level [`StructuredQuery`].

mod draft;
mod grid;
mod structured;
mod translate;
mod value;

pub use self::draft::{
    DEFAULT_LIMIT, DIRECTIONS, FilterDraft, OPERATORS, QueryDraft, VALUE_TYPES,
};
pub use self::grid::{Cell, GridCursor, GridRow};
pub use self::structured::{
    CollectionSelector, CompositeFilter, CompositeOperator, Direction, FieldFilter,
    FieldOperator, FieldReference, Filter, Order, StructuredQuery, Value,
};
pub use self::translate::translate;
pub use self::value::{ValueType, auto_value, typed_value};

