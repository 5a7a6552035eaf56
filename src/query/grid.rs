/// One row of the builder grid: each filter, then order-by, limit, buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridRow {
    Filter(usize),
    OrderBy,
    Limit,
    Buttons,
}

impl GridRow {
    pub fn max_col(self) -> usize {
        match self {
            GridRow::Filter(_) => 3,
            GridRow::OrderBy => 1,
            GridRow::Limit => 0,
            GridRow::Buttons => 1,
        }
    }

    pub fn cell(self, col: usize) -> Cell {
        match (self, col.min(self.max_col())) {
            (GridRow::Filter(i), 0) => Cell::Field(i),
            (GridRow::Filter(i), 1) => Cell::Operator(i),
            (GridRow::Filter(i), 2) => Cell::ValueType(i),
            (GridRow::Filter(i), _) => Cell::Value(i),
            (GridRow::OrderBy, 0) => Cell::OrderField,
            (GridRow::OrderBy, _) => Cell::OrderDir,
            (GridRow::Limit, _) => Cell::Limit,
            (GridRow::Buttons, 0) => Cell::Execute,
            (GridRow::Buttons, _) => Cell::Clear,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Field(usize),
    Operator(usize),
    ValueType(usize),
    Value(usize),
    OrderField,
    OrderDir,
    Limit,
    Execute,
    Clear,
}

impl Cell {
    /// Cells edited as free text.
    pub fn is_text(self) -> bool {
        matches!(
            self,
            Cell::Field(_) | Cell::Value(_) | Cell::OrderField | Cell::Limit
        )
    }

    /// Fixed choice lists for selector cells.
    pub fn choices(self) -> Option<&'static [&'static str]> {
        match self {
            Cell::Operator(_) => Some(&super::OPERATORS),
            Cell::ValueType(_) => Some(&super::VALUE_TYPES),
            Cell::OrderDir => Some(&super::DIRECTIONS),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridCursor {
    pub row: usize,
    pub col: usize,
}
