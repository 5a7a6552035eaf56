use super::grid::{Cell, GridCursor, GridRow};

pub const DEFAULT_LIMIT: u32 = 50;

pub const OPERATORS: [&str; 10] = [
    "==",
    "!=",
    "<",
    "<=",
    ">",
    ">=",
    "in",
    "not-in",
    "array-contains",
    "array-contains-any",
];

pub const VALUE_TYPES: [&str; 7] = [
    "auto", "string", "integer", "double", "boolean", "null", "array",
];

pub const DIRECTIONS: [&str; 2] = ["ASC", "DESC"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterDraft {
    pub field: String,
    pub op: String,
    pub value_type: String,
    pub value: String,
}

impl Default for FilterDraft {
    fn default() -> Self {
        Self {
            field: String::new(),
            op: "==".to_string(),
            value_type: "auto".to_string(),
            value: String::new(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryDraft {
    pub collection_path: String,
    pub filters: Vec<FilterDraft>,
    pub order_by: String,
    pub order_dir: String,
    pub limit: u32,
    cursor: GridCursor,
}

impl QueryDraft {
    pub fn new(collection_path: &str) -> Self {
        Self {
            collection_path: collection_path.to_string(),
            filters: Vec::new(),
            order_by: String::new(),
            order_dir: DIRECTIONS[0].to_string(),
            limit: DEFAULT_LIMIT,
            cursor: GridCursor::default(),
        }
    }

    /// Back to defaults for the same collection.
    pub fn reset(&mut self) {
        *self = Self::new(&self.collection_path);
    }

    pub fn cursor(&self) -> GridCursor {
        self.cursor
    }

    pub fn row_count(&self) -> usize {
        self.filters.len() + 3
    }

    pub fn row_at(&self, row: usize) -> GridRow {
        let n = self.filters.len();
        if row < n {
            GridRow::Filter(row)
        } else {
            match row - n {
                0 => GridRow::OrderBy,
                1 => GridRow::Limit,
                _ => GridRow::Buttons,
            }
        }
    }

    pub fn active_row(&self) -> GridRow {
        self.row_at(self.cursor.row)
    }

    pub fn active_cell(&self) -> Cell {
        self.active_row().cell(self.cursor.col)
    }

    pub fn move_up(&mut self) {
        let rows = self.row_count();
        self.cursor.row = (self.cursor.row + rows - 1) % rows;
        self.clamp_cursor();
    }

    pub fn move_down(&mut self) {
        self.cursor.row = (self.cursor.row + 1) % self.row_count();
        self.clamp_cursor();
    }

    /// Wraps within the row.
    pub fn move_left(&mut self) {
        let max = self.active_row().max_col();
        self.cursor.col = if self.cursor.col == 0 {
            max
        } else {
            self.cursor.col - 1
        };
    }

    pub fn move_right(&mut self) {
        let max = self.active_row().max_col();
        self.cursor.col = if self.cursor.col >= max {
            0
        } else {
            self.cursor.col + 1
        };
    }

    /// Next cell in reading order, wrapping from the buttons to the first row.
    pub fn next_field(&mut self) {
        if self.cursor.col < self.active_row().max_col() {
            self.cursor.col += 1;
            return;
        }
        self.cursor.row = (self.cursor.row + 1) % self.row_count();
        self.cursor.col = 0;
    }

    pub fn prev_field(&mut self) {
        if self.cursor.col > 0 {
            self.cursor.col -= 1;
            return;
        }
        let rows = self.row_count();
        self.cursor.row = (self.cursor.row + rows - 1) % rows;
        self.cursor.col = self.active_row().max_col();
    }

    pub fn add_filter(&mut self) {
        self.filters.push(FilterDraft::default());
        self.cursor = GridCursor {
            row: self.filters.len() - 1,
            col: 0,
        };
    }

    /// Removes the filter under the cursor. Returns false off a filter row.
    pub fn remove_active_filter(&mut self) -> bool {
        let GridRow::Filter(i) = self.active_row() else {
            return false;
        };
        self.filters.remove(i);
        self.clamp_cursor();
        true
    }

    pub fn clamp_cursor(&mut self) {
        self.cursor.row = self.cursor.row.min(self.row_count() - 1);
        self.cursor.col = self.cursor.col.min(self.active_row().max_col());
    }

    pub fn cell_text(&self, cell: Cell) -> String {
        match cell {
            Cell::Field(i) => self.filter(i).map(|f| f.field.clone()).unwrap_or_default(),
            Cell::Operator(i) => self.filter(i).map(|f| f.op.clone()).unwrap_or_default(),
            Cell::ValueType(i) => self
                .filter(i)
                .map(|f| f.value_type.clone())
                .unwrap_or_default(),
            Cell::Value(i) => self.filter(i).map(|f| f.value.clone()).unwrap_or_default(),
            Cell::OrderField => self.order_by.clone(),
            Cell::OrderDir => self.order_dir.clone(),
            Cell::Limit => self.limit.to_string(),
            Cell::Execute => "Execute".to_string(),
            Cell::Clear => "Clear".to_string(),
        }
    }

    /// Stores typed text into a text cell. Text is trimmed; a limit that is
    /// not a positive integer leaves the previous limit in place.
    pub fn set_cell_text(&mut self, cell: Cell, text: &str) {
        let text = text.trim();
        match cell {
            Cell::Field(i) => {
                if let Some(f) = self.filters.get_mut(i) {
                    f.field = text.to_string();
                }
            }
            Cell::Value(i) => {
                if let Some(f) = self.filters.get_mut(i) {
                    f.value = text.to_string();
                }
            }
            Cell::OrderField => self.order_by = text.to_string(),
            Cell::Limit => {
                if let Ok(n) = text.parse::<u32>() {
                    if n > 0 {
                        self.limit = n;
                    }
                }
            }
            _ => {}
        }
    }

    pub fn set_cell_choice(&mut self, cell: Cell, choice: &str) {
        match cell {
            Cell::Operator(i) => {
                if let Some(f) = self.filters.get_mut(i) {
                    f.op = choice.to_string();
                }
            }
            Cell::ValueType(i) => {
                if let Some(f) = self.filters.get_mut(i) {
                    f.value_type = choice.to_string();
                }
            }
            Cell::OrderDir => self.order_dir = choice.to_string(),
            _ => {}
        }
    }

    fn filter(&self, i: usize) -> Option<&FilterDraft> {
        self.filters.get(i)
    }
}

#[cfg(test)]
#[path = "../tests/query/draft_tests.rs"]
mod tests;
