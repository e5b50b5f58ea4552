use super::{CellValue, TableRecord};

/// Transform applied to a cell before display.
pub type RenderFn = fn(&CellValue<'_>) -> String;

/// Describes one visible table column.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub sortable: bool,
    pub render: Option<RenderFn>,
}

impl Column {
    /// A sortable column rendered with the value's plain string form.
    pub const fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            sortable: true,
            render: None,
        }
    }

    pub const fn unsortable(mut self) -> Self {
        self.sortable = false;
        self
    }

    pub const fn with_render(mut self, render: RenderFn) -> Self {
        self.render = Some(render);
        self
    }

    /// Display text for this column's cell in `record`; empty when absent.
    pub fn render_cell<R: TableRecord>(&self, record: &R) -> String {
        match record.field(self.key) {
            Some(value) => match self.render {
                Some(render) => render(&value),
                None => value.to_string(),
            },
            None => String::new(),
        }
    }
}

pub fn find_column<'c>(columns: &'c [Column], key: &str) -> Option<&'c Column> {
    columns.iter().find(|c| c.key == key)
}
