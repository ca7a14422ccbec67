//! Labeled 2-D datasets and their HTML rendering.
use std::collections::BTreeMap;

use maud::{html, Markup, PreEscaped};
use serde::Serialize;

use crate::error::ReportError;
use crate::keys;

/// Display options for a rendered table.
///
/// The typed fields cover the options the inline table script understands;
/// `extra` is an opaque key/value bag serialized verbatim into the init
/// options for engine-specific extras.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableConfig {
    /// Enable the client-side row filter box.
    pub searchable: bool,
    /// Paginate long tables.
    pub paging: bool,
    /// Enable column sorting on header click.
    pub sortable: bool,
    /// Include the row-label column in the output.
    #[serde(skip)]
    pub index: bool,
    /// Rows per page when paging is enabled.
    pub per_page: usize,
    /// Passthrough options, merged into the init JSON unmodified.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            searchable: true,
            paging: true,
            sortable: true,
            index: false,
            per_page: 10,
            extra: BTreeMap::new(),
        }
    }
}

impl TableConfig {
    /// Serialize the options consumed by the inline table script.
    pub fn to_options_json(&self) -> String {
        // A struct of bools and strings cannot fail to serialize.
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// A labeled 2-D dataset: named columns, string cells, optional row labels.
#[derive(Debug, Clone, Default)]
pub struct DataTable {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
    index: Option<Vec<String>>,
}

impl DataTable {
    /// Create an empty table with the given column names.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            index: None,
        }
    }

    /// Append one row; its length must match the number of columns.
    pub fn push_row(&mut self, row: Vec<String>) -> Result<(), ReportError> {
        if row.len() != self.columns.len() {
            return Err(ReportError::InvalidArgument(format!(
                "row has {} cells but the table has {} columns",
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Build a table from parallel columns of equal length.
    pub fn from_columns(
        names: Vec<String>,
        columns: Vec<Vec<String>>,
    ) -> Result<Self, ReportError> {
        if names.len() != columns.len() {
            return Err(ReportError::InvalidArgument(format!(
                "{} column names given for {} columns",
                names.len(),
                columns.len()
            )));
        }
        let n_rows = columns.first().map_or(0, Vec::len);
        if columns.iter().any(|column| column.len() != n_rows) {
            return Err(ReportError::InvalidArgument(
                "columns must all have the same length".to_string(),
            ));
        }
        let rows = (0..n_rows)
            .map(|i| columns.iter().map(|column| column[i].clone()).collect())
            .collect();
        Ok(Self {
            columns: names,
            rows,
            index: None,
        })
    }

    /// Attach row labels, shown when rendering with `index` enabled.
    pub fn with_index(mut self, labels: Vec<String>) -> Result<Self, ReportError> {
        if labels.len() != self.rows.len() {
            return Err(ReportError::InvalidArgument(format!(
                "{} row labels given for {} rows",
                labels.len(),
                self.rows.len()
            )));
        }
        self.index = Some(labels);
        Ok(self)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Render the table to markup plus the script that wires up searching,
    /// sorting and pagination. The element id is freshly generated, so every
    /// rendered copy of a table is independent on the page.
    pub fn to_markup(&self, config: &TableConfig) -> Markup {
        let id = keys::element_id("table");
        let options = config.to_options_json();
        html! {
            div class="table-wrap" {
                table id=(id) class="data-table" {
                    thead {
                        tr {
                            @if config.index { th {} }
                            @for column in &self.columns { th { (column) } }
                        }
                    }
                    tbody {
                        @for (i, row) in self.rows.iter().enumerate() {
                            tr {
                                @if config.index { td { (self.row_label(i)) } }
                                @for cell in row { td { (cell) } }
                            }
                        }
                    }
                }
            }
            script {
                (PreEscaped(format!("initTable(\"{}\", {});", id, options)))
            }
        }
    }

    fn row_label(&self, i: usize) -> String {
        // Rows may have been appended after the labels were attached; fall
        // back to the row number rather than index out of bounds.
        match self.index.as_ref().and_then(|labels| labels.get(i)) {
            Some(label) => label.clone(),
            None => (i + 1).to_string(),
        }
    }
}
