//! List dialog: columns come from the keys of the row mappings

use indexmap::IndexMap;

use super::DialogBuilder;
use crate::decode::decode_list;
use crate::error::Result;
use crate::kind::DialogKind;
use crate::request::DialogRequest;

/// One row, column name → cell
pub type ListRow = IndexMap<String, String>;

/// `--column` flags for every key the first time it is seen, each row's
/// values following its new columns
pub fn list_args(rows: &[ListRow]) -> Vec<String> {
    let mut args = Vec::new();
    push_rows(&mut Vec::new(), rows, &mut args);
    args
}

fn push_rows(columns: &mut Vec<String>, rows: &[ListRow], args: &mut Vec<String>) {
    for row in rows {
        for key in row.keys() {
            if !columns.contains(key) {
                args.push("--column".to_string());
                args.push(key.clone());
                columns.push(key.clone());
            }
        }
        args.extend(row.values().cloned());
    }
}

#[derive(Debug, Clone)]
pub struct ListDialog {
    request: DialogRequest,
    columns: Vec<String>,
    rows: Vec<ListRow>,
}

impl DialogBuilder for ListDialog {
    fn request_mut(&mut self) -> &mut DialogRequest {
        &mut self.request
    }

    fn into_request(self) -> Result<DialogRequest> {
        let mut request = self.request;
        let mut columns = Vec::new();
        for column in self.columns {
            if !columns.contains(&column) {
                request.trailing.push("--column".to_string());
                request.trailing.push(column.clone());
                columns.push(column);
            }
        }
        push_rows(&mut columns, &self.rows, &mut request.trailing);
        Ok(request)
    }
}

impl Default for ListDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl ListDialog {
    pub fn new() -> Self {
        Self {
            request: DialogRequest::new(DialogKind::List),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.request.options.set("text", text);
        self
    }

    /// Declare a column ahead of the rows (e.g. the tick column of a
    /// checklist)
    pub fn column(mut self, name: impl Into<String>) -> Self {
        self.columns.push(name.into());
        self
    }

    pub fn row<K, V>(mut self, cells: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.rows
            .push(cells.into_iter().map(|(k, v)| (k.into(), v.into())).collect());
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = ListRow>) -> Self {
        self.rows.extend(rows);
        self
    }

    /// Column whose value is printed on selection (`ALL` for every column)
    pub fn print_column(mut self, column: impl Into<String>) -> Self {
        self.request.options.set("print-column", column);
        self
    }

    pub fn checklist(mut self) -> Self {
        self.request.options.switch("checklist");
        self
    }

    pub fn radiolist(mut self) -> Self {
        self.request.options.switch("radiolist");
        self
    }

    pub fn multiple(mut self) -> Self {
        self.request.options.switch("multiple");
        self
    }

    pub fn hide_header(mut self) -> Self {
        self.request.options.switch("hide-header");
        self
    }

    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.request.options.set("separator", separator);
        self
    }

    /// Raw selection line
    pub fn prompt(self) -> Result<String> {
        self.launch()?.read()
    }

    /// Selection split on the separator (for `multiple` / `checklist`)
    pub fn prompt_selection(self) -> Result<Vec<String>> {
        let separator = self.request.separator();
        let line = self.prompt()?;
        Ok(decode_list(&line, &separator))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[(&str, &str)]) -> ListRow {
        cells
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_list_args_deduplicates_columns() {
        let rows = vec![row(&[("a", "1"), ("b", "2")]), row(&[("a", "3"), ("b", "4")])];
        assert_eq!(
            list_args(&rows),
            vec!["--column", "a", "--column", "b", "1", "2", "3", "4"]
        );
    }

    #[test]
    fn test_list_args_new_key_in_later_row() {
        let rows = vec![row(&[("a", "1")]), row(&[("a", "2"), ("c", "x")])];
        assert_eq!(
            list_args(&rows),
            vec!["--column", "a", "1", "--column", "c", "2", "x"]
        );
    }

    #[test]
    fn test_list_dialog_args() {
        let args = ListDialog::new()
            .binary("zenity")
            .text("Pick a version")
            .print_column("ALL")
            .row([("Version", "2.0.77"), ("Channel", "stable")])
            .row([("Version", "2.1.0"), ("Channel", "beta")])
            .args()
            .unwrap();
        assert_eq!(
            args,
            vec![
                "zenity",
                "--list",
                "--text",
                "Pick a version",
                "--print-column",
                "ALL",
                "--column",
                "Version",
                "--column",
                "Channel",
                "2.0.77",
                "stable",
                "2.1.0",
                "beta",
            ]
        );
    }

    #[test]
    fn test_declared_columns_come_first() {
        let args = ListDialog::new()
            .binary("zenity")
            .checklist()
            .column("Pick")
            .row([("Pick", "TRUE"), ("Item", "eggs")])
            .args()
            .unwrap();
        assert_eq!(
            args,
            vec![
                "zenity",
                "--list",
                "--checklist",
                "--column",
                "Pick",
                "--column",
                "Item",
                "TRUE",
                "eggs",
            ]
        );
    }
}
