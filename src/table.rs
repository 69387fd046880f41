use crate::schema::{Field, FieldKind};
use crate::{Error, Result};

/// A scraped HTML table, every cell still text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn column(&self, name: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|header| header == name)
            .ok_or_else(|| Error::MissingColumn(name.into()))
    }

    /// Keeps the rows whose `col` cell passes `keep`, in order.
    /// A row too short to have that cell fails the whole table.
    pub fn retain_by(&mut self, col: usize, mut keep: impl FnMut(&str) -> bool) -> Result<()> {
        let column = self.headers.get(col).cloned().unwrap_or_default();
        for (row_num, row) in std::mem::take(&mut self.rows).into_iter().enumerate() {
            let cell = row.get(col).ok_or_else(|| Error::MissingCell {
                column: column.clone(),
                row: row_num,
            })?;
            if keep(cell.as_str()) {
                self.rows.push(row);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Int(u32),
    /// `None` is a missing value.
    Float(Option<f64>),
}

impl Cell {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<u32> {
        match self {
            Cell::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Missing values read as zero.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Cell::Float(value) => Some(value.unwrap_or(0.0)),
            _ => None,
        }
    }
}

/// A table cast to a schema: one cell per schema field, in schema order.
#[derive(Debug, Clone, PartialEq)]
pub struct TypedTable {
    pub fields: &'static [Field],
    pub rows: Vec<Vec<Cell>>,
}

impl TypedTable {
    /// Casts every schema column of `raw`. Columns `raw` has beyond the schema are dropped.
    /// A single bad cell fails the whole table.
    pub fn cast(raw: &RawTable, fields: &'static [Field]) -> Result<Self> {
        let columns = fields
            .iter()
            .map(|field| raw.column(field.name))
            .collect::<Result<Vec<_>>>()?;

        let rows = raw
            .rows
            .iter()
            .enumerate()
            .map(|(row_num, row)| {
                fields
                    .iter()
                    .zip(&columns)
                    .map(|(field, &col)| {
                        row.get(col)
                            .ok_or_else(|| Error::MissingCell {
                                column: field.name.into(),
                                row: row_num,
                            })
                            .and_then(|value| cast_cell(field, row_num, value))
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TypedTable { fields, rows })
    }

    pub fn index_of(&self, name: &str) -> Result<usize> {
        self.fields
            .iter()
            .position(|field| field.name == name)
            .ok_or_else(|| Error::MissingColumn(name.into()))
    }

    /// Reads one cell through `read`, e.g. `Cell::as_int`.
    /// A cell of another kind, or no cell at all, is a cast error.
    pub fn read<'a, T>(&'a self, row: usize, col: usize, read: impl FnOnce(&'a Cell) -> Option<T>) -> Result<T> {
        let cell = self.rows.get(row).and_then(|cells| cells.get(col));
        cell.and_then(read).ok_or_else(|| Error::Cast {
            column: self.fields.get(col).map_or("", |field| field.name).into(),
            row,
            value: cell.map(|cell| format!("{cell:?}")).unwrap_or_default(),
        })
    }
}

fn cast_cell(field: &Field, row: usize, value: &str) -> Result<Cell> {
    let cast_err = || Error::Cast {
        column: field.name.into(),
        row,
        value: value.into(),
    };
    let trimmed = value.trim();

    match field.kind {
        FieldKind::Text => Ok(Cell::Text(value.to_string())),
        FieldKind::Integer => trimmed.parse().map(Cell::Int).map_err(|_| cast_err()),
        FieldKind::Count | FieldKind::Ratio { .. } if trimmed.is_empty() => Ok(Cell::Float(None)),
        FieldKind::Count | FieldKind::Ratio { .. } => trimmed
            .parse::<f64>()
            .map(|num| Cell::Float(Some(num).filter(|num| !num.is_nan())))
            .map_err(|_| cast_err()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::FieldKind::{Count, Integer, Ratio, Text};

    const SCHEMA: &[Field] = &[
        Field { name: "Player", kind: Text },
        Field { name: "Age", kind: Integer },
        Field { name: "3PA", kind: Count },
        Field { name: "3P%", kind: Ratio { attempts: "3PA" } },
    ];

    fn raw(rows: &[[&str; 5]]) -> RawTable {
        RawTable {
            headers: ["Rk", "Player", "Age", "3PA", "3P%"].map(String::from).to_vec(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|cell| cell.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn casts_by_field_kind_and_drops_undeclared_columns() {
        let table = TypedTable::cast(&raw(&[["1", "A", "25", "4", ".250"], ["2", "B", "31", "0", ""]]), SCHEMA).unwrap();
        assert_eq!(
            table.rows,
            vec![
                vec![Cell::Text("A".into()), Cell::Int(25), Cell::Float(Some(4.0)), Cell::Float(Some(0.25))],
                vec![Cell::Text("B".into()), Cell::Int(31), Cell::Float(Some(0.0)), Cell::Float(None)],
            ]
        );
    }

    #[test]
    fn nan_is_missing() {
        let table = TypedTable::cast(&raw(&[["1", "A", "25", "0", "NaN"]]), SCHEMA).unwrap();
        assert_eq!(table.rows[0][3], Cell::Float(None));
    }

    #[test]
    fn bad_integer_fails_whole_table() {
        let err = TypedTable::cast(&raw(&[["1", "A", "25", "1", ""], ["2", "B", "", "1", ""]]), SCHEMA).unwrap_err();
        match err {
            Error::Cast { column, row, value } => {
                assert_eq!((column.as_str(), row, value.as_str()), ("Age", 1, ""));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn bad_float_fails() {
        let err = TypedTable::cast(&raw(&[["1", "A", "25", "four", ""]]), SCHEMA).unwrap_err();
        assert!(matches!(err, Error::Cast { .. }));
    }

    #[test]
    fn short_row_is_an_error_not_a_panic() {
        let mut table = raw(&[["1", "A", "25", "4", ".250"]]);
        table.rows[0].truncate(3);
        let err = TypedTable::cast(&table, SCHEMA).unwrap_err();
        assert!(matches!(err, Error::MissingCell { column, row: 0 } if column == "3PA"));
    }

    #[test]
    fn retain_by_keeps_order_and_rejects_short_rows() {
        let mut table = raw(&[["1", "A", "25", "4", ""], ["2", "B", "30", "4", ""], ["3", "C", "22", "4", ""]]);
        table.retain_by(1, |player| player != "B").unwrap();
        assert_eq!(table.rows.iter().map(|row| row[1].as_str()).collect::<Vec<_>>(), ["A", "C"]);

        table.rows[1].truncate(1);
        let err = table.retain_by(1, |_| true).unwrap_err();
        assert!(matches!(err, Error::MissingCell { column, row: 1 } if column == "Player"));
    }

    #[test]
    fn read_rejects_the_wrong_kind() {
        let table = TypedTable::cast(&raw(&[["1", "A", "25", "4", ""]]), SCHEMA).unwrap();
        assert_eq!(table.read(0, 1, Cell::as_int).unwrap(), 25);
        assert_eq!(table.read(0, 3, Cell::as_float).unwrap(), 0.0);
        assert!(matches!(
            table.read(0, 1, Cell::as_text),
            Err(Error::Cast { column, row: 0, .. }) if column == "Age"
        ));
        assert!(matches!(table.read(5, 0, Cell::as_text), Err(Error::Cast { row: 5, .. })));
    }

    #[test]
    fn missing_schema_column_fails() {
        let mut table = raw(&[]);
        table.headers.pop();
        let err = TypedTable::cast(&table, SCHEMA).unwrap_err();
        assert!(matches!(err, Error::MissingColumn(name) if name == "3P%"));
    }
}
