//! Delimited-text source and sink for tables
//!
//! Cells are typed per column when reading:
//!
//! - every non-empty cell parses as a number: a numeric column, with empty
//!   cells read as `NaN`
//! - every cell is `True`/`False` (or the `true`/`TRUE` spellings): a boolean
//!   column
//! - anything else: a text column
//!
//! Without a header the columns are named by position, `"0"`, `"1"`, ….

use std::{
    fs::File,
    io::{self, BufReader, Read, Write},
    path::Path,
};

use anyhow::Context as _;
use tabscope_dataset::{error::DatasetError, table::Table, value::Value};

/// Layout of a delimited file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvFormat {
    pub has_header: bool,
    pub separator: u8,
}

impl Default for CsvFormat {
    fn default() -> Self {
        Self {
            has_header: true,
            separator: b',',
        }
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum TableIoError {
    #[display("malformed delimited data: {_0}")]
    Csv(csv::Error),
    #[display("I/O error: {_0}")]
    Io(io::Error),
    #[display("invalid table: {_0}")]
    Table(DatasetError),
}

/// Reads a table from delimited text.
pub fn read_table<R>(reader: R, format: CsvFormat) -> Result<Table, TableIoError>
where
    R: Read,
{
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(format.has_header)
        .delimiter(format.separator)
        .from_reader(reader);

    let records = reader.records().collect::<Result<Vec<_>, _>>()?;
    let names = if format.has_header {
        reader
            .headers()?
            .iter()
            .map(str::to_owned)
            .collect::<Vec<_>>()
    } else {
        let width = records.first().map_or(0, csv::StringRecord::len);
        (0..width).map(|i| i.to_string()).collect()
    };

    let columns = names
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let cells = records
                .iter()
                .map(|record| record.get(i).unwrap_or_default())
                .collect::<Vec<_>>();
            (name, infer_column(&cells))
        })
        .collect();
    Ok(Table::new(columns)?)
}

/// Writes a table as delimited text.
///
/// Booleans are written as `True`/`False` and `NaN` numbers as empty cells,
/// so the output reads back to the same column types.
pub fn write_table<W>(writer: W, table: &Table, format: CsvFormat) -> Result<(), TableIoError>
where
    W: Write,
{
    let mut writer = csv::WriterBuilder::new()
        .delimiter(format.separator)
        .from_writer(writer);
    if format.has_header {
        writer.write_record(table.names())?;
    }
    for row in table.rows() {
        writer.write_record(row.into_iter().map(format_cell))?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_table_file(path: &Path, format: CsvFormat) -> anyhow::Result<Table> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open table: {}", path.display()))?;
    let table = read_table(BufReader::new(file), format)
        .with_context(|| format!("Failed to read table: {}", path.display()))?;
    log::info!(
        "Loaded {} rows x {} columns from {}",
        table.num_rows(),
        table.num_columns(),
        path.display()
    );
    Ok(table)
}

fn infer_column(cells: &[&str]) -> Vec<Value> {
    let mut non_empty = cells.iter().filter(|c| !c.trim().is_empty()).peekable();
    if non_empty.peek().is_some() && non_empty.all(|c| parse_number(c).is_some()) {
        return cells
            .iter()
            .map(|c| Value::from(parse_number(c).unwrap_or(f64::NAN)))
            .collect();
    }

    if !cells.is_empty() && cells.iter().all(|c| parse_bool(c).is_some()) {
        return cells
            .iter()
            .filter_map(|c| parse_bool(c))
            .map(Value::from)
            .collect();
    }

    cells.iter().map(|&c| Value::from(c)).collect()
}

// Only finite numbers count, so words such as `nan` or `inf` stay text.
fn parse_number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_bool(cell: &str) -> Option<bool> {
    match cell.trim() {
        "True" | "true" | "TRUE" => Some(true),
        "False" | "false" | "FALSE" => Some(false),
        _ => None,
    }
}

fn format_cell(value: &Value) -> String {
    match value {
        Value::Number(n) if n.is_nan() => String::new(),
        other => other.to_string(),
    }
}
