//! Spreadsheet ingestion
//!
//! Reads the named sheet into an in-memory table. The first spreadsheet
//! column is a row key and is discarded at load time; the remaining columns
//! are addressed by header name. Service-date columns vary in number: the
//! fixed `Data_Atendimentos` column comes first, followed by every
//! positional (unnamed) column in sheet order.

use calamine::{open_workbook, Data, Reader, Xlsx};
use chrono::NaiveDate;
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Fixed, named service-date column
pub const SERVICE_DATES_COLUMN: &str = "Data_Atendimentos";
/// Prefix given to positional date columns by row-oriented exports
pub const POSITIONAL_COLUMN_PREFIX: &str = "Unnamed:";

const NAME_COLUMN: &str = "Nome";
const CPF_COLUMN: &str = "CPF";
const VALUE_COLUMN: &str = "Valor_Total";
const RECEIPT_DATE_COLUMN: &str = "Data_Recibo";
const FLAG_COLUMN: &str = "Gerar_Recibo";

/// Errors that can occur while loading the spreadsheet
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read spreadsheet {file}: {source}")]
    Read {
        file: String,
        #[source]
        source: calamine::XlsxError,
    },

    #[error("sheet {0} has no header row")]
    EmptySheet(String),

    #[error("required column {0} is missing")]
    MissingColumn(&'static str),
}

/// Per-row decision cell: generate a receipt or not
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationFlag {
    Generate,
    Skip,
}

impl GenerationFlag {
    /// `"S"` generates, `"N"` skips; anything else is an invalid cell and
    /// returns `None` for the caller to log
    pub fn parse(cell: &str) -> Option<Self> {
        match cell.trim() {
            "S" => Some(GenerationFlag::Generate),
            "N" => Some(GenerationFlag::Skip),
            _ => None,
        }
    }
}

/// The loaded sheet: headers plus raw data rows
#[derive(Debug)]
pub struct SheetTable {
    headers: Vec<String>,
    rows: Vec<Vec<Data>>,
    service_date_columns: Vec<usize>,
}

impl SheetTable {
    /// Open the workbook and read the named sheet
    pub fn load(path: &Path, sheet: &str) -> Result<Self, LoadError> {
        info!(file = %path.display(), sheet, "reading spreadsheet");

        let read_err = |source| LoadError::Read {
            file: path.display().to_string(),
            source,
        };
        let mut workbook: Xlsx<_> = open_workbook(path).map_err(read_err)?;
        let range = workbook.worksheet_range(sheet).map_err(read_err)?;

        let mut rows = range.rows();
        let header_row = rows
            .next()
            .ok_or_else(|| LoadError::EmptySheet(sheet.to_string()))?;

        // The first column is the spreadsheet's row key; drop it
        let headers: Vec<String> = header_row.iter().skip(1).map(cell_text).collect();
        let data_rows: Vec<Vec<Data>> = rows
            .map(|row| row.iter().skip(1).cloned().collect())
            .collect();

        Self::from_parts(headers, data_rows)
    }

    fn from_parts(headers: Vec<String>, rows: Vec<Vec<Data>>) -> Result<Self, LoadError> {
        for required in [
            NAME_COLUMN,
            CPF_COLUMN,
            VALUE_COLUMN,
            RECEIPT_DATE_COLUMN,
            FLAG_COLUMN,
            SERVICE_DATES_COLUMN,
        ] {
            if !headers.iter().any(|h| h == required) {
                return Err(LoadError::MissingColumn(required));
            }
        }

        let service_date_columns = service_date_columns(&headers);
        Ok(Self {
            headers,
            rows,
            service_date_columns,
        })
    }

    fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Iterate the data rows in sheet order
    pub fn rows(&self) -> impl Iterator<Item = RowView<'_>> {
        self.rows.iter().map(move |cells| RowView { table: self, cells })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Indices of the service-date columns: the fixed one first, then every
/// positional column in header order
///
/// Positional columns carry either an empty header (raw xlsx) or the
/// `Unnamed:` prefix (row-oriented exports). Zero positional columns is
/// valid: only the fixed column remains.
pub fn service_date_columns(headers: &[String]) -> Vec<usize> {
    let mut columns: Vec<usize> = headers
        .iter()
        .enumerate()
        .filter(|(_, h)| h.is_empty() || h.starts_with(POSITIONAL_COLUMN_PREFIX))
        .map(|(i, _)| i)
        .collect();

    if let Some(fixed) = headers.iter().position(|h| h == SERVICE_DATES_COLUMN) {
        columns.insert(0, fixed);
    }

    columns
}

/// One data row addressed through the table's headers
pub struct RowView<'a> {
    table: &'a SheetTable,
    cells: &'a [Data],
}

impl RowView<'_> {
    fn cell(&self, name: &str) -> Option<&Data> {
        self.table.column(name).and_then(|i| self.cells.get(i))
    }

    pub fn name(&self) -> String {
        self.cell(NAME_COLUMN).map(cell_text).unwrap_or_default()
    }

    pub fn cpf(&self) -> String {
        self.cell(CPF_COLUMN).map(cell_text).unwrap_or_default()
    }

    pub fn total_value(&self) -> f64 {
        match self.cell(VALUE_COLUMN) {
            Some(Data::Float(f)) => *f,
            Some(Data::Int(i)) => *i as f64,
            Some(Data::String(s)) => s.trim().replace(',', ".").parse().unwrap_or(0.0),
            _ => 0.0,
        }
    }

    /// Signature date; an empty cell means "use today" downstream
    pub fn receipt_date(&self) -> Option<NaiveDate> {
        self.cell(RECEIPT_DATE_COLUMN).and_then(cell_date)
    }

    /// Raw generation-flag text, for `GenerationFlag::parse`
    pub fn flag(&self) -> String {
        self.cell(FLAG_COLUMN).map(cell_text).unwrap_or_default()
    }

    /// Dates under the identified service-date columns, blanks skipped,
    /// order preserved
    pub fn service_dates(&self) -> Vec<NaiveDate> {
        self.table
            .service_date_columns
            .iter()
            .filter_map(|&i| self.cells.get(i))
            .filter_map(cell_date)
            .collect()
    }
}

/// Text content of a cell, trimmed; numeric cells format without a spurious
/// fraction (a CPF typed as a number must keep its digits)
fn cell_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{f:.0}"),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Date content of a cell: native Excel datetimes, ISO text, or the
/// `DD/MM/YYYY` form used when the sheet stores dates as text
fn cell_date(cell: &Data) -> Option<NaiveDate> {
    match cell {
        Data::DateTime(dt) => dt.as_datetime().map(|ndt| ndt.date()),
        Data::DateTimeIso(s) => NaiveDate::parse_from_str(&s[..10.min(s.len())], "%Y-%m-%d").ok(),
        Data::String(s) => NaiveDate::parse_from_str(s.trim(), "%d/%m/%Y").ok(),
        _ => None,
    }
}
