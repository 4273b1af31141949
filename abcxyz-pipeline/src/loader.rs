//! CSV sales data loader.
//!
//! Parses sales CSV files into `SalesRecord` structs. The source exports
//! this came from rename columns before ingestion; here the renaming is an
//! explicit, enumerated alias table applied once while resolving headers.
//! Expected canonical columns:
//!   item_id, period, quantity, revenue

use std::io::Read;

use crate::error::{AnalysisError, AnalysisResult};
use crate::record::validate_record;
use crate::types::SalesRecord;

/// Accepted header names for each canonical column, tried in order,
/// case-insensitively. The defaults cover both the canonical names and the
/// retail-export headers the original dataset shipped with.
#[derive(Clone, Debug)]
pub struct ColumnAliases {
    pub item_id: Vec<String>,
    pub period: Vec<String>,
    pub quantity: Vec<String>,
    pub revenue: Vec<String>,
}

impl Default for ColumnAliases {
    fn default() -> Self {
        Self {
            item_id: vec!["item_id".into(), "variant_id".into()],
            period: vec!["period".into(), "ГодМесяц".into()],
            quantity: vec!["quantity".into(), "Штуки".into()],
            revenue: vec!["revenue".into(), "Выручка, Р".into()],
        }
    }
}

impl ColumnAliases {
    /// Register an extra accepted header for a canonical column.
    /// Unknown canonical names are rejected so a typo cannot silently
    /// leave a column unmapped.
    pub fn add(&mut self, canonical: &str, header: &str) -> Result<(), String> {
        let list = match canonical {
            "item_id" => &mut self.item_id,
            "period" => &mut self.period,
            "quantity" => &mut self.quantity,
            "revenue" => &mut self.revenue,
            other => return Err(format!("unknown canonical column '{}'", other)),
        };
        list.push(header.to_string());
        Ok(())
    }
}

/// Header indices resolved against the alias table.
struct ColumnIndices {
    item_id: usize,
    period: usize,
    quantity: usize,
    revenue: usize,
}

fn find_column(headers: &csv::StringRecord, aliases: &[String]) -> Option<usize> {
    headers.iter().position(|h| {
        aliases
            .iter()
            .any(|a| h.trim().eq_ignore_ascii_case(a.trim()))
    })
}

fn resolve_columns(
    headers: &csv::StringRecord,
    aliases: &ColumnAliases,
) -> AnalysisResult<ColumnIndices> {
    let require = |name: &str, accepted: &[String]| {
        find_column(headers, accepted).ok_or_else(|| AnalysisError::InputFormat {
            line: 1,
            reason: format!(
                "missing required column '{}' (accepted headers: {})",
                name,
                accepted.join(", ")
            ),
        })
    };
    Ok(ColumnIndices {
        item_id: require("item_id", &aliases.item_id)?,
        period: require("period", &aliases.period)?,
        quantity: require("quantity", &aliases.quantity)?,
        revenue: require("revenue", &aliases.revenue)?,
    })
}

fn parse_number(field: &str, name: &str, line: usize) -> AnalysisResult<f64> {
    // `f64::parse` accepts "NaN" and "inf"; a non-finite quantity or revenue
    // would poison the CV and share computations downstream, so it is an
    // input-format error here, not a classifier problem later.
    field
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| AnalysisError::InputFormat {
            line,
            reason: format!("non-numeric or non-finite {} value '{}'", name, field),
        })
}

/// Load sales records from a CSV reader, mapping headers through the
/// alias table. Every row is validated (numeric fields, period label)
/// before anything is classified.
pub fn load_sales<R: Read>(reader: R, aliases: &ColumnAliases) -> AnalysisResult<Vec<SalesRecord>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = resolve_columns(&headers, aliases)?;

    let mut records = Vec::new();
    for (row_num, result) in csv_reader.records().enumerate() {
        // Header is line 1, first data row is line 2.
        let line = row_num + 2;
        let row = result?;
        let field = |idx: usize| -> AnalysisResult<&str> {
            row.get(idx).ok_or_else(|| AnalysisError::InputFormat {
                line,
                reason: format!("row has {} fields, expected at least {}", row.len(), idx + 1),
            })
        };

        let record = SalesRecord {
            item_id: field(columns.item_id)?.to_string(),
            period: field(columns.period)?.to_string(),
            quantity: parse_number(field(columns.quantity)?, "quantity", line)?,
            revenue: parse_number(field(columns.revenue)?, "revenue", line)?,
        };
        validate_record(&record, line)?;
        records.push(record);
    }

    log::info!("loaded {} sales records", records.len());
    Ok(records)
}

/// Load sales records from a CSV file path.
pub fn load_sales_file(path: &str, aliases: &ColumnAliases) -> AnalysisResult<Vec<SalesRecord>> {
    let file = std::fs::File::open(path)?;
    load_sales(file, aliases)
}
