use crate::error::{FinboardError, Result};
use crate::types::FinancialSnapshot;
use chrono::NaiveDate;
use polars::prelude::*;
use std::collections::HashSet;
use std::path::Path;
use super::{types::SnapshotField, validator::DataValidator};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reads the field/value CSV export of the finance spreadsheet
pub struct SnapshotConnector;

impl SnapshotConnector {
    /// Load CSV file into DataFrame
    pub fn load<P: AsRef<Path>>(path: P) -> Result<DataFrame> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .try_into_reader_with_file_path(Some(path.as_ref().to_path_buf()))?
            .finish()
            .map_err(|e| FinboardError::DataLoading(format!("Failed to read CSV: {}", e)))?;

        Ok(df)
    }

    /// Load an export and reshape it into a snapshot
    pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<FinancialSnapshot> {
        let df = Self::load(&path)?;
        let snapshot = Self::from_frame(&df)?;
        log::info!(
            "Loaded snapshot from {} ({} rows, total cash {})",
            path.as_ref().display(),
            df.height(),
            snapshot.total_cash
        );
        Ok(snapshot)
    }

    /// Reshape field/value rows into a typed snapshot
    pub fn from_frame(df: &DataFrame) -> Result<FinancialSnapshot> {
        let (field_col, value_col) = DataValidator::validate_export(df)?;

        let fields = df.column(&field_col)?.cast(&DataType::String)?;
        let values = df.column(&value_col)?.cast(&DataType::String)?;
        let fields = fields.str()?;
        let values = values.str()?;

        let mut snapshot = FinancialSnapshot::default();
        let mut seen = HashSet::new();

        for (label, raw) in fields.into_iter().zip(values.into_iter()) {
            let Some(label) = label else { continue };
            let Some(field) = SnapshotField::from_label(label) else {
                log::debug!("Skipping unknown snapshot field '{}'", label);
                continue;
            };
            let Some(raw) = raw else {
                log::warn!("Field '{}' has no value, ignoring", label);
                continue;
            };

            if !seen.insert(field) {
                log::warn!("Duplicate field '{}', last row wins", field.as_str());
            }
            Self::apply(&mut snapshot, field, raw)?;
        }

        if !seen.contains(&SnapshotField::TotalCash) {
            return Err(FinboardError::DataLoading(format!(
                "Missing required field: {} (tried aliases: {:?})",
                SnapshotField::TotalCash.as_str(),
                SnapshotField::TotalCash.aliases()
            )));
        }

        Ok(snapshot)
    }

    fn apply(snapshot: &mut FinancialSnapshot, field: SnapshotField, raw: &str) -> Result<()> {
        if field == SnapshotField::AsOf {
            let date = NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|e| {
                FinboardError::DataLoading(format!("Invalid date '{}' for {}: {}", raw, field.as_str(), e))
            })?;
            snapshot.as_of = Some(date);
            return Ok(());
        }

        let amount = DataValidator::parse_amount(raw).ok_or_else(|| {
            FinboardError::DataLoading(format!(
                "Field '{}' must be numeric, found '{}'",
                field.as_str(),
                raw
            ))
        })?;

        match field {
            SnapshotField::TotalCash => snapshot.total_cash = amount,
            SnapshotField::Revenue => snapshot.revenue = Some(amount),
            SnapshotField::PreviousRevenue => snapshot.previous_revenue = Some(amount),
            SnapshotField::Expenses => snapshot.expenses = Some(amount),
            SnapshotField::Profit => snapshot.profit = Some(amount),
            SnapshotField::Investment => snapshot.investment = Some(amount),
            SnapshotField::AsOf => {}
        }
        Ok(())
    }
}
