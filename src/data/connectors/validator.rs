use crate::error::{FinboardError, Result};
use polars::prelude::*;
use super::types::ExportColumn;

pub struct DataValidator;

impl DataValidator {
    /// Resolve the field and value columns of an export
    pub fn validate_export(df: &DataFrame) -> Result<(String, String)> {
        let field = Self::require_column(df, ExportColumn::Field)?;
        let value = Self::require_column(df, ExportColumn::Value)?;
        Ok((field, value))
    }

    fn require_column(df: &DataFrame, column: ExportColumn) -> Result<String> {
        Self::find_column(df, column)
            .map(|name| name.to_string())
            .ok_or_else(|| {
                FinboardError::DataLoading(format!(
                    "Missing required column: {} (tried aliases: {:?})",
                    column.as_str(),
                    column.aliases()
                ))
            })
    }

    /// Find column by checking aliases
    fn find_column(df: &DataFrame, column: ExportColumn) -> Option<&'static str> {
        let columns = df.get_column_names();
        column
            .aliases()
            .into_iter()
            .find(|alias| columns.iter().any(|col| col.as_str() == *alias))
    }

    /// Parse a spreadsheet-formatted number: `"$12,500.00"`, `"(1,200)"`, `"-3.5"`
    pub fn parse_amount(raw: &str) -> Option<f64> {
        let cleaned: String = raw
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '$' && *c != ',')
            .collect();

        let (negative, digits) = match cleaned.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            Some(inner) => (true, inner),
            None => (false, cleaned.as_str()),
        };

        // A sign inside parentheses is malformed, not a double negative
        if negative && digits.starts_with(['-', '+']) {
            return None;
        }

        let value: f64 = digits.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(if negative { -value } else { value })
    }
}
