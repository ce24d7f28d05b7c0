/// Fields recognised in a spreadsheet export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotField {
    TotalCash,
    Revenue,
    PreviousRevenue,
    Expenses,
    Profit,
    Investment,
    AsOf,
}

impl SnapshotField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TotalCash => "totalCash",
            Self::Revenue => "revenue",
            Self::PreviousRevenue => "previousRevenue",
            Self::Expenses => "expenses",
            Self::Profit => "profit",
            Self::Investment => "investment",
            Self::AsOf => "asOf",
        }
    }

    pub fn all() -> Vec<Self> {
        vec![
            Self::TotalCash,
            Self::Revenue,
            Self::PreviousRevenue,
            Self::Expenses,
            Self::Profit,
            Self::Investment,
            Self::AsOf,
        ]
    }

    /// Accepted labels, already in normalised form (see [`normalize_label`])
    pub fn aliases(&self) -> Vec<&'static str> {
        match self {
            Self::TotalCash => vec!["totalcash", "cash", "cashonhand"],
            Self::Revenue => vec!["revenue", "totalrevenue", "sales"],
            Self::PreviousRevenue => vec!["previousrevenue", "priorrevenue", "lastperiodrevenue"],
            Self::Expenses => vec!["expenses", "totalexpenses", "costs"],
            Self::Profit => vec!["profit", "netprofit", "netincome"],
            Self::Investment => vec!["investment", "totalinvestment"],
            Self::AsOf => vec!["asof", "date", "reportdate"],
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        let normalized = normalize_label(label);
        Self::all()
            .into_iter()
            .find(|field| field.aliases().contains(&normalized.as_str()))
    }
}

/// Lowercase and drop spaces, underscores and hyphens: `"Total Cash"` -> `"totalcash"`
pub fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(|c| c.to_lowercase())
        .collect()
}

/// The two columns of a field/value export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportColumn {
    Field,
    Value,
}

impl ExportColumn {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Field => "field",
            Self::Value => "value",
        }
    }

    pub fn aliases(&self) -> Vec<&'static str> {
        match self {
            Self::Field => vec!["field", "Field", "FIELD", "metric", "Metric", "name", "Name"],
            Self::Value => vec!["value", "Value", "VALUE", "amount", "Amount"],
        }
    }
}
