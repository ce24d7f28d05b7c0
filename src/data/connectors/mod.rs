mod csv;
mod types;
mod validator;

pub use csv::SnapshotConnector;
pub use types::{
    normalize_label,
    ExportColumn,
    SnapshotField,
};
pub use validator::DataValidator;
