use std::fmt;

#[derive(Debug)]
pub enum AnalysisError {
    /// An input collection the analysis needs has no entries.
    EmptyInput { collection: &'static str },
    /// JSON dataset parse / deserialization error.
    DatasetParse(String),
    /// TOML parse / deserialization error.
    ConfigParse(String),
    /// Config validation error (rate out of range, etc.).
    ConfigValidation(String),
    /// Missing required column in CSV input data.
    MissingColumn { input: &'static str, column: String },
    /// Numeric field parse error in CSV input data.
    NumberParse { input: &'static str, record_id: String, value: String },
    /// Structural CSV error (reader failure, conflicting receipt rows).
    CsvParse(String),
}

impl fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput { collection } => {
                write!(f, "input collection '{collection}' is empty")
            }
            Self::DatasetParse(msg) => write!(f, "dataset parse error: {msg}"),
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
            Self::ConfigValidation(msg) => write!(f, "config validation error: {msg}"),
            Self::MissingColumn { input, column } => {
                write!(f, "{input}: missing column '{column}'")
            }
            Self::NumberParse { input, record_id, value } => {
                write!(f, "{input}, record '{record_id}': cannot parse number '{value}'")
            }
            Self::CsvParse(msg) => write!(f, "CSV error: {msg}"),
        }
    }
}

impl std::error::Error for AnalysisError {}
