use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Success body of POST `/upload`: what the server extracted from the
/// spreadsheet it just accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadSummary {
    pub filename: String,
    pub rows: u64,
    #[serde(default)]
    pub columns: Vec<String>,
    /// The first few rows, one JSON object per row keyed by column
    /// name. Cleaned server-side; missing cells arrive as empty
    /// strings or are absent entirely.
    #[serde(default)]
    pub sample_data: Vec<Map<String, Value>>,
}

/// Success body of GET `/files`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadedFiles {
    #[serde(default)]
    pub files: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_upload_response() {
        let summary: UploadSummary = serde_json::from_value(json!({
            "message": "File 'mailing.xlsx' uploaded successfully",
            "filename": "mailing.xlsx",
            "rows": 120,
            "columns": ["NAME1", "add1"],
            "sample_data": [{"NAME1": "Chan", "add1": "Shatin"}]
        }))
        .unwrap();
        assert_eq!(summary.filename, "mailing.xlsx");
        assert_eq!(summary.rows, 120);
        assert_eq!(summary.columns, vec!["NAME1", "add1"]);
        assert_eq!(summary.sample_data.len(), 1);
        assert_eq!(summary.sample_data[0]["NAME1"], json!("Chan"));
    }
}
