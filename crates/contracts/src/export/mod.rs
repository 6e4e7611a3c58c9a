use serde::{Deserialize, Serialize};

/// Combination policy when several include/exclude filters are active
/// at once.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMode {
    #[default]
    #[serde(rename = "OR")]
    Or,
    #[serde(rename = "AND")]
    And,
}

/// Filter/export options sent with an export or generate request.
///
/// Built fresh per action and never persisted. Optional fields are
/// omitted from the JSON entirely when unset; `filter_mode` is always
/// present. The filter strings are comma-joined value lists.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_exclude_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_exclude_filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mail_zone_filter: Option<String>,
    #[serde(default)]
    pub filter_mode: FilterMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_columns: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_index: Option<u32>,
}

/// Body of POST `/export-filtered` and POST `/generate`.
///
/// `config: None` means "no option was set, use server defaults" and
/// is serialized as an explicit JSON null.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateRequest {
    pub filename: String,
    pub config: Option<ExportOptions>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unset_optionals_are_omitted() {
        let options = ExportOptions {
            category_filter: Some("A,B".to_string()),
            limit: Some(10),
            ..ExportOptions::default()
        };
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({"category_filter": "A,B", "filter_mode": "OR", "limit": 10})
        );
    }

    #[test]
    fn filter_mode_serializes_as_literal() {
        let options = ExportOptions {
            filter_mode: FilterMode::And,
            ..ExportOptions::default()
        };
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({"filter_mode": "AND"})
        );
    }

    #[test]
    fn absent_config_serializes_as_null() {
        let request = GenerateRequest {
            filename: "mailing.xlsx".to_string(),
            config: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"filename": "mailing.xlsx", "config": null})
        );
    }
}
