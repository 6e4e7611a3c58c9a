use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Server-held configuration record controlling label layout, fonts,
/// colors and custom text.
///
/// Fields absent from the server's JSON take the documented defaults at
/// deserialize time. Top-level keys this client does not model (the
/// publication options map, anything the server adds later) are kept in
/// `extra` so a load/save round trip leaves them untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LabelConfig {
    pub page_size: String,
    pub columns: u32,
    pub rows: u32,
    pub label_width: f64,
    pub label_height: f64,
    pub show_border: bool,
    pub border_width: f64,
    pub margin_top: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    pub margin_right: f64,
    pub fonts: FontSet,
    pub colors: ColorScheme,
    pub bulletin_text: String,
    pub bulletin_number_text: String,
    pub custom_right_panel_text: String,
    /// Every selectable label field the server knows about. Display
    /// metadata only; the client never edits it.
    pub all_fields_info: Vec<FieldDescriptor>,
    /// Keys of the fields currently printed on labels, in server order.
    pub display_selected_fields_on_label: Vec<String>,
    pub category_map: BTreeMap<String, String>,
    pub status_map: BTreeMap<String, String>,
    pub mail_zone_map: BTreeMap<String, String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            page_size: "A4".to_string(),
            columns: 2,
            rows: 8,
            label_width: 95.0,
            label_height: 30.0,
            show_border: false,
            border_width: 0.1,
            margin_top: 5.0,
            margin_bottom: 5.0,
            margin_left: 5.0,
            margin_right: 5.0,
            fonts: FontSet::default(),
            colors: ColorScheme::default(),
            bulletin_text: "Bulletin".to_string(),
            bulletin_number_text: "No.X-YYYY".to_string(),
            custom_right_panel_text: String::new(),
            all_fields_info: Vec::new(),
            display_selected_fields_on_label: Vec::new(),
            category_map: BTreeMap::new(),
            status_map: BTreeMap::new(),
            mail_zone_map: BTreeMap::new(),
            extra: Map::new(),
        }
    }
}

/// One named font with a point size; `file` is only set for fonts the
/// server loads from a TTF (the CJK group).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSpec {
    pub name: String,
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl FontSpec {
    pub fn new(name: &str, size: u32) -> Self {
        Self {
            name: name.to_string(),
            size,
            file: None,
        }
    }

    pub fn with_file(name: &str, size: u32, file: &str) -> Self {
        Self {
            name: name.to_string(),
            size,
            file: Some(file.to_string()),
        }
    }
}

/// The font groups the form edits. Groups the form does not touch
/// (the server also keeps `header` and `footer` entries) ride along
/// in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontSet {
    pub title: FontSpec,
    pub body: FontSpec,
    pub cjk: FontSpec,
    pub annotation_font: FontSpec,
    pub publication: FontSpec,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            title: FontSpec::new("Helvetica-Bold", 10),
            body: FontSpec::new("Helvetica", 9),
            cjk: FontSpec::with_file("SimSun", 9, "SimSun.ttf"),
            annotation_font: FontSpec::new("Helvetica-Oblique", 8),
            publication: FontSpec::new("Helvetica-Bold", 14),
            extra: Map::new(),
        }
    }
}

/// Hex color strings for the four configurable parts of a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorScheme {
    pub text: String,
    pub title: String,
    pub body: String,
    pub border: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for ColorScheme {
    fn default() -> Self {
        let black = "#000000".to_string();
        Self {
            text: black.clone(),
            title: black.clone(),
            body: black.clone(),
            border: black,
            extra: Map::new(),
        }
    }
}

/// A `{key, label}` pair describing one selectable data column. The
/// server attaches more keys (`default`, `group`); they are preserved
/// verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub key: String,
    pub label: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Success body of POST `/config`.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveConfigResponse {
    pub config: LabelConfig,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_fields_take_documented_defaults() {
        let config: LabelConfig = serde_json::from_value(json!({})).unwrap();
        assert_eq!(config.page_size, "A4");
        assert_eq!(config.columns, 2);
        assert_eq!(config.rows, 8);
        assert_eq!(config.label_width, 95.0);
        assert_eq!(config.label_height, 30.0);
        assert!(!config.show_border);
        assert_eq!(config.border_width, 0.1);
        assert_eq!(config.margin_left, 5.0);
        assert_eq!(config.fonts.title, FontSpec::new("Helvetica-Bold", 10));
        assert_eq!(config.fonts.body, FontSpec::new("Helvetica", 9));
        assert_eq!(config.fonts.cjk.file.as_deref(), Some("SimSun.ttf"));
        assert_eq!(config.fonts.annotation_font.size, 8);
        assert_eq!(config.fonts.publication.size, 14);
        assert_eq!(config.colors.border, "#000000");
        assert_eq!(config.bulletin_text, "Bulletin");
        assert_eq!(config.bulletin_number_text, "No.X-YYYY");
        assert_eq!(config.custom_right_panel_text, "");
        assert!(config.all_fields_info.is_empty());
        assert!(config.display_selected_fields_on_label.is_empty());
    }

    #[test]
    fn missing_font_group_defaults_without_losing_others() {
        let config: LabelConfig = serde_json::from_value(json!({
            "fonts": {
                "body": {"name": "Courier", "size": 11},
                "header": {"name": "Helvetica-Bold", "size": 12}
            }
        }))
        .unwrap();
        assert_eq!(config.fonts.body, FontSpec::new("Courier", 11));
        // omitted group falls back
        assert_eq!(config.fonts.title, FontSpec::new("Helvetica-Bold", 10));
        // group the form never edits survives in extra
        assert!(config.fonts.extra.contains_key("header"));
    }

    #[test]
    fn round_trip_preserves_unknown_keys() {
        let source = json!({
            "columns": 3,
            "publication_options_map": {
                "Bulletin (English Only)": {"data_columns": ["BE"], "label_codes": ["BE"]}
            },
            "all_fields_info": [
                {"key": "NAME1", "label": "Name", "default": 1, "group": "recipient"}
            ],
            "display_selected_fields_on_label": ["NAME1"]
        });
        let config: LabelConfig = serde_json::from_value(source).unwrap();
        let back = serde_json::to_value(&config).unwrap();

        assert_eq!(back["columns"], json!(3));
        assert_eq!(
            back["publication_options_map"]["Bulletin (English Only)"]["data_columns"],
            json!(["BE"])
        );
        assert_eq!(back["all_fields_info"][0]["default"], json!(1));
        assert_eq!(back["all_fields_info"][0]["group"], json!("recipient"));
    }

    #[test]
    fn option_maps_deserialize() {
        let config: LabelConfig = serde_json::from_value(json!({
            "category_map": {"C_col": "Colleges"},
            "status_map": {"1": "CU Admin Units"},
            "mail_zone_map": {"2": "Hong Kong Island"}
        }))
        .unwrap();
        assert_eq!(config.category_map["C_col"], "Colleges");
        assert_eq!(config.status_map["1"], "CU Admin Units");
        assert_eq!(config.mail_zone_map["2"], "Hong Kong Island");
    }
}
