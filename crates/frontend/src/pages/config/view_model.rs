use contracts::config::{FontSpec, LabelConfig};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::session::{LoadingGuard, PageSession};
use crate::shared::feedback::Feedback;

/// One checkbox row of the field-selection list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldToggle {
    pub key: String,
    pub label: String,
    pub selected: bool,
}

impl FieldToggle {
    /// Checkbox label text, e.g. "Name (NAME1)".
    pub fn display(&self) -> String {
        format!("{} ({})", self.label, self.key)
    }
}

/// Form-ready projection of a configuration record.
///
/// Numeric fields are held as the strings the inputs carry; `apply_to`
/// parses them back, keeping the held record's value when an entry
/// does not parse. The mapping in both directions is plain data work
/// so it can be exercised without a browser.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigForm {
    pub page_size: String,
    pub columns: String,
    pub rows: String,
    pub label_width: String,
    pub label_height: String,
    pub show_border: bool,
    pub border_width: String,
    pub margin_top: String,
    pub margin_bottom: String,
    pub margin_left: String,
    pub margin_right: String,
    pub title_font_name: String,
    pub title_font_size: String,
    pub body_font_name: String,
    pub body_font_size: String,
    pub cjk_font_name: String,
    pub cjk_font_size: String,
    pub cjk_font_file: String,
    pub annotation_font_name: String,
    pub annotation_font_size: String,
    pub publication_font_name: String,
    pub publication_font_size: String,
    pub text_color: String,
    pub title_color: String,
    pub body_color: String,
    pub border_color: String,
    pub bulletin_text: String,
    pub bulletin_number_text: String,
    pub custom_right_panel_text: String,
    pub fields: Vec<FieldToggle>,
}

impl ConfigForm {
    /// Render a record into form values. One toggle per
    /// `all_fields_info` descriptor, checked iff its key is in the
    /// selected set.
    pub fn from_config(config: &LabelConfig) -> Self {
        let fields = config
            .all_fields_info
            .iter()
            .map(|descriptor| FieldToggle {
                key: descriptor.key.clone(),
                label: descriptor.label.clone(),
                selected: config
                    .display_selected_fields_on_label
                    .iter()
                    .any(|key| key == &descriptor.key),
            })
            .collect();

        Self {
            page_size: config.page_size.clone(),
            columns: config.columns.to_string(),
            rows: config.rows.to_string(),
            label_width: config.label_width.to_string(),
            label_height: config.label_height.to_string(),
            show_border: config.show_border,
            border_width: config.border_width.to_string(),
            margin_top: config.margin_top.to_string(),
            margin_bottom: config.margin_bottom.to_string(),
            margin_left: config.margin_left.to_string(),
            margin_right: config.margin_right.to_string(),
            title_font_name: config.fonts.title.name.clone(),
            title_font_size: config.fonts.title.size.to_string(),
            body_font_name: config.fonts.body.name.clone(),
            body_font_size: config.fonts.body.size.to_string(),
            cjk_font_name: config.fonts.cjk.name.clone(),
            cjk_font_size: config.fonts.cjk.size.to_string(),
            cjk_font_file: config.fonts.cjk.file.clone().unwrap_or_default(),
            annotation_font_name: config.fonts.annotation_font.name.clone(),
            annotation_font_size: config.fonts.annotation_font.size.to_string(),
            publication_font_name: config.fonts.publication.name.clone(),
            publication_font_size: config.fonts.publication.size.to_string(),
            text_color: config.colors.text.clone(),
            title_color: config.colors.title.clone(),
            body_color: config.colors.body.clone(),
            border_color: config.colors.border.clone(),
            bulletin_text: config.bulletin_text.clone(),
            bulletin_number_text: config.bulletin_number_text.clone(),
            custom_right_panel_text: config.custom_right_panel_text.clone(),
            fields,
        }
    }

    /// Overlay the form values onto a copy of the held record.
    ///
    /// Keys the form does not edit (`all_fields_info`, the option
    /// maps, unknown extras) are carried over untouched, so everything
    /// the server sent survives the round trip.
    pub fn apply_to(&self, held: &LabelConfig) -> LabelConfig {
        let mut config = held.clone();

        config.page_size = self.page_size.clone();
        config.columns = parse_or(&self.columns, held.columns);
        config.rows = parse_or(&self.rows, held.rows);
        config.label_width = parse_or(&self.label_width, held.label_width);
        config.label_height = parse_or(&self.label_height, held.label_height);
        config.show_border = self.show_border;
        config.border_width = parse_or(&self.border_width, held.border_width);
        config.margin_top = parse_or(&self.margin_top, held.margin_top);
        config.margin_bottom = parse_or(&self.margin_bottom, held.margin_bottom);
        config.margin_left = parse_or(&self.margin_left, held.margin_left);
        config.margin_right = parse_or(&self.margin_right, held.margin_right);

        config.fonts.title = FontSpec {
            name: self.title_font_name.clone(),
            size: parse_or(&self.title_font_size, held.fonts.title.size),
            file: held.fonts.title.file.clone(),
        };
        config.fonts.body = FontSpec {
            name: self.body_font_name.clone(),
            size: parse_or(&self.body_font_size, held.fonts.body.size),
            file: held.fonts.body.file.clone(),
        };
        config.fonts.cjk = FontSpec {
            name: self.cjk_font_name.clone(),
            size: parse_or(&self.cjk_font_size, held.fonts.cjk.size),
            file: Some(self.cjk_font_file.clone()),
        };
        config.fonts.annotation_font = FontSpec {
            name: self.annotation_font_name.clone(),
            size: parse_or(&self.annotation_font_size, held.fonts.annotation_font.size),
            file: held.fonts.annotation_font.file.clone(),
        };
        config.fonts.publication = FontSpec {
            name: self.publication_font_name.clone(),
            size: parse_or(&self.publication_font_size, held.fonts.publication.size),
            file: held.fonts.publication.file.clone(),
        };

        config.colors.text = self.text_color.clone();
        config.colors.title = self.title_color.clone();
        config.colors.body = self.body_color.clone();
        config.colors.border = self.border_color.clone();

        config.bulletin_text = self.bulletin_text.clone();
        config.bulletin_number_text = self.bulletin_number_text.clone();
        config.custom_right_panel_text = self.custom_right_panel_text.clone();

        config.display_selected_fields_on_label = self.selected_keys();

        config
    }

    /// Keys of the checked toggles, in descriptor order.
    pub fn selected_keys(&self) -> Vec<String> {
        self.fields
            .iter()
            .filter(|toggle| toggle.selected)
            .map(|toggle| toggle.key.clone())
            .collect()
    }

    pub fn set_selected(&mut self, key: &str, selected: bool) {
        if let Some(toggle) = self.fields.iter_mut().find(|toggle| toggle.key == key) {
            toggle.selected = selected;
        }
    }
}

fn parse_or<T: std::str::FromStr + Copy>(input: &str, fallback: T) -> T {
    input.trim().parse().unwrap_or(fallback)
}

/// State and commands of the configuration page.
#[derive(Clone, Copy)]
pub struct ConfigPageViewModel {
    pub session: PageSession,
    pub form: RwSignal<ConfigForm>,
    pub feedback: RwSignal<Option<Feedback>>,
}

impl ConfigPageViewModel {
    pub fn new(session: PageSession) -> Self {
        Self {
            session,
            form: RwSignal::new(ConfigForm::default()),
            feedback: RwSignal::new(None),
        }
    }

    /// Fetch the record and rebuild the whole form from it. On failure
    /// the previously held record stays as it was.
    pub fn load_command(&self) {
        let vm = *self;
        spawn_local(async move {
            let _guard = LoadingGuard::begin(vm.session.loading);
            match api::fetch_config().await {
                Ok(config) => {
                    vm.form.set(ConfigForm::from_config(&config));
                    vm.session.config.set(Some(config));
                    vm.feedback
                        .set(Some(Feedback::success("Configuration loaded successfully")));
                }
                Err(e) => {
                    log::error!("config load failed: {}", e);
                    vm.feedback.set(Some(Feedback::error(e)));
                }
            }
        });
    }

    /// Overlay the form onto the held record and persist it. Refuses
    /// without a network call when nothing has been loaded yet.
    pub fn save_command(&self) {
        let Some(held) = self.session.config.get_untracked() else {
            self.feedback
                .set(Some(Feedback::error("No configuration loaded")));
            return;
        };
        let updated = self.form.with_untracked(|form| form.apply_to(&held));

        let vm = *self;
        spawn_local(async move {
            let _guard = LoadingGuard::begin(vm.session.loading);
            match api::save_config(&updated).await {
                Ok(saved) => {
                    vm.session.config.set(Some(saved));
                    vm.feedback
                        .set(Some(Feedback::success("Configuration saved successfully!")));
                }
                Err(e) => {
                    log::error!("config save failed: {}", e);
                    vm.feedback.set(Some(Feedback::error(e)));
                }
            }
        });
    }

    /// Reset to server defaults after interactive confirmation, then
    /// re-fetch the fresh record.
    pub fn reset_command(&self) {
        let confirmed = web_sys::window()
            .and_then(|w| {
                w.confirm_with_message(
                    "Are you sure you want to reset the configuration to defaults? \
                     This will overwrite all current settings.",
                )
                .ok()
            })
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        let vm = *self;
        spawn_local(async move {
            let _guard = LoadingGuard::begin(vm.session.loading);
            match api::reset_config().await {
                Ok(()) => match api::fetch_config().await {
                    Ok(config) => {
                        vm.form.set(ConfigForm::from_config(&config));
                        vm.session.config.set(Some(config));
                        vm.feedback.set(Some(Feedback::success(
                            "Configuration reset to defaults successfully!",
                        )));
                    }
                    Err(e) => {
                        log::error!("config reload after reset failed: {}", e);
                        vm.feedback.set(Some(Feedback::error(e)));
                    }
                },
                Err(e) => {
                    log::error!("config reset failed: {}", e);
                    vm.feedback.set(Some(Feedback::error(e)));
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config_with_fields(selected: &[&str]) -> LabelConfig {
        serde_json::from_value(json!({
            "all_fields_info": [
                {"key": "TITLE1", "label": "Title", "default": 1},
                {"key": "NAME1", "label": "Name", "default": 1},
                {"key": "add1", "label": "Address 1", "default": 1},
                {"key": "state", "label": "State/Country", "default": 1}
            ],
            "display_selected_fields_on_label": selected
        }))
        .unwrap()
    }

    #[test]
    fn renders_documented_defaults_for_missing_fields() {
        let config: LabelConfig = serde_json::from_value(json!({})).unwrap();
        let form = ConfigForm::from_config(&config);
        assert_eq!(form.page_size, "A4");
        assert_eq!(form.columns, "2");
        assert_eq!(form.rows, "8");
        assert_eq!(form.label_width, "95");
        assert_eq!(form.border_width, "0.1");
        assert!(!form.show_border);
        assert_eq!(form.title_font_name, "Helvetica-Bold");
        assert_eq!(form.title_font_size, "10");
        assert_eq!(form.cjk_font_file, "SimSun.ttf");
        assert_eq!(form.text_color, "#000000");
        assert_eq!(form.bulletin_text, "Bulletin");
        assert_eq!(form.bulletin_number_text, "No.X-YYYY");
        assert_eq!(form.custom_right_panel_text, "");
    }

    #[test]
    fn selected_set_round_trips() {
        for selected in [
            vec![],
            vec!["NAME1"],
            vec!["TITLE1", "add1", "state"],
            vec!["TITLE1", "NAME1", "add1", "state"],
        ] {
            let config = config_with_fields(&selected);
            let form = ConfigForm::from_config(&config);
            assert_eq!(form.selected_keys(), selected);
        }
    }

    #[test]
    fn toggle_labels_combine_label_and_key() {
        let config = config_with_fields(&["NAME1"]);
        let form = ConfigForm::from_config(&config);
        assert_eq!(form.fields[1].display(), "Name (NAME1)");
        assert!(form.fields[1].selected);
        assert!(!form.fields[0].selected);
    }

    #[test]
    fn apply_preserves_unedited_keys() {
        let held: LabelConfig = serde_json::from_value(json!({
            "columns": 3,
            "publication_options_map": {"Annual Report (English Only)": {"data_columns": ["AR"]}},
            "category_map": {"C_col": "Colleges"},
            "all_fields_info": [{"key": "NAME1", "label": "Name", "group": "recipient"}],
            "display_selected_fields_on_label": ["NAME1"]
        }))
        .unwrap();

        let mut form = ConfigForm::from_config(&held);
        form.columns = "4".to_string();
        form.set_selected("NAME1", false);
        let updated = form.apply_to(&held);

        assert_eq!(updated.columns, 4);
        assert!(updated.display_selected_fields_on_label.is_empty());
        // display metadata and unknown keys are untouched
        assert_eq!(updated.all_fields_info, held.all_fields_info);
        assert_eq!(updated.extra, held.extra);
        assert_eq!(updated.category_map, held.category_map);
    }

    #[test]
    fn unparseable_numbers_keep_held_values() {
        let held = LabelConfig::default();
        let mut form = ConfigForm::from_config(&held);
        form.columns = "lots".to_string();
        form.label_width = "".to_string();
        let updated = form.apply_to(&held);
        assert_eq!(updated.columns, held.columns);
        assert_eq!(updated.label_width, held.label_width);
    }

    #[test]
    fn apply_overlays_fonts_and_colors() {
        let held = LabelConfig::default();
        let mut form = ConfigForm::from_config(&held);
        form.body_font_name = "Courier".to_string();
        form.body_font_size = "11".to_string();
        form.border_color = "#ff0000".to_string();
        let updated = form.apply_to(&held);
        assert_eq!(updated.fonts.body, FontSpec::new("Courier", 11));
        assert_eq!(updated.colors.border, "#ff0000");
        // groups the form edits elsewhere stay at their held values
        assert_eq!(updated.fonts.title, held.fonts.title);
    }
}
