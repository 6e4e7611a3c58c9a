use std::collections::BTreeMap;

use contracts::export::{ExportOptions, FilterMode, GenerateRequest};
use contracts::upload::UploadSummary;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::pages::config::api as config_api;
use crate::session::{LoadingGuard, PageSession};
use crate::shared::download;
use crate::shared::feedback::Feedback;

/// Snapshot of the filter panel at request-build time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterFormState {
    pub category_include: String,
    pub category_exclude: String,
    pub status_include: String,
    pub status_exclude: String,
    pub mail_zone: String,
    pub filter_mode: FilterMode,
    pub publication_be: bool,
    pub publication_bc: bool,
    pub publication_ar: bool,
    pub limit: String,
    pub batch_size: String,
    pub start_index: String,
}

impl FilterFormState {
    /// Build the request options. `None` when no field was set, which
    /// tells the server to use its defaults. The mode radio always
    /// holds a value, so it alone does not count as "set".
    pub fn to_options(&self) -> Option<ExportOptions> {
        let options = ExportOptions {
            category_filter: text_field(&self.category_include),
            category_exclude_filter: text_field(&self.category_exclude),
            status_filter: text_field(&self.status_include),
            status_exclude_filter: text_field(&self.status_exclude),
            mail_zone_filter: text_field(&self.mail_zone),
            filter_mode: self.filter_mode,
            publication_columns: self.publication_columns(),
            limit: number_field(&self.limit),
            batch_size: number_field(&self.batch_size),
            start_index: number_field(&self.start_index),
        };

        let untouched = ExportOptions {
            filter_mode: self.filter_mode,
            ..ExportOptions::default()
        };
        if options == untouched {
            None
        } else {
            Some(options)
        }
    }

    fn publication_columns(&self) -> Option<Vec<String>> {
        let columns: Vec<String> = [
            ("BE", self.publication_be),
            ("BC", self.publication_bc),
            ("AR", self.publication_ar),
        ]
        .iter()
        .filter(|(_, checked)| *checked)
        .map(|(code, _)| code.to_string())
        .collect();

        if columns.is_empty() {
            None
        } else {
            Some(columns)
        }
    }
}

fn text_field(input: &str) -> Option<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn number_field(input: &str) -> Option<u32> {
    input.trim().parse().ok()
}

/// Download name for the filtered spreadsheet.
pub fn filtered_download_name(filename: &str) -> String {
    format!("filtered_{}", filename)
}

/// Download name for the generated PDF. The stem is the upload's name
/// up to the first dot.
pub fn labels_download_name(filename: &str) -> String {
    let stem = filename.split('.').next().unwrap_or(filename);
    format!("labels_{}.pdf", stem)
}

/// Dropdown options from one of the record's key -> label maps, as
/// (value, display) pairs. Numeric keys sort numerically so status 2
/// precedes status 10.
pub fn map_options(map: &BTreeMap<String, String>) -> Vec<(String, String)> {
    let mut entries: Vec<(String, String)> = map
        .iter()
        .map(|(key, label)| (key.clone(), format!("{} - {}", key, label)))
        .collect();
    entries.sort_by(|(a, _), (b, _)| match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(left), Ok(right)) => left.cmp(&right),
        _ => a.cmp(b),
    });
    entries
}

/// State and commands of the upload/generate page.
#[derive(Clone, Copy)]
pub struct GeneratorViewModel {
    pub session: PageSession,
    pub summary: RwSignal<Option<UploadSummary>>,
    /// Once an upload succeeds the downstream sections stay revealed;
    /// a later failed upload does not hide them again.
    pub revealed: RwSignal<bool>,
    pub upload_feedback: RwSignal<Option<Feedback>>,
    pub export_feedback: RwSignal<Option<Feedback>>,
    pub generate_feedback: RwSignal<Option<Feedback>>,
    /// Button-local busy flag, independent of the global indicator.
    pub exporting: RwSignal<bool>,
    pub known_files: RwSignal<Vec<String>>,
    pub category_options: RwSignal<Vec<(String, String)>>,
    pub status_options: RwSignal<Vec<(String, String)>>,
    pub mail_zone_options: RwSignal<Vec<(String, String)>>,
    pub category_include: RwSignal<String>,
    pub category_exclude: RwSignal<String>,
    pub status_include: RwSignal<String>,
    pub status_exclude: RwSignal<String>,
    pub mail_zone: RwSignal<String>,
    pub filter_mode: RwSignal<FilterMode>,
    pub publication_be: RwSignal<bool>,
    pub publication_bc: RwSignal<bool>,
    pub publication_ar: RwSignal<bool>,
    pub limit: RwSignal<String>,
    pub batch_size: RwSignal<String>,
    pub start_index: RwSignal<String>,
}

impl GeneratorViewModel {
    pub fn new(session: PageSession) -> Self {
        Self {
            session,
            summary: RwSignal::new(None),
            revealed: RwSignal::new(false),
            upload_feedback: RwSignal::new(None),
            export_feedback: RwSignal::new(None),
            generate_feedback: RwSignal::new(None),
            exporting: RwSignal::new(false),
            known_files: RwSignal::new(Vec::new()),
            category_options: RwSignal::new(Vec::new()),
            status_options: RwSignal::new(Vec::new()),
            mail_zone_options: RwSignal::new(Vec::new()),
            category_include: RwSignal::new(String::new()),
            category_exclude: RwSignal::new(String::new()),
            status_include: RwSignal::new(String::new()),
            status_exclude: RwSignal::new(String::new()),
            mail_zone: RwSignal::new(String::new()),
            filter_mode: RwSignal::new(FilterMode::default()),
            publication_be: RwSignal::new(false),
            publication_bc: RwSignal::new(false),
            publication_ar: RwSignal::new(false),
            limit: RwSignal::new(String::new()),
            batch_size: RwSignal::new(String::new()),
            start_index: RwSignal::new(String::new()),
        }
    }

    pub fn snapshot(&self) -> FilterFormState {
        FilterFormState {
            category_include: self.category_include.get_untracked(),
            category_exclude: self.category_exclude.get_untracked(),
            status_include: self.status_include.get_untracked(),
            status_exclude: self.status_exclude.get_untracked(),
            mail_zone: self.mail_zone.get_untracked(),
            filter_mode: self.filter_mode.get_untracked(),
            publication_be: self.publication_be.get_untracked(),
            publication_bc: self.publication_bc.get_untracked(),
            publication_ar: self.publication_ar.get_untracked(),
            limit: self.limit.get_untracked(),
            batch_size: self.batch_size.get_untracked(),
            start_index: self.start_index.get_untracked(),
        }
    }

    /// Background page setup: dropdown options come from the record's
    /// option maps, plus the listing of files the server still holds.
    /// Neither is essential, so failures are logged rather than shown.
    pub fn init_command(&self) {
        let vm = *self;
        spawn_local(async move {
            match config_api::fetch_config().await {
                Ok(config) => {
                    vm.category_options.set(map_options(&config.category_map));
                    vm.status_options.set(map_options(&config.status_map));
                    vm.mail_zone_options.set(map_options(&config.mail_zone_map));
                }
                Err(e) => log::warn!("filter options unavailable: {}", e),
            }
            match api::list_uploads().await {
                Ok(files) => vm.known_files.set(files),
                Err(e) => log::warn!("uploaded file listing unavailable: {}", e),
            }
        });
    }

    /// Upload the chosen file. Refuses locally, without a network
    /// call, when nothing was chosen.
    pub fn upload_command(&self, file: Option<web_sys::File>) {
        let Some(file) = file else {
            self.upload_feedback
                .set(Some(Feedback::error("Please select a file to upload.")));
            return;
        };

        let vm = *self;
        spawn_local(async move {
            let _guard = LoadingGuard::begin(vm.session.loading);
            match api::upload_workbook(file).await {
                Ok(summary) => {
                    log::info!("uploaded {} ({} rows)", summary.filename, summary.rows);
                    vm.session.uploaded_file.set(Some(summary.filename.clone()));
                    vm.upload_feedback.set(None);
                    vm.summary.set(Some(summary));
                    vm.revealed.set(true);
                }
                Err(e) => {
                    log::error!("upload failed: {}", e);
                    vm.upload_feedback.set(Some(Feedback::error(e)));
                }
            }
        });
    }

    /// Make a file the server already holds the active upload. There
    /// is no sample data for it, so no preview, but export and
    /// generation work.
    pub fn adopt_existing(&self, filename: String) {
        log::info!("switching to previously uploaded file {}", filename);
        self.session.uploaded_file.set(Some(filename));
        self.summary.set(None);
        self.upload_feedback.set(None);
        self.revealed.set(true);
    }

    pub fn export_command(&self) {
        let Some(filename) = self.session.uploaded_file.get_untracked() else {
            self.export_feedback
                .set(Some(Feedback::error("Please upload a file first.")));
            return;
        };
        let request = GenerateRequest {
            filename: filename.clone(),
            config: self.snapshot().to_options(),
        };

        let vm = *self;
        spawn_local(async move {
            vm.exporting.set(true);
            let _guard = LoadingGuard::begin(vm.session.loading);
            let outcome = match api::export_filtered(&request).await {
                Ok(bytes) => download::save_binary(
                    &bytes,
                    download::XLSX_MIME,
                    &filtered_download_name(&filename),
                )
                .map(|()| {
                    Feedback::success(
                        "Filtered file exported successfully! Download should start automatically.",
                    )
                })
                .unwrap_or_else(Feedback::Error),
                Err(e) => {
                    log::error!("export failed: {}", e);
                    Feedback::error(e)
                }
            };
            vm.export_feedback.set(Some(outcome));
            vm.exporting.set(false);
        });
    }

    pub fn generate_command(&self) {
        let Some(filename) = self.session.uploaded_file.get_untracked() else {
            self.generate_feedback
                .set(Some(Feedback::error("Please upload a file first.")));
            return;
        };
        let request = GenerateRequest {
            filename: filename.clone(),
            config: self.snapshot().to_options(),
        };

        let vm = *self;
        spawn_local(async move {
            let _guard = LoadingGuard::begin(vm.session.loading);
            let outcome = match api::generate_labels(&request).await {
                Ok(bytes) => download::save_binary(
                    &bytes,
                    download::PDF_MIME,
                    &labels_download_name(&filename),
                )
                .map(|()| {
                    Feedback::success(
                        "Labels generated successfully! Download should start automatically.",
                    )
                })
                .unwrap_or_else(Feedback::Error),
                Err(e) => {
                    log::error!("label generation failed: {}", e);
                    Feedback::error(e)
                }
            };
            vm.generate_feedback.set(Some(outcome));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn builds_request_with_defaulted_mode() {
        let state = FilterFormState {
            category_include: "A,B".to_string(),
            limit: "10".to_string(),
            ..FilterFormState::default()
        };
        let options = state.to_options().expect("fields were set");
        assert_eq!(
            serde_json::to_value(&options).unwrap(),
            json!({"category_filter": "A,B", "filter_mode": "OR", "limit": 10})
        );
    }

    #[test]
    fn untouched_panel_builds_no_options() {
        assert_eq!(FilterFormState::default().to_options(), None);
        // flipping only the mode still means "use server defaults"
        let and_only = FilterFormState {
            filter_mode: FilterMode::And,
            ..FilterFormState::default()
        };
        assert_eq!(and_only.to_options(), None);
    }

    #[test]
    fn cleared_filter_key_is_omitted() {
        let state = FilterFormState {
            category_include: String::new(),
            status_exclude: "  ".to_string(),
            limit: "5".to_string(),
            ..FilterFormState::default()
        };
        let value = serde_json::to_value(state.to_options().unwrap()).unwrap();
        assert_eq!(value, json!({"filter_mode": "OR", "limit": 5}));
    }

    #[test]
    fn publication_columns_follow_checkboxes() {
        let state = FilterFormState {
            publication_be: true,
            publication_ar: true,
            ..FilterFormState::default()
        };
        let options = state.to_options().unwrap();
        assert_eq!(
            options.publication_columns,
            Some(vec!["BE".to_string(), "AR".to_string()])
        );
    }

    #[test]
    fn download_names() {
        assert_eq!(
            filtered_download_name("mailing.xlsx"),
            "filtered_mailing.xlsx"
        );
        assert_eq!(labels_download_name("mailing.xlsx"), "labels_mailing.pdf");
        // stem stops at the first dot
        assert_eq!(
            labels_download_name("mailing.2026.xlsx"),
            "labels_mailing.pdf"
        );
        assert_eq!(labels_download_name("noextension"), "labels_noextension.pdf");
    }

    #[test]
    fn map_options_sort_numeric_keys_numerically() {
        let map: BTreeMap<String, String> = [
            ("10".to_string(), "Subscription".to_string()),
            ("2".to_string(), "Other units".to_string()),
            ("1".to_string(), "Admin units".to_string()),
        ]
        .into_iter()
        .collect();
        let options = map_options(&map);
        let keys: Vec<&str> = options.iter().map(|(key, _)| key.as_str()).collect();
        assert_eq!(keys, vec!["1", "2", "10"]);
        assert_eq!(options[0].1, "1 - Admin units");
    }
}
