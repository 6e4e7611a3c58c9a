use contracts::config::LabelConfig;
use leptos::prelude::*;

/// Per-page-view state shared by both page controllers.
///
/// Created once when the app mounts and provided via context. The
/// fields are replaced wholesale by successful load/save/upload
/// operations and discarded with the page; nothing here survives a
/// reload.
#[derive(Clone, Copy)]
pub struct PageSession {
    /// Last configuration record the server confirmed.
    pub config: RwSignal<Option<LabelConfig>>,
    /// Filename returned by the last successful upload. Every export
    /// and generate action reads it; only a page reload clears it.
    pub uploaded_file: RwSignal<Option<String>>,
    /// Drives the global loading indicator.
    pub loading: RwSignal<bool>,
}

impl PageSession {
    pub fn new() -> Self {
        Self {
            config: RwSignal::new(None),
            uploaded_file: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }
}

impl Default for PageSession {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_session() -> PageSession {
    use_context::<PageSession>().expect("PageSession context not found")
}

/// Shows the global loading indicator for the lifetime of the guard.
///
/// Dropping it hides the indicator again on every exit path of an
/// async command: success, handled failure, or transport error.
pub struct LoadingGuard {
    loading: RwSignal<bool>,
}

impl LoadingGuard {
    pub fn begin(loading: RwSignal<bool>) -> Self {
        loading.set(true);
        Self { loading }
    }
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.loading.set(false);
    }
}
