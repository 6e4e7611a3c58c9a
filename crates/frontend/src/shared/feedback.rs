use leptos::prelude::*;

/// Outcome message for one operation's result slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Success(String),
    Error(String),
}

impl Feedback {
    pub fn success(message: impl Into<String>) -> Self {
        Self::Success(message.into())
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error(message.into())
    }
}

/// Renders the latest success or error message of one operation.
#[component]
pub fn ResultPanel(#[prop(into)] feedback: Signal<Option<Feedback>>) -> impl IntoView {
    move || {
        feedback.get().map(|fb| match fb {
            Feedback::Success(message) => view! {
                <div class="info-box">{message}</div>
            }
            .into_any(),
            Feedback::Error(message) => view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{message}</span>
                </div>
            }
            .into_any(),
        })
    }
}

/// Busy indicator bound to the page session's loading flag.
#[component]
pub fn LoadingIndicator(#[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div class="loading">"Working..."</div>
        </Show>
    }
}
