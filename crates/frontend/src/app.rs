use leptos::prelude::*;
use leptos_router::components::{A, Route, Router, Routes};
use leptos_router::path;

use crate::pages::config::ConfigPage;
use crate::pages::generator::GeneratorPage;
use crate::session::PageSession;
use crate::shared::feedback::LoadingIndicator;

#[component]
pub fn App() -> impl IntoView {
    // One session per page view, shared by both controllers via context.
    let session = PageSession::new();
    provide_context(session);

    view! {
        <Router>
            <header class="top-header">
                <h1 class="top-header__title">"Label Generator"</h1>
                <nav class="top-header__nav">
                    <A href="/">"Generate"</A>
                    <A href="/config">"Configuration"</A>
                </nav>
                <LoadingIndicator loading=session.loading />
            </header>
            <main class="page">
                <Routes fallback=|| view! { <p>"Page not found"</p> }>
                    <Route path=path!("/") view=GeneratorPage />
                    <Route path=path!("/config") view=ConfigPage />
                </Routes>
            </main>
        </Router>
    }
}
