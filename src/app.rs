//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::config::AppConfig;
use crate::pages::{home::HomePage, login::LoginPage};
use crate::session::browser_session;

/// Root application component.
///
/// Builds the session service, mirrors its state into a signal, and
/// provides config, service and signal as contexts for every page.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let service = browser_session(&config);
    let session = RwSignal::new(service.session());
    let listener = service.on_change(move |next| session.set(next.clone()));
    let cleanup_service = service.clone();
    on_cleanup(move || cleanup_service.remove_listener(listener));

    provide_context(config);
    provide_context(service);
    provide_context(session);

    view! {
        <Stylesheet id="leptos" href="/pkg/speciapi-web.css"/>
        <Title text="Speciapi"/>

        <Router>
            <Routes fallback=home_in_layout>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=home_in_layout/>
                <Route path=StaticSegment("personal-results") view=home_in_layout/>
                <Route path=StaticSegment("group-results") view=home_in_layout/>
            </Routes>
        </Router>
    }
}

fn home_in_layout() -> impl IntoView {
    view! {
        <Layout>
            <HomePage/>
        </Layout>
    }
}
