//! Authenticated page chrome: header, navbar and the logout confirmation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Logout is biased toward leaving no stuck "logged-in" UI: whatever the
//! server answers, the user ends up on `/login`. The session service only
//! clears persisted state when the server confirms the logout.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::modal::Modal;
use crate::net::types::RequestOutcome;
use crate::routes;
use crate::session::AppSession;
use crate::session::profile::UserProfile;
use crate::session::state::{ActivePerInfo, Session};

/// Navbar entries as `(label, path)`.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Trang chủ", routes::HOME),
    ("Kết quả cá nhân", routes::PERSONAL_RESULTS),
    ("Kết quả nhóm", routes::GROUP_RESULTS),
    ("Tạo nhóm", routes::CREATE_GROUP),
];

/// Name shown in the header: full name, then email, then the user id.
#[must_use]
pub fn display_name(profile: &UserProfile) -> String {
    ["FullName", "UserName", "Email"]
        .iter()
        .find_map(|key| profile.get_str(key).map(str::trim).filter(|v| !v.is_empty()))
        .map(str::to_owned)
        .or_else(|| profile.user_id())
        .unwrap_or_default()
}

/// Where the user lands after a logout attempt, as `(path, replace_history)`.
/// Every outcome leads to the login screen so no stale logged-in UI stays up.
pub fn logout_redirect<T>(outcome: &RequestOutcome<T>) -> (&'static str, bool) {
    if !outcome.is_success() {
        log::warn!("logout did not complete; returning to login anyway");
    }
    (routes::LOGIN, true)
}

/// Toggle the personal-info panel, opening it on its first slide.
#[must_use]
pub fn toggle_per_info(current: ActivePerInfo) -> ActivePerInfo {
    if current.is_open {
        ActivePerInfo { is_open: false, ..current }
    } else {
        ActivePerInfo { is_open: true, init_slide_per_info: 1 }
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let service = expect_context::<AppSession>();
    let navigate = use_navigate();
    let logout_open = RwSignal::new(false);
    let logout_confirmed = RwSignal::new(false);

    Effect::new(move || {
        if !logout_confirmed.get() {
            return;
        }
        logout_confirmed.set(false);
        let service = service.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let (path, replace) = logout_redirect(&service.logout().await);
            navigate(path, NavigateOptions { replace, ..NavigateOptions::default() });
        });
    });

    let on_logout_ok = Callback::new(move |()| {
        logout_open.set(false);
        logout_confirmed.set(true);
    });
    let on_logout_close = Callback::new(move |()| logout_open.set(false));
    let on_logout_request = Callback::new(move |()| logout_open.set(true));

    view! {
        <div class="layout">
            <div class="layout__main">
                <Header/>
                <div class="layout__content">{children()}</div>
            </div>
            <Navbar on_logout=on_logout_request/>
            <Show when=move || logout_open.get()>
                <Modal on_ok=on_logout_ok on_close=on_logout_close ok_text="Logout">
                    <p class="layout__logout-title">
                        <span>"Đăng xuất"</span>
                        " khỏi ứng dụng?"
                    </p>
                </Modal>
            </Show>
        </div>
    }
}

/// Top bar with the user's name and the personal-info panel toggle.
#[component]
pub fn Header() -> impl IntoView {
    let service = expect_context::<AppSession>();
    let session = expect_context::<RwSignal<Session>>();

    let name = move || session.with(|s| display_name(s.user_profile()));
    let panel = move || session.with(Session::active_per_info);
    let on_toggle = move |_| service.set_active_per_info(toggle_per_info(panel()));

    view! {
        <header class="header">
            <span class="header__brand">"Speciapi"</span>
            <span class="header__spacer"></span>
            <button class="header__user" on:click=on_toggle title="Thông tin cá nhân">
                {name}
            </button>
            <Show when=move || panel().is_open>
                <div class="header__per-info" data-slide=move || panel().init_slide_per_info.to_string()>
                    <p>{name}</p>
                    <p>{move || session.with(|s| s.user_profile().get_str("Email").unwrap_or_default().to_owned())}</p>
                </div>
            </Show>
        </header>
    }
}

#[component]
pub fn Navbar(on_logout: Callback<()>) -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="navbar">
            {NAV_ITEMS
                .iter()
                .map(|(label, path)| {
                    let path = *path;
                    let active = move || pathname.get() == path;
                    view! {
                        <A href=path attr:class=move || if active() { "navbar__item navbar__item--active" } else { "navbar__item" }>
                            {*label}
                        </A>
                    }
                })
                .collect_view()}
            <button class="navbar__item navbar__logout" on:click=move |_| on_logout.run(())>
                "Đăng xuất"
            </button>
        </nav>
    }
}
