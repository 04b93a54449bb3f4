//! Home screen: login prompt for anonymous visitors, results dashboard
//! otherwise.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate reads the persisted `is_login` flag rather than the in-memory
//! session so a reload renders the right branch before anything else runs.
//! Public routes always get the dashboard branch.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate, use_query_map};

use crate::components::modal::Modal;
use crate::routes::{self, ResultKind};
use crate::session::AppSession;
use crate::session::state::Session;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeView {
    LoginPrompt,
    Dashboard,
}

/// Which branch the home screen renders for `path`.
#[must_use]
pub fn home_view(is_login: bool, path: &str) -> HomeView {
    if !is_login && !routes::is_public_route(path) {
        HomeView::LoginPrompt
    } else {
        HomeView::Dashboard
    }
}

/// An assessment offered in the "take a test" picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exam {
    pub kind: ResultKind,
    pub label: &'static str,
}

pub const EXAMS: &[Exam] = &[
    Exam { kind: ResultKind::Disc, label: "Đánh giá tính cách DISC" },
    Exam { kind: ResultKind::Beck, label: "Đánh giá trầm cảm BECK" },
];

/// Test page for `kind`, carrying the question bank type in the query.
#[must_use]
pub fn exam_target(kind: ResultKind) -> String {
    format!("{}?questionBankType={}", kind.test_path(), kind.code())
}

#[component]
pub fn HomePage(#[prop(optional)] children: Option<Children>) -> impl IntoView {
    let service = expect_context::<AppSession>();
    let session = expect_context::<RwSignal<Session>>();
    let pathname = use_location().pathname;

    let view_mode = move || {
        session.track();
        home_view(service.is_persisted_login(), &pathname.get())
    };

    view! {
        <div class="home">
            {move || match view_mode() {
                HomeView::LoginPrompt => view! { <LoginPrompt/> }.into_any(),
                HomeView::Dashboard => view! { <Dashboard/> }.into_any(),
            }}
            <div class="home__content">{children.map(|children| children())}</div>
        </div>
    }
}

#[component]
fn LoginPrompt() -> impl IntoView {
    view! {
        <div class="home__not-login">
            <h3>"Đến màn hình đăng nhập?"</h3>
            <A href=routes::LOGIN attr:class="button button--primary">
                <span>"đăng nhập"</span>
            </A>
            <div class="home__auth-item">
                <p>"Bạn chưa có tài khoản?"</p>
                <A href=routes::REGISTER attr:class="link">"Đăng ký"</A>
            </div>
        </div>
    }
}

#[component]
fn Dashboard() -> impl IntoView {
    let navigate = use_navigate();
    let pathname = use_location().pathname;
    let query = use_query_map();

    let dropdown_open = RwSignal::new(false);
    let picker_open = RwSignal::new(false);
    let picked = RwSignal::new(ResultKind::Disc);
    let exam_go = RwSignal::new(None::<String>);

    Effect::new(move || {
        if let Some(target) = exam_go.get() {
            exam_go.set(None);
            navigate(&target, NavigateOptions::default());
        }
    });

    let current_kind = move || query.with(|q| ResultKind::from_query(q.get("type").as_deref()));
    let on_results_page = move || pathname.get() == routes::PERSONAL_RESULTS;
    let on_group_page = move || pathname.get() == routes::GROUP_RESULTS;

    let on_picker_ok = Callback::new(move |()| {
        picker_open.set(false);
        exam_go.set(Some(exam_target(picked.get_untracked())));
    });
    let on_picker_close = Callback::new(move |()| picker_open.set(false));

    view! {
        <div class="home__select">
            <button class="button button--primary" on:click=move |_| picker_open.set(true)>
                "làm bài đánh giá"
            </button>
            <A href=routes::CREATE_GROUP attr:class="button button--primary button--alt">
                "tạo nhóm đánh giá"
            </A>
        </div>
        <div class="home__header">
            <h2>"kết quả của bạn"</h2>
            <div class="home__line"></div>
        </div>
        <div class="home__tabs">
            <div
                class="home__tab home__tab--personal"
                class:active=on_results_page
                on:click=move |_| dropdown_open.update(|v| *v = !*v)
            >
                {move || current_kind().results_label()}
                <span class="home__caret">"▾"</span>
                <div class="home__dropdown" class:is-show=move || dropdown_open.get()>
                    {ResultKind::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <A
                                    href=routes::personal_results(kind)
                                    attr:class=move || {
                                        if current_kind() == kind { "home__dropdown-item active" } else { "home__dropdown-item" }
                                    }
                                >
                                    {kind.results_label()}
                                </A>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="home__tab-divider"></div>
            <A
                href=routes::GROUP_RESULTS
                attr:class=move || if on_group_page() { "home__tab active" } else { "home__tab" }
                on:click=move |_| dropdown_open.set(false)
            >
                "Kết quả nhóm đã tạo"
            </A>
        </div>
        <Show when=move || picker_open.get()>
            <Modal on_ok=on_picker_ok on_close=on_picker_close ok_text="Làm Bài" show_cancel=false>
                <div class="home__picker">
                    <h3 class="home__picker-title">"Chọn bài đánh giá mà bạn muốn làm !!!"</h3>
                    <div class="home__picker-options">
                        {EXAMS
                            .iter()
                            .map(|exam| {
                                let kind = exam.kind;
                                view! {
                                    <label class="radio">
                                        <span>{exam.label}</span>
                                        <input
                                            type="radio"
                                            name="exam"
                                            prop:checked=move || picked.get() == kind
                                            on:change=move |_| picked.set(kind)
                                        />
                                    </label>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Modal>
        </Show>
    }
}
