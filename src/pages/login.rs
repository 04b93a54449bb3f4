//! Login page: email/password form plus Google and Facebook entry points.
//!
//! SYSTEM CONTEXT
//! ==============
//! The social providers redirect back here with a token in the `user_info`
//! cookie, so every mount (and every session change) re-runs the session
//! bootstrapper before the form is used.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::AppConfig;
use crate::net::types::{LoginRequest, RequestOutcome};
use crate::routes;
use crate::session::AppSession;
use crate::session::bootstrap::bootstrap;
use crate::session::service::DEFAULT_SERVER_ERROR;
use crate::session::state::Session;
use crate::util::validation::{Field, FieldErrors, validate_login};

/// Shown when the login request never reached the server.
pub const SERVER_UNREACHABLE: &str = "Không thể kết nối đến máy chủ, vui lòng kiểm tra mạng!";

/// Message for the `server` error slot, if the outcome needs one.
#[must_use]
pub fn server_error_message<T>(outcome: &RequestOutcome<T>) -> Option<String> {
    match outcome {
        RequestOutcome::Success(_) | RequestOutcome::Superseded => None,
        RequestOutcome::DomainError(message) => {
            Some(message.clone().unwrap_or_else(|| DEFAULT_SERVER_ERROR.to_owned()))
        }
        RequestOutcome::TransportError(_) => Some(SERVER_UNREACHABLE.to_owned()),
    }
}

/// Validate the form and build the request, or return the field errors.
///
/// # Errors
///
/// Returns the per-field error map when any rule fails.
pub fn prepare_login(user_name: &str, password: &str) -> Result<LoginRequest, FieldErrors> {
    let errors = validate_login(user_name, password);
    if !errors.is_empty() {
        return Err(errors);
    }
    Ok(LoginRequest { user_name: user_name.trim().to_owned(), password: password.to_owned() })
}

/// Drop the error shown for `field`. Returns whether anything was removed.
pub fn clear_field_error(errors: &mut FieldErrors, field: Field) -> bool {
    errors.remove(&field).is_some()
}

/// Limits the bootstrap check to one successful redirect per page mount.
///
/// The check itself runs on mount and again whenever the login phase flips;
/// once it has produced a target it is not consulted again.
#[derive(Debug, Default)]
pub struct RedirectOnce {
    done: bool,
}

impl RedirectOnce {
    pub fn next(&mut self, check: impl FnOnce() -> Option<String>) -> Option<String> {
        if self.done {
            return None;
        }
        let target = check();
        self.done = target.is_some();
        target
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let service = expect_context::<AppSession>();
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<AppConfig>();
    let navigate = use_navigate();
    let query = use_query_map();

    let user_name = RwSignal::new(query.get_untracked().get("email").unwrap_or_default());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::new());
    let busy = RwSignal::new(false);

    // Leave the login screen once a session exists or can be recovered.
    // Error-only session updates do not flip the phase and are ignored.
    let logged_in = Memo::new(move |_| session.with(Session::is_logged_in));
    let bootstrap_service = service.clone();
    let mut gate = RedirectOnce::default();
    Effect::new(move || {
        logged_in.track();
        if let Some(target) = gate.next(|| bootstrap(&bootstrap_service).redirect()) {
            navigate(&target, NavigateOptions::default());
        }
    });

    let clear_error = move |field: Field| {
        errors.maybe_update(|e| clear_field_error(e, field));
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let credentials = match prepare_login(&user_name.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        errors.set(FieldErrors::new());
        busy.set(true);

        let service = service.clone();
        leptos::task::spawn_local(async move {
            let outcome = service.login(&credentials).await;
            if let Some(message) = server_error_message(&outcome) {
                errors.update(|e| {
                    e.insert(Field::Server, message);
                });
            }
            busy.set(false);
        });
    };

    let field_error = move |field: Field| errors.with(|e| e.get(&field).cloned());

    view! {
        <div class="auth-page">
            <form class="auth-card" on:submit=on_submit>
                <h1 class="auth-card__title">"đăng nhập"</h1>
                <div class="auth-card__line"></div>

                <a class="button button--social" href=config.google_login_url.clone()>
                    <span class="icon icon--google"></span>
                    "đăng nhập với google"
                </a>
                <a class="button button--social" href=config.facebook_login_url.clone()>
                    <span class="icon icon--facebook"></span>
                    "đăng nhập với facebook"
                </a>
                <p class="auth-card__hint">"Mẹo: Đăng nhập nhanh hơn với Google và Facebook"</p>

                <div class="auth-card__separation">
                    <span class="auth-card__rule"></span>
                    <p>"hoặc"</p>
                    <span class="auth-card__rule"></span>
                </div>

                <div class="form-group">
                    <label for="email">"Email"</label>
                    <input
                        id="email"
                        name="userName"
                        class="input"
                        type="text"
                        placeholder="Vui lòng nhập Email của bạn!"
                        prop:value=move || user_name.get()
                        on:input=move |ev| {
                            user_name.set(event_target_value(&ev));
                            clear_error(Field::Email);
                        }
                    />
                    <Show when=move || field_error(Field::Email).is_some()>
                        <p class="input__error">{move || field_error(Field::Email).unwrap_or_default()}</p>
                    </Show>
                </div>

                <div class="form-group">
                    <label for="password">"Mật khẩu"</label>
                    <div class="input input--password">
                        <input
                            id="password"
                            name="password"
                            type=move || if show_password.get() { "text" } else { "password" }
                            placeholder="Vui lòng nhập mật khẩu!"
                            prop:value=move || password.get()
                            on:input=move |ev| {
                                password.set(event_target_value(&ev));
                                clear_error(Field::Password);
                            }
                        />
                        <button
                            type="button"
                            class="input__reveal"
                            title="Hiện mật khẩu"
                            on:click=move |_| show_password.update(|v| *v = !*v)
                        >
                            {move || if show_password.get() { "🙈" } else { "👁" }}
                        </button>
                    </div>
                    <Show when=move || field_error(Field::Password).is_some()>
                        <p class="input__error">{move || field_error(Field::Password).unwrap_or_default()}</p>
                    </Show>
                </div>

                <button class="button button--primary" type="submit" disabled=move || busy.get()>
                    <Show when=move || busy.get()>
                        <span class="loader-icon"></span>
                    </Show>
                    <span>"đăng nhập"</span>
                </button>

                <Show when=move || field_error(Field::Server).is_some()>
                    <p class="auth-card__server-error">{move || field_error(Field::Server).unwrap_or_default()}</p>
                </Show>

                <div class="auth-card__item">
                    <p>"Bạn chưa có tài khoản?"</p>
                    <A href=routes::REGISTER attr:class="link">"Đăng ký"</A>
                </div>
                <div class="auth-card__item">
                    <a href=config.reset_password_url.clone() class="link">"Quên mật khẩu?"</a>
                </div>
            </form>
        </div>
    }
}
