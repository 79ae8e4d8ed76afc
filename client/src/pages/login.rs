//! Login page: username + password exchanged for a session token.

use leptos::prelude::*;
use roster::LoginForm;

use crate::app::{ROUTE_DASHBOARD, ROUTE_REGISTER};
use crate::net::api::gateway;
use crate::util::feedback::Feedback;

pub(crate) const LOGIN_FAILED: &str = "Invalid username or password";
pub(crate) const LOGIN_SUCCEEDED: &str = "Login successful!";

#[component]
pub fn LoginPage() -> impl IntoView {
    let feedback = Feedback::install();
    let form = RwSignal::new(LoginForm::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        error.set(String::new());
        let credentials = match form.with_untracked(LoginForm::validate) {
            Ok(credentials) => credentials,
            Err(e) => {
                error.set(e.to_string());
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match gateway().login(&credentials).await {
                Ok(()) => {
                    feedback.success(LOGIN_SUCCEEDED);
                    feedback.go(ROUTE_DASHBOARD);
                }
                Err(e) => {
                    log::warn!("login failed: {e}");
                    error.set(LOGIN_FAILED.to_owned());
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Login"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        required
                        prop:value=move || form.with(|f| f.username.clone())
                        on:input=move |ev| form.update(|f| f.username = event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || form.with(|f| f.password.clone())
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <Show when=move || !error.get().is_empty()>
                        <p class="login-message login-message--error">{move || error.get()}</p>
                    </Show>
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Login"
                    </button>
                </form>
                <p class="login-card__subtitle">
                    "No account yet? "
                    <a href=ROUTE_REGISTER>"Register"</a>
                </p>
            </div>
        </div>
    }
}
