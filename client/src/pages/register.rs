//! Registration page. Creates a `user`-role account, then sends the user to
//! log in.

use leptos::prelude::*;
use roster::RegisterForm;

use crate::app::ROUTE_LOGIN;
use crate::net::api::gateway;
use crate::util::feedback::Feedback;

pub(crate) const REGISTER_FAILED: &str = "Failed to register user!";
pub(crate) const REGISTER_SUCCEEDED: &str = "User registered successfully!";

#[component]
pub fn RegisterPage() -> impl IntoView {
    let feedback = Feedback::install();
    let form = RwSignal::new(RegisterForm::default());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let account = match form.with_untracked(RegisterForm::validate) {
            Ok(account) => account,
            Err(e) => {
                feedback.failure(&e.to_string());
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match gateway().register(&account).await {
                Ok(()) => {
                    feedback.success(REGISTER_SUCCEEDED);
                    feedback.go(ROUTE_LOGIN);
                }
                Err(e) => {
                    log::warn!("register failed: {e}");
                    feedback.failure(REGISTER_FAILED);
                }
            }
            busy.set(false);
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Register"</h1>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Full name"
                        required
                        prop:value=move || form.with(|f| f.fullname.clone())
                        on:input=move |ev| form.update(|f| f.fullname = event_target_value(&ev))
                    />
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
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        required
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Register"
                    </button>
                </form>
                <p class="login-card__subtitle">
                    "Already registered? "
                    <a href=ROUTE_LOGIN>"Login"</a>
                </p>
            </div>
        </div>
    }
}
