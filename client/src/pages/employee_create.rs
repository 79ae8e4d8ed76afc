//! New-employee form.

use leptos::prelude::*;
use roster::{EmployeeForm, Position};

use crate::app::ROUTE_DASHBOARD;
use crate::components::employee_fields::EmployeeFields;
use crate::net::api::gateway;
use crate::util::feedback::Feedback;

pub(crate) const POSITIONS_FAILED: &str = "Failed to fetch positions";
const CREATE_FAILED: &str = "Failed to create employee";
const CREATE_SUCCEEDED: &str = "Employee created successfully!";

#[component]
pub fn CreateEmployeePage() -> impl IntoView {
    let feedback = Feedback::install();
    let form = RwSignal::new(EmployeeForm::default());
    let positions = RwSignal::new(Vec::<Position>::new());
    let busy = RwSignal::new(false);

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match gateway().positions().await {
                Ok(items) => positions.set(items),
                Err(e) => feedback.call_failed(e, POSITIONS_FAILED),
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = match form.with_untracked(EmployeeForm::validate) {
            Ok(draft) => draft,
            Err(e) => {
                feedback.failure(&e.to_string());
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match gateway().create_employee(&draft).await {
                Ok(()) => {
                    feedback.success(CREATE_SUCCEEDED);
                    feedback.go(ROUTE_DASHBOARD);
                }
                Err(e) => feedback.call_failed(e, CREATE_FAILED),
            }
            busy.set(false);
        });
    };

    view! {
        <div class="form-page">
            <form class="form" on:submit=on_submit>
                <h1>"Add Employee"</h1>
                <EmployeeFields form=form positions=positions/>
                <div class="form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        "Save"
                    </button>
                    <button class="btn" type="button" on:click=move |_| feedback.go(ROUTE_DASHBOARD)>
                        "Cancel"
                    </button>
                </div>
            </form>
        </div>
    }
}
