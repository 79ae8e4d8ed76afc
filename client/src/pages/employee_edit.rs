//! Edit form for one employee, pre-populated from the backend.

#[cfg(test)]
#[path = "employee_edit_test.rs"]
mod employee_edit_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use roster::{Employee, EmployeeForm, EmployeeId, Position};

use crate::app::ROUTE_DASHBOARD;
use crate::components::employee_fields::EmployeeFields;
use crate::components::skeleton::FormSkeleton;
use crate::net::api::gateway;
use crate::pages::employee_create::POSITIONS_FAILED;
use crate::util::feedback::Feedback;

const EMPLOYEE_FAILED: &str = "Failed to fetch employee";
const INVALID_ID: &str = "Invalid employee id";
const UPDATE_FAILED: &str = "Failed to update employee";
const UPDATE_SUCCEEDED: &str = "Employee updated successfully!";

/// Parse the `:id` route segment.
pub(crate) fn parse_employee_id(raw: Option<&str>) -> Option<EmployeeId> {
    raw?.trim().parse().ok()
}

#[component]
pub fn EditEmployeePage() -> impl IntoView {
    let feedback = Feedback::install();
    let params = use_params_map();
    let form = RwSignal::new(EmployeeForm::default());
    let positions = RwSignal::new(Vec::<Position>::new());
    let record = RwSignal::new(None::<Employee>);
    let busy = RwSignal::new(false);

    let employee_id = move || params.with(|p| parse_employee_id(p.get("id").as_deref()));

    Effect::new(move || {
        let Some(id) = employee_id() else {
            feedback.failure(INVALID_ID);
            feedback.go(ROUTE_DASHBOARD);
            return;
        };
        leptos::task::spawn_local(async move {
            let api = gateway();
            match api.employee(id).await {
                Ok(employee) => {
                    form.set(EmployeeForm::from_employee(&employee));
                    record.set(Some(employee));
                }
                Err(e) => {
                    feedback.call_failed(e, EMPLOYEE_FAILED);
                    return;
                }
            }
            match api.positions().await {
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
        let Some(id) = record.with_untracked(|r| r.as_ref().map(|e| e.employee_id)) else {
            return;
        };
        let draft = match form.with_untracked(EmployeeForm::validate) {
            Ok(draft) => draft,
            Err(e) => {
                feedback.failure(&e.to_string());
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match gateway().update_employee(id, &draft).await {
                Ok(()) => {
                    feedback.success(UPDATE_SUCCEEDED);
                    feedback.go(ROUTE_DASHBOARD);
                }
                Err(e) => feedback.call_failed(e, UPDATE_FAILED),
            }
            busy.set(false);
        });
    };

    view! {
        <Show when=move || record.with(Option::is_some) fallback=|| view! { <FormSkeleton/> }>
            <div class="form-page">
                <form class="form" on:submit=on_submit>
                    <h1>"Edit Employee"</h1>
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
        </Show>
    }
}
