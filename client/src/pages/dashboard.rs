//! Employee dashboard: search, paginated table, delete confirmation.
//!
//! ARCHITECTURE
//! ============
//! The page fetches the full collection once on mount and keeps it in a
//! `Listing`; searching and paging are purely local. A confirmed delete
//! refetches the whole collection instead of patching it.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use roster::{DeleteFlow, DeleteReport, EmployeeId, Listing};

use crate::app::{ROUTE_CREATE, ROUTE_LOGIN, edit_route};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::pagination::Pagination;
use crate::components::skeleton::ListingSkeleton;
use crate::net::api::gateway;
use crate::util::feedback::Feedback;

pub(crate) const FETCH_FAILED: &str = "Failed to fetch employees";

/// One rendered row of the current page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct EmployeeRow {
    pub number: usize,
    pub id: EmployeeId,
    pub name: String,
    pub phone: String,
    pub position: String,
}

pub(crate) fn page_rows(listing: &Listing) -> Vec<EmployeeRow> {
    listing
        .visible()
        .into_iter()
        .enumerate()
        .map(|(offset, employee)| EmployeeRow {
            number: listing.row_number(offset),
            id: employee.employee_id,
            name: employee.fullname.clone(),
            phone: employee.phone_label().to_owned(),
            position: employee.position_name.clone(),
        })
        .collect()
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let feedback = Feedback::install();
    let listing = RwSignal::new(Listing::default());
    let flow = RwSignal::new(DeleteFlow::default());

    Effect::new(move || {
        leptos::task::spawn_local(async move {
            match gateway().employees().await {
                Ok(items) => listing.update(|l| l.replace(items)),
                Err(e) => feedback.call_failed(e, FETCH_FAILED),
            }
        });
    });

    let on_logout = move |_| {
        if let Err(e) = gateway().logout() {
            log::warn!("logout: {e}");
        }
        feedback.go(ROUTE_LOGIN);
    };

    let on_cancel_delete = Callback::new(move |()| flow.update(DeleteFlow::cancel));

    let on_confirm_delete = Callback::new(move |()| {
        let Some(target) = flow.with_untracked(DeleteFlow::target) else {
            return;
        };
        leptos::task::spawn_local(async move {
            let report = gateway().delete_and_reload(target).await;
            let Some(outcome) = report.outcome() else {
                flow.update(DeleteFlow::cancel);
                feedback.go(ROUTE_LOGIN);
                return;
            };
            flow.update(|f| {
                f.settle(outcome);
            });
            match report {
                DeleteReport::Reloaded(items) => {
                    listing.update(|l| l.replace(items));
                    feedback.success(outcome.message());
                }
                DeleteReport::ReloadFailed(e) => {
                    feedback.success(outcome.message());
                    log::warn!("{FETCH_FAILED}: {e}");
                    feedback.failure(FETCH_FAILED);
                }
                DeleteReport::Failed(e) => {
                    log::warn!("delete {target}: {e}");
                    feedback.failure(outcome.message());
                }
                DeleteReport::SignedOut => {}
            }
        });
    });

    view! {
        <Show
            when=move || !listing.with(Listing::awaiting_data)
            fallback=|| view! { <ListingSkeleton/> }
        >
            <div class="dashboard-page">
                <header class="dashboard-header">
                    <h1>"Employees"</h1>
                    <div class="dashboard-header__actions">
                        <button class="btn btn--primary" on:click=move |_| feedback.go(ROUTE_CREATE)>
                            "Add Employee"
                        </button>
                        <button class="btn" on:click=on_logout>
                            "Logout"
                        </button>
                    </div>
                </header>
                <input
                    class="dashboard-search"
                    type="search"
                    placeholder="Search by name, phone, or position"
                    prop:value=move || listing.with(|l| l.filter().to_owned())
                    on:input=move |ev| listing.update(|l| l.set_filter(event_target_value(&ev)))
                />
                <table class="employee-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Full Name"</th>
                            <th>"Phone"</th>
                            <th>"Position"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            listing
                                .with(page_rows)
                                .into_iter()
                                .map(|row| {
                                    let id = row.id;
                                    view! {
                                        <tr
                                            class="employee-table__row"
                                            on:click=move |_| feedback.go(&edit_route(id))
                                        >
                                            <td>{row.number}</td>
                                            <td>{row.name}</td>
                                            <td>{row.phone}</td>
                                            <td>{row.position}</td>
                                            <td>
                                                <button
                                                    class="btn btn--danger"
                                                    on:click=move |ev| {
                                                        ev.stop_propagation();
                                                        flow.update(|f| f.request(id));
                                                    }
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect_view()
                        }}
                    </tbody>
                </table>
                <Pagination listing=listing/>
            </div>
        </Show>
        <Show when=move || flow.with(DeleteFlow::is_pending)>
            <ConfirmDialog
                title="Delete Employee"
                message="Are you sure you want to delete this employee?"
                confirm_label="Delete"
                on_cancel=on_cancel_delete
                on_confirm=on_confirm_delete
            />
        </Show>
    }
}
