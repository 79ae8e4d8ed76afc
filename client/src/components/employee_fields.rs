//! Input fields shared by the create and edit employee pages.

use leptos::prelude::*;
use roster::{EmployeeForm, Position};

#[component]
pub fn EmployeeFields(form: RwSignal<EmployeeForm>, positions: RwSignal<Vec<Position>>) -> impl IntoView {
    let selected = move || form.with(|f| f.position_id);

    view! {
        <label class="form__label">
            "Full Name"
            <input
                class="form__input"
                type="text"
                required
                prop:value=move || form.with(|f| f.fullname.clone())
                on:input=move |ev| form.update(|f| f.fullname = event_target_value(&ev))
            />
        </label>
        <label class="form__label">
            "Phone"
            <input
                class="form__input"
                type="tel"
                prop:value=move || form.with(|f| f.tel_no.clone())
                on:input=move |ev| form.update(|f| f.tel_no = event_target_value(&ev))
            />
        </label>
        <label class="form__label">
            "Position"
            <select
                class="form__input"
                required
                prop:value=move || selected().map(|id| id.to_string()).unwrap_or_default()
                on:change=move |ev| form.update(|f| f.select_position(&event_target_value(&ev)))
            >
                <option value="">"Select Position"</option>
                <For
                    each=move || positions.get()
                    key=|position| position.position_id
                    children=move |position| {
                        let id = position.position_id;
                        view! {
                            <option value=id.to_string() selected=move || selected() == Some(id)>
                                {position.position_name}
                            </option>
                        }
                    }
                />
            </select>
        </label>
    }
}
