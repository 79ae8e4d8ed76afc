//! Loading placeholders shown while data is in flight.

use leptos::prelude::*;

use roster::PAGE_SIZE;

/// Stand-in for the dashboard: header, search bar and one page of rows.
#[component]
pub fn ListingSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton" aria-busy="true">
            <div class="skeleton__bar skeleton__bar--title"></div>
            <div class="skeleton__bar skeleton__bar--search"></div>
            {(0..PAGE_SIZE).map(|_| view! { <div class="skeleton__row"></div> }).collect_view()}
        </div>
    }
}

/// Stand-in for the employee form: three fields and the action row.
#[component]
pub fn FormSkeleton() -> impl IntoView {
    view! {
        <div class="skeleton skeleton--form" aria-busy="true">
            <div class="skeleton__bar skeleton__bar--title"></div>
            {(0..3)
                .map(|_| {
                    view! {
                        <div class="skeleton__label"></div>
                        <div class="skeleton__field"></div>
                    }
                })
                .collect_view()}
            <div class="skeleton__actions"></div>
        </div>
    }
}
