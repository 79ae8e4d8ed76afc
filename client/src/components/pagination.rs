//! Page controls for the employee listing.

use leptos::prelude::*;
use roster::Listing;

/// Prev, one button per page, Next. Hidden when everything fits on one page.
#[component]
pub fn Pagination(listing: RwSignal<Listing>) -> impl IntoView {
    view! {
        <Show when=move || listing.with(Listing::show_pagination)>
            <nav class="pagination" aria-label="Pagination">
                <button
                    class="pagination__step"
                    disabled=move || !listing.with(Listing::has_previous)
                    on:click=move |_| listing.update(|l| {
                        l.previous();
                    })
                >
                    "Prev"
                </button>
                {move || {
                    listing.with(|l| {
                        let current = l.page();
                        l.page_numbers()
                            .map(|page| {
                                let class = if page == current {
                                    "pagination__page pagination__page--current"
                                } else {
                                    "pagination__page"
                                };
                                view! {
                                    <button
                                        class=class
                                        on:click=move |_| listing.update(|l| {
                                            l.go_to(page);
                                        })
                                    >
                                        {page}
                                    </button>
                                }
                            })
                            .collect_view()
                    })
                }}
                <button
                    class="pagination__step"
                    disabled=move || !listing.with(Listing::has_next)
                    on:click=move |_| listing.update(|l| {
                        l.next();
                    })
                >
                    "Next"
                </button>
            </nav>
        </Show>
    }
}
