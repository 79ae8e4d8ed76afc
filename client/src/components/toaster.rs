//! Fixed-position stack of toast notifications.

use leptos::prelude::*;

use crate::state::notice::NoticeState;

#[component]
pub fn Toaster() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="toaster" role="status" aria-live="polite">
            <For
                each=move || notices.get().items
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    let class = format!("toast {}", notice.kind.css_modifier());
                    view! {
                        <div class=class on:click=move |_| notices.update(|n| n.dismiss(id))>
                            {notice.text}
                        </div>
                    }
                }
            />
        </div>
    }
}
