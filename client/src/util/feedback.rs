//! Page-level reactions to user actions: toasts and navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page reports outcomes the same way. A protected call rejected for a
//! missing session redirects to `/login`; any other failure logs and shows a
//! generic error toast. Navigation goes through a signal so handlers capture
//! only `Copy` state.

#[cfg(test)]
#[path = "feedback_test.rs"]
mod feedback_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use roster::CallError;

use crate::app::ROUTE_LOGIN;
use crate::state::notice::{NoticeKind, NoticeState};

/// Where a failed protected call should send the user, if anywhere.
pub fn redirect_for(error: &CallError) -> Option<&'static str> {
    match error {
        CallError::Unauthenticated => Some(ROUTE_LOGIN),
        CallError::Failed(_) => None,
    }
}

#[derive(Clone, Copy)]
pub struct Feedback {
    notices: RwSignal<NoticeState>,
    redirect: RwSignal<Option<String>>,
}

impl Feedback {
    /// Bind to the app's notice queue and the current router.
    pub fn install() -> Self {
        let notices = expect_context::<RwSignal<NoticeState>>();
        let redirect = RwSignal::new(None::<String>);
        let navigate = use_navigate();
        Effect::new(move || {
            if let Some(path) = redirect.get() {
                navigate(&path, NavigateOptions::default());
            }
        });
        Self { notices, redirect }
    }

    pub fn go(self, path: &str) {
        self.redirect.set(Some(path.to_owned()));
    }

    pub fn success(self, text: &str) {
        self.notify(NoticeKind::Success, text);
    }

    pub fn failure(self, text: &str) {
        self.notify(NoticeKind::Error, text);
    }

    /// React to a failed protected call: redirect when signed out, toast
    /// `text` otherwise.
    pub fn call_failed(self, error: CallError, text: &str) {
        if let Some(path) = redirect_for(&error) {
            self.go(path);
            return;
        }
        log::warn!("{text}: {error}");
        self.failure(text);
    }

    fn notify(self, kind: NoticeKind, text: &str) {
        let mut id = 0;
        self.notices.update(|n| id = n.push(kind, text));
        #[cfg(feature = "hydrate")]
        {
            let notices = self.notices;
            leptos::task::spawn_local(async move {
                gloo_timers::future::TimeoutFuture::new(crate::state::notice::NOTICE_TTL_MS).await;
                notices.update(|n| n.dismiss(id));
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = id;
        }
    }
}
