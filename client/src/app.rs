//! Root application component with routing and context providers.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};
use roster::EmployeeId;

use crate::components::toaster::Toaster;
use crate::pages::{
    dashboard::DashboardPage, employee_create::CreateEmployeePage, employee_edit::EditEmployeePage,
    login::LoginPage, register::RegisterPage,
};
use crate::state::notice::NoticeState;

pub const ROUTE_LOGIN: &str = "/login";
pub const ROUTE_REGISTER: &str = "/register";
pub const ROUTE_DASHBOARD: &str = "/dashboard";
pub const ROUTE_CREATE: &str = "/dashboard/create";

pub fn edit_route(id: EmployeeId) -> String {
    format!("{ROUTE_DASHBOARD}/edit/{id}")
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the notice queue and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(RwSignal::new(NoticeState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/staffdesk.css"/>
        <Title text="Employee Management"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=|| view! { <Redirect path=ROUTE_DASHBOARD/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("dashboard"), StaticSegment("create")) view=CreateEmployeePage/>
                <Route
                    path=(StaticSegment("dashboard"), StaticSegment("edit"), ParamSegment("id"))
                    view=EditEmployeePage
                />
            </Routes>
        </Router>
        <Toaster/>
    }
}
