use leptos::*;
use leptos_router::*;

use crate::{
    components::{guard::RequireSession, toast::ToastViewport},
    pages::{dashboard::DashboardPage, home::HomePage},
    state::{notifications::provide_notifier, session::SessionProvider},
};

pub const ENTRY_PATH: &str = "/";
pub const ROUTE_PATHS: &[&str] = &["/", "/dashboard"];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &["/dashboard"];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/"];

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    provide_notifier();
    view! {
        <SessionProvider>
            <Router>
                <Routes>
                    <Route path="/" view=HomePage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                </Routes>
            </Router>
            <ToastViewport/>
        </SessionProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireSession><DashboardPage/></RequireSession> }
}
