//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::main_nav::MainNav;
use crate::pages::{
    about::AboutPage, dashboard::DashboardPage, home::HomePage, jobs::JobsPage, logout::LogoutPage,
    market_report::MarketReportPage, not_found::NotFoundPage, profile::ProfilePage, profile_edit::ProfileEditPage,
    sign_in::SignInPage, sign_up::SignUpPage,
};
use crate::routes::{guarded, paths};
use crate::state::session::SessionSignal;
use crate::util::config::AppConfig;

/// Root application component.
///
/// Provides the session signal and configuration, then sets up client-side
/// routing. Restricted routes are wrapped by `guarded` according to the
/// route table.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(AppConfig::load());
    provide_context(SessionSignal::platform());

    view! {
        <Title text="CareerDesk"/>

        <Router>
            <MainNav/>
            <main class="page">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("signin") view=|| guarded(paths::SIGN_IN, SignInPage)/>
                    <Route path=StaticSegment("signup") view=|| guarded(paths::SIGN_UP, SignUpPage)/>
                    <Route path=StaticSegment("profile") view=|| guarded(paths::PROFILE, ProfilePage)/>
                    <Route
                        path=(StaticSegment("profile"), StaticSegment("edit"))
                        view=|| guarded(paths::PROFILE_EDIT, ProfileEditPage)
                    />
                    <Route path=StaticSegment("jobs") view=|| guarded(paths::JOBS, JobsPage)/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=(StaticSegment("dashboard"), StaticSegment("report")) view=MarketReportPage/>
                    <Route path=StaticSegment("logout") view=|| guarded(paths::LOGOUT, LogoutPage)/>
                </Routes>
            </main>
        </Router>
    }
}
