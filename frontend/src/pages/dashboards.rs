//! Role dashboards. Their content is owned by the feature teams; the shell only
//! reserves the routes and shows who is signed in.

use crate::state::session::{use_session, Role};
use leptos::*;

#[component]
fn DashboardShell(role: Role, children: Children) -> impl IntoView {
    let session = use_session().session();
    let signed_in_as = move || {
        session
            .get()
            .role
            .map(|r| format!("Signed in as {}", r.label()))
            .unwrap_or_default()
    };
    view! {
        <section class="px-4 py-6 sm:px-0 space-y-4">
            <h2 class="text-2xl font-bold text-fg">{format!("{} Dashboard", role.label())}</h2>
            <p class="text-sm text-fg-muted">{signed_in_as}</p>
            {children()}
        </section>
    }
}

#[component]
pub fn StudentDashboardPage() -> impl IntoView {
    view! {
        <DashboardShell role=Role::Student>
            <p>"Browse open internships and track your applications."</p>
        </DashboardShell>
    }
}

#[component]
pub fn MentorDashboardPage() -> impl IntoView {
    view! {
        <DashboardShell role=Role::Mentor>
            <p>"Review your matched students and pending requests."</p>
        </DashboardShell>
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <DashboardShell role=Role::Admin>
            <a href="/admin/internships/new" class="text-action-primary-bg font-medium">
                "Post a new internship"
            </a>
        </DashboardShell>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::{provide_session, signed_in};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dashboard_names_role() {
        let html = render_to_string(move || {
            provide_session(signed_in(Role::Mentor));
            view! { <MentorDashboardPage /> }
        });
        assert!(html.contains("Mentor Dashboard"));
        assert!(html.contains("Signed in as Mentor"));
    }

    #[test]
    fn admin_dashboard_links_to_posting_form() {
        let html = render_to_string(move || {
            provide_session(signed_in(Role::Admin));
            view! { <AdminDashboardPage /> }
        });
        assert!(html.contains("/admin/internships/new"));
    }
}
