use leptos::*;
use leptos_router::*;

use crate::{
    components::{guard::RequireRole, layout::Layout},
    pages::{
        AdminDashboardPage, HomePage, InternshipDetailPage, LoginPage, MentorDashboardPage,
        PostInternshipPage, RegisterPage, StudentDashboardPage,
    },
    state::session::{Role, SessionProvider},
};

pub const LOGIN_PATH: &str = "/login";

pub const STUDENT_ONLY: &[Role] = &[Role::Student];
pub const MENTOR_ONLY: &[Role] = &[Role::Mentor];
pub const ADMIN_ONLY: &[Role] = &[Role::Admin];

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    LOGIN_PATH,
    "/register",
    "/student/dashboard",
    "/internships/:id",
    "/mentor/dashboard",
    "/admin/dashboard",
    "/admin/internships/new",
];

pub const PUBLIC_ROUTE_PATHS: &[&str] = &["/", LOGIN_PATH, "/register"];

pub const PROTECTED_ROUTES: &[(&str, &[Role])] = &[
    ("/student/dashboard", STUDENT_ONLY),
    ("/internships/:id", STUDENT_ONLY),
    ("/mentor/dashboard", MENTOR_ONLY),
    ("/admin/dashboard", ADMIN_ONLY),
    ("/admin/internships/new", ADMIN_ONLY),
];

/// Roles allowed on a route pattern, or `None` for public and unknown paths.
pub fn allowed_roles_for(path: &str) -> Option<&'static [Role]> {
    PROTECTED_ROUTES
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, roles)| *roles)
}

pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(crate::api::ApiClient::new());
    view! {
        <SessionProvider>
            <Router>
                <Layout>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path=LOGIN_PATH view=LoginPage/>
                        <Route path="/register" view=RegisterPage/>
                        <Route path="/student/dashboard" view=ProtectedStudentDashboard/>
                        <Route path="/internships/:id" view=ProtectedInternshipDetail/>
                        <Route path="/mentor/dashboard" view=ProtectedMentorDashboard/>
                        <Route path="/admin/dashboard" view=ProtectedAdminDashboard/>
                        <Route path="/admin/internships/new" view=ProtectedPostInternship/>
                    </Routes>
                </Layout>
            </Router>
        </SessionProvider>
    }
}

#[component]
fn ProtectedStudentDashboard() -> impl IntoView {
    view! { <RequireRole allowed_roles=STUDENT_ONLY><StudentDashboardPage/></RequireRole> }
}

#[component]
fn ProtectedInternshipDetail() -> impl IntoView {
    view! { <RequireRole allowed_roles=STUDENT_ONLY><InternshipDetailPage/></RequireRole> }
}

#[component]
fn ProtectedMentorDashboard() -> impl IntoView {
    view! { <RequireRole allowed_roles=MENTOR_ONLY><MentorDashboardPage/></RequireRole> }
}

#[component]
fn ProtectedAdminDashboard() -> impl IntoView {
    view! { <RequireRole allowed_roles=ADMIN_ONLY><AdminDashboardPage/></RequireRole> }
}

#[component]
fn ProtectedPostInternship() -> impl IntoView {
    view! { <RequireRole allowed_roles=ADMIN_ONLY><PostInternshipPage/></RequireRole> }
}
