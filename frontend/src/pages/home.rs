use crate::state::session::use_session;
use leptos::*;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session().session();
    let dashboard = move || {
        session.with(|s| {
            s.role
                .filter(|_| s.is_signed_in())
                .map(|role| role.dashboard_path())
        })
    };
    view! {
        <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8 text-center">
            <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                "University Internship Portal"
            </h1>
            <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                "Internships, mentors and applications in one place"
            </p>
            <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center gap-3 lg:mt-8">
                {move || match dashboard() {
                    Some(path) => view! {
                        <a href=path class="px-8 py-3 rounded-md text-action-primary-text bg-action-primary-bg">
                            "Go to dashboard"
                        </a>
                    }
                    .into_view(),
                    None => view! {
                        <a href="/login" class="px-8 py-3 rounded-md text-action-primary-text bg-action-primary-bg">
                            "Sign in"
                        </a>
                        <a href="/register" class="px-8 py-3 rounded-md border border-border text-fg">
                            "Register"
                        </a>
                    }
                    .into_view(),
                }}
            </div>
        </div>
    }
}
