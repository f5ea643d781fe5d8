use leptos::*;
use leptos_router::use_params_map;

#[component]
pub fn InternshipDetailPage() -> impl IntoView {
    let params = use_params_map();
    let internship_id = move || params.with(|p| p.get("id").cloned().unwrap_or_default());
    view! {
        <section class="px-4 py-6 sm:px-0 space-y-2">
            <h2 class="text-2xl font-bold text-fg">"Internship"</h2>
            <p class="text-sm text-fg-muted">{move || format!("Reference #{}", internship_id())}</p>
        </section>
    }
}

#[component]
pub fn PostInternshipPage() -> impl IntoView {
    view! {
        <section class="px-4 py-6 sm:px-0 space-y-2">
            <h2 class="text-2xl font-bold text-fg">"Post a new internship"</h2>
            <p class="text-sm text-fg-muted">"Publish an opening for students to apply to."</p>
        </section>
    }
}
