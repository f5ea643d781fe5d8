use crate::{
    components::guard::redirect_to_login,
    router::LOGIN_PATH,
    state::session::{use_session, Session},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

/// Links shown in the navbar for a session. Logout is rendered separately.
pub fn nav_links(session: &Session) -> Vec<NavLink> {
    match (session.is_signed_in(), session.role) {
        (true, Some(role)) => vec![NavLink {
            href: role.dashboard_path(),
            label: "Dashboard",
        }],
        (true, None) => Vec::new(),
        (false, _) => vec![
            NavLink {
                href: "/",
                label: "Home",
            },
            NavLink {
                href: LOGIN_PATH,
                label: "Login",
            },
            NavLink {
                href: "/register",
                label: "Register",
            },
        ],
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_session();
    let session = ctx.session();
    let signed_in = move || session.with(Session::is_signed_in);
    let role_label = move || {
        session
            .get()
            .role
            .map(|role| role.label())
            .unwrap_or_default()
    };
    let on_logout = Callback::new(move |_: ev::MouseEvent| {
        // The signal is reset even when storage fails; the error is already logged.
        let _ = ctx.sign_out();
        redirect_to_login();
    });
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">"Internship Portal"</h1>
                    <nav class="flex items-center space-x-4">
                        {move || {
                            session
                                .with(nav_links)
                                .into_iter()
                                .map(|link| {
                                    view! {
                                        <a
                                            href=link.href
                                            class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                                        >
                                            {link.label}
                                        </a>
                                    }
                                })
                                .collect_view()
                        }}
                        <Show when=signed_in>
                            <span class="text-sm text-fg-muted">{role_label}</span>
                            <button
                                on:click=move |ev| on_logout.call(ev)
                                class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover"
                            >
                                "Logout"
                            </button>
                        </Show>
                    </nav>
                </div>
            </div>
        </header>
    }
}

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Navbar/>
            <main class="max-w-7xl mx-auto py-6 sm:px-6 lg:px-8">
                {children()}
            </main>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::session::Role;

    #[test]
    fn signed_out_links_point_to_public_pages() {
        let hrefs: Vec<_> = nav_links(&Session::signed_out())
            .into_iter()
            .map(|l| l.href)
            .collect();
        assert_eq!(hrefs, vec!["/", "/login", "/register"]);
    }

    #[test]
    fn signed_in_link_points_to_role_dashboard() {
        for role in Role::ALL {
            let links = nav_links(&Session::new("t1", role));
            assert_eq!(links.len(), 1);
            assert_eq!(links[0].href, role.dashboard_path());
        }
    }

    #[test]
    fn token_without_role_has_no_dashboard_link() {
        let session = Session {
            token: Some("t1".into()),
            role: None,
        };
        assert!(nav_links(&session).is_empty());
    }
}
