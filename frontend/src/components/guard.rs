//! Route-level access control. The guard only decides what the client renders;
//! the API still has to authorize every request carrying the token.

use crate::{
    router::LOGIN_PATH,
    state::session::{use_session, Role, Session},
};
use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    RedirectToLogin,
}

/// Allows only a session that has a token and one of `allowed_roles`.
pub fn decide(allowed_roles: &[Role], session: &Session) -> AccessDecision {
    if session.token().is_none() {
        return AccessDecision::RedirectToLogin;
    }
    match session.role {
        Some(role) if allowed_roles.contains(&role) => AccessDecision::Allow,
        _ => AccessDecision::RedirectToLogin,
    }
}

fn should_redirect(current_path: &str) -> bool {
    current_path != LOGIN_PATH
}

/// Replaces the current history entry so "back" does not land on the protected view.
pub(crate) fn redirect_to_login() {
    let Some(win) = web_sys::window() else {
        return;
    };
    let location = win.location();
    if location.pathname().is_ok_and(|path| !should_redirect(&path)) {
        return;
    }
    if let Err(err) = location.replace(LOGIN_PATH) {
        log::error!("redirect to {} failed: {:?}", LOGIN_PATH, err);
    }
}

/// Access decision for the current session, re-evaluated whenever the session changes.
pub fn access_decision(allowed_roles: &'static [Role]) -> Memo<AccessDecision> {
    let session = use_session().session();
    create_memo(move |_| session.with(|s| decide(allowed_roles, s)))
}

#[component]
pub fn RequireRole(allowed_roles: &'static [Role], children: ChildrenFn) -> impl IntoView {
    let decision = access_decision(allowed_roles);
    create_effect(move |_| {
        if decision.get() == AccessDecision::RedirectToLogin {
            log::debug!("access denied for roles {:?}, redirecting", allowed_roles);
            redirect_to_login();
        }
    });
    view! {
        <Show when=move || decision.get() == AccessDecision::Allow fallback=|| ()>
            {children()}
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::{access_decision, decide, should_redirect, AccessDecision};
    use crate::router::LOGIN_PATH;
    use crate::state::session::{Role, Session};
    use crate::test_support::helpers::{provide_session, with_runtime};
    use leptos::*;

    const ROLE_SETS: &[&[Role]] = &[
        &[],
        &[Role::Student],
        &[Role::Mentor],
        &[Role::Admin],
        &[Role::Student, Role::Mentor],
        &[Role::Student, Role::Mentor, Role::Admin],
    ];

    fn role_options() -> impl Iterator<Item = Option<Role>> {
        std::iter::once(None).chain(Role::ALL.into_iter().map(Some))
    }

    #[test]
    fn missing_token_always_redirects() {
        for allowed in ROLE_SETS {
            for role in role_options() {
                for token in [None, Some(String::new())] {
                    let session = Session { token, role };
                    assert_eq!(
                        decide(allowed, &session),
                        AccessDecision::RedirectToLogin,
                        "allowed={:?} session={:?}",
                        allowed,
                        session
                    );
                }
            }
        }
    }

    #[test]
    fn token_and_member_role_allows() {
        for allowed in ROLE_SETS {
            for role in allowed.iter().copied() {
                assert_eq!(
                    decide(allowed, &Session::new("t1", role)),
                    AccessDecision::Allow
                );
            }
        }
    }

    #[test]
    fn token_with_foreign_or_missing_role_redirects() {
        for allowed in ROLE_SETS {
            for role in role_options() {
                if role.is_some_and(|r| allowed.contains(&r)) {
                    continue;
                }
                let session = Session {
                    token: Some("t1".into()),
                    role,
                };
                assert_eq!(decide(allowed, &session), AccessDecision::RedirectToLogin);
            }
        }
    }

    #[test]
    fn decision_is_repeatable() {
        let session = Session::new("t1", Role::Mentor);
        let first = decide(&[Role::Mentor], &session);
        for _ in 0..10 {
            assert_eq!(decide(&[Role::Mentor], &session), first);
        }
        assert_eq!(session, Session::new("t1", Role::Mentor));
    }

    #[test]
    fn decision_tracks_sign_in_and_sign_out() {
        with_runtime(|| {
            let ctx = provide_session(Session::signed_out());
            let decision = access_decision(&[Role::Mentor]);
            assert_eq!(decision.get(), AccessDecision::RedirectToLogin);

            ctx.sign_in("t1", Role::Mentor).unwrap();
            assert_eq!(decision.get(), AccessDecision::Allow);

            ctx.sign_in("t2", Role::Student).unwrap();
            assert_eq!(decision.get(), AccessDecision::RedirectToLogin);

            ctx.sign_in("t3", Role::Mentor).unwrap();
            ctx.sign_out().unwrap();
            assert_eq!(decision.get(), AccessDecision::RedirectToLogin);
        });
    }

    #[test]
    fn no_redirect_loop_on_login_page() {
        assert!(!should_redirect(LOGIN_PATH));
        assert!(should_redirect("/admin/dashboard"));
        assert!(should_redirect("/"));
    }

    #[test]
    fn scenarios() {
        assert_eq!(
            decide(&[Role::Student], &Session::new("t1", Role::Student)),
            AccessDecision::Allow
        );
        assert_eq!(
            decide(&[Role::Student], &Session::new("t1", Role::Admin)),
            AccessDecision::RedirectToLogin
        );
        assert_eq!(
            decide(&[Role::Admin], &Session::signed_out()),
            AccessDecision::RedirectToLogin
        );
    }
}
