#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::state::session::{Role, Session, SessionContext};
    use crate::utils::storage::{MemorySessionStore, SessionStore};
    use leptos::*;
    use std::rc::Rc;

    pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = f();
        runtime.dispose();
        result
    }

    pub fn signed_in(role: Role) -> Session {
        Session::new("test-token", role)
    }

    /// Provides a session context backed by a fresh in-memory store.
    pub fn provide_session(session: Session) -> SessionContext {
        let store = MemorySessionStore::default();
        store
            .save(&session)
            .expect("memory store never fails to save");
        let ctx = SessionContext::new(Rc::new(store));
        provide_context(ctx.clone());
        ctx
    }
}
