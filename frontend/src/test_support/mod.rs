#[cfg(not(target_arch = "wasm32"))]
pub mod ssr;

pub mod helpers {
    use crate::api::{ApiClient, UserResponse};
    use crate::state::{
        session::{Session, SessionContext, SessionService},
        session_gate::SessionGate,
    };
    use leptos::*;

    pub fn signed_in_user() -> UserResponse {
        UserResponse {
            id: "u-alice".into(),
            email: "alice@example.com".into(),
            full_name: Some("Alice Example".into()),
            role: "employee".into(),
        }
    }

    pub fn session_for(user: UserResponse) -> Session {
        Session {
            user,
            expires_at: None,
        }
    }

    /// Provides a session context whose gate starts in `gate`. The service
    /// points at an unroutable host and is never called.
    pub fn provide_gate(gate: SessionGate) -> RwSignal<SessionGate> {
        let gate = create_rw_signal(gate);
        provide_context(SessionContext {
            gate,
            service: SessionService::new(ApiClient::new_with_base_url("http://127.0.0.1:9/api")),
        });
        gate
    }
}
