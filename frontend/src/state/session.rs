use crate::{
    api::{ApiClient, ApiError, SessionResponse, UserResponse},
    state::{notifications::Notifier, session_gate::SessionGate},
};
use chrono::{DateTime, Utc};
use leptos::*;
use std::{
    cell::{Cell, RefCell},
    rc::{Rc, Weak},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user: UserResponse,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<SessionResponse> for Session {
    fn from(value: SessionResponse) -> Self {
        Self {
            user: value.user,
            expires_at: value.expires_at,
        }
    }
}

type SessionHandler = Rc<dyn Fn(Option<Session>)>;

#[derive(Default)]
struct Listeners {
    next_id: u64,
    handlers: Vec<(u64, SessionHandler)>,
}

/// In-process fan-out of session changes, delivered in publish order.
#[derive(Clone, Default)]
pub struct SessionEvents {
    inner: Rc<RefCell<Listeners>>,
}

impl SessionEvents {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl Fn(Option<Session>) + 'static) -> SessionSubscription {
        let mut listeners = self.inner.borrow_mut();
        listeners.next_id += 1;
        let id = listeners.next_id;
        listeners.handlers.push((id, Rc::new(handler)));
        SessionSubscription {
            id,
            listeners: Rc::downgrade(&self.inner),
            released: Cell::new(false),
        }
    }

    pub fn publish(&self, session: Option<Session>) {
        let snapshot: Vec<(u64, SessionHandler)> = self.inner.borrow().handlers.clone();
        for (id, handler) in snapshot {
            // A handler may release another subscription mid-delivery.
            let still_registered = self
                .inner
                .borrow()
                .handlers
                .iter()
                .any(|(registered, _)| *registered == id);
            if still_registered {
                handler(session.clone());
            }
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().handlers.len()
    }
}

/// Standing registration on [`SessionEvents`].
///
/// Released exactly once: either through [`SessionSubscription::release`] or
/// when dropped, whichever comes first.
pub struct SessionSubscription {
    id: u64,
    listeners: Weak<RefCell<Listeners>>,
    released: Cell<bool>,
}

impl SessionSubscription {
    /// Returns `false` when the subscription was already released.
    pub fn release(&self) -> bool {
        if self.released.replace(true) {
            return false;
        }
        if let Some(listeners) = self.listeners.upgrade() {
            listeners
                .borrow_mut()
                .handlers
                .retain(|(id, _)| *id != self.id);
        }
        log::debug!("session subscription {} released", self.id);
        true
    }

    pub fn is_released(&self) -> bool {
        self.released.get()
    }
}

impl Drop for SessionSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

/// Facade over the session collaborator: one-shot lookup, change
/// subscription and sign-out.
#[derive(Clone)]
pub struct SessionService {
    api: ApiClient,
    events: SessionEvents,
}

impl SessionService {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            events: SessionEvents::new(),
        }
    }

    pub fn events(&self) -> &SessionEvents {
        &self.events
    }

    pub async fn current_session(&self) -> Result<Option<Session>, ApiError> {
        self.api
            .get_session()
            .await
            .map(|session| session.map(Session::from))
    }

    pub fn subscribe(&self, handler: impl Fn(Option<Session>) + 'static) -> SessionSubscription {
        self.events.subscribe(handler)
    }

    pub fn unsubscribe(&self, subscription: SessionSubscription) {
        subscription.release();
    }

    pub async fn sign_out(&self) -> Result<(), ApiError> {
        self.api.sign_out().await?;
        self.events.publish(None);
        #[cfg(target_arch = "wasm32")]
        if let Err(err) = crate::utils::storage::broadcast_session_change(
            &uuid::Uuid::new_v4().to_string(),
        ) {
            log::warn!("could not notify other tabs of sign-out: {err}");
        }
        Ok(())
    }

    /// Looks the session up again and publishes the result to subscribers.
    pub async fn refresh(&self) {
        match self.current_session().await {
            Ok(session) => self.events.publish(session),
            Err(err) => {
                log::warn!("session refresh failed: {err}");
                self.events.publish(None);
            }
        }
    }

    /// Re-checks the session whenever another tab touches the session marker.
    #[cfg(target_arch = "wasm32")]
    pub fn listen_to_other_tabs(&self) -> Option<StorageBridge> {
        use wasm_bindgen::{closure::Closure, JsCast};

        let window = web_sys::window()?;
        let service = self.clone();
        let closure = Closure::<dyn FnMut(web_sys::StorageEvent)>::new(
            move |event: web_sys::StorageEvent| {
                if event.key().as_deref() != Some(crate::utils::storage::SESSION_BROADCAST_KEY) {
                    return;
                }
                let service = service.clone();
                spawn_local(async move { service.refresh().await });
            },
        );
        window
            .add_event_listener_with_callback("storage", closure.as_ref().unchecked_ref())
            .ok()?;
        Some(StorageBridge { window, closure })
    }
}

#[cfg(target_arch = "wasm32")]
pub struct StorageBridge {
    window: web_sys::Window,
    closure: wasm_bindgen::closure::Closure<dyn FnMut(web_sys::StorageEvent)>,
}

#[cfg(target_arch = "wasm32")]
impl Drop for StorageBridge {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;
        let _ = self
            .window
            .remove_event_listener_with_callback("storage", self.closure.as_ref().unchecked_ref());
    }
}

#[derive(Clone)]
pub struct SessionContext {
    pub gate: RwSignal<SessionGate>,
    pub service: SessionService,
}

/// Wires a gate to the collaborator: one standing subscription whose
/// notifications are applied in arrival order.
pub fn attach_gate(service: &SessionService, gate: RwSignal<SessionGate>) -> SessionSubscription {
    service.subscribe(move |session| {
        if gate.try_update(|g| g.apply_change(session)).is_none() {
            log::debug!("session change arrived after the gate was disposed");
        }
    })
}

/// The single initial lookup. A failing lookup counts as no session.
pub async fn resolve_initial_session(service: SessionService, gate: RwSignal<SessionGate>) {
    let lookup = match service.current_session().await {
        Ok(session) => session,
        Err(err) => {
            log::warn!("session lookup failed: {err}");
            None
        }
    };
    let _ = gate.try_update(|g| g.resolve_initial(lookup));
}

pub async fn sign_out_and_notify(ctx: SessionContext, notifier: Notifier) {
    ctx.gate.update(|g| g.sign_out());
    match ctx.service.sign_out().await {
        Ok(()) => notifier.success("Signed out successfully"),
        Err(err) => {
            log::error!("sign-out failed: {err}");
            notifier.error(format!("Sign out failed: {}", err));
        }
    }
}

fn create_session_context(service: SessionService) -> SessionContext {
    let gate = create_rw_signal(SessionGate::new());

    let subscription = attach_gate(&service, gate);
    on_cleanup(move || {
        subscription.release();
    });

    #[cfg(target_arch = "wasm32")]
    if let Some(bridge) = service.listen_to_other_tabs() {
        on_cleanup(move || drop(bridge));
    }

    spawn_local(resolve_initial_session(service.clone(), gate));

    SessionContext { gate, service }
}

#[component]
pub fn SessionProvider(children: Children) -> impl IntoView {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let ctx = create_session_context(SessionService::new(api));
    provide_context(ctx);
    view! { <>{children()}</> }
}

pub fn use_session() -> Option<SessionContext> {
    use_context::<SessionContext>()
}

pub fn use_session_gate() -> RwSignal<SessionGate> {
    use_session()
        .map(|ctx| ctx.gate)
        .unwrap_or_else(|| create_rw_signal(SessionGate::new()))
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::notifications::NotificationLevel;
    use crate::state::session_gate::GateView;
    use crate::test_support::ssr::{with_runtime, OFFLINE_API_BASE_URL};
    use httpmock::prelude::*;
    use serde_json::json;

    fn session_body() -> serde_json::Value {
        json!({
            "user": {
                "id": "u1",
                "email": "alice@example.com",
                "full_name": "Alice Example",
                "role": "hr"
            }
        })
    }

    #[test]
    fn attached_gate_follows_notifications_until_released() {
        with_runtime(|| {
            let service = SessionService::new(ApiClient::new_with_base_url(OFFLINE_API_BASE_URL));
            let gate = create_rw_signal(SessionGate::new());
            let subscription = attach_gate(&service, gate);

            service.events().publish(Some(Session {
                user: crate::test_support::helpers::signed_in_user(),
                expires_at: None,
            }));
            assert!(gate.get_untracked().is_authenticated());

            service.events().publish(None);
            assert!(gate.get_untracked().should_redirect());

            service.unsubscribe(subscription);
            assert_eq!(service.events().listener_count(), 0);
            service.events().publish(Some(Session {
                user: crate::test_support::helpers::signed_in_user(),
                expires_at: None,
            }));
            assert!(gate.get_untracked().should_redirect());
        });
    }

    #[tokio::test]
    async fn initial_lookup_authenticates_gate() {
        let server = MockServer::start_async().await;
        let lookup = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/auth/session");
                then.status(200).json_body(session_body());
            })
            .await;

        let runtime = create_runtime();
        let service = SessionService::new(ApiClient::new_with_base_url(server.url("/api")));
        let gate = create_rw_signal(SessionGate::new());
        resolve_initial_session(service, gate).await;

        match gate.get_untracked().view() {
            GateView::Authenticated(user) => assert_eq!(user.id, "u1"),
            other => panic!("unexpected gate view {:?}", other),
        }
        lookup.assert_hits_async(1).await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn failed_lookup_counts_as_unauthenticated() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/auth/session");
                then.status(503);
            })
            .await;

        let runtime = create_runtime();
        let service = SessionService::new(ApiClient::new_with_base_url(server.url("/api")));
        let gate = create_rw_signal(SessionGate::new());
        resolve_initial_session(service, gate).await;
        assert!(gate.get_untracked().should_redirect());
        runtime.dispose();
    }

    #[tokio::test]
    async fn provider_teardown_releases_its_subscription() {
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let runtime = create_runtime();
                let service =
                    SessionService::new(ApiClient::new_with_base_url(OFFLINE_API_BASE_URL));
                let events = service.events().clone();

                let (ctx, disposer) =
                    leptos_reactive::as_child_of_current_owner(create_session_context)(service);
                assert_eq!(events.listener_count(), 1);

                drop(disposer);
                assert_eq!(events.listener_count(), 0);

                events.publish(Some(Session {
                    user: crate::test_support::helpers::signed_in_user(),
                    expires_at: None,
                }));
                assert_eq!(events.listener_count(), 0);
                drop(ctx);
                runtime.dispose();
            })
            .await;
    }

    #[tokio::test]
    async fn sign_out_flips_gate_and_notifies_success() {
        let server = MockServer::start_async().await;
        let logout = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/logout");
                then.status(200).json_body(json!({}));
            })
            .await;

        let runtime = create_runtime();
        let service = SessionService::new(ApiClient::new_with_base_url(server.url("/api")));
        let gate = create_rw_signal(SessionGate::new());
        gate.update(|g| {
            g.resolve_initial(Some(Session {
                user: crate::test_support::helpers::signed_in_user(),
                expires_at: None,
            }))
        });
        let observed = Rc::new(RefCell::new(Vec::new()));
        let _watch = {
            let observed = observed.clone();
            service.subscribe(move |s| observed.borrow_mut().push(s.is_some()))
        };
        let notifier = Notifier::new();

        sign_out_and_notify(SessionContext { gate, service }, notifier).await;

        assert!(gate.get_untracked().should_redirect());
        assert_eq!(*observed.borrow(), vec![false]);
        let entries = notifier.entries().get_untracked();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, NotificationLevel::Success);
        assert_eq!(entries[0].message, "Signed out successfully");
        logout.assert_async().await;
        runtime.dispose();
    }

    #[tokio::test]
    async fn rejected_sign_out_still_leaves_protected_view() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/logout");
                then.status(500).json_body(json!({
                    "error": "provider down",
                    "code": "UPSTREAM"
                }));
            })
            .await;

        let runtime = create_runtime();
        let service = SessionService::new(ApiClient::new_with_base_url(server.url("/api")));
        let gate = create_rw_signal(SessionGate::new());
        gate.update(|g| {
            g.resolve_initial(Some(Session {
                user: crate::test_support::helpers::signed_in_user(),
                expires_at: None,
            }))
        });
        let notifier = Notifier::new();

        sign_out_and_notify(SessionContext { gate, service }, notifier).await;

        assert!(gate.get_untracked().should_redirect());
        let entries = notifier.entries().get_untracked();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, NotificationLevel::Error);
        assert!(entries[0].message.contains("provider down"));
        runtime.dispose();
    }

    #[tokio::test]
    async fn refresh_publishes_reestablished_session() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/auth/session");
                then.status(200).json_body(session_body());
            })
            .await;

        let runtime = create_runtime();
        let service = SessionService::new(ApiClient::new_with_base_url(server.url("/api")));
        let gate = create_rw_signal(SessionGate::new());
        let _subscription = attach_gate(&service, gate);
        gate.update(|g| g.resolve_initial(None));

        service.refresh().await;
        assert!(gate.get_untracked().is_authenticated());
        runtime.dispose();
    }
}
