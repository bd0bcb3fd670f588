use crate::{api::UserResponse, state::session::Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateView {
    Loading,
    Unauthenticated,
    Authenticated(UserResponse),
}

/// Decides whether protected content may render.
///
/// Starts in `Loading`. The first initial-lookup result or change notification
/// leaves `Loading`; afterwards only change notifications and sign-out move
/// the gate. A lookup that resolves after a notification or a sign-out has
/// already been applied is stale and dropped.
#[derive(Debug, Clone)]
pub struct SessionGate {
    view: GateView,
    lookup_resolved: bool,
    lookup_superseded: bool,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGate {
    pub fn new() -> Self {
        Self {
            view: GateView::Loading,
            lookup_resolved: false,
            lookup_superseded: false,
        }
    }

    pub fn view(&self) -> &GateView {
        &self.view
    }

    pub fn user(&self) -> Option<&UserResponse> {
        match &self.view {
            GateView::Authenticated(user) => Some(user),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.view, GateView::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.view, GateView::Authenticated(_))
    }

    pub fn should_redirect(&self) -> bool {
        matches!(self.view, GateView::Unauthenticated)
    }

    pub fn resolve_initial(&mut self, lookup: Option<Session>) {
        if self.lookup_resolved {
            log::warn!("session lookup resolved twice; ignoring the second result");
            return;
        }
        self.lookup_resolved = true;
        if self.lookup_superseded {
            log::debug!("session lookup superseded by a later session change");
            return;
        }
        self.enter(lookup);
    }

    pub fn apply_change(&mut self, session: Option<Session>) {
        self.lookup_superseded = true;
        self.enter(session);
    }

    /// Leaves the authenticated state immediately, without waiting for the
    /// provider's change notification.
    pub fn sign_out(&mut self) {
        self.lookup_superseded = true;
        self.enter(None);
    }

    fn enter(&mut self, session: Option<Session>) {
        let next = match session {
            Some(session) => GateView::Authenticated(session.user),
            None => GateView::Unauthenticated,
        };
        if next != self.view {
            log::info!(
                "session gate: {} -> {}",
                label(&self.view),
                label(&next)
            );
        }
        self.view = next;
    }
}

fn label(view: &GateView) -> &'static str {
    match view {
        GateView::Loading => "loading",
        GateView::Unauthenticated => "unauthenticated",
        GateView::Authenticated(_) => "authenticated",
    }
}
