use crate::{
    components::layout::LoadingScreen,
    router::ENTRY_PATH,
    state::{session::use_session_gate, session_gate::SessionGate},
};
use leptos::*;

/// Renders `children` only for an authenticated session. While the initial
/// lookup is outstanding a neutral placeholder is shown; without a session the
/// browser is sent back to the entry view.
#[component]
pub fn RequireSession(children: ChildrenFn) -> impl IntoView {
    let gate = use_session_gate();
    let is_authenticated = create_memo(move |_| gate.with(|g| g.is_authenticated()));
    let is_loading = create_memo(move |_| gate.with(|g| g.is_loading()));
    create_effect(move |_| {
        let Some(target) = gate.with(redirect_target) else {
            return;
        };
        log::info!("no session; redirecting to {target}");
        if let Some(win) = web_sys::window() {
            let _ = win.location().set_href(target);
        }
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingScreen /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

fn redirect_target(gate: &SessionGate) -> Option<&'static str> {
    gate.should_redirect().then_some(ENTRY_PATH)
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::RequireSession;
    use crate::state::session_gate::SessionGate;
    use crate::test_support::helpers::{provide_gate, session_for, signed_in_user};
    use crate::test_support::ssr::render_to_string;
    use leptos::*;

    fn render_with(gate: SessionGate) -> String {
        render_to_string(move || {
            provide_gate(gate);
            view! {
                <RequireSession>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireSession>
            }
        })
    }

    #[test]
    fn renders_children_when_authenticated() {
        let mut gate = SessionGate::new();
        gate.resolve_initial(Some(session_for(signed_in_user())));
        let html = render_with(gate);
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn hides_children_without_session() {
        let mut gate = SessionGate::new();
        gate.resolve_initial(None);
        let html = render_with(gate);
        assert!(!html.contains("protected-content"));
        assert!(!html.contains("Loading..."));
    }

    #[test]
    fn shows_placeholder_while_loading() {
        let html = render_with(SessionGate::new());
        assert!(!html.contains("protected-content"));
        assert!(html.contains("Loading..."));
    }

    #[test]
    fn sign_out_hides_children_immediately() {
        let mut gate = SessionGate::new();
        gate.resolve_initial(Some(session_for(signed_in_user())));
        gate.sign_out();
        let html = render_with(gate);
        assert!(!html.contains("protected-content"));
    }
}
