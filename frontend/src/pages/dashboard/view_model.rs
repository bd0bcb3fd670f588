use crate::pages::dashboard::repository::{sample_snapshot, DashboardSnapshot};
use crate::pages::leave_request::{Attachment, LeaveType};
use crate::state::{
    notifications::{use_notifier, Notifier},
    session::{sign_out_and_notify, use_session, SessionContext},
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub snapshot: StoredValue<DashboardSnapshot>,
    pub modal_open: RwSignal<bool>,
    pub selected_leave_type: RwSignal<Option<LeaveType>>,
    pub initial_attachment: RwSignal<Option<Attachment>>,
    pub sign_out_pending: RwSignal<bool>,
    session: StoredValue<Option<SessionContext>>,
    notifier: Notifier,
}

impl DashboardViewModel {
    pub fn new() -> Self {
        Self {
            snapshot: store_value(sample_snapshot()),
            modal_open: create_rw_signal(false),
            selected_leave_type: create_rw_signal(None),
            initial_attachment: create_rw_signal(None),
            sign_out_pending: create_rw_signal(false),
            session: store_value(use_session()),
            notifier: use_notifier(),
        }
    }

    /// Opens the leave form, preselecting `leave_type` when given.
    pub fn open_modal(&self, leave_type: Option<LeaveType>) {
        apply_open_modal(self.selected_leave_type, self.modal_open, leave_type);
    }

    /// Display name of the signed-in user, if any.
    pub fn signed_in_as(&self) -> Signal<Option<String>> {
        let session = self.session;
        Signal::derive(move || {
            session
                .with_value(|ctx| ctx.as_ref().map(|ctx| ctx.gate))
                .and_then(|gate| gate.with(|g| g.user().map(|u| u.display_name().to_string())))
        })
    }

    pub fn close_modal(&self) {
        self.modal_open.set(false);
    }

    pub fn sign_out(&self) {
        if self.sign_out_pending.get_untracked() {
            return;
        }
        let Some(ctx) = self.session.get_value() else {
            log::warn!("sign out requested without a session provider");
            return;
        };
        let pending = self.sign_out_pending;
        let notifier = self.notifier;
        pending.set(true);
        spawn_local(async move {
            sign_out_and_notify(ctx, notifier).await;
            let _ = pending.try_set(false);
        });
    }
}

impl Default for DashboardViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn apply_open_modal(
    selected_leave_type: RwSignal<Option<LeaveType>>,
    modal_open: RwSignal<bool>,
    leave_type: Option<LeaveType>,
) {
    selected_leave_type.set(leave_type);
    modal_open.set(true);
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    match use_context::<DashboardViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = DashboardViewModel::new();
            provide_context(vm);
            vm
        }
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn apply_card_opens_without_preselection() {
        with_runtime(|| {
            let vm = DashboardViewModel::new();
            vm.selected_leave_type.set(Some(LeaveType::Sick));
            vm.open_modal(None);
            assert!(vm.modal_open.get_untracked());
            assert_eq!(vm.selected_leave_type.get_untracked(), None);
        });
    }

    #[test]
    fn quick_pick_opens_with_preselection() {
        with_runtime(|| {
            let vm = DashboardViewModel::new();
            vm.open_modal(Some(LeaveType::Personal));
            assert!(vm.modal_open.get_untracked());
            assert_eq!(
                vm.selected_leave_type.get_untracked(),
                Some(LeaveType::Personal)
            );
            vm.close_modal();
            assert!(!vm.modal_open.get_untracked());
            assert_eq!(
                vm.selected_leave_type.get_untracked(),
                Some(LeaveType::Personal)
            );
        });
    }

    #[test]
    fn view_model_is_shared_through_context() {
        with_runtime(|| {
            let first = use_dashboard_view_model();
            first.open_modal(None);
            let second = use_dashboard_view_model();
            assert!(second.modal_open.get_untracked());
        });
    }
}
