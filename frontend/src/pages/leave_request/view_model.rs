use super::{
    repository::LeaveIntakeRepository,
    workflow::{
        reconcile, Attachment, Completion, FieldEdit, LeaveRequestDraft, LeaveRequestWorkflow,
        LeaveType, ModalVisibility, SeedChange, SubmissionOutcome, SubmitRequest, SubmitToken,
        WorkflowSeeds,
    },
};
use crate::{
    api::ApiClient,
    state::notifications::{use_notifier, Notifier},
};
use leptos::*;
use std::future::Future;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Leave request submitted successfully!";
pub const SUBMIT_FAILURE_MESSAGE: &str = "Failed to submit leave request";

#[derive(Clone, Copy)]
pub struct LeaveRequestViewModel {
    pub workflow: RwSignal<LeaveRequestWorkflow>,
    repository: StoredValue<LeaveIntakeRepository>,
    notifier: Notifier,
    on_close: Callback<()>,
}

impl LeaveRequestViewModel {
    pub fn new(
        open: Signal<bool>,
        initial_leave_type: Signal<Option<LeaveType>>,
        initial_attachment: Signal<Option<Attachment>>,
        on_close: Callback<()>,
    ) -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repository = store_value(LeaveIntakeRepository::new(api));
        let notifier = use_notifier();

        let mut initial = LeaveRequestWorkflow::new(WorkflowSeeds {
            leave_type: initial_leave_type.get_untracked(),
            attachment: initial_attachment.get_untracked(),
        });
        initial.set_visibility(ModalVisibility::from(open.get_untracked()));
        let workflow = create_rw_signal(initial);

        // Seeds are reconciled before visibility so an open triggered together
        // with a new preselection is seeded with it.
        create_effect(move |_| {
            let leave_type = initial_leave_type.get();
            apply_seed_change(workflow, SeedChange::LeaveType(leave_type));
        });
        create_effect(move |_| {
            let attachment = initial_attachment.get();
            apply_seed_change(workflow, SeedChange::Attachment(attachment));
        });
        create_effect(move |_| {
            let visibility = ModalVisibility::from(open.get());
            apply_visibility(workflow, visibility);
        });

        Self {
            workflow,
            repository,
            notifier,
            on_close,
        }
    }

    pub fn draft_field<T: 'static>(
        &self,
        read: impl Fn(&LeaveRequestDraft) -> T + 'static,
    ) -> Signal<T> {
        let workflow = self.workflow;
        Signal::derive(move || workflow.with(|wf| read(wf.draft())))
    }

    pub fn can_submit(&self) -> Signal<bool> {
        let workflow = self.workflow;
        Signal::derive(move || workflow.with(|wf| wf.can_submit()))
    }

    pub fn validation_message(&self) -> Signal<Option<String>> {
        let workflow = self.workflow;
        Signal::derive(move || workflow.with(|wf| wf.visible_error().map(|e| e.to_string())))
    }

    pub fn is_pending(&self) -> Signal<bool> {
        let workflow = self.workflow;
        Signal::derive(move || workflow.with(|wf| wf.is_pending()))
    }

    pub fn edit(&self, edit: FieldEdit) {
        self.workflow.update(|wf| wf.edit(edit));
    }

    pub fn select_attachment(&self, attachment: Attachment) {
        self.workflow.update(|wf| wf.select_attachment(attachment));
    }

    /// Starts a submission unless the workflow blocks it.
    pub fn submit(&self) {
        if let Some(request) = self.begin_submission() {
            spawn_local(self.run(request));
        }
    }

    pub fn begin_submission(&self) -> Option<SubmitRequest> {
        match self.workflow.try_update(|wf| wf.begin_submit()) {
            Some(Ok(request)) => Some(request),
            Some(Err(rejected)) => {
                log::debug!("leave request submit blocked: {rejected}");
                None
            }
            None => None,
        }
    }

    pub fn run(&self, request: SubmitRequest) -> impl Future<Output = ()> + 'static {
        run_submission(
            self.repository.get_value(),
            request,
            self.workflow,
            self.notifier,
            self.on_close,
        )
    }

    pub fn cancel(&self) {
        apply_cancel(self.workflow, self.on_close);
    }
}

pub fn apply_seed_change(workflow: RwSignal<LeaveRequestWorkflow>, change: SeedChange) {
    workflow.update(|wf| *wf = reconcile(change, wf));
}

pub fn apply_visibility(workflow: RwSignal<LeaveRequestWorkflow>, visibility: ModalVisibility) {
    if workflow.with_untracked(|wf| wf.visibility()) != visibility {
        workflow.update(|wf| wf.set_visibility(visibility));
    }
}

pub fn apply_cancel(workflow: RwSignal<LeaveRequestWorkflow>, on_close: Callback<()>) {
    workflow.update(|wf| wf.cancel());
    on_close.call(());
}

pub async fn run_submission(
    repository: LeaveIntakeRepository,
    request: SubmitRequest,
    workflow: RwSignal<LeaveRequestWorkflow>,
    notifier: Notifier,
    on_close: Callback<()>,
) {
    let token = request.token;
    let outcome = repository.submit(request.submission).await;
    apply_submission_outcome(workflow, token, outcome, notifier, on_close);
}

pub fn apply_submission_outcome(
    workflow: RwSignal<LeaveRequestWorkflow>,
    token: SubmitToken,
    outcome: SubmissionOutcome,
    notifier: Notifier,
    on_close: Callback<()>,
) {
    let Some(completion) = workflow.try_update(|wf| wf.complete(token, outcome)) else {
        log::debug!("leave request form disposed before the submission settled");
        return;
    };
    match completion {
        Completion::Submitted => {
            notifier.success(SUBMIT_SUCCESS_MESSAGE);
            on_close.call(());
        }
        Completion::Failed(reason) => {
            notifier.error(format!("{SUBMIT_FAILURE_MESSAGE}: {reason}"));
        }
        Completion::Stale => {}
    }
}
