use crate::utils::dates::parse_form_date;
use chrono::NaiveDate;
use std::{fmt, str::FromStr};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeaveType {
    Annual,
    Sick,
    Personal,
    Maternity,
}

impl LeaveType {
    pub const ALL: [LeaveType; 4] = [
        LeaveType::Annual,
        LeaveType::Sick,
        LeaveType::Personal,
        LeaveType::Maternity,
    ];

    /// Wire value sent to the intake endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual",
            LeaveType::Sick => "Sick",
            LeaveType::Personal => "Personal",
            LeaveType::Maternity => "Maternity",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LeaveType::Annual => "Annual Leave",
            LeaveType::Sick => "Sick Leave",
            LeaveType::Personal => "Personal Leave",
            LeaveType::Maternity => "Maternity/Paternity Leave",
        }
    }

    /// Lenient parse used for form values: blank or unknown means "no selection".
    pub fn from_form_value(value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        match value.parse() {
            Ok(leave_type) => Some(leave_type),
            Err(err) => {
                log::debug!("ignoring leave type selection: {err}");
                None
            }
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeaveType {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        LeaveType::ALL
            .into_iter()
            .find(|candidate| candidate.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DraftError::UnknownLeaveType(needle.to_string()))
    }
}

/// A file chosen by the user. The browser handle is kept so the bytes can be
/// read at submission time.
#[derive(Debug, Clone)]
pub struct Attachment {
    pub name: String,
    pub size: u64,
    pub content_type: Option<String>,
    file: Option<web_sys::File>,
}

impl Attachment {
    pub fn new(name: impl Into<String>, size: u64, content_type: Option<String>) -> Self {
        Self {
            name: name.into(),
            size,
            content_type,
            file: None,
        }
    }

    pub fn from_file(file: web_sys::File) -> Self {
        let content_type = file.type_();
        Self {
            name: file.name(),
            size: file.size() as u64,
            content_type: (!content_type.is_empty()).then_some(content_type),
            file: Some(file),
        }
    }

    pub fn file(&self) -> Option<&web_sys::File> {
        self.file.as_ref()
    }
}

impl PartialEq for Attachment {
    fn eq(&self, other: &Self) -> bool {
        let same_file = match (&self.file, &other.file) {
            (Some(a), Some(b)) => js_sys::Object::is(a, b),
            (None, None) => true,
            _ => false,
        };
        same_file
            && self.name == other.name
            && self.size == other.size
            && self.content_type == other.content_type
    }
}

impl Eq for Attachment {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    EmployeeName,
    LeaveType,
    StartDate,
    EndDate,
    Reason,
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DraftField::EmployeeName => "Employee name",
            DraftField::LeaveType => "Leave type",
            DraftField::StartDate => "Start date",
            DraftField::EndDate => "End date",
            DraftField::Reason => "Reason",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("{0} is required")]
    Missing(DraftField),
    #[error("{0} must be a valid date")]
    InvalidDate(DraftField),
    #[error("End date must be on or after the start date")]
    EndBeforeStart,
    #[error("unknown leave type `{0}`")]
    UnknownLeaveType(String),
}

/// Field values currently held by the modal. Dates are kept as the raw
/// `<input type="date">` strings until validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaveRequestDraft {
    pub employee_name: String,
    pub leave_type: Option<LeaveType>,
    pub start_date: String,
    pub end_date: String,
    pub reason: String,
    pub attachment: Option<Attachment>,
}

/// A draft that passed validation, ready to hand to the intake endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveSubmission {
    pub employee_name: String,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: String,
    pub attachment: Option<Attachment>,
}

impl LeaveRequestDraft {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn seeded(seeds: &WorkflowSeeds) -> Self {
        Self {
            leave_type: seeds.leave_type,
            attachment: seeds.attachment.clone(),
            ..Self::default()
        }
    }

    /// True while none of the typed fields hold any text.
    pub fn is_untouched(&self) -> bool {
        [
            &self.employee_name,
            &self.start_date,
            &self.end_date,
            &self.reason,
        ]
        .iter()
        .all(|value| value.trim().is_empty())
    }

    pub fn validate(&self) -> Result<LeaveSubmission, DraftError> {
        let employee_name = required(&self.employee_name, DraftField::EmployeeName)?;
        let leave_type = self
            .leave_type
            .ok_or(DraftError::Missing(DraftField::LeaveType))?;
        let start_date = required_date(&self.start_date, DraftField::StartDate)?;
        let end_date = required_date(&self.end_date, DraftField::EndDate)?;
        let reason = required(&self.reason, DraftField::Reason)?;
        if end_date < start_date {
            return Err(DraftError::EndBeforeStart);
        }
        Ok(LeaveSubmission {
            employee_name,
            leave_type,
            start_date,
            end_date,
            reason,
            attachment: self.attachment.clone(),
        })
    }
}

fn required(value: &str, field: DraftField) -> Result<String, DraftError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(DraftError::Missing(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn required_date(value: &str, field: DraftField) -> Result<NaiveDate, DraftError> {
    if value.trim().is_empty() {
        return Err(DraftError::Missing(field));
    }
    parse_form_date(value).ok_or(DraftError::InvalidDate(field))
}

/// Preselection supplied by the page hosting the modal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkflowSeeds {
    pub leave_type: Option<LeaveType>,
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedChange {
    LeaveType(Option<LeaveType>),
    Attachment(Option<Attachment>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalVisibility {
    Closed,
    Open,
}

impl From<bool> for ModalVisibility {
    fn from(open: bool) -> Self {
        if open {
            ModalVisibility::Open
        } else {
            ModalVisibility::Closed
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    EmployeeName(String),
    LeaveType(Option<LeaveType>),
    StartDate(String),
    EndDate(String),
    Reason(String),
}

/// Identifies one submission attempt. Results carrying any other token are
/// stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitToken(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitRequest {
    pub token: SubmitToken,
    pub submission: LeaveSubmission,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Success,
    Failure(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitRejected {
    #[error("the leave request form is not open")]
    NotOpen,
    #[error("a submission is already in flight")]
    AlreadyPending,
    #[error(transparent)]
    Invalid(#[from] DraftError),
}

/// What the host has to do after a submission settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Draft was reset; the modal must be closed.
    Submitted,
    /// Draft kept for correction and retry.
    Failed(String),
    /// Result belonged to a discarded draft and was dropped.
    Stale,
}

/// State machine behind the leave request modal.
///
/// Visibility is driven by the host. Opening builds a fresh draft from the
/// current seeds and closing discards it. At most one submission is in flight;
/// discarding the draft invalidates its token so a late response has no
/// effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaveRequestWorkflow {
    visibility: ModalVisibility,
    seeds: WorkflowSeeds,
    draft: LeaveRequestDraft,
    generation: u64,
    in_flight: Option<SubmitToken>,
}

impl LeaveRequestWorkflow {
    pub fn new(seeds: WorkflowSeeds) -> Self {
        Self {
            visibility: ModalVisibility::Closed,
            seeds,
            draft: LeaveRequestDraft::empty(),
            generation: 0,
            in_flight: None,
        }
    }

    pub fn visibility(&self) -> ModalVisibility {
        self.visibility
    }

    pub fn is_open(&self) -> bool {
        self.visibility == ModalVisibility::Open
    }

    pub fn seeds(&self) -> &WorkflowSeeds {
        &self.seeds
    }

    pub fn draft(&self) -> &LeaveRequestDraft {
        &self.draft
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn can_submit(&self) -> bool {
        self.is_open() && !self.is_pending() && self.draft.validate().is_ok()
    }

    /// The first validation problem, once the user has started typing.
    pub fn visible_error(&self) -> Option<DraftError> {
        if !self.is_open() || self.draft.is_untouched() {
            return None;
        }
        self.draft.validate().err()
    }

    pub fn set_visibility(&mut self, visibility: ModalVisibility) {
        match (self.visibility, visibility) {
            (ModalVisibility::Closed, ModalVisibility::Open) => {
                self.draft = LeaveRequestDraft::seeded(&self.seeds);
                log::debug!("leave request form opened");
            }
            (ModalVisibility::Open, ModalVisibility::Closed) => {
                self.discard();
                log::debug!("leave request form closed");
            }
            _ => {}
        }
        self.visibility = visibility;
    }

    pub fn edit(&mut self, edit: FieldEdit) {
        if !self.is_open() {
            log::debug!("ignoring edit while closed: {edit:?}");
            return;
        }
        match edit {
            FieldEdit::EmployeeName(value) => self.draft.employee_name = value,
            FieldEdit::LeaveType(value) => self.draft.leave_type = value,
            FieldEdit::StartDate(value) => self.draft.start_date = value,
            FieldEdit::EndDate(value) => self.draft.end_date = value,
            FieldEdit::Reason(value) => self.draft.reason = value,
        }
    }

    /// Replaces any previously chosen file.
    pub fn select_attachment(&mut self, attachment: Attachment) {
        if self.is_open() {
            self.draft.attachment = Some(attachment);
        }
    }

    pub fn clear_attachment(&mut self) {
        self.draft.attachment = None;
    }

    pub fn begin_submit(&mut self) -> Result<SubmitRequest, SubmitRejected> {
        if !self.is_open() {
            return Err(SubmitRejected::NotOpen);
        }
        if self.is_pending() {
            return Err(SubmitRejected::AlreadyPending);
        }
        let submission = self.draft.validate()?;
        self.generation += 1;
        let token = SubmitToken(self.generation);
        self.in_flight = Some(token);
        Ok(SubmitRequest { token, submission })
    }

    pub fn complete(&mut self, token: SubmitToken, outcome: SubmissionOutcome) -> Completion {
        if self.in_flight != Some(token) {
            log::debug!("dropping result of discarded submission {token:?}");
            return Completion::Stale;
        }
        self.in_flight = None;
        match outcome {
            SubmissionOutcome::Success => {
                self.draft = LeaveRequestDraft::empty();
                self.generation += 1;
                Completion::Submitted
            }
            SubmissionOutcome::Failure(reason) => Completion::Failed(reason),
        }
    }

    /// Drops the draft and any in-flight submission. The host closes the modal.
    pub fn cancel(&mut self) {
        self.discard();
    }

    fn discard(&mut self) {
        self.draft = LeaveRequestDraft::empty();
        self.generation += 1;
        self.in_flight = None;
    }
}

/// Applies a preselection change to the workflow.
///
/// Seeds that did not actually change leave the draft alone, so re-delivering
/// the current selection never clobbers user edits. A real change overwrites
/// the matching field of an open draft.
pub fn reconcile(change: SeedChange, current: &LeaveRequestWorkflow) -> LeaveRequestWorkflow {
    let mut next = current.clone();
    match change {
        SeedChange::LeaveType(leave_type) => {
            if next.seeds.leave_type == leave_type {
                return next;
            }
            next.seeds.leave_type = leave_type;
            if next.is_open() {
                next.draft.leave_type = leave_type;
            }
        }
        SeedChange::Attachment(attachment) => {
            if next.seeds.attachment == attachment {
                return next;
            }
            if next.is_open() {
                next.draft.attachment = attachment.clone();
            }
            next.seeds.attachment = attachment;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(value: &str) -> NaiveDate {
        parse_form_date(value).unwrap()
    }

    fn opened(seeds: WorkflowSeeds) -> LeaveRequestWorkflow {
        let mut workflow = LeaveRequestWorkflow::new(seeds);
        workflow.set_visibility(ModalVisibility::Open);
        workflow
    }

    fn fill_valid(workflow: &mut LeaveRequestWorkflow) {
        workflow.edit(FieldEdit::EmployeeName("Alice".into()));
        workflow.edit(FieldEdit::LeaveType(Some(LeaveType::Annual)));
        workflow.edit(FieldEdit::StartDate("2025-01-10".into()));
        workflow.edit(FieldEdit::EndDate("2025-01-12".into()));
        workflow.edit(FieldEdit::Reason("Family trip".into()));
    }

    fn report() -> Attachment {
        Attachment::new("report.pdf", 2048, Some("application/pdf".into()))
    }

    #[test]
    fn leave_type_parses_case_insensitively() {
        assert_eq!("sick".parse::<LeaveType>(), Ok(LeaveType::Sick));
        assert_eq!(" MATERNITY ".parse::<LeaveType>(), Ok(LeaveType::Maternity));
        assert_eq!(
            "sabbatical".parse::<LeaveType>(),
            Err(DraftError::UnknownLeaveType("sabbatical".into()))
        );
        assert_eq!(LeaveType::from_form_value(""), None);
        assert_eq!(LeaveType::from_form_value("Personal"), Some(LeaveType::Personal));
        assert_eq!(LeaveType::Maternity.label(), "Maternity/Paternity Leave");
    }

    #[test]
    fn opening_seeds_only_the_preselected_fields() {
        let workflow = opened(WorkflowSeeds {
            leave_type: Some(LeaveType::Sick),
            attachment: None,
        });
        let draft = workflow.draft();
        assert_eq!(draft.leave_type, Some(LeaveType::Sick));
        assert!(draft.employee_name.is_empty());
        assert!(draft.start_date.is_empty());
        assert!(draft.end_date.is_empty());
        assert!(draft.reason.is_empty());
        assert!(draft.attachment.is_none());
        assert!(!workflow.can_submit());
    }

    #[test]
    fn validation_reports_the_first_missing_field() {
        let mut workflow = opened(WorkflowSeeds::default());
        assert_eq!(
            workflow.draft().validate(),
            Err(DraftError::Missing(DraftField::EmployeeName))
        );
        workflow.edit(FieldEdit::EmployeeName("   ".into()));
        assert_eq!(
            workflow.draft().validate(),
            Err(DraftError::Missing(DraftField::EmployeeName))
        );
        workflow.edit(FieldEdit::EmployeeName("Alice".into()));
        assert_eq!(
            workflow.draft().validate(),
            Err(DraftError::Missing(DraftField::LeaveType))
        );
        workflow.edit(FieldEdit::LeaveType(Some(LeaveType::Personal)));
        workflow.edit(FieldEdit::StartDate("2025-13-01".into()));
        assert_eq!(
            workflow.draft().validate(),
            Err(DraftError::InvalidDate(DraftField::StartDate))
        );
        workflow.edit(FieldEdit::StartDate("2025-01-10".into()));
        workflow.edit(FieldEdit::EndDate("2025-01-10".into()));
        assert_eq!(
            workflow.draft().validate(),
            Err(DraftError::Missing(DraftField::Reason))
        );
    }

    #[test]
    fn end_date_before_start_is_rejected() {
        let mut workflow = opened(WorkflowSeeds::default());
        fill_valid(&mut workflow);
        workflow.edit(FieldEdit::EndDate("2025-01-09".into()));
        assert_eq!(
            workflow.begin_submit(),
            Err(SubmitRejected::Invalid(DraftError::EndBeforeStart))
        );
        assert!(!workflow.is_pending());
    }

    #[test]
    fn valid_draft_produces_trimmed_submission() {
        let mut workflow = opened(WorkflowSeeds::default());
        fill_valid(&mut workflow);
        workflow.edit(FieldEdit::EmployeeName("  Alice  ".into()));
        workflow.select_attachment(report());
        assert!(workflow.can_submit());

        let request = workflow.begin_submit().unwrap();
        assert_eq!(request.submission.employee_name, "Alice");
        assert_eq!(request.submission.leave_type, LeaveType::Annual);
        assert_eq!(request.submission.start_date, date("2025-01-10"));
        assert_eq!(request.submission.end_date, date("2025-01-12"));
        assert_eq!(request.submission.attachment, Some(report()));
    }

    #[test]
    fn second_submit_while_pending_is_rejected() {
        let mut workflow = opened(WorkflowSeeds::default());
        fill_valid(&mut workflow);
        let first = workflow.begin_submit().unwrap();
        assert!(workflow.is_pending());
        assert!(!workflow.can_submit());
        assert_eq!(workflow.begin_submit(), Err(SubmitRejected::AlreadyPending));

        assert_eq!(
            workflow.complete(first.token, SubmissionOutcome::Success),
            Completion::Submitted
        );
        assert!(!workflow.is_pending());
    }

    #[test]
    fn closed_form_never_submits() {
        let mut workflow = LeaveRequestWorkflow::new(WorkflowSeeds::default());
        fill_valid(&mut workflow);
        assert_eq!(workflow.draft(), &LeaveRequestDraft::empty());
        assert_eq!(workflow.begin_submit(), Err(SubmitRejected::NotOpen));
    }

    #[test]
    fn success_resets_draft_and_reopening_starts_fresh() {
        let seeds = WorkflowSeeds {
            leave_type: Some(LeaveType::Sick),
            attachment: None,
        };
        let mut workflow = opened(seeds);
        fill_valid(&mut workflow);
        let request = workflow.begin_submit().unwrap();
        assert_eq!(
            workflow.complete(request.token, SubmissionOutcome::Success),
            Completion::Submitted
        );
        assert_eq!(workflow.draft(), &LeaveRequestDraft::empty());

        workflow.set_visibility(ModalVisibility::Closed);
        assert_eq!(workflow.visibility(), ModalVisibility::Closed);
        workflow.set_visibility(ModalVisibility::Open);
        assert_eq!(workflow.draft().leave_type, Some(LeaveType::Sick));
        assert!(workflow.draft().employee_name.is_empty());
    }

    #[test]
    fn failure_keeps_draft_for_retry() {
        let mut workflow = opened(WorkflowSeeds::default());
        fill_valid(&mut workflow);
        let before = workflow.draft().clone();
        let request = workflow.begin_submit().unwrap();
        assert_eq!(
            workflow.complete(request.token, SubmissionOutcome::Failure("quota exceeded".into())),
            Completion::Failed("quota exceeded".into())
        );
        assert_eq!(workflow.draft(), &before);
        assert!(workflow.is_open());
        assert!(workflow.can_submit());
        assert!(workflow.begin_submit().is_ok());
    }

    #[test]
    fn cancel_while_pending_makes_the_late_result_stale() {
        let mut workflow = opened(WorkflowSeeds::default());
        fill_valid(&mut workflow);
        let request = workflow.begin_submit().unwrap();

        workflow.cancel();
        workflow.set_visibility(ModalVisibility::Closed);
        assert!(!workflow.is_pending());
        assert_eq!(
            workflow.complete(request.token, SubmissionOutcome::Success),
            Completion::Stale
        );

        workflow.set_visibility(ModalVisibility::Open);
        fill_valid(&mut workflow);
        let retry = workflow.begin_submit().unwrap();
        assert_ne!(retry.token, request.token);
        assert_eq!(
            workflow.complete(request.token, SubmissionOutcome::Failure("late".into())),
            Completion::Stale
        );
        assert!(workflow.is_pending());
    }

    #[test]
    fn validation_error_shows_once_typing_starts() {
        let mut workflow = opened(WorkflowSeeds {
            leave_type: Some(LeaveType::Sick),
            attachment: None,
        });
        assert_eq!(workflow.visible_error(), None);

        fill_valid(&mut workflow);
        assert_eq!(workflow.visible_error(), None);

        workflow.edit(FieldEdit::EndDate("2025-01-09".into()));
        assert_eq!(workflow.visible_error(), Some(DraftError::EndBeforeStart));

        workflow.set_visibility(ModalVisibility::Closed);
        assert_eq!(workflow.visible_error(), None);
    }

    #[test]
    fn closing_discards_edits() {
        let mut workflow = opened(WorkflowSeeds::default());
        fill_valid(&mut workflow);
        workflow.set_visibility(ModalVisibility::Closed);
        workflow.set_visibility(ModalVisibility::Open);
        assert_eq!(workflow.draft(), &LeaveRequestDraft::empty());
    }

    #[test]
    fn selecting_a_second_file_replaces_the_first() {
        let mut workflow = opened(WorkflowSeeds::default());
        workflow.select_attachment(report());
        let photo = Attachment::new("photo.png", 10, None);
        workflow.select_attachment(photo.clone());
        assert_eq!(workflow.draft().attachment, Some(photo));
        workflow.clear_attachment();
        assert!(workflow.draft().attachment.is_none());
    }

    #[test]
    fn seed_change_overwrites_open_draft_field() {
        let workflow = opened(WorkflowSeeds::default());
        let mut workflow = reconcile(SeedChange::LeaveType(Some(LeaveType::Annual)), &workflow);
        assert_eq!(workflow.draft().leave_type, Some(LeaveType::Annual));

        workflow.edit(FieldEdit::LeaveType(Some(LeaveType::Personal)));
        let workflow = reconcile(SeedChange::LeaveType(Some(LeaveType::Sick)), &workflow);
        assert_eq!(workflow.draft().leave_type, Some(LeaveType::Sick));

        let workflow = reconcile(SeedChange::Attachment(Some(report())), &workflow);
        assert_eq!(workflow.draft().attachment, Some(report()));
    }

    #[test]
    fn unchanged_seed_keeps_user_edits() {
        let mut workflow = opened(WorkflowSeeds {
            leave_type: Some(LeaveType::Sick),
            attachment: None,
        });
        workflow.edit(FieldEdit::LeaveType(Some(LeaveType::Annual)));
        let workflow = reconcile(SeedChange::LeaveType(Some(LeaveType::Sick)), &workflow);
        assert_eq!(workflow.draft().leave_type, Some(LeaveType::Annual));
    }

    #[test]
    fn seed_change_while_closed_applies_on_next_open() {
        let workflow = LeaveRequestWorkflow::new(WorkflowSeeds::default());
        let mut workflow = reconcile(SeedChange::LeaveType(Some(LeaveType::Personal)), &workflow);
        assert_eq!(workflow.draft().leave_type, None);
        workflow.set_visibility(ModalVisibility::Open);
        assert_eq!(workflow.draft().leave_type, Some(LeaveType::Personal));
    }

    #[test]
    fn reconcile_is_pure() {
        let workflow = opened(WorkflowSeeds::default());
        let snapshot = workflow.clone();
        let first = reconcile(SeedChange::Attachment(Some(report())), &workflow);
        let second = reconcile(SeedChange::Attachment(Some(report())), &workflow);
        assert_eq!(workflow, snapshot);
        assert_eq!(first, second);
    }
}
