//! Form state holder.
//!
//! All mutable UI state lives in one [`FormState`] value. Components hold it
//! in a single signal and only change it through the transition methods
//! below, so the whole workflow can be exercised without a browser.
//!
//! ```text
//! Idle ─submit─▶ Validating ─┬─▶ Invalid ───────────────────────────┐
//!                            └─▶ Encoding ─▶ Submitting ─┬─▶ Succeeded ┤─▶ Idle
//!                                                        └─▶ Failed ───┘
//! ```

use crate::archive::{
    decoded_len, file_count_label, format_megabytes, has_archive_extension, result_file_name,
    strip_data_url_prefix, to_data_url,
};
use crate::config::FileLimits;
use crate::services::{UserInputRequest, UserInputResponse};
use crate::types::{AppError, FieldId, QuerySpec, ResultArchive, SelectedArchive, SubmissionStatus};
use crate::validation::{validate, FormValues, MissingInputs};

/// Fields emptied after a successful submission.
pub const CLEARED_ON_SUCCESS: [FieldId; 1] = [FieldId::Outcome];

/// Where the submission workflow currently is.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Invalid,
    Encoding,
    Submitting,
    Succeeded,
    Failed,
}

impl Phase {
    /// A submission has been accepted and has not resolved yet.
    pub fn in_flight(&self) -> bool {
        matches!(self, Phase::Encoding | Phase::Submitting)
    }

    /// Terminal phases that fall back to `Idle` on the next user action.
    fn is_resting(&self) -> bool {
        matches!(self, Phase::Invalid | Phase::Succeeded | Phase::Failed)
    }
}

/// Query and archive captured when validation passed.
#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingSubmission {
    query: QuerySpec,
    archive: SelectedArchive,
}

/// What the UI must do after a submit intent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitIntent {
    /// A submission is already in flight; nothing happens.
    Busy,
    /// Required inputs are missing; no request is sent.
    Invalid(MissingInputs),
    /// Read and encode this archive, then call [`FormState::encoded`].
    Encode(SelectedArchive),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FormState {
    phase: Phase,
    limits: FileLimits,
    selected: Option<SelectedArchive>,
    pending: Option<PendingSubmission>,
    result: Option<ResultArchive>,
    status: SubmissionStatus,
    status_ticket: u64,
    flashing: Vec<FieldId>,
    flash_ticket: u64,
    instructions_visible: bool,
    natural_language: bool,
    settings_open: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FileLimits::DEFAULT)
    }
}

impl FormState {
    pub fn new(limits: FileLimits) -> Self {
        Self {
            phase: Phase::Idle,
            limits,
            selected: None,
            pending: None,
            result: None,
            status: SubmissionStatus::Idle,
            status_ticket: 0,
            flashing: Vec::new(),
            flash_ticket: 0,
            instructions_visible: true,
            natural_language: false,
            settings_open: false,
        }
    }

    // -------------------------------------------------------------------------
    // Read access
    // -------------------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn limits(&self) -> FileLimits {
        self.limits
    }

    pub fn selected(&self) -> Option<&SelectedArchive> {
        self.selected.as_ref()
    }

    pub fn result(&self) -> Option<&ResultArchive> {
        self.result.as_ref()
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Changes every time a new status notice is shown.
    pub fn status_ticket(&self) -> u64 {
        self.status_ticket
    }

    /// Changes every time a new set of fields starts flashing.
    pub fn flash_ticket(&self) -> u64 {
        self.flash_ticket
    }

    pub fn is_flashing(&self, field: FieldId) -> bool {
        self.flashing.contains(&field)
    }

    pub fn has_flashing(&self) -> bool {
        !self.flashing.is_empty()
    }

    pub fn in_flight(&self) -> bool {
        self.phase.in_flight()
    }

    /// The submit action is shown once a valid archive has been picked.
    pub fn submit_visible(&self) -> bool {
        self.selected.is_some()
    }

    pub fn submit_disabled(&self) -> bool {
        self.in_flight()
    }

    pub fn submit_label(&self) -> &'static str {
        if self.in_flight() {
            "Processing…"
        } else {
            "Trim Archive"
        }
    }

    pub fn instructions_visible(&self) -> bool {
        self.instructions_visible
    }

    pub fn natural_language(&self) -> bool {
        self.natural_language
    }

    pub fn settings_open(&self) -> bool {
        self.settings_open
    }

    // -------------------------------------------------------------------------
    // File picker
    // -------------------------------------------------------------------------

    /// Handle a change of the native file input.
    ///
    /// Accepts exactly one `.zip` file within the size limit; anything else
    /// silently hides the summary. Returns whether the file was accepted.
    pub fn choose_files(&mut self, files: &[SelectedArchive]) -> bool {
        let accepted = match files {
            [file] if file.size <= self.limits.max_bytes && has_archive_extension(&file.name) => {
                Some(file.clone())
            }
            _ => None,
        };
        match &accepted {
            Some(file) => log::info!("Selected {} ({} bytes)", file.name, file.size),
            None => log::debug!("Ignoring file selection of {} file(s)", files.len()),
        }
        let ok = accepted.is_some();
        self.selected = accepted;
        self.rest();
        ok
    }

    /// Forget the picked file. The caller also empties the native input.
    pub fn clear_file(&mut self) {
        self.selected = None;
        self.rest();
    }

    // -------------------------------------------------------------------------
    // Submission workflow
    // -------------------------------------------------------------------------

    /// Handle a submit intent with the current field values.
    pub fn begin_submit(&mut self, values: &FormValues) -> SubmitIntent {
        if self.in_flight() {
            log::warn!("Submit ignored: a submission is already in flight");
            return SubmitIntent::Busy;
        }

        self.phase = Phase::Validating;
        match validate(values, self.natural_language, self.selected.as_ref()) {
            Err(missing) => {
                self.phase = Phase::Invalid;
                self.flash(missing.fields());
                let error = AppError::Validation(missing.message());
                self.show_status(SubmissionStatus::Error(error.to_string()));
                log::warn!("Submit blocked: missing {:?}", missing.fields());
                SubmitIntent::Invalid(missing)
            }
            Ok(query) => {
                // Validation guarantees an archive is selected.
                let Some(archive) = self.selected.clone() else {
                    self.phase = Phase::Idle;
                    return SubmitIntent::Busy;
                };
                self.phase = Phase::Encoding;
                self.result = None;
                self.pending = Some(PendingSubmission { query, archive: archive.clone() });
                log::info!("Encoding {}", archive.name);
                SubmitIntent::Encode(archive)
            }
        }
    }

    /// The archive has been encoded; build the request and start submitting.
    ///
    /// Returns `None` when no encode was expected.
    pub fn encoded(&mut self, zip_file: String) -> Option<UserInputRequest> {
        if self.phase != Phase::Encoding {
            return None;
        }
        let pending = self.pending.as_ref()?;
        let request = UserInputRequest::new(
            pending.query.clone(),
            zip_file,
            pending.archive.name.clone(),
            pending.archive.size,
        );
        self.phase = Phase::Submitting;
        log::info!("Submitting {} ({} bytes)", request.file_name, request.file_size);
        Some(request)
    }

    /// The backend answered successfully.
    ///
    /// Populates the result, shows a success notice and resets the picker.
    /// The caller empties the native input and the [`CLEARED_ON_SUCCESS`]
    /// fields. Returns whether the response was applied.
    pub fn succeeded(&mut self, response: UserInputResponse) -> bool {
        if self.phase != Phase::Submitting {
            return false;
        }
        let original = self
            .pending
            .take()
            .map(|p| p.archive.name)
            .unwrap_or_default();
        let payload = strip_data_url_prefix(&response.output_file);
        let result = ResultArchive {
            data_url: to_data_url(payload),
            size_bytes: decoded_len(payload),
            file_count: response.count,
            file_name: result_file_name(&original),
        };
        let message = format!(
            "Trimming complete: {} ({}) ready to download.",
            file_count_label(result.file_count),
            format_megabytes(result.size_bytes)
        );
        log::info!("{}", message);

        self.result = Some(result);
        self.selected = None;
        self.phase = Phase::Succeeded;
        self.show_status(SubmissionStatus::Success(message));
        true
    }

    /// The read, the transport or the backend failed. The form keeps its contents.
    pub fn failed(&mut self, error: &AppError) {
        if !self.in_flight() {
            return;
        }
        log::error!("Submission failed: {}", error);
        self.pending = None;
        self.phase = Phase::Failed;
        self.show_status(SubmissionStatus::Error(error.to_string()));
    }

    // -------------------------------------------------------------------------
    // Notices
    // -------------------------------------------------------------------------

    fn show_status(&mut self, status: SubmissionStatus) {
        self.status = status;
        self.status_ticket += 1;
    }

    fn flash(&mut self, fields: &[FieldId]) {
        self.flashing = fields.to_vec();
        self.flash_ticket += 1;
    }

    /// Explicit dismissal of the banner.
    pub fn dismiss_status(&mut self) {
        self.status = SubmissionStatus::Idle;
        self.rest();
    }

    /// Timer expiry; ignored when a newer notice replaced the one it was set for.
    pub fn expire_status(&mut self, ticket: u64) {
        if ticket == self.status_ticket {
            self.dismiss_status();
        }
    }

    pub fn expire_flash(&mut self, ticket: u64) {
        if ticket == self.flash_ticket {
            self.flashing.clear();
        }
    }

    /// Leave a terminal phase. The banner is independent of the phase.
    fn rest(&mut self) {
        if self.phase.is_resting() {
            self.phase = Phase::Idle;
        }
    }

    // -------------------------------------------------------------------------
    // Result panel
    // -------------------------------------------------------------------------

    pub fn dismiss_result(&mut self) {
        self.result = None;
        self.rest();
    }

    // -------------------------------------------------------------------------
    // Settings
    // -------------------------------------------------------------------------

    pub fn toggle_settings(&mut self) {
        self.settings_open = !self.settings_open;
    }

    /// Backdrop click: closes the panel, switches untouched.
    pub fn close_settings(&mut self) {
        self.settings_open = false;
    }

    pub fn toggle_instructions(&mut self) {
        self.instructions_visible = !self.instructions_visible;
    }

    pub fn toggle_natural_language(&mut self) {
        self.natural_language = !self.natural_language;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;

    const MB: u64 = 1_000_000;

    fn archive(size: u64) -> SelectedArchive {
        SelectedArchive::new("chats.zip", size)
    }

    fn structured_values() -> FormValues {
        FormValues::new()
            .with(FieldId::Outcome, "find the trip")
            .with(FieldId::Date, "2024-05-17")
            .with(FieldId::People, "Alice, Bob")
            .with(FieldId::Events, "flight")
            .with(FieldId::Location, "London")
    }

    /// Drive a structured submission up to the point where the request is sent.
    fn submitting_state() -> (FormState, UserInputRequest) {
        let mut state = FormState::default();
        assert!(state.choose_files(&[archive(10 * MB)]));
        let intent = state.begin_submit(&structured_values());
        assert_eq!(intent, SubmitIntent::Encode(archive(10 * MB)));
        let request = state.encoded("UEsFBgAAAAAAAAAAAAAAAAAAAAAAAA==".into()).unwrap();
        (state, request)
    }

    #[test]
    fn test_initial_state() {
        let state = FormState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.instructions_visible());
        assert!(!state.natural_language());
        assert!(!state.settings_open());
        assert!(!state.submit_visible());
        assert_eq!(state.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_picker_accepts_single_archive_within_limit() {
        let mut state = FormState::default();
        assert!(state.choose_files(&[archive(50_000_000)]));
        assert!(state.submit_visible());
        assert_eq!(state.selected().unwrap().name, "chats.zip");
    }

    #[test]
    fn test_picker_rejects_silently() {
        let mut state = FormState::default();

        assert!(!state.choose_files(&[archive(50_000_001)]));
        assert!(!state.choose_files(&[]));
        assert!(!state.choose_files(&[archive(1), archive(2)]));
        assert!(!state.choose_files(&[SelectedArchive::new("notes.txt", 10)]));

        assert!(!state.submit_visible());
        assert_eq!(state.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn test_rejected_pick_hides_previous_summary() {
        let mut state = FormState::default();
        state.choose_files(&[archive(MB)]);
        state.choose_files(&[archive(60 * MB)]);
        assert!(state.selected().is_none());
    }

    #[test]
    fn test_natural_language_missing_description() {
        let mut state = FormState::default();
        state.toggle_natural_language();
        state.choose_files(&[archive(10 * MB)]);

        let intent = state.begin_submit(&FormValues::new());

        let SubmitIntent::Invalid(missing) = intent else {
            panic!("expected invalid submission");
        };
        assert_eq!(missing.fields(), &[FieldId::Description]);
        assert_eq!(state.phase(), Phase::Invalid);
        assert_eq!(
            state.status(),
            &SubmissionStatus::Error(FieldId::Description.missing_message().to_string())
        );
        assert!(state.is_flashing(FieldId::Description));
        assert!(!state.is_flashing(FieldId::Archive));
    }

    #[test]
    fn test_oversized_archive_reports_missing_archive() {
        let mut state = FormState::default();
        assert!(!state.choose_files(&[archive(60 * MB)]));
        assert!(!state.submit_visible());

        let intent = state.begin_submit(&structured_values());

        let SubmitIntent::Invalid(missing) = intent else {
            panic!("expected invalid submission");
        };
        assert_eq!(missing.fields(), &[FieldId::Archive]);
        assert!(state.is_flashing(FieldId::Archive));
    }

    #[test]
    fn test_second_submit_while_in_flight_is_ignored() {
        let (mut state, _) = submitting_state();
        assert!(state.submit_disabled());
        assert_eq!(state.submit_label(), "Processing…");

        assert_eq!(state.begin_submit(&structured_values()), SubmitIntent::Busy);
        assert_eq!(state.phase(), Phase::Submitting);
        assert!(state.encoded("AAAA".into()).is_none());
    }

    #[test]
    fn test_encoded_builds_request() {
        let (state, request) = submitting_state();
        assert_eq!(state.phase(), Phase::Submitting);
        assert!(!request.used_natural_language);
        assert_eq!(request.file_name, "chats.zip");
        assert_eq!(request.file_size, 10 * MB);
        assert_eq!(request.fields.as_ref().unwrap().important_people, "Alice, Bob");
    }

    #[test]
    fn test_success_populates_result_and_resets_picker() {
        let (mut state, _) = submitting_state();
        let payload: Vec<u8> = (0..1_234_567u32).map(|i| (i % 253) as u8).collect();
        let output_file = STANDARD.encode(&payload);

        assert!(state.succeeded(UserInputResponse { output_file: output_file.clone(), count: 3 }));

        let result = state.result().unwrap();
        assert_eq!(result.file_count, 3);
        assert_eq!(result.size_bytes, payload.len() as u64);
        assert_eq!(result.file_name, "chats-trimmed.zip");
        assert_eq!(result.data_url, format!("data:application/zip;base64,{}", output_file));

        assert_eq!(state.phase(), Phase::Succeeded);
        assert!(!state.submit_visible());
        assert!(!state.submit_disabled());
        let message = state.status().message().unwrap();
        assert!(message.contains("3 files"));
        assert!(message.contains("1.23 MB"));
    }

    #[test]
    fn test_failure_keeps_form_for_retry() {
        let (mut state, _) = submitting_state();

        state.failed(&AppError::Server { status: 500, status_text: "Internal Server Error".into() });

        assert_eq!(state.phase(), Phase::Failed);
        assert!(!state.in_flight());
        assert!(state.submit_visible());
        assert_eq!(
            state.status(),
            &SubmissionStatus::Error("Request failed: 500 Internal Server Error".into())
        );

        // Retry straight away with unchanged data.
        assert!(matches!(state.begin_submit(&structured_values()), SubmitIntent::Encode(_)));
    }

    #[test]
    fn test_new_submission_clears_previous_result() {
        let (mut state, _) = submitting_state();
        state.succeeded(UserInputResponse { output_file: "QUJD".into(), count: 1 });
        assert!(state.result().is_some());

        state.choose_files(&[archive(MB)]);
        state.begin_submit(&structured_values());
        assert!(state.result().is_none());
    }

    #[test]
    fn test_dismiss_and_reselect_returns_to_idle() {
        let (mut state, _) = submitting_state();
        state.succeeded(UserInputResponse { output_file: "QUJD".into(), count: 1 });

        state.dismiss_result();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.result().is_none());
        assert!(!state.submit_visible());
        // The success banner is still showing; it has its own timer.
        assert!(state.status().is_active());

        state.choose_files(&[archive(10 * MB)]);
        assert_eq!(state.phase(), Phase::Idle);
        let first = state.selected().cloned();
        state.clear_file();
        assert!(state.selected().is_none());
        state.choose_files(&[archive(10 * MB)]);
        assert_eq!(state.selected().cloned(), first);
    }

    #[test]
    fn test_picking_after_failure_returns_to_idle() {
        let (mut state, _) = submitting_state();
        state.failed(&AppError::Network("offline".into()));
        assert_eq!(state.phase(), Phase::Failed);

        state.choose_files(&[archive(MB)]);
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.status().is_active());
    }

    #[test]
    fn test_invalid_submit_rests_on_next_pick() {
        let mut state = FormState::default();
        state.begin_submit(&structured_values());
        assert_eq!(state.phase(), Phase::Invalid);

        state.choose_files(&[archive(MB)]);
        assert_eq!(state.phase(), Phase::Idle);
        assert!(matches!(state.begin_submit(&structured_values()), SubmitIntent::Encode(_)));
    }

    #[test]
    fn test_stale_status_timer_is_ignored() {
        let mut state = FormState::default();
        state.begin_submit(&FormValues::new());
        let first = state.status_ticket();

        state.begin_submit(&FormValues::new());
        let second = state.status_ticket();
        assert_ne!(first, second);

        state.expire_status(first);
        assert!(state.status().is_active());
        state.expire_status(second);
        assert!(!state.status().is_active());
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_flash_expiry() {
        let mut state = FormState::default();
        state.begin_submit(&FormValues::new());
        assert!(state.has_flashing());
        state.expire_flash(state.flash_ticket() + 1);
        assert!(state.has_flashing());
        state.expire_flash(state.flash_ticket());
        assert!(!state.has_flashing());
    }

    #[test]
    fn test_settings_backdrop_keeps_switches() {
        let mut state = FormState::default();
        state.toggle_settings();
        state.toggle_instructions();
        state.toggle_natural_language();
        assert!(state.settings_open());

        state.close_settings();

        assert!(!state.settings_open());
        assert!(!state.instructions_visible());
        assert!(state.natural_language());
    }

    #[test]
    fn test_toggles_stay_interactive_in_flight() {
        let (mut state, _) = submitting_state();
        state.toggle_settings();
        state.toggle_instructions();
        assert!(state.settings_open());
        assert!(!state.instructions_visible());
        assert_eq!(state.phase(), Phase::Submitting);
    }
}
