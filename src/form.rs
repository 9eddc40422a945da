//! Form core: input-mode coordination and file ingestion.
//!
//! Every user interaction is a method on [`FormCore`] that updates the state
//! and returns the [`Effect`]s the host must perform. What the page shows
//! (active button, visible section, hidden field, file label, hover class) is
//! a [`FormView`] computed from the state, so the DOM is never read back.
//!
//! Separated from the Leptos component so the transition table can be tested
//! without a browser.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::config::FormConfig;
use crate::file::IncomingFile;
use crate::mode::InputMode;
use crate::validate::{FileRejection, Submission, validate_submission};

/// Side effects returned from handlers for the host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Call `preventDefault()` on the triggering event.
    PreventDefault,
    /// Reset the native picker so it holds no files.
    ClearFilePicker,
    /// Copy the dropped file list into the native picker.
    AssignDroppedFiles,
    /// Open the browser's file dialog.
    OpenFilePicker,
    /// Run file validation and report back through [`FormCore::apply_file_validation`].
    ValidateFile(IncomingFile),
    /// Recompute the word counter from the text field.
    UpdateWordCount,
    /// Turn on the loading indicator; the native post proceeds.
    ShowLoading,
}

/// Where a click inside the drop-zone landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// Directly on the native picker, which opens the dialog by itself.
    Picker,
    /// Anywhere else in the drop-zone.
    Elsewhere,
}

/// Presentation state derived from [`FormCore`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    /// Value of the hidden mode field.
    pub hidden_value: &'static str,
    pub active_button: InputMode,
    pub visible_section: InputMode,
    pub text: String,
    pub url: String,
    /// `"<name> (<size>)"` while a file is selected.
    pub file_label: Option<String>,
    /// Number of files held by the native picker.
    pub picker_file_count: usize,
    /// Drop-zone hover class.
    pub drag_over: bool,
    /// Validation or submission message for the user.
    pub message: Option<String>,
    pub loading: bool,
    /// Selected value of the summary length control.
    pub summary_length: u32,
    /// Selected value of the model control.
    pub model_type: String,
}

impl FormView {
    #[must_use]
    pub fn is_button_active(&self, mode: InputMode) -> bool {
        self.active_button == mode
    }

    #[must_use]
    pub fn is_section_visible(&self, mode: InputMode) -> bool {
        self.visible_section == mode
    }

    /// Whether the given mode's input is empty, as the page shows it.
    #[must_use]
    pub fn input_is_empty(&self, mode: InputMode) -> bool {
        match mode {
            InputMode::Text => self.text.is_empty(),
            InputMode::File => self.picker_file_count == 0 && self.file_label.is_none(),
            InputMode::Url => self.url.is_empty(),
        }
    }
}

/// Single owner of the form's state.
#[derive(Debug, Clone)]
pub struct FormCore {
    config: FormConfig,
    mode: InputMode,
    text: String,
    url: String,
    picker_files: Vec<IncomingFile>,
    drag_over: bool,
    message: Option<String>,
    submitting: bool,
    summary_length: u32,
    model_type: String,
}

impl Default for FormCore {
    fn default() -> Self {
        Self::new(FormConfig::default())
    }
}

impl FormCore {
    #[must_use]
    pub fn new(config: FormConfig) -> Self {
        Self {
            summary_length: config.default_summary_length,
            model_type: config.default_model_type.clone(),
            config,
            mode: InputMode::default(),
            text: String::new(),
            url: String::new(),
            picker_files: Vec::new(),
            drag_over: false,
            message: None,
            submitting: false,
        }
    }

    // --- Queries ---

    #[must_use]
    pub fn mode(&self) -> InputMode {
        self.mode
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn summary_length(&self) -> u32 {
        self.summary_length
    }

    #[must_use]
    pub fn model_type(&self) -> &str {
        &self.model_type
    }

    #[must_use]
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Files currently held by the native picker.
    #[must_use]
    pub fn picker_files(&self) -> &[IncomingFile] {
        &self.picker_files
    }

    /// The surfaced file: the first one in the picker.
    #[must_use]
    pub fn selected_file(&self) -> Option<&IncomingFile> {
        self.picker_files.first()
    }

    #[must_use]
    pub fn view(&self) -> FormView {
        FormView {
            hidden_value: self.mode.as_str(),
            active_button: self.mode,
            visible_section: self.mode,
            text: self.text.clone(),
            url: self.url.clone(),
            file_label: self.selected_file().map(IncomingFile::display_label),
            picker_file_count: self.picker_files.len(),
            drag_over: self.drag_over,
            message: self.message.clone(),
            loading: self.submitting,
            summary_length: self.summary_length,
            model_type: self.model_type.clone(),
        }
    }

    // --- Mode coordination ---

    /// A mode button was clicked.
    pub fn select_mode(&mut self, mode: InputMode) -> Vec<Effect> {
        let mut effects = Vec::new();
        self.enter_mode(mode, &mut effects);
        effects
    }

    /// Switch to `mode` and empty every other mode's input. The message only
    /// resets on a real transition, so re-selecting the active mode changes nothing.
    fn enter_mode(&mut self, mode: InputMode, effects: &mut Vec<Effect>) {
        if self.mode != mode {
            log::debug!("input mode {} -> {}", self.mode, mode);
            self.message = None;
        }
        self.mode = mode;
        for other in InputMode::ALL.into_iter().filter(|&m| m != mode) {
            match other {
                InputMode::Text => self.text.clear(),
                InputMode::File => {
                    self.picker_files.clear();
                    effects.push(Effect::ClearFilePicker);
                }
                InputMode::Url => self.url.clear(),
            }
        }
        effects.push(Effect::UpdateWordCount);
    }

    // --- Typing ---

    pub fn on_text_input(&mut self, value: String) -> Vec<Effect> {
        self.text = value;
        vec![Effect::UpdateWordCount]
    }

    pub fn on_url_input(&mut self, value: String) -> Vec<Effect> {
        self.url = value;
        Vec::new()
    }

    // --- Summary options ---

    /// The summary length control changed. Values outside the configured list are ignored.
    pub fn on_summary_length(&mut self, length: u32) {
        if self.config.summary_lengths.contains(&length) {
            self.summary_length = length;
        } else {
            log::warn!("ignoring unlisted summary length {length}");
        }
    }

    /// The model control changed. Values outside the configured list are ignored.
    pub fn on_model_type(&mut self, model: String) {
        if self.config.model_types.contains(&model) {
            self.model_type = model;
        } else {
            log::warn!("ignoring unlisted model type {model:?}");
        }
    }

    // --- File ingestion ---

    /// The picker's change event fired with the files now in it.
    pub fn on_file_change(&mut self, files: Vec<IncomingFile>) -> Vec<Effect> {
        if files.is_empty() {
            self.picker_files.clear();
            self.message = None;
            return Vec::new();
        }
        let mut effects = Vec::new();
        self.ingest(files, &mut effects);
        effects
    }

    pub fn on_drag_over(&mut self) -> Vec<Effect> {
        self.drag_over = true;
        vec![Effect::PreventDefault]
    }

    pub fn on_drag_leave(&mut self) -> Vec<Effect> {
        self.drag_over = false;
        vec![Effect::PreventDefault]
    }

    /// Files were dropped on the drop-zone. An empty drop only clears the hover class.
    pub fn on_drop(&mut self, files: Vec<IncomingFile>) -> Vec<Effect> {
        self.drag_over = false;
        let mut effects = vec![Effect::PreventDefault];
        if files.is_empty() {
            return effects;
        }
        effects.push(Effect::AssignDroppedFiles);
        self.ingest(files, &mut effects);
        effects
    }

    /// Click-to-browse, skipped when the click already hit the picker.
    #[must_use]
    pub fn on_drop_zone_click(&self, target: ClickTarget) -> Vec<Effect> {
        match target {
            ClickTarget::Picker => Vec::new(),
            ClickTarget::Elsewhere => vec![Effect::OpenFilePicker],
        }
    }

    /// Shared by the picker and drop paths: force file mode, then surface the first file.
    fn ingest(&mut self, files: Vec<IncomingFile>, effects: &mut Vec<Effect>) {
        if files.len() > 1 {
            log::debug!("{} files received, surfacing the first", files.len());
        }
        self.force_file_mode(effects);
        self.picker_files = files;
        if let Some(first) = self.picker_files.first() {
            effects.push(Effect::ValidateFile(first.clone()));
        }
    }

    /// File mode without a synthetic button click.
    fn force_file_mode(&mut self, effects: &mut Vec<Effect>) {
        self.enter_mode(InputMode::File, effects);
    }

    /// Record the outcome of an [`Effect::ValidateFile`].
    pub fn apply_file_validation(&mut self, result: Result<(), FileRejection>) {
        match result {
            Ok(()) => self.message = None,
            Err(rejection) => {
                log::info!("file rejected: {rejection}");
                self.message = Some(rejection.to_string());
            }
        }
    }

    // --- Submission ---

    /// The form is about to post. Blocks the post when the active mode lacks content.
    pub fn on_submit(&mut self) -> (Option<Submission>, Vec<Effect>) {
        match validate_submission(self.mode, &self.text, self.selected_file(), &self.url, &self.config) {
            Ok(submission) => {
                self.message = None;
                self.submitting = true;
                (Some(submission), vec![Effect::ShowLoading])
            }
            Err(e) => {
                log::info!("submission blocked: {e}");
                self.message = Some(e.to_string());
                (None, vec![Effect::PreventDefault])
            }
        }
    }
}
