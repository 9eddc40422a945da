//! Upload form with text / file / url input modes.
//!
//! ARCHITECTURE
//! ============
//! [`FormCore`] owns the state and decides every transition. This component
//! renders the DOM contract from [`FormView`] and performs the imperative
//! [`Effect`]s the core returns (event default handling, the native file
//! picker, collaborator calls). Nothing here reads state back from the DOM.

use leptos::html::{Button, Input};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::mode_buttons::ModeButtons;
use crate::config::FormConfig;
use crate::consts::{
    DROP_ZONE_ID, FILE_NAME_DISPLAY_ID, FILE_PICKER_ID, HIDDEN_MODE_FIELD_ID, HIDDEN_MODE_FIELD_NAME,
    INPUT_SECTION_CLASS, MODEL_TYPE_FIELD_ID, SUMMARY_LENGTH_FIELD_ID, TEXT_FIELD_ID, URL_FIELD_ID, WORD_COUNT_ID,
};
use crate::form::{ClickTarget, Effect, FormCore, FormView};
use crate::mode::InputMode;
use crate::util::file_list::incoming_files;
use crate::util::page_config::read_page_config;
use crate::validate::{count_words, validate_file, word_count_label};

/// Signals and node refs the effect runner needs.
#[derive(Clone, Copy)]
struct FormHandles {
    core: RwSignal<FormCore>,
    word_count: RwSignal<usize>,
    picker: NodeRef<Input>,
    submit: NodeRef<Button>,
}

impl FormHandles {
    /// Apply `f` to the core and perform the effects it returns.
    fn dispatch(
        self,
        ev: Option<&web_sys::Event>,
        dropped: Option<&web_sys::FileList>,
        f: impl FnOnce(&mut FormCore) -> Vec<Effect>,
    ) {
        let effects = self.core.try_update(f).unwrap_or_default();
        self.run(effects, ev, dropped);
    }

    /// Perform host-side effects. A missing node skips its update.
    fn run(self, effects: Vec<Effect>, ev: Option<&web_sys::Event>, dropped: Option<&web_sys::FileList>) {
        for effect in effects {
            match effect {
                Effect::PreventDefault => {
                    if let Some(ev) = ev {
                        ev.prevent_default();
                    }
                }
                Effect::ClearFilePicker => match self.picker.get_untracked() {
                    Some(input) => input.set_value(""),
                    None => leptos::logging::warn!("#{FILE_PICKER_ID} missing; picker not cleared"),
                },
                Effect::AssignDroppedFiles => match self.picker.get_untracked() {
                    Some(input) => input.set_files(dropped),
                    None => leptos::logging::warn!("#{FILE_PICKER_ID} missing; dropped files not assigned"),
                },
                Effect::OpenFilePicker => {
                    if let Some(input) = self.picker.get_untracked() {
                        input.click();
                    }
                }
                Effect::ValidateFile(file) => self.core.update(|core| {
                    let result = validate_file(&file, core.config());
                    core.apply_file_validation(result);
                }),
                Effect::UpdateWordCount => {
                    let words = self.core.with_untracked(|core| count_words(core.text()));
                    self.word_count.set(words);
                }
                Effect::ShowLoading => {
                    if let Some(button) = self.submit.get_untracked() {
                        button.set_disabled(true);
                    }
                }
            }
        }
    }
}

/// Whether a click inside the drop-zone landed on the native picker.
fn click_target(ev: &web_sys::MouseEvent) -> ClickTarget {
    let on_picker = ev
        .target()
        .is_some_and(|t| t.dyn_ref::<web_sys::HtmlInputElement>().is_some_and(|el| el.id() == FILE_PICKER_ID));
    if on_picker { ClickTarget::Picker } else { ClickTarget::Elsewhere }
}

/// The summarization upload form.
///
/// `config` defaults to the page's inline config block, or built-in defaults.
#[component]
pub fn UploadForm(#[prop(optional)] config: Option<FormConfig>) -> impl IntoView {
    let config = config.unwrap_or_else(read_page_config);
    let form_action = config.form_action.clone();
    let accept = config.accept_attribute();
    let summary_lengths = config.summary_lengths.clone();
    let model_types = config.model_types.clone();

    let handles = FormHandles {
        core: RwSignal::new(FormCore::new(config)),
        word_count: RwSignal::new(0_usize),
        picker: NodeRef::new(),
        submit: NodeRef::new(),
    };
    let core = handles.core;
    let view_state = Memo::new(move |_| core.with(FormCore::view));
    let visible = move |mode: InputMode| view_state.with(|v: &FormView| v.is_section_visible(mode));

    let on_select = Callback::new(move |mode: InputMode| handles.dispatch(None, None, |c| c.select_mode(mode)));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        let (submission, effects) = core.try_update(FormCore::on_submit).unwrap_or((None, Vec::new()));
        if let Some(submission) = submission {
            log::info!("posting {} input", submission.mode());
        }
        let event: &web_sys::Event = &ev;
        handles.run(effects, Some(event), None);
    };

    let on_zone_click = move |ev: leptos::ev::MouseEvent| {
        let effects = core.with_untracked(|c| c.on_drop_zone_click(click_target(&ev)));
        handles.run(effects, None, None);
    };

    let on_drag_over = move |ev: leptos::ev::DragEvent| {
        let event: &web_sys::Event = &ev;
        handles.dispatch(Some(event), None, FormCore::on_drag_over);
    };

    let on_drag_leave = move |ev: leptos::ev::DragEvent| {
        let event: &web_sys::Event = &ev;
        handles.dispatch(Some(event), None, FormCore::on_drag_leave);
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        let dropped = ev.data_transfer().and_then(|dt| dt.files());
        let files = incoming_files(dropped.as_ref());
        let event: &web_sys::Event = &ev;
        handles.dispatch(Some(event), dropped.as_ref(), |c| c.on_drop(files));
    };

    let on_file_change = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let files = incoming_files(input.files().as_ref());
        handles.dispatch(None, None, |c| c.on_file_change(files));
    };

    view! {
        <form
            class="upload-form"
            method="post"
            action=form_action
            enctype="multipart/form-data"
            on:submit=on_submit
        >
            <input
                type="hidden"
                id=HIDDEN_MODE_FIELD_ID
                name=HIDDEN_MODE_FIELD_NAME
                prop:value=move || view_state.with(|v| v.hidden_value)
            />

            <ModeButtons active=Signal::derive(move || view_state.with(|v| v.active_button)) on_select=on_select/>

            <div
                id={InputMode::Text.section_id()}
                class=INPUT_SECTION_CLASS
                class:hidden=move || !visible(InputMode::Text)
            >
                <textarea
                    id=TEXT_FIELD_ID
                    name=TEXT_FIELD_ID
                    rows="10"
                    placeholder="Paste the text you want summarized..."
                    prop:value=move || view_state.with(|v| v.text.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        handles.dispatch(None, None, |c| c.on_text_input(value));
                    }
                ></textarea>
                <div id=WORD_COUNT_ID class="word-count">
                    {move || word_count_label(handles.word_count.get())}
                </div>
            </div>

            <div
                id={InputMode::File.section_id()}
                class=INPUT_SECTION_CLASS
                class:hidden=move || !visible(InputMode::File)
            >
                <div
                    id=DROP_ZONE_ID
                    class="file-upload-area"
                    class:dragover=move || view_state.with(|v| v.drag_over)
                    on:click=on_zone_click
                    on:dragover=on_drag_over
                    on:dragleave=on_drag_leave
                    on:drop=on_drop
                >
                    <input
                        type="file"
                        id=FILE_PICKER_ID
                        name=FILE_PICKER_ID
                        accept=accept
                        node_ref={handles.picker}
                        on:change=on_file_change
                    />
                    <p class="file-upload-hint">"Drop a file here or click to browse"</p>
                </div>
                <div
                    id=FILE_NAME_DISPLAY_ID
                    class="file-name"
                    class:show=move || view_state.with(|v| v.file_label.is_some())
                >
                    {move || view_state.with(|v| v.file_label.clone().unwrap_or_default())}
                </div>
            </div>

            <div
                id={InputMode::Url.section_id()}
                class=INPUT_SECTION_CLASS
                class:hidden=move || !visible(InputMode::Url)
            >
                <input
                    type="url"
                    id=URL_FIELD_ID
                    name=URL_FIELD_ID
                    placeholder="https://example.com/article"
                    prop:value=move || view_state.with(|v| v.url.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        handles.dispatch(None, None, |c| c.on_url_input(value));
                    }
                />
            </div>

            <div class="summary-options">
                <label for=SUMMARY_LENGTH_FIELD_ID>"Summary length"</label>
                <select
                    id=SUMMARY_LENGTH_FIELD_ID
                    name=SUMMARY_LENGTH_FIELD_ID
                    prop:value=move || view_state.with(|v| v.summary_length.to_string())
                    on:change=move |ev| {
                        match event_target_value(&ev).parse::<u32>() {
                            Ok(length) => core.update(|c| c.on_summary_length(length)),
                            Err(e) => leptos::logging::warn!("bad summary length: {e}"),
                        }
                    }
                >
                    {summary_lengths
                        .into_iter()
                        .map(|length| view! { <option value=length.to_string()>{format!("{length} sentences")}</option> })
                        .collect_view()}
                </select>
                <label for=MODEL_TYPE_FIELD_ID>"Model"</label>
                <select
                    id=MODEL_TYPE_FIELD_ID
                    name=MODEL_TYPE_FIELD_ID
                    prop:value=move || view_state.with(|v| v.model_type.clone())
                    on:change=move |ev| {
                        let model = event_target_value(&ev);
                        core.update(|c| c.on_model_type(model));
                    }
                >
                    {model_types
                        .into_iter()
                        .map(|model| view! { <option value=model.clone()>{model.to_uppercase()}</option> })
                        .collect_view()}
                </select>
            </div>

            <Show when=move || view_state.with(|v| v.message.is_some())>
                <p class="form-message">{move || view_state.with(|v| v.message.clone().unwrap_or_default())}</p>
            </Show>

            <button type="submit" class="submit-btn" node_ref={handles.submit}>
                <Show when=move || view_state.with(|v| v.loading)>
                    <span class="spinner"></span>
                </Show>
                "Summarize"
            </button>
        </form>
    }
}
