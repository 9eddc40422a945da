//! Row of mode buttons; exactly one carries the `active` class.

use leptos::prelude::*;

use crate::consts::MODE_BUTTON_CLASS;
use crate::mode::InputMode;

#[component]
pub fn ModeButtons(active: Signal<InputMode>, on_select: Callback<InputMode>) -> impl IntoView {
    view! {
        <div class="input-methods">
            {InputMode::ALL
                .into_iter()
                .map(|mode| {
                    view! {
                        <button
                            type="button"
                            class=MODE_BUTTON_CLASS
                            class:active=move || active.get() == mode
                            data-method={mode.as_str()}
                            on:click=move |_| on_select.run(mode)
                        >
                            {mode.label()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
