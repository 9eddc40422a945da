//! Landing page hosting the upload form.

use leptos::prelude::*;

use crate::components::upload_form::UploadForm;

#[component]
pub fn UploadPage() -> impl IntoView {
    view! {
        <main class="upload-page">
            <header class="upload-page__header">
                <h1>"Summarize"</h1>
                <p class="upload-page__subtitle">"Paste text, upload a document, or point to a web page."</p>
            </header>
            <UploadForm/>
        </main>
    }
}
