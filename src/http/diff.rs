// http/diff.rs — the tag comparison form.

use std::sync::Arc;

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;
use tracing::debug;

use crate::http::page;
use crate::{tags, AppContext};

/// Form fields posted by the comparison page. Absent fields read as empty,
/// which the diff treats as zero tags.
#[derive(Deserialize, Default)]
pub struct DiffForm {
    #[serde(default)]
    pub old: String,
    #[serde(default)]
    pub new: String,
}

pub async fn show_form(State(_ctx): State<Arc<AppContext>>) -> Html<String> {
    Html(page::render(&page::View::default()))
}

pub async fn compare(
    State(_ctx): State<Arc<AppContext>>,
    Form(form): Form<DiffForm>,
) -> Html<String> {
    let diff = tags::diff_fields(&form.old, &form.new);
    debug!(
        removed = diff.removed.len(),
        added = diff.added.len(),
        "compared tag lists"
    );
    Html(page::render(&page::View {
        old: form.old,
        new: form.new,
        diff,
    }))
}
