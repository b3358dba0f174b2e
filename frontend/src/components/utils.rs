use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use gloo_file::File as GlooFile;
use gloo_timers::callback::Timeout;
use js_sys::Date;
use web_sys::FileList;
use yew::prelude::*;

use crate::Model;
use crate::state::{SubmissionState, panel_visibility};

/// Monotonic id for upload candidates within one page session.
pub fn generate_id() -> u64 {
    static ID_COUNTER: AtomicU64 = AtomicU64::new(0);
    let now = Date::now() as u64;
    let count = ID_COUNTER.fetch_add(1, Ordering::SeqCst);
    now * 1000 + (count % 1000)
}

// Debounce function to limit button events
pub fn debounce<F>(duration: i32, callback: F) -> Callback<MouseEvent>
where
    F: Fn() + Clone + 'static,
{
    let timeout = Rc::new(RefCell::new(None::<Timeout>));
    let timeout_clone = Rc::clone(&timeout);

    Callback::from(move |_| {
        let mut timeout_ref = timeout_clone.borrow_mut();

        if let Some(old_timeout) = timeout_ref.take() {
            old_timeout.cancel();
        }

        let inner_callback = callback.clone();
        let new_timeout = Timeout::new(duration as u32, move || {
            inner_callback();
        });

        *timeout_ref = Some(new_timeout);
    })
}

/// Only the first entry of a selection or drop is considered.
pub fn first_file(file_list: &FileList) -> Option<GlooFile> {
    file_list.item(0).map(GlooFile::from)
}

/// Formats a [0, 1] confidence as a percentage with two decimals.
pub fn format_confidence(confidence: f32) -> String {
    format!("{:.2}%", confidence * 100.0)
}

/// The single error panel. It carries either a local intake message or the
/// submission error; the intake message takes precedence.
pub fn render_error_panel(model: &Model) -> Html {
    let visible = panel_visibility(&model.submission, model.intake_error.as_deref());
    if !visible.error {
        return html! {};
    }

    let message = model
        .intake_error
        .as_deref()
        .or_else(|| match &model.submission {
            SubmissionState::Error(message) => Some(message.as_str()),
            _ => None,
        })
        .unwrap_or_default();

    html! {
        <div id="error-container" class="error-message">
            <i class="fa-solid fa-circle-exclamation"></i>
            <p>{ message }</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::format_confidence;

    #[test]
    fn confidence_has_exactly_two_decimals() {
        assert_eq!(format_confidence(0.87531), "87.53%");
        assert_eq!(format_confidence(1.0), "100.00%");
        assert_eq!(format_confidence(0.0), "0.00%");
    }

    #[test]
    fn confidence_rounds_to_nearest() {
        assert_eq!(format_confidence(0.932), "93.20%");
    }
}
