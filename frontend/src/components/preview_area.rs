use yew::prelude::*;

use crate::{FileData, Model, Msg};

pub fn render_preview_area(model: &Model, ctx: &Context<Model>) -> Html {
    let Some(candidate) = model.candidate.as_ref() else {
        return html! {};
    };

    html! {
        <div id="image-preview">
            {
                if let Some(url) = &candidate.preview_url {
                    html! {
                        <img id="preview-image"
                            src={url.to_string()}
                            alt={candidate.file.name()} />
                    }
                } else {
                    html! {
                        <div class="preview-placeholder">
                            <i class="fa-solid fa-spinner fa-spin"></i>
                            <p>{"Loading preview..."}</p>
                        </div>
                    }
                }
            }
            <div class="button-container">
                // Stays enabled while a request is in flight; overlapping
                // submissions race and the last response wins.
                <button
                    id="detect-button"
                    class="detect-btn"
                    onclick={ctx.link().callback(|_| Msg::Submit)}
                >
                    { render_detect_button_content(model, candidate) }
                </button>
            </div>
        </div>
    }
}

fn render_detect_button_content(model: &Model, candidate: &FileData) -> Html {
    if model.submission.is_loading() {
        html! { <><i class="fa-solid fa-spinner fa-spin"></i>{" Detecting..."}</> }
    } else {
        let filename = candidate.file.name();
        let display_name = if filename.len() > 20 {
            format!("{}...", &filename[..17])
        } else {
            filename
        };

        html! { <><i class="fa-solid fa-magnifying-glass"></i>{ format!(" Detect \"{}\"", display_name) }</> }
    }
}
