use shared::Prediction;
use shared::info::disease_info;
use yew::prelude::*;

use super::utils::format_confidence;
use crate::Model;
use crate::state::{SubmissionState, panel_visibility};

pub const CHART_CANVAS_ID: &str = "disease-chart";

pub fn render_loading_indicator(model: &Model) -> Html {
    let visible = panel_visibility(&model.submission, model.intake_error.as_deref());
    if !visible.loading {
        return html! {};
    }

    html! {
        <div id="loading" class="loading-indicator">
            <i class="fa-solid fa-spinner fa-spin fa-2x"></i>
            <p>{"Analyzing image..."}</p>
        </div>
    }
}

pub fn render_results(model: &Model) -> Html {
    let visible = panel_visibility(&model.submission, model.intake_error.as_deref());
    if !visible.result {
        return html! {};
    }
    let SubmissionState::Success(prediction) = &model.submission else {
        return html! {};
    };

    html! {
        <div id="result-container" class="results-container">
            <div class="result-images">
                <figure>
                    <img id="original-image"
                        src={image_data_url(&prediction.original_image)}
                        alt="Original image" />
                    <figcaption>{"Original"}</figcaption>
                </figure>
                <figure>
                    <img id="gradcam-image"
                        src={image_data_url(&prediction.gradcam_image)}
                        alt="Grad-CAM explanation" />
                    <figcaption>{"Model attention (Grad-CAM)"}</figcaption>
                </figure>
            </div>

            <div class="result-summary">
                <h2 id="detected-disease">{ &prediction.predicted_class }</h2>
                <p class="confidence-line">
                    {"Confidence: "}
                    <span id="confidence">{ format_confidence(prediction.confidence) }</span>
                </p>
            </div>

            <canvas id={CHART_CANVAS_ID} width="480" height="280"></canvas>

            { render_disease_info(prediction) }
        </div>
    }
}

fn image_data_url(encoded: &str) -> String {
    format!("data:image/jpeg;base64,{encoded}")
}

fn render_disease_info(prediction: &Prediction) -> Html {
    let info = disease_info(&prediction.predicted_class);

    html! {
        <div id="disease-info" class="disease-info">
            <h4>{"Symptoms:"}</h4>
            <p>{ info.symptoms }</p>
            <h4>{"Causes:"}</h4>
            <p>{ info.causes }</p>
            <h4>{"Preventive Measures:"}</h4>
            <p>{ info.prevention }</p>
        </div>
    }
}
