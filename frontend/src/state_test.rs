use shared::Prediction;

use super::*;

fn sample_prediction() -> Prediction {
    serde_json::from_str(
        r#"{
            "class": "Early Blight",
            "confidence": 0.932,
            "all_probabilities": [0.01, 0.932, 0.01, 0.01, 0.01, 0.01, 0.01, 0.01, 0.01, 0.008],
            "original_image": "<b64>",
            "gradcam_image": "<b64>"
        }"#,
    )
    .unwrap()
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn submission_reaches_success_through_loading() {
    let mut state = SubmissionState::Idle;

    state.begin();
    assert_eq!(state, SubmissionState::Loading);

    state.finish(Ok(sample_prediction()));
    assert_eq!(state, SubmissionState::Success(sample_prediction()));
}

#[test]
fn submission_reaches_error_through_loading() {
    let mut state = SubmissionState::Idle;

    state.begin();
    assert!(state.is_loading());

    state.finish(Err("Invalid image".to_string()));
    assert_eq!(state, SubmissionState::Error("Invalid image".to_string()));
}

#[test]
fn resubmission_discards_previous_terminal_state() {
    let mut state = SubmissionState::Error("Invalid image".to_string());
    state.begin();
    assert!(state.is_loading());

    let mut state = SubmissionState::Success(sample_prediction());
    state.begin();
    assert!(state.is_loading());
}

#[test]
fn late_response_from_overlapping_submission_wins() {
    // Two requests in flight; the first resolves after the second. The last
    // arrival determines the displayed state.
    let mut state = SubmissionState::Loading;
    state.finish(Ok(sample_prediction()));
    state.finish(Err("Invalid image".to_string()));
    assert_eq!(state, SubmissionState::Error("Invalid image".to_string()));
}

// =============================================================
// Panel visibility
// =============================================================

#[test]
fn idle_shows_nothing() {
    let visible = panel_visibility(&SubmissionState::Idle, None);
    assert_eq!(
        visible,
        PanelVisibility { loading: false, result: false, error: false }
    );
}

#[test]
fn loading_hides_previous_panels() {
    let visible = panel_visibility(&SubmissionState::Loading, None);
    assert!(visible.loading);
    assert!(!visible.result);
    assert!(!visible.error);
}

#[test]
fn success_shows_exactly_the_result_panel() {
    let visible = panel_visibility(&SubmissionState::Success(sample_prediction()), None);
    assert_eq!(
        visible,
        PanelVisibility { loading: false, result: true, error: false }
    );
}

#[test]
fn error_shows_exactly_the_error_panel() {
    let visible = panel_visibility(&SubmissionState::Error("Invalid image".into()), None);
    assert_eq!(
        visible,
        PanelVisibility { loading: false, result: false, error: true }
    );
}

#[test]
fn result_and_error_panels_are_never_both_visible() {
    let states = [
        SubmissionState::Idle,
        SubmissionState::Loading,
        SubmissionState::Success(sample_prediction()),
        SubmissionState::Error("Invalid image".into()),
    ];
    for state in &states {
        for intake in [None, Some("Only JPEG images are allowed")] {
            let visible = panel_visibility(state, intake);
            assert!(
                !(visible.result && visible.error),
                "both panels visible for {state:?} with intake {intake:?}"
            );
        }
    }
}

#[test]
fn intake_error_borrows_error_panel_without_touching_state() {
    let state = SubmissionState::Success(sample_prediction());

    let visible = panel_visibility(&state, Some("Only JPEG images are allowed"));
    assert!(visible.error);
    assert!(!visible.result);

    // The submission state itself is untouched; clearing the intake message
    // brings the result back.
    let visible = panel_visibility(&state, None);
    assert!(visible.result);
    assert!(!visible.error);
}

// =============================================================
// Intake validation
// =============================================================

#[test]
fn non_jpeg_media_types_are_rejected() {
    for media_type in ["image/png", "image/gif", "image/webp", "text/plain", ""] {
        assert_eq!(
            validate_media_type(media_type),
            Err(IntakeError::UnsupportedMediaType),
            "accepted {media_type:?}"
        );
    }
}

#[test]
fn jpeg_media_type_is_accepted() {
    assert_eq!(validate_media_type("image/jpeg"), Ok(()));
}

#[test]
fn rejection_message_is_user_facing() {
    assert_eq!(
        IntakeError::UnsupportedMediaType.message(),
        "Only JPEG images are allowed"
    );
}
