use std::str::FromStr;

use serde::{Deserialize, Serialize};
use strum::EnumCount as _;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

pub mod info;

/// The ten known categories, in wire order: declaration order matches the
/// positional order of [`Prediction::all_probabilities`] and the chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, EnumIter, EnumString, EnumCount)]
pub enum DiseaseClass {
    #[strum(serialize = "Bacterial Spot")]
    BacterialSpot,
    #[strum(serialize = "Early Blight")]
    EarlyBlight,
    #[strum(serialize = "Late Blight")]
    LateBlight,
    #[strum(serialize = "Leaf Mold")]
    LeafMold,
    #[strum(serialize = "Septoria Leaf Spot")]
    SeptoriaLeafSpot,
    #[strum(serialize = "Spider Mites")]
    SpiderMites,
    #[strum(serialize = "Target Spot")]
    TargetSpot,
    #[strum(serialize = "Yellow Leaf Curl Virus")]
    YellowLeafCurlVirus,
    #[strum(serialize = "Mosaic Virus")]
    MosaicVirus,
    Healthy,
}

pub const CLASS_COUNT: usize = DiseaseClass::COUNT;

impl DiseaseClass {
    pub fn from_label(label: &str) -> Option<Self> {
        Self::from_str(label).ok()
    }
}

/// All classes in wire order.
pub fn ordered_classes() -> impl Iterator<Item = DiseaseClass> {
    DiseaseClass::iter()
}

/// Successful `/detect` payload.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Prediction {
    #[serde(rename = "class")]
    pub predicted_class: String,
    pub confidence: f32,
    pub all_probabilities: Vec<f32>,
    pub original_image: String,
    pub gradcam_image: String,
}

/// Structured failure reported by the server; the message is user-facing.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, derive_more::Display)]
#[display(fmt = "{}", error)]
pub struct ServerError {
    pub error: String,
}

/// Body of a `/detect` response. A body carrying an `error` field parses as
/// `Failure`; anything else must be a complete prediction.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum DetectResponse {
    Failure(ServerError),
    Success(Prediction),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_order_matches_wire_order() {
        let labels: Vec<String> = ordered_classes().map(|c| c.to_string()).collect();
        assert_eq!(
            labels,
            [
                "Bacterial Spot",
                "Early Blight",
                "Late Blight",
                "Leaf Mold",
                "Septoria Leaf Spot",
                "Spider Mites",
                "Target Spot",
                "Yellow Leaf Curl Virus",
                "Mosaic Virus",
                "Healthy",
            ]
        );
        assert_eq!(CLASS_COUNT, 10);
    }

    #[test]
    fn labels_round_trip() {
        for class in ordered_classes() {
            assert_eq!(DiseaseClass::from_label(&class.to_string()), Some(class));
        }
        assert_eq!(DiseaseClass::from_label("Unknown Disease"), None);
    }

    #[test]
    fn parses_prediction_body() {
        let body = r#"{
            "class": "Early Blight",
            "confidence": 0.932,
            "all_probabilities": [0.01, 0.932, 0.01, 0.01, 0.01, 0.01, 0.01, 0.01, 0.01, 0.008],
            "original_image": "<b64>",
            "gradcam_image": "<b64>"
        }"#;

        match serde_json::from_str::<DetectResponse>(body).unwrap() {
            DetectResponse::Success(prediction) => {
                assert_eq!(prediction.predicted_class, "Early Blight");
                assert_eq!(prediction.all_probabilities.len(), CLASS_COUNT);
                assert!((prediction.confidence - 0.932).abs() < 1e-6);
                assert_eq!(prediction.original_image, "<b64>");
            }
            DetectResponse::Failure(err) => panic!("expected a prediction, got error {err}"),
        }
    }

    #[test]
    fn parses_error_body() {
        let body = r#"{"error": "Invalid image"}"#;

        match serde_json::from_str::<DetectResponse>(body).unwrap() {
            DetectResponse::Failure(err) => assert_eq!(err.to_string(), "Invalid image"),
            DetectResponse::Success(_) => panic!("expected an error"),
        }
    }
}
