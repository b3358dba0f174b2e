//! Static knowledge base: educational text per disease category.

use crate::DiseaseClass;

/// Human-readable description of one condition.
#[derive(Debug, PartialEq, Eq)]
pub struct DiseaseInfoEntry {
    pub symptoms: &'static str,
    pub causes: &'static str,
    pub prevention: &'static str,
}

/// Entry returned for labels outside the known categories.
pub const FALLBACK: DiseaseInfoEntry = DiseaseInfoEntry {
    symptoms: "Information not available.",
    causes: "Information not available.",
    prevention: "Information not available.",
};

/// Total lookup: any label maps to an entry, unknown labels to [`FALLBACK`].
pub fn disease_info(label: &str) -> &'static DiseaseInfoEntry {
    match DiseaseClass::from_label(label) {
        Some(class) => info_for(class),
        None => &FALLBACK,
    }
}

pub fn info_for(class: DiseaseClass) -> &'static DiseaseInfoEntry {
    match class {
        DiseaseClass::BacterialSpot => &BACTERIAL_SPOT,
        DiseaseClass::EarlyBlight => &EARLY_BLIGHT,
        DiseaseClass::LateBlight => &LATE_BLIGHT,
        DiseaseClass::LeafMold => &LEAF_MOLD,
        DiseaseClass::SeptoriaLeafSpot => &SEPTORIA_LEAF_SPOT,
        DiseaseClass::SpiderMites => &SPIDER_MITES,
        DiseaseClass::TargetSpot => &TARGET_SPOT,
        DiseaseClass::YellowLeafCurlVirus => &YELLOW_LEAF_CURL_VIRUS,
        DiseaseClass::MosaicVirus => &MOSAIC_VIRUS,
        DiseaseClass::Healthy => &HEALTHY,
    }
}

const BACTERIAL_SPOT: DiseaseInfoEntry = DiseaseInfoEntry {
    symptoms: "Small, dark, water-soaked, circular spots on leaves, stems, and fruits.",
    causes: "Caused by Xanthomonas bacteria, spread by water splashes and contaminated seeds.",
    prevention: "Use disease-free seeds, practice crop rotation, and avoid overhead irrigation.",
};

const EARLY_BLIGHT: DiseaseInfoEntry = DiseaseInfoEntry {
    symptoms: "Dark brown spots with concentric rings on lower leaves, which may turn yellow and drop.",
    causes: "Caused by the fungus Alternaria solani, favored by warm and humid conditions.",
    prevention: "Remove infected plant debris, improve air circulation, and use fungicides if necessary.",
};

const LATE_BLIGHT: DiseaseInfoEntry = DiseaseInfoEntry {
    symptoms: "Water-soaked spots on leaves, rapidly enlarging and turning brown with fuzzy white growth.",
    causes: "Caused by the oomycete Phytophthora infestans, thrives in cool and moist conditions.",
    prevention: "Plant resistant varieties, improve drainage, and apply fungicides preventively.",
};

const LEAF_MOLD: DiseaseInfoEntry = DiseaseInfoEntry {
    symptoms: "Pale green to yellow spots on upper leaf surfaces, with olive green to gray fuzzy growth underneath.",
    causes: "Caused by the fungus Passalora fulva, favored by high humidity and moderate temperatures.",
    prevention: "Improve air circulation, reduce humidity, and remove infected leaves.",
};

const SEPTORIA_LEAF_SPOT: DiseaseInfoEntry = DiseaseInfoEntry {
    symptoms: "Small, circular spots with dark borders and light centers, often with tiny black fruiting bodies.",
    causes: "Caused by the fungus Septoria lycopersici, spreads through water splashes and contaminated tools.",
    prevention: "Practice crop rotation, remove infected plant debris, and use fungicides if needed.",
};

const SPIDER_MITES: DiseaseInfoEntry = DiseaseInfoEntry {
    symptoms: "Tiny yellow or brown spots on leaves, fine webbing on undersides of leaves, and stunted growth.",
    causes: "Caused by various species of spider mites, thriving in hot and dry conditions.",
    prevention: "Increase humidity, use predatory mites, and apply horticultural oils or insecticidal soaps.",
};

const TARGET_SPOT: DiseaseInfoEntry = DiseaseInfoEntry {
    symptoms: "Brown, circular lesions with concentric rings on leaves, stems, and fruits.",
    causes: "Caused by the fungus Corynespora cassiicola, favored by warm and humid conditions.",
    prevention: "Improve air circulation, avoid overhead watering, and apply fungicides if necessary.",
};

const YELLOW_LEAF_CURL_VIRUS: DiseaseInfoEntry = DiseaseInfoEntry {
    symptoms: "Yellowing and upward curling of leaves, stunted growth, and reduced fruit production.",
    causes: "Caused by a complex of viruses, transmitted by whiteflies.",
    prevention: "Use resistant varieties, control whitefly populations, and remove infected plants.",
};

const MOSAIC_VIRUS: DiseaseInfoEntry = DiseaseInfoEntry {
    symptoms: "Mottled light and dark green patches on leaves, distorted leaf growth, and stunted plants.",
    causes: "Caused by various viruses, often spread by aphids or contaminated tools.",
    prevention: "Use virus-free seeds, control aphid populations, and practice good sanitation.",
};

const HEALTHY: DiseaseInfoEntry = DiseaseInfoEntry {
    symptoms: "No visible symptoms of disease.",
    causes: "N/A",
    prevention: "Maintain good cultural practices, including proper watering, fertilization, and pest management.",
};
