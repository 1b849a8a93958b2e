//! Plant disease library and the simulated image scan.

use std::time::Duration;

use crate::delay;
use crate::Bilingual;

/// How long the simulated scan "analyses" an image before answering.
pub const SCAN_DELAY: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Low,
    Medium,
    High,
}

/// Reference entry shown in the disease library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseInfo {
    pub id: &'static str,
    pub name: Bilingual,
    pub crop: Bilingual,
    pub severity: Severity,
    pub description: Bilingual,
}

/// What a completed scan reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiseaseScan {
    pub disease: Bilingual,
    /// Percentage, 0..=100.
    pub confidence: u8,
    pub treatment: Bilingual,
}

pub fn library() -> Vec<DiseaseInfo> {
    vec![
        DiseaseInfo {
            id: "leaf-rust",
            name: Bilingual::new("Leaf Rust", "पत्ती का जंग"),
            crop: Bilingual::new("Wheat", "गेहूं"),
            severity: Severity::Medium,
            description: Bilingual::new(
                "Orange pustules on leaf surface",
                "पत्ती की सतह पर नारंगी दाने",
            ),
        },
        DiseaseInfo {
            id: "blast",
            name: Bilingual::new("Blast Disease", "ब्लास्ट रोग"),
            crop: Bilingual::new("Rice", "चावल"),
            severity: Severity::High,
            description: Bilingual::new(
                "Diamond-shaped lesions on leaves",
                "पत्तियों पर हीरे के आकार के धब्बे",
            ),
        },
    ]
}

/// Pretend to analyse a photo of a plant. Always resolves with the same
/// diagnosis after [`SCAN_DELAY`].
pub async fn scan_plant_image() -> DiseaseScan {
    tracing::debug!(delay_ms = SCAN_DELAY.as_millis() as u64, "disease scan started");
    delay::sleep(SCAN_DELAY).await;
    let scan = sample_scan();
    tracing::debug!(disease = scan.disease.en, confidence = scan.confidence, "disease scan finished");
    scan
}

fn sample_scan() -> DiseaseScan {
    DiseaseScan {
        disease: Bilingual::new("Leaf Rust", "पत्ती का जंग"),
        confidence: 87,
        treatment: Bilingual::new(
            "Apply fungicide spray every 10 days",
            "हर 10 दिन में कवकनाशी स्प्रे करें",
        ),
    }
}
