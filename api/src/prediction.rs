//! Simulated crop yield forecasting.

use std::time::Duration;

use crate::crops::CropKind;
use crate::delay;
use crate::fields::FieldId;
use crate::Bilingual;

/// Simulated model latency.
pub const PREDICTION_DELAY: Duration = Duration::from_millis(2000);

/// Default sowing date pre-filled in the prediction form.
pub const DEFAULT_SOWING_DATE: &str = "2024-11-15";

/// How far ahead the forecast should look.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Horizon {
    OneMonth,
    #[default]
    ThreeMonths,
    SixMonths,
}

impl Horizon {
    pub const ALL: [Horizon; 3] = [Horizon::OneMonth, Horizon::ThreeMonths, Horizon::SixMonths];

    pub fn months(self) -> u8 {
        match self {
            Horizon::OneMonth => 1,
            Horizon::ThreeMonths => 3,
            Horizon::SixMonths => 6,
        }
    }

    /// Stable form value used by `<select>` options.
    pub fn value(self) -> &'static str {
        match self {
            Horizon::OneMonth => "1month",
            Horizon::ThreeMonths => "3months",
            Horizon::SixMonths => "6months",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.value() == value)
    }
}

/// Inputs collected by the prediction form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionRequest {
    pub field: FieldId,
    pub crop: CropKind,
    pub sowing_date: String,
    pub horizon: Horizon,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            field: FieldId::A,
            crop: CropKind::Wheat,
            sowing_date: DEFAULT_SOWING_DATE.to_string(),
            horizon: Horizon::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YieldFactor {
    pub factor: Bilingual,
    /// Signed effect on yield in percent.
    pub impact_pct: i8,
    pub description: Bilingual,
}

impl YieldFactor {
    pub fn is_positive(&self) -> bool {
        self.impact_pct > 0
    }

    /// `+15%` / `-5%`
    pub fn impact_label(&self) -> String {
        format!("{:+}%", self.impact_pct)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub action: Bilingual,
    pub timing: Bilingual,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YieldPrediction {
    pub yield_value: &'static str,
    pub unit: &'static str,
    pub confidence: &'static str,
    pub factors: Vec<YieldFactor>,
    pub recommendations: Vec<Recommendation>,
}

/// Pretend to run the forecasting model. The request is only logged; the
/// answer is the same literal forecast every time.
pub async fn run_crop_prediction(request: PredictionRequest) -> YieldPrediction {
    tracing::debug!(
        field = request.field.value(),
        crop = request.crop.value(),
        sowing_date = %request.sowing_date,
        horizon_months = request.horizon.months(),
        "crop prediction started"
    );
    delay::sleep(PREDICTION_DELAY).await;
    sample_prediction()
}

fn sample_prediction() -> YieldPrediction {
    YieldPrediction {
        yield_value: "4.2",
        unit: "t/ha",
        confidence: "±0.3",
        factors: vec![
            YieldFactor {
                factor: Bilingual::new("Weather Pattern", "मौसम पैटर्न"),
                impact_pct: 15,
                description: Bilingual::new("Favorable rainfall expected", "अनुकूल वर्षा की उम्मीद"),
            },
            YieldFactor {
                factor: Bilingual::new("Soil Moisture", "मिट्टी की नमी"),
                impact_pct: -5,
                description: Bilingual::new(
                    "Current moisture levels are low",
                    "वर्तमान नमी का स्तर कम है",
                ),
            },
            YieldFactor {
                factor: Bilingual::new("Market Conditions", "बाज़ार की स्थिति"),
                impact_pct: 8,
                description: Bilingual::new("Strong demand forecast", "मजबूत मांग का पूर्वानुमान"),
            },
        ],
        recommendations: vec![
            Recommendation {
                action: Bilingual::new("Increase irrigation frequency", "सिंचाई की आवृत्ति बढ़ाएं"),
                timing: Bilingual::new("Next 2 weeks", "अगले 2 सप्ताह"),
            },
            Recommendation {
                action: Bilingual::new("Apply nitrogen fertilizer", "नाइट्रोजन उर्वरक डालें"),
                timing: Bilingual::new("Vegetative stage", "वानस्पतिक अवस्था"),
            },
        ],
    }
}
