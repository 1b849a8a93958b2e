//! Recent alerts shown on the dashboard.

use crate::Bilingual;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Warning,
    Danger,
    Info,
    Success,
}

/// Follow-up a farmer can take straight from an alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertAction {
    ScheduleIrrigation,
    ViewTreatment,
    PlanHarvest,
}

impl AlertAction {
    pub fn label(self) -> Bilingual {
        match self {
            AlertAction::ScheduleIrrigation => Bilingual::new("Schedule", "अनुसूची"),
            AlertAction::ViewTreatment => Bilingual::new("View Treatment", "उपचार देखें"),
            AlertAction::PlanHarvest => Bilingual::new("Plan Harvest", "कटाई की योजना"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub id: &'static str,
    pub kind: AlertKind,
    pub title: Bilingual,
    pub description: Bilingual,
    pub timestamp: &'static str,
    pub urgent: bool,
    pub action: Option<AlertAction>,
}

/// Upper bound on alerts rendered in the dashboard panel.
pub const PANEL_LIMIT: usize = 4;

pub fn recent() -> Vec<Alert> {
    vec![
        Alert {
            id: "1",
            kind: AlertKind::Warning,
            title: Bilingual::new("Irrigation Required", "सिंचाई आवश्यक"),
            description: Bilingual::new(
                "Field A needs watering - soil moisture at 25%",
                "खेत A में पानी की जरूरत - मिट्टी की नमी 25%",
            ),
            timestamp: "2 hours ago",
            urgent: true,
            action: Some(AlertAction::ScheduleIrrigation),
        },
        Alert {
            id: "2",
            kind: AlertKind::Danger,
            title: Bilingual::new("Pest Alert", "कीट चेतावनी"),
            description: Bilingual::new(
                "High aphid activity detected in wheat fields",
                "गेहूं के खेतों में माहू की अधिक गतिविधि",
            ),
            timestamp: "1 day ago",
            urgent: true,
            action: Some(AlertAction::ViewTreatment),
        },
        Alert {
            id: "3",
            kind: AlertKind::Info,
            title: Bilingual::new("Weather Update", "मौसम अपडेट"),
            description: Bilingual::new(
                "Light rainfall expected in next 3 days",
                "अगले 3 दिनों में हल्की बारिश की संभावना",
            ),
            timestamp: "6 hours ago",
            urgent: false,
            action: None,
        },
        Alert {
            id: "4",
            kind: AlertKind::Success,
            title: Bilingual::new("Harvest Ready", "फसल तैयार"),
            description: Bilingual::new(
                "Tomato crop in Field C ready for harvest",
                "खेत C में टमाटर की फसल कटाई के लिए तैयार",
            ),
            timestamp: "1 day ago",
            urgent: false,
            action: Some(AlertAction::PlanHarvest),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgent_alerts_come_first() {
        let urgent: Vec<_> = recent().iter().map(|a| a.urgent).collect();
        assert_eq!(urgent, vec![true, true, false, false]);
    }

    #[test]
    fn fixture_fits_in_the_panel() {
        assert!(recent().len() <= PANEL_LIMIT);
    }
}
