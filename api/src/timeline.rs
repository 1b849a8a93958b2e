//! Growth stages for the featured crop.

use crate::Bilingual;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Completed,
    Current,
    Upcoming,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropStage {
    pub id: &'static str,
    pub name: Bilingual,
    pub status: StageStatus,
    pub date: &'static str,
    pub duration: &'static str,
    pub icon: &'static str,
}

pub fn stages() -> Vec<CropStage> {
    vec![
        CropStage {
            id: "planting",
            name: Bilingual::new("Planting", "बुवाई"),
            status: StageStatus::Completed,
            date: "Oct 15",
            duration: "1-2 days",
            icon: "⚡",
        },
        CropStage {
            id: "vegetative",
            name: Bilingual::new("Vegetative", "वानस्पतिक"),
            status: StageStatus::Current,
            date: "Nov 1-Jan 15",
            duration: "75 days",
            icon: "🌱",
        },
        CropStage {
            id: "flowering",
            name: Bilingual::new("Flowering", "फूल आना"),
            status: StageStatus::Upcoming,
            date: "Jan 16-Feb 15",
            duration: "30 days",
            icon: "🌼",
        },
        CropStage {
            id: "harvest",
            name: Bilingual::new("Harvest", "कटाई"),
            status: StageStatus::Upcoming,
            date: "Mar 1-15",
            duration: "15 days",
            icon: "🏆",
        },
    ]
}
