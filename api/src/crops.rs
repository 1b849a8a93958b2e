//! Crop catalogue.

use crate::Bilingual;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CropKind {
    Wheat,
    Rice,
    Maize,
}

impl CropKind {
    pub const ALL: [CropKind; 3] = [CropKind::Wheat, CropKind::Rice, CropKind::Maize];

    pub fn value(self) -> &'static str {
        match self {
            CropKind::Wheat => "wheat",
            CropKind::Rice => "rice",
            CropKind::Maize => "maize",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }

    pub fn name(self) -> Bilingual {
        match self {
            CropKind::Wheat => Bilingual::new("Wheat", "गेहूं"),
            CropKind::Rice => Bilingual::new("Rice", "चावल"),
            CropKind::Maize => Bilingual::new("Maize", "मक्का"),
        }
    }
}

/// Growing season a crop belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Season {
    Rabi,
    Kharif,
    Both,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropStatus {
    InSeason,
    OffSeason,
    Available,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CropProfile {
    pub kind: CropKind,
    pub season: Season,
    pub typical_yield: &'static str,
    pub sowing_window: &'static str,
    pub status: CropStatus,
}

pub fn catalogue() -> Vec<CropProfile> {
    vec![
        CropProfile {
            kind: CropKind::Wheat,
            season: Season::Rabi,
            typical_yield: "4.2 t/ha",
            sowing_window: "Nov-Dec",
            status: CropStatus::InSeason,
        },
        CropProfile {
            kind: CropKind::Rice,
            season: Season::Kharif,
            typical_yield: "6.5 t/ha",
            sowing_window: "Jun-Jul",
            status: CropStatus::OffSeason,
        },
        CropProfile {
            kind: CropKind::Maize,
            season: Season::Both,
            typical_yield: "5.1 t/ha",
            sowing_window: "Apr-May, Nov-Dec",
            status: CropStatus::Available,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_covers_every_crop_once() {
        let kinds: Vec<_> = catalogue().into_iter().map(|c| c.kind).collect();
        assert_eq!(kinds, CropKind::ALL.to_vec());
    }

    #[test]
    fn only_wheat_is_in_season() {
        let in_season: Vec<_> = catalogue()
            .into_iter()
            .filter(|c| c.status == CropStatus::InSeason)
            .map(|c| c.kind)
            .collect();
        assert_eq!(in_season, vec![CropKind::Wheat]);
    }
}
