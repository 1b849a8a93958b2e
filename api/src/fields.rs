//! Farmer's fields and their latest soil readings.

use crate::Bilingual;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    A,
    B,
    C,
}

impl FieldId {
    pub const ALL: [FieldId; 3] = [FieldId::A, FieldId::B, FieldId::C];

    pub fn value(self) -> &'static str {
        match self {
            FieldId::A => "field-a",
            FieldId::B => "field-b",
            FieldId::C => "field-c",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.value() == value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoilStatus {
    Good,
    NeedsWater,
    Optimal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldReport {
    pub id: FieldId,
    pub name: Bilingual,
    pub area_hectares: f32,
    pub ph: f32,
    pub moisture_pct: u8,
    pub last_test: &'static str,
    pub status: SoilStatus,
}

pub fn fields() -> Vec<FieldReport> {
    vec![
        FieldReport {
            id: FieldId::A,
            name: Bilingual::new("Field A", "खेत A"),
            area_hectares: 2.5,
            ph: 6.8,
            moisture_pct: 35,
            last_test: "15 Oct 2024",
            status: SoilStatus::Good,
        },
        FieldReport {
            id: FieldId::B,
            name: Bilingual::new("Field B", "खेत B"),
            area_hectares: 1.8,
            ph: 7.2,
            moisture_pct: 22,
            last_test: "20 Sep 2024",
            status: SoilStatus::NeedsWater,
        },
        FieldReport {
            id: FieldId::C,
            name: Bilingual::new("Field C", "खेत C"),
            area_hectares: 3.1,
            ph: 6.5,
            moisture_pct: 45,
            last_test: "5 Oct 2024",
            status: SoilStatus::Optimal,
        },
    ]
}

/// Headline numbers for the soil overview tiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SoilOverview {
    pub total_fields: usize,
    pub average_ph: f32,
    pub average_moisture_pct: u8,
}

/// The overview is published figures, not an aggregate of [`fields`].
pub fn overview() -> SoilOverview {
    SoilOverview {
        total_fields: 3,
        average_ph: 6.8,
        average_moisture_pct: 34,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_b_needs_water() {
        let b = fields().into_iter().find(|f| f.id == FieldId::B).unwrap();
        assert_eq!(b.status, SoilStatus::NeedsWater);
        assert_eq!(b.moisture_pct, 22);
    }

    #[test]
    fn overview_counts_every_field() {
        assert_eq!(overview().total_fields, fields().len());
    }
}
