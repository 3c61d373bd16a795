use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::query::Collection;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Characteristic {
    pub id: u32,
    pub name: &'static str,
    #[serde(skip)]
    pub kind: &'static str,
    #[serde(skip)]
    pub collection: Collection,
}

pub static CHARACTERISTICS: [Characteristic; 4] = [
    Characteristic {
        id: 1,
        name: "Sea level",
        kind: "sea_level",
        collection: Collection::SeaLevels,
    },
    Characteristic {
        id: 2,
        name: "Significant wave height",
        kind: "wave_height",
        collection: Collection::WaveHeights,
    },
    Characteristic {
        id: 3,
        name: "Wave direction",
        kind: "wave_direction",
        collection: Collection::WaveDirections,
    },
    Characteristic {
        id: 4,
        name: "Wave period",
        kind: "wave_period",
        collection: Collection::WavePeriods,
    },
];

pub fn characteristic(id: u32) -> Option<&'static Characteristic> {
    CHARACTERISTICS.iter().find(|c| c.id == id)
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Interval {
    pub id: u32,
    pub label: &'static str,
}

impl Interval {
    // The backend stores photos on the hour; interval ids are 1-based.
    pub fn hour(&self) -> u32 {
        self.id - 1
    }
}

pub static INTERVALS: [Interval; 4] = [
    Interval { id: 1, label: "00:00" },
    Interval { id: 7, label: "06:00" },
    Interval { id: 13, label: "12:00" },
    Interval { id: 19, label: "18:00" },
];

pub fn interval(id: u32) -> Option<&'static Interval> {
    INTERVALS.iter().find(|i| i.id == id)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservationSpot {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesRow {
    pub value: String,
    pub date: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Notice {
    pub severity: &'static str,
    pub summary: &'static str,
    pub detail: &'static str,
}

impl Notice {
    pub fn success(detail: &'static str) -> Self {
        Self {
            severity: "success",
            summary: "Success",
            detail,
        }
    }

    pub fn error(detail: &'static str) -> Self {
        Self {
            severity: "error",
            summary: "Error",
            detail,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AnalysisQuery {
    pub spot: u64,
    pub spot_name: String,
    pub date: NaiveDate,
    pub interval: u32,
    pub characteristic: u32,
}

#[derive(Debug, Serialize)]
pub struct FiltersResponse {
    pub characteristics: Vec<Characteristic>,
    pub intervals: Vec<Interval>,
}

#[derive(Debug, Serialize)]
pub struct SpotsResponse {
    pub spots: Vec<ObservationSpot>,
    pub notices: Vec<Notice>,
}

#[derive(Debug, Clone, Serialize, Default)]
pub struct ChartData {
    pub dataset_label: String,
    pub labels: Vec<String>,
    pub values: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct AnalysisResponse {
    pub photo_url: Option<String>,
    pub chart: ChartData,
    pub notices: Vec<Notice>,
}
