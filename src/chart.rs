use crate::models::{ChartData, SeriesRow};

pub fn dataset_label(characteristic: &str, spot: &str) -> String {
    format!("{characteristic} {spot}")
}

pub fn from_rows(label: &str, rows: &[SeriesRow]) -> ChartData {
    ChartData {
        dataset_label: label.to_string(),
        labels: rows.iter().map(|row| row.date.clone()).collect(),
        values: rows.iter().map(|row| row.value.clone()).collect(),
    }
}

pub fn cleared(label: &str) -> ChartData {
    ChartData {
        dataset_label: label.to_string(),
        labels: Vec::new(),
        values: Vec::new(),
    }
}
