use serde_json::{Map, Value, json};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    ObservationSpots,
    Photos,
    SeaLevels,
    WaveHeights,
    WaveDirections,
    WavePeriods,
}

impl Collection {
    pub fn as_str(self) -> &'static str {
        match self {
            Collection::ObservationSpots => "observation_spots",
            Collection::Photos => "photos",
            Collection::SeaLevels => "sea_levels",
            Collection::WaveHeights => "wave_heights",
            Collection::WaveDirections => "wave_directions",
            Collection::WavePeriods => "wave_periods",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatePart {
    Hour,
    Day,
    Month,
    Year,
}

impl DatePart {
    fn field(self) -> &'static str {
        match self {
            DatePart::Hour => "hour(date)",
            DatePart::Day => "day(date)",
            DatePart::Month => "month(date)",
            DatePart::Year => "year(date)",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Filter {
    clauses: Vec<(String, Value)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.clauses.push((field.to_string(), value.into()));
        self
    }

    pub fn eq_date_part(self, part: DatePart, value: impl Into<Value>) -> Self {
        self.eq(part.field(), value)
    }

    pub fn to_value(&self) -> Value {
        let clauses: Vec<Value> = self
            .clauses
            .iter()
            .map(|(field, value)| {
                let mut predicate = Map::new();
                predicate.insert(field.clone(), json!({ "_eq": value }));
                Value::Object(predicate)
            })
            .collect();
        json!({ "_and": clauses })
    }

    pub fn encode(&self) -> String {
        self.to_value().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_encodes_and_of_eq_predicates() {
        let filter = Filter::new()
            .eq("observation_spot", 3)
            .eq("folder_name", "2024-05-17");
        assert_eq!(
            filter.encode(),
            r#"{"_and":[{"observation_spot":{"_eq":3}},{"folder_name":{"_eq":"2024-05-17"}}]}"#
        );
    }

    #[test]
    fn filter_date_parts_use_extraction_fields() {
        let filter = Filter::new()
            .eq_date_part(DatePart::Hour, 12)
            .eq_date_part(DatePart::Day, 17)
            .eq_date_part(DatePart::Month, 5)
            .eq_date_part(DatePart::Year, 2024);
        assert_eq!(
            filter.encode(),
            concat!(
                r#"{"_and":[{"hour(date)":{"_eq":12}},{"day(date)":{"_eq":17}},"#,
                r#"{"month(date)":{"_eq":5}},{"year(date)":{"_eq":2024}}]}"#
            )
        );
    }

    #[test]
    fn empty_filter_encodes_empty_and() {
        assert_eq!(Filter::new().encode(), r#"{"_and":[]}"#);
    }

    #[test]
    fn collection_names_match_backend() {
        assert_eq!(Collection::ObservationSpots.as_str(), "observation_spots");
        assert_eq!(Collection::Photos.as_str(), "photos");
        assert_eq!(Collection::SeaLevels.as_str(), "sea_levels");
        assert_eq!(Collection::WaveHeights.as_str(), "wave_heights");
        assert_eq!(Collection::WaveDirections.as_str(), "wave_directions");
        assert_eq!(Collection::WavePeriods.as_str(), "wave_periods");
    }
}
