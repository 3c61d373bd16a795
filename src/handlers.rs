use axum::{
    extract::{Query, State},
    response::Html,
    Json,
};
use chrono::Datelike;
use tracing::error;

use crate::chart;
use crate::config::SeriesGranularity;
use crate::errors::AppError;
use crate::models::{
    AnalysisQuery, AnalysisResponse, Characteristic, FiltersResponse, Interval, Notice,
    SpotsResponse, CHARACTERISTICS, INTERVALS, characteristic, interval,
};
use crate::query::{DatePart, Filter};
use crate::state::AppState;
use crate::ui;

pub async fn index() -> Html<&'static str> {
    Html(ui::INDEX_HTML)
}

pub async fn get_filters() -> Json<FiltersResponse> {
    Json(FiltersResponse {
        characteristics: CHARACTERISTICS.to_vec(),
        intervals: INTERVALS.to_vec(),
    })
}

pub async fn get_spots(State(state): State<AppState>) -> Json<SpotsResponse> {
    match state.backend.observation_spots().await {
        Ok(spots) => Json(SpotsResponse {
            spots,
            notices: vec![Notice::success("Observation spot list loaded.")],
        }),
        Err(err) => {
            error!("failed to load observation spots: {err}");
            Json(SpotsResponse {
                spots: Vec::new(),
                notices: vec![Notice::error(
                    "The backend could not provide the observation spot list.",
                )],
            })
        }
    }
}

pub async fn get_analysis(
    State(state): State<AppState>,
    Query(query): Query<AnalysisQuery>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let characteristic = characteristic(query.characteristic)
        .ok_or_else(|| AppError::bad_request("unknown characteristic id"))?;
    let interval =
        interval(query.interval).ok_or_else(|| AppError::bad_request("unknown interval id"))?;

    let mut notices = Vec::new();

    // Photo and series lookups are independent best-effort reads; a failed
    // photo must not keep the series from loading.
    let photo_url = match state.backend.photo(&photo_filter(&query, characteristic, interval)).await
    {
        Ok(Some(photo)) => {
            notices.push(Notice::success("Photo loaded."));
            Some(state.backend.asset_url(&photo.image))
        }
        Ok(None) => {
            notices.push(Notice::error("No photo matches the selected filters."));
            None
        }
        Err(err) => {
            error!("photo lookup failed: {err}");
            notices.push(Notice::error("No photo matches the selected filters."));
            None
        }
    };

    let label = chart::dataset_label(characteristic.name, &query.spot_name);
    let series_filter = series_filter(&query, state.granularity);
    let chart = match state
        .backend
        .series(characteristic.collection, &series_filter)
        .await
    {
        Ok(rows) if rows.is_empty() => {
            notices.push(Notice::error("No measurements match the selected filters."));
            chart::cleared(&label)
        }
        Ok(rows) => chart::from_rows(&label, &rows),
        Err(err) => {
            error!("series lookup failed: {err}");
            notices.push(Notice::error("No measurements match the selected filters."));
            chart::cleared(&label)
        }
    };

    Ok(Json(AnalysisResponse {
        photo_url,
        chart,
        notices,
    }))
}

fn photo_filter(
    query: &AnalysisQuery,
    characteristic: &Characteristic,
    interval: &Interval,
) -> Filter {
    Filter::new()
        .eq_date_part(DatePart::Hour, interval.hour())
        .eq_date_part(DatePart::Day, query.date.day())
        .eq_date_part(DatePart::Month, query.date.month())
        .eq_date_part(DatePart::Year, query.date.year())
        .eq("observation_spot", query.spot)
        .eq("type", characteristic.kind)
}

fn series_filter(query: &AnalysisQuery, granularity: SeriesGranularity) -> Filter {
    let folder = match granularity {
        SeriesGranularity::Day => query.date.format("%Y-%m-%d").to_string(),
        SeriesGranularity::Month => query.date.format("%Y-%m").to_string(),
    };
    Filter::new()
        .eq("observation_spot", query.spot)
        .eq("folder_name", folder.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn selection() -> AnalysisQuery {
        AnalysisQuery {
            spot: 3,
            spot_name: "Aktau".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 17).unwrap(),
            interval: 13,
            characteristic: 2,
        }
    }

    #[test]
    fn photo_filter_matches_hour_date_spot_and_type() {
        let query = selection();
        let filter = photo_filter(
            &query,
            characteristic(query.characteristic).unwrap(),
            interval(query.interval).unwrap(),
        );
        assert_eq!(
            filter.encode(),
            concat!(
                r#"{"_and":[{"hour(date)":{"_eq":12}},{"day(date)":{"_eq":17}},"#,
                r#"{"month(date)":{"_eq":5}},{"year(date)":{"_eq":2024}},"#,
                r#"{"observation_spot":{"_eq":3}},{"type":{"_eq":"wave_height"}}]}"#
            )
        );
    }

    #[test]
    fn series_filter_uses_full_date_by_default() {
        let filter = series_filter(&selection(), SeriesGranularity::Day);
        assert_eq!(
            filter.encode(),
            r#"{"_and":[{"observation_spot":{"_eq":3}},{"folder_name":{"_eq":"2024-05-17"}}]}"#
        );
    }

    #[test]
    fn series_filter_drops_day_at_month_granularity() {
        let filter = series_filter(&selection(), SeriesGranularity::Month);
        assert_eq!(
            filter.encode(),
            r#"{"_and":[{"observation_spot":{"_eq":3}},{"folder_name":{"_eq":"2024-05"}}]}"#
        );
    }
}
