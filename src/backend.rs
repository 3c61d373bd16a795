use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::errors::BackendError;
use crate::models::{ObservationSpot, Photo, SeriesRow};
use crate::query::{Collection, Filter};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: Vec<T>,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn asset_url(&self, image: &str) -> String {
        format!("{}assets/{image}", self.base_url)
    }

    async fn items<T: DeserializeOwned>(
        &self,
        collection: Collection,
        filter: Option<&Filter>,
        limit: Option<u32>,
    ) -> Result<Vec<T>, BackendError> {
        let url = format!("{}items/{}", self.base_url, collection.as_str());
        let mut request = self.http.get(&url);
        if let Some(filter) = filter {
            request = request.query(&[("filter", filter.encode())]);
        }
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit.to_string())]);
        }

        let envelope: Envelope<T> = request
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(envelope.data)
    }

    pub async fn observation_spots(&self) -> Result<Vec<ObservationSpot>, BackendError> {
        self.items(Collection::ObservationSpots, None, None).await
    }

    pub async fn photo(&self, filter: &Filter) -> Result<Option<Photo>, BackendError> {
        let mut photos: Vec<Photo> = self
            .items(Collection::Photos, Some(filter), Some(100))
            .await?;
        if photos.is_empty() {
            Ok(None)
        } else {
            Ok(Some(photos.remove(0)))
        }
    }

    pub async fn series(
        &self,
        collection: Collection,
        filter: &Filter,
    ) -> Result<Vec<SeriesRow>, BackendError> {
        self.items(collection, Some(filter), None).await
    }
}
