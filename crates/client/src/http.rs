//! HTTP implementation of the item store contract.

use async_trait::async_trait;

use movinv_core::ItemId;
use movinv_inventory::{Item, ItemRecord};

use crate::config::ClientConfig;
use crate::store::{ItemStore, StoreError};

/// reqwest-backed [`ItemStore`] against the REST collection resource:
/// `GET /items`, `POST /items`, `PUT /items/{id}`, `DELETE /items/{id}`.
#[derive(Debug, Clone)]
pub struct HttpItemStore {
    client: reqwest::Client,
    api_url: String,
}

impl HttpItemStore {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url: config.api_url,
        }
    }

    fn items_url(&self) -> String {
        format!("{}/items", self.api_url)
    }

    fn item_url(&self, id: ItemId) -> String {
        format!("{}/items/{}", self.api_url, id)
    }
}

async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return Err(StoreError::Api(status.as_u16(), body));
    }
    Ok(resp)
}

#[async_trait]
impl ItemStore for HttpItemStore {
    async fn list(&self) -> Result<Vec<Item>, StoreError> {
        let resp = self
            .client
            .get(self.items_url())
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        check_status(resp)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn create(&self, record: &ItemRecord) -> Result<Item, StoreError> {
        let resp = self
            .client
            .post(self.items_url())
            .json(record)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        check_status(resp)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn update(&self, id: ItemId, record: &ItemRecord) -> Result<Item, StoreError> {
        let resp = self
            .client
            .put(self.item_url(id))
            .json(record)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        check_status(resp)
            .await?
            .json()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn delete(&self, id: ItemId) -> Result<(), StoreError> {
        let resp = self
            .client
            .delete(self.item_url(id))
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;
        check_status(resp).await?;
        Ok(())
    }
}
