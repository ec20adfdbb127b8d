use crate::errors::ClientError;
use crate::models::{CreateEntryRequest, Entry, MessageResponse, UpdateEntryRequest};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

/// Typed wrapper over the entry routes.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_entries(&self) -> Result<Vec<Entry>, ClientError> {
        let response = self.http.get(self.url("/get/")).send().await?;
        decode(response).await
    }

    pub async fn get_entry(&self, id: &str) -> Result<Entry, ClientError> {
        let response = self.http.get(self.url(&format!("/get/{id}"))).send().await?;
        decode(response).await
    }

    pub async fn create_entry(&self, request: &CreateEntryRequest) -> Result<Entry, ClientError> {
        let response = self.http.post(self.url("/create/")).json(request).send().await?;
        decode(response).await
    }

    pub async fn update_entry(
        &self,
        id: &str,
        request: &UpdateEntryRequest,
    ) -> Result<MessageResponse, ClientError> {
        let response = self
            .http
            .put(self.url(&format!("/update/{id}")))
            .json(request)
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete_entry(&self, id: &str) -> Result<MessageResponse, ClientError> {
        let response = self.http.delete(self.url(&format!("/delete/{id}"))).send().await?;
        decode(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json().await?);
    }

    let body = response.text().await?;
    let msg = serde_json::from_str::<MessageResponse>(&body)
        .map(|reply| reply.msg)
        .unwrap_or(body);
    Err(ClientError::Api {
        status: status.as_u16(),
        msg,
    })
}
