use async_trait::async_trait;
use chrono::Utc;
use once_cell::sync::Lazy;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::models::{Event, Post};

static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("events-preview/0.1")
        .build()
        .expect("failed to build preview client")
});

const DEFAULT_API_URL: &str = "http://127.0.0.1:3000/rest/v1";

#[derive(Debug, thiserror::Error)]
pub enum DataError {
    #[error("http error: {0}")]
    Http(String),
    #[error("parse error: {0}")]
    Parse(String),
}

/// Backend reads the preview panel depends on. Both operations return `None`
/// when the backend has nothing to show, which the panel treats the same as
/// a failed fetch.
#[async_trait]
pub trait PreviewSource {
    async fn next_upcoming_event(&self) -> Result<Option<Event>, DataError>;
    async fn featured_post(&self) -> Result<Option<Post>, DataError>;
}

pub struct DataClient {
    base_url: String,
    api_key: Option<String>,
}

impl DataClient {
    pub fn new(base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key,
        }
    }

    pub fn from_env() -> Self {
        let base_url =
            std::env::var("PREVIEW_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let api_key = std::env::var("PREVIEW_API_KEY").ok();
        Self { base_url, api_key }
    }

    fn table_url(&self, table: &str) -> Result<Url, DataError> {
        let base = self.base_url.trim_end_matches('/');
        Url::parse(&format!("{base}/{table}")).map_err(|err| DataError::Http(err.to_string()))
    }

    async fn fetch_rows<T: DeserializeOwned>(&self, url: Url) -> Result<Vec<T>, DataError> {
        let mut request = CLIENT.get(url);
        if let Some(key) = &self.api_key {
            request = request.header("apikey", key).bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|err| DataError::Http(err.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|err| DataError::Http(err.to_string()))?;

        if !status.is_success() {
            return Err(DataError::Http(format!("status {}: {}", status, text)));
        }

        serde_json::from_str(&text).map_err(|err| DataError::Parse(err.to_string()))
    }
}

#[async_trait]
impl PreviewSource for DataClient {
    async fn next_upcoming_event(&self) -> Result<Option<Event>, DataError> {
        let mut url = self.table_url("events")?;
        let now = Utc::now().format("%Y-%m-%dT%H:%M:%S").to_string();
        url.query_pairs_mut()
            .append_pair("select", "title,description,date,location")
            .append_pair("date", &format!("gte.{now}"))
            .append_pair("order", "date.asc")
            .append_pair("limit", "1");

        let mut rows: Vec<Event> = self.fetch_rows(url).await?;
        Ok(rows.pop())
    }

    async fn featured_post(&self) -> Result<Option<Post>, DataError> {
        let mut url = self.table_url("posts")?;
        url.query_pairs_mut()
            .append_pair("select", "slug,title,excerpt,image_url,tag,read_time")
            .append_pair("featured", "eq.true")
            .append_pair("limit", "1");

        let mut rows: Vec<Post> = self.fetch_rows(url).await?;
        Ok(rows.pop())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_url_tolerates_trailing_slash() {
        let client = DataClient::new("https://data.example.com/rest/v1/", None);
        let url = client.table_url("events").unwrap();
        assert_eq!(url.as_str(), "https://data.example.com/rest/v1/events");
    }

    #[test]
    fn event_rows_deserialize() {
        let body = r#"[{
            "title": "Open Studio Night",
            "description": "Monthly open studio.",
            "date": "2026-02-20T18:00:00",
            "location": "Studio 4"
        }]"#;
        let mut rows: Vec<Event> = serde_json::from_str(body).unwrap();
        let event = rows.pop().unwrap();
        assert_eq!(event.title, "Open Studio Night");
        assert_eq!(event.date, "2026-02-20T18:00:00");
    }

    #[test]
    fn empty_row_set_maps_to_none() {
        let rows: Vec<Post> = serde_json::from_str("[]").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn post_rows_accept_null_image() {
        let body = r#"[{
            "slug": "color-theory-basics",
            "title": "Color Theory Basics",
            "excerpt": "Start with the wheel.",
            "image_url": null,
            "tag": "Fundamentals",
            "read_time": "4 min read"
        }]"#;
        let mut rows: Vec<Post> = serde_json::from_str(body).unwrap();
        let post = rows.pop().unwrap();
        assert!(post.image_url.is_none());
        assert_eq!(post.href(), "/learn/color-theory-basics");
    }
}
