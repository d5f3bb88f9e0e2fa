use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

use crate::apis::call_builder::make_call;

pub const NEWSAPI_URL: &str = "https://newsapi.org";

// The everything endpoint rejects page sizes above this
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct News {
    pub status: String,
    pub total_results: u32,
    pub articles: Vec<NewsItem>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsItem {
    pub source: NewsSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(deserialize_with = "no_title")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url_to_image: Option<String>,
    pub published_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

fn no_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::de::Deserializer<'de>,
{
    match serde::de::Deserialize::deserialize(deserializer) {
        Ok(v) => Ok(v),
        Err(_) => Ok("No Title".to_string()),
    }
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsSource {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<SourceId>,
    pub name: String,
}

// Source ids arrive as null, a string slug or occasionally a bare number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SourceId {
    Text(String),
    Number(i64),
}

#[derive(Error, Debug)]
pub enum NewsApiError {
    #[error("news api request failed: {0}")]
    Transport(#[from] reqwest::Error),
    // Carries the raw upstream response body
    #[error("{0}")]
    Api(String),
    #[error("malformed news api response: {0}")]
    Decoding(#[from] serde_json::Error),
}

// Client working with the news API
#[derive(Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    key: String,
    page_size: u32,
    base_url: String,
}

impl NewsClient {
    pub fn new(http: reqwest::Client, key: &str, page_size: u32) -> Self {
        let page_size = page_size.min(MAX_PAGE_SIZE);

        NewsClient { http, key: key.into(), page_size, base_url: NEWSAPI_URL.into() }
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    pub async fn fetch_everything(&self, query: &str, page: u32) -> Result<News, NewsApiError> {
        let page = page.to_string();
        let page_size = self.page_size.to_string();
        let paras = [
            ("q", query),
            ("pageSize", page_size.as_str()),
            ("page", page.as_str()),
            ("apiKey", self.key.as_str()),
            ("sortBy", "publishedAt"),
            ("language", "en"),
        ];

        let call = make_call(&format!("{}/v2/everything", self.base_url), &paras);

        // Make the GET request to the news source
        let resp = self.http.get(&call).send().await?;
        let status = resp.status();

        // Read the response body as a string
        let body = resp.text().await?;

        if !status.is_success() {
            return Err(NewsApiError::Api(body));
        }

        let news: News = serde_json::from_str(&body)?;

        Ok(news)
    }
}
