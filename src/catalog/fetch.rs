// Browser `fetch` implementation of the chapter-list Fetcher.
use async_trait::async_trait;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Response, window};

use super::{CatalogConfig, CatalogError, Chapter, Fetcher, parse_chapters};

/// One GET of `{api_base_url}/chapters`. No timeout, no retry.
pub struct HttpFetcher {
    url: String,
}

impl HttpFetcher {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            url: config.chapters_url(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

fn network(err: JsValue) -> CatalogError {
    CatalogError::Network(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

#[async_trait(?Send)]
impl Fetcher for HttpFetcher {
    async fn fetch_chapters(&self) -> Result<Vec<Chapter>, CatalogError> {
        let win = window().ok_or_else(|| CatalogError::Network("no window".into()))?;
        let value = JsFuture::from(win.fetch_with_str(&self.url)).await.map_err(network)?;
        let response: Response = value.dyn_into().map_err(network)?;
        if !response.ok() {
            return Err(CatalogError::Status(response.status()));
        }
        let text = JsFuture::from(response.text().map_err(network)?).await.map_err(network)?;
        let body = text
            .as_string()
            .ok_or_else(|| CatalogError::Malformed("response body is not text".into()))?;
        parse_chapters(&body)
    }
}
