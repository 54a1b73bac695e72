use dioxus::prelude::*;

use futures_util::future::LocalBoxFuture;
use reqwest::{header::ACCEPT, StatusCode};

use crate::utils::{log_error, CCStr, CheapClone, EqCheapClone};

use super::{
    config::{ApplicationConfig, APPLICATION_CONFIG},
    fetch_error::FetchError,
    resource::OutputResource,
};

/// Source of the output definition displayed by the GUI
///
/// `get` settles exactly once, the caller does not retry.
pub trait Fetcher {
    fn get(&self) -> LocalBoxFuture<'static, Result<OutputResource, FetchError>>;
}

/// Fetches the output definition from a feedpushr server
pub struct HttpFetcher {
    client: reqwest::Client,
    url: Result<url::Url, CCStr>,
}
impl HttpFetcher {
    pub fn from_config(config: &ApplicationConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: config
                .resource_url()
                .map_err(|e| CCStr::from(log_error(e))),
        }
    }
}
impl Fetcher for HttpFetcher {
    fn get(&self) -> LocalBoxFuture<'static, Result<OutputResource, FetchError>> {
        let request = self.url.clone().map(|url| {
            log::debug!("GET {url}");
            self.client
                .get(url)
                .header(ACCEPT, "application/json")
        });
        Box::pin(async move {
            let request = request.map_err(FetchError::Message)?;
            let response = request.send().await.map_err(FetchError::transport)?;
            let status = response.status();
            let body = response.bytes().await.map_err(FetchError::transport)?;
            decode_response(status, &body)
        })
    }
}

fn decode_response(status: StatusCode, body: &[u8]) -> Result<OutputResource, FetchError> {
    if status.is_success() {
        return serde_json::from_slice(body)
            .map_err(|e| FetchError::Message(CCStr::from(format!("malformed response: {e}"))));
    }
    log::warn!("output API answered {status}");
    match serde_json::from_slice(body) {
        Ok(payload) => Err(FetchError::from_payload(payload)),
        Err(_) => {
            let text = String::from_utf8_lossy(body);
            let text = text.trim();
            Err(FetchError::Message(CCStr::from(if text.is_empty() {
                status.to_string()
            } else {
                format!("{status}: {text}")
            })))
        }
    }
}

/// Handle on the [Fetcher] shared through the component context
#[derive(Clone, PartialEq)]
pub struct OutputApi(EqCheapClone<dyn Fetcher>);
impl OutputApi {
    pub fn new(fetcher: impl Fetcher + 'static) -> Self {
        let fetcher: CheapClone<dyn Fetcher> = CheapClone::new(fetcher);
        Self(EqCheapClone::from(fetcher))
    }

    pub fn get(&self) -> LocalBoxFuture<'static, Result<OutputResource, FetchError>> {
        self.0.get()
    }
}

pub(super) fn use_output_api_service() -> OutputApi {
    use_context_provider(|| {
        log::info!("output_api_service - start");
        OutputApi::new(HttpFetcher::from_config(&APPLICATION_CONFIG.peek()))
    })
}
