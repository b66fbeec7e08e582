//! VIAF record client.
//!
//! Fetches a VIAF cluster record by content negotiation: one GET of
//! `<base_url>/<id>` with `Accept: application/rdf+xml`. Redirects are
//! followed; there are no retries.

use reqwest::header::ACCEPT;
use reqwest::Client;

use persnamer_core::ViafId;

use crate::config::Config;
use crate::error::{LookupError, LookupResult};

/// Media type requested from VIAF.
pub const RDF_XML: &str = "application/rdf+xml";

/// VIAF HTTP client.
#[derive(Debug, Clone)]
pub struct ViafClient {
    http: Client,
    base_url: String,
}

impl ViafClient {
    /// Create a new VIAF client from configuration.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: &Config) -> LookupResult<Self> {
        let http = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout())
            .build()
            .map_err(LookupError::Client)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// The URL the record for `id` is fetched from.
    pub fn record_url(&self, id: &ViafId) -> String {
        format!("{}/{}", self.base_url, id)
    }

    /// Fetch the raw RDF/XML record for `id`.
    ///
    /// # Errors
    /// Returns [`LookupError::Network`] when no response arrives and
    /// [`LookupError::Http`] when the response status is not a success.
    /// The body of an unsuccessful response is never read.
    pub async fn fetch(&self, id: &ViafId) -> LookupResult<Vec<u8>> {
        let url = self.record_url(id);
        log::info!("Fetching data from URL: {}", url);

        let response = self
            .http
            .get(&url)
            .header(ACCEPT, RDF_XML)
            .send()
            .await
            .map_err(|source| LookupError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Http {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| LookupError::Network { url, source })?;

        log::info!("Successfully fetched VIAF RDF data ({} bytes)", body.len());
        Ok(body.to_vec())
    }
}
