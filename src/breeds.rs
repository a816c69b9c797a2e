//! Dog-breed records and the remote API client.
//!
//! One endpoint, one operation: `GET {base}/breeds?limit={n}` against
//! [TheDogAPI](https://thedogapi.com/). Every failure mode is converted into a
//! [`QueryError`] so the query cache can record it; nothing here panics or
//! throws past the caller.

use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::query::QueryError;

/// One dog breed as returned by the remote endpoint.
///
/// Immutable once received. The endpoint sends more fields than these; the
/// extras are ignored on decode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Breed {
    pub id: String,
    pub name: String,
    pub image: BreedImage,
}

/// Picture reference for a breed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BreedImage {
    pub url: String,
}

/// HTTP client for the breeds endpoint.
///
/// Cheap to clone; the underlying `reqwest` client is reference-counted.
#[derive(Debug, Clone)]
pub struct BreedsApi {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl BreedsApi {
    /// Builds a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetches up to `limit` breed records.
    ///
    /// Attaches the `x-api-key` header when a key is configured; without one
    /// the request goes out unauthenticated and any rejection by the remote
    /// service comes back as [`QueryError::Http`].
    pub async fn breeds(&self, limit: u32) -> Result<Vec<Breed>, QueryError> {
        let mut request = self
            .http
            .get(format!("{}/breeds", self.base_url))
            .query(&[("limit", limit)]);
        if let Some(key) = &self.api_key {
            request = request.header("x-api-key", key);
        }

        let response = request
            .send()
            .await
            .map_err(|err| QueryError::Network(err.to_string()))?;

        let status = response.status();
        debug!(limit, status = status.as_u16(), "breeds request completed");
        if !status.is_success() {
            return Err(QueryError::Http(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| QueryError::Network(err.to_string()))?;
        serde_json::from_slice(&body).map_err(|err| QueryError::MalformedResponse(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breed_decodes_required_fields() {
        let json = r#"
            {
                "id": "abys",
                "name": "Abyssinian",
                "image": { "url": "https://cdn2.thedogapi.com/images/abys.jpg" }
            }
        "#;

        let breed: Breed = serde_json::from_str(json).expect("valid breed json");
        assert_eq!(breed.id, "abys");
        assert_eq!(breed.name, "Abyssinian");
        assert_eq!(breed.image.url, "https://cdn2.thedogapi.com/images/abys.jpg");
    }

    #[test]
    fn test_breed_ignores_extra_fields() {
        let json = r#"
            {
                "id": "akit",
                "name": "Akita",
                "temperament": "Docile, Alert",
                "life_span": "10 - 14 years",
                "image": { "url": "https://cdn2.thedogapi.com/images/akit.jpg", "width": 640 }
            }
        "#;

        let breed: Breed = serde_json::from_str(json).expect("extra fields should be ignored");
        assert_eq!(breed.name, "Akita");
    }

    #[test]
    fn test_breed_array_rejects_wrong_shape() {
        // An object where an array of records is expected.
        let result = serde_json::from_str::<Vec<Breed>>(r#"{"message": "rate limited"}"#);
        assert!(result.is_err());

        // Records missing required fields.
        let result = serde_json::from_str::<Vec<Breed>>(r#"[{"id": "abys"}]"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_api_construction_from_config() {
        let config = Config::default().with_api_key("secret");
        let api = BreedsApi::new(&config).expect("client should build");
        assert_eq!(api.base_url, crate::config::DEFAULT_BASE_URL);
        assert_eq!(api.api_key.as_deref(), Some("secret"));
    }
}
