use reqwest::Response;
use serde::Deserialize;

use crate::client::ClientError;
use crate::domain::property::Property;

/// The filter state held by the listing view. All fields are plain strings
/// mirroring the form inputs; an empty string means "unset".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilters {
    pub search: String,
    pub listing_type: String,
    pub min_price: String,
    pub max_price: String,
    pub bedrooms: String,
}

impl ListingFilters {
    /// Serializes only non-empty fields; empty strings are never sent as
    /// query parameters, so the server cannot mistake "" for a constraint.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        let mut push = |key, value: &str| {
            let value = value.trim();
            if !value.is_empty() {
                pairs.push((key, value.to_string()));
            }
        };
        push("search", &self.search);
        push("type", &self.listing_type);
        push("minPrice", &self.min_price);
        push("maxPrice", &self.max_price);
        push("bedrooms", &self.bedrooms);
        pairs
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Extracts the server's error message from a non-success response, falling
/// back to the HTTP status when the body carries no `message` field.
pub(crate) async fn error_from_response(response: Response) -> ClientError {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => ClientError::new(body.message),
        Err(_) => ClientError::new(format!("Request failed with status {status}")),
    }
}

/// Thin HTTP wrapper for the properties endpoints.
#[derive(Debug, Clone)]
pub struct PropertyClient {
    base_url: String,
    http: reqwest::Client,
}

impl PropertyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub async fn get_properties(
        &self,
        filters: &ListingFilters,
    ) -> Result<Vec<Property>, ClientError> {
        let mut request = self.http.get(format!("{}/api/properties", self.base_url));
        let pairs = filters.query_pairs();
        if !pairs.is_empty() {
            request = request.query(&pairs);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        Ok(response.json::<Vec<Property>>().await?)
    }

    pub async fn get_property(&self, id: &str) -> Result<Property, ClientError> {
        let response = self
            .http
            .get(format!("{}/api/properties/{id}", self.base_url))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(response.json::<Property>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_never_serialized() {
        let filters = ListingFilters::default();
        assert!(filters.query_pairs().is_empty());

        let filters = ListingFilters {
            search: "delhi".to_string(),
            min_price: "  ".to_string(),
            bedrooms: "3".to_string(),
            ..ListingFilters::default()
        };
        let pairs = filters.query_pairs();
        assert_eq!(
            pairs,
            vec![
                ("search", "delhi".to_string()),
                ("bedrooms", "3".to_string())
            ]
        );
    }

    #[test]
    fn clear_resets_to_all_empty() {
        let mut filters = ListingFilters {
            search: "pune".to_string(),
            listing_type: "sale".to_string(),
            ..ListingFilters::default()
        };
        filters.clear();
        assert_eq!(filters, ListingFilters::default());
    }
}
