//! Client for the Google Civic Information representatives endpoint.

use std::sync::Arc;

use reqwest::Client;
use serde::Deserialize;
use url::Url;

use civ_core::{Address, Error, Representative, Result};
use civ_extract::classify_division;

const CIVIC_API_URL: &str = "https://www.googleapis.com/civicinfo/v2/representatives";

// Administrative levels requested from the API, broadest first.
const LEVELS: [&str; 4] = [
    "country",
    "administrativeArea1",
    "administrativeArea2",
    "locality",
];

#[derive(Debug, Deserialize)]
struct RepresentativesPayload {
    #[serde(default)]
    offices: Vec<Office>,
    #[serde(default)]
    officials: Vec<Official>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Office {
    name: String,
    division_id: String,
    #[serde(default)]
    official_indices: Vec<usize>,
}

#[derive(Debug, Deserialize)]
struct Official {
    name: String,
    party: Option<String>,
    #[serde(default)]
    phones: Vec<String>,
    #[serde(default)]
    urls: Vec<String>,
    #[serde(default)]
    emails: Vec<String>,
}

#[derive(Debug)]
pub struct CivicClient {
    client: Arc<Client>,
    api_key: String,
}

impl CivicClient {
    pub fn new(api_key: Option<String>) -> Result<Self> {
        let api_key = api_key.ok_or(Error::MissingApiKey("GOOGLE_API_KEY"))?;
        Ok(Self {
            client: Arc::new(Client::new()),
            api_key,
        })
    }

    fn request_url(&self, address: &str) -> Result<Url> {
        let mut url = Url::parse(CIVIC_API_URL)
            .map_err(|e| Error::Civic(format!("invalid endpoint: {}", e)))?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("key", &self.api_key);
            pairs.append_pair("address", address);
            for level in LEVELS {
                pairs.append_pair("levels", level);
            }
        }
        Ok(url)
    }

    /// Resolves a street address to its elected officials, one record per
    /// office/official pair, classified into government tiers.
    pub async fn lookup(&self, address: &Address) -> Result<Vec<Representative>> {
        let formatted = address.formatted();
        tracing::debug!("looking up representatives for {:?}", formatted);
        let url = self.request_url(&formatted)?;

        let response = self
            .client
            .get(url.as_str())
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            // The API reports failures as { "error": { "message": ... } }.
            let detail = response
                .json::<serde_json::Value>()
                .await
                .ok()
                .and_then(|body| {
                    body.pointer("/error/message")
                        .and_then(|m| m.as_str())
                        .map(str::to_string)
                })
                .unwrap_or_else(|| status.to_string());
            return Err(Error::Civic(detail));
        }

        let payload = response.json::<RepresentativesPayload>().await?;
        let representatives = compose_representatives(payload);
        tracing::info!("resolved {} officials for {:?}", representatives.len(), formatted);
        Ok(representatives)
    }
}

fn compose_representatives(payload: RepresentativesPayload) -> Vec<Representative> {
    let mut representatives = Vec::new();

    for office in &payload.offices {
        let level = classify_division(&office.division_id, &office.name);
        for &index in &office.official_indices {
            let Some(official) = payload.officials.get(index) else {
                tracing::warn!(
                    "office {:?} references missing official index {}",
                    office.name,
                    index
                );
                continue;
            };
            representatives.push(Representative {
                name: official.name.clone(),
                office: office.name.clone(),
                party: official.party.clone(),
                phones: official.phones.clone(),
                urls: official.urls.clone(),
                emails: official.emails.clone(),
                level,
                division_id: office.division_id.clone(),
            });
        }
    }

    representatives
}

#[cfg(test)]
mod tests {
    use super::*;
    use civ_core::GovernmentLevel;

    fn sample_payload() -> RepresentativesPayload {
        serde_json::from_value(serde_json::json!({
            "offices": [
                {
                    "name": "President of the United States",
                    "divisionId": "ocd-division/country:us",
                    "officialIndices": [0]
                },
                {
                    "name": "Governor",
                    "divisionId": "ocd-division/country:us/state:ca",
                    "officialIndices": [1]
                },
                {
                    "name": "U.S. Representative",
                    "divisionId": "ocd-division/country:us/state:ca/cd:12",
                    "officialIndices": [2, 9]
                }
            ],
            "officials": [
                { "name": "Alice Example", "party": "Independent",
                  "phones": ["(202) 555-0100"], "urls": ["https://example.gov"] },
                { "name": "Bob Example" },
                { "name": "Carol Example", "party": "Nonpartisan",
                  "emails": ["carol@example.gov"] }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn test_compose_classifies_each_office() {
        let reps = compose_representatives(sample_payload());
        assert_eq!(reps.len(), 3);
        assert_eq!(reps[0].level, GovernmentLevel::Federal);
        assert_eq!(reps[1].level, GovernmentLevel::State);
        assert_eq!(reps[2].level, GovernmentLevel::Federal);
        assert_eq!(reps[2].division_id, "ocd-division/country:us/state:ca/cd:12");
    }

    #[test]
    fn test_compose_carries_official_contact_fields() {
        let reps = compose_representatives(sample_payload());
        assert_eq!(reps[0].name, "Alice Example");
        assert_eq!(reps[0].party.as_deref(), Some("Independent"));
        assert_eq!(reps[0].phones, vec!["(202) 555-0100"]);
        assert!(reps[1].party.is_none());
        assert_eq!(reps[2].emails, vec!["carol@example.gov"]);
    }

    #[test]
    fn test_compose_skips_dangling_official_indices() {
        // Index 9 in the third office has no matching official.
        let reps = compose_representatives(sample_payload());
        assert_eq!(reps.iter().filter(|r| r.office == "U.S. Representative").count(), 1);
    }

    #[test]
    fn test_client_requires_api_key() {
        let result = CivicClient::new(None);
        assert!(result.is_err());
        assert_eq!(result.unwrap_err().to_string(), "GOOGLE_API_KEY is not set");
    }

    #[test]
    fn test_request_url_carries_address_and_levels() {
        let client = CivicClient::new(Some("test-key".to_string())).unwrap();
        let url = client.request_url("1 Main St, Springfield, IL 62701").unwrap();

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        assert!(pairs.contains(&("key".to_string(), "test-key".to_string())));
        assert!(pairs.contains(&(
            "address".to_string(),
            "1 Main St, Springfield, IL 62701".to_string()
        )));
        let levels: Vec<&str> = pairs
            .iter()
            .filter(|(k, _)| k == "levels")
            .map(|(_, v)| v.as_str())
            .collect();
        assert_eq!(
            levels,
            vec!["country", "administrativeArea1", "administrativeArea2", "locality"]
        );
    }
}
