use serde::{Deserialize, Serialize};

/// A single news item recovered from a search model completion.
///
/// All fields except `title` may be empty when the completion did not
/// carry them. `date` stays free-form text; it is never normalized to a
/// calendar type. `url` has its query string stripped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub url: String,
    pub date: String,
    pub source: String,
    pub snippet: String,
}

/// The government tier a representative's office belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GovernmentLevel {
    Federal,
    State,
    County,
    Local,
    Other,
}

impl GovernmentLevel {
    pub const ALL: [GovernmentLevel; 5] = [
        GovernmentLevel::Federal,
        GovernmentLevel::State,
        GovernmentLevel::County,
        GovernmentLevel::Local,
        GovernmentLevel::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GovernmentLevel::Federal => "federal",
            GovernmentLevel::State => "state",
            GovernmentLevel::County => "county",
            GovernmentLevel::Local => "local",
            GovernmentLevel::Other => "other",
        }
    }
}

/// An elected official holding a specific office.
///
/// `level` is derived purely from `(division_id, office)`; the same pair
/// always classifies to the same tier.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Representative {
    pub name: String,
    pub office: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub phones: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub urls: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub emails: Vec<String>,
    pub level: GovernmentLevel,
    pub division_id: String,
}

/// A civic street address as submitted by the lookup form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
}

impl Address {
    /// Single-line form expected by the civic data service.
    pub fn formatted(&self) -> String {
        format!("{}, {}, {} {}", self.street, self.city, self.state, self.zip_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_serializes_lowercase() {
        let json = serde_json::to_string(&GovernmentLevel::Federal).unwrap();
        assert_eq!(json, r#""federal""#);
    }

    #[test]
    fn test_representative_wire_shape() {
        let rep = Representative {
            name: "Jane Doe".to_string(),
            office: "Governor".to_string(),
            party: None,
            phones: vec![],
            urls: vec![],
            emails: vec![],
            level: GovernmentLevel::State,
            division_id: "ocd-division/country:us/state:ca".to_string(),
        };
        let json = serde_json::to_value(&rep).unwrap();
        assert_eq!(json["level"], "state");
        assert_eq!(json["divisionId"], "ocd-division/country:us/state:ca");
        assert!(json.get("party").is_none());
    }

    #[test]
    fn test_address_formatting() {
        let address = Address {
            street: "1600 Pennsylvania Ave NW".to_string(),
            city: "Washington".to_string(),
            state: "DC".to_string(),
            zip_code: "20500".to_string(),
        };
        assert_eq!(
            address.formatted(),
            "1600 Pennsylvania Ave NW, Washington, DC 20500"
        );
    }
}
