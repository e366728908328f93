use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{first_issue, require_text, ValidationIssue};
use crate::error::FarmError;

/// What a partner organisation does for the farms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PartnerKind {
    Distributor,
    Cooperative,
    Logistics,
    Financial,
    Technology,
}

impl std::fmt::Display for PartnerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PartnerKind::Distributor => write!(f, "Distributor"),
            PartnerKind::Cooperative => write!(f, "Cooperative"),
            PartnerKind::Logistics => write!(f, "Logistics"),
            PartnerKind::Financial => write!(f, "Financial"),
            PartnerKind::Technology => write!(f, "Technology"),
        }
    }
}

impl std::str::FromStr for PartnerKind {
    type Err = FarmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "distributor" => Ok(PartnerKind::Distributor),
            "cooperative" | "coop" => Ok(PartnerKind::Cooperative),
            "logistics" => Ok(PartnerKind::Logistics),
            "financial" | "finance" => Ok(PartnerKind::Financial),
            "technology" | "tech" => Ok(PartnerKind::Technology),
            _ => Err(FarmError::ParseError(format!("Unknown partner kind: '{s}'"))),
        }
    }
}

/// An organisation listed on the partners page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partner {
    pub id: Uuid,
    pub name: String,
    pub kind: PartnerKind,
    pub country: String,
    pub website: Option<String>,
    pub contact_email: Option<String>,
    #[serde(default)]
    pub description: String,
}

impl Partner {
    pub fn new(name: impl Into<String>, kind: PartnerKind, country: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            country: country.into(),
            website: None,
            contact_email: None,
            description: String::new(),
        }
    }

    pub fn validate(&self) -> Result<(), FarmError> {
        first_issue(&format!("Partner '{}'", self.name), self.validate_all())
    }

    pub fn validate_all(&self) -> Vec<ValidationIssue> {
        let mut issues = Vec::new();
        require_text(&mut issues, "name", &self.name);
        require_text(&mut issues, "country", &self.country);

        if let Some(url) = &self.website {
            if !is_web_url(url) {
                issues.push(ValidationIssue::new(
                    "website",
                    format!("website must start with http:// or https://, got '{url}'"),
                ));
            }
        }
        if let Some(email) = &self.contact_email {
            if !is_email(email) {
                issues.push(ValidationIssue::new(
                    "contact_email",
                    format!("'{email}' is not an email address"),
                ));
            }
        }
        issues
    }
}

fn is_web_url(url: &str) -> bool {
    let rest = url
        .strip_prefix("https://")
        .or_else(|| url.strip_prefix("http://"));
    matches!(rest, Some(host) if !host.is_empty())
}

fn is_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}
