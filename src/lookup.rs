use serde::Deserialize;
use thiserror::Error;

pub const ROR_ID_PREFIX: &str = "https://ror.org/";
/// Particle text shown when the lookup has no chosen organization.
pub const NO_MATCH_TEXT: &str = "?";

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("malformed lookup response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Body of an affiliation query against the organization registry.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SearchItem {
    #[serde(default)]
    pub chosen: bool,
    pub organization: Organization,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub country: Option<Country>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Country {
    pub country_name: String,
}

impl Organization {
    /// Registry id without the URL prefix, e.g. `02mhbdp94`.
    pub fn short_id(&self) -> &str {
        self.id.strip_prefix(ROR_ID_PREFIX).unwrap_or(&self.id)
    }
}

#[derive(Clone, Debug)]
pub enum LookupOutcome {
    Match(Organization),
    NoMatch,
}

impl LookupOutcome {
    pub fn from_json(body: &str) -> Result<Self, LookupError> {
        let response: SearchResponse = serde_json::from_str(body)?;
        Ok(Self::from_response(response))
    }

    /// Only an item the registry marked as chosen counts as a match.
    pub fn from_response(response: SearchResponse) -> Self {
        response
            .items
            .into_iter()
            .find(|item| item.chosen)
            .map(|item| LookupOutcome::Match(item.organization))
            .unwrap_or(LookupOutcome::NoMatch)
    }

    pub fn is_match(&self) -> bool {
        matches!(self, LookupOutcome::Match(_))
    }

    pub fn particle_text(&self) -> &str {
        match self {
            LookupOutcome::Match(org) => org.short_id(),
            LookupOutcome::NoMatch => NO_MATCH_TEXT,
        }
    }

    pub fn result_html(&self) -> String {
        match self {
            LookupOutcome::Match(org) => {
                let location = org
                    .country
                    .as_ref()
                    .map(|c| c.country_name.as_str())
                    .unwrap_or("Unknown");
                format!(
                    "<div style=\"margin-bottom: 10px;\">Found matching organization:</div>\
                     <div style=\"color: #0066cc;\">Name: {name}</div>\
                     <div style=\"margin-top: 5px;\">ROR ID: <a href=\"{id}\">{id}</a></div>\
                     <div style=\"margin-top: 5px;\">Location: {location}</div>",
                    name = escape_html(&org.name),
                    id = escape_html(&org.id),
                    location = escape_html(location),
                )
            }
            LookupOutcome::NoMatch => {
                "<div style=\"color: #ff0000;\">No matching organizations found.</div>".to_owned()
            }
        }
    }
}

pub fn error_html(message: &str) -> String {
    format!(
        "<div style=\"color: #ff0000;\">Error searching for organization: {}</div>",
        escape_html(message)
    )
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
