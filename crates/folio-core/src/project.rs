//! Project records as published in `projects.json`.

use serde::{Deserialize, Deserializer};

/// One portfolio item.
///
/// Field names follow the JSON document (`githubUrl`, `liveUrl`). Only `tech`
/// is required. Missing text fields read as empty, and a missing or `null`
/// `featured` reads as `false`. Unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub image: String,
    /// Technology labels, in display order.
    pub tech: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_false")]
    pub featured: bool,
}

fn null_as_false<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

impl ProjectRecord {
    /// GitHub link, if one is set and non-empty.
    #[must_use]
    pub fn github_link(&self) -> Option<&str> {
        non_empty(self.github_url.as_deref())
    }

    /// Live demo link, if one is set and non-empty.
    #[must_use]
    pub fn live_link(&self) -> Option<&str> {
        non_empty(self.live_url.as_deref())
    }

    /// Lowercased search text: title, summary and every tech label joined
    /// with single spaces.
    #[must_use]
    pub fn haystack(&self) -> String {
        let mut hay = String::with_capacity(self.title.len() + self.summary.len() + 1);
        hay.push_str(&self.title);
        hay.push(' ');
        hay.push_str(&self.summary);
        for tech in &self.tech {
            hay.push(' ');
            hay.push_str(tech);
        }
        hay.to_lowercase()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
pub(crate) fn sample(title: &str, featured: bool) -> ProjectRecord {
    ProjectRecord {
        title: title.to_string(),
        summary: format!("{title} summary"),
        image: format!("img/{}.png", title.to_lowercase()),
        tech: vec!["Rust".to_string(), "WASM".to_string()],
        github_url: None,
        live_url: None,
        featured,
    }
}
