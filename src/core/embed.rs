use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Metadata describing one piece of embeddable content.
///
/// The named fields follow the oEmbed response shape; anything else a
/// provider returns is kept verbatim in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Embed {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl Embed {
    /// True when the record carries no metadata at all. An empty embed is
    /// treated the same as no result by the fetch pipeline.
    pub fn is_empty(&self) -> bool {
        self.kind.is_none()
            && self.version.is_none()
            && self.title.is_none()
            && self.description.is_none()
            && self.author_name.is_none()
            && self.author_url.is_none()
            && self.provider_name.is_none()
            && self.provider_url.is_none()
            && self.thumbnail_url.is_none()
            && self.thumbnail_width.is_none()
            && self.thumbnail_height.is_none()
            && self.width.is_none()
            && self.height.is_none()
            && self.html.is_none()
            && self.url.is_none()
            && self.extra.is_empty()
    }
}
