// SPDX-License-Identifier: MPL-2.0
//! Astronomy Picture of the Day.

use super::Client;
use crate::error::Result;
use serde::Deserialize;

/// Fields of the APOD response that the viewer reads.
#[derive(Debug, Clone, Deserialize)]
pub struct ApodResponse {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub explanation: String,
    #[serde(default)]
    pub date: String,
    pub url: Option<String>,
    pub media_type: Option<String>,
}

/// What the entry links to. APOD occasionally publishes videos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Other,
}

impl MediaKind {
    fn parse(raw: Option<&str>) -> Self {
        match raw {
            None | Some("image") => MediaKind::Image,
            Some("video") => MediaKind::Video,
            Some(_) => MediaKind::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Apod {
    pub title: String,
    pub explanation: String,
    pub date: String,
    pub url: Option<String>,
    pub media: MediaKind,
}

impl Apod {
    /// Address of the picture, if the entry is a picture at all.
    #[must_use]
    pub fn image_url(&self) -> Option<&str> {
        match self.media {
            MediaKind::Image => self.url.as_deref().filter(|url| !url.is_empty()),
            MediaKind::Video | MediaKind::Other => None,
        }
    }
}

impl From<ApodResponse> for Apod {
    fn from(raw: ApodResponse) -> Self {
        Self {
            media: MediaKind::parse(raw.media_type.as_deref()),
            title: raw.title,
            explanation: raw.explanation,
            date: raw.date,
            url: raw.url,
        }
    }
}

pub async fn fetch(client: &Client) -> Result<Apod> {
    let url = client.settings().apod_url.clone();
    let raw: ApodResponse = client
        .get_json(&url, &[("api_key", client.api_key())])
        .await?;
    Ok(Apod::from(raw))
}
