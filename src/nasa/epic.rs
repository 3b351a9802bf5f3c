// SPDX-License-Identifier: MPL-2.0
//! DSCOVR EPIC natural-color Earth images.
//!
//! The listing endpoint returns the most recent day's captures in
//! chronological order. The display image lives in a separate archive whose
//! path encodes the capture date: `{archive}/{YYYY}/{MM}/{DD}/png/{image}.png`.

use super::{join_url, Client};
use crate::error::{Error, Result};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct RawEpicImage {
    pub image: String,
    #[serde(default)]
    pub caption: String,
    /// `"YYYY-MM-DD hh:mm:ss"`
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EpicImage {
    pub image_url: String,
    pub caption: String,
    pub date: String,
}

/// Builds the archive address for an image captured at `date`.
///
/// Only the calendar part of `date` is used; month and day are zero-padded.
pub fn archive_url(archive_base: &str, date: &str, image: &str) -> Result<String> {
    let day = date.split_whitespace().next().unwrap_or_default();
    let parsed = NaiveDate::parse_from_str(day, "%Y-%m-%d")
        .map_err(|err| Error::Decode(format!("unexpected EPIC date {date:?}: {err}")))?;

    Ok(join_url(
        archive_base,
        &format!("{}/png/{image}.png", parsed.format("%Y/%m/%d")),
    ))
}

/// Turns the listing into the display payload of its last (latest) entry.
pub fn latest(images: Vec<RawEpicImage>, archive_base: &str) -> Result<EpicImage> {
    let latest = images
        .into_iter()
        .last()
        .ok_or_else(|| Error::Empty("no EPIC images returned".to_string()))?;

    Ok(EpicImage {
        image_url: archive_url(archive_base, &latest.date, &latest.image)?,
        caption: latest.caption,
        date: latest.date,
    })
}

pub async fn fetch(client: &Client) -> Result<EpicImage> {
    let settings = client.settings();
    let url = join_url(&settings.epic_url, "natural/images");

    let images: Vec<RawEpicImage> = client
        .get_json(&url, &[("api_key", client.api_key())])
        .await?;
    latest(images, &settings.epic_archive_url)
}
