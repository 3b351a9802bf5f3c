// SPDX-License-Identifier: MPL-2.0
//! Mars Rover photos. Only the first photo of the requested sol is shown.

use super::{join_url, Client};
use crate::error::{Error, Result};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct PhotosResponse {
    #[serde(default)]
    pub photos: Vec<RawPhoto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPhoto {
    pub img_src: Option<String>,
    #[serde(default)]
    pub earth_date: String,
    pub rover: Option<RawRover>,
    pub camera: Option<RawCamera>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawRover {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawCamera {
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarsPhoto {
    pub image_url: String,
    pub rover_name: Option<String>,
    pub camera_name: Option<String>,
    pub earth_date: String,
}

/// Picks the first photo, or reports that the sol had none.
///
/// Later entries are never inspected, so a malformed one cannot fail the feed.
pub fn first_photo(response: PhotosResponse, sol: u32) -> Result<MarsPhoto> {
    let photo = response
        .photos
        .into_iter()
        .next()
        .ok_or_else(|| Error::Empty(format!("no photos returned for sol {sol}")))?;
    let image_url = photo
        .img_src
        .filter(|src| !src.is_empty())
        .ok_or_else(|| Error::Empty(format!("first photo for sol {sol} has no image")))?;

    Ok(MarsPhoto {
        image_url,
        rover_name: photo.rover.and_then(|rover| rover.name),
        camera_name: photo.camera.and_then(|camera| camera.full_name),
        earth_date: photo.earth_date,
    })
}

pub async fn fetch(client: &Client) -> Result<MarsPhoto> {
    let settings = client.settings();
    let url = join_url(
        &settings.mars_url,
        &format!("rovers/{}/photos", settings.rover),
    );
    let sol = settings.sol;
    let sol_param = sol.to_string();

    let response: PhotosResponse = client
        .get_json(&url, &[("sol", sol_param.as_str()), ("api_key", client.api_key())])
        .await?;
    first_photo(response, sol)
}
