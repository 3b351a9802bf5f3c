// SPDX-License-Identifier: MPL-2.0
//! Static GIBS satellite tile. There is nothing to fetch: the address is a
//! fixed WMTS tile.

use crate::config::NasaConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticTile {
    pub image_url: String,
}

#[must_use]
pub fn static_tile(settings: &NasaConfig) -> StaticTile {
    StaticTile {
        image_url: settings.static_tile_url.clone(),
    }
}
