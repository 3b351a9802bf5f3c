// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **NASA**: API key, query parameters and request timeout
//! - **Endpoints**: Production base URLs of the NASA services
//! - **Display**: Remote image cache sizing
//! - **Logging**: Default log level

// ==========================================================================
// NASA Defaults
// ==========================================================================

/// Shared demonstration key accepted by api.nasa.gov (heavily rate limited).
pub const DEFAULT_API_KEY: &str = "DEMO_KEY";

/// Rover whose photos are shown in the Mars section.
pub const DEFAULT_ROVER: &str = "curiosity";

/// Martian sol queried for rover photos.
pub const DEFAULT_SOL: u32 = 1000;

/// Search text sent to the NASA Image and Video Library.
pub const DEFAULT_LIBRARY_QUERY: &str = "Earth";

/// Media type filter for the library search.
pub const DEFAULT_LIBRARY_MEDIA_TYPE: &str = "image";

/// Number of library results considered for the grid. Also the upper bound
/// accepted from the settings file.
pub const DEFAULT_LIBRARY_LIMIT: usize = 6;

/// Smallest accepted library limit.
pub const MIN_LIBRARY_LIMIT: usize = 1;

/// Per-request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Minimum per-request timeout in seconds.
pub const MIN_REQUEST_TIMEOUT_SECS: u64 = 1;

/// Maximum per-request timeout in seconds.
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Endpoint Defaults
// ==========================================================================

pub const DEFAULT_APOD_URL: &str = "https://api.nasa.gov/planetary/apod";
pub const DEFAULT_MARS_URL: &str = "https://api.nasa.gov/mars-photos/api/v1";
pub const DEFAULT_EPIC_URL: &str = "https://api.nasa.gov/EPIC/api";
pub const DEFAULT_EPIC_ARCHIVE_URL: &str = "https://epic.gsfc.nasa.gov/archive/natural";
pub const DEFAULT_LIBRARY_URL: &str = "https://images-api.nasa.gov";

/// GIBS Blue Marble shaded relief, zoom level 0 tile.
pub const DEFAULT_STATIC_TILE_URL: &str = "https://gibs.earthdata.nasa.gov/wmts/epsg3857/best/BlueMarble_ShadedRelief/default/GoogleMapsCompatible_Level9/0/0/0.jpg";

// ==========================================================================
// Display Defaults
// ==========================================================================

/// Number of decoded remote images kept in memory.
pub const DEFAULT_IMAGE_CACHE_ENTRIES: usize = 64;

/// Smallest allowed image cache.
pub const MIN_IMAGE_CACHE_ENTRIES: usize = 16;

// ==========================================================================
// Logging Defaults
// ==========================================================================

pub const DEFAULT_LOG_LEVEL: &str = "info";
