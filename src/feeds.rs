// SPDX-License-Identifier: MPL-2.0
//! The five independent feeds shown on the page and their result slots.
//!
//! [`fan_out`] starts one task per feed with no ordering between them. Each
//! completion arrives as a [`FeedResult`] and [`Feeds::apply`] writes it into
//! the matching slot only, so one failing source never touches another.

use crate::config::NasaConfig;
use crate::error::{Error, Result};
use crate::nasa::apod::{self, Apod};
use crate::nasa::epic::{self, EpicImage};
use crate::nasa::gibs::{self, StaticTile};
use crate::nasa::library::{self, LibraryItem};
use crate::nasa::mars::{self, MarsPhoto};
use crate::nasa::Client;
use crate::slot::Slot;
use iced::Task;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Feed {
    Apod,
    Mars,
    Epic,
    Tile,
    Library,
}

impl Feed {
    pub const ALL: [Feed; 5] = [Feed::Apod, Feed::Mars, Feed::Epic, Feed::Tile, Feed::Library];

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Feed::Apod => "apod",
            Feed::Mars => "mars",
            Feed::Epic => "epic",
            Feed::Tile => "tile",
            Feed::Library => "library",
        }
    }
}

/// Outcome of one feed request.
#[derive(Debug, Clone)]
pub enum FeedResult {
    Apod(Result<Apod>),
    Mars(Result<MarsPhoto>),
    Epic(Result<EpicImage>),
    Tile(Result<StaticTile>),
    Library(Result<Vec<LibraryItem>>),
}

impl FeedResult {
    #[must_use]
    pub fn feed(&self) -> Feed {
        match self {
            FeedResult::Apod(_) => Feed::Apod,
            FeedResult::Mars(_) => Feed::Mars,
            FeedResult::Epic(_) => Feed::Epic,
            FeedResult::Tile(_) => Feed::Tile,
            FeedResult::Library(_) => Feed::Library,
        }
    }

    /// A failed outcome for `feed`.
    #[must_use]
    pub fn failed(feed: Feed, err: Error) -> Self {
        match feed {
            Feed::Apod => FeedResult::Apod(Err(err)),
            Feed::Mars => FeedResult::Mars(Err(err)),
            Feed::Epic => FeedResult::Epic(Err(err)),
            Feed::Tile => FeedResult::Tile(Err(err)),
            Feed::Library => FeedResult::Library(Err(err)),
        }
    }

    fn error(&self) -> Option<&Error> {
        match self {
            FeedResult::Apod(r) => r.as_ref().err(),
            FeedResult::Mars(r) => r.as_ref().err(),
            FeedResult::Epic(r) => r.as_ref().err(),
            FeedResult::Tile(r) => r.as_ref().err(),
            FeedResult::Library(r) => r.as_ref().err(),
        }
    }
}

/// One slot per feed. Each slot is written only by its own feed's result.
#[derive(Debug, Clone, Default)]
pub struct Feeds {
    pub apod: Slot<Apod>,
    pub mars: Slot<MarsPhoto>,
    pub epic: Slot<EpicImage>,
    pub tile: Slot<StaticTile>,
    pub library: Slot<Vec<LibraryItem>>,
}

impl Feeds {
    /// Settles the slot addressed by `result`.
    ///
    /// Returns the image addresses that became displayable, empty when the
    /// feed failed or its slot was already settled.
    pub fn apply(&mut self, result: FeedResult) -> Vec<String> {
        let feed = result.feed();
        let error = result.error().map(ToString::to_string);

        let accepted = match result {
            FeedResult::Apod(r) => self.apod.settle(r),
            FeedResult::Mars(r) => self.mars.settle(r),
            FeedResult::Epic(r) => self.epic.settle(r),
            FeedResult::Tile(r) => self.tile.settle(r),
            FeedResult::Library(r) => self.library.settle(r),
        };

        if !accepted {
            tracing::debug!(feed = feed.name(), "ignoring result for settled feed");
            return Vec::new();
        }
        match error {
            Some(error) => tracing::warn!(feed = feed.name(), %error, "feed failed"),
            None => tracing::info!(feed = feed.name(), "feed settled"),
        }
        self.image_urls(feed)
    }

    #[must_use]
    pub fn is_settled(&self, feed: Feed) -> bool {
        match feed {
            Feed::Apod => self.apod.is_settled(),
            Feed::Mars => self.mars.is_settled(),
            Feed::Epic => self.epic.is_settled(),
            Feed::Tile => self.tile.is_settled(),
            Feed::Library => self.library.is_settled(),
        }
    }

    #[must_use]
    pub fn any_pending(&self) -> bool {
        Feed::ALL.iter().any(|feed| !self.is_settled(*feed))
    }

    /// Image addresses carried by a ready slot.
    #[must_use]
    pub fn image_urls(&self, feed: Feed) -> Vec<String> {
        match feed {
            Feed::Apod => self
                .apod
                .ready()
                .and_then(Apod::image_url)
                .map(str::to_string)
                .into_iter()
                .collect(),
            Feed::Mars => self
                .mars
                .ready()
                .map(|photo| photo.image_url.clone())
                .into_iter()
                .collect(),
            Feed::Epic => self
                .epic
                .ready()
                .map(|epic| epic.image_url.clone())
                .into_iter()
                .collect(),
            Feed::Tile => self
                .tile
                .ready()
                .map(|tile| tile.image_url.clone())
                .into_iter()
                .collect(),
            Feed::Library => self
                .library
                .ready()
                .map(|items| items.iter().map(|i| i.thumbnail_url.clone()).collect())
                .unwrap_or_default(),
        }
    }
}

/// Starts every feed at once. Completion order is unspecified.
pub fn fan_out(client: &Client) -> Task<FeedResult> {
    tracing::info!("requesting all feeds");

    let apod_client = client.clone();
    let mars_client = client.clone();
    let epic_client = client.clone();
    let library_client = client.clone();
    let tile = gibs::static_tile(client.settings());

    Task::batch([
        Task::perform(
            async move { apod::fetch(&apod_client).await },
            FeedResult::Apod,
        ),
        Task::perform(
            async move { mars::fetch(&mars_client).await },
            FeedResult::Mars,
        ),
        Task::perform(
            async move { epic::fetch(&epic_client).await },
            FeedResult::Epic,
        ),
        Task::done(FeedResult::Tile(Ok(tile))),
        Task::perform(
            async move { library::fetch(&library_client).await },
            FeedResult::Library,
        ),
    ])
}

/// Settles every network feed with `err` when no HTTP client exists. The
/// static tile needs no request and still resolves.
pub fn unavailable(err: &Error, settings: &NasaConfig) -> Task<FeedResult> {
    let failed = Feed::ALL
        .into_iter()
        .filter(|feed| *feed != Feed::Tile)
        .map(|feed| Task::done(FeedResult::failed(feed, err.clone())));

    Task::batch(
        failed.chain(std::iter::once(Task::done(FeedResult::Tile(Ok(
            gibs::static_tile(settings),
        ))))),
    )
}
