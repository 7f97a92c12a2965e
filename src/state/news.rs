//! Simulated live robotics feed.
//!
//! SYSTEM CONTEXT
//! ==============
//! There is no backend. The feed is a `NewsSource` that resolves to a fixed
//! list after a cosmetic delay; tests substitute `StaticNewsSource` so no
//! timer is involved.

#[cfg(test)]
#[path = "news_test.rs"]
mod news_test;

use futures::future::{self, LocalBoxFuture};
use serde::{Deserialize, Serialize};

pub const LOADING_TEXT: &str = "Loading live robotics updates…";
pub const EMPTY_TEXT: &str = "No updates available right now. Try again later.";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    pub title: String,
    pub source: String,
    pub time: String,
}

impl NewsItem {
    fn new(title: &str, source: &str, time: &str) -> Self {
        Self { title: title.to_owned(), source: source.to_owned(), time: time.to_owned() }
    }

    /// Secondary line shown under the title.
    pub fn meta(&self) -> String {
        format!("{} • {}", self.source, self.time)
    }
}

/// The hardcoded headlines shown on the news page.
pub fn sample_items() -> Vec<NewsItem> {
    vec![
        NewsItem::new(
            "Student team builds low-cost line-following robot",
            "Campus Robotics Club",
            "Just now",
        ),
        NewsItem::new("Open-source library simplifies ROS-based navigation", "Dev Community", "5 min ago"),
        NewsItem::new("Mini quadcopter completes indoor mapping challenge", "Lab Demo", "18 min ago"),
    ]
}

/// Deferred provider of feed items.
pub trait NewsSource {
    fn fetch(&self) -> LocalBoxFuture<'_, Vec<NewsItem>>;
}

/// Resolves immediately with a fixed list.
#[derive(Clone, Debug, Default)]
pub struct StaticNewsSource {
    pub items: Vec<NewsItem>,
}

impl StaticNewsSource {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self { items }
    }
}

impl NewsSource for StaticNewsSource {
    fn fetch(&self) -> LocalBoxFuture<'_, Vec<NewsItem>> {
        Box::pin(future::ready(self.items.clone()))
    }
}

/// Resolves with `items` after `delay_ms` on the browser timer queue.
#[cfg(feature = "csr")]
pub struct DelayedNewsSource {
    pub items: Vec<NewsItem>,
    pub delay_ms: u32,
}

#[cfg(feature = "csr")]
impl NewsSource for DelayedNewsSource {
    fn fetch(&self) -> LocalBoxFuture<'_, Vec<NewsItem>> {
        Box::pin(async move {
            gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;
            self.items.clone()
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FeedState {
    #[default]
    Loading,
    Ready {
        items: Vec<NewsItem>,
        updated_at: String,
    },
    Empty,
}

impl FeedState {
    pub fn from_items(items: Vec<NewsItem>, updated_at: String) -> Self {
        if items.is_empty() { Self::Empty } else { Self::Ready { items, updated_at } }
    }

    /// Status line shown under (or instead of) the list.
    pub fn status_text(&self) -> String {
        match self {
            Self::Loading => LOADING_TEXT.to_owned(),
            Self::Ready { updated_at, .. } => format!("Last updated at {updated_at}"),
            Self::Empty => EMPTY_TEXT.to_owned(),
        }
    }
}

/// Wall-clock `HH:MM`, two digits each.
pub fn format_clock(hours: u32, minutes: u32) -> String {
    format!("{hours:02}:{minutes:02}")
}

/// Await `source`, then stamp the result with `clock()` taken after it
/// resolves.
pub async fn load_feed(source: &dyn NewsSource, clock: impl Fn() -> String) -> FeedState {
    let items = source.fetch().await;
    FeedState::from_items(items, clock())
}
