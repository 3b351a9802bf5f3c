// SPDX-License-Identifier: MPL-2.0
//! NASA Image and Video Library search.

use super::{join_url, Client};
use crate::error::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub collection: Collection,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub items: Vec<RawItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawItem {
    #[serde(default)]
    pub data: Vec<RawItemData>,
    #[serde(default)]
    pub links: Vec<RawItemLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawItemData {
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawItemLink {
    pub href: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryItem {
    pub title: Option<String>,
    pub thumbnail_url: String,
}

/// Keeps the first `limit` results, then drops those without a thumbnail.
///
/// Truncation happens before filtering, so fewer than `limit` items may be
/// returned even when later results have thumbnails.
pub fn select_items(response: SearchResponse, limit: usize) -> Vec<LibraryItem> {
    response
        .collection
        .items
        .into_iter()
        .take(limit)
        .filter_map(|item| {
            let thumbnail_url = item
                .links
                .into_iter()
                .next()
                .and_then(|link| link.href)
                .filter(|href| !href.is_empty())?;
            let title = item.data.into_iter().next().and_then(|data| data.title);
            Some(LibraryItem {
                title,
                thumbnail_url,
            })
        })
        .collect()
}

pub async fn fetch(client: &Client) -> Result<Vec<LibraryItem>> {
    let settings = client.settings();
    let url = join_url(&settings.library_url, "search");

    let response: SearchResponse = client
        .get_json(
            &url,
            &[
                ("q", settings.library_query.as_str()),
                ("media_type", settings.library_media_type.as_str()),
            ],
        )
        .await?;
    Ok(select_items(response, settings.library_limit()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn item(title: &str, href: Option<&str>) -> Value {
        match href {
            Some(href) => json!({ "data": [{ "title": title }], "links": [{ "href": href }] }),
            None => json!({ "data": [{ "title": title }] }),
        }
    }

    fn response(items: Vec<Value>) -> SearchResponse {
        serde_json::from_value(json!({ "collection": { "items": items } })).expect("valid json")
    }

    #[test]
    fn caps_results_at_limit() {
        let items = (0..10)
            .map(|i| item(&format!("Earth {i}"), Some(&format!("https://img/{i}.jpg"))))
            .collect();

        let selected = select_items(response(items), 6);
        assert_eq!(selected.len(), 6);
        assert_eq!(selected[0].title.as_deref(), Some("Earth 0"));
        assert_eq!(selected[5].thumbnail_url, "https://img/5.jpg");
    }

    #[test]
    fn drops_entries_without_thumbnail() {
        let items = vec![
            item("a", Some("https://img/a.jpg")),
            item("b", None),
            item("c", Some("")),
            item("d", Some("https://img/d.jpg")),
        ];

        let selected = select_items(response(items), 6);
        let titles: Vec<_> = selected.iter().filter_map(|i| i.title.as_deref()).collect();
        assert_eq!(titles, vec!["a", "d"]);
    }

    #[test]
    fn truncates_before_filtering() {
        let mut items: Vec<Value> = (0..6).map(|i| item(&i.to_string(), None)).collect();
        items.push(item("late", Some("https://img/late.jpg")));

        assert!(select_items(response(items), 6).is_empty());
    }

    #[test]
    fn missing_collection_yields_nothing() {
        let response: SearchResponse = serde_json::from_value(json!({})).expect("valid json");
        assert!(select_items(response, 6).is_empty());
    }

    #[test]
    fn untitled_items_are_kept() {
        let raw = json!({ "links": [{ "href": "https://img/x.jpg" }] });
        let selected = select_items(response(vec![raw]), 6);
        assert_eq!(selected.len(), 1);
        assert!(selected[0].title.is_none());
    }
}
