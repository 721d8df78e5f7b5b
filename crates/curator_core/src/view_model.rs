use std::collections::BTreeSet;

use crate::state::AppState;
use crate::{ContentItem, Section, Sentiment};

/// Snapshot of everything the platform layer needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub section: Section,
    pub process: ProcessView,
    pub search: SearchView,
    pub tags: TagsView,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessView {
    pub input: String,
    pub busy: bool,
    pub error: Option<String>,
    pub cards: Vec<CardView>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchView {
    pub query: String,
    pub busy: bool,
    pub error: Option<String>,
    pub results: Option<Vec<CardView>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TagsView {
    pub busy: bool,
    pub error: Option<String>,
    /// Currently selected tags, always marked active.
    pub active: Vec<TagBadgeView>,
    /// Every known tag; `active` marks the selected ones.
    pub available: Vec<TagBadgeView>,
    pub results: Option<Vec<CardView>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagBadgeView {
    pub label: String,
    pub active: bool,
}

/// One article card, topics already resolved against the active-tag set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub title: String,
    pub url: String,
    pub source: String,
    pub summary: String,
    pub reading_time: u32,
    pub topics: Vec<TagBadgeView>,
    pub sentiment: Sentiment,
}

impl CardView {
    pub fn from_item(item: &ContentItem, active_tags: &BTreeSet<String>) -> Self {
        Self {
            title: item.title.clone(),
            url: item.url.clone(),
            source: item.source.clone(),
            summary: item.summary.clone(),
            reading_time: item.reading_time,
            topics: item
                .topics
                .iter()
                .map(|topic| TagBadgeView {
                    label: topic.clone(),
                    active: active_tags.contains(topic),
                })
                .collect(),
            sentiment: item.sentiment.clone(),
        }
    }
}

impl AppState {
    /// Builds the render snapshot. Cheap enough to call on every dirty pass.
    pub fn view(&self) -> AppViewModel {
        let cards =
            |items: &[ContentItem]| -> Vec<CardView> {
                items
                    .iter()
                    .map(|item| CardView::from_item(item, &self.active_tags))
                    .collect()
            };

        AppViewModel {
            section: self.section,
            process: ProcessView {
                input: self.process.input.clone(),
                busy: self.process.busy,
                error: self.process.error.clone(),
                cards: cards(&self.process.items),
            },
            search: SearchView {
                query: self.search.query.clone(),
                busy: self.search.busy,
                error: self.search.error.clone(),
                results: self.search.results.as_deref().map(|items| cards(items)),
            },
            tags: TagsView {
                busy: self.tags.busy,
                error: self.tags.error.clone(),
                active: self
                    .active_tags
                    .iter()
                    .map(|tag| TagBadgeView {
                        label: tag.clone(),
                        active: true,
                    })
                    .collect(),
                available: self
                    .all_tags
                    .iter()
                    .map(|tag| TagBadgeView {
                        label: tag.clone(),
                        active: self.active_tags.contains(tag),
                    })
                    .collect(),
                results: self.tags.results.as_deref().map(|items| cards(items)),
            },
            dirty: self.dirty,
        }
    }
}
