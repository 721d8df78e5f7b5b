use std::collections::BTreeSet;

/// Top-level UI sections; exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Process,
    Search,
    Tags,
}

/// Sentiment assigned to an article by the backend analysis.
///
/// The backend sends free-form strings; the three values it documents get
/// dedicated icons in the rendered output, anything else is carried verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Neutral,
    Negative,
    Other(String),
}

impl Default for Sentiment {
    fn default() -> Self {
        Sentiment::Neutral
    }
}

impl Sentiment {
    pub fn from_label(label: &str) -> Self {
        match label {
            "positive" => Sentiment::Positive,
            "neutral" => Sentiment::Neutral,
            "negative" => Sentiment::Negative,
            other => Sentiment::Other(other.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Neutral => "neutral",
            Sentiment::Negative => "negative",
            Sentiment::Other(label) => label,
        }
    }
}

/// One processed article as the UI sees it. Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContentItem {
    pub title: String,
    pub url: String,
    pub source: String,
    pub summary: String,
    pub reading_time: u32,
    pub topics: Vec<String>,
    pub sentiment: Sentiment,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct ProcessPane {
    pub(crate) input: String,
    pub(crate) busy: bool,
    pub(crate) error: Option<String>,
    pub(crate) items: Vec<ContentItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct SearchPane {
    pub(crate) query: String,
    pub(crate) busy: bool,
    pub(crate) error: Option<String>,
    /// `None` = nothing searched yet; `Some(vec![])` renders the empty notice.
    pub(crate) results: Option<Vec<ContentItem>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) struct TagsPane {
    pub(crate) busy: bool,
    pub(crate) error: Option<String>,
    pub(crate) results: Option<Vec<ContentItem>>,
}

/// The whole UI state for one page session.
///
/// Mutated only through [`crate::update`]; the platform layer reads it via
/// [`AppState::view`] and the dirty flag.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pub(crate) section: Section,
    pub(crate) active_tags: BTreeSet<String>,
    pub(crate) all_tags: BTreeSet<String>,
    pub(crate) process: ProcessPane,
    pub(crate) search: SearchPane,
    pub(crate) tags: TagsPane,
    pub(crate) dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the dirty flag and clears it. The platform loop uses this to
    /// coalesce renders.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Active tags joined into the combined search query, one space apart.
    pub(crate) fn combined_tag_query(&self) -> String {
        self.active_tags
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub(crate) fn absorb_topics<'a>(&mut self, items: impl IntoIterator<Item = &'a ContentItem>) {
        for item in items {
            for topic in &item.topics {
                self.all_tags.insert(topic.clone());
            }
        }
    }
}
