use crate::{ContentItem, Section};

/// A completed backend call: the items on success, or the already-formatted
/// user-visible message on failure.
pub type FetchResult = Result<Vec<ContentItem>, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    ProcessInputChanged(String),
    /// User submitted the URL form.
    ProcessSubmitted,
    /// The process request finished.
    ProcessCompleted(FetchResult),
    /// User edited the free-text search box.
    SearchInputChanged(String),
    /// User submitted the search form.
    SearchSubmitted,
    /// The free-text search finished.
    SearchCompleted(FetchResult),
    /// User clicked a tag in the palette or the active-tag strip.
    TagToggled(String),
    /// User clicked "Clear all".
    TagsCleared,
    /// The combined tag search finished.
    TagSearchCompleted(FetchResult),
    /// The wildcard enumeration used to build the tag palette finished.
    /// Failures here are logged by the platform layer, never surfaced.
    AllTagsLoaded(FetchResult),
    /// User clicked a topic badge on a result card (cross-link into the
    /// tag-filter view).
    TopicClicked(String),
    /// User activated a navigation link.
    SectionSelected(Section),
    /// Fallback for placeholder wiring.
    NoOp,
}
