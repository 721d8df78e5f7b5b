/// Backend work requested by the state machine; executed by the platform
/// layer, which reports back through completion [`crate::Msg`]s.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// POST the given URLs to the content-processing endpoint, input order
    /// preserved.
    ProcessUrls { urls: Vec<String> },
    /// Run the free-text search.
    RunSearch { query: String },
    /// Run the combined active-tag search.
    RunTagSearch { query: String },
    /// Enumerate all stored content (wildcard query) to build the tag palette.
    LoadAllTags,
}
