//! Curator core: pure UI state machine, view models and markup renderers.
mod effect;
pub mod markup;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::{FetchResult, Msg};
pub use state::{AppState, ContentItem, Section, Sentiment};
pub use update::{update, NO_VALID_URLS_ERROR};
pub use view_model::{
    AppViewModel, CardView, ProcessView, SearchView, TagBadgeView, TagsView,
};
