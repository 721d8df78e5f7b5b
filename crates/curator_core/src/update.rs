use crate::{AppState, Effect, Msg, Section};

/// Inline validation message when no submitted line survives URL filtering.
pub const NO_VALID_URLS_ERROR: &str = "Please enter at least one valid URL";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::ProcessInputChanged(text) => {
            state.process.input = text;
            state.mark_dirty();
            Vec::new()
        }
        Msg::ProcessSubmitted => {
            let urls = parse_urls(&state.process.input);
            state.process.items.clear();
            state.process.error = None;
            state.mark_dirty();
            if urls.is_empty() {
                // Validation failure blocks the request entirely.
                state.process.error = Some(NO_VALID_URLS_ERROR.to_string());
                Vec::new()
            } else {
                state.process.busy = true;
                vec![Effect::ProcessUrls { urls }]
            }
        }
        Msg::ProcessCompleted(result) => {
            state.process.busy = false;
            match result {
                Ok(items) => state.process.items = items,
                Err(message) => state.process.error = Some(message),
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::SearchInputChanged(query) => {
            state.search.query = query;
            state.mark_dirty();
            Vec::new()
        }
        Msg::SearchSubmitted => {
            state.search.results = None;
            state.search.error = None;
            state.search.busy = true;
            state.mark_dirty();
            vec![Effect::RunSearch {
                query: state.search.query.clone(),
            }]
        }
        Msg::SearchCompleted(result) => {
            state.search.busy = false;
            match result {
                Ok(items) => state.search.results = Some(items),
                Err(message) => state.search.error = Some(message),
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::TagToggled(tag) => {
            state.mark_dirty();
            toggle_tag(&mut state, tag)
        }
        Msg::TagsCleared => {
            state.active_tags.clear();
            state.tags.results = None;
            state.tags.error = None;
            state.mark_dirty();
            Vec::new()
        }
        Msg::TagSearchCompleted(result) => {
            state.tags.busy = false;
            match result {
                Ok(items) => state.tags.results = Some(items),
                Err(message) => {
                    // Failure both surfaces the message and blanks the results.
                    state.tags.error = Some(message);
                    state.tags.results = None;
                }
            }
            state.mark_dirty();
            Vec::new()
        }
        Msg::AllTagsLoaded(result) => match result {
            Ok(items) => {
                state.absorb_topics(&items);
                state.mark_dirty();
                Vec::new()
            }
            // Silent failure: the palette stays as it was and the platform
            // layer has already logged the message.
            Err(_) => Vec::new(),
        },
        Msg::TopicClicked(topic) => {
            state.mark_dirty();
            let mut effects = select_section(&mut state, Section::Tags);
            if !state.active_tags.contains(&topic) {
                effects.extend(toggle_tag(&mut state, topic));
            }
            effects
        }
        Msg::SectionSelected(section) => {
            state.mark_dirty();
            select_section(&mut state, section)
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Newline-separated input; keep only trimmed lines that start with `http`.
fn parse_urls(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| line.starts_with("http"))
        .map(ToOwned::to_owned)
        .collect()
}

fn select_section(state: &mut AppState, section: Section) -> Vec<Effect> {
    state.section = section;
    // Lazy palette load: re-attempted on every visit until something sticks.
    if section == Section::Tags && state.all_tags.is_empty() {
        vec![Effect::LoadAllTags]
    } else {
        Vec::new()
    }
}

fn toggle_tag(state: &mut AppState, tag: String) -> Vec<Effect> {
    if !state.active_tags.remove(&tag) {
        state.active_tags.insert(tag);
    }
    if state.active_tags.is_empty() {
        state.tags.results = None;
        Vec::new()
    } else {
        state.tags.busy = true;
        state.tags.error = None;
        vec![Effect::RunTagSearch {
            query: state.combined_tag_query(),
        }]
    }
}
