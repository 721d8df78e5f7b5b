use std::sync::Once;

use curator_core::{update, AppState, ContentItem, Effect, Msg, Section};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(ui_logging::initialize_for_tests);
}

#[test]
fn exactly_one_section_is_current_for_any_click_sequence() {
    init_logging();
    let clicks = [
        Section::Tags,
        Section::Search,
        Section::Search,
        Section::Process,
        Section::Tags,
    ];

    let mut state = AppState::new();
    assert_eq!(state.view().section, Section::Process);

    for section in clicks {
        let (next, _) = update(state, Msg::SectionSelected(section));
        state = next;
        assert_eq!(state.view().section, section);
    }
}

#[test]
fn first_tags_visit_triggers_the_palette_load() {
    init_logging();
    let state = AppState::new();

    let (state, effects) = update(state, Msg::SectionSelected(Section::Tags));
    assert_eq!(effects, vec![Effect::LoadAllTags]);

    // Until something loads, every visit retries (the original re-checked
    // the empty set on each click).
    let (state, effects) = update(state, Msg::SectionSelected(Section::Search));
    assert!(effects.is_empty());
    let (state, effects) = update(state, Msg::SectionSelected(Section::Tags));
    assert_eq!(effects, vec![Effect::LoadAllTags]);

    let (state, _) = update(
        state,
        Msg::AllTagsLoaded(Ok(vec![ContentItem {
            topics: vec!["rust".to_string()],
            ..ContentItem::default()
        }])),
    );
    let (_state, effects) = update(state, Msg::SectionSelected(Section::Tags));
    assert!(effects.is_empty());
}

#[test]
fn switching_sections_emits_no_network_work_otherwise() {
    init_logging();
    let state = AppState::new();
    let (state, effects) = update(state, Msg::SectionSelected(Section::Search));
    assert!(effects.is_empty());
    let (_state, effects) = update(state, Msg::SectionSelected(Section::Process));
    assert!(effects.is_empty());
}
