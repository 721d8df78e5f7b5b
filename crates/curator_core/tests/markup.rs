use std::collections::BTreeSet;

use curator_core::markup;
use curator_core::{update, AppState, CardView, ContentItem, Msg, Section, Sentiment};

fn sample_item() -> ContentItem {
    ContentItem {
        title: "A".to_string(),
        url: "u".to_string(),
        source: "src".to_string(),
        summary: "s".to_string(),
        reading_time: 5,
        topics: vec!["x".to_string(), "y".to_string()],
        sentiment: Sentiment::Positive,
    }
}

#[test]
fn card_shows_topics_reading_time_and_sentiment_icon() {
    let card = CardView::from_item(&sample_item(), &BTreeSet::new());
    let html = markup::content_card(&card);

    assert!(html.contains(r#"<h6 class="card-title content-title">A</h6>"#));
    assert!(html.contains(">x</button>"));
    assert!(html.contains(">y</button>"));
    assert!(html.contains("5 min"));
    assert!(html.contains(r#"href="u""#));
    assert!(html.contains("<small>src</small>"));
    // Only the matching sentiment icon is present.
    assert!(html.contains("sentiment-positive"));
    assert!(!html.contains("sentiment-negative"));
    assert!(html.contains(r#"<span class="sentiment-value">positive</span>"#));
}

#[test]
fn unknown_sentiment_renders_label_without_icon() {
    let item = ContentItem {
        sentiment: Sentiment::from_label("mixed"),
        ..sample_item()
    };
    let card = CardView::from_item(&item, &BTreeSet::new());
    let html = markup::content_card(&card);

    assert!(html.contains(r#"<span class="sentiment-value">mixed</span>"#));
    assert!(!html.contains("bi-emoji"));
}

#[test]
fn empty_search_results_render_the_exact_notice() {
    assert_eq!(markup::search_results(&[]), markup::NO_CONTENT_NOTICE);
    assert_eq!(markup::tag_results(&[]), markup::NO_TAGGED_CONTENT_NOTICE);
}

#[test]
fn active_topic_badges_carry_the_active_class() {
    let mut active = BTreeSet::new();
    active.insert("x".to_string());
    let card = CardView::from_item(&sample_item(), &active);
    let html = markup::content_card(&card);

    assert!(html.contains(r#"class="badge topic-badge active" data-topic="x""#));
    assert!(html.contains(r#"class="badge topic-badge" data-topic="y""#));
}

#[test]
fn text_and_attributes_are_escaped() {
    let item = ContentItem {
        title: "<script>alert(1)</script>".to_string(),
        summary: "a & b".to_string(),
        topics: vec!["\"quoted\"".to_string()],
        ..sample_item()
    };
    let card = CardView::from_item(&item, &BTreeSet::new());
    let html = markup::content_card(&card);

    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
    assert!(html.contains("a &amp; b"));
    assert!(html.contains("&quot;quoted&quot;"));
}

#[test]
fn empty_active_tags_render_the_placeholder_note() {
    assert_eq!(
        markup::active_tags(&[]),
        r#"<small class="text-muted">No tags selected</small>"#
    );
}

#[test]
fn active_tag_strip_includes_clear_all() {
    let state = AppState::new();
    let (state, _) = update(state, Msg::TagToggled("rust".to_string()));
    let html = markup::active_tags(&state.view().tags.active);

    assert!(html.contains(">rust</button>"));
    assert!(html.contains(r#"<span class="clear-tags">Clear all</span>"#));
}

#[test]
fn page_shows_exactly_one_visible_section() {
    let clicks = [
        Section::Search,
        Section::Tags,
        Section::Process,
        Section::Tags,
    ];
    let mut state = AppState::new();

    for section in clicks {
        let (next, _) = update(state, Msg::SectionSelected(section));
        state = next;
        let html = markup::page(&state.view());
        // One section visible, the other two hidden, one nav link active.
        assert_eq!(html.matches(r#"<section id="#).count(), 3);
        assert_eq!(html.matches(r#" style="display:block">"#).count(), 1);
        assert_eq!(html.matches(r#" style="display:none">"#).count(), 2);
        assert_eq!(html.matches(r#"class="nav-link active""#).count(), 1);

        let visible_id = match section {
            Section::Process => "processSection",
            Section::Search => "searchSection",
            Section::Tags => "tagsSection",
        };
        assert!(html.contains(&format!(
            r#"<section id="{visible_id}" style="display:block">"#
        )));
    }
}

#[test]
fn nav_links_are_fragment_anchors_with_section_keys() {
    let html = markup::page(&AppState::new().view());

    for key in ["process", "search", "tags"] {
        assert!(html.contains(&format!(r##"data-section="{key}" href="#">"##)));
    }
}

#[test]
fn page_embeds_pane_errors_inline() {
    let state = AppState::new();
    let (state, _) = update(state, Msg::SearchSubmitted);
    let (state, _) = update(
        state,
        Msg::SearchCompleted(Err("Error: Bad Gateway".to_string())),
    );

    let html = markup::page(&state.view());
    assert!(html.contains(r#"<div class="alert alert-danger">Error: Bad Gateway</div>"#));
}
