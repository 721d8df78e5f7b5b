//! HTML renderers for the preview document.
//!
//! Pure projections from view models to markup strings; no state, no I/O.
//! Fragment structure and class names follow the served web UI so the
//! preview can share its stylesheet.

use crate::view_model::{AppViewModel, CardView, TagBadgeView};
use crate::{Section, Sentiment};

/// Notice rendered instead of an empty free-text result list.
pub const NO_CONTENT_NOTICE: &str = r#"<div class="alert alert-info">No content found.</div>"#;

/// Notice rendered instead of an empty tag-filtered result list.
pub const NO_TAGGED_CONTENT_NOTICE: &str =
    r#"<div class="alert alert-info">No content found with selected tags.</div>"#;

/// Minimal HTML entity escaping for text and attribute positions.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A single topic badge; selected topics carry the `active` class.
pub fn topic_badge(badge: &TagBadgeView) -> String {
    let class = if badge.active {
        "badge topic-badge active"
    } else {
        "badge topic-badge"
    };
    let hint = if badge.active { "Remove tag" } else { "Add tag" };
    format!(
        r#"<button class="{class}" data-topic="{topic}" title="{hint}">{label}</button>"#,
        topic = escape_html(&badge.label),
        label = escape_html(&badge.label),
    )
}

fn sentiment_fragment(sentiment: &Sentiment) -> String {
    // Only the three documented values have an icon; anything else renders
    // label-only, same net effect as the original class lookup missing.
    let icon = match sentiment {
        Sentiment::Positive => Some(r#"<i class="bi bi-emoji-smile sentiment-positive"></i>"#),
        Sentiment::Neutral => Some(r#"<i class="bi bi-emoji-neutral sentiment-neutral"></i>"#),
        Sentiment::Negative => Some(r#"<i class="bi bi-emoji-frown sentiment-negative"></i>"#),
        Sentiment::Other(_) => None,
    };
    format!(
        r#"<span class="content-sentiment">{icon}<span class="sentiment-value">{label}</span></span>"#,
        icon = icon.unwrap_or_default(),
        label = escape_html(sentiment.label()),
    )
}

/// One article card: title, source link, summary, topic badges, sentiment
/// and reading time.
pub fn content_card(card: &CardView) -> String {
    let topics = card.topics.iter().map(topic_badge).collect::<String>();
    format!(
        r#"<div class="card mb-3">
  <div class="card-body">
    <h6 class="card-title content-title">{title}</h6>
    <a class="content-source" href="{url}" target="_blank"><small>{source}</small></a>
    <p class="card-text small content-summary">{summary}</p>
    <div class="d-flex flex-wrap gap-1 content-topics">{topics}</div>
    <div class="d-flex align-items-center gap-2">
      {sentiment}
      <small class="text-muted"><i class="bi bi-clock"></i> {reading_time} min</small>
      <a href="{url}" target="_blank" class="btn btn-sm btn-outline-primary">Read</a>
    </div>
  </div>
</div>
"#,
        title = escape_html(&card.title),
        url = escape_html(&card.url),
        source = escape_html(&card.source),
        summary = escape_html(&card.summary),
        sentiment = sentiment_fragment(&card.sentiment),
        reading_time = card.reading_time,
    )
}

/// Result list for the free-text search pane.
pub fn search_results(cards: &[CardView]) -> String {
    if cards.is_empty() {
        return NO_CONTENT_NOTICE.to_string();
    }
    cards.iter().map(content_card).collect()
}

/// Result list for the tag-filter pane; differs only in its empty notice.
pub fn tag_results(cards: &[CardView]) -> String {
    if cards.is_empty() {
        return NO_TAGGED_CONTENT_NOTICE.to_string();
    }
    cards.iter().map(content_card).collect()
}

/// The palette of every known tag.
pub fn available_tags(badges: &[TagBadgeView]) -> String {
    badges.iter().map(topic_badge).collect()
}

/// The strip of selected tags with the clear-all control.
pub fn active_tags(badges: &[TagBadgeView]) -> String {
    if badges.is_empty() {
        return r#"<small class="text-muted">No tags selected</small>"#.to_string();
    }
    let mut out = badges.iter().map(topic_badge).collect::<String>();
    out.push_str(r#"<span class="clear-tags">Clear all</span>"#);
    out
}

fn spinner(visible: bool) -> String {
    if visible {
        r#"<div class="spinner-border loading-spinner" role="status"></div>"#.to_string()
    } else {
        String::new()
    }
}

fn error_alert(error: Option<&str>) -> String {
    match error {
        Some(message) => format!(
            r#"<div class="alert alert-danger">{}</div>"#,
            escape_html(message)
        ),
        None => String::new(),
    }
}

fn nav_link(section: Section, current: Section) -> String {
    let (key, label) = match section {
        Section::Process => ("process", "Process"),
        Section::Search => ("search", "Search"),
        Section::Tags => ("tags", "Tags"),
    };
    let class = if section == current {
        "nav-link active"
    } else {
        "nav-link"
    };
    format!(r##"<a class="{class}" data-section="{key}" href="#">{label}</a>"##)
}

fn section_style(section: Section, current: Section) -> &'static str {
    if section == current {
        "display:block"
    } else {
        "display:none"
    }
}

/// Whole-document preview of the current UI state.
///
/// All three sections are rendered; only the current one is visible, which
/// keeps section switching a pure style change like the served page.
pub fn page(view: &AppViewModel) -> String {
    let process_results = view
        .process
        .cards
        .iter()
        .map(content_card)
        .collect::<String>();
    let search_results_html = view
        .search
        .results
        .as_deref()
        .map(search_results)
        .unwrap_or_default();
    let tag_results_html = view
        .tags
        .results
        .as_deref()
        .map(tag_results)
        .unwrap_or_default();

    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Curator</title>
</head>
<body>
<nav class="nav">{nav_process}{nav_search}{nav_tags}</nav>
<section id="processSection" style="{process_style}">
  <textarea id="urls" readonly>{process_input}</textarea>
  {process_spinner}
  {process_error}
  <div id="contentList">{process_results}</div>
</section>
<section id="searchSection" style="{search_style}">
  <input id="searchQuery" value="{search_query}" readonly>
  {search_spinner}
  {search_error}
  <div id="searchResults">{search_results}</div>
</section>
<section id="tagsSection" style="{tags_style}">
  <div id="activeTags">{active_tags}</div>
  <div id="availableTags">{available_tags}</div>
  {tags_spinner}
  {tags_error}
  <div id="tagSearchResults">{tag_results}</div>
</section>
</body>
</html>
"#,
        nav_process = nav_link(Section::Process, view.section),
        nav_search = nav_link(Section::Search, view.section),
        nav_tags = nav_link(Section::Tags, view.section),
        process_style = section_style(Section::Process, view.section),
        process_input = escape_html(&view.process.input),
        process_spinner = spinner(view.process.busy),
        process_error = error_alert(view.process.error.as_deref()),
        process_results = process_results,
        search_style = section_style(Section::Search, view.section),
        search_query = escape_html(&view.search.query),
        search_spinner = spinner(view.search.busy),
        search_error = error_alert(view.search.error.as_deref()),
        search_results = search_results_html,
        tags_style = section_style(Section::Tags, view.section),
        active_tags = active_tags(&view.tags.active),
        available_tags = available_tags(&view.tags.available),
        tags_spinner = spinner(view.tags.busy),
        tags_error = error_alert(view.tags.error.as_deref()),
        tag_results = tag_results_html,
    )
}
