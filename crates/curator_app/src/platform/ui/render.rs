use curator_core::{AppViewModel, CardView, Section, TagBadgeView};

/// Terminal rendering of the current section. Pure view-to-text so it can be
/// asserted on directly.
pub fn section_summary(view: &AppViewModel) -> String {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("== {} ==", section_label(view.section)));

    match view.section {
        Section::Process => {
            if view.process.busy {
                lines.push("processing…".to_string());
            }
            if let Some(error) = &view.process.error {
                lines.push(format!("error: {error}"));
            }
            for card in &view.process.cards {
                push_card(&mut lines, card);
            }
        }
        Section::Search => {
            if !view.search.query.is_empty() {
                lines.push(format!("query: {}", view.search.query));
            }
            if view.search.busy {
                lines.push("searching…".to_string());
            }
            if let Some(error) = &view.search.error {
                lines.push(format!("error: {error}"));
            }
            push_results(&mut lines, view.search.results.as_deref(), "No content found.");
        }
        Section::Tags => {
            lines.push(format!("active: {}", badge_list(&view.tags.active)));
            lines.push(format!("available: {}", badge_list(&view.tags.available)));
            if view.tags.busy {
                lines.push("searching…".to_string());
            }
            if let Some(error) = &view.tags.error {
                lines.push(format!("error: {error}"));
            }
            push_results(
                &mut lines,
                view.tags.results.as_deref(),
                "No content found with selected tags.",
            );
        }
    }

    lines.join("\n")
}

fn section_label(section: Section) -> &'static str {
    match section {
        Section::Process => "Process",
        Section::Search => "Search",
        Section::Tags => "Tags",
    }
}

fn push_results(lines: &mut Vec<String>, results: Option<&[CardView]>, empty_notice: &str) {
    match results {
        None => {}
        Some([]) => lines.push(empty_notice.to_string()),
        Some(cards) => {
            for card in cards {
                push_card(lines, card);
            }
        }
    }
}

fn push_card(lines: &mut Vec<String>, card: &CardView) {
    lines.push(format!(
        "• {} ({} min) [{}] — {}",
        card.title,
        card.reading_time,
        card.sentiment.label(),
        card.source
    ));
    if !card.topics.is_empty() {
        lines.push(format!("  topics: {}", badge_list(&card.topics)));
    }
    if !card.summary.is_empty() {
        lines.push(format!("  {}", card.summary));
    }
}

fn badge_list(badges: &[TagBadgeView]) -> String {
    if badges.is_empty() {
        return "(none)".to_string();
    }
    badges
        .iter()
        .map(|badge| {
            if badge.active {
                format!("[{}]", badge.label)
            } else {
                badge.label.clone()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
