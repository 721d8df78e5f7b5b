use std::sync::{mpsc, Arc};
use std::thread;

use curator_client::{ApiError, Content, ContentApi};
use curator_core::{ContentItem, Effect, Msg, Sentiment};
use ui_logging::{ui_error, ui_info, ui_warn};

use super::app::Input;

/// Executes [`Effect`]s on a worker thread owning a tokio runtime and feeds
/// completion messages back into the main loop's channel.
pub struct EffectRunner {
    effect_tx: mpsc::Sender<Effect>,
}

impl EffectRunner {
    pub fn new(api: Arc<dyn ContentApi>, msg_tx: mpsc::Sender<Input>) -> Self {
        let (effect_tx, effect_rx) = mpsc::channel::<Effect>();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    ui_error!("Failed to start effect runtime: {}", err);
                    return;
                }
            };
            while let Ok(effect) = effect_rx.recv() {
                let api = api.clone();
                let msg_tx = msg_tx.clone();
                runtime.spawn(async move {
                    let msg = run_effect(api.as_ref(), effect).await;
                    let _ = msg_tx.send(Input::Core(msg));
                });
            }
        });

        Self { effect_tx }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            let _ = self.effect_tx.send(effect);
        }
    }
}

async fn run_effect(api: &dyn ContentApi, effect: Effect) -> Msg {
    match effect {
        Effect::ProcessUrls { urls } => {
            ui_info!("Processing {} url(s)", urls.len());
            Msg::ProcessCompleted(map_result(api.process_urls(&urls).await))
        }
        Effect::RunSearch { query } => {
            ui_info!("Searching query={:?}", query);
            Msg::SearchCompleted(map_result(api.search(&query).await))
        }
        Effect::RunTagSearch { query } => {
            ui_info!("Tag search query={:?}", query);
            Msg::TagSearchCompleted(map_result(api.search(&query).await))
        }
        Effect::LoadAllTags => {
            let result = map_result(api.search("*").await);
            if let Err(message) = &result {
                // Palette loading fails silently; this log line is the only trace.
                ui_warn!("Failed to load tags: {}", message);
            }
            Msg::AllTagsLoaded(result)
        }
    }
}

fn map_result(result: Result<Vec<Content>, ApiError>) -> Result<Vec<ContentItem>, String> {
    result
        .map(|items| items.into_iter().map(to_core_item).collect())
        .map_err(|err| err.to_string())
}

/// Wire DTO to core item; analysis fields the UI never shows are dropped here.
fn to_core_item(content: Content) -> ContentItem {
    ContentItem {
        title: content.title,
        url: content.url,
        source: content.source,
        summary: content.summary,
        reading_time: content.reading_time,
        topics: content.topics,
        sentiment: Sentiment::from_label(&content.sentiment),
    }
}
