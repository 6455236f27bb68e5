use apod_core::{Effect, Msg};
use apod_engine::{FeedEngine, FeedSettings};
use dioxus::prelude::spawn;
use gallery_logging::gallery_debug;

/// Executes core effects on the browser's event loop.
#[derive(Clone)]
pub struct EffectRunner {
    engine: FeedEngine,
}

impl EffectRunner {
    pub fn new(settings: FeedSettings) -> Self {
        Self {
            engine: FeedEngine::new(settings),
        }
    }

    /// Starts every effect; `send` receives each outcome as a message.
    pub fn enqueue(&self, effects: Vec<Effect>, send: impl Fn(Msg) + Clone + 'static) {
        for effect in effects {
            match effect {
                Effect::FetchFeed { request_id } => {
                    gallery_debug!(
                        "Spawning fetch request_id={} url={}",
                        request_id,
                        self.engine.feed_url()
                    );
                    let engine = self.engine.clone();
                    let send = send.clone();
                    spawn(async move {
                        let completion = engine.load(request_id).await;
                        send(completion.into_msg());
                    });
                }
            }
        }
    }
}
