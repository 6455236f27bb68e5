use std::rc::Rc;

use apod_core::{update, AppState, Key, Msg};
use apod_engine::FeedSettings;
use dioxus::prelude::*;
use gallery_logging::gallery_info;
use gloo::events::EventListener;
use wasm_bindgen::JsCast;

use super::effects::EffectRunner;
use super::logging;
use super::ui;

pub fn run_app() {
    logging::initialize(gallery_logging::default_level());
    gallery_info!("Starting APOD gallery");
    dioxus::launch(App);
}

/// Routes messages through `update` and hands the resulting effects to the
/// runner. Completions come back through the same path.
#[derive(Clone)]
struct Dispatcher {
    state: Signal<AppState>,
    effects: EffectRunner,
}

impl Dispatcher {
    fn send(&self, msg: Msg) {
        let current = self.state.peek().clone();
        let (mut next, effects) = update(current, msg);
        if next.consume_dirty() {
            let mut state = self.state;
            state.set(next);
        }

        let this = self.clone();
        self.effects.enqueue(effects, move |msg| this.send(msg));
    }
}

#[component]
fn App() -> Element {
    let state = use_signal(|| {
        let fact_seed = chrono::Utc::now().timestamp_millis().unsigned_abs();
        let (mut state, _) = update(AppState::new(), Msg::Started { fact_seed });
        state.consume_dirty();
        state
    });
    let dispatcher = use_hook(|| Dispatcher {
        state,
        effects: EffectRunner::new(FeedSettings::default()),
    });
    let on_msg = use_callback(move |msg: Msg| dispatcher.send(msg));
    use_hook(|| Rc::new(document_keys(on_msg)));

    let view = state.read().view();

    rsx! {
        style { {ui::styles::GALLERY_STYLES} }
        ui::render::Page { view, on_msg }
    }
}

/// Page-wide key handling, so Escape works wherever focus sits.
fn document_keys(on_msg: Callback<Msg>) -> EventListener {
    EventListener::new(&gloo::utils::document(), "keydown", move |event| {
        if let Some(event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
            on_msg.call(Msg::KeyPressed(Key::from_dom_key(&event.key())));
        }
    })
}
