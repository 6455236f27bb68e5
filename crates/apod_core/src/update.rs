use crate::{AppState, Effect, Key, Msg, FETCH_FAILED_MESSAGE, LOADING_MESSAGE};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started { fact_seed } => {
            state.seed_fact(fact_seed);
            Vec::new()
        }
        Msg::FetchClicked => {
            // Overlapping fetches are allowed; whichever resolves last wins.
            let request_id = state.begin_request();
            state.show_message(LOADING_MESSAGE);
            vec![Effect::FetchFeed { request_id }]
        }
        Msg::FeedLoaded { items, .. } => {
            state.finish_request();
            state.render_items(items);
            Vec::new()
        }
        Msg::FeedFailed { .. } => {
            state.finish_request();
            state.show_message(FETCH_FAILED_MESSAGE);
            Vec::new()
        }
        Msg::CardActivated { index } => {
            state.open_detail(index);
            Vec::new()
        }
        Msg::CardKeyPressed { index, key } => {
            if key.activates_card() {
                state.open_detail(index);
            }
            Vec::new()
        }
        Msg::BackdropClicked | Msg::CloseClicked | Msg::KeyPressed(Key::Escape) => {
            state.close_detail();
            Vec::new()
        }
        Msg::KeyPressed(_) | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
