use std::sync::Once;

use apod_core::{
    update, AppState, CardMedia, Effect, FeedRecord, GalleryView, Key, MediaType, Msg,
    EMPTY_FEED_MESSAGE, FETCH_FAILED_MESSAGE, GRID_LIMIT, LOADING_MESSAGE,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(gallery_logging::initialize_for_tests);
}

fn image(title: &str) -> FeedRecord {
    FeedRecord {
        title: Some(title.to_string()),
        media_type: MediaType::Image,
        url: Some(format!("https://apod.example/{title}.jpg")),
        ..FeedRecord::default()
    }
}

fn images(count: usize) -> Vec<FeedRecord> {
    (0..count).map(|i| image(&format!("img{i}"))).collect()
}

fn loaded(state: AppState, items: Vec<FeedRecord>) -> AppState {
    let (state, effects) = update(state, Msg::FetchClicked);
    let request_id = match effects.as_slice() {
        [Effect::FetchFeed { request_id }] => *request_id,
        other => panic!("expected one fetch effect, got {other:?}"),
    };
    let (state, effects) = update(state, Msg::FeedLoaded { request_id, items });
    assert!(effects.is_empty());
    state
}

fn card_indices(state: &AppState) -> Vec<usize> {
    match state.gallery() {
        GalleryView::Cards(cards) => cards.iter().map(|card| card.index).collect(),
        GalleryView::Message(text) => panic!("expected cards, got message {text:?}"),
    }
}

#[test]
fn fetch_click_shows_loading_and_requests_feed() {
    init_logging();
    let (mut state, effects) = update(AppState::new(), Msg::FetchClicked);

    assert_eq!(effects, vec![Effect::FetchFeed { request_id: 1 }]);
    assert_eq!(
        state.gallery(),
        &GalleryView::Message(LOADING_MESSAGE.to_string())
    );
    assert!(state.view().loading);
    assert!(state.consume_dirty());

    let (_, effects) = update(state, Msg::FetchClicked);
    assert_eq!(effects, vec![Effect::FetchFeed { request_id: 2 }]);
}

#[test]
fn long_feed_renders_first_nine_in_order() {
    init_logging();
    let state = loaded(AppState::new(), images(14));

    assert_eq!(card_indices(&state), (0..GRID_LIMIT).collect::<Vec<_>>());
    assert_eq!(state.current_items().len(), 14);
    assert!(!state.view().loading);

    let GalleryView::Cards(cards) = state.gallery() else {
        unreachable!()
    };
    assert_eq!(cards[3].title, "img3");
    assert!(cards.iter().all(|card| !card.pressed));
}

#[test]
fn short_feed_renders_every_item() {
    init_logging();
    let state = loaded(AppState::new(), images(4));
    assert_eq!(card_indices(&state), vec![0, 1, 2, 3]);
}

#[test]
fn empty_feed_shows_single_placeholder_and_keeps_items_empty() {
    init_logging();
    let state = loaded(AppState::new(), Vec::new());

    assert_eq!(
        state.gallery(),
        &GalleryView::Message(EMPTY_FEED_MESSAGE.to_string())
    );
    assert!(state.current_items().is_empty());
}

#[test]
fn failed_fetch_shows_error_message_and_no_cards() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::FetchClicked);
    let (state, effects) = update(state, Msg::FeedFailed { request_id: 1 });

    assert!(effects.is_empty());
    assert_eq!(
        state.gallery(),
        &GalleryView::Message(FETCH_FAILED_MESSAGE.to_string())
    );
    assert!(state.current_items().is_empty());
    assert!(!state.view().loading);
}

#[test]
fn last_response_to_resolve_wins() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::FetchClicked);
    let (state, _) = update(state, Msg::FetchClicked);

    let (state, _) = update(
        state,
        Msg::FeedLoaded {
            request_id: 2,
            items: images(2),
        },
    );
    assert!(state.view().loading);

    let (state, _) = update(
        state,
        Msg::FeedLoaded {
            request_id: 1,
            items: images(5),
        },
    );
    assert_eq!(card_indices(&state), vec![0, 1, 2, 3, 4]);
    assert!(!state.view().loading);
}

#[test]
fn video_cards_pick_thumbnail_or_placeholder() {
    init_logging();
    let items = vec![
        FeedRecord {
            media_type: MediaType::Video,
            url: Some("https://www.youtube.com/embed/dQw4w9WgXcQ?rel=0".to_string()),
            ..FeedRecord::default()
        },
        FeedRecord {
            media_type: MediaType::Video,
            url: Some("https://apod.example/clip.mp4".to_string()),
            ..FeedRecord::default()
        },
        FeedRecord {
            media_type: MediaType::Other,
            ..FeedRecord::default()
        },
        FeedRecord {
            media_type: MediaType::Image,
            ..FeedRecord::default()
        },
    ];
    let state = loaded(AppState::new(), items);
    let GalleryView::Cards(cards) = state.gallery() else {
        panic!("expected cards");
    };

    match &cards[0].media {
        CardMedia::VideoThumbnail(thumb) => assert_eq!(
            thumb.src,
            "https://img.youtube.com/vi/dQw4w9WgXcQ/hqdefault.jpg"
        ),
        other => panic!("unexpected media {other:?}"),
    }
    assert_eq!(cards[0].title, "Untitled");
    assert_eq!(cards[1].media, CardMedia::VideoPlaceholder);
    assert_eq!(cards[2].media, CardMedia::Unavailable);
    assert_eq!(cards[3].media, CardMedia::Unavailable);
}

#[test]
fn card_click_and_keys_open_modal() {
    init_logging();
    let state = loaded(AppState::new(), images(3));

    let (state, _) = update(state, Msg::CardActivated { index: 1 });
    assert_eq!(state.selected_index(), Some(1));

    let (state, _) = update(state, Msg::CloseClicked);
    let (state, _) = update(
        state,
        Msg::CardKeyPressed {
            index: 2,
            key: Key::Other,
        },
    );
    assert!(!state.is_modal_open());

    let (state, _) = update(
        state,
        Msg::CardKeyPressed {
            index: 2,
            key: Key::Enter,
        },
    );
    assert_eq!(state.selected_index(), Some(2));

    let (state, _) = update(
        state,
        Msg::CardKeyPressed {
            index: 0,
            key: Key::Space,
        },
    );
    assert_eq!(state.selected_index(), Some(0));
}

#[test]
fn out_of_range_open_leaves_modal_closed() {
    init_logging();
    let mut state = loaded(AppState::new(), images(3));
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::CardActivated { index: 3 });
    assert!(!state.is_modal_open());
    assert!(!state.consume_dirty());

    let (mut state, _) = update(state, Msg::CardActivated { index: 42 });
    assert!(!state.is_modal_open());
    assert!(!state.consume_dirty());
}

#[test]
fn out_of_range_open_keeps_current_modal() {
    init_logging();
    let state = loaded(AppState::new(), images(3));
    let (state, _) = update(state, Msg::CardActivated { index: 1 });
    let (state, _) = update(state, Msg::CardActivated { index: 9 });

    assert_eq!(state.selected_index(), Some(1));
}

#[test]
fn every_dismiss_path_closes_and_is_idempotent() {
    init_logging();
    for dismiss in [
        Msg::BackdropClicked,
        Msg::CloseClicked,
        Msg::KeyPressed(Key::Escape),
    ] {
        let state = loaded(AppState::new(), images(2));
        let (state, _) = update(state, Msg::CardActivated { index: 0 });
        assert!(state.is_modal_open());

        let (mut state, _) = update(state, dismiss.clone());
        assert!(!state.is_modal_open());
        assert!(state.consume_dirty());

        let (mut state, effects) = update(state, dismiss);
        assert!(!state.is_modal_open());
        assert!(effects.is_empty());
        assert!(!state.consume_dirty());
    }
}

#[test]
fn other_keys_do_not_close_modal() {
    init_logging();
    let state = loaded(AppState::new(), images(2));
    let (state, _) = update(state, Msg::CardActivated { index: 0 });
    let (state, _) = update(state, Msg::KeyPressed(Key::Enter));

    assert!(state.is_modal_open());
}

#[test]
fn new_feed_closes_stale_modal() {
    init_logging();
    let state = loaded(AppState::new(), images(3));
    let (state, _) = update(state, Msg::CardActivated { index: 2 });

    let state = loaded(state, images(1));
    assert!(!state.is_modal_open());
    assert_eq!(state.current_items().len(), 1);
}

#[test]
fn started_seeds_fact_banner() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::Started { fact_seed: 6 });

    assert!(effects.is_empty());
    assert_eq!(
        state.view().fact,
        Some("There are more trees on Earth than stars in the Milky Way.")
    );
}
