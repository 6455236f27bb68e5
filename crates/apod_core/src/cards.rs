use crate::media::resolve_video_thumbnail;
use crate::{CardMedia, CardView, FeedRecord, ImageView, MediaType, GRID_LIMIT};

/// Summary cards for the first [`GRID_LIMIT`] records, in feed order.
pub(crate) fn build_cards(items: &[FeedRecord]) -> Vec<CardView> {
    items
        .iter()
        .take(GRID_LIMIT)
        .enumerate()
        .map(|(index, record)| card_view(index, record))
        .collect()
}

fn card_view(index: usize, record: &FeedRecord) -> CardView {
    let title = record
        .title
        .clone()
        .unwrap_or_else(|| "Untitled".to_string());

    let media = match (record.media_type, &record.url) {
        (MediaType::Image, Some(url)) => CardMedia::Image(ImageView {
            src: url.clone(),
            alt: title.clone(),
        }),
        (MediaType::Video, _) => match resolve_video_thumbnail(Some(record)) {
            Some(src) => CardMedia::VideoThumbnail(ImageView {
                src,
                alt: title.clone(),
            }),
            None => CardMedia::VideoPlaceholder,
        },
        _ => CardMedia::Unavailable,
    };

    CardView {
        index,
        title,
        date: record.date.clone().unwrap_or_default(),
        media,
        pressed: false,
    }
}
