use crate::embed::{featured_embed, generic_embed, known_platform_embed};
use crate::media::{effective_source, extract_known_video_id, is_absolute_url, resolve_video_thumbnail};
use crate::{DetailMedia, DetailView, FeedRecord, ImageView, MediaType};

/// Builds the modal content for `record` at position `index`.
pub fn present(index: usize, record: &FeedRecord) -> DetailView {
    let media = match record.media_type {
        MediaType::Image => DetailMedia::Image(ImageView {
            src: record
                .hdurl
                .as_ref()
                .or(record.url.as_ref())
                .cloned()
                .unwrap_or_default(),
            alt: title_or(record, "Space image"),
        }),
        MediaType::Video => present_video(record),
        MediaType::Other => DetailMedia::Message("Media not available.".to_string()),
    };

    DetailView {
        index,
        media,
        title: record.title.clone().unwrap_or_default(),
        date: record.date.clone().unwrap_or_default(),
        explanation: record.explanation.clone().unwrap_or_default(),
    }
}

fn present_video(record: &FeedRecord) -> DetailMedia {
    let source = effective_source(record.url.as_deref()).unwrap_or_default();
    let frame_title = title_or(record, "Video");

    if let Some(video_id) = extract_known_video_id(Some(&source)) {
        let frame = featured_embed(&video_id)
            .unwrap_or_else(|| known_platform_embed(&video_id, &frame_title));
        return DetailMedia::Embed(frame);
    }

    if is_absolute_url(&source) {
        return DetailMedia::ExternalFrame {
            frame: generic_embed(&source, &frame_title),
            link: source,
        };
    }

    let thumbnail = resolve_video_thumbnail(Some(record)).map(|src| ImageView {
        src,
        alt: title_or(record, "Video thumbnail"),
    });
    let link = record.url.clone();
    if thumbnail.is_none() && link.is_none() {
        return DetailMedia::Message("Video not available.".to_string());
    }
    DetailMedia::Fallback { thumbnail, link }
}

fn title_or(record: &FeedRecord, fallback: &str) -> String {
    record
        .title
        .clone()
        .unwrap_or_else(|| fallback.to_string())
}
