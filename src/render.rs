use askama::Template;

use crate::dates;
use crate::fallback::{self, FallbackDetails, APPLY_LINK, PLACEHOLDER_IMAGE};
use crate::models::{Event, Post};
use crate::panel::PreviewData;

#[derive(Template)]
#[template(path = "preview.html")]
struct PreviewTemplate {
    event: EventCard,
    post: Option<PostCard>,
    apply_link: &'static str,
}

struct EventCard {
    title: String,
    description: String,
    date_line: String,
    location: String,
    details: Option<FallbackDetails>,
}

struct PostCard {
    href: String,
    image: String,
    tag: String,
    read_time: String,
    title: String,
    excerpt: String,
}

fn event_card(fetched: &Option<Event>) -> EventCard {
    // The fallback is substituted at render time only; fetched state is never
    // overwritten with it.
    let (event, details) = match fetched {
        Some(event) => (event.clone(), None),
        None => (fallback::fallback_event(), Some(fallback::fallback_details())),
    };

    EventCard {
        date_line: dates::event_date_line(&event.date),
        title: event.title,
        description: event.description,
        location: event.location,
        details,
    }
}

fn post_card(post: &Post) -> PostCard {
    PostCard {
        href: post.href(),
        image: post
            .image_url
            .clone()
            .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
        tag: post.tag.clone(),
        read_time: post.read_time.clone(),
        title: post.title.clone(),
        excerpt: post.excerpt.clone(),
    }
}

pub fn render_panel(data: &PreviewData) -> Result<String, askama::Error> {
    PreviewTemplate {
        event: event_card(&data.event),
        post: data.post.as_ref().map(post_card),
        apply_link: APPLY_LINK,
    }
    .render()
}
