pub mod oembed;
pub mod opengraph;

pub use oembed::OEmbedProvider;
pub use opengraph::OpenGraphProvider;

use crate::core::{HttpGet, Provider};
use std::sync::Arc;

/// The stock provider set, in priority order. Sources with a real oEmbed
/// endpoint come first; OpenGraph scraping covers the rest.
pub fn defaults(http: Arc<dyn HttpGet>) -> Vec<Box<dyn Provider>> {
    vec![
        Box::new(OEmbedProvider::new(
            "YouTube",
            "https://www.youtube.com/oembed",
            &[r"(?i)youtube\.com/watch", r"(?i)youtu\.be/"],
            http.clone(),
        )),
        Box::new(OEmbedProvider::new(
            "Vimeo",
            "https://vimeo.com/api/oembed.json",
            &[r"(?i)vimeo\.com/\d+"],
            http.clone(),
        )),
        Box::new(OEmbedProvider::new(
            "Dailymotion",
            "https://www.dailymotion.com/services/oembed",
            &[r"(?i)dailymotion\.com/video/", r"(?i)dai\.ly/"],
            http.clone(),
        )),
        Box::new(OEmbedProvider::new(
            "Flickr",
            "https://www.flickr.com/services/oembed",
            &[r"(?i)flickr\.com/photos/", r"(?i)flic\.kr/p/"],
            http.clone(),
        )),
        Box::new(OEmbedProvider::new(
            "SoundCloud",
            "https://soundcloud.com/oembed",
            &[r"(?i)soundcloud\.com/[^/]+/"],
            http.clone(),
        )),
        Box::new(OpenGraphProvider::new(
            "TED",
            &[r"(?i)ted\.com/talks/"],
            http.clone(),
        )),
        Box::new(OpenGraphProvider::new(
            "Bandcamp",
            &[r"(?i)bandcamp\.com/(album|track)/"],
            http,
        )),
    ]
}
