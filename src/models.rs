use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Event {
    pub title: String,
    pub description: String,
    pub date: String, // ISO-8601 site-local timestamp, e.g. 2025-12-09T11:00:00
    pub location: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Post {
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub image_url: Option<String>,
    pub tag: String,
    pub read_time: String,
}

impl Post {
    pub fn href(&self) -> String {
        format!("/learn/{}", self.slug)
    }
}
