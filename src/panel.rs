use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use log::warn;

use crate::data::PreviewSource;
use crate::models::{Event, Post};
use crate::render;

/// Settled results of the two preview fetches. Each fetch owns its own slot;
/// a failure in one never touches the other.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PreviewData {
    pub event: Option<Event>,
    pub post: Option<Post>,
}

#[derive(Clone, Debug, PartialEq)]
pub enum PanelState {
    Pending,
    Settled(PreviewData),
}

/// Runs both backend reads concurrently and waits for both to settle. Fetch
/// failures are logged and collapsed into the empty case; the viewer never
/// sees an error.
pub async fn load_preview<S>(source: &S) -> PreviewData
where
    S: PreviewSource + Sync,
{
    let (event, post) = tokio::join!(source.next_upcoming_event(), source.featured_post());

    let event = event.unwrap_or_else(|err| {
        warn!("upcoming event fetch failed: {err}");
        None
    });
    let post = post.unwrap_or_else(|err| {
        warn!("featured post fetch failed: {err}");
        None
    });

    PreviewData { event, post }
}

pub struct PreviewPanel {
    state: Arc<Mutex<PanelState>>,
    alive: Arc<AtomicBool>,
}

impl PreviewPanel {
    /// Starts the joined load on the current tokio runtime and returns the
    /// panel immediately in the pending state.
    pub fn mount<S>(source: S) -> Self
    where
        S: PreviewSource + Send + Sync + 'static,
    {
        let state = Arc::new(Mutex::new(PanelState::Pending));
        let alive = Arc::new(AtomicBool::new(true));

        let task_state = Arc::clone(&state);
        let task_alive = Arc::clone(&alive);
        tokio::spawn(async move {
            let data = load_preview(&source).await;
            // The host may have torn the panel down while the fetches were
            // in flight; a late result must not land after unmount.
            if task_alive.load(Ordering::Acquire) {
                *task_state.lock().expect("panel state poisoned") = PanelState::Settled(data);
            }
        });

        Self { state, alive }
    }

    pub fn unmount(&self) {
        self.alive.store(false, Ordering::Release);
    }

    pub fn state(&self) -> PanelState {
        self.state.lock().expect("panel state poisoned").clone()
    }

    /// Empty while the fetches are pending, the full panel markup once both
    /// have settled.
    pub fn render(&self) -> Result<String, askama::Error> {
        match self.state() {
            PanelState::Pending => Ok(String::new()),
            PanelState::Settled(data) => render::render_panel(&data),
        }
    }
}
