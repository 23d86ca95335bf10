use std::{collections::HashMap, sync::Arc, time::Duration};

use anyhow::{anyhow, bail, Context, Result};
use tokio::{
    sync::Mutex,
    task::JoinHandle,
    time::{self, Instant, MissedTickBehavior},
};
use tokio_util::sync::CancellationToken;

use super::CarouselState;

const ENABLE_LOGS: bool = true;

use crate::{log_debug, log_info};

pub const CAROUSEL_ADVANCED_EVENT: &str = "carousel-advanced";
pub const CAROUSEL_STATE_CHANGED_EVENT: &str = "carousel-state-changed";

/// Where carousel updates go. The desktop shell forwards them to the webview.
pub trait CarouselEmitter: Send + Sync + 'static {
    fn emit_carousel(&self, event: &str, state: &CarouselState);
}

struct Rotation {
    state: Arc<Mutex<CarouselState>>,
    cancel_token: CancellationToken,
    handle: JoinHandle<()>,
}

impl Rotation {
    async fn shut_down(self, id: &str) -> Result<()> {
        self.cancel_token.cancel();
        self.handle
            .await
            .with_context(|| format!("carousel {id} rotation task failed to join"))
    }
}

/// Owns one rotation task per running carousel.
#[derive(Clone)]
pub struct CarouselController {
    rotations: Arc<Mutex<HashMap<String, Rotation>>>,
    emitter: Arc<dyn CarouselEmitter>,
}

impl CarouselController {
    pub fn new(emitter: Arc<dyn CarouselEmitter>) -> Self {
        Self {
            rotations: Arc::new(Mutex::new(HashMap::new())),
            emitter,
        }
    }

    /// Start rotating `id`. A carousel already running under the same id is
    /// replaced and its task joined before this returns.
    pub async fn start(
        &self,
        id: &str,
        slide_count: usize,
        interval: Duration,
        auto_rotate: bool,
    ) -> Result<CarouselState> {
        if interval.is_zero() {
            bail!("carousel interval must be greater than zero");
        }

        let interval_ms = u64::try_from(interval.as_millis()).unwrap_or(u64::MAX);
        let mut initial = CarouselState::new(id, slide_count, interval_ms);
        if !auto_rotate {
            initial.pause();
        }

        // Swap under one guard so concurrent starts for the same id cannot
        // leave a rotation outside the map.
        let displaced = {
            let mut rotations = self.rotations.lock().await;
            let state = Arc::new(Mutex::new(initial.clone()));
            let cancel_token = CancellationToken::new();
            let handle = tokio::spawn(rotate(
                state.clone(),
                self.emitter.clone(),
                interval,
                cancel_token.clone(),
            ));
            rotations.insert(
                id.to_string(),
                Rotation {
                    state,
                    cancel_token,
                    handle,
                },
            )
        };

        if let Some(previous) = displaced {
            log_debug!("carousel {} replaced a running rotation", id);
            previous.shut_down(id).await?;
        }

        log_info!(
            "carousel {} started with {} slides every {}ms",
            id,
            slide_count,
            interval_ms
        );
        self.emitter
            .emit_carousel(CAROUSEL_STATE_CHANGED_EVENT, &initial);
        Ok(initial)
    }

    pub async fn pause(&self, id: &str) -> Result<CarouselState> {
        self.update(id, |state| {
            state.pause();
            Ok(())
        })
        .await
    }

    pub async fn resume(&self, id: &str) -> Result<CarouselState> {
        self.update(id, |state| {
            state.resume();
            Ok(())
        })
        .await
    }

    /// Jump to a slide. The timer keeps running; whichever writes last wins.
    pub async fn select(&self, id: &str, slide: usize) -> Result<CarouselState> {
        self.update(id, |state| state.select(slide)).await
    }

    pub async fn snapshot(&self, id: &str) -> Result<CarouselState> {
        let state = self.state_handle(id).await?;
        let guard = state.lock().await;
        Ok(guard.clone())
    }

    pub async fn list(&self) -> Vec<CarouselState> {
        let handles: Vec<Arc<Mutex<CarouselState>>> = self
            .rotations
            .lock()
            .await
            .values()
            .map(|rotation| rotation.state.clone())
            .collect();

        let mut states = Vec::with_capacity(handles.len());
        for handle in handles {
            states.push(handle.lock().await.clone());
        }
        states.sort_by(|a, b| a.id.cmp(&b.id));
        states
    }

    /// Tear down a carousel. Stopping an unknown id is a no-op.
    pub async fn stop(&self, id: &str) -> Result<()> {
        let Some(rotation) = self.rotations.lock().await.remove(id) else {
            return Ok(());
        };

        rotation.shut_down(id).await?;

        log_info!("carousel {} stopped", id);
        Ok(())
    }

    pub async fn stop_all(&self) -> Result<()> {
        let ids: Vec<String> = self.rotations.lock().await.keys().cloned().collect();
        for id in ids {
            self.stop(&id).await?;
        }
        Ok(())
    }

    async fn state_handle(&self, id: &str) -> Result<Arc<Mutex<CarouselState>>> {
        self.rotations
            .lock()
            .await
            .get(id)
            .map(|rotation| rotation.state.clone())
            .ok_or_else(|| anyhow!("no carousel named '{id}'"))
    }

    async fn update<F>(&self, id: &str, apply: F) -> Result<CarouselState>
    where
        F: FnOnce(&mut CarouselState) -> Result<()>,
    {
        let state = self.state_handle(id).await?;
        let snapshot = {
            let mut guard = state.lock().await;
            apply(&mut *guard)?;
            guard.clone()
        };
        self.emitter
            .emit_carousel(CAROUSEL_STATE_CHANGED_EVENT, &snapshot);
        Ok(snapshot)
    }
}

async fn rotate(
    state: Arc<Mutex<CarouselState>>,
    emitter: Arc<dyn CarouselEmitter>,
    period: Duration,
    cancel_token: CancellationToken,
) {
    // First advance lands one full period after start.
    let mut ticker = time::interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let snapshot = {
                    let mut guard = state.lock().await;
                    if !guard.advance() {
                        continue;
                    }
                    guard.clone()
                };
                emitter.emit_carousel(CAROUSEL_ADVANCED_EVENT, &snapshot);
            }
            _ = cancel_token.cancelled() => {
                log_debug!("carousel rotation shutting down");
                break;
            }
        }
    }
}
