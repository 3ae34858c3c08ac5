//! File system watcher for the source route tree.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use log::{debug, error, info, warn};
use notify::{RecommendedWatcher, RecursiveMode};
use notify_debouncer_mini::{new_debouncer, Debouncer};

use crate::error::WatchError;

/// Watches the source root and invokes a callback once per coalesced
/// batch of changes.
///
/// The callback runs on the watch loop's own thread, so reconciliation
/// passes it triggers are serialized by construction: events arriving
/// while a pass runs pile up in the channel and are drained into the next
/// single invocation.
pub struct RouteWatcher {
    pages_dir: PathBuf,
    shutdown: Arc<AtomicBool>,
}

impl RouteWatcher {
    pub fn new(pages_dir: impl Into<PathBuf>) -> Self {
        Self {
            pages_dir: pages_dir.into(),
            shutdown: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn pages_dir(&self) -> &Path {
        &self.pages_dir
    }

    /// Signals the watch loop to stop.
    pub fn stop(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    pub fn is_stopped(&self) -> bool {
        self.shutdown.load(Ordering::Relaxed)
    }

    /// Starts watching the source root. Blocks until [`stop`] is called
    /// or the event channel disconnects.
    ///
    /// [`stop`]: RouteWatcher::stop
    pub fn watch<F>(&self, mut on_change: F) -> Result<(), WatchError>
    where
        F: FnMut(),
    {
        let (tx, rx) = std::sync::mpsc::channel();

        // 500ms debounce collapses editor write bursts into one event batch
        let mut debouncer: Debouncer<RecommendedWatcher> =
            new_debouncer(Duration::from_millis(500), tx)
                .map_err(|e| WatchError::Start(e.to_string()))?;

        debouncer
            .watcher()
            .watch(&self.pages_dir, RecursiveMode::Recursive)
            .map_err(|e| WatchError::Start(e.to_string()))?;

        info!("Watching source root: {}", self.pages_dir.display());

        loop {
            if self.shutdown.load(Ordering::Relaxed) {
                info!("Watcher shutting down");
                return Ok(());
            }

            // Timeout keeps the shutdown flag responsive
            match rx.recv_timeout(Duration::from_millis(100)) {
                Ok(Ok(events)) => {
                    let mut relevant = events
                        .iter()
                        .any(|event| is_relevant(&self.pages_dir, &event.path));

                    for event in &events {
                        debug!("Event: {}", event.path.display());
                    }

                    // Coalesce: drain whatever queued up behind this batch
                    // so one callback covers all of it
                    while let Ok(pending) = rx.try_recv() {
                        if let Ok(events) = pending {
                            relevant |= events
                                .iter()
                                .any(|event| is_relevant(&self.pages_dir, &event.path));
                        }
                    }

                    if relevant {
                        on_change();
                    }
                }
                Ok(Err(e)) => {
                    warn!("Watch error: {}", e);
                }
                Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {
                    continue;
                }
                Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => {
                    error!("Watch channel disconnected");
                    return Err(WatchError::ChannelClosed);
                }
            }
        }
    }
}

/// An event is relevant when it falls under the watched root and no path
/// segment below the root is a dotfile.
fn is_relevant(pages_dir: &Path, path: &Path) -> bool {
    match path.strip_prefix(pages_dir) {
        Ok(relative) => !relative
            .components()
            .any(|c| c.as_os_str().to_string_lossy().starts_with('.')),
        Err(_) => false,
    }
}
