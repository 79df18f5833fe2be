use anyhow::{Context, Result};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::path::Path;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::Duration;

type EventResult = notify::Result<Event>;

/// Calls `on_change` after every burst of filesystem activity under `root`
/// or on `config_file`.
///
/// Runs never overlap: events arriving while `on_change` executes are queued
/// and folded into the next burst. A failed run is logged and watching
/// continues.
pub fn watch<F>(
    root: &Path,
    output_target: &Path,
    config_file: Option<&Path>,
    debounce: Duration,
    mut on_change: F,
) -> Result<()>
where
    F: FnMut() -> Result<()>,
{
    let (tx, rx) = mpsc::channel::<EventResult>();
    let mut watcher = notify::recommended_watcher(move |res: EventResult| {
        let _ = tx.send(res);
    })
    .context("Failed to create file watcher")?;

    watcher
        .watch(root, RecursiveMode::Recursive)
        .with_context(|| format!("Failed to watch {}", root.display()))?;
    if let Some(config_file) = config_file {
        watch_config_file(&mut watcher, config_file);
    }
    log::info!("Watching {} for changes", root.display());

    while let Some(rebuild) = next_batch(&rx, debounce, output_target) {
        // editors often replace the file on save, which drops the old watch
        if let Some(config_file) = config_file {
            watch_config_file(&mut watcher, config_file);
        }
        if !rebuild {
            continue;
        }
        log::debug!("Change detected, regenerating");
        if let Err(err) = on_change() {
            log::error!("{:#}", err);
        }
    }

    Ok(())
}

fn watch_config_file<W: Watcher>(watcher: &mut W, config_file: &Path) {
    if let Err(err) = watcher.watch(config_file, RecursiveMode::NonRecursive) {
        log::debug!("Cannot watch {}: {}", config_file.display(), err);
    }
}

/// Waits for the next event, then swallows follow-ups until `debounce`
/// passes quietly. Returns `None` once the watcher has shut down.
fn next_batch(rx: &Receiver<EventResult>, debounce: Duration, output_target: &Path) -> Option<bool> {
    let first = rx.recv().ok()?;
    let mut rebuild = is_relevant(&first, output_target);

    loop {
        match rx.recv_timeout(debounce) {
            Ok(event) => rebuild |= is_relevant(&event, output_target),
            Err(RecvTimeoutError::Timeout | RecvTimeoutError::Disconnected) => return Some(rebuild),
        }
    }
}

/// Reads and our own writes to the generated file never trigger a run.
fn is_relevant(event: &EventResult, output_target: &Path) -> bool {
    match event {
        Ok(event) => {
            !matches!(event.kind, EventKind::Access(_))
                && event.paths.iter().any(|path| path != output_target)
        }
        Err(err) => {
            log::warn!("Watcher error: {}", err);
            false
        }
    }
}
