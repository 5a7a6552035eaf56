//! Moves blocking store calls off the render loop and hands their results
//! back through one queue that only the loop drains.

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::{Handle, Runtime};
use tokio::sync::Semaphore;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinSet;

const MAX_PARALLEL_FETCHES: usize = 8;

/// What a task's result will overwrite. Each target carries a generation;
/// results from an older generation are dropped on drain.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub(in crate::tui_shell) enum Target {
    Projects,
    Collections,
    TreeRoot,
    Node(String),
    Details,
}

struct Envelope<U> {
    target: Target,
    generation: u64,
    update: U,
}

pub(in crate::tui_shell) struct Bridge<U> {
    // Taken on drop so a blocked store call cannot hold up exit.
    runtime: Option<Runtime>,
    handle: Handle,
    tx: UnboundedSender<Envelope<U>>,
    rx: UnboundedReceiver<Envelope<U>>,
    generations: HashMap<Target, u64>,
    in_flight: usize,
}

impl<U: Send + 'static> Bridge<U> {
    pub(in crate::tui_shell) fn new() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("firetree-io")
            .build()
            .context("build background runtime")?;
        let (tx, rx) = unbounded_channel();
        Ok(Self {
            handle: runtime.handle().clone(),
            runtime: Some(runtime),
            tx,
            rx,
            generations: HashMap::new(),
            in_flight: 0,
        })
    }

    pub(in crate::tui_shell) fn in_flight(&self) -> usize {
        self.in_flight
    }

    /// Current generation of `target`; lets a task that writes a second
    /// target check later whether that target moved on.
    pub(in crate::tui_shell) fn generation(&self, target: &Target) -> u64 {
        self.generations.get(target).copied().unwrap_or(0)
    }

    /// Advances `target` so anything already running for it is ignored.
    pub(in crate::tui_shell) fn invalidate(&mut self, target: &Target) -> u64 {
        let generation = self.generations.entry(target.clone()).or_insert(0);
        *generation += 1;
        *generation
    }

    pub(in crate::tui_shell) fn spawn<F>(&mut self, target: Target, job: F)
    where
        F: FnOnce() -> U + Send + 'static,
    {
        let generation = self.invalidate(&target);
        let tx = self.tx.clone();
        self.in_flight += 1;
        tracing::debug!(?target, generation, "spawn");
        self.handle.spawn_blocking(move || {
            let update = job();
            let _ = tx.send(Envelope {
                target,
                generation,
                update,
            });
        });
    }

    /// Runs `fetch` over every input concurrently and posts one update built
    /// by `combine` once all of them have finished. Results keep input order.
    pub(in crate::tui_shell) fn spawn_batch<I, R, F, C>(
        &mut self,
        target: Target,
        inputs: Vec<I>,
        fetch: F,
        combine: C,
    ) where
        I: Send + 'static,
        R: Send + 'static,
        F: Fn(I) -> R + Send + Sync + 'static,
        C: FnOnce(Vec<R>) -> U + Send + 'static,
    {
        let generation = self.invalidate(&target);
        let tx = self.tx.clone();
        let fetch = Arc::new(fetch);
        let permits = Arc::new(Semaphore::new(MAX_PARALLEL_FETCHES));
        self.in_flight += 1;
        tracing::debug!(?target, generation, batch = inputs.len(), "spawn batch");

        self.handle.spawn(async move {
            let mut set = JoinSet::new();
            for (i, input) in inputs.into_iter().enumerate() {
                let fetch = Arc::clone(&fetch);
                let permits = Arc::clone(&permits);
                set.spawn(async move {
                    let _permit = permits.acquire_owned().await.ok();
                    let out = tokio::task::spawn_blocking(move || fetch(input)).await;
                    (i, out)
                });
            }

            let mut results = Vec::new();
            while let Some(joined) = set.join_next().await {
                match joined {
                    Ok((i, Ok(r))) => results.push((i, r)),
                    Ok((_, Err(err))) | Err(err) => {
                        tracing::warn!(error = %err, "batch task failed");
                    }
                }
            }
            results.sort_by_key(|(i, _)| *i);
            let update = combine(results.into_iter().map(|(_, r)| r).collect());
            let _ = tx.send(Envelope {
                target,
                generation,
                update,
            });
        });
    }

    /// Everything that finished since the last drain, minus stale results.
    pub(in crate::tui_shell) fn drain(&mut self) -> Vec<U> {
        let mut out = Vec::new();
        while let Ok(env) = self.rx.try_recv() {
            self.in_flight = self.in_flight.saturating_sub(1);
            let current = self.generation(&env.target);
            if env.generation != current {
                tracing::debug!(
                    kind = ?env.target,
                    generation = env.generation,
                    current,
                    "discard stale result"
                );
                continue;
            }
            out.push(env.update);
        }
        out
    }

    /// Blocks until nothing is in flight or `timeout` passes.
    #[cfg(test)]
    pub(in crate::tui_shell) fn settle(&mut self, timeout: std::time::Duration) -> Vec<U> {
        let deadline = std::time::Instant::now() + timeout;
        let mut out = self.drain();
        while self.in_flight > 0 && std::time::Instant::now() < deadline {
            std::thread::sleep(std::time::Duration::from_millis(5));
            out.extend(self.drain());
        }
        out
    }
}

impl<U> Drop for Bridge<U> {
    fn drop(&mut self) {
        if let Some(runtime) = self.runtime.take() {
            tracing::debug!(in_flight = self.in_flight, "stopping background runtime");
            runtime.shutdown_background();
        }
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/bridge_tests.rs"]
mod tests;
