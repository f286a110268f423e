//! Change feed supervision.
//!
//! One long-lived pump task per feed pulls events and dispatches each as an
//! independently tracked reaction task. A failing reaction is reported on
//! the structured failure channel and logged; the feed keeps running. The
//! whole reactor shuts down through a watch channel.

use crate::{
    Outcome, ProposalAnnouncedHandler, ReactionConfig, RoomConnectedHandler, TaskAnnouncedHandler,
};
use herald_error::{HeraldError, HeraldResult};
use herald_interface::{ChatPlatform, DocumentStore, ResumeStore};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_stream::StreamExt;
use tracing::{debug, error, info, instrument, warn};

const FAILURE_CHANNEL_CAPACITY: usize = 64;

/// The three observed change feeds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum FeedKind {
    /// Rooms acquiring a guild link.
    #[display("rooms")]
    Rooms,
    /// Newly created tasks.
    #[display("tasks")]
    Tasks,
    /// Newly created proposals.
    #[display("proposals")]
    Proposals,
}

impl FeedKind {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Rooms => "rooms",
            Self::Tasks => "tasks",
            Self::Proposals => "proposals",
        }
    }
}

/// A reaction that failed, reported through the supervisor channel.
#[derive(Debug)]
pub struct ReactionFailure {
    /// Feed the event came from.
    pub feed: FeedKind,
    /// Id of the document whose reaction failed.
    pub document_id: String,
    /// The error the reaction surfaced.
    pub error: HeraldError,
}

/// Supervises the three change feeds and dispatches reactions.
pub struct Reactor<S, C, R: ?Sized> {
    store: Arc<S>,
    chat: Arc<C>,
    resume: Arc<R>,
    config: Arc<ReactionConfig>,
}

impl<S, C, R> Reactor<S, C, R>
where
    S: DocumentStore + 'static,
    C: ChatPlatform + 'static,
    R: ResumeStore + ?Sized + 'static,
{
    /// Build a reactor over the injected capabilities.
    pub fn new(store: Arc<S>, chat: Arc<C>, resume: Arc<R>, config: ReactionConfig) -> Self {
        Self {
            store,
            chat,
            resume,
            config: Arc::new(config),
        }
    }

    /// Subscribe to all three feeds and start the pump tasks.
    ///
    /// Resume positions come from the [`ResumeStore`], falling back to the
    /// configured cutoff for feeds with no recorded position.
    #[instrument(skip(self))]
    pub async fn spawn(self) -> HeraldResult<ReactorHandle> {
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let (failure_tx, failure_rx) = mpsc::channel(FAILURE_CHANNEL_CAPACITY);

        let cutoff = *self.config.cutoff();

        let rooms_since = self
            .resume
            .load(FeedKind::Rooms.as_str())
            .await?
            .unwrap_or(cutoff);
        let tasks_since = self
            .resume
            .load(FeedKind::Tasks.as_str())
            .await?
            .unwrap_or(cutoff);
        let proposals_since = self
            .resume
            .load(FeedKind::Proposals.as_str())
            .await?
            .unwrap_or(cutoff);

        info!(
            %rooms_since,
            %tasks_since,
            %proposals_since,
            "subscribing to change feeds"
        );

        let mut rooms = self.store.subscribe_room_connections(rooms_since).await?;
        let mut tasks = self.store.subscribe_new_tasks(tasks_since).await?;
        let mut proposals = self.store.subscribe_new_proposals(proposals_since).await?;

        let room_handler = Arc::new(RoomConnectedHandler::new(
            self.store.clone(),
            self.chat.clone(),
            self.config.clone(),
        ));
        let task_handler = Arc::new(TaskAnnouncedHandler::new(
            self.store.clone(),
            self.chat.clone(),
            self.config.clone(),
        ));
        let proposal_handler = Arc::new(ProposalAnnouncedHandler::new(
            self.store.clone(),
            self.chat.clone(),
            self.config.clone(),
        ));

        let mut pumps = Vec::with_capacity(3);

        {
            let handler = room_handler;
            let failures = failure_tx.clone();
            let mut shutdown = shutdown_rx.clone();
            pumps.push(tokio::spawn(async move {
                loop {
                    tokio::select! {
                        _ = shutdown.changed() => break,
                        event = rooms.next() => {
                            let Some(event) = event else { break };
                            let handler = handler.clone();
                            let failures = failures.clone();
                            let document_id = event.id.clone();
                            tokio::spawn(async move {
                                report(
                                    FeedKind::Rooms,
                                    document_id,
                                    handler.handle(event).await,
                                    &failures,
                                );
                            });
                        }
                    }
                }
                debug!("room feed pump stopped");
            }));
        }

        {
            let handler = task_handler;
            let failures = failure_tx.clone();
            let resume = self.resume.clone();
            let mut shutdown = shutdown_rx.clone();
            pumps.push(tokio::spawn(async move {
                loop {
                    tokio::select! {
                        _ = shutdown.changed() => break,
                        event = tasks.next() => {
                            let Some(event) = event else { break };
                            let handler = handler.clone();
                            let failures = failures.clone();
                            let resume = resume.clone();
                            let document_id = event.id.clone();
                            let created = event.document.created;
                            tokio::spawn(async move {
                                let result = handler.handle(event).await;
                                let completed =
                                    matches!(result, Ok(ref outcome) if outcome.is_completed());
                                report(FeedKind::Tasks, document_id, result, &failures);
                                if completed
                                    && let Err(e) =
                                        resume.record(FeedKind::Tasks.as_str(), created).await
                                {
                                    warn!(error = %e, "failed to record task resume position");
                                }
                            });
                        }
                    }
                }
                debug!("task feed pump stopped");
            }));
        }

        {
            let handler = proposal_handler;
            let failures = failure_tx;
            let resume = self.resume.clone();
            let mut shutdown = shutdown_rx;
            pumps.push(tokio::spawn(async move {
                loop {
                    tokio::select! {
                        _ = shutdown.changed() => break,
                        event = proposals.next() => {
                            let Some(event) = event else { break };
                            let handler = handler.clone();
                            let failures = failures.clone();
                            let resume = resume.clone();
                            let document_id = event.id.clone();
                            let created = event.document.created;
                            tokio::spawn(async move {
                                let result = handler.handle(event).await;
                                let completed =
                                    matches!(result, Ok(ref outcome) if outcome.is_completed());
                                report(FeedKind::Proposals, document_id, result, &failures);
                                if completed
                                    && let Err(e) =
                                        resume.record(FeedKind::Proposals.as_str(), created).await
                                {
                                    warn!(error = %e, "failed to record proposal resume position");
                                }
                            });
                        }
                    }
                }
                debug!("proposal feed pump stopped");
            }));
        }

        Ok(ReactorHandle {
            shutdown: shutdown_tx,
            pumps,
            failures: failure_rx,
        })
    }
}

/// Log a reaction result and forward failures to the supervisor channel.
fn report(
    feed: FeedKind,
    document_id: String,
    result: HeraldResult<Outcome>,
    failures: &mpsc::Sender<ReactionFailure>,
) {
    match result {
        Ok(Outcome::Completed) => {
            info!(%feed, document_id, "reaction completed");
        }
        Ok(Outcome::Skipped(reason)) => {
            debug!(%feed, document_id, %reason, "reaction skipped");
        }
        Err(error) => {
            error!(%feed, document_id, %error, "reaction failed");
            // The channel is best-effort observability; a full or closed
            // channel must not stall the feed.
            if let Err(e) = failures.try_send(ReactionFailure {
                feed,
                document_id,
                error,
            }) {
                warn!(error = %e, "failure channel unavailable");
            }
        }
    }
}

/// Running reactor lifecycle handle.
pub struct ReactorHandle {
    shutdown: watch::Sender<bool>,
    pumps: Vec<JoinHandle<()>>,
    failures: mpsc::Receiver<ReactionFailure>,
}

impl ReactorHandle {
    /// Receiver of structured reaction failures.
    pub fn failures(&mut self) -> &mut mpsc::Receiver<ReactionFailure> {
        &mut self.failures
    }

    /// Signal shutdown and wait for the pump tasks to stop.
    ///
    /// In-flight reactions are not cancelled; they run to completion on the
    /// runtime.
    pub async fn shutdown(self) {
        let _ = self.shutdown.send(true);
        for pump in self.pumps {
            if let Err(e) = pump.await {
                warn!(error = %e, "feed pump panicked");
            }
        }
    }
}
