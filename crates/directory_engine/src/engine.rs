use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use directory_core::Listing;
use directory_logging::{directory_debug, directory_error};

use crate::config::EngineConfig;
use crate::illustration::{GeminiIllustrator, IllustrationProvider};
use crate::wordpress::{ListingRepository, WordPressRepository};
use crate::EngineEvent;

enum EngineCommand {
    FetchListings,
    SaveListing(Listing),
    GenerateIllustration,
}

/// Runs backend calls on a background tokio runtime.
///
/// Commands return immediately; every command produces exactly one
/// [`EngineEvent`], collected with [`EngineHandle::try_recv`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(config: EngineConfig) -> Self {
        let repository = WordPressRepository::new(config.repository, config.http.clone());
        let illustrator = GeminiIllustrator::new(config.illustration, config.http);
        Self::with_collaborators(Arc::new(repository), Arc::new(illustrator))
    }

    pub fn with_collaborators(
        repository: Arc<dyn ListingRepository>,
        illustrator: Arc<dyn IllustrationProvider>,
    ) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    directory_error!("Could not start engine runtime: {}", err);
                    answer_offline(cmd_rx, event_tx);
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let repository = repository.clone();
                let illustrator = illustrator.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event =
                        handle_command(repository.as_ref(), illustrator.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
            directory_debug!("Engine command channel closed");
        });

        Self { cmd_tx, event_rx }
    }

    pub fn fetch_listings(&self) {
        self.send(EngineCommand::FetchListings);
    }

    pub fn save_listing(&self, listing: Listing) {
        self.send(EngineCommand::SaveListing(listing));
    }

    pub fn generate_illustration(&self) {
        self.send(EngineCommand::GenerateIllustration);
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }

    fn send(&self, command: EngineCommand) {
        let _ = self.cmd_tx.send(command);
    }
}

async fn handle_command(
    repository: &dyn ListingRepository,
    illustrator: &dyn IllustrationProvider,
    command: EngineCommand,
) -> EngineEvent {
    match command {
        EngineCommand::FetchListings => EngineEvent::ListingsFetched(repository.fetch_all().await),
        EngineCommand::SaveListing(listing) => {
            let accepted = repository.save(&listing).await;
            EngineEvent::SaveCompleted {
                listing_id: listing.id,
                accepted,
            }
        }
        EngineCommand::GenerateIllustration => {
            EngineEvent::IllustrationReady(illustrator.try_generate().await)
        }
    }
}

/// Without a runtime every command gets its fallback answer, so the session
/// never waits forever.
fn answer_offline(cmd_rx: mpsc::Receiver<EngineCommand>, event_tx: mpsc::Sender<EngineEvent>) {
    while let Ok(command) = cmd_rx.recv() {
        let event = match command {
            EngineCommand::FetchListings => EngineEvent::ListingsFetched(Vec::new()),
            EngineCommand::SaveListing(listing) => EngineEvent::SaveCompleted {
                listing_id: listing.id,
                accepted: false,
            },
            EngineCommand::GenerateIllustration => EngineEvent::IllustrationReady(None),
        };
        let _ = event_tx.send(event);
    }
}
