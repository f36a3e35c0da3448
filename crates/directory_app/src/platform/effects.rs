use std::time::Duration;

use directory_core::{Effect, Msg};
use directory_engine::{EngineEvent, EngineHandle};
use directory_logging::{directory_info, directory_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(engine: EngineHandle) -> Self {
        Self { engine }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchListings => {
                    directory_info!("FetchListings");
                    self.engine.fetch_listings();
                }
                Effect::SaveListing(listing) => {
                    directory_info!(
                        "SaveListing id={} name_len={} category={}",
                        listing.id,
                        listing.name.len(),
                        listing.category
                    );
                    self.engine.save_listing(listing);
                }
                Effect::GenerateIllustration => {
                    directory_info!("GenerateIllustration");
                    self.engine.generate_illustration();
                }
            }
        }
    }

    /// Engine results that arrived since the last call, as session messages.
    pub fn drain(&self) -> Vec<Msg> {
        std::iter::from_fn(|| self.engine.try_recv())
            .map(event_to_msg)
            .collect()
    }

    /// Blocks up to `timeout` for the next engine result.
    pub fn recv_timeout(&self, timeout: Duration) -> Option<Msg> {
        self.engine.recv_timeout(timeout).map(event_to_msg)
    }
}

fn event_to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ListingsFetched(listings) => {
            if listings.is_empty() {
                directory_info!("No remote listings; keeping bundled listings");
            }
            Msg::ListingsFetched(listings)
        }
        EngineEvent::SaveCompleted {
            listing_id,
            accepted,
        } => {
            if !accepted {
                directory_warn!("Listing {} was not accepted by the repository", listing_id);
            }
            Msg::SaveCompleted {
                listing_id,
                accepted,
            }
        }
        EngineEvent::IllustrationReady(image) => Msg::IllustrationReady(image),
    }
}
