use std::collections::BTreeMap;

use crate::filter::visible_listings;
use crate::form::FormState;
use crate::samples::sample_listings;
use crate::view_model::{build_view, DirectoryViewModel};
use crate::{CategoryFilter, FormErrors, Listing, ListingDraft, ListingId};

/// Header image used until (or unless) the illustration provider delivers one.
pub const DEFAULT_HEADER_IMAGE: &str =
    "https://images.unsplash.com/photo-1517048676732-d65bc937f952?auto=format&fit=crop&q=80&w=2000";

const LOCAL_ID_PREFIX: &str = "local-";

/// Remote confirmation state of a listing submitted in this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncStatus {
    Pending,
    Synced,
    Failed,
}

/// Directory session: the listing collection plus the visitor's selection.
#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    listings: Vec<Listing>,
    selected_category: CategoryFilter,
    search_term: String,
    is_loading: bool,
    header_image: String,
    form: FormState,
    sync: BTreeMap<ListingId, SyncStatus>,
    next_local_id: u64,
    dirty: bool,
}

/// An empty directory; [`AppState::new`] is the seeded session.
impl Default for AppState {
    fn default() -> Self {
        Self::with_listings(Vec::new())
    }
}

impl AppState {
    /// Session seeded with the bundled sample listings.
    pub fn new() -> Self {
        Self::with_listings(sample_listings())
    }

    pub fn with_listings(listings: Vec<Listing>) -> Self {
        Self {
            listings,
            selected_category: CategoryFilter::All,
            search_term: String::new(),
            is_loading: false,
            header_image: DEFAULT_HEADER_IMAGE.to_string(),
            form: FormState::default(),
            sync: BTreeMap::new(),
            next_local_id: 1,
            dirty: false,
        }
    }

    /// Starts the local id counter at `seed` (e.g. the wall clock in millis),
    /// so ids also differ between sessions.
    pub fn with_local_id_seed(mut self, seed: u64) -> Self {
        self.next_local_id = seed;
        self
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn selected_category(&self) -> CategoryFilter {
        self.selected_category
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn header_image(&self) -> &str {
        &self.header_image
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn sync_status(&self, id: &ListingId) -> Option<SyncStatus> {
        self.sync.get(id).copied()
    }

    /// Number of saves issued but not yet answered by the repository.
    pub fn pending_saves(&self) -> usize {
        self.sync
            .values()
            .filter(|status| **status == SyncStatus::Pending)
            .count()
    }

    /// The form's submit button is disabled while a save is outstanding.
    pub fn submit_enabled(&self) -> bool {
        self.pending_saves() == 0
    }

    pub fn visible(&self) -> Vec<&Listing> {
        visible_listings(&self.listings, self.selected_category, &self.search_term)
    }

    pub fn view(&self) -> DirectoryViewModel {
        build_view(self)
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub(crate) fn begin_loading(&mut self) {
        self.is_loading = true;
        self.mark_dirty();
    }

    /// One atomic replace; an empty result keeps what is already shown.
    pub(crate) fn finish_loading(&mut self, fetched: Vec<Listing>) {
        if !fetched.is_empty() {
            self.listings = fetched;
        }
        self.is_loading = false;
        self.mark_dirty();
    }

    pub(crate) fn set_header_image(&mut self, image: Option<String>) {
        if let Some(image) = image {
            self.header_image = image;
            self.mark_dirty();
        }
    }

    pub(crate) fn select_category(&mut self, selected: CategoryFilter) {
        if self.selected_category != selected {
            self.selected_category = selected;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_search_term(&mut self, term: String) {
        if self.search_term != term {
            self.search_term = term;
            self.mark_dirty();
        }
    }

    pub(crate) fn reset_filters(&mut self) {
        self.select_category(CategoryFilter::All);
        self.set_search_term(String::new());
    }

    /// Validates `draft`, then prepends the new listing and marks it pending.
    ///
    /// On success the returned listing still has to be saved remotely; the
    /// local insert is never rolled back.
    pub(crate) fn submit(&mut self, draft: ListingDraft) -> Result<Listing, FormErrors> {
        let id = self.next_free_local_id();
        let listing = draft.promote(id)?;
        self.next_local_id += 1;
        self.sync.insert(listing.id.clone(), SyncStatus::Pending);
        self.listings.insert(0, listing.clone());
        self.reset_filters();
        self.mark_dirty();
        Ok(listing)
    }

    /// Unknown ids are ignored.
    pub(crate) fn record_save(&mut self, id: &ListingId, accepted: bool) {
        if let Some(status) = self.sync.get_mut(id) {
            *status = if accepted {
                SyncStatus::Synced
            } else {
                SyncStatus::Failed
            };
            self.mark_dirty();
        }
    }

    /// Next free local id; skips values already present in the collection.
    fn next_free_local_id(&mut self) -> ListingId {
        loop {
            let candidate = ListingId::new(format!("{LOCAL_ID_PREFIX}{}", self.next_local_id));
            if !self.listings.iter().any(|listing| listing.id == candidate) {
                return candidate;
            }
            self.next_local_id += 1;
        }
    }
}
