use crate::{CategoryFilter, DraftField, Listing, ListingDraft, ListingId};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Application start: begin loading listings and the header image.
    SessionStarted,
    /// Repository fetch finished. Empty means unavailable or no data.
    ListingsFetched(Vec<Listing>),
    /// Illustration provider finished; `None` keeps the default header image.
    IllustrationReady(Option<String>),
    /// User picked an entry in the filter bar.
    CategorySelected(CategoryFilter),
    /// User submitted the header search box.
    SearchChanged(String),
    /// User clicked "Clear Search Results".
    SearchCleared,
    /// User clicked "View All Businesses" in the empty state.
    ShowAllClicked,
    /// Submit a complete draft, bypassing the form's submit guard.
    DraftSubmitted(ListingDraft),
    /// Repository save finished for a previously submitted listing.
    SaveCompleted { listing_id: ListingId, accepted: bool },
    /// User opened the "Add Business" form.
    FormOpened,
    /// User dismissed the form; the typed draft is kept.
    FormClosed,
    /// User edited one form field.
    FormFieldEdited { field: DraftField, value: String },
    /// User clicked the form's submit button.
    FormSubmitted,
    /// UI/render tick to coalesce rendering.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
