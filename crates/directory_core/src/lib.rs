//! Directory core: entity model, filtering, validation and the pure session
//! state machine. No IO happens here; the shell executes [`Effect`]s.
mod category;
mod effect;
mod filter;
mod form;
mod listing;
mod msg;
mod samples;
mod state;
mod update;
mod validate;
mod view_model;

pub use category::{Category, CategoryFilter};
pub use effect::Effect;
pub use filter::visible_listings;
pub use form::FormState;
pub use listing::{DraftField, Listing, ListingDraft, ListingId, DEFAULT_RATING};
pub use msg::Msg;
pub use samples::sample_listings;
pub use state::{AppState, SyncStatus, DEFAULT_HEADER_IMAGE};
pub use update::update;
pub use validate::{
    matches_phone_pattern, validate_draft, FormErrors, ValidationError, DESCRIPTION_MIN_CHARS,
    NAME_MIN_CHARS, PHONE_PATTERN,
};
pub use view_model::{
    CategoryChipView, DirectoryViewModel, FormFieldView, FormView, ListingCardView,
    FEATURED_HEADING, LOADING_STATUS,
};
