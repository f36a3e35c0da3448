use crate::Listing;

/// Work the shell must perform on behalf of the session.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Load the current collection from the listing repository.
    FetchListings,
    /// Persist a listing that is already shown optimistically.
    SaveListing(Listing),
    /// Ask the illustration provider for a header image.
    GenerateIllustration,
}
