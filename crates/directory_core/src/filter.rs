use crate::category::CategoryFilter;
use crate::listing::Listing;

/// Listings matching both the category selection and the search term, in
/// their original order.
///
/// The term is matched case-insensitively against the name, the description
/// and the category label. It is used as given: surrounding whitespace is part
/// of the needle.
pub fn visible_listings<'a>(
    listings: &'a [Listing],
    selected: CategoryFilter,
    term: &str,
) -> Vec<&'a Listing> {
    let needle = term.to_lowercase();
    listings
        .iter()
        .filter(|listing| selected.matches(listing.category))
        .filter(|listing| matches_search(listing, &needle))
        .collect()
}

/// `needle` must already be lowercased.
fn matches_search(listing: &Listing, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        listing.name.as_str(),
        listing.description.as_str(),
        listing.category.label(),
    ]
    .iter()
    .any(|haystack| haystack.to_lowercase().contains(needle))
}
