use crate::{AppState, CategoryFilter, DraftField, Listing, ListingId, SyncStatus};

pub const FEATURED_HEADING: &str = "Featured Businesses";
pub const LOADING_STATUS: &str = "Loading local data...";
pub const LOCALITY: &str = "Edgewater";

#[derive(Debug, Clone, PartialEq)]
pub struct DirectoryViewModel {
    pub is_loading: bool,
    pub heading: String,
    pub status_line: String,
    pub header_image: String,
    pub categories: Vec<CategoryChipView>,
    pub selected_category: CategoryFilter,
    pub search_term: String,
    pub listings: Vec<ListingCardView>,
    pub show_clear_search: bool,
    pub show_empty_state: bool,
    pub form: FormView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChipView {
    pub filter: CategoryFilter,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListingCardView {
    pub id: ListingId,
    pub name: String,
    pub category_label: &'static str,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub rating: f64,
    pub image: String,
    pub sync: Option<SyncStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub open: bool,
    pub fields: Vec<FormFieldView>,
    pub submit_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormFieldView {
    pub field: DraftField,
    pub label: &'static str,
    pub value: String,
    pub error: Option<&'static str>,
}

pub(crate) fn build_view(state: &AppState) -> DirectoryViewModel {
    let selected = state.selected_category();
    let listings: Vec<ListingCardView> = state
        .visible()
        .into_iter()
        .map(|listing| card_view(state, listing))
        .collect();

    let heading = match selected {
        CategoryFilter::All => FEATURED_HEADING.to_string(),
        CategoryFilter::Only(category) => format!("{}s", category.label()),
    };
    let status_line = if state.is_loading() {
        LOADING_STATUS.to_string()
    } else {
        format!("{} businesses found in {LOCALITY}", listings.len())
    };

    let categories = CategoryFilter::choices()
        .map(|filter| CategoryChipView {
            filter,
            label: filter.label(),
            active: filter == selected,
        })
        .collect();

    let form = state.form();
    let fields = DraftField::ALL
        .into_iter()
        .map(|field| FormFieldView {
            field,
            label: field.label(),
            value: form.draft().get(field).to_string(),
            error: form.errors().message(field),
        })
        .collect();

    DirectoryViewModel {
        is_loading: state.is_loading(),
        heading,
        status_line,
        header_image: state.header_image().to_string(),
        categories,
        selected_category: selected,
        search_term: state.search_term().to_string(),
        show_clear_search: !state.search_term().is_empty(),
        show_empty_state: listings.is_empty() && !state.is_loading(),
        listings,
        form: FormView {
            open: form.is_open(),
            fields,
            submit_enabled: state.submit_enabled(),
        },
    }
}

fn card_view(state: &AppState, listing: &Listing) -> ListingCardView {
    ListingCardView {
        id: listing.id.clone(),
        name: listing.name.clone(),
        category_label: listing.category.label(),
        description: listing.description.clone(),
        address: listing.address.clone(),
        phone: listing.phone.clone(),
        rating: listing.rating,
        image: listing.image.clone(),
        sync: state.sync_status(&listing.id),
    }
}
