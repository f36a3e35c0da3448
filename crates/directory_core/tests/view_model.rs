use directory_core::{
    update, AppState, Category, CategoryFilter, Msg, DEFAULT_HEADER_IMAGE, FEATURED_HEADING,
};

#[test]
fn default_view_shows_all_samples() {
    let view = AppState::new().view();

    assert!(!view.is_loading);
    assert_eq!(view.heading, FEATURED_HEADING);
    assert_eq!(view.status_line, "12 businesses found in Edgewater");
    assert_eq!(view.listings.len(), 12);
    assert_eq!(view.header_image, DEFAULT_HEADER_IMAGE);
    assert!(!view.show_clear_search);
    assert!(!view.show_empty_state);
    assert!(!view.form.open);
    assert!(view.form.submit_enabled);
    assert_eq!(view.form.fields.len(), 6);
}

#[test]
fn category_bar_lists_wildcard_first_and_marks_selection() {
    let (state, _) = update(
        AppState::new(),
        Msg::CategorySelected(CategoryFilter::Only(Category::Electrical)),
    );
    let view = state.view();

    assert_eq!(view.categories.len(), 13);
    assert_eq!(view.categories[0].label, "All");
    let active: Vec<_> = view
        .categories
        .iter()
        .filter(|chip| chip.active)
        .map(|chip| chip.label)
        .collect();
    assert_eq!(active, vec!["Electrical Contractor"]);
    assert_eq!(view.heading, "Electrical Contractors");
    assert_eq!(view.status_line, "1 businesses found in Edgewater");
}

#[test]
fn search_term_shows_clear_affordance() {
    let (state, _) = update(AppState::new(), Msg::SearchChanged("grill".to_string()));
    let view = state.view();

    assert!(view.show_clear_search);
    assert_eq!(view.search_term, "grill");
    assert_eq!(view.listings.len(), 1);
    assert_eq!(view.listings[0].category_label, "Restaurant");
    assert_eq!(view.listings[0].rating, 4.5);
}

#[test]
fn empty_state_is_hidden_while_loading() {
    let (state, _) = update(
        AppState::with_listings(Vec::new()),
        Msg::SessionStarted,
    );
    let view = state.view();
    assert!(view.is_loading);
    assert!(view.listings.is_empty());
    assert!(!view.show_empty_state);

    let (state, _) = update(state, Msg::ListingsFetched(Vec::new()));
    let view = state.view();
    assert!(view.show_empty_state);
    assert_eq!(view.status_line, "0 businesses found in Edgewater");
}
