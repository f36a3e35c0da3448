use directory_core::{
    sample_listings, visible_listings, Category, CategoryFilter, Listing, ListingId,
};

fn ids(listings: &[&Listing]) -> Vec<String> {
    listings.iter().map(|l| l.id.to_string()).collect()
}

fn listing(id: &str, name: &str, category: Category, description: &str) -> Listing {
    Listing {
        id: ListingId::new(id),
        name: name.to_string(),
        category,
        description: description.to_string(),
        address: "1 Main St".to_string(),
        phone: "(410) 555-0000".to_string(),
        rating: 4.0,
        image: "https://example.com/a.jpg".to_string(),
    }
}

#[test]
fn all_with_empty_term_is_identity() {
    let listings = sample_listings();
    let visible = visible_listings(&listings, CategoryFilter::All, "");
    let expected: Vec<&Listing> = listings.iter().collect();
    assert_eq!(visible, expected);
}

#[test]
fn empty_collection_yields_empty_result() {
    assert!(visible_listings(&[], CategoryFilter::All, "").is_empty());
    assert!(visible_listings(&[], CategoryFilter::Only(Category::Gym), "gym").is_empty());
}

#[test]
fn category_selection_keeps_only_that_category() {
    let mut listings = sample_listings();
    listings.push(listing("13", "Bayside Boxing", Category::Gym, "Boxing classes."));

    for category in Category::ALL {
        let visible = visible_listings(&listings, CategoryFilter::Only(category), "");
        assert!(!visible.is_empty(), "no sample for {category}");
        assert!(visible.iter().all(|l| l.category == category));
    }

    let gyms = visible_listings(&listings, CategoryFilter::Only(Category::Gym), "");
    assert_eq!(ids(&gyms), vec!["1", "13"]);
}

#[test]
fn search_is_case_insensitive_on_name() {
    let listings = sample_listings();
    let visible = visible_listings(&listings, CategoryFilter::All, "EDGEwater");
    assert_eq!(ids(&visible), vec!["1", "10"]);
}

#[test]
fn search_matches_description() {
    let listings = sample_listings();
    let visible = visible_listings(&listings, CategoryFilter::All, "seafood");
    assert_eq!(ids(&visible), vec!["7"]);
}

#[test]
fn search_matches_category_label() {
    let listings = sample_listings();
    let visible = visible_listings(&listings, CategoryFilter::All, "contractor");
    assert_eq!(ids(&visible), vec!["2", "5"]);
}

#[test]
fn category_and_search_are_combined() {
    let listings = sample_listings();
    let visible = visible_listings(&listings, CategoryFilter::Only(Category::Gym), "dental");
    assert!(visible.is_empty());

    let visible = visible_listings(&listings, CategoryFilter::Only(Category::Dentist), "dental");
    assert_eq!(ids(&visible), vec!["10"]);
}

#[test]
fn whitespace_in_term_is_significant() {
    let listings = sample_listings();
    assert_eq!(
        ids(&visible_listings(&listings, CategoryFilter::All, " grill")),
        vec!["7"]
    );
    assert!(visible_listings(&listings, CategoryFilter::All, "grill ").is_empty());
}

#[test]
fn relative_order_is_preserved() {
    let listings = vec![
        listing("c", "Cedar Cuts", Category::Barber, "Fades and trims."),
        listing("a", "Anchor Cuts", Category::Barber, "Straight razor shaves."),
        listing("b", "Bay Gym", Category::Gym, "Weights."),
    ];
    let visible = visible_listings(&listings, CategoryFilter::All, "cuts");
    assert_eq!(ids(&visible), vec!["c", "a"]);
}

#[test]
fn search_result_is_exactly_the_matching_listings() {
    let listings = sample_listings();
    for term in ["care", "ED", "o", "spa", "zzz"] {
        let needle = term.to_lowercase();
        let visible = visible_listings(&listings, CategoryFilter::All, term);
        let expected: Vec<&Listing> = listings
            .iter()
            .filter(|l| {
                l.name.to_lowercase().contains(&needle)
                    || l.description.to_lowercase().contains(&needle)
                    || l.category.label().to_lowercase().contains(&needle)
            })
            .collect();
        assert_eq!(visible, expected, "term {term:?}");
    }
}
