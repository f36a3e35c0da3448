use std::fmt;

/// Kind of business a listing belongs to.
///
/// The filter bar's "All" wildcard lives in [`CategoryFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Gym,
    Electrical,
    Massage,
    LawnCare,
    Hvac,
    Barber,
    Restaurant,
    Automotive,
    NailSalon,
    Dentist,
    Cleaning,
    HairSalon,
}

impl Category {
    /// All listing categories in filter-bar order.
    pub const ALL: [Category; 12] = [
        Category::Gym,
        Category::Electrical,
        Category::Massage,
        Category::LawnCare,
        Category::Hvac,
        Category::Barber,
        Category::Restaurant,
        Category::Automotive,
        Category::NailSalon,
        Category::Dentist,
        Category::Cleaning,
        Category::HairSalon,
    ];

    /// Stable identifier, which doubles as the display label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Gym => "Gym",
            Category::Electrical => "Electrical Contractor",
            Category::Massage => "Massage Therapy",
            Category::LawnCare => "Lawn Care",
            Category::Hvac => "HVAC Contractor",
            Category::Barber => "Barber Shop",
            Category::Restaurant => "Restaurant",
            Category::Automotive => "Automotive",
            Category::NailSalon => "Nail Salon",
            Category::Dentist => "Dentist",
            Category::Cleaning => "House Cleaning",
            Category::HairSalon => "Hair Salon",
        }
    }

    /// Exact label lookup. Returns `None` for unknown labels and for "All".
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|category| category.label() == label)
    }

    /// Lenient lookup for typed input: surrounding whitespace and ASCII case
    /// are ignored. "All" is still rejected.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.label().eq_ignore_ascii_case(input))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Filter-bar selection: a single category or the "All" wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const ALL_LABEL: &'static str = "All";

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => Self::ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    /// Case-insensitive lookup used by text inputs ("all", "gym", ...).
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if input.eq_ignore_ascii_case(Self::ALL_LABEL) {
            return Some(CategoryFilter::All);
        }
        Category::parse(input).map(CategoryFilter::Only)
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }

    /// The wildcard followed by every category, as shown in the filter bar.
    pub fn choices() -> impl Iterator<Item = CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}
