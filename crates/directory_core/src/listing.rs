use std::fmt;

use crate::category::Category;
use crate::validate::{validate_draft, FormErrors, ValidationError};

/// Rating every new listing starts with until real reviews exist.
pub const DEFAULT_RATING: f64 = 5.0;

/// Opaque listing identifier. Repository ids are kept verbatim; locally
/// created listings get a `local-` prefixed id.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListingId(String);

impl ListingId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ListingId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ListingId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// One business shown in the directory.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub id: ListingId,
    pub name: String,
    pub category: Category,
    pub description: String,
    pub address: String,
    pub phone: String,
    pub rating: f64,
    pub image: String,
}

/// Raw submission form values. Everything is text until validation passes;
/// `category` holds the label picked in the form (empty when unset).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ListingDraft {
    pub name: String,
    pub category: String,
    pub address: String,
    pub phone: String,
    pub description: String,
    pub image: String,
}

/// Form fields of a [`ListingDraft`], in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DraftField {
    Name,
    Category,
    Address,
    Phone,
    Description,
    Image,
}

impl DraftField {
    pub const ALL: [DraftField; 6] = [
        DraftField::Name,
        DraftField::Category,
        DraftField::Address,
        DraftField::Phone,
        DraftField::Description,
        DraftField::Image,
    ];

    /// Field key as used by the form inputs.
    pub fn key(self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Category => "category",
            DraftField::Address => "address",
            DraftField::Phone => "phone",
            DraftField::Description => "description",
            DraftField::Image => "image",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DraftField::Name => "Business Name",
            DraftField::Category => "Category",
            DraftField::Address => "Street Address",
            DraftField::Phone => "Phone Number",
            DraftField::Description => "Description",
            DraftField::Image => "Image URL",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl ListingDraft {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Name => &self.name,
            DraftField::Category => &self.category,
            DraftField::Address => &self.address,
            DraftField::Phone => &self.phone,
            DraftField::Description => &self.description,
            DraftField::Image => &self.image,
        }
    }

    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let slot = match field {
            DraftField::Name => &mut self.name,
            DraftField::Category => &mut self.category,
            DraftField::Address => &mut self.address,
            DraftField::Phone => &mut self.phone,
            DraftField::Description => &mut self.description,
            DraftField::Image => &mut self.image,
        };
        *slot = value.into();
    }

    /// Validates the draft and, if it passes, turns it into a listing with the
    /// given id and the default rating.
    pub fn promote(self, id: ListingId) -> Result<Listing, FormErrors> {
        let errors = validate_draft(&self);
        if !errors.is_empty() {
            return Err(errors);
        }
        let category = Category::parse(&self.category).ok_or_else(|| {
            FormErrors::single(DraftField::Category, ValidationError::InvalidCategory)
        })?;
        Ok(Listing {
            id,
            name: self.name,
            category,
            description: self.description,
            address: self.address,
            phone: self.phone,
            rating: DEFAULT_RATING,
            image: self.image,
        })
    }
}
