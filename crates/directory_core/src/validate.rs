use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

use crate::category::Category;
use crate::listing::{DraftField, ListingDraft};

pub const NAME_MIN_CHARS: usize = 3;
pub const DESCRIPTION_MIN_CHARS: usize = 10;
/// US phone layout, `(410) 555-0101`. Digits are ASCII only.
pub const PHONE_PATTERN: &str = r"^\([0-9]{3}\) [0-9]{3}-[0-9]{4}$";

static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid phone pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    Required,
    TooShort,
    InvalidCategory,
    BadFormat,
    InvalidUrl,
}

impl ValidationError {
    /// Message shown next to `field` in the submission form.
    pub fn message(self, field: DraftField) -> &'static str {
        match (field, self) {
            (DraftField::Name, ValidationError::Required) => "Business name is required",
            (DraftField::Name, ValidationError::TooShort) => "Name must be at least 3 characters",
            (DraftField::Category, _) => "Please select a valid business category",
            (DraftField::Address, _) => "Address is required",
            (DraftField::Phone, ValidationError::BadFormat) => "Format must be (XXX) XXX-XXXX",
            (DraftField::Phone, _) => "Phone number is required",
            (DraftField::Description, ValidationError::TooShort) => {
                "Description must be at least 10 characters"
            }
            (DraftField::Description, _) => "Description is required",
            (DraftField::Image, ValidationError::InvalidUrl) => {
                "Must be a valid URL starting with http/https"
            }
            (DraftField::Image, _) => "Image URL is required",
            (_, ValidationError::Required) => "This field is required",
            (_, ValidationError::TooShort) => "Value is too short",
            (_, ValidationError::BadFormat) => "Value has the wrong format",
            (_, ValidationError::InvalidUrl) => "Value is not a valid URL",
            (_, ValidationError::InvalidCategory) => "Please select a valid business category",
        }
    }
}

/// Field-level validation result. Empty means the draft can be promoted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors {
    errors: BTreeMap<DraftField, ValidationError>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn single(field: DraftField, error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.insert(field, error);
        errors
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: DraftField) -> Option<ValidationError> {
        self.errors.get(&field).copied()
    }

    pub fn message(&self, field: DraftField) -> Option<&'static str> {
        self.get(field).map(|error| error.message(field))
    }

    pub fn insert(&mut self, field: DraftField, error: ValidationError) {
        self.errors.insert(field, error);
    }

    /// Removes the error for `field`; returns whether one was present.
    pub fn clear(&mut self, field: DraftField) -> bool {
        self.errors.remove(&field).is_some()
    }

    /// Failing fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (DraftField, ValidationError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, *error))
    }
}

/// Checks every field of `draft` independently and reports all failures.
///
/// Emptiness is judged on the trimmed value; length, phone format and URL
/// prefix are judged on the value exactly as typed.
pub fn validate_draft(draft: &ListingDraft) -> FormErrors {
    let mut errors = FormErrors::new();

    if let Some(error) = check_min_length(&draft.name, NAME_MIN_CHARS) {
        errors.insert(DraftField::Name, error);
    }

    if Category::parse(&draft.category).is_none() {
        errors.insert(DraftField::Category, ValidationError::InvalidCategory);
    }

    if draft.address.trim().is_empty() {
        errors.insert(DraftField::Address, ValidationError::Required);
    }

    if draft.phone.trim().is_empty() {
        errors.insert(DraftField::Phone, ValidationError::Required);
    } else if !matches_phone_pattern(&draft.phone) {
        errors.insert(DraftField::Phone, ValidationError::BadFormat);
    }

    if let Some(error) = check_min_length(&draft.description, DESCRIPTION_MIN_CHARS) {
        errors.insert(DraftField::Description, error);
    }

    if draft.image.trim().is_empty() {
        errors.insert(DraftField::Image, ValidationError::Required);
    } else if !draft.image.starts_with("http") {
        errors.insert(DraftField::Image, ValidationError::InvalidUrl);
    }

    errors
}

fn check_min_length(value: &str, min_chars: usize) -> Option<ValidationError> {
    if value.trim().is_empty() {
        Some(ValidationError::Required)
    } else if value.chars().count() < min_chars {
        Some(ValidationError::TooShort)
    } else {
        None
    }
}

/// Whole-string match against [`PHONE_PATTERN`].
pub fn matches_phone_pattern(phone: &str) -> bool {
    PHONE_REGEX.is_match(phone)
}
