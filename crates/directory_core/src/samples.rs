use crate::category::Category;
use crate::listing::{Listing, ListingId};

/// (id, name, category, description, street address, phone suffix, rating, image seed)
const SAMPLES: [(&str, &str, Category, &str, &str, &str, f64, &str); 12] = [
    (
        "1",
        "Edgewater Fitness Center",
        Category::Gym,
        "Premier health and wellness facility with personal training.",
        "123 Solomons Island Rd",
        "0101",
        4.8,
        "gym",
    ),
    (
        "2",
        "Volt Masters Electrical",
        Category::Electrical,
        "Expert residential and commercial electrical solutions.",
        "456 Central Ave",
        "0202",
        4.9,
        "electric",
    ),
    (
        "3",
        "Serenity Massage Therapy",
        Category::Massage,
        "Relaxing massage and holistic wellness treatments.",
        "789 Mayo Rd",
        "0303",
        4.7,
        "massage",
    ),
    (
        "4",
        "Green Thumb Lawn Care",
        Category::LawnCare,
        "Full-service landscaping and lawn maintenance.",
        "321 Shoreham Beach Rd",
        "0404",
        4.6,
        "lawn",
    ),
    (
        "5",
        "Climate Control HVAC",
        Category::Hvac,
        "Reliable heating, cooling, and air quality experts.",
        "555 Stepneys Ln",
        "0505",
        4.9,
        "hvac",
    ),
    (
        "6",
        "Main Street Barber Shop",
        Category::Barber,
        "Classic haircuts and beard grooming for modern gentlemen.",
        "101 South River Rd",
        "0606",
        4.8,
        "barber",
    ),
    (
        "7",
        "The Bay Grill",
        Category::Restaurant,
        "Local seafood and American favorites with a view.",
        "222 Muddy Creek Rd",
        "0707",
        4.5,
        "food",
    ),
    (
        "8",
        "Revive Auto Service",
        Category::Automotive,
        "Complete car repair and maintenance services.",
        "888 Pike Ln",
        "0808",
        4.7,
        "car",
    ),
    (
        "9",
        "Elegant Nails Spa",
        Category::NailSalon,
        "Professional nail care and luxury spa treatments.",
        "999 Londontown Rd",
        "0909",
        4.6,
        "nails",
    ),
    (
        "10",
        "Edgewater Dental Care",
        Category::Dentist,
        "Gentle family dentistry and advanced oral health.",
        "111 Turkey Point Rd",
        "1010",
        4.9,
        "dentist",
    ),
    (
        "11",
        "Sparkle Clean Services",
        Category::Cleaning,
        "Eco-friendly residential and office cleaning solutions.",
        "777 Pike Ln",
        "1111",
        4.8,
        "clean",
    ),
    (
        "12",
        "Vogue Hair Salon",
        Category::HairSalon,
        "Master stylists specializing in color and modern cuts.",
        "444 Mayo Rd",
        "1212",
        4.7,
        "hair",
    ),
];

/// Bundled listings shown until (and unless) the repository returns data.
pub fn sample_listings() -> Vec<Listing> {
    SAMPLES
        .iter()
        .map(
            |&(id, name, category, description, street, phone_suffix, rating, seed)| Listing {
                id: ListingId::new(id),
                name: name.to_string(),
                category,
                description: description.to_string(),
                address: format!("{street}, Edgewater, MD 21037"),
                phone: format!("(410) 555-{phone_suffix}"),
                rating,
                image: format!("https://picsum.photos/seed/{seed}/400/300"),
            },
        )
        .collect()
}
