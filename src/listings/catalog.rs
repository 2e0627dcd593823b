use crate::{
    listings::classify::{classify, Category, CategoryFilter},
    models::listing::{non_empty, Listing},
};

#[derive(Debug, Default)]
pub struct CategorySplit<'a> {
    pub sale: Vec<&'a Listing>,
    pub lease: Vec<&'a Listing>,
}

pub fn filter_by_category(listings: &[Listing], filter: CategoryFilter) -> Vec<&Listing> {
    listings
        .iter()
        .filter(|listing| filter.matches(classify(listing)))
        .collect()
}

pub fn split_by_category(listings: &[Listing]) -> CategorySplit<'_> {
    let mut split = CategorySplit::default();
    for listing in listings {
        match classify(listing) {
            Category::Sale => split.sale.push(listing),
            Category::Lease => split.lease.push(listing),
        }
    }
    split
}

/// Ids that broken links tend to produce.
pub fn is_valid_id(id: &str) -> bool {
    let id = id.trim();
    !id.is_empty() && id != "undefined" && id != "null"
}

pub fn find_by_id<'a>(listings: &'a [Listing], id: &str) -> Option<&'a Listing> {
    if !is_valid_id(id) {
        return None;
    }
    listings
        .iter()
        .find(|listing| listing.id.as_deref() == Some(id))
}

pub fn preview<'a>(listings: &[&'a Listing], limit: usize) -> Vec<&'a Listing> {
    listings.iter().take(limit).copied().collect()
}

/// Listings for the home page carousel: they need an id to link to and an
/// image to show.
pub fn featured(listings: &[Listing]) -> Vec<&Listing> {
    listings
        .iter()
        .filter(|listing| non_empty(&listing.id).is_some())
        .filter(|listing| own_image(listing).is_some())
        .collect()
}

pub fn title(listing: &Listing) -> String {
    if let Some(title) = non_empty(&listing.title) {
        return title.to_string();
    }

    let location: Vec<&str> = [non_empty(&listing.address), non_empty(&listing.city)]
        .into_iter()
        .flatten()
        .collect();
    if location.is_empty() {
        "Property".to_string()
    } else {
        location.join(", ")
    }
}

/// Price and bed/bath counts, e.g. "For Lease $1,800 • 2 bd | 1 ba".
pub fn subtitle(listing: &Listing) -> String {
    let counts: Vec<String> = [
        listing.bed_count().map(|beds| format!("{beds} bd")),
        listing.bath_count().map(|baths| format!("{baths} ba")),
    ]
    .into_iter()
    .flatten()
    .collect();
    let counts = counts.join(" | ");

    match (non_empty(&listing.price), counts.is_empty()) {
        (Some(price), false) => format!("{price} • {counts}"),
        (Some(price), true) => price.to_string(),
        (None, _) => counts,
    }
}

/// "3 Beds • 2 Baths • 1,200 sqft", skipping what is missing.
pub fn meta_line(listing: &Listing) -> String {
    [
        listing.bed_count().map(|beds| format!("{beds} Beds")),
        listing.bath_count().map(|baths| format!("{baths} Baths")),
        non_empty(&listing.area).map(str::to_string),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" • ")
}

pub fn cover_image<'a>(listing: &'a Listing, placeholder: &'a str) -> &'a str {
    own_image(listing).unwrap_or(placeholder)
}

/// All gallery images; a lone `image` counts as a one image gallery.
pub fn gallery_images(listing: &Listing) -> Vec<&str> {
    if !listing.images.is_empty() {
        return listing.images.iter().map(String::as_str).collect();
    }
    non_empty(&listing.image).into_iter().collect()
}

fn own_image(listing: &Listing) -> Option<&str> {
    listing
        .images
        .first()
        .map(String::as_str)
        .or_else(|| non_empty(&listing.image))
}
