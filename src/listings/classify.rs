use serde::Serialize;

use crate::models::listing::{non_empty, Listing};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Sale,
    Lease,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Sale => "For Sale",
            Category::Lease => "For Rent",
        }
    }
}

/// Value of the `type` query parameter on the properties page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Sale,
    Rent,
}

impl CategoryFilter {
    /// Unknown or missing values show everything.
    pub fn from_param(param: Option<&str>) -> CategoryFilter {
        match param.map(|p| p.trim().to_lowercase()).as_deref() {
            Some("sale") => CategoryFilter::Sale,
            Some("rent") | Some("lease") => CategoryFilter::Rent,
            _ => CategoryFilter::All,
        }
    }

    pub fn as_param(self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Sale => "sale",
            CategoryFilter::Rent => "rent",
        }
    }

    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Sale => category == Category::Sale,
            CategoryFilter::Rent => category == Category::Lease,
        }
    }
}

/// Decides whether a listing is for sale or for lease.
///
/// Explicit fields are read first: `saleOrLease`, then the first non-empty
/// of `transactionType`/`listingType`/`type`, then `status` and
/// `statusText`. A field mentioning "rent" or "lease" means lease, one
/// mentioning "sale" means sale. Status fields also treat "sold" as sale.
/// Without an explicit answer the free-text `price` is searched the same way.
/// Anything still undecided is a sale.
pub fn classify(listing: &Listing) -> Category {
    let transaction = non_empty(&listing.transaction_type)
        .or_else(|| non_empty(&listing.listing_type))
        .or_else(|| non_empty(&listing.kind));

    let explicit = [
        (non_empty(&listing.sale_or_lease), false),
        (transaction, false),
        (non_empty(&listing.status), true),
        (non_empty(&listing.status_text), true),
    ];

    for (field, is_status) in explicit {
        if let Some(category) = field.and_then(|text| category_from_text(text, is_status)) {
            return category;
        }
    }

    non_empty(&listing.price)
        .and_then(|price| category_from_text(price, false))
        .unwrap_or(Category::Sale)
}

fn category_from_text(text: &str, is_status: bool) -> Option<Category> {
    let text = text.to_lowercase();

    if text.contains("rent") || text.contains("lease") {
        Some(Category::Lease)
    } else if text.contains("sale") || (is_status && text.contains("sold")) {
        Some(Category::Sale)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Listing {
        Listing::default()
    }

    #[test]
    fn sale_or_lease_wins_over_other_fields() {
        let mut l = listing();
        l.sale_or_lease = Some("Sale".into());
        l.transaction_type = Some("Lease".into());
        l.price = Some("For Lease $1,800".into());
        assert_eq!(classify(&l), Category::Sale);
    }

    #[test]
    fn only_first_non_empty_transaction_field_is_read() {
        let mut l = listing();
        l.transaction_type = Some("  ".into());
        l.listing_type = Some("Residential".into());
        l.kind = Some("Rent".into());
        l.price = Some("For Lease".into());
        // listingType decides nothing, so `type` is never consulted and price wins
        assert_eq!(classify(&l), Category::Lease);

        l.price = Some("$1".into());
        assert_eq!(classify(&l), Category::Sale);
    }

    #[test]
    fn sold_status_means_sale() {
        let mut l = listing();
        l.status = Some("Sold".into());
        l.price = Some("Rent $2,000".into());
        assert_eq!(classify(&l), Category::Sale);
    }

    #[test]
    fn sold_in_price_is_not_a_signal() {
        let mut l = listing();
        l.price = Some("Sold over asking".into());
        assert_eq!(classify(&l), Category::Sale);

        l.sale_or_lease = Some("unsold".into());
        assert_eq!(classify(&l), Category::Sale);
    }

    #[test]
    fn status_text_is_read_after_status() {
        let mut l = listing();
        l.status = Some("Active".into());
        l.status_text = Some("For Lease".into());
        assert_eq!(classify(&l), Category::Lease);
    }

    #[test]
    fn parses_filter_param() {
        assert_eq!(CategoryFilter::from_param(Some("SALE")), CategoryFilter::Sale);
        assert_eq!(CategoryFilter::from_param(Some("Rent")), CategoryFilter::Rent);
        assert_eq!(CategoryFilter::from_param(Some("lease")), CategoryFilter::Rent);
        assert_eq!(CategoryFilter::from_param(Some("all")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_param(Some("condo")), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_param(None), CategoryFilter::All);
    }
}
