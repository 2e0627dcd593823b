#[cfg(test)]
mod classification {
    use realty::{
        classify,
        feed::parse_listing_feed,
        listings::catalog::{filter_by_category, split_by_category},
        models::listing::Listing,
        Category, CategoryFilter,
    };
    use serde_json::json;

    fn listing(value: serde_json::Value) -> Listing {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn explicit_sale_fields() {
        for field in ["saleOrLease", "transactionType", "listingType", "type", "status"] {
            let l = listing(json!({ field: "For Sale", "price": "For Lease $1,800" }));
            assert_eq!(classify(&l), Category::Sale, "field {}", field);
        }
    }

    #[test]
    fn explicit_lease_and_rent_fields() {
        for field in ["saleOrLease", "transactionType", "listingType", "type", "status"] {
            for value in ["Lease", "for rent", "RENTAL", "Leased"] {
                let l = listing(json!({ field: value, "price": "$899,000" }));
                assert_eq!(classify(&l), Category::Lease, "{} = {}", field, value);
            }
        }
    }

    #[test]
    fn lease_price_without_explicit_field() {
        let l = listing(json!({ "price": "For Lease $1,800 | 1 Year" }));
        assert_eq!(classify(&l), Category::Lease);
    }

    #[test]
    fn plain_price_is_a_sale() {
        let l = listing(json!({ "price": "$899,000" }));
        assert_eq!(classify(&l), Category::Sale);
    }

    #[test]
    fn no_signal_at_all_is_a_sale() {
        assert_eq!(classify(&Listing::default()), Category::Sale);
        let l = listing(json!({ "status": "Active", "price": 899000 }));
        assert_eq!(classify(&l), Category::Sale);
    }

    #[test]
    fn field_priority() {
        // saleOrLease before transaction fields
        let l = listing(json!({ "saleOrLease": "lease", "transactionType": "sale" }));
        assert_eq!(classify(&l), Category::Lease);

        // transaction fields before status
        let l = listing(json!({ "listingType": "Sale", "status": "Leased" }));
        assert_eq!(classify(&l), Category::Sale);

        // an explicit field without a signal falls through to the next one
        let l = listing(json!({ "saleOrLease": "n/a", "status": "For Rent" }));
        assert_eq!(classify(&l), Category::Lease);
    }

    #[test]
    fn sale_filter_matches_classifier() {
        let body = std::fs::read_to_string(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/tests/fixtures/listing.json"
        ))
        .unwrap();
        let listings = parse_listing_feed(&body).unwrap();

        let sale = filter_by_category(&listings, CategoryFilter::from_param(Some("sale")));
        let expected: Vec<&Listing> = listings
            .iter()
            .filter(|l| classify(l) == Category::Sale)
            .collect();

        let ids = |ls: &[&Listing]| ls.iter().map(|l| l.id.clone()).collect::<Vec<_>>();
        assert_eq!(ids(&sale[..]), ids(&expected[..]));
        assert_eq!(
            ids(&sale[..]),
            vec![Some("maple-ave-17".to_string()), Some("lakeshore-9".to_string())]
        );

        let rent = filter_by_category(&listings, CategoryFilter::from_param(Some("RENT")));
        assert_eq!(rent.len(), 3);

        let all = filter_by_category(&listings, CategoryFilter::from_param(Some("all")));
        assert_eq!(all.len(), listings.len());

        let split = split_by_category(&listings);
        assert_eq!(split.sale.len() + split.lease.len(), listings.len());
    }
}
