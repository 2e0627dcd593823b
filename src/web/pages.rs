use std::collections::BTreeMap;

use maud::{html, Markup, PreEscaped, DOCTYPE};
use serde_json::Value;
use url::{form_urlencoded, Url};

use crate::{
    listings::{
        catalog::{self, CategorySplit},
        classify::{classify, CategoryFilter},
    },
    models::{
        listing::{non_empty, Listing},
        mortgage::MortgageCalculation,
    },
    web::forms::MortgageForm,
};

const GALLERY_SCRIPT: &str = r#"
document.addEventListener("DOMContentLoaded", () => {
  if (typeof Swiper === "undefined") return;
  const count = document.querySelectorAll(".listingMainSwiper .swiper-slide").length;
  const thumbs = count > 1
    ? new Swiper(".listingThumbsSwiper", { spaceBetween: 10, slidesPerView: "auto", freeMode: true, watchSlidesProgress: true })
    : null;
  new Swiper(".listingMainSwiper", {
    loop: count > 1,
    spaceBetween: 10,
    navigation: { nextEl: ".listingMainSwiper .swiper-button-next", prevEl: ".listingMainSwiper .swiper-button-prev" },
    thumbs: thumbs ? { swiper: thumbs } : undefined,
  });
});
"#;

const CAROUSEL_SCRIPT: &str = r#"
document.addEventListener("DOMContentLoaded", () => {
  if (typeof Swiper === "undefined") return;
  new Swiper(".mySwiper", {
    loop: true,
    slidesPerView: 1,
    spaceBetween: 20,
    autoplay: { delay: 3000, disableOnInteraction: false },
    pagination: { el: ".swiper-pagination", clickable: true },
    navigation: { nextEl: ".swiper-button-next", prevEl: ".swiper-button-prev" },
    breakpoints: { 640: { slidesPerView: 2 }, 768: { slidesPerView: 3 }, 1024: { slidesPerView: 4 } },
  });
});
"#;

pub enum MortgageOutcome {
    Empty,
    Calculated(MortgageCalculation),
    Invalid(String),
}

pub struct HomeView<'a> {
    pub split: &'a CategorySplit<'a>,
    pub preview_limit: usize,
    pub featured: Vec<&'a Listing>,
    pub placeholder: &'a str,
}

pub fn listing_href(listing: &Listing) -> String {
    let id = listing.id.as_deref().unwrap_or_default();
    let encoded: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
    format!("/listing?id={encoded}")
}

/// Query to embed a map for, from `map.query` or a directions link. Google
/// Maps links are reduced to their `q` parameter.
pub fn map_embed_query(listing: &Listing) -> Option<String> {
    let raw = listing
        .map
        .as_ref()
        .and_then(|map| non_empty(&map.query))
        .or_else(|| listing.links.as_ref().and_then(|l| non_empty(&l.directions)))?;

    let query = if raw.contains("google.com") && raw.contains("q=") {
        Url::parse(raw)
            .ok()?
            .query_pairs()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value.into_owned())?
    } else {
        raw.to_string()
    };

    (!query.trim().is_empty()).then_some(query)
}

fn layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (title) }
                script src="https://cdn.tailwindcss.com" {}
                link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/swiper@11/swiper-bundle.min.css";
                script src="https://cdn.jsdelivr.net/npm/swiper@11/swiper-bundle.min.js" {}
            }
            body class="bg-gray-50 text-gray-900" {
                nav class="bg-green-900 text-white" {
                    div class="max-w-6xl mx-auto px-4 py-4 flex gap-6" {
                        a href="/" class="font-bold" { "Home" }
                        a href="/properties" { "Properties" }
                        a href="/properties?type=sale" { "For Sale" }
                        a href="/properties?type=rent" { "For Rent" }
                        a href="/mortgage" { "Mortgage Calculator" }
                    }
                }
                main class="max-w-6xl mx-auto px-4 py-8 space-y-8" {
                    (content)
                }
            }
        }
    }
}

fn error_box(message: &str) -> Markup {
    html! {
        div id="errorBox" class="p-4 rounded bg-red-50 text-red-700 border border-red-200" {
            (message)
        }
    }
}

fn preview_card(listing: &Listing, placeholder: &str) -> Markup {
    let title = catalog::title(listing);
    html! {
        a href=(listing_href(listing)) class="block bg-white rounded-xl border border-gray-200 overflow-hidden shadow-sm hover:shadow-md transition" {
            div class="aspect-[4/3] bg-gray-100" {
                img src=(catalog::cover_image(listing, placeholder)) alt=(title) class="w-full h-full object-cover" loading="lazy";
            }
            div class="p-3" {
                div class="font-semibold text-sm text-gray-900 truncate" { (title) }
                div class="text-xs text-gray-600 truncate" { (catalog::subtitle(listing)) }
            }
        }
    }
}

fn preview_grid(id: &str, listings: &[&Listing], placeholder: &str) -> Markup {
    html! {
        div id=(id) class="grid grid-cols-2 md:grid-cols-3 gap-4" {
            @if listings.is_empty() {
                div class="col-span-3 text-sm text-gray-500" { "No listings yet." }
            }
            @for listing in listings {
                (preview_card(listing, placeholder))
            }
        }
    }
}

fn property_card(listing: &Listing, placeholder: &str) -> Markup {
    html! {
        a href=(listing_href(listing)) class="block rounded-xl overflow-hidden border hover:shadow-md transition bg-white" {
            img src=(catalog::cover_image(listing, placeholder)) alt=(non_empty(&listing.title).unwrap_or("Listing")) class="w-full h-48 object-cover";
            div class="p-4" {
                div class="text-sm text-gray-500" { (classify(listing).label()) }
                div class="font-bold text-lg mt-1" { (non_empty(&listing.title).unwrap_or_default()) }
                div class="text-gray-700 mt-1" { (non_empty(&listing.price).unwrap_or_default()) }
                div class="text-sm text-gray-500 mt-2" { (catalog::meta_line(listing)) }
            }
        }
    }
}

pub fn home_page(view: &HomeView) -> Markup {
    let sale = catalog::preview(&view.split.sale, view.preview_limit);
    let lease = catalog::preview(&view.split.lease, view.preview_limit);

    layout(
        "Home",
        html! {
            @if !view.featured.is_empty() {
                section class="swiper mySwiper" {
                    div id="listing-cards" class="swiper-wrapper" {
                        @for listing in &view.featured {
                            div class="swiper-slide" {
                                a href=(listing_href(listing)) class="w-72 border rounded overflow-hidden shadow block mx-auto" {
                                    img src=(catalog::cover_image(listing, view.placeholder)) alt=(non_empty(&listing.title).unwrap_or("Listing")) class="w-full h-48 object-cover";
                                    div class="bg-green-900 text-white px-4 py-4 space-y-2" {
                                        h4 class="text-lg font-semibold" { (non_empty(&listing.title).unwrap_or("Untitled Listing")) }
                                        p class="text-xl font-bold" { (non_empty(&listing.price).unwrap_or_default()) }
                                        div class="flex space-x-4 text-sm opacity-80" {
                                            span { "Beds " (listing.bed_count().unwrap_or_default()) }
                                            span { "Baths " (listing.bath_count().unwrap_or_default()) }
                                            span { "Area " (non_empty(&listing.area).unwrap_or("N/A")) }
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div class="swiper-pagination" {}
                    div class="swiper-button-next" {}
                    div class="swiper-button-prev" {}
                }
                script { (PreEscaped(CAROUSEL_SCRIPT)) }
            }

            section class="space-y-4" {
                div class="flex items-center justify-between" {
                    h2 class="text-2xl font-bold" {
                        "For Sale " span id="sale-count" class="text-gray-500" { (view.split.sale.len()) }
                    }
                    a id="saleViewAll" href="/properties?type=sale" class="text-green-800 font-semibold" { "View all" }
                }
                (preview_grid("sale-grid", &sale, view.placeholder))
            }

            section class="space-y-4" {
                div class="flex items-center justify-between" {
                    h2 class="text-2xl font-bold" {
                        "For Rent / Lease " span id="rent-count" class="text-gray-500" { (view.split.lease.len()) }
                    }
                    a id="rentViewAll" href="/properties?type=rent" class="text-green-800 font-semibold" { "View all" }
                }
                (preview_grid("rent-grid", &lease, view.placeholder))
            }
        },
    )
}

pub fn home_error_page() -> Markup {
    layout(
        "Home",
        html! {
            (error_box("Failed to load listings."))
        },
    )
}

fn properties_title(filter: CategoryFilter) -> &'static str {
    match filter {
        CategoryFilter::Sale => "Properties For Sale",
        CategoryFilter::Rent => "Properties For Rent",
        CategoryFilter::All => "Properties",
    }
}

fn filter_links(active: CategoryFilter) -> Markup {
    let filters = [
        (CategoryFilter::All, "filterAll", "All"),
        (CategoryFilter::Sale, "filterSale", "For Sale"),
        (CategoryFilter::Rent, "filterRent", "For Rent"),
    ];
    html! {
        div class="flex gap-2" {
            @for (filter, id, label) in filters {
                @let class = if filter == active {
                    "px-4 py-2 rounded border bg-black text-white border-black"
                } else {
                    "px-4 py-2 rounded border"
                };
                a id=(id) href={ "/properties?type=" (filter.as_param()) } class=(class) { (label) }
            }
        }
    }
}

pub fn properties_page(filter: CategoryFilter, listings: &[&Listing], placeholder: &str) -> Markup {
    let title = properties_title(filter);
    layout(
        title,
        html! {
            section class="space-y-2" {
                h1 id="pageTitle" class="text-3xl font-bold" { (title) }
                p id="pageSubtitle" class="text-gray-500" { (listings.len()) " properties" }
                (filter_links(filter))
            }
            div id="grid" class="grid md:grid-cols-3 gap-6" {
                @for listing in listings {
                    (property_card(listing, placeholder))
                }
            }
        },
    )
}

pub fn properties_error_page(filter: CategoryFilter, message: &str) -> Markup {
    let title = properties_title(filter);
    layout(
        title,
        html! {
            section class="space-y-2" {
                h1 id="pageTitle" class="text-3xl font-bold" { (title) }
                p id="pageSubtitle" class="text-gray-500" { "0 properties" }
                (filter_links(filter))
            }
            (error_box(message))
        },
    )
}

fn quick_facts_line(listing: &Listing) -> Option<String> {
    let parts: Vec<String> = match &listing.quick_facts {
        Some(q) => [
            q.style.clone(),
            q.beds.as_ref().map(|v| format!("{v} Beds")),
            q.baths.as_ref().map(|v| format!("{v} Bath")),
            q.rooms.as_ref().map(|v| format!("{v} Rooms")),
            q.parking.as_ref().map(|v| format!("{v} Tot prk spcs")),
            q.sqft.clone(),
            q.dom.as_ref().map(|v| format!("{v} DOM")),
        ]
        .into_iter()
        .flatten()
        .filter(|part| !part.trim().is_empty())
        .collect(),
        None => [
            non_empty(&listing.home_style).map(str::to_string),
            listing.bedrooms.as_ref().map(|v| format!("{v} Beds")),
            listing.bathrooms.as_ref().map(|v| format!("{v} Bath")),
            non_empty(&listing.area).map(str::to_string),
        ]
        .into_iter()
        .flatten()
        .collect(),
    };

    (!parts.is_empty()).then(|| parts.join(" • "))
}

fn gallery(images: &[&str]) -> Markup {
    html! {
        @if !images.is_empty() {
            section class="bg-white p-4 rounded-lg shadow" {
                div class="swiper listingMainSwiper rounded-lg overflow-hidden border h-[480px] max-h-[70vh]" {
                    div class="swiper-wrapper" {
                        @for image in images {
                            div class="swiper-slide" {
                                div class="w-full h-full flex items-center justify-center bg-gray-100 p-4" {
                                    img src=(image) alt="" class="max-w-full max-h-full object-contain rounded";
                                }
                            }
                        }
                    }
                    div class="swiper-button-next" {}
                    div class="swiper-button-prev" {}
                }
                @if images.len() > 1 {
                    div class="swiper listingThumbsSwiper mt-3" {
                        div class="swiper-wrapper" {
                            @for image in images {
                                div class="swiper-slide w-[110px] h-[78px] opacity-60 cursor-pointer" {
                                    div class="w-full h-full rounded overflow-hidden border bg-gray-100" {
                                        img src=(image) alt="" class="w-full h-full object-cover";
                                    }
                                }
                            }
                        }
                    }
                }
            }
            script { (PreEscaped(GALLERY_SCRIPT)) }
        }
    }
}

/// Only http(s) links from the feed are rendered.
pub fn is_web_link(href: &str) -> bool {
    Url::parse(href)
        .map(|url| matches!(url.scheme(), "http" | "https"))
        .unwrap_or(false)
}

fn links_section(listing: &Listing) -> Markup {
    let buttons: Vec<(&str, &str)> = listing
        .links
        .as_ref()
        .map(|links| {
            [
                (non_empty(&links.directions), "Directions"),
                (non_empty(&links.neighbourhood_guide), "Neighbourhood Guide"),
                (non_empty(&links.address_guide), "Address Guide"),
            ]
            .into_iter()
            .filter_map(|(href, label)| {
                href.filter(|href| is_web_link(href))
                    .map(|href| (href, label))
            })
            .collect()
        })
        .unwrap_or_default();

    html! {
        @if !buttons.is_empty() {
            section class="space-y-3" {
                h3 class="text-lg font-semibold" { "Links" }
                div class="flex flex-wrap gap-3" {
                    @for (href, label) in buttons {
                        a href=(href) target="_blank" rel="noopener" class="px-5 py-2 rounded border border-blue-500 text-blue-600 bg-white text-sm font-semibold" { (label) }
                    }
                }
            }
        }
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn key_value_section(title: &str, values: Option<&BTreeMap<String, Value>>) -> Markup {
    let entries: Vec<(&String, String)> = values
        .map(|values| {
            values
                .iter()
                .filter(|(_, value)| !value.is_null())
                .map(|(key, value)| (key, value_text(value)))
                .filter(|(_, text)| !text.trim().is_empty())
                .collect()
        })
        .unwrap_or_default();

    html! {
        @if !entries.is_empty() {
            section class="bg-white p-6 rounded-lg shadow" {
                h3 class="text-lg font-semibold mb-4" { (title) }
                div class="grid md:grid-cols-2 gap-x-10 gap-y-3 text-sm" {
                    @for (key, text) in &entries {
                        div class="flex gap-3" {
                            div class="w-48 text-gray-600 font-semibold" { (key) }
                            div class="text-gray-900" { (text) }
                        }
                    }
                }
            }
        }
    }
}

fn chip_section(title: &str, items: &[String]) -> Markup {
    let items: Vec<&str> = items
        .iter()
        .map(|item| item.trim())
        .filter(|item| !item.is_empty())
        .collect();

    html! {
        @if !items.is_empty() {
            section {
                h3 class="text-lg font-semibold mb-3" { (title) }
                div class="flex flex-wrap gap-2" {
                    @for item in items {
                        span class="inline-flex items-center px-3 py-1 rounded-full bg-white shadow text-sm text-gray-800 border" { (item) }
                    }
                }
            }
        }
    }
}

fn table(title: &str, headers: &[&str], rows: Vec<Vec<String>>) -> Markup {
    html! {
        @if !rows.is_empty() {
            section class="bg-white p-6 rounded-lg shadow" {
                h3 class="text-lg font-semibold mb-3" { (title) }
                div class="overflow-x-auto" {
                    table class="min-w-full bg-white border border-gray-200 rounded text-sm" {
                        thead class="bg-gray-100 text-gray-700" {
                            tr {
                                @for header in headers {
                                    th class="py-2 px-3 border-b text-left" { (header) }
                                }
                            }
                        }
                        tbody {
                            @for row in &rows {
                                tr {
                                    @for cell in row {
                                        td class="py-2 px-3 border-b" { (cell) }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

// Zero means the feed left the count out
fn count_text(count: u64) -> String {
    if count == 0 {
        String::new()
    } else {
        count.to_string()
    }
}

fn detail_tables(listing: &Listing) -> Markup {
    let rooms = listing
        .rooms
        .iter()
        .map(|r| vec![text(&r.floor), text(&r.kind), text(&r.size), text(&r.details)])
        .collect();
    let room_info = listing
        .room_info
        .iter()
        .map(|r| {
            vec![
                r.room_name().to_string(),
                r.level_name().to_string(),
                r.room_dimensions().to_string(),
                r.room_notes().to_string(),
            ]
        })
        .collect();
    let washrooms = listing
        .washrooms
        .iter()
        .map(|w| {
            vec![
                count_text(w.count),
                count_text(w.pieces),
                text(&w.level),
            ]
        })
        .collect();

    html! {
        (table("Room Information", &["Floor", "Type", "Size", "Other"], rooms))
        (table("Room Info", &["Room", "Level", "Dimensions", "Notes"], room_info))
        (table("Washroom Info", &["# of Washrooms", "Pieces", "Level"], washrooms))
    }
}

fn map_section(listing: &Listing) -> Markup {
    html! {
        @if let Some(query) = map_embed_query(listing) {
            @let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
            section class="bg-white p-6 rounded-lg shadow space-y-3" {
                h3 class="text-lg font-semibold" { "Nearby" }
                div class="rounded overflow-hidden border" {
                    iframe title="Map" src={ "https://www.google.com/maps?q=" (encoded) "&output=embed" } width="100%" height="320" style="border:0;" loading="lazy" referrerpolicy="no-referrer-when-downgrade" {}
                }
            }
        }
    }
}

pub fn listing_page(listing: &Listing) -> Markup {
    let title = catalog::title(listing);
    let status = non_empty(&listing.status).unwrap_or("Active");
    let mls = non_empty(&listing.mls_num).unwrap_or("N/A");
    let images = catalog::gallery_images(listing);

    layout(
        &title,
        html! {
            div id="listing-container" class="space-y-8" {
                section class="space-y-1" {
                    h1 class="text-2xl md:text-3xl font-bold" { (title) }
                    p class="text-gray-500" { (non_empty(&listing.neighborhood).unwrap_or_default()) }
                    @if let Some(facts) = quick_facts_line(listing) {
                        p class="text-gray-600 text-sm" { (facts) }
                    }
                    @if let Some(price) = non_empty(&listing.price) {
                        div class="text-green-700 text-xl md:text-2xl font-semibold" { (price) }
                    }
                }

                (gallery(&images))
                (links_section(listing))

                @if let Some(description) = non_empty(&listing.description) {
                    section class="bg-white p-6 rounded-lg shadow" {
                        h2 class="text-xl font-semibold mb-4" { "Client Remarks:" }
                        p class="text-gray-700 leading-relaxed" { (description) }
                    }
                }

                @if !listing.amenities.is_empty() {
                    section {
                        h2 class="text-xl font-semibold mb-4" { "Neighborhood Amenities Nearby:" }
                        div class="grid md:grid-cols-3 gap-6" {
                            @for amenity in &listing.amenities {
                                div class="bg-white p-4 rounded shadow text-center" {
                                    h3 class="font-bold" { (text(&amenity.title)) }
                                    p class="text-sm text-gray-600" { (text(&amenity.description)) }
                                }
                            }
                        }
                    }
                }

                section class="grid md:grid-cols-2 gap-6" {
                    div class="bg-white p-6 rounded shadow" {
                        h3 class="text-lg font-semibold mb-3" { "Listing Summary:" }
                        ul class="space-y-1 text-sm text-gray-700" {
                            li { strong { "Status: " } (status) }
                            li { strong { "MLS® Num: " } (mls) }
                            li { strong { "Bathrooms: " } (text(&listing.bathrooms)) }
                            li { strong { "Bedrooms: " } (text(&listing.bedrooms)) }
                            li { strong { "Prop. Type: " } (text(&listing.property_type)) }
                        }
                    }
                    div class="bg-white p-6 rounded shadow" {
                        h3 class="text-lg font-semibold mb-3" { "Listing Info:" }
                        ul class="space-y-1 text-sm text-gray-700" {
                            li { strong { "Category: " } (classify(listing).label()) }
                            li { strong { "Price: " } (text(&listing.price)) }
                            li { strong { "Offer Price: " } (text(&listing.offer_price)) }
                            li { strong { "Home Style: " } (text(&listing.home_style)) }
                        }
                    }
                }

                (key_value_section("Listing Information", listing.listing_information.as_ref()))
                (key_value_section("Property Information", listing.property_information.as_ref()))

                (chip_section("Features", &listing.features))
                (chip_section("Interior Features", &listing.interior_features))
                (chip_section("Special Designations", &listing.special_designations))
                (chip_section("Waterfront", &listing.waterfront))

                (detail_tables(listing))

                (chip_section("Included In Lease", &listing.included_in_lease))

                (map_section(listing))

                @if let Some(contract) = &listing.contract {
                    @if non_empty(&contract.brokerage).is_some() || non_empty(&contract.phone).is_some() {
                        section class="bg-white p-6 rounded-lg shadow" {
                            h3 class="text-lg font-semibold mb-3" { "Listing Contracted With" }
                            div class="text-sm text-gray-800 space-y-1" {
                                @if let Some(brokerage) = non_empty(&contract.brokerage) {
                                    div { (brokerage) }
                                }
                                @if let Some(phone) = non_empty(&contract.phone) {
                                    div { (phone) }
                                }
                            }
                        }
                    }
                }
            }
        },
    )
}

pub fn listing_error_page(message: &str) -> Markup {
    layout(
        "Listing",
        html! {
            div id="listing-container" {
                p class="text-red-600" { (message) }
            }
        },
    )
}

fn hidden_inputs(form: &MortgageForm) -> Markup {
    html! {
        input type="hidden" name="price" value=(form.price);
        input type="hidden" name="downPayment" value=(form.down_payment);
        input type="hidden" name="years" value=(form.years);
        input type="hidden" name="rate" value=(form.rate);
        input type="hidden" name="frequency" value=(form.frequency);
    }
}

fn frequency_option(form: &MortgageForm, value: &str, label: &str) -> Markup {
    let selected = form.frequency.trim() == value;
    html! {
        option value=(value) selected[selected] { (label) }
    }
}

pub fn mortgage_page(form: &MortgageForm, outcome: &MortgageOutcome, notice: Option<&str>) -> Markup {
    let input_class = "w-full border border-gray-300 rounded px-3 py-2";
    layout(
        "Mortgage Calculator",
        html! {
            section class="bg-white p-6 rounded-lg shadow space-y-4" {
                h1 class="text-2xl font-bold" { "Mortgage Calculator" }
                form id="mortgageForm" method="post" action="/mortgage" class="grid md:grid-cols-2 gap-4" {
                    label { "Price" input id="price" name="price" type="number" step="any" min="0" required class=(input_class) value=(form.price); }
                    label { "Down payment" input id="downPayment" name="downPayment" type="number" step="any" min="0" required class=(input_class) value=(form.down_payment); }
                    label { "Term (years)" input id="years" name="years" type="number" min="1" required class=(input_class) value=(form.years); }
                    label { "Interest rate (%)" input id="rate" name="rate" type="number" step="any" min="0" required class=(input_class) value=(form.rate); }
                    label {
                        "Payment frequency"
                        select id="frequency" name="frequency" class=(input_class) {
                            (frequency_option(form, "12", "Monthly"))
                            (frequency_option(form, "26", "Bi-Weekly"))
                            (frequency_option(form, "52", "Weekly"))
                        }
                    }
                    div class="flex items-end" {
                        button type="submit" class="bg-green-900 text-white px-6 py-2 rounded font-semibold" { "Calculate" }
                    }
                }
            }

            @match outcome {
                MortgageOutcome::Empty => {}
                MortgageOutcome::Invalid(message) => {
                    (error_box(message))
                }
                MortgageOutcome::Calculated(calculation) => {
                    section id="result" class="bg-white p-6 rounded-lg shadow space-y-2" {
                        p id="monthly" class="text-xl font-semibold" { (calculation.payment_line()) }
                        p id="total" { (calculation.total_line()) }
                        p id="loan" { (calculation.loan_line()) }

                        div class="flex flex-wrap gap-4 pt-4" {
                            form method="post" action="/mortgage/pdf" {
                                (hidden_inputs(form))
                                button id="downloadPDF" type="submit" class="px-5 py-2 rounded border border-green-900 text-green-900 font-semibold" { "Download PDF" }
                            }
                            form id="emailForm" method="post" action="/mortgage/email" class="flex gap-2" {
                                (hidden_inputs(form))
                                input id="clientEmail" name="clientEmail" type="email" placeholder="Your email" required class="border border-gray-300 rounded px-3 py-2";
                                button type="submit" class="bg-green-900 text-white px-5 py-2 rounded font-semibold" { "Email results" }
                            }
                        }
                    }
                }
            }

            @if let Some(notice) = notice {
                div id="notice" class="p-4 rounded bg-white border" { (notice) }
            }
        },
    )
}
