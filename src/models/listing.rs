use std::collections::BTreeMap;

use serde::de::{self, DeserializeOwned};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use serde_this_or_that::as_u64;

/// A property record from the listing feed.
///
/// The feed has no schema, so every field is optional and scalar fields are
/// coerced to text: strings stay as they are, numbers and booleans use their
/// JSON text and `null` is treated as absent. Structured fields that have the
/// wrong shape are dropped instead of failing the whole record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    #[serde(default, deserialize_with = "loose_text")]
    pub id: Option<String>,

    // Category signals, in the order the classifier reads them
    #[serde(default, deserialize_with = "loose_text")]
    pub sale_or_lease: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub transaction_type: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub listing_type: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "loose_text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub status: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub status_text: Option<String>,
    /// Free text, e.g. "For Lease $1,800 | 1 Year" or "$899,000".
    #[serde(default, deserialize_with = "loose_text")]
    pub price: Option<String>,
    #[serde(rename = "offer_price", default, deserialize_with = "loose_text")]
    pub offer_price: Option<String>,

    #[serde(default, deserialize_with = "loose_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub city: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub neighborhood: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub description: Option<String>,

    #[serde(default, deserialize_with = "loose_text")]
    pub beds: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub bedrooms: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub baths: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub bathrooms: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub area: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub mls_num: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub home_style: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub property_type: Option<String>,

    #[serde(default, deserialize_with = "image_list")]
    pub images: Vec<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub image: Option<String>,

    #[serde(default, deserialize_with = "lenient_object")]
    pub quick_facts: Option<QuickFacts>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub links: Option<Links>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub map: Option<MapQuery>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub contract: Option<Contract>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub listing_information: Option<BTreeMap<String, Value>>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub property_information: Option<BTreeMap<String, Value>>,

    #[serde(default, deserialize_with = "lenient_vec")]
    pub amenities: Vec<Amenity>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub rooms: Vec<Room>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub room_info: Vec<RoomInfo>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub washrooms: Vec<Washroom>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub features: Vec<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub interior_features: Vec<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub special_designations: Vec<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub waterfront: Vec<String>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub included_in_lease: Vec<String>,
}

impl Listing {
    pub fn bed_count(&self) -> Option<&str> {
        non_empty(&self.beds).or_else(|| non_empty(&self.bedrooms))
    }

    pub fn bath_count(&self) -> Option<&str> {
        non_empty(&self.baths).or_else(|| non_empty(&self.bathrooms))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QuickFacts {
    #[serde(default, deserialize_with = "loose_text")]
    pub style: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub beds: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub baths: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub rooms: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub parking: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub sqft: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub dom: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Links {
    #[serde(default, deserialize_with = "loose_text")]
    pub directions: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub neighbourhood_guide: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub address_guide: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MapQuery {
    #[serde(default, deserialize_with = "loose_text")]
    pub query: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Contract {
    #[serde(default, deserialize_with = "loose_text")]
    pub brokerage: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Amenity {
    #[serde(default, deserialize_with = "loose_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, deserialize_with = "loose_text")]
    pub floor: Option<String>,
    #[serde(rename = "type", default, deserialize_with = "loose_text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub details: Option<String>,
}

/// Newer feeds use `room`/`dimensions`/`notes`, older ones
/// `roomRows`/`size`/`details`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomInfo {
    #[serde(default, deserialize_with = "loose_text")]
    pub room: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub room_rows: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub level: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub dimensions: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub size: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "loose_text")]
    pub details: Option<String>,
}

impl RoomInfo {
    pub fn room_name(&self) -> &str {
        non_empty(&self.room)
            .or_else(|| non_empty(&self.room_rows))
            .unwrap_or_default()
    }

    pub fn level_name(&self) -> &str {
        non_empty(&self.level).unwrap_or_default()
    }

    pub fn room_dimensions(&self) -> &str {
        non_empty(&self.dimensions)
            .or_else(|| non_empty(&self.size))
            .unwrap_or_default()
    }

    pub fn room_notes(&self) -> &str {
        non_empty(&self.notes)
            .or_else(|| non_empty(&self.details))
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Washroom {
    #[serde(default, deserialize_with = "as_u64")]
    pub count: u64,
    #[serde(default, deserialize_with = "as_u64")]
    pub pieces: u64,
    #[serde(default, deserialize_with = "loose_text")]
    pub level: Option<String>,
}

pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

// Coerces any scalar into text, the way the feed is read everywhere
fn loose_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(num)) => Some(num.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

// Accepts a list of image URLs, or objects carrying one under url/src/image
fn image_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::Null => return Ok(Vec::new()),
        _ => return Err(de::Error::custom("images must be a list")),
    };

    Ok(items
        .into_iter()
        .filter_map(|item| match item {
            Value::String(url) => Some(url),
            Value::Object(map) => ["url", "src", "image"]
                .iter()
                .find_map(|key| map.get(*key).and_then(Value::as_str))
                .map(str::to_string),
            _ => None,
        })
        .filter(|url| !url.trim().is_empty())
        .collect())
}

fn lenient_vec<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

fn lenient_object<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        object @ Value::Object(_) => serde_json::from_value(object).ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn coerces_scalars_to_text() {
        let listing: Listing = serde_json::from_value(json!({
            "id": 42,
            "price": "For Lease $1,800 | 1 Year",
            "bedrooms": 3,
            "baths": 2.5,
            "status": null,
            "saleOrLease": true
        }))
        .unwrap();

        assert_eq!(listing.id.as_deref(), Some("42"));
        assert_eq!(listing.bed_count(), Some("3"));
        assert_eq!(listing.bath_count(), Some("2.5"));
        assert_eq!(listing.status, None);
        assert_eq!(listing.sale_or_lease.as_deref(), Some("true"));
    }

    #[test]
    fn reads_image_objects_and_skips_garbage() {
        let listing: Listing = serde_json::from_value(json!({
            "images": ["a.jpg", { "url": "b.jpg" }, { "src": "c.jpg" }, 7, ""]
        }))
        .unwrap();

        assert_eq!(listing.images, vec!["a.jpg", "b.jpg", "c.jpg"]);
    }

    #[test]
    fn rejects_images_that_are_not_a_list() {
        let listing = serde_json::from_value::<Listing>(json!({ "images": "a.jpg" }));
        assert!(listing.is_err());
    }

    #[test]
    fn tolerates_wrongly_shaped_structures() {
        let listing: Listing = serde_json::from_value(json!({
            "rooms": 5,
            "quickFacts": "none",
            "features": ["Pool", "Garage"],
            "washrooms": [{ "count": "2", "pieces": 4, "level": "Main" }]
        }))
        .unwrap();

        assert!(listing.rooms.is_empty());
        assert!(listing.quick_facts.is_none());
        assert_eq!(listing.features, vec!["Pool", "Garage"]);
        assert_eq!(listing.washrooms[0].count, 2);
        assert_eq!(listing.washrooms[0].pieces, 4);
    }

    #[test]
    fn washroom_counts_default_to_zero() {
        let listing: Listing = serde_json::from_value(json!({
            "washrooms": [{ "level": "Upper" }, { "count": 1, "pieces": "3" }]
        }))
        .unwrap();

        assert_eq!(listing.washrooms.len(), 2);
        assert_eq!(listing.washrooms[0].count, 0);
        assert_eq!(listing.washrooms[0].level.as_deref(), Some("Upper"));
        assert_eq!(listing.washrooms[1].count, 1);
        assert_eq!(listing.washrooms[1].pieces, 3);
    }

    #[test]
    fn room_info_falls_back_to_older_field_names() {
        let info: RoomInfo = serde_json::from_value(json!({
            "roomRows": "Kitchen",
            "size": "3.2 x 4.1",
            "details": "Tile floor"
        }))
        .unwrap();

        assert_eq!(info.room_name(), "Kitchen");
        assert_eq!(info.room_dimensions(), "3.2 x 4.1");
        assert_eq!(info.room_notes(), "Tile floor");
        assert_eq!(info.level_name(), "");
    }
}
