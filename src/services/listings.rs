use crate::config::SourceSettings;
use crate::error::ListingError;
use crate::models::{Coordinates, PropertyId, PropertyRecord, PropertyStatus};
use serde_json::{Map, Value};
use std::collections::{BTreeSet, HashSet};
use std::path::Path;
use validator::Validate;

const PRICE_FIELDS: &[&str] = &["pricePerNight", "price_per_night", "price"];
const STAR_FIELDS: &[&str] = &["starRating", "star_rating", "stars"];
const REVIEW_FIELDS: &[&str] = &["reviewCount", "review_count", "reviews"];
const LAT_FIELDS: &[&str] = &["lat", "latitude"];
const LNG_FIELDS: &[&str] = &["lng", "lon", "longitude"];

/// Normalize one raw listing document into the canonical record
///
/// Field-name variants are resolved here so nothing downstream has to:
/// - price: `pricePerNight` | `price_per_night` | `price`, missing → 0
/// - stars: `starRating` | `star_rating` | `stars`, required
/// - coordinates: nested `coordinates` object or top-level lat/lng, partial → none
/// - amenities: array or comma-separated string, missing → empty
pub fn normalize_listing(document: &Value) -> Result<PropertyRecord, ListingError> {
    let doc = document
        .as_object()
        .ok_or_else(|| ListingError::InvalidResponse("Listing is not a JSON object".into()))?;

    let id = id_field(doc).ok_or_else(|| ListingError::MissingField {
            id: doc.get("id").map(Value::to_string).unwrap_or_else(|| "<unknown>".into()),
            field: "id",
        })?;

    let name = string_field(doc, &["name", "title"]).ok_or_else(|| ListingError::MissingField {
        id: id.to_string(),
        field: "name",
    })?;

    let star_rating = number_field(doc, STAR_FIELDS).ok_or_else(|| ListingError::MissingField {
        id: id.to_string(),
        field: "starRating",
    })?;
    if star_rating.fract() != 0.0 || !(0.0..=f64::from(u8::MAX)).contains(&star_rating) {
        return Err(ListingError::Invalid {
            id,
            reason: format!("star rating {} is not a whole number of stars", star_rating),
        });
    }

    let record = PropertyRecord {
        id,
        name,
        location: string_field(doc, &["location", "city"]).unwrap_or_default(),
        description: string_field(doc, &["description"]),
        price_per_night: number_field(doc, PRICE_FIELDS).unwrap_or(0.0),
        star_rating: star_rating as u8,
        rating: number_field(doc, &["rating"]).unwrap_or(0.0),
        review_count: number_field(doc, REVIEW_FIELDS)
            .filter(|n| *n >= 0.0)
            .map_or(0, |n| n as u32),
        amenities: amenities_field(doc),
        coordinates: coordinates_field(doc),
        featured: bool_field(doc, &["featured", "isFeatured", "is_featured"]).unwrap_or(false),
        status: status_field(doc),
    };

    record.validate().map_err(|e| ListingError::Invalid {
        id,
        reason: e.to_string(),
    })?;

    Ok(record)
}

/// Normalize a batch of documents, skipping the ones that cannot be used
///
/// Malformed documents are logged and dropped, duplicate ids keep the first
/// occurrence, and inactive listings are dropped unless configured otherwise.
pub fn normalize_listings<I>(documents: I, settings: &SourceSettings) -> Vec<PropertyRecord>
where
    I: IntoIterator<Item = Value>,
{
    let mut seen: HashSet<PropertyId> = HashSet::new();
    let mut records = Vec::new();

    for document in documents {
        let record = match normalize_listing(&document) {
            Ok(record) => record,
            Err(e) => {
                tracing::warn!("Skipping listing: {}", e);
                continue;
            }
        };

        if !settings.include_inactive && !record.is_active() {
            tracing::debug!("Skipping inactive listing {}", record.id);
            continue;
        }

        if !seen.insert(record.id) {
            tracing::warn!("Skipping duplicate listing id {}", record.id);
            continue;
        }

        records.push(record);
    }

    records
}

/// Split a snapshot into raw documents
///
/// Accepts a bare JSON array or a `{ "documents": [...] }` envelope; a
/// document carrying its payload under `data` is unwrapped.
pub fn parse_snapshot(json: &str) -> Result<Vec<Value>, ListingError> {
    let value: Value = serde_json::from_str(json)?;

    let documents = match value {
        Value::Array(items) => items,
        Value::Object(mut envelope) => match envelope.remove("documents") {
            Some(Value::Array(items)) => items,
            _ => return Err(ListingError::InvalidResponse("Missing documents array".into())),
        },
        _ => {
            return Err(ListingError::InvalidResponse(
                "Snapshot must be an array or a documents envelope".into(),
            ))
        }
    };

    Ok(documents
        .into_iter()
        .map(|mut doc| {
            if doc.get("data").is_some_and(Value::is_object) {
                doc["data"].take()
            } else {
                doc
            }
        })
        .collect())
}

/// Read a snapshot file and normalize every listing in it
pub fn load_snapshot<P: AsRef<Path>>(
    path: P,
    settings: &SourceSettings,
) -> Result<Vec<PropertyRecord>, ListingError> {
    let path = path.as_ref();
    let json = std::fs::read_to_string(path)?;
    let documents = parse_snapshot(&json)?;
    let total = documents.len();

    let records = normalize_listings(documents, settings);

    tracing::info!(
        "Loaded {} of {} listings from {}",
        records.len(),
        total,
        path.display()
    );

    Ok(records)
}

fn first_present<'a>(doc: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| doc.get(*key))
        .find(|value| !value.is_null())
}

/// Numbers may arrive as JSON numbers or numeric strings
/// Largest integer an `f64` holds exactly
const MAX_EXACT_FLOAT_ID: f64 = 9_007_199_254_740_991.0;

/// Listing id as an exact unsigned integer
///
/// Integer JSON numbers and numeric strings parse without a float round
/// trip. Float-typed whole numbers are accepted only while exact.
fn id_field(doc: &Map<String, Value>) -> Option<PropertyId> {
    match doc.get("id")? {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && (0.0..=MAX_EXACT_FLOAT_ID).contains(f))
                .map(|f| f as PropertyId)
        }),
        Value::String(s) => s.trim().parse::<PropertyId>().ok(),
        _ => None,
    }
}

fn number_field(doc: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    let value = match first_present(doc, keys)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    value.filter(|n| n.is_finite())
}

fn string_field(doc: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    first_present(doc, keys)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn bool_field(doc: &Map<String, Value>, keys: &[&str]) -> Option<bool> {
    first_present(doc, keys).and_then(Value::as_bool)
}

fn amenities_field(doc: &Map<String, Value>) -> BTreeSet<String> {
    let clean = |s: &str| Some(s.trim()).filter(|s| !s.is_empty()).map(str::to_string);

    match first_present(doc, &["amenities"]) {
        Some(Value::Array(items)) => items.iter().filter_map(Value::as_str).filter_map(clean).collect(),
        Some(Value::String(list)) => list.split(',').filter_map(clean).collect(),
        _ => BTreeSet::new(),
    }
}

fn coordinates_field(doc: &Map<String, Value>) -> Option<Coordinates> {
    let source = match doc.get("coordinates") {
        Some(Value::Object(nested)) => nested,
        _ => doc,
    };

    let lat = number_field(source, LAT_FIELDS)?;
    let lng = number_field(source, LNG_FIELDS)?;

    if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lng) {
        return None;
    }

    Some(Coordinates::new(lat, lng))
}

fn status_field(doc: &Map<String, Value>) -> PropertyStatus {
    if let Some(status) = first_present(doc, &["status"]).and_then(Value::as_str) {
        if status.eq_ignore_ascii_case("inactive") {
            return PropertyStatus::Inactive;
        }
        return PropertyStatus::Active;
    }

    match bool_field(doc, &["isActive", "is_active"]) {
        Some(false) => PropertyStatus::Inactive,
        _ => PropertyStatus::Active,
    }
}
