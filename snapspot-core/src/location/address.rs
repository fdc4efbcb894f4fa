//! Display formatting for reverse-geocoded addresses.

use super::provider::GeocodedAddress;

/// Formats one candidate as `"<number> <street>, <city>, <region>, <postal code>"`.
///
/// Missing or blank parts are skipped. A street number is only used together
/// with a street. Returns `None` when nothing is left.
#[must_use]
pub fn format_address(address: &GeocodedAddress) -> Option<String> {
    let street_number = present(address.street_number.as_deref());
    let street = present(address.street.as_deref());

    let street_line = match (street_number, street) {
        (Some(number), Some(street)) => Some(format!("{number} {street}")),
        (None, Some(street)) => Some(street.to_string()),
        (_, None) => None,
    };

    let parts: Vec<String> = street_line
        .into_iter()
        .chain(
            [&address.city, &address.region, &address.postal_code]
                .into_iter()
                .filter_map(|part| present(part.as_deref()).map(str::to_string)),
        )
        .collect();

    if parts.is_empty() {
        None
    } else {
        Some(parts.join(", "))
    }
}

/// Formats the first candidate, or returns `fallback` when there is none or it
/// formats to nothing.
#[must_use]
pub fn address_from_candidates(candidates: &[GeocodedAddress], fallback: &str) -> String {
    candidates
        .first()
        .and_then(format_address)
        .unwrap_or_else(|| fallback.to_string())
}

fn present(part: Option<&str>) -> Option<&str> {
    part.filter(|value| !value.trim().is_empty())
}
