/// A city known to the selector, with the coordinates used for API requests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CityEntry {
    /// Short identifier, the value the selection input carries.
    pub id: &'static str,
    /// Human-readable name shown in titles.
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// The full city table. Fixed at compile time, never mutated.
pub const CITIES: &[CityEntry] = &[
    CityEntry { id: "la", name: "Los Angeles (USA)", latitude: 34.05, longitude: -118.25 },
    CityEntry { id: "nyc", name: "New York City (USA)", latitude: 40.71, longitude: -74.01 },
    CityEntry { id: "saopaulo", name: "São Paulo (Brazil)", latitude: -23.5505, longitude: -46.6333 },
    CityEntry { id: "sydney", name: "Sydney (Australia)", latitude: -33.8688, longitude: 151.2093 },
];

/// Look up a city by identifier.
///
/// Unknown ids resolve to `None` rather than an error: the selector only
/// offers known ids, so an unknown one means "do nothing".
pub fn resolve(city_id: &str) -> Option<&'static CityEntry> {
    CITIES.iter().find(|c| c.id == city_id)
}
