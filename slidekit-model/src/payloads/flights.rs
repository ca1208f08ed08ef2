use serde::{Deserialize, Serialize};

/// Response of the flight listing endpoint (`GET /api/flights?country=`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FlightListing {
    #[serde(default)]
    pub flights: Vec<Flight>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Flight {
    pub flight_number: String,
    pub airline: String,
    /// RFC 3339 timestamp, kept verbatim.
    pub departure_time: String,
    pub arrival_time: String,
    /// Display price including currency symbol, e.g. `$300`.
    pub price: String,
    pub origin: String,
    pub destination: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_listing() {
        let raw = r#"{"flights":[{"flightNumber":"BC123","airline":"Booking Airlines",
            "departureTime":"2024-08-01T08:00:00Z","arrivalTime":"2024-08-01T12:00:00Z",
            "price":"$300","origin":"JFK","destination":"CDG"}]}"#;
        let listing: FlightListing =
            serde_json::from_str(raw).expect("parse listing");
        assert_eq!(listing.flights.len(), 1);
        assert_eq!(listing.flights[0].flight_number, "BC123");
        assert_eq!(listing.flights[0].destination, "CDG");
    }
}
