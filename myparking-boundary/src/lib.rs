use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

/// Envelope of list and detail responses: `{ "data": ... }`.
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq))]
pub struct Data<T> {
    pub data: T,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct AccessToken {
    pub access_token: String,
}

#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Credentials {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub remember: bool,
}

#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Profile {
    pub name: String,
    pub email: String,
}

#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct UpdatePassword {
    pub current_password: String,
    pub password: String,
    pub password_confirmation: String,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Vehicle {
    pub id           : u64,
    pub plate_number : String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description  : Option<String>,
}

/// Request body for creating and updating a vehicle.
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct NewVehicle {
    pub plate_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<Vehicle> for NewVehicle {
    fn from(from: Vehicle) -> Self {
        let Vehicle {
            plate_number,
            description,
            ..
        } = from;
        Self {
            plate_number,
            description,
        }
    }
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Zone {
    pub id             : u64,
    pub name           : String,
    pub price_per_hour : Price,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ParkingVehicle {
    pub plate_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct ParkingZone {
    pub name: String,
    pub price_per_hour: Price,
}

#[rustfmt::skip]
#[derive(Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
pub struct Parking {
    pub id          : u64,
    pub vehicle     : ParkingVehicle,
    pub zone        : ParkingZone,
    pub start_time  : String,
    #[serde(default)]
    pub stop_time   : Option<String>,
    #[serde(default)]
    pub total_price : Price,
}

impl Parking {
    /// A parking is active as long as no stop time has been recorded.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.stop_time.is_none()
    }
}

#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, Copy, PartialEq, Eq))]
pub struct StartParking {
    pub vehicle_id: u64,
    pub zone_id: u64,
}

/// An amount of money in minor units (cents).
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)
)]
#[serde(transparent)]
pub struct Price(u64);

impl From<u64> for Price {
    fn from(from: u64) -> Self {
        Self(from)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Field-keyed validation messages reported with a `422` response.
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(feature = "extra-derive", derive(Debug, Clone, PartialEq, Eq))]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    /// Messages for the given field; empty if the field is valid.
    #[must_use]
    pub fn field(&self, name: &str) -> &[String] {
        self.0.get(name).map(Vec::as_slice).unwrap_or_default()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for ValidationErrors
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut errors = Self::default();
        for (field, message) in iter {
            errors.add(field, message);
        }
        errors
    }
}

/// Error payload of the API.
#[derive(Default, Serialize, Deserialize)]
#[cfg_attr(
    feature = "extra-derive",
    derive(Debug, Clone, PartialEq, Eq, thiserror::Error)
)]
#[cfg_attr(feature = "extra-derive", error("{message}"))]
pub struct Error {
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "ValidationErrors::is_empty")]
    pub errors: ValidationErrors,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_price_with_two_decimals() {
        assert_eq!(Price::from(1250).to_string(), "12.50");
        assert_eq!(Price::from(5).to_string(), "0.05");
        assert_eq!(Price::from(0).to_string(), "0.00");
        assert_eq!(Price::from(100_000).to_string(), "1000.00");
    }

    #[test]
    fn deserialize_validation_error_payload() {
        let json = r#"{
          "message": "The plate number field is required.",
          "errors": { "plate_number": ["required"] }
        }"#;
        let err: Error = serde_json::from_str(json).unwrap();
        assert_eq!(err.message, "The plate number field is required.");
        assert_eq!(err.errors.field("plate_number"), ["required"]);
        assert!(err.errors.field("description").is_empty());
    }

    #[test]
    fn deserialize_error_without_fields() {
        let err: Error = serde_json::from_str(r#"{"message":"Server Error"}"#).unwrap();
        assert!(err.errors.is_empty());
        assert_eq!(err.to_string(), "Server Error");
    }

    #[test]
    fn collect_validation_errors() {
        let errors: ValidationErrors = [("email", "taken"), ("email", "invalid"), ("name", "short")]
            .into_iter()
            .collect();
        assert_eq!(errors.field("email"), ["taken", "invalid"]);
        assert_eq!(errors.fields().collect::<Vec<_>>(), ["email", "name"]);
    }

    #[test]
    fn deserialize_parking_envelope() {
        let json = r#"{ "data": [{
          "id": 3,
          "vehicle": { "plate_number": "AB123", "description": null },
          "zone": { "name": "Green Zone", "price_per_hour": 100 },
          "start_time": "2023-05-01 10:00:00",
          "stop_time": null,
          "total_price": 0
        }]}"#;
        let Data { data } = serde_json::from_str::<Data<Vec<Parking>>>(json).unwrap();
        assert_eq!(data.len(), 1);
        assert!(data[0].is_active());
        assert_eq!(data[0].zone.price_per_hour.to_string(), "1.00");
        assert_eq!(data[0].vehicle.description, None);
    }

    #[test]
    fn omit_empty_vehicle_description() {
        let vehicle = NewVehicle {
            plate_number: "AB123".into(),
            description: None,
        };
        assert_eq!(
            serde_json::to_string(&vehicle).unwrap(),
            r#"{"plate_number":"AB123"}"#
        );
    }
}
