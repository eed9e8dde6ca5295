//! Frontend Models
//!
//! Data structures matching the REST API payloads.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Common contract for records shown in tables
pub trait Entity: Clone + PartialEq + Send + Sync + 'static {
    /// The type of the record's unique identifier
    type Id: Copy + Eq + Ord + std::hash::Hash + std::fmt::Debug + std::fmt::Display + Send + Sync + 'static;

    /// Returns the record's unique identifier
    fn id(&self) -> Self::Id;
}

/// Fee data structure (matches backend FeeDTO)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fee {
    pub id: i64,
    #[serde(rename = "type")]
    pub fee_type: String,
    /// Amount in VND
    pub amount: i64,
    /// `YYYY-MM`
    pub month: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub compulsory: bool,
}

impl Entity for Fee {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

/// Body for both fee creation and update
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeeRequest {
    #[serde(rename = "type")]
    pub fee_type: String,
    pub amount: i64,
    pub month: String,
    pub description: String,
    pub compulsory: bool,
}

/// Resident relation to the apartment owner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Relation {
    Owner,
    Tenant,
    Relative,
    Visitor,
}

impl Relation {
    pub const ALL: [Relation; 4] = [Relation::Owner, Relation::Tenant, Relation::Relative, Relation::Visitor];

    pub fn as_str(&self) -> &'static str {
        match self {
            Relation::Owner => "OWNER",
            Relation::Tenant => "TENANT",
            Relation::Relative => "RELATIVE",
            Relation::Visitor => "VISITOR",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Relation::Owner => "Owner",
            Relation::Tenant => "Tenant",
            Relation::Relative => "Relative",
            Relation::Visitor => "Visitor",
        }
    }
}

impl FromStr for Relation {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("relation", s))
    }
}

/// Residence registration status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StayStatus {
    #[default]
    PermanentResidence,
    TemporaryResidence,
    TemporaryAbsence,
    Unregistered,
}

impl StayStatus {
    pub const ALL: [StayStatus; 4] = [
        StayStatus::PermanentResidence,
        StayStatus::TemporaryResidence,
        StayStatus::TemporaryAbsence,
        StayStatus::Unregistered,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StayStatus::PermanentResidence => "PERMANENT_RESIDENCE",
            StayStatus::TemporaryResidence => "TEMPORARY_RESIDENCE",
            StayStatus::TemporaryAbsence => "TEMPORARY_ABSENCE",
            StayStatus::Unregistered => "UNREGISTERED",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StayStatus::PermanentResidence => "Permanent Residence",
            StayStatus::TemporaryResidence => "Temporary Residence",
            StayStatus::TemporaryAbsence => "Temporary Absence",
            StayStatus::Unregistered => "Unregistered",
        }
    }
}

impl FromStr for StayStatus {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| UnknownVariant::new("stay status", s))
    }
}

/// Wire name that matches none of an enum's variants
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} `{value}`")]
pub struct UnknownVariant {
    kind: &'static str,
    value: String,
}

impl UnknownVariant {
    fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

/// Gender options as stored by the backend, with display labels
pub const GENDERS: &[(&str, &str)] = &[("Nam", "Male"), ("Nữ", "Female"), ("Khác", "Other")];

/// Resident data structure (matches backend ResidentDTO)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resident {
    pub id: i64,
    pub full_name: String,
    /// `YYYY-MM-DD`
    pub dob: String,
    pub cccd: String,
    pub gender: String,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub phone_number: String,
    pub apartment_id: Option<i64>,
    pub relation: Relation,
    #[serde(rename = "stay_status")]
    pub stay_status: StayStatus,
}

impl Entity for Resident {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResidentRequest {
    pub full_name: String,
    pub dob: String,
    pub cccd: String,
    pub gender: String,
    pub occupation: String,
    pub phone_number: String,
    pub apartment_id: i64,
    pub relation: Relation,
    #[serde(rename = "stay_status")]
    pub stay_status: StayStatus,
}

/// Apartment data structure (matches backend ApartmentDTO)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Apartment {
    pub id: i64,
    pub name: String,
    /// Square metres
    #[serde(default)]
    pub area: Option<i32>,
}

impl Entity for Apartment {
    type Id = i64;

    fn id(&self) -> i64 {
        self.id
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApartmentRequest {
    pub name: String,
    pub area: Option<i32>,
}

/// Server page envelope (Spring `Page` JSON)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    /// 0-based page index
    #[serde(default)]
    pub number: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
}

impl<T> Page<T> {
    /// An empty first page of the given size
    pub fn empty(size: u32) -> Self {
        Self {
            content: Vec::new(),
            number: 0,
            size,
            total_pages: 0,
            total_elements: 0,
        }
    }

    /// `ceil(total_elements / size)`, the page count implied by the totals
    pub fn expected_total_pages(&self) -> u32 {
        if self.size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(self.size)) as u32
    }

    /// Envelope metadata is self-consistent
    pub fn is_consistent(&self) -> bool {
        let offset_ok = self.content.is_empty()
            || u64::from(self.number) * u64::from(self.size) <= self.total_elements;
        offset_ok && self.total_pages == self.expected_total_pages()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdateUserRequest {
    pub username: String,
    pub password: String,
    pub email: String,
}

/// Logged-in session; the payload is kept as the server returned it
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub username: String,
    pub payload: serde_json::Value,
}

impl Session {
    /// User id, if the login payload carries one
    pub fn user_id(&self) -> Option<i64> {
        let payload = &self.payload;
        ["id", "userId"]
            .iter()
            .find_map(|key| payload.get(key).and_then(|v| v.as_i64()))
            .or_else(|| payload.get("user").and_then(|u| u.get("id")).and_then(|v| v.as_i64()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fee_deserialize() {
        let json = r#"{"id":3,"type":"cleaning","amount":6000,"month":"2026-10","description":"Monthly","compulsory":true}"#;
        let fee: Fee = serde_json::from_str(json).unwrap();
        assert_eq!(fee.id(), 3);
        assert_eq!(fee.fee_type, "cleaning");
        assert!(fee.compulsory);
    }

    #[test]
    fn test_resident_enums_wire_format() {
        let json = r#"{
            "id": 1, "fullName": "Nguyen Van A", "dob": "1990-01-02", "cccd": "001090000001",
            "gender": "Nam", "occupation": "Engineer", "phoneNumber": "0901234567",
            "apartmentId": 12, "relation": "TENANT", "stay_status": "TEMPORARY_ABSENCE"
        }"#;
        let resident: Resident = serde_json::from_str(json).unwrap();
        assert_eq!(resident.relation, Relation::Tenant);
        assert_eq!(resident.stay_status, StayStatus::TemporaryAbsence);

        let request = ResidentRequest {
            full_name: resident.full_name.clone(),
            dob: resident.dob.clone(),
            cccd: resident.cccd.clone(),
            gender: resident.gender.clone(),
            occupation: resident.occupation.clone(),
            phone_number: resident.phone_number.clone(),
            apartment_id: 12,
            relation: Relation::Owner,
            stay_status: StayStatus::Unregistered,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["relation"], "OWNER");
        assert_eq!(value["stay_status"], "UNREGISTERED");
        assert_eq!(value["fullName"], "Nguyen Van A");
    }

    #[test]
    fn test_enum_string_helpers_agree_with_serde() {
        for relation in Relation::ALL {
            let json = serde_json::to_string(&relation).unwrap();
            assert_eq!(json, format!("\"{}\"", relation.as_str()));
            assert_eq!(relation.as_str().parse::<Relation>(), Ok(relation));
        }
        for status in StayStatus::ALL {
            assert_eq!(status.as_str().parse::<StayStatus>(), Ok(status));
        }
        let err = "nope".parse::<StayStatus>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown stay status `nope`");
        assert!("owner".parse::<Relation>().is_err());
    }

    #[test]
    fn test_page_envelope() {
        let json = r#"{"content":[],"number":0,"size":10,"totalPages":3,"totalElements":25,"first":true}"#;
        let page: Page<Fee> = serde_json::from_str(json).unwrap();
        assert_eq!(page.expected_total_pages(), 3);
        assert!(page.is_consistent());

        let broken = Page::<Fee> { total_pages: 2, ..page };
        assert!(!broken.is_consistent());
        assert_eq!(Page::<Fee>::empty(10).expected_total_pages(), 0);
    }

    #[test]
    fn test_session_user_id() {
        let session = Session {
            username: "admin".into(),
            payload: serde_json::json!({"user": {"id": 4}, "token": "x"}),
        };
        assert_eq!(session.user_id(), Some(4));
        let flat = Session {
            username: "admin".into(),
            payload: serde_json::json!({"userId": 9}),
        };
        assert_eq!(flat.user_id(), Some(9));
    }
}
