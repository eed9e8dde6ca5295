use chrono::NaiveDate;

use super::{min_len, FieldErrors};
use crate::models::{Relation, ResidentRequest, StayStatus};

/// Fields of the resident create dialog
#[derive(Debug, Clone, PartialEq)]
pub struct ResidentForm {
    pub full_name: String,
    /// `YYYY-MM-DD`, as produced by `<input type="date">`
    pub dob: String,
    pub cccd: String,
    pub gender: String,
    pub occupation: String,
    pub phone_number: String,
    pub apartment_id: String,
    /// Set when the apartment was supplied by the caller; the field is read-only
    pub apartment_locked: bool,
    pub relation: String,
    pub stay_status: String,
}

impl ResidentForm {
    pub const FULL_NAME: &'static str = "fullName";
    pub const DOB: &'static str = "dob";
    pub const CCCD: &'static str = "cccd";
    pub const GENDER: &'static str = "gender";
    pub const OCCUPATION: &'static str = "occupation";
    pub const PHONE: &'static str = "phoneNumber";
    pub const APARTMENT: &'static str = "apartmentId";
    pub const RELATION: &'static str = "relation";
    pub const STAY_STATUS: &'static str = "stay_status";

    pub fn new(today: NaiveDate, apartment_id: Option<i64>) -> Self {
        Self {
            full_name: String::new(),
            dob: today.format("%Y-%m-%d").to_string(),
            cccd: String::new(),
            gender: String::new(),
            occupation: String::new(),
            phone_number: String::new(),
            apartment_id: apartment_id.map(|id| id.to_string()).unwrap_or_default(),
            apartment_locked: apartment_id.is_some(),
            relation: String::new(),
            stay_status: StayStatus::default().as_str().to_string(),
        }
    }

    /// Change the apartment unless it is locked
    pub fn set_apartment(&mut self, value: impl Into<String>) {
        if !self.apartment_locked {
            self.apartment_id = value.into();
        }
    }

    pub fn validate(&self) -> Result<ResidentRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        min_len(&mut errors, Self::FULL_NAME, &self.full_name, 2, "Full name must be at least 2 characters");

        let dob = NaiveDate::parse_from_str(self.dob.trim(), "%Y-%m-%d").ok();
        if self.dob.trim().is_empty() {
            errors.add(Self::DOB, "Date of birth is required");
        } else if dob.is_none() {
            errors.add(Self::DOB, "Date of birth is not a valid date");
        }

        min_len(&mut errors, Self::CCCD, &self.cccd, 9, "CCCD must be at least 9 characters");
        min_len(&mut errors, Self::GENDER, &self.gender, 1, "Gender is required");
        min_len(&mut errors, Self::OCCUPATION, &self.occupation, 2, "Occupation must be at least 2 characters");
        min_len(&mut errors, Self::PHONE, &self.phone_number, 10, "Phone number must be at least 10 characters");

        min_len(&mut errors, Self::APARTMENT, &self.apartment_id, 1, "Apartment is required");
        let apartment_id = self.apartment_id.trim().parse::<i64>().ok();
        if apartment_id.is_none() {
            errors.add(Self::APARTMENT, "Apartment is required");
        }

        min_len(&mut errors, Self::RELATION, &self.relation, 1, "Relation is required");
        let relation = self.relation.trim().parse::<Relation>().ok();
        if relation.is_none() {
            errors.add(Self::RELATION, "Relation is required");
        }

        min_len(&mut errors, Self::STAY_STATUS, &self.stay_status, 1, "Stay status is required");
        let stay_status = self.stay_status.trim().parse::<StayStatus>().ok();
        if stay_status.is_none() {
            errors.add(Self::STAY_STATUS, "Stay status is required");
        }

        let (Some(dob), Some(apartment_id), Some(relation), Some(stay_status)) = (dob, apartment_id, relation, stay_status)
        else {
            return Err(errors);
        };

        errors.finish(|| ResidentRequest {
            full_name: self.full_name.trim().to_string(),
            dob: dob.format("%Y-%m-%d").to_string(),
            cccd: self.cccd.trim().to_string(),
            gender: self.gender.clone(),
            occupation: self.occupation.trim().to_string(),
            phone_number: self.phone_number.trim().to_string(),
            apartment_id,
            relation,
            stay_status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn filled() -> ResidentForm {
        ResidentForm {
            full_name: "Le Van C".into(),
            dob: "1992-07-14".into(),
            cccd: "001092000123".into(),
            gender: "Nam".into(),
            occupation: "Driver".into(),
            phone_number: "0987654321".into(),
            relation: "OWNER".into(),
            ..ResidentForm::new(today(), Some(12))
        }
    }

    #[test]
    fn test_defaults() {
        let form = ResidentForm::new(today(), None);
        assert_eq!(form.dob, "2026-10-19");
        assert_eq!(form.stay_status, "PERMANENT_RESIDENCE");
        assert!(!form.apartment_locked);
    }

    #[test]
    fn test_valid_request() {
        let request = filled().validate().unwrap();
        assert_eq!(request.apartment_id, 12);
        assert_eq!(request.relation, Relation::Owner);
        assert_eq!(request.stay_status, StayStatus::PermanentResidence);
    }

    #[test]
    fn test_locked_apartment_ignores_changes() {
        let mut form = filled();
        form.set_apartment("99");
        assert_eq!(form.apartment_id, "12");

        let mut open = ResidentForm::new(today(), None);
        open.set_apartment("99");
        assert_eq!(open.apartment_id, "99");
    }

    #[test]
    fn test_min_length_rules() {
        let form = ResidentForm {
            full_name: "A".into(),
            cccd: "12345".into(),
            phone_number: "09123".into(),
            occupation: "x".into(),
            ..ResidentForm::new(today(), None)
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(ResidentForm::FULL_NAME), Some("Full name must be at least 2 characters"));
        assert_eq!(errors.get(ResidentForm::CCCD), Some("CCCD must be at least 9 characters"));
        assert_eq!(errors.get(ResidentForm::PHONE), Some("Phone number must be at least 10 characters"));
        assert_eq!(errors.get(ResidentForm::GENDER), Some("Gender is required"));
        assert_eq!(errors.get(ResidentForm::APARTMENT), Some("Apartment is required"));
        assert_eq!(errors.get(ResidentForm::RELATION), Some("Relation is required"));
        assert!(!errors.has(ResidentForm::STAY_STATUS));
    }

    #[test]
    fn test_bad_date() {
        let form = ResidentForm { dob: "1992-02-30".into(), ..filled() };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(ResidentForm::DOB), Some("Date of birth is not a valid date"));
        assert_eq!(errors.len(), 1);
    }
}
