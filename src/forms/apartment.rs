use super::{min_len, parse_grouped_int, FieldErrors};
use crate::models::{Apartment, ApartmentRequest};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApartmentForm {
    pub name: String,
    /// Optional, square metres
    pub area: String,
}

impl ApartmentForm {
    pub const NAME: &'static str = "name";
    pub const AREA: &'static str = "area";

    pub fn from_apartment(apartment: &Apartment) -> Self {
        Self {
            name: apartment.name.clone(),
            area: apartment.area.map(|a| a.to_string()).unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ApartmentRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        min_len(&mut errors, Self::NAME, &self.name, 1, "Apartment name is required");

        let area = if self.area.trim().is_empty() {
            None
        } else {
            match parse_grouped_int(&self.area).and_then(|a| i32::try_from(a).ok()) {
                Some(a) if a > 0 => Some(a),
                _ => {
                    errors.add(Self::AREA, "Area must be a positive whole number");
                    None
                }
            }
        };

        errors.finish(|| ApartmentRequest {
            name: self.name.trim().to_string(),
            area,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_is_optional() {
        let form = ApartmentForm {
            name: "A-1203".into(),
            area: String::new(),
        };
        assert_eq!(form.validate().unwrap().area, None);
    }

    #[test]
    fn test_area_must_be_positive() {
        let form = ApartmentForm {
            name: String::new(),
            area: "-4".into(),
        };
        let errors = form.validate().unwrap_err();
        assert!(errors.has(ApartmentForm::NAME));
        assert_eq!(errors.get(ApartmentForm::AREA), Some("Area must be a positive whole number"));
    }
}
