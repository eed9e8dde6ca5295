use super::{min_len, parse_grouped_int, FieldErrors};
use crate::format::parse_month;
use crate::models::{Fee, FeeRequest};

/// Fields of the fee create dialog and edit drawer
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeeForm {
    pub fee_type: String,
    pub amount: String,
    /// `YYYY-MM`
    pub month: String,
    pub description: String,
    pub compulsory: bool,
}

impl FeeForm {
    pub const TYPE: &'static str = "type";
    pub const AMOUNT: &'static str = "amount";
    pub const MONTH: &'static str = "month";
    pub const DESCRIPTION: &'static str = "description";

    /// Empty form for `month`
    pub fn for_month(month: impl Into<String>) -> Self {
        Self {
            month: month.into(),
            compulsory: true,
            ..Self::default()
        }
    }

    /// Pre-filled from an existing fee
    pub fn from_fee(fee: &Fee) -> Self {
        Self {
            fee_type: fee.fee_type.clone(),
            amount: fee.amount.to_string(),
            month: fee.month.clone(),
            description: fee.description.clone(),
            compulsory: fee.compulsory,
        }
    }

    pub fn validate(&self) -> Result<FeeRequest, FieldErrors> {
        let mut errors = FieldErrors::new();
        min_len(&mut errors, Self::TYPE, &self.fee_type, 1, "Fee type is required");

        let amount = parse_grouped_int(&self.amount);
        match amount {
            None => errors.add(Self::AMOUNT, "Amount must be a number"),
            Some(a) if a <= 0 => errors.add(Self::AMOUNT, "Amount must be greater than 0"),
            Some(_) => {}
        }

        if parse_month(self.month.trim()).is_none() {
            errors.add(Self::MONTH, "Month must be in YYYY-MM format");
        }
        if self.description.chars().count() > 255 {
            errors.add(Self::DESCRIPTION, "Description must be at most 255 characters");
        }

        errors.finish(|| FeeRequest {
            fee_type: self.fee_type.trim().to_string(),
            amount: amount.unwrap_or_default(),
            month: self.month.trim().to_string(),
            description: self.description.trim().to_string(),
            compulsory: self.compulsory,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form() {
        let form = FeeForm {
            fee_type: " service ".into(),
            amount: "7.000".into(),
            month: "2026-10".into(),
            description: "Per m2".into(),
            compulsory: true,
        };
        let request = form.validate().unwrap();
        assert_eq!(request.fee_type, "service");
        assert_eq!(request.amount, 7000);
    }

    #[test]
    fn test_invalid_fields_reported_inline() {
        let form = FeeForm {
            fee_type: "  ".into(),
            amount: "0".into(),
            month: "10/2026".into(),
            ..FeeForm::default()
        };
        let errors = form.validate().unwrap_err();
        assert_eq!(errors.get(FeeForm::TYPE), Some("Fee type is required"));
        assert_eq!(errors.get(FeeForm::AMOUNT), Some("Amount must be greater than 0"));
        assert_eq!(errors.get(FeeForm::MONTH), Some("Month must be in YYYY-MM format"));
        assert!(!errors.has(FeeForm::DESCRIPTION));
    }

    #[test]
    fn test_edit_prefill_round_trips() {
        let fee = Fee {
            id: 9,
            fee_type: "parking".into(),
            amount: 120_000,
            month: "2026-09".into(),
            description: "Motorbike".into(),
            compulsory: false,
        };
        let request = FeeForm::from_fee(&fee).validate().unwrap();
        assert_eq!(request.amount, 120_000);
        assert!(!request.compulsory);
        assert_eq!(request.month, "2026-09");
    }
}
