//! Column Definitions
//!
//! Each table has a typed column enum. A column knows its header, whether it
//! may be sorted or hidden, how to compare two rows and how to render a cell.

use std::cmp::Ordering;
use std::fmt::Debug;
use std::hash::Hash;

use crate::format::format_vnd;
use crate::models::{Apartment, Fee, Resident, GENDERS};

pub trait Column<R>: Copy + Eq + Hash + Debug + Send + Sync + 'static {
    /// Stable identifier, used for DOM ids and the column menu
    fn key(&self) -> &'static str;

    fn header(&self) -> &'static str;

    fn sortable(&self) -> bool {
        false
    }

    fn hideable(&self) -> bool {
        true
    }

    /// Primary cells render as a link that opens the record
    fn primary(&self) -> bool {
        false
    }

    fn compare(&self, a: &R, b: &R) -> Ordering;

    fn cell(&self, row: &R) -> String;

    fn cell_class(&self, _row: &R) -> &'static str {
        ""
    }
}

// ========================
// Fees
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeeColumn {
    Type,
    Amount,
    Month,
    Description,
    Compulsory,
}

impl FeeColumn {
    pub const ALL: [FeeColumn; 5] = [
        FeeColumn::Type,
        FeeColumn::Amount,
        FeeColumn::Month,
        FeeColumn::Description,
        FeeColumn::Compulsory,
    ];
}

impl Column<Fee> for FeeColumn {
    fn key(&self) -> &'static str {
        match self {
            FeeColumn::Type => "type",
            FeeColumn::Amount => "amount",
            FeeColumn::Month => "month",
            FeeColumn::Description => "description",
            FeeColumn::Compulsory => "compulsory",
        }
    }

    fn header(&self) -> &'static str {
        match self {
            FeeColumn::Type => "Fee Type",
            FeeColumn::Amount => "Amount (VND)",
            FeeColumn::Month => "Month",
            FeeColumn::Description => "Description",
            FeeColumn::Compulsory => "Compulsory",
        }
    }

    fn sortable(&self) -> bool {
        matches!(self, FeeColumn::Amount | FeeColumn::Month)
    }

    fn hideable(&self) -> bool {
        !matches!(self, FeeColumn::Type)
    }

    fn primary(&self) -> bool {
        matches!(self, FeeColumn::Type)
    }

    fn compare(&self, a: &Fee, b: &Fee) -> Ordering {
        match self {
            FeeColumn::Type => a.fee_type.cmp(&b.fee_type),
            FeeColumn::Amount => a.amount.cmp(&b.amount),
            FeeColumn::Month => a.month.cmp(&b.month),
            FeeColumn::Description => a.description.cmp(&b.description),
            FeeColumn::Compulsory => a.compulsory.cmp(&b.compulsory),
        }
    }

    fn cell(&self, fee: &Fee) -> String {
        match self {
            FeeColumn::Type => fee.fee_type.clone(),
            FeeColumn::Amount => format_vnd(fee.amount),
            FeeColumn::Month => fee.month.clone(),
            FeeColumn::Description => fee.description.clone(),
            FeeColumn::Compulsory => if fee.compulsory { "Yes" } else { "No" }.to_string(),
        }
    }

    fn cell_class(&self, fee: &Fee) -> &'static str {
        match self {
            FeeColumn::Amount => "cell-amount",
            FeeColumn::Month => "cell-center",
            FeeColumn::Compulsory if fee.compulsory => "badge badge-default",
            FeeColumn::Compulsory => "badge badge-outline",
            _ => "",
        }
    }
}

// ========================
// Residents
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidentColumn {
    FullName,
    Dob,
    Cccd,
    Gender,
    Phone,
    Apartment,
    Relation,
    StayStatus,
}

impl ResidentColumn {
    pub const ALL: [ResidentColumn; 8] = [
        ResidentColumn::FullName,
        ResidentColumn::Dob,
        ResidentColumn::Cccd,
        ResidentColumn::Gender,
        ResidentColumn::Phone,
        ResidentColumn::Apartment,
        ResidentColumn::Relation,
        ResidentColumn::StayStatus,
    ];
}

fn gender_label(value: &str) -> &str {
    GENDERS
        .iter()
        .find(|(stored, _)| *stored == value)
        .map(|(_, label)| *label)
        .unwrap_or(value)
}

impl Column<Resident> for ResidentColumn {
    fn key(&self) -> &'static str {
        match self {
            ResidentColumn::FullName => "full_name",
            ResidentColumn::Dob => "dob",
            ResidentColumn::Cccd => "cccd",
            ResidentColumn::Gender => "gender",
            ResidentColumn::Phone => "phone",
            ResidentColumn::Apartment => "apartment",
            ResidentColumn::Relation => "relation",
            ResidentColumn::StayStatus => "stay_status",
        }
    }

    fn header(&self) -> &'static str {
        match self {
            ResidentColumn::FullName => "Full Name",
            ResidentColumn::Dob => "Date of Birth",
            ResidentColumn::Cccd => "CCCD",
            ResidentColumn::Gender => "Gender",
            ResidentColumn::Phone => "Phone",
            ResidentColumn::Apartment => "Apartment",
            ResidentColumn::Relation => "Relation",
            ResidentColumn::StayStatus => "Stay Status",
        }
    }

    fn sortable(&self) -> bool {
        matches!(
            self,
            ResidentColumn::FullName | ResidentColumn::Dob | ResidentColumn::Apartment | ResidentColumn::StayStatus
        )
    }

    fn hideable(&self) -> bool {
        !matches!(self, ResidentColumn::FullName)
    }

    fn primary(&self) -> bool {
        matches!(self, ResidentColumn::FullName)
    }

    fn compare(&self, a: &Resident, b: &Resident) -> Ordering {
        match self {
            ResidentColumn::FullName => a.full_name.cmp(&b.full_name),
            // ISO dates order lexically
            ResidentColumn::Dob => a.dob.cmp(&b.dob),
            ResidentColumn::Cccd => a.cccd.cmp(&b.cccd),
            ResidentColumn::Gender => a.gender.cmp(&b.gender),
            ResidentColumn::Phone => a.phone_number.cmp(&b.phone_number),
            ResidentColumn::Apartment => a.apartment_id.cmp(&b.apartment_id),
            ResidentColumn::Relation => a.relation.cmp(&b.relation),
            ResidentColumn::StayStatus => a.stay_status.cmp(&b.stay_status),
        }
    }

    fn cell(&self, r: &Resident) -> String {
        match self {
            ResidentColumn::FullName => r.full_name.clone(),
            ResidentColumn::Dob => r.dob.clone(),
            ResidentColumn::Cccd => r.cccd.clone(),
            ResidentColumn::Gender => gender_label(&r.gender).to_string(),
            ResidentColumn::Phone => r.phone_number.clone(),
            ResidentColumn::Apartment => r.apartment_id.map(|id| format!("#{}", id)).unwrap_or_default(),
            ResidentColumn::Relation => r.relation.label().to_string(),
            ResidentColumn::StayStatus => r.stay_status.label().to_string(),
        }
    }

    fn cell_class(&self, _r: &Resident) -> &'static str {
        match self {
            ResidentColumn::StayStatus | ResidentColumn::Relation => "badge badge-outline",
            _ => "",
        }
    }
}

// ========================
// Apartments
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApartmentColumn {
    Name,
    Area,
}

impl ApartmentColumn {
    pub const ALL: [ApartmentColumn; 2] = [ApartmentColumn::Name, ApartmentColumn::Area];
}

impl Column<Apartment> for ApartmentColumn {
    fn key(&self) -> &'static str {
        match self {
            ApartmentColumn::Name => "name",
            ApartmentColumn::Area => "area",
        }
    }

    fn header(&self) -> &'static str {
        match self {
            ApartmentColumn::Name => "Name",
            ApartmentColumn::Area => "Area (m²)",
        }
    }

    fn sortable(&self) -> bool {
        true
    }

    fn hideable(&self) -> bool {
        matches!(self, ApartmentColumn::Area)
    }

    fn primary(&self) -> bool {
        matches!(self, ApartmentColumn::Name)
    }

    fn compare(&self, a: &Apartment, b: &Apartment) -> Ordering {
        match self {
            ApartmentColumn::Name => a.name.cmp(&b.name),
            ApartmentColumn::Area => a.area.cmp(&b.area),
        }
    }

    fn cell(&self, apt: &Apartment) -> String {
        match self {
            ApartmentColumn::Name => apt.name.clone(),
            ApartmentColumn::Area => apt.area.map(|a| a.to_string()).unwrap_or_else(|| "-".to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Relation, StayStatus};

    fn fee(amount: i64, compulsory: bool) -> Fee {
        Fee {
            id: 1,
            fee_type: "service".into(),
            amount,
            month: "2026-10".into(),
            description: String::new(),
            compulsory,
        }
    }

    #[test]
    fn test_fee_columns_capabilities() {
        assert!(FeeColumn::Amount.sortable());
        assert!(!FeeColumn::Description.sortable());
        assert!(!FeeColumn::Type.hideable());
        assert!(FeeColumn::Type.primary());
        assert_eq!(FeeColumn::Amount.compare(&fee(10, true), &fee(20, true)), Ordering::Less);
    }

    #[test]
    fn test_fee_cells() {
        assert_eq!(FeeColumn::Amount.cell(&fee(1_500_000, true)), "1.500.000 ₫");
        assert_eq!(FeeColumn::Compulsory.cell(&fee(0, false)), "No");
        assert_eq!(FeeColumn::Compulsory.cell_class(&fee(0, true)), "badge badge-default");
    }

    #[test]
    fn test_resident_cells() {
        let r = Resident {
            id: 1,
            full_name: "Tran Thi B".into(),
            dob: "1985-05-05".into(),
            cccd: "001185000002".into(),
            gender: "Nữ".into(),
            occupation: "Teacher".into(),
            phone_number: "0912345678".into(),
            apartment_id: Some(7),
            relation: Relation::Owner,
            stay_status: StayStatus::TemporaryResidence,
        };
        assert_eq!(ResidentColumn::Gender.cell(&r), "Female");
        assert_eq!(ResidentColumn::Apartment.cell(&r), "#7");
        assert_eq!(ResidentColumn::StayStatus.cell(&r), "Temporary Residence");
    }
}
