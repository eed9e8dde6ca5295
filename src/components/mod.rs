//! UI Components
//!
//! Reusable Leptos components and the screens built from them.

mod activity_panel;
mod apartment_dialog;
mod apartments_table;
mod data_table;
mod delete_confirm_button;
mod fee_detail;
mod fee_dialogs;
mod fees_table;
mod form_field;
mod login_form;
mod pagination_bar;
mod profile_form;
mod resident_dialog;
mod residents_table;
mod screen_tab_bar;
mod search_input;

pub use activity_panel::ActivityPanel;
pub use apartment_dialog::{ApartmentDetail, ApartmentDialog, ApartmentEdit};
pub use apartments_table::ApartmentsTable;
pub use data_table::{ColumnMenu, DataTable};
pub use delete_confirm_button::DeleteConfirmButton;
pub use fee_detail::FeeDetail;
pub use fee_dialogs::{FeeCreateDialog, FeeEditDrawer};
pub use fees_table::FeesTable;
pub use form_field::{FormField, FormState, SubmitError};
pub use login_form::LoginForm;
pub use pagination_bar::PaginationBar;
pub use profile_form::ProfileForm;
pub use resident_dialog::{ResidentCreateDialog, ResidentDetail};
pub use residents_table::ResidentsTable;
pub use screen_tab_bar::ScreenTabBar;
pub use search_input::SearchInput;
