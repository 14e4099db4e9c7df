//! UI Components
//!
//! Pages, the sidebar layout and the asset modals.

mod app_layout;
mod home_page;
mod net_worth_chart;
mod assets_page;
mod asset_table;
mod pagination_bar;
mod asset_form_modal;
mod delete_confirm_modal;
mod audit_log_page;
mod section_stub_page;

pub use app_layout::AppLayout;
pub use home_page::HomePage;
pub use net_worth_chart::NetWorthChart;
pub use assets_page::AssetsPage;
pub use asset_table::AssetTable;
pub use pagination_bar::PaginationBar;
pub use asset_form_modal::AssetFormModal;
pub use delete_confirm_modal::DeleteConfirmModal;
pub use audit_log_page::AuditLogPage;
pub use section_stub_page::SectionStubPage;
