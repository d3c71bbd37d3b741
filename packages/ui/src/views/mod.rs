mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod dashboard;
pub use dashboard::DashboardView;
