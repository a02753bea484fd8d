pub mod expense_form;
pub mod expense_list;
pub mod layout;
pub mod settings_page;
pub mod summary;

pub use expense_form::ExpenseForm;
pub use expense_list::{ExpenseList, ListControls};
pub use layout::{page_shell, Layout, Page};
pub use settings_page::SettingsPage;
pub use summary::{CategorySummary, PieChart};
