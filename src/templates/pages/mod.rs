pub mod add_property;
pub mod home;
pub mod login;
pub mod property;
pub mod register;
pub mod search;

pub use add_property::add_property_page;
pub use home::home_page;
pub use login::login_page;
pub use property::{property_not_found_page, property_page};
pub use register::register_page;
pub use search::{search_page, search_results};
