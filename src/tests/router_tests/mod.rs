mod auth_tests;
mod listing_form_tests;
mod property_tests;
mod search_tests;
