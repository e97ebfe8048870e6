pub mod errors;
pub mod html;
pub mod redirect;

pub use errors::{error_to_response, ResultResp};
pub use html::{html_response, html_with_status, text_response};
pub use redirect::redirect;
