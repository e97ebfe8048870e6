use crate::domain::forms::FormErrors;
use maud::{html, Markup};

pub mod error;
pub mod filter_form;
pub mod listing_card;
pub mod notice;

pub use error::error_page;
pub use filter_form::{filter_form, local_govt_options};
pub use listing_card::listing_grid;
pub use notice::{notice_banner, Notice};

pub fn button(label: &str) -> Markup {
    html! {
        button type="submit" class="btn" { (label) }
    }
}

/// `1234567` → `N1,234,567`. Kobo are rounded away for display.
pub fn format_naira(amount: f64) -> String {
    let digits = (amount.round() as u64).to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('N');
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn field_error(errors: Option<&FormErrors>, field: &str) -> Markup {
    html! {
        @if let Some(msg) = errors.and_then(|e| e.for_field(field)) {
            p class="field-error" { (msg) }
        }
    }
}
