use crate::templates::components::{notice_banner, Notice};
use maud::{html, Markup, DOCTYPE};

const STYLES: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; background: #f9fafb; color: #111827; }
header { display: flex; align-items: center; justify-content: space-between; padding: 0.75rem 2rem; background: #fff; box-shadow: 0 2px 8px rgba(0,0,0,.08); }
header nav ul { display: flex; gap: 1rem; list-style: none; margin: 0; padding: 0; }
main { max-width: 1100px; margin: 0 auto; padding: 2rem 1rem; }
.btn { display: inline-block; background: #16a34a; color: #fff; border: none; border-radius: 8px; padding: .5rem 1rem; text-decoration: none; cursor: pointer; }
.listing-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(280px, 1fr)); gap: 1.5rem; }
.listing-card { background: #fff; border-radius: 8px; box-shadow: 0 4px 12px rgba(0,0,0,.08); overflow: hidden; }
.listing-card .cover { width: 100%; height: 12rem; object-fit: cover; background: #e5e7eb; }
.listing-body { padding: 1rem; }
.listing-price { color: #16a34a; font-weight: 600; }
.filters { display: flex; flex-wrap: wrap; gap: .75rem; margin-bottom: 1.5rem; }
.filters input, .filters select, form.stacked input, form.stacked textarea, form.stacked select { padding: .5rem 1rem; border: 1px solid #d1d5db; border-radius: 8px; }
form.stacked { display: flex; flex-direction: column; gap: .75rem; max-width: 480px; margin: 0 auto; background: #fff; padding: 1.5rem; border-radius: 8px; }
.notice { padding: .75rem 1rem; margin: 1rem auto; max-width: 1100px; border-radius: 8px; }
.notice-success { background: #dcfce7; color: #166534; }
.notice-error { background: #fee2e2; color: #991b1b; }
.field-error { color: #dc2626; font-size: .875rem; margin: 0; }
.empty-state { color: #6b7280; margin-top: 1.5rem; }
"#;

/// Page chrome shared by every full page. `user` is the signed-in visitor's
/// display name, if any.
pub fn desktop_layout(
    title: &str,
    user: Option<&str>,
    notice: Option<&Notice>,
    content: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " | Sterling Spaces" }
                style { (maud::PreEscaped(STYLES)) }
                script src="https://unpkg.com/htmx.org@1.9.12" defer {}
            }
            body {
                header {
                    a href="/" class="brand" { strong { "Sterling" } }
                    nav {
                        ul {
                            li { a href="/" { "Home" } }
                            li { a href="/search" { "Search" } }
                            @if let Some(name) = user {
                                li { a href="/properties/new" { "List a Property" } }
                                li { span class="user-name" { (name) } }
                                li {
                                    form method="post" action="/logout" {
                                        button type="submit" class="btn" { "Logout" }
                                    }
                                }
                            } @else {
                                li { a href="/login" { "Login" } }
                                li { a href="/register" { "Register" } }
                            }
                        }
                    }
                }
                (notice_banner(notice))
                (content)
            }
        }
    }
}
