use crate::domain::forms::FormErrors;
use crate::templates::components::{button, field_error, Notice};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn login_page(
    user: Option<&str>,
    notice: Option<&Notice>,
    email: &str,
    errors: Option<&FormErrors>,
) -> Markup {
    desktop_layout(
        "Login",
        user,
        notice,
        html! {
            main class="container narrow" {
                h1 { "Login" }
                form class="stacked" method="post" action="/login" {
                    label for="email" { "Email" }
                    input type="email" id="email" name="email" value=(email) autocomplete="email" required;
                    (field_error(errors, "email"))

                    label for="password" { "Password" }
                    input type="password" id="password" name="password" autocomplete="current-password" required;
                    (field_error(errors, "password"))
                    label class="toggle" {
                        input
                            type="checkbox"
                            onchange="document.getElementById('password').type = this.checked ? 'text' : 'password'";
                        " Show password"
                    }

                    (button("Login"))
                }
                p class="switch" {
                    "Don't have an account? "
                    a href="/register" { "Register" }
                }
            }
        },
    )
}
