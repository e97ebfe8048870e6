use crate::domain::forms::{FormErrors, RegisterForm};
use crate::templates::components::{button, field_error, Notice};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub fn register_page(
    user: Option<&str>,
    notice: Option<&Notice>,
    form: &RegisterForm,
    errors: Option<&FormErrors>,
) -> Markup {
    desktop_layout(
        "Register",
        user,
        notice,
        html! {
            main class="container narrow" {
                h1 { "Register" }
                p { "Welcome to Sterling Spaces!" }
                form class="stacked" method="post" action="/register" {
                    label for="fullName" { "Full Name" }
                    input type="text" id="fullName" name="fullName" value=(form.full_name) required;
                    (field_error(errors, "fullName"))

                    label for="email" { "Email" }
                    input type="email" id="email" name="email" value=(form.email) required;
                    (field_error(errors, "email"))

                    label for="phone" { "Phone Number" }
                    input type="tel" id="phone" name="phone" value=(form.phone) required;
                    (field_error(errors, "phone"))

                    label for="address" { "Residential Address" }
                    input type="text" id="address" name="address" value=(form.address) required;
                    (field_error(errors, "address"))

                    label for="password" { "Password" }
                    input type="password" id="password" name="password" required;
                    (field_error(errors, "password"))

                    label for="confirmPassword" { "Confirm Password" }
                    input type="password" id="confirmPassword" name="confirmPassword" required;
                    (field_error(errors, "confirmPassword"))

                    (button("Register"))
                }
                p class="switch" {
                    "Already have an account? "
                    a href="/login" { "Login" }
                }
            }
        },
    )
}
