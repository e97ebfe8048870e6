use crate::domain::forms::{FormErrors, NewPropertyForm, MAX_PROPERTY_IMAGES};
use crate::geos;
use crate::templates::components::{button, field_error, local_govt_options, Notice};
use crate::templates::desktop_layout;
use maud::{html, Markup};

fn num(v: Option<u64>) -> String {
    v.map(|n| n.to_string()).unwrap_or_default()
}

pub fn add_property_page(
    user: Option<&str>,
    notice: Option<&Notice>,
    form: &NewPropertyForm,
    errors: Option<&FormErrors>,
) -> Markup {
    desktop_layout(
        "List Your Property",
        user,
        notice,
        html! {
            main {
                h1 { "List Your Property" }
                form class="stacked" method="post" action="/properties/new" {
                    label for="title" { "Property Title" }
                    input type="text" id="title" name="title" value=(form.title)
                        placeholder="e.g., Spacious 2-Bedroom Apartment" required;
                    (field_error(errors, "title"))

                    label for="description" { "Property Description" }
                    textarea id="description" name="description" required
                        placeholder="This apartment is well furnished with..." { (form.description) }
                    (field_error(errors, "description"))

                    label for="address" { "Address" }
                    textarea id="address" name="address" required { (form.address) }
                    (field_error(errors, "address"))

                    label for="state" { "State" }
                    select
                        id="state"
                        name="state"
                        required
                        hx-get="/search/local-govts"
                        hx-target="#localGovt"
                        hx-trigger="change"
                    {
                        option value="" selected[form.state.is_empty()] { "Select a State..." }
                        @for name in geos::state_names() {
                            option value=(name) selected[form.state == name] { (name) }
                        }
                    }
                    (field_error(errors, "state"))

                    label for="localGovt" { "Local Government Area" }
                    select id="localGovt" name="localGovt" required {
                        (local_govt_options(geos::local_govts_for(&form.state), &form.local_govt))
                    }
                    (field_error(errors, "localGovt"))

                    label for="price" { "Price (N) (per year)" }
                    input type="number" id="price" name="price" min="1" value=(num(form.price))
                        placeholder="e.g., 500000" required;
                    (field_error(errors, "price"))

                    label for="bedrooms" { "Bedrooms" }
                    input type="number" id="bedrooms" name="bedrooms" min="1" value=(num(form.bedrooms)) required;
                    (field_error(errors, "bedrooms"))

                    label for="bathrooms" { "Bathrooms" }
                    input type="number" id="bathrooms" name="bathrooms" min="1" value=(num(form.bathrooms)) required;
                    (field_error(errors, "bathrooms"))

                    label for="area" { "Area (sq ft)" }
                    input type="number" id="area" name="area" min="0" value=(num(form.area)) required;
                    (field_error(errors, "area"))

                    label for="images" { "Property Image URLs (Max " (MAX_PROPERTY_IMAGES) ", one per line)" }
                    textarea id="images" name="images" rows="4" required { (form.images.join("\n")) }
                    (field_error(errors, "images"))

                    @if !form.images.is_empty() {
                        div class="gallery previews" {
                            @for (i, src) in form.images.iter().take(MAX_PROPERTY_IMAGES).enumerate() {
                                img src=(src) alt=(format!("Preview {}", i + 1));
                            }
                        }
                    }

                    (button("Submit Property"))
                }
            }
        },
    )
}
