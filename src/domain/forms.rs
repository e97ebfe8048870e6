// src/domain/forms.rs
//
// Typed form records. Each form declares its validation rules in a static
// table; `validate` walks the table, so no rule is inferred from input names.

use std::collections::HashMap;

pub const MAX_PROPERTY_IMAGES: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    Required,
    Email,
    MinLen(usize),
    /// Field must have parsed as a number.
    Number,
    AtLeast(u64),
    MaxItems(usize),
}

pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub rules: &'static [Rule],
}

pub enum FieldValue<'a> {
    Text(&'a str),
    /// `entered` is false when the input was left blank.
    Number { value: Option<u64>, entered: bool },
    List(&'a [String]),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors(pub Vec<FieldError>);

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn for_field(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.0.push(FieldError {
            field,
            message: message.into(),
        });
    }
}

pub trait FormSpec {
    const FIELDS: &'static [FieldSpec];

    fn value(&self, name: &str) -> FieldValue<'_>;

    /// Checks spanning more than one field.
    fn cross_checks(&self, _errors: &mut FormErrors) {}
}

/// Run every rule of every field; the first failing rule per field is reported.
pub fn validate<F: FormSpec>(form: &F) -> Result<(), FormErrors> {
    let mut errors = FormErrors::default();

    for spec in F::FIELDS {
        let value = form.value(spec.name);
        if let Some(message) = spec.rules.iter().find_map(|rule| check(rule, spec, &value)) {
            errors.push(spec.name, message);
        }
    }

    form.cross_checks(&mut errors);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check(rule: &Rule, spec: &FieldSpec, value: &FieldValue<'_>) -> Option<String> {
    let label = spec.label;
    match (rule, value) {
        (Rule::Required, FieldValue::Text(s)) if s.trim().is_empty() => {
            Some(format!("{label} is required"))
        }
        (Rule::Required, FieldValue::Number { entered: false, .. }) => {
            Some(format!("{label} is required"))
        }
        (Rule::Required, FieldValue::List(items)) if items.is_empty() => {
            Some(format!("{label} is required"))
        }
        (Rule::Email, FieldValue::Text(s)) if !looks_like_email(s) => {
            Some(format!("{label} must be a valid email address"))
        }
        (Rule::MinLen(n), FieldValue::Text(s)) if s.chars().count() < *n => {
            Some(format!("{label} must be at least {n} characters"))
        }
        (Rule::Number, FieldValue::Number { value: None, .. }) => {
            Some(format!("{label} must be a number"))
        }
        (Rule::AtLeast(min), FieldValue::Number { value: Some(v), .. }) if v < min => {
            Some(format!("{label} must be at least {min}"))
        }
        (Rule::MaxItems(max), FieldValue::List(items)) if items.len() > *max => {
            Some(format!("{label}: at most {max} allowed"))
        }
        _ => None,
    }
}

fn looks_like_email(s: &str) -> bool {
    let s = s.trim();
    match s.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.ends_with('.'),
        None => false,
    }
}

fn text(fields: &HashMap<String, String>, name: &str) -> String {
    fields.get(name).map(|v| v.trim().to_string()).unwrap_or_default()
}

/// Raw password fields are kept as typed.
fn raw(fields: &HashMap<String, String>, name: &str) -> String {
    fields.get(name).cloned().unwrap_or_default()
}

fn number(fields: &HashMap<String, String>, name: &str) -> Option<u64> {
    fields
        .get(name)
        .map(|v| v.trim().replace(',', ""))
        .filter(|v| !v.is_empty())
        .and_then(|v| v.parse().ok())
}

// ---------------------------------------------------------------------------
// Login

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        Self {
            email: text(fields, "email").to_lowercase(),
            password: raw(fields, "password"),
        }
    }
}

impl FormSpec for LoginForm {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "email",
            label: "Email",
            rules: &[Rule::Required, Rule::Email],
        },
        FieldSpec {
            name: "password",
            label: "Password",
            rules: &[Rule::Required],
        },
    ];

    fn value(&self, name: &str) -> FieldValue<'_> {
        match name {
            "email" => FieldValue::Text(&self.email),
            "password" => FieldValue::Text(&self.password),
            _ => FieldValue::Text(""),
        }
    }
}

// ---------------------------------------------------------------------------
// Register

#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        Self {
            full_name: text(fields, "fullName"),
            email: text(fields, "email").to_lowercase(),
            phone: text(fields, "phone"),
            address: text(fields, "address"),
            password: raw(fields, "password"),
            confirm_password: raw(fields, "confirmPassword"),
        }
    }
}

impl FormSpec for RegisterForm {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "fullName",
            label: "Full Name",
            rules: &[Rule::Required],
        },
        FieldSpec {
            name: "email",
            label: "Email",
            rules: &[Rule::Required, Rule::Email],
        },
        FieldSpec {
            name: "phone",
            label: "Phone Number",
            rules: &[Rule::Required, Rule::MinLen(7)],
        },
        FieldSpec {
            name: "address",
            label: "Residential Address",
            rules: &[Rule::Required],
        },
        FieldSpec {
            name: "password",
            label: "Password",
            rules: &[Rule::Required, Rule::MinLen(6)],
        },
        FieldSpec {
            name: "confirmPassword",
            label: "Confirm Password",
            rules: &[Rule::Required],
        },
    ];

    fn value(&self, name: &str) -> FieldValue<'_> {
        match name {
            "fullName" => FieldValue::Text(&self.full_name),
            "email" => FieldValue::Text(&self.email),
            "phone" => FieldValue::Text(&self.phone),
            "address" => FieldValue::Text(&self.address),
            "password" => FieldValue::Text(&self.password),
            "confirmPassword" => FieldValue::Text(&self.confirm_password),
            _ => FieldValue::Text(""),
        }
    }

    fn cross_checks(&self, errors: &mut FormErrors) {
        if !self.confirm_password.is_empty() && self.password != self.confirm_password {
            errors.push("confirmPassword", "Passwords do not match");
        }
    }
}

// ---------------------------------------------------------------------------
// New property

#[derive(Debug, Clone)]
pub struct NewPropertyForm {
    pub title: String,
    pub description: String,
    pub address: String,
    pub state: String,
    pub local_govt: String,
    /// Naira per year.
    pub price: Option<u64>,
    pub bedrooms: Option<u64>,
    pub bathrooms: Option<u64>,
    /// Square feet.
    pub area: Option<u64>,
    pub images: Vec<String>,
    /// Number fields that were filled in but did not parse.
    pub unparsed: Vec<&'static str>,
}

impl Default for NewPropertyForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            address: String::new(),
            state: String::new(),
            local_govt: String::new(),
            price: None,
            bedrooms: Some(1),
            bathrooms: Some(1),
            area: None,
            images: Vec::new(),
            unparsed: Vec::new(),
        }
    }
}

impl NewPropertyForm {
    /// `images` is a newline-separated list of image URLs.
    pub fn from_fields(fields: &HashMap<String, String>) -> Self {
        let images = fields
            .get("images")
            .map(|v| {
                v.lines()
                    .map(str::trim)
                    .filter(|l| !l.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        let unparsed = ["price", "bedrooms", "bathrooms", "area"]
            .into_iter()
            .filter(|name| !text(fields, name).is_empty() && number(fields, name).is_none())
            .collect();

        Self {
            title: text(fields, "title"),
            description: text(fields, "description"),
            address: text(fields, "address"),
            state: text(fields, "state"),
            local_govt: text(fields, "localGovt"),
            price: number(fields, "price"),
            bedrooms: number(fields, "bedrooms"),
            bathrooms: number(fields, "bathrooms"),
            area: number(fields, "area"),
            images,
            unparsed,
        }
    }
}

impl NewPropertyForm {
    fn number_value(&self, name: &str, value: Option<u64>) -> FieldValue<'_> {
        FieldValue::Number {
            value,
            entered: value.is_some() || self.unparsed.iter().any(|n| *n == name),
        }
    }
}

impl FormSpec for NewPropertyForm {
    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            name: "title",
            label: "Property Title",
            rules: &[Rule::Required],
        },
        FieldSpec {
            name: "description",
            label: "Property Description",
            rules: &[Rule::Required],
        },
        FieldSpec {
            name: "address",
            label: "Address",
            rules: &[Rule::Required],
        },
        FieldSpec {
            name: "state",
            label: "State",
            rules: &[Rule::Required],
        },
        FieldSpec {
            name: "localGovt",
            label: "Local Government Area",
            rules: &[Rule::Required],
        },
        FieldSpec {
            name: "price",
            label: "Price",
            rules: &[Rule::Required, Rule::Number, Rule::AtLeast(1)],
        },
        FieldSpec {
            name: "bedrooms",
            label: "Bedrooms",
            rules: &[Rule::Required, Rule::Number, Rule::AtLeast(1)],
        },
        FieldSpec {
            name: "bathrooms",
            label: "Bathrooms",
            rules: &[Rule::Required, Rule::Number, Rule::AtLeast(1)],
        },
        FieldSpec {
            name: "area",
            label: "Area",
            rules: &[Rule::Required, Rule::Number],
        },
        FieldSpec {
            name: "images",
            label: "Property Images",
            rules: &[Rule::Required, Rule::MaxItems(MAX_PROPERTY_IMAGES)],
        },
    ];

    fn value(&self, name: &str) -> FieldValue<'_> {
        match name {
            "title" => FieldValue::Text(&self.title),
            "description" => FieldValue::Text(&self.description),
            "address" => FieldValue::Text(&self.address),
            "state" => FieldValue::Text(&self.state),
            "localGovt" => FieldValue::Text(&self.local_govt),
            "price" => self.number_value("price", self.price),
            "bedrooms" => self.number_value("bedrooms", self.bedrooms),
            "bathrooms" => self.number_value("bathrooms", self.bathrooms),
            "area" => self.number_value("area", self.area),
            "images" => FieldValue::List(&self.images),
            _ => FieldValue::Text(""),
        }
    }

    fn cross_checks(&self, errors: &mut FormErrors) {
        if self.state.is_empty() || self.local_govt.is_empty() {
            return;
        }
        let known = crate::geos::local_govts_for(&self.state)
            .iter()
            .any(|lga| *lga == self.local_govt);
        if !known {
            errors.push(
                "localGovt",
                format!("{} is not in {}", self.local_govt, self.state),
            );
        }
    }
}
