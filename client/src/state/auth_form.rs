//! Form state shared by the sign-in and sign-up pages.
//!
//! DESIGN
//! ======
//! A small reducer: pages dispatch `FormAction`s into an `RwSignal<AuthForm>`
//! and render from the resulting state. Field errors are only surfaced for
//! fields the user has touched.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

use std::collections::{BTreeMap, BTreeSet};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Password,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Password => "Password",
        }
    }
}

pub type FieldErrors = BTreeMap<Field, String>;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl FormValues {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Password => &self.password,
        }
    }

    fn set(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FormAction {
    SetField(Field, String),
    Touch(Field),
    SetErrors(FieldErrors),
    SetLoading(bool),
    SetServerError(String),
    Succeed,
    ToggleShowPassword,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthForm {
    pub values: FormValues,
    pub errors: FieldErrors,
    pub touched: BTreeSet<Field>,
    pub loading: bool,
    pub server_error: Option<String>,
    pub success: bool,
    pub show_password: bool,
}

impl AuthForm {
    pub fn apply(&mut self, action: FormAction) {
        match action {
            FormAction::SetField(field, value) => {
                self.values.set(field, value);
                self.server_error = None;
            }
            FormAction::Touch(field) => {
                self.touched.insert(field);
            }
            FormAction::SetErrors(errors) => self.errors = errors,
            FormAction::SetLoading(loading) => self.loading = loading,
            FormAction::SetServerError(message) => {
                self.server_error = Some(message);
                self.loading = false;
            }
            FormAction::Succeed => {
                self.success = true;
                self.loading = false;
            }
            FormAction::ToggleShowPassword => self.show_password = !self.show_password,
        }
    }

    /// Error for `field`, only once the field has been touched.
    pub fn visible_error(&self, field: Field) -> Option<&str> {
        if !self.touched.contains(&field) {
            return None;
        }
        self.errors.get(&field).map(String::as_str)
    }

    /// Mark every field in `fields` as touched, e.g. on submit.
    pub fn touch_all(&mut self, fields: &[Field]) {
        self.touched.extend(fields.iter().copied());
    }
}

/// Required-field check: every listed field must be non-blank.
pub fn missing_fields(values: &FormValues, required: &[Field]) -> FieldErrors {
    required
        .iter()
        .filter(|field| values.get(**field).trim().is_empty())
        .map(|field| (*field, format!("{} is required.", field.label())))
        .collect()
}
