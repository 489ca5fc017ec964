use super::*;

// =============================================================
// Reducer
// =============================================================

#[test]
fn set_field_updates_value_and_clears_server_error() {
    let mut form = AuthForm::default();
    form.apply(FormAction::SetServerError("EMAIL_EXISTS".to_owned()));
    form.apply(FormAction::SetField(Field::Email, "a@b.com".to_owned()));
    assert_eq!(form.values.email, "a@b.com");
    assert_eq!(form.server_error, None);
}

#[test]
fn server_error_stops_loading() {
    let mut form = AuthForm::default();
    form.apply(FormAction::SetLoading(true));
    form.apply(FormAction::SetServerError("nope".to_owned()));
    assert!(!form.loading);
    assert_eq!(form.server_error.as_deref(), Some("nope"));
}

#[test]
fn succeed_stops_loading() {
    let mut form = AuthForm::default();
    form.apply(FormAction::SetLoading(true));
    form.apply(FormAction::Succeed);
    assert!(form.success);
    assert!(!form.loading);
}

#[test]
fn toggle_show_password_flips() {
    let mut form = AuthForm::default();
    form.apply(FormAction::ToggleShowPassword);
    assert!(form.show_password);
    form.apply(FormAction::ToggleShowPassword);
    assert!(!form.show_password);
}

#[test]
fn errors_hidden_until_touched() {
    let mut form = AuthForm::default();
    form.apply(FormAction::SetErrors(missing_fields(&form.values, &[Field::Email])));
    assert_eq!(form.visible_error(Field::Email), None);
    form.apply(FormAction::Touch(Field::Email));
    assert_eq!(form.visible_error(Field::Email), Some("Email is required."));
}

#[test]
fn touch_all_reveals_every_error() {
    let mut form = AuthForm::default();
    let fields = [Field::Name, Field::Email, Field::Password];
    form.apply(FormAction::SetErrors(missing_fields(&form.values, &fields)));
    form.touch_all(&fields);
    for field in fields {
        assert!(form.visible_error(field).is_some());
    }
}

// =============================================================
// Required fields
// =============================================================

#[test]
fn missing_fields_treats_whitespace_as_blank() {
    let values = FormValues { name: "  ".to_owned(), email: "a@b.com".to_owned(), password: "x".to_owned() };
    let errors = missing_fields(&values, &[Field::Name, Field::Email, Field::Password]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.get(&Field::Name).map(String::as_str), Some("Name is required."));
}

#[test]
fn missing_fields_only_checks_requested_fields() {
    let values = FormValues::default();
    let errors = missing_fields(&values, &[Field::Email, Field::Password]);
    assert!(!errors.contains_key(&Field::Name));
    assert_eq!(errors.len(), 2);
}
