use super::*;

#[test]
fn auth_tab_defaults_to_login() {
    assert_eq!(AuthTab::default(), AuthTab::Login);
}

#[test]
fn auth_tab_labels_and_log_keys() {
    assert_eq!(AuthTab::Login.label(), "Login");
    assert_eq!(AuthTab::SignUp.label(), "Sign Up");
    assert_eq!(AuthTab::Login.key(), "login");
    assert_eq!(AuthTab::SignUp.key(), "signup");
}

#[test]
fn password_visibility_toggles_input_type() {
    assert_eq!(password_input_type(false), "password");
    assert_eq!(password_input_type(true), "text");
}

#[test]
fn validate_login_input_trims_email_and_requires_both() {
    assert_eq!(
        validate_login_input("  ash@example.com ", "pikachu"),
        Ok(("ash@example.com".to_owned(), "pikachu".to_owned()))
    );
    assert_eq!(validate_login_input("   ", "pikachu"), Err(MISSING_LOGIN_FIELDS));
    assert_eq!(validate_login_input("ash@example.com", ""), Err(MISSING_LOGIN_FIELDS));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    assert_eq!(
        validate_login_input("a@b.com", " secret "),
        Ok(("a@b.com".to_owned(), " secret ".to_owned()))
    );
}

#[test]
fn validate_signup_input_requires_all_fields() {
    assert_eq!(
        validate_signup_input(" Ash Ketchum ", "ash@example.com", "pikachu"),
        Ok(("Ash Ketchum".to_owned(), "ash@example.com".to_owned()))
    );
    assert_eq!(validate_signup_input("", "ash@example.com", "pikachu"), Err(MISSING_SIGNUP_FIELDS));
    assert_eq!(validate_signup_input("Ash", " ", "pikachu"), Err(MISSING_SIGNUP_FIELDS));
    assert_eq!(validate_signup_input("Ash", "ash@example.com", ""), Err(MISSING_SIGNUP_FIELDS));
}
