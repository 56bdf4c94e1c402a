use super::*;

#[test]
fn validate_login_input_trims_cedula() {
    assert_eq!(
        validate_login_input("  12345678 ", "secreto123"),
        Ok(("12345678".to_owned(), "secreto123".to_owned()))
    );
}

#[test]
fn validate_login_input_keeps_password_as_typed() {
    assert_eq!(
        validate_login_input("12345678", " con espacios "),
        Ok(("12345678".to_owned(), " con espacios ".to_owned()))
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "secreto123"), Err("Ingresa tu cédula y contraseña"));
    assert_eq!(validate_login_input("12345678", ""), Err("Ingresa tu cédula y contraseña"));
}
