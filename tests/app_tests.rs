use base_converter::{App, Base, ErrorDialog, Message};

fn app_with(input: &str, base: Base) -> App {
    let mut app = App::new();
    app.update(Message::InputChanged(input.to_string()));
    app.update(Message::BaseSelected(base));
    app
}

#[test]
fn test_fresh_app_state() {
    let app = App::default();
    assert_eq!(app.base, Base::Decimal);
    assert!(app.input.is_empty());
    assert!(app.output.is_empty());
    assert!(app.dialog.is_none());
}

#[test]
fn test_successful_convert_fills_output() {
    let mut app = app_with("FF", Base::Hexadecimal);
    app.update(Message::Convert);

    assert_eq!(app.output, "Binary: 11111111\nOctal: 377\nHexadecimal: FF");
    assert!(app.dialog.is_none());
}

#[test]
fn test_empty_convert_opens_dialog() {
    let mut app = App::new();
    app.update(Message::Convert);

    assert_eq!(
        app.dialog,
        Some(ErrorDialog {
            title: "Error".to_string(),
            message: "Please enter a number.".to_string(),
        })
    );
}

#[test]
fn test_failed_convert_keeps_previous_output() {
    let mut app = app_with("1010", Base::Binary);
    app.update(Message::Convert);
    let previous = app.output.clone();
    assert_eq!(previous, "Binary: 1010\nOctal: 12\nHexadecimal: A");

    app.update(Message::InputChanged("8".to_string()));
    app.update(Message::BaseSelected(Base::Octal));
    app.update(Message::Convert);

    assert_eq!(app.output, previous);
    let dialog = app.dialog.as_ref().unwrap();
    assert_eq!(dialog.message, "Invalid input or base. Please try again.");
}

#[test]
fn test_close_dialog() {
    let mut app = app_with("abc", Base::Decimal);
    app.update(Message::Convert);
    assert!(app.dialog.is_some());

    app.update(Message::CloseDialog);
    assert!(app.dialog.is_none());

    // closing with nothing open is harmless
    app.update(Message::CloseDialog);
    assert!(app.dialog.is_none());
}

#[test]
fn test_request_reflects_state() {
    let app = app_with(" 0o17 ", Base::Octal);
    let request = app.request();
    assert_eq!(request.input, " 0o17 ");
    assert_eq!(request.base, Base::Octal);
}

#[test]
fn test_base_switch_reinterprets_input() {
    let mut app = app_with("10", Base::Decimal);
    app.update(Message::Convert);
    assert!(app.output.ends_with("Hexadecimal: A"));

    app.update(Message::BaseSelected(Base::Hexadecimal));
    app.update(Message::Convert);
    assert!(app.output.ends_with("Hexadecimal: 10"));
    assert!(app.output.starts_with("Binary: 10000\n"));
}

#[test]
fn test_view_builds_with_and_without_dialog() {
    let mut app = App::new();
    drop(app.view());

    app.update(Message::Convert);
    assert!(app.dialog.is_some());
    // overlay layer with the backdrop and the dialog box
    drop(app.view());

    app.update(Message::CloseDialog);
    drop(app.view());
    assert!(app.dialog.is_none());
}

#[test]
fn test_wide_decimal_fills_output() {
    let mut app = app_with(&format!("1{}", "0".repeat(40)), Base::Decimal);
    app.update(Message::Convert);

    assert!(app.dialog.is_none());
    assert!(app.output.starts_with("Binary: 1"));
    assert!(app.output.ends_with("\nHexadecimal: 1D6329F1C35CA4BFABB9F5610000000000"));
}

#[test]
fn test_whitespace_only_shows_invalid_message() {
    let mut app = app_with("   ", Base::Hexadecimal);
    app.update(Message::Convert);

    let dialog = app.dialog.as_ref().unwrap();
    assert_eq!(dialog.message, "Invalid input or base. Please try again.");
}
