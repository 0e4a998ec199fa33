// Signup form driven by a TOML definition
//
// Run with: cargo run -p rusty-forms-validator --example signup

use anyhow::Result;
use rusty_forms_validator::{FormDefinition, LocaleCatalog, TextField, UiField};

const FORM: &str = r#"
[[fields]]
name = "username"
validator = "validateUsername"
message_key = "username.invalid"
error_style = "field-error"
config = { required = true }

[[fields]]
name = "email"
validator = "validateEmail"
message_key = "email.invalid"
error_style = "field-error"
config = { required = true }

[[fields]]
name = "password"
validator = "validatePassword"
message_key = "password.weak"
error_style = "field-error"
config = { required = true, strength = "strong" }
"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let catalog = LocaleCatalog::new("en")
        .with_message("username.invalid", "Pick a username of 3 to 20 letters or digits")
        .with_message("email.invalid", "Enter a valid email address")
        .with_message("password.weak", "Use 8+ characters with upper, lower, digit and symbol");

    let username = TextField::new("al");
    let email = TextField::new("al@example");
    let password = TextField::new("secret");

    let definition = FormDefinition::from_toml_str(FORM)?;
    let mut form = definition
        .build(|name| match name {
            "username" => Some(&username as &dyn UiField),
            "email" => Some(&email as &dyn UiField),
            "password" => Some(&password as &dyn UiField),
            _ => None,
        })?
        .with_catalog(catalog);

    report("first attempt", form.do_validation()?, &[&username, &email, &password]);
    for failure in form.last_failures() {
        println!(
            "  field #{}: {} ({})",
            failure.index,
            failure.message,
            failure.detail.as_deref().unwrap_or("-")
        );
    }

    username.set_value("alice");
    email.set_value("alice@example.com");
    password.set_value("Secure@Pass1");

    report("second attempt", form.do_validation()?, &[&username, &email, &password]);
    Ok(())
}

fn report(label: &str, message: Option<String>, fields: &[&TextField]) {
    match message {
        Some(message) => println!("{}: {}", label, message),
        None => println!("{}: form is valid", label),
    }
    for field in fields {
        println!("  {:?} -> {:?}", field.value(), field.styles());
    }
}
