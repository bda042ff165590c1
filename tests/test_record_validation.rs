//! Tests for the record ruleset through the public API.
//!
//! Covers field verdicts, record aggregation, formatter behavior and the
//! typed value objects, including the form-entry flow from raw input to
//! the payload sent to the server.

use client_data_compiler::domain::{
    format_email, format_field, format_key, format_name, format_phone, sanitize_phone_input,
    validate_email, validate_field, validate_key, validate_name, validate_phone, validate_record,
    ClientField, ClientRecord, EmailAddress, PhoneNumber, ValidatedClient, ValidationError,
    ALLOWED_EMAIL_DOMAINS, ALLOWED_PHONE_PREFIXES,
};
use client_data_compiler::report::{describe_errors, revalidate};
use std::collections::BTreeMap;

/// Strings of digits, with and without surrounding whitespace.
fn digit_strings() -> Vec<String> {
    let mut out = Vec::new();
    for n in [0u64, 7, 42, 1001, 98_765, 1_234_567_890, u64::MAX] {
        let digits = n.to_string();
        out.push(digits.clone());
        out.push(format!("  {}", digits));
        out.push(format!("{}\t", digits));
        out.push(format!("\n {} \n", digits));
    }
    out.push("0007".to_string());
    out
}

/// Inputs the formatters must be idempotent on.
fn assorted_inputs() -> Vec<&'static str> {
    vec![
        "",
        " ",
        "juan",
        "  juan PÉREZ garcía  ",
        "JOSÉ   maría\tDE la  cruz",
        "o'brien-smith",
        "ÑANDÚ ñandú",
        "straße",
        "Juan.Pérez@Gmail.COM ",
        "  MIXED Case@Example.Org",
        "123",
        "a  b",
    ]
}

// ============================================================================
// Key
// ============================================================================

#[test]
fn test_digit_keys_pass() {
    for key in digit_strings() {
        assert_eq!(validate_key(&key), Ok(()), "key {:?}", key);
    }
}

#[test]
fn test_keys_with_non_digits_fail() {
    for key in ["12a", "a12", "1.5", "-1", "+52", "1 2", "١٢٣", "１２３", "12\u{00A0}3"] {
        assert_eq!(
            validate_key(key),
            Err(ValidationError::NotNumeric),
            "key {:?}",
            key
        );
    }
}

#[test]
fn test_blank_key_is_empty() {
    for key in ["", "   ", "\t\n"] {
        assert_eq!(
            validate_key(key),
            Err(ValidationError::EmptyField(ClientField::Key))
        );
    }
}

// ============================================================================
// Name
// ============================================================================

#[test]
fn test_names() {
    assert_eq!(validate_name("Juan Pérez"), Ok(()));
    assert_eq!(validate_name("María José O'Brien-Núñez Jr."), Ok(()));
    assert_eq!(validate_name("Juan 3"), Err(ValidationError::InvalidCharacters));
    assert_eq!(validate_name("Juan@"), Err(ValidationError::InvalidCharacters));
    assert_eq!(validate_name("Zoë"), Err(ValidationError::InvalidCharacters));
    assert_eq!(
        validate_name("  "),
        Err(ValidationError::EmptyField(ClientField::Name))
    );
}

// ============================================================================
// Email
// ============================================================================

#[test]
fn test_email_examples() {
    assert_eq!(validate_email("juan.perez@gmail.com"), Ok(()));
    assert_eq!(
        validate_email("juan@mail.gmail.com"),
        Err(ValidationError::DomainNotAllowed)
    );
    assert_eq!(
        validate_email("not-an-email"),
        Err(ValidationError::InvalidFormat)
    );
}

#[test]
fn test_every_allowed_domain_passes_case_insensitively() {
    for domain in ALLOWED_EMAIL_DOMAINS {
        assert_eq!(validate_email(&format!("ana@{}", domain)), Ok(()));
        assert_eq!(
            validate_email(&format!("  ANA@{}  ", domain.to_uppercase())),
            Ok(())
        );
    }
}

#[test]
fn test_email_shape_failures() {
    for email in ["@gmail.com", "juan@", "juan@gmail", "juan pérez@gmail.com", "a@b@gmail.com"] {
        assert_eq!(
            validate_email(email),
            Err(ValidationError::InvalidFormat),
            "email {:?}",
            email
        );
    }
}

#[test]
fn test_email_domain_lookalikes() {
    for email in ["juan@gmail.co", "juan@gmail.com.mx", "juan@notgmail.com"] {
        assert_eq!(
            validate_email(email),
            Err(ValidationError::DomainNotAllowed),
            "email {:?}",
            email
        );
    }
}

// ============================================================================
// Phone
// ============================================================================

#[test]
fn test_phone_examples() {
    assert_eq!(validate_phone("961 123 4567"), Ok(()));
    assert_eq!(
        validate_phone("123-456-7890"),
        Err(ValidationError::PrefixNotAllowed)
    );
    assert_eq!(validate_phone("96112345"), Err(ValidationError::TooShort));
}

#[test]
fn test_every_allowed_prefix_passes() {
    for prefix in ALLOWED_PHONE_PREFIXES {
        assert_eq!(validate_phone(&format!("{}1234567", prefix)), Ok(()));
        assert_eq!(validate_phone(&format!("({}) 123-4567", prefix)), Ok(()));
    }
}

#[test]
fn test_long_phone_judged_on_leading_digits() {
    assert_eq!(validate_phone("+52 961 123 4567"), Err(ValidationError::PrefixNotAllowed));
    assert_eq!(validate_phone("961 123 4567 ext 89"), Ok(()));
}

#[test]
fn test_phone_with_only_punctuation_is_too_short() {
    assert_eq!(validate_phone("(---)"), Err(ValidationError::TooShort));
    assert_eq!(
        validate_phone(""),
        Err(ValidationError::EmptyField(ClientField::Phone))
    );
}

// ============================================================================
// Record
// ============================================================================

#[test]
fn test_record_reports_every_failing_field() {
    let record = ClientRecord::new("12a", "Juan Pérez", "juan@example.com", "9611234567");
    let result = validate_record(&record);

    assert!(!result.is_valid());
    assert_eq!(result.error_count(), 2);
    assert_eq!(result.error(ClientField::Key), Some(&ValidationError::NotNumeric));
    assert_eq!(
        result.error(ClientField::Email),
        Some(&ValidationError::DomainNotAllowed)
    );
    assert!(!result.has_error(ClientField::Name));
    assert!(!result.has_error(ClientField::Phone));
}

#[test]
fn test_all_empty_record() {
    let result = validate_record(&ClientRecord::default());
    assert_eq!(result.error_count(), 4);
    for field in ClientField::ALL {
        assert_eq!(result.error(field), Some(&ValidationError::EmptyField(field)));
    }
}

#[test]
fn test_record_agrees_with_field_validators() {
    let record = ClientRecord::new("1001", "Ana 2", "ana@gmail.com", "123");
    let result = validate_record(&record);
    for field in ClientField::ALL {
        assert_eq!(
            result.error(field).copied(),
            validate_field(field, record.get(field)).err()
        );
    }
}

#[test]
fn test_result_json_uses_wire_names() {
    let record = ClientRecord::new("", "Juan", "juan@gmail.com", "961");
    let json = serde_json::to_value(validate_record(&record)).unwrap();

    assert_eq!(json["is_valid"], false);
    assert_eq!(json["errors"]["clave"], "La clave no puede estar vacía");
    assert_eq!(
        json["errors"]["telefono"],
        "El teléfono debe tener al menos 10 dígitos"
    );
    assert!(json["errors"].get("nombre").is_none());
}

// ============================================================================
// Formatters
// ============================================================================

#[test]
fn test_format_examples() {
    assert_eq!(format_phone("9611234567"), "961-123-4567");
    assert_eq!(format_phone("123"), "123");
    assert_eq!(format_phone("(961) 123 4567"), "961-123-4567");
    assert_eq!(format_phone("52 961 123 4567"), "52 961 123 4567");
    assert_eq!(format_name("  juan PÉREZ garcía  "), "Juan Pérez García");
    assert_eq!(format_email("  Juan@Gmail.COM "), "juan@gmail.com");
    assert_eq!(format_key(" 007 "), "007");
}

#[test]
fn test_format_name_collapses_whitespace_runs() {
    assert_eq!(format_name("juan   pérez"), "Juan Pérez");
    assert_eq!(format_name("ana\tmaría"), "Ana María");
    assert_eq!(format_name("   "), "");
}

#[test]
fn test_formatters_idempotent() {
    for input in assorted_inputs() {
        let email = format_email(input);
        assert_eq!(format_email(&email), email, "email {:?}", input);

        let name = format_name(input);
        assert_eq!(format_name(&name), name, "name {:?}", input);

        let phone = format_phone(input);
        assert_eq!(format_phone(&phone), phone, "phone {:?}", input);

        let key = format_key(input);
        assert_eq!(format_key(&key), key, "key {:?}", input);
    }
}

#[test]
fn test_valid_values_stay_valid_after_formatting() {
    let inputs = [
        ClientRecord::new(" 1001 ", "juan   pérez", "JUAN@GMAIL.COM", "961 123 4567"),
        ClientRecord::new("007", "o'brien-smith jr.", " ana@Outlook.com", "(992) 123-4567"),
        ClientRecord::new("12a", "ana 3", "ana@example.com", "123"),
    ];
    for record in inputs {
        for field in ClientField::ALL {
            let raw = record.get(field);
            if validate_field(field, raw).is_err() {
                continue;
            }
            let formatted = format_field(field, raw);
            assert_eq!(
                validate_field(field, &formatted),
                Ok(()),
                "{:?} {:?} -> {:?}",
                field,
                raw,
                formatted
            );
        }
    }
}

#[test]
fn test_case_mapping_can_repair_a_name() {
    // KELVIN SIGN lower-cases to ASCII 'k', so formatting can turn a
    // rejected name into an accepted one; never the other way round
    let raw = "a\u{212A}";
    assert_eq!(validate_name(raw), Err(ValidationError::InvalidCharacters));

    let formatted = format_name(raw);
    assert_eq!(formatted, "Ak");
    assert_eq!(validate_name(&formatted), Ok(()));
}

#[test]
fn test_spreadsheet_byte_order_mark_is_whitespace() {
    // cells exported with a leading BOM still validate and format cleanly
    let record = ClientRecord::new(
        "\u{FEFF}1001",
        "\u{FEFF}juan\u{FEFF}pérez",
        "\u{FEFF}Juan@Gmail.com",
        "\u{FEFF}9611234567",
    );
    assert!(validate_record(&record).is_valid());

    let client = ValidatedClient::try_from(&record).unwrap();
    assert_eq!(client.key.as_str(), "1001");
    assert_eq!(client.name.as_str(), "Juan Pérez");
    assert_eq!(client.email.as_str(), "juan@gmail.com");
    assert_eq!(client.phone.as_str(), "9611234567");
    assert_eq!(client.phone.formatted(), "961-123-4567");
}

#[test]
fn test_sanitize_phone_input() {
    assert_eq!(sanitize_phone_input("(961) 123-45ab67"), "(961) 123-4567");
    assert_eq!(sanitize_phone_input("+52 961"), "52 961");
}

// ============================================================================
// Value objects
// ============================================================================

#[test]
fn test_value_objects_normalize() {
    let email = EmailAddress::new("  Juan@Gmail.COM").unwrap();
    assert_eq!(email.as_str(), "juan@gmail.com");
    assert_eq!(email.domain(), "gmail.com");

    let phone = PhoneNumber::new("961 123 4567").unwrap();
    assert_eq!(phone.prefix(), "961");
    assert_eq!(phone.formatted(), "961-123-4567");

    assert_eq!(
        PhoneNumber::new("123-456-7890").unwrap_err(),
        ValidationError::PrefixNotAllowed
    );
}

#[test]
fn test_validated_client_from_invalid_record() {
    let record = ClientRecord::new("abc", "", "juan@gmail.com", "9611234567");
    let result = ValidatedClient::try_from(&record).unwrap_err();

    assert_eq!(result.error_count(), 2);
    assert_eq!(
        result.labeled_messages(),
        vec![
            "Clave: La clave debe ser un número válido",
            "Nombre: El nombre no puede estar vacío",
        ]
    );
}

// ============================================================================
// End to end
// ============================================================================

#[test]
fn test_form_entry_end_to_end() {
    let record = ClientRecord::new("1001", "Juan Pérez", "JUAN@GMAIL.COM", "9611234567");

    assert!(validate_record(&record).is_valid());
    assert_eq!(format_email(&record.email), "juan@gmail.com");
    assert_eq!(format_phone(&record.phone), "961-123-4567");

    let validated = ValidatedClient::try_from(&record).unwrap();
    let payload = serde_json::to_value(ClientRecord::from(validated)).unwrap();
    assert_eq!(
        payload,
        serde_json::json!({
            "clave": "1001",
            "nombre": "Juan Pérez",
            "correo": "juan@gmail.com",
            "telefono": "961-123-4567"
        })
    );
}

#[test]
fn test_bulk_upload_end_to_end() {
    let rows: Vec<ClientRecord> = serde_json::from_str(
        r#"[
            {"key": "1001", "name": "Juan Pérez", "email": "juan@gmail.com", "phone": "9611234567"},
            {"clave": "x", "nombre": "Ana", "correo": "ana@outlook.com", "telefono": "9921234567"},
            {"clave": "1003", "nombre": "Luis", "correo": "luis@live.com"}
        ]"#,
    )
    .unwrap();

    let report = revalidate(&rows);
    assert_eq!(report.total, 3);
    assert_eq!(report.valid, 1);
    assert_eq!(report.invalid_percentage(), 67);

    // Server-style error map rendered with the same labels
    let mut errors = BTreeMap::new();
    for row in report.invalid_rows() {
        for (field, message) in row.result.messages() {
            errors.insert(field.wire_name().to_string(), message);
        }
    }
    assert_eq!(
        describe_errors(&errors),
        vec![
            "Clave: La clave debe ser un número válido",
            "Teléfono: El teléfono no puede estar vacío",
        ]
    );
}
