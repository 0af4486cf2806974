//! Integration tests for the public validator surface

use chrono::NaiveDate;
use formcheck_validation::*;
use serde_json::json;
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_email_is_whitespace_insensitive() {
    let samples = ["a@b.co", "user@example.com", "bad@", "no-at-sign", "x@y.z"];

    for sample in samples {
        let padded = format!("  {}\t", sample);
        assert_eq!(email(&padded), email(sample), "padding changed the result for '{}'", sample);
    }
}

#[test]
fn test_numeric_strings() {
    assert!(is_number("007"));
    assert!(!is_number("-1"));
    assert!(!is_number("1.5"));
    assert!(!is_number(""));
}

#[test]
fn test_not_initialized() {
    assert!(not_initialized(&[FieldValue::from("a"), FieldValue::from(""), FieldValue::from("b")]));
    assert!(!not_initialized(&[FieldValue::from("a"), FieldValue::from("b")]));
    assert!(not_initialized(&[FieldValue::Null]));

    let form = json!({"name": "Ana"});
    let form = form.as_object().unwrap();
    let values = [
        FieldValue::from_field(form, "name"),
        FieldValue::from_field(form, "email"),
    ];
    assert!(not_initialized(&values));
}

#[test]
fn test_cpf_last_digit_flip() {
    init_tracing();

    let valid = ["111.444.777-35", "529.982.247-25", "123.456.789-09"];
    for cpf in valid {
        assert!(is_valid_cpf(cpf), "'{}' should be valid", cpf);

        let last = cpf.chars().last().unwrap().to_digit(10).unwrap();
        let flipped = format!("{}{}", &cpf[..cpf.len() - 1], (last + 1) % 10);
        assert!(!is_valid_cpf(&flipped), "'{}' should be invalid", flipped);
    }
}

#[test]
fn test_cpf_check_digits_match_validator() {
    for base in ["111444777", "529982247", "935411347", "000000001"] {
        let (first, second) = cpf_check_digits(base).unwrap();
        assert!(is_valid_cpf(&format!("{}{}{}", base, first, second)));
    }
}

#[test]
fn test_phone_numbers() {
    init_tracing();

    assert!(!is_landline("11999999999"));
    assert!(is_landline("1133334444"));
    assert!(!is_landline("1111111111"));

    assert!(is_cell_phone("11988887777"));
    assert!(!is_cell_phone("11188887777"));
}

#[test]
fn test_date_format_round_trip() {
    let en = format_pt_br_date_to_en("25/12/2024").unwrap();
    assert_eq!(en, "2024-12-25");
    assert_eq!(format_en_date_to_pt_br(&en).unwrap(), "25/12/2024");

    let pt = format_en_date_to_pt_br("2000-02-29").unwrap();
    assert_eq!(format_pt_br_date_to_en(&pt).unwrap(), "2000-02-29");
}

#[test]
fn test_date_not_in_future() {
    init_tracing();

    assert!(!date("2099-01-01", "db"));
    assert!(date("2000-01-01", "db"));
    assert!(date("2000-01-01", DateFormat::Db));
    assert!(date("01/01/2000", "pt"));
    assert!(!date("31/02/2000", "pt"));
}

#[test]
fn test_date_at_fixed_instant() {
    let now = NaiveDate::from_ymd_opt(2024, 12, 25)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();

    assert!(date_at("25/12/2024", DateFormat::Pt, now));
    assert!(!date_at("26/12/2024", DateFormat::Pt, now));
    assert!(date_at("2024-12-25 23:59:59", DateFormat::Db, now));
}

#[test]
fn test_validator_set_from_json_options() {
    let options = ValidatorOptions::from_json(r#"{"strict_cpf": true, "default_date_format": "pt"}"#).unwrap();
    let validators = Validators::with_options(options);

    assert!(!validators.is_valid_cpf("111.111.111-11"));
    assert!(validators.date("01/01/2000", None));
    assert!(!validators.date("2000-01-01", None));
}

#[test]
fn test_signup_form() {
    init_tracing();

    let rules = Rules::new()
        .required("name", Rule::Text)
        .required("email", Rule::Email)
        .required("cpf", Rule::Cpf)
        .field("cell_phone", Rule::CellPhone)
        .field("landline", Rule::Landline)
        .field("birth_date", Rule::date_as(DateFormat::Pt));

    let valid = json!({
        "name": "Maria Conceição",
        "email": " maria@example.com.br ",
        "cpf": "529.982.247-25",
        "cell_phone": "(11) 98888-7777",
        "birth_date": "15/03/1990"
    });
    assert!(rules.validate(valid.as_object().unwrap()).is_ok());

    let invalid = json!({
        "name": "12345",
        "email": "maria@",
        "cpf": "529.982.247-26",
        "cell_phone": "(11) 1888-7777",
        "landline": "(11) 3333-4444",
        "birth_date": "15/03/2999"
    });
    let errors = rules.validate(invalid.as_object().unwrap()).unwrap_err();

    assert_eq!(errors.len(), 5);
    assert!(!errors.has_field_errors("landline"));
    assert_eq!(errors.get_field_errors("birth_date").unwrap()[0].code, "invalid_date");
    assert_eq!(errors.get_field_errors("cell_phone").unwrap()[0].code, "invalid_cell_phone");

    let payload = errors.to_json();
    assert_eq!(payload["error"]["fields"]["cpf"][0]["code"], "invalid_cpf");
}
