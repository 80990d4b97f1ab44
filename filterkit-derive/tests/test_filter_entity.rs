//! Tests for the FilterEntity derive

use filterkit::{FilterEntity, Scalar, ScalarKind};
use rust_decimal::Decimal;

#[derive(FilterEntity)]
#[table_name = "people"]
struct Person {
    id: i32,
    first_name: String,
    #[column_name = "score"]
    rating: Option<Decimal>,
    #[property_name = "DOB"]
    date_of_birth: Option<chrono::NaiveDateTime>,
    #[filter_ignore]
    #[allow(dead_code)]
    password_hash: Vec<u8>,
}

#[derive(FilterEntity)]
struct AuditEvent {
    r#type: String,
}

fn tim() -> Person {
    Person {
        id: 7,
        first_name: "Tim".to_string(),
        rating: None,
        date_of_birth: None,
        password_hash: Vec::new(),
    }
}

#[test]
fn test_table_name() {
    assert_eq!(Person::table_name(), "people");
    assert_eq!(AuditEvent::table_name(), "audit_event");
}

#[test]
fn test_property_names_and_columns() {
    let names: Vec<_> = Person::properties().iter().map(|p| (p.name, p.column)).collect();
    assert_eq!(
        names,
        vec![
            ("Id", "id"),
            ("FirstName", "first_name"),
            ("Rating", "score"),
            ("DOB", "date_of_birth"),
        ]
    );
}

#[test]
fn test_raw_identifier_field() {
    let [property] = AuditEvent::properties() else {
        panic!("expected one property");
    };
    assert_eq!(property.name, "Type");
    assert_eq!(property.column, "type");
}

#[test]
fn test_property_kinds_and_nullability() {
    let properties = Person::properties();
    assert_eq!(properties[0].kind, ScalarKind::I32);
    assert!(!properties[0].nullable);
    assert_eq!(properties[2].kind, ScalarKind::Decimal);
    assert!(properties[2].nullable);
    assert_eq!(properties[3].kind, ScalarKind::DateTime);
    assert!(properties[3].nullable);
}

#[test]
fn test_property_value() {
    let person = tim();
    assert_eq!(person.property_value("Id"), Some(Scalar::I32(7)));
    assert_eq!(person.property_value("FirstName"), Some(Scalar::String("Tim".to_string())));
    assert_eq!(person.property_value("Rating"), None);
    assert_eq!(person.property_value("PasswordHash"), None);
    assert_eq!(person.property_value("Unknown"), None);
}
