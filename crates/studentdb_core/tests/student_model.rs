use chrono::NaiveDate;
use studentdb_core::Student;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn with_birthday_builds_a_new_value() {
    let base = Student::new(1, "Ada", "Lovelace");
    let dated = base.clone().with_birthday(date(1815, 12, 10));

    assert_eq!(base.birthday, None);
    assert_eq!(dated.birthday, Some(date(1815, 12, 10)));
    assert_eq!(dated.id, base.id);
}

#[test]
fn serialization_uses_persisted_column_spelling() {
    let student = Student::new(1, "Ada", "Lovelace").with_birthday(date(1815, 12, 10));
    let json = serde_json::to_string(&student).unwrap();

    assert!(json.contains("\"firstName\":\"Ada\""));
    assert!(json.contains("\"lastName\":\"Lovelace\""));
    assert!(json.contains("\"birthday\":\"1815-12-10\""));
}

#[test]
fn deserialization_roundtrip_preserves_all_fields() {
    let student = Student {
        id: 9,
        first_name: None,
        last_name: Some("Hopper".to_string()),
        birthday: None,
    };

    let json = serde_json::to_string(&student).unwrap();
    let back: Student = serde_json::from_str(&json).unwrap();
    assert_eq!(back, student);
}
