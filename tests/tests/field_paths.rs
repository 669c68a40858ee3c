use tests::*;

use pretty_assertions::assert_eq;
use rowbind::{scan, Record, Schema};

#[derive(Debug, Default, PartialEq, Record)]
struct Address {
    pub city: String,
    pub zip: Option<String>,

    // Known to the resolver, but not writable.
    #[allow(dead_code)]
    secret: String,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Person {
    pub name: String,
    pub home: Option<Box<Address>>,
    pub work: Address,

    #[record(rename = "type")]
    pub kind: String,

    #[record(skip)]
    pub cache: Vec<u8>,
}

fn address(city: &str, zip: Option<&str>) -> Address {
    Address {
        city: city.to_string(),
        zip: zip.map(str::to_string),
        ..Address::default()
    }
}

#[test]
fn nested_fields_allocate_parents() {
    let schema = Schema::<Person>::new([
        scan::string().to("name"),
        scan::string().nullable().to("home.city"),
        scan::string().nullable().to("home.zip"),
        scan::string().to("work.city"),
        scan::string().to("type"),
    ])
    .unwrap();

    let mut rows = MockRows::new([
        row!["ann", "Oslo", "0150", "Bergen", "admin"],
        row!["bob", Value::Null, Value::Null, "Tromsø", "user"],
        row!["cy", Value::Null, "9000", "", ""],
    ]);
    let read = schema.all(&mut rows).unwrap();

    assert_eq!(
        read,
        vec![
            Person {
                name: "ann".to_string(),
                home: Some(Box::new(address("Oslo", Some("0150")))),
                work: address("Bergen", None),
                kind: "admin".to_string(),
                cache: vec![],
            },
            Person {
                name: "bob".to_string(),
                home: None,
                work: address("Tromsø", None),
                kind: "user".to_string(),
                cache: vec![],
            },
            Person {
                name: "cy".to_string(),
                home: Some(Box::new(address("", Some("9000")))),
                work: address("", None),
                kind: String::new(),
                cache: vec![],
            },
        ]
    );
}

#[test]
fn unknown_paths_are_rejected() {
    let err = Schema::<Person>::new([scan::string().to("nope")]).unwrap_err();
    assert!(err.is_field_not_found());
    assert_eq!(
        err.to_string(),
        "scanner 0 (nope): path `nope`: field `nope` not found on Person"
    );

    let err = Schema::<Person>::new([scan::string().to("home.city.name")]).unwrap_err();
    assert!(err.is_field_not_found());

    let err = Schema::<Person>::new([scan::string().to("kind")]).unwrap_err();
    assert!(err.is_field_not_found());

    let err = Schema::<Person>::new([scan::bytes().to("cache")]).unwrap_err();
    assert!(err.is_field_not_found());
}

#[test]
fn private_fields_are_rejected() {
    let err = Schema::<Person>::new([scan::string().to("home.secret")]).unwrap_err();
    assert!(err.is_field_not_exported());
    assert_eq!(
        err.to_string(),
        "scanner 0 (home.secret): path `home.secret`: field `secret` on Address is not exported"
    );
}

#[test]
fn errors_are_reported_in_scanner_order() {
    let err = Schema::<Person>::new([
        scan::string().to("name"),
        scan::int().to("work.city"),
        scan::string().to("nope"),
    ])
    .unwrap_err();

    assert_eq!(
        err.to_string(),
        "scanner 1 (work.city): cannot convert i64 to String"
    );
}
