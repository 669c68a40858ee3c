use tests::*;

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use pretty_assertions::assert_eq;
use rowbind::scan::{self, Enum};
use rowbind::{Record, Schema};

#[derive(Debug, Default, PartialEq, Record)]
struct Scores {
    pub values: Vec<i32>,
    pub pair: [String; 2],
    pub sorted: Vec<u64>,
}

#[test]
fn split_and_parse_into_list() {
    let schema = Schema::<Scores>::new([
        scan::string().split(",").parse_int(10, 32).to("values"),
        scan::string().cut("=").to("pair"),
        scan::string().split(" ").parse_uint(10, 64).sort().to("sorted"),
    ])
    .unwrap();

    let mut rows = MockRows::new([row!["10,20,30", "key=a=b", "3 1 2"], row!["", "key", "5"]]);
    let read = schema.all(&mut rows).unwrap();

    assert_eq!(
        read,
        vec![
            Scores {
                values: vec![10, 20, 30],
                pair: ["key".to_string(), "a=b".to_string()],
                sorted: vec![1, 2, 3],
            },
            Scores {
                values: vec![],
                pair: ["key".to_string(), String::new()],
                sorted: vec![5],
            },
        ]
    );
}

#[test]
fn split_without_parse_is_rejected_at_build() {
    let err = Schema::<Scores>::new([scan::string().split(",").to("values")]).unwrap_err();

    assert!(err.is_type_incompatible());
    assert_eq!(
        err.to_string(),
        "scanner 0 (values): cannot convert list<string> to Vec<i32>"
    );
}

#[test]
fn text_column_into_list_is_rejected_at_build() {
    let err = Schema::<Scores>::new([scan::string().to("values")]).unwrap_err();
    assert!(err.is_type_incompatible());
    assert_eq!(
        err.to_string(),
        "scanner 0 (values): cannot convert string to Vec<i32>"
    );

    let err = Schema::<Scores>::new([scan::bytes().to("values")]).unwrap_err();
    assert!(err.is_type_incompatible());

    assert!(Schema::<Scores>::new([scan::field().to("values")]).is_ok());
}

#[derive(Debug, Default, PartialEq, Record)]
struct Buffers {
    pub raw: Vec<u8>,
    pub head: [u8; 2],
}

#[test]
fn bytes_fill_byte_buffers() {
    let schema =
        Schema::<Buffers>::new([scan::bytes().to("raw"), scan::bytes().to("head")]).unwrap();

    let mut rows = MockRows::new([row![vec![1u8, 2, 3], vec![9u8, 8]]]);
    assert_eq!(
        schema.one(&mut rows).unwrap(),
        Buffers {
            raw: vec![1, 2, 3],
            head: [9, 8],
        }
    );
}

#[derive(Debug, Default, PartialEq, Record)]
struct Paint {
    pub code: i64,
    pub name: String,
}

fn colors() -> Vec<Enum> {
    vec![
        Enum::new("red", 1),
        Enum::new("green", 2),
        Enum::new("blue", 3),
    ]
}

#[test]
fn enum_lookup_both_directions() {
    let schema = Schema::<Paint>::new([
        scan::string().lookup(&colors()).to("code"),
        scan::int().lookup(&colors()).to("name"),
    ])
    .unwrap();

    let mut rows = MockRows::new([row!["green", 3]]);
    assert_eq!(
        schema.one(&mut rows).unwrap(),
        Paint {
            code: 2,
            name: "blue".to_string(),
        }
    );
}

#[test]
fn enum_lookup_miss() {
    let schema = Schema::<Paint>::new([scan::string().lookup(&colors()).to("code")]).unwrap();

    let err = schema.one(&mut MockRows::new([row!["purple"]])).unwrap_err();
    assert!(err.is_enum_lookup());
    assert_eq!(
        err.to_string(),
        "scanner 0 (code): value \"purple\" is not one of [\"red\", \"green\", \"blue\"]"
    );
}

#[test]
fn enum_aliases_share_a_code() {
    let members = [
        Enum::new("red", 1),
        Enum::new("crimson", 1),
        Enum::new("blue", 2),
    ];
    let schema = Schema::<Paint>::new([
        scan::string().lookup(&members).to("code"),
        scan::int().lookup(&members).to("name"),
    ])
    .unwrap();

    let mut rows = MockRows::new([row!["crimson", 1]]);
    assert_eq!(
        schema.one(&mut rows).unwrap(),
        Paint {
            code: 1,
            name: "red".to_string(),
        }
    );
}

#[test]
fn enum_names_must_be_unique() {
    let members = [Enum::new("red", 1), Enum::new("red", 2)];
    let err = Schema::<Paint>::new([scan::string().lookup(&members).to("code")]).unwrap_err();

    assert_eq!(
        err.to_string(),
        "scanner 0 (code): lookup table has duplicate key \"red\""
    );
}

#[derive(Debug, Default, PartialEq, Record)]
struct Small {
    pub byte: u8,
    pub ratio: f32,
    pub wide: i64,
}

#[test]
fn numeric_coercion() {
    let schema = Schema::<Small>::new([
        scan::int().to("byte"),
        scan::float().to("ratio"),
        scan::uint().to("wide"),
    ])
    .unwrap();

    let mut rows = MockRows::new([row![200, 0.5, 7u64]]);
    assert_eq!(
        schema.one(&mut rows).unwrap(),
        Small {
            byte: 200,
            ratio: 0.5,
            wide: 7,
        }
    );
}

#[test]
fn numeric_overflow_is_an_error() {
    let schema = Schema::<Small>::new([scan::int().to("byte")]).unwrap();

    let err = schema.one(&mut MockRows::new([row![256]])).unwrap_err();
    assert!(err.is_type_incompatible());

    let err = schema.one(&mut MockRows::new([row![-1]])).unwrap_err();
    assert!(err.is_type_incompatible());
}

#[test]
fn string_into_number_needs_parse() {
    let err = Schema::<Small>::new([scan::string().to("byte")]).unwrap_err();
    assert!(err.is_type_incompatible());
}

#[derive(Debug, Default, PartialEq, Record)]
struct Event {
    pub at: Option<DateTime<Utc>>,
    pub local: DateTime<FixedOffset>,
    pub shown: String,
}

#[test]
fn parse_and_format_time() {
    let plus_two = FixedOffset::east_opt(2 * 3600).unwrap();
    let schema = Schema::<Event>::new([
        scan::string()
            .parse_time("%Y-%m-%d %H:%M:%S")
            .nullable()
            .to("at"),
        scan::string()
            .parse_time_in("%Y-%m-%d", plus_two)
            .to("local"),
        scan::time().format("%d/%m/%Y").to("shown"),
    ])
    .unwrap();

    let stamp = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();
    let mut rows = MockRows::new([row!["2024-03-01 10:30:00", "2024-03-01", stamp]]);

    assert_eq!(
        schema.one(&mut rows).unwrap(),
        Event {
            at: Some(stamp),
            local: plus_two.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap(),
            shown: "01/03/2024".to_string(),
        }
    );
}

#[derive(Debug, Default, PartialEq, Record)]
struct Flags {
    pub enabled: bool,
    pub level: i8,
    pub hex: String,
}

#[test]
fn parse_go_style_inputs() {
    let schema = Schema::<Flags>::new([
        scan::string().trim_space().parse_bool().to("enabled"),
        scan::string().parse_int(0, 8).to("level"),
        scan::int().format(16).to("hex"),
    ])
    .unwrap();

    let mut rows = MockRows::new([row![" T ", "0x7f", 255], row!["0", "-0b101", 16]]);
    assert_eq!(
        schema.all(&mut rows).unwrap(),
        vec![
            Flags {
                enabled: true,
                level: 127,
                hex: "ff".to_string(),
            },
            Flags {
                enabled: false,
                level: -5,
                hex: "10".to_string(),
            },
        ]
    );

    let err = schema
        .one(&mut MockRows::new([row!["yes", "1", 1]]))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "scanner 0 (enabled): ParseBool: parsing \"yes\": invalid syntax"
    );

    let err = schema
        .one(&mut MockRows::new([row!["true", "128", 1]]))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "scanner 1 (level): ParseInt: parsing \"128\": value out of range"
    );
}

#[test]
fn default_must_fit_the_field() {
    let err = Schema::<Small>::new([scan::int().default(1000).to("byte")]).unwrap_err();
    assert!(err.is_type_incompatible());
    assert!(err
        .to_string()
        .starts_with("scanner 0 (byte): invalid default value 1000"));
}
