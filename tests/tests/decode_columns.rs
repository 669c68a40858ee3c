use tests::*;

use pretty_assertions::assert_eq;
use rowbind::{scan, Record, Runner, Schema};
use serde::Deserialize;

use std::str::FromStr;

#[derive(Debug, Default, PartialEq, Deserialize, Record)]
#[record(json)]
struct Meta {
    pub tags: Vec<String>,
    pub score: i32,
}

#[derive(Debug, Default, PartialEq, Record)]
#[record(text)]
struct Version {
    pub major: u32,
    pub minor: u32,
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Version, String> {
        let (major, minor) = s
            .split_once('.')
            .ok_or_else(|| format!("missing `.` in {:?}", s))?;

        Ok(Version {
            major: major.parse().map_err(|_| format!("bad major {:?}", major))?,
            minor: minor.parse().map_err(|_| format!("bad minor {:?}", minor))?,
        })
    }
}

#[derive(Debug, Default, PartialEq, Record)]
#[record(text)]
enum Level {
    #[default]
    Low,
    High,
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Level, String> {
        match s {
            "low" => Ok(Level::Low),
            "high" => Ok(Level::High),
            _ => Err(format!("unknown level {:?}", s)),
        }
    }
}

#[derive(Debug, Default, PartialEq, Record)]
struct Doc {
    pub id: i64,
    pub meta: Meta,
    pub version: Option<Version>,
    pub level: Level,
    pub raw: serde_json::Value,
}

fn docs() -> Schema<Doc> {
    Schema::new([
        scan::int().to("id"),
        scan::bytes().json().to("meta"),
        scan::string().text().nullable().to("version"),
        scan::field().to("level"),
        scan::field().to("raw"),
    ])
    .unwrap()
}

#[test]
fn decoders_fill_fields() {
    let mut rows = MockRows::new([
        row![
            1,
            br#"{"tags":["a","b"],"score":9}"#.to_vec(),
            "1.2",
            "high",
            r#"{"k":[1,2]}"#
        ],
        row![2, br#"{"tags":[],"score":0}"#.to_vec(), Value::Null, "low", "null"],
    ]);

    let read = docs().all(&mut rows).unwrap();

    assert_eq!(
        read,
        vec![
            Doc {
                id: 1,
                meta: Meta {
                    tags: vec!["a".to_string(), "b".to_string()],
                    score: 9,
                },
                version: Some(Version { major: 1, minor: 2 }),
                level: Level::High,
                raw: serde_json::json!({ "k": [1, 2] }),
            },
            Doc {
                id: 2,
                meta: Meta::default(),
                version: None,
                level: Level::Low,
                raw: serde_json::Value::Null,
            },
        ]
    );
}

#[test]
fn decoder_errors_are_reported() {
    let mut rows = MockRows::new([row![1, b"{".to_vec(), "1.2", "low", "{}"]]);
    let err = docs().one(&mut rows).unwrap_err();
    assert!(err.is_decode_failure());
    assert!(err.to_string().starts_with("scanner 1 (meta): json decode failed"));

    let mut rows = MockRows::new([row![1, b"{\"tags\":[],\"score\":1}".to_vec(), "1", "low", "{}"]]);
    let err = docs().one(&mut rows).unwrap_err();
    assert_eq!(
        err.to_string(),
        "scanner 2 (version): text decode failed: missing `.` in \"1\""
    );
}

#[test]
fn json_from_string_column() {
    let schema = Schema::<Doc>::new([scan::string().json().to("meta")]).unwrap();
    let read = schema
        .one(&mut MockRows::new([row![r#"{"tags":["x"],"score":3}"#]]))
        .unwrap();

    assert_eq!(
        read.meta,
        Meta {
            tags: vec!["x".to_string()],
            score: 3,
        }
    );
}

#[test]
fn missing_decoder_is_rejected_at_build() {
    let err = Schema::<Doc>::new([scan::bytes().binary().to("meta")]).unwrap_err();

    assert!(err.is_type_incompatible());
    assert_eq!(
        err.to_string(),
        "scanner 0 (meta): cannot convert bytes to Meta: Meta does not implement binary decoding"
    );
}

#[test]
fn decoded_record_as_single_column() {
    let mut runner = Runner::<Meta>::new(&[]).unwrap();
    let read = runner
        .all(&mut MockRows::new([
            row![br#"{"tags":["a"],"score":1}"#.to_vec()],
            row![br#"{"tags":[],"score":2}"#.to_vec()],
        ]))
        .unwrap();

    assert_eq!(
        read,
        vec![
            Meta {
                tags: vec!["a".to_string()],
                score: 1,
            },
            Meta {
                tags: vec![],
                score: 2,
            },
        ]
    );
}
