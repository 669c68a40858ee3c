use super::Value;
use crate::{Error, Result};

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, Offset, TimeZone, Utc};

impl<Tz: TimeZone> From<DateTime<Tz>> for Value {
    fn from(value: DateTime<Tz>) -> Self {
        let offset = value.offset().fix();
        Self::Timestamp(value.with_timezone(&offset))
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::Timestamp(value.and_utc().fixed_offset())
    }
}

impl From<NaiveDate> for Value {
    fn from(value: NaiveDate) -> Self {
        Self::Timestamp(value.and_time(Default::default()).and_utc().fixed_offset())
    }
}

macro_rules! impl_time_conversions {
    ($ty:ty, $lit:literal, |$v:ident| $convert:expr) => {
        impl TryFrom<Value> for $ty {
            type Error = Error;

            fn try_from(value: Value) -> Result<Self> {
                match value {
                    Value::Timestamp($v) => Ok($convert),
                    value => Err(Error::type_incompatible(value.describe(), $lit)),
                }
            }
        }
    };
}

impl_time_conversions!(DateTime<FixedOffset>, "DateTime<FixedOffset>", |v| v);
impl_time_conversions!(DateTime<Utc>, "DateTime<Utc>", |v| v.with_timezone(&Utc));

// Naive conversions keep the wall clock of the value's own offset.
impl_time_conversions!(NaiveDateTime, "NaiveDateTime", |v| v.naive_local());
impl_time_conversions!(NaiveDate, "NaiveDate", |v| v.date_naive());
