/// Builds a row of column values.
#[macro_export]
macro_rules! row {
    ( $( $value:expr ),* $(,)? ) => {
        vec![ $( $crate::Value::from($value) ),* ]
    };
}
