/// Builds a [`Record`](crate::Record) from `key => value` pairs.
///
/// ```
/// use datamapper_core::record;
///
/// let record = record! { "id" => 1, "firstName" => "Tan" };
/// assert_eq!(record.len(), 2);
/// ```
#[macro_export]
macro_rules! record {
    () => {
        $crate::Record::new()
    };
    (
        $( $key:expr => $value:expr ),+ $(,)?
    ) => {{
        let mut record = $crate::Record::new();
        $( record.insert($key, $value); )+
        record
    }};
}
