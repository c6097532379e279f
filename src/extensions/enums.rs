use strum::IntoEnumIterator;

/// Comma-separated list of every variant's string form, in declaration
/// order. Used in error messages that tell the operator what is accepted.
pub fn valid_csv<T>() -> String
where
    T: IntoEnumIterator + AsRef<str>,
{
    T::iter()
        .map(|v| v.as_ref().to_owned())
        .collect::<Vec<_>>()
        .join(", ")
}
