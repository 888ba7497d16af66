//! Macros for ergonomic denomination set construction.

/// Build a `DenominationSet` from a list of note values.
///
/// Expands to a [`DenominationSetBuilder`](crate::builder::DenominationSetBuilder)
/// chain and yields its `Result`.
///
/// # Example
///
/// ```
/// use dispenser::denominations;
///
/// let set = denominations![2000, 500, 100].unwrap();
/// assert_eq!(set.as_values(), vec![2000, 500, 100]);
///
/// assert!(denominations![100, 100].is_err());
/// ```
#[macro_export]
macro_rules! denominations {
    ($($value:expr),* $(,)?) => {
        $crate::builder::DenominationSetBuilder::new()
            $(.note($value))*
            .build()
    };
}
