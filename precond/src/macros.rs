/// Calls a check with the argument name taken from the source expression.
///
/// `guard!(is_in_range(port, 1024, 65535))` expands to
/// `precond::is_in_range(port, 1024, 65535, Some("port"))`.
/// Only for checks whose last parameter is the argument name, so not for
/// the condition checks.
#[macro_export]
macro_rules! guard {
    ($check:ident($value:expr $(, $extra:expr)* $(,)?)) => {
        $crate::$check($value $(, $extra)*, ::core::option::Option::Some(stringify!($value)))
    };
}
