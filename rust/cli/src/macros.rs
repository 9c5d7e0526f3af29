//! Shared macros.

/// Writes a line to `$dest`, returning [`ERROR`](crate::exit_code::ERROR)
/// from the enclosing function when the stream is closed.
///
/// ```ignore
/// write_or_exit!(err, "Error: {}", message);
/// ```
#[macro_export]
macro_rules! write_or_exit {
    ($dest:expr, $($arg:tt)*) => {
        if writeln!($dest, $($arg)*).is_err() {
            return $crate::exit_code::ERROR;
        }
    };
}
