/***************************************/
/*               Macros                */
/***************************************/

/// Unwraps a `Result` at the process edge, logging the error and exiting with status 1.
#[macro_export]
macro_rules! unwrap_or_exit {
    ($expr:expr, $what:expr) => {
        match $expr {
            Ok(val) => val,
            Err(e) => {
                log::error!("{}: {}", $what, e);
                std::process::exit(1);
            }
        }
    };
}
