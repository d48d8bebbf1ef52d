// src/macros.rs

/// Owned `String` from anything that converts into one; `s!()` is empty.
#[macro_export]
macro_rules! s {
    () => {
        ::std::string::String::new()
    };
    ($value:expr) => {
        ::std::convert::Into::<::std::string::String>::into($value)
    };
}

/// Concatenate displayable parts into one `String`:
/// `join!(PBP_URL_PREFIX, year, ".parquet")`.
#[macro_export]
macro_rules! join {
    ($($part:expr),+ $(,)?) => {{
        use ::std::fmt::Write as _;
        let mut out = ::std::string::String::new();
        $(
            // Writing into a String cannot fail.
            let _ = ::std::write!(out, "{}", $part);
        )+
        out
    }};
}
