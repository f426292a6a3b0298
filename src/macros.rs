// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!

    // Zero-arg → String::new()
    () => {
        ::std::string::String::new()
    };
    // Any single expression — works for literals, consts, or vars
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! or_dash {
    // Option<T: Display> → text, "—" when absent.
    ($opt:expr) => {
        match $opt {
            ::std::option::Option::Some(v) => ::std::format!("{}", v),
            ::std::option::Option::None => ::std::string::String::from("—"),
        }
    };
    // Same, with a format spec for the present value.
    ($opt:expr, $fmt:literal) => {
        match $opt {
            ::std::option::Option::Some(v) => ::std::format!($fmt, v),
            ::std::option::Option::None => ::std::string::String::from("—"),
        }
    };
}
