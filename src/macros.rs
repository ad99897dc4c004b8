// src/macros.rs
#[macro_export]
macro_rules! s {
    // String shorthand!
    () => {
        ::std::string::String::new()
    };
    ($expr:expr) => {
        ::std::string::String::from($expr)
    };
}

#[macro_export]
macro_rules! join {
    // String-type concatenation shorthand!
    ($first:expr $(, $rest:expr)+ $(,)?) => {{
        let mut s = ::std::string::String::from($first);
        $(
            s.push_str($rest);
        )+
        s
    }};
}

/// Build a `PathBuf` from a root and any number of components.
#[macro_export]
macro_rules! path {
    ($root:expr $(, $part:expr)* $(,)?) => {{
        let mut p = ::std::path::PathBuf::from($root);
        $(
            p.push($part);
        )*
        p
    }};
}
