// src/specs/login.rs

pub const USERNAME: &str = r#"input[name="username"]"#;
pub const PASSWORD: &str = r#"input[name="password"]"#;
pub const SUBMIT: &str = r#"input[type="submit"]"#;
