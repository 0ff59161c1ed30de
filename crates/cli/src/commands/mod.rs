//! CLI command implementations

pub mod inspect;
pub mod put_template;
