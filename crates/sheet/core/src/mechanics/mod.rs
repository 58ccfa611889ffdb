//! Rule arithmetic that does not depend on the record layout.

pub mod modifier;

pub use modifier::{InvalidScore, ability_modifier};
