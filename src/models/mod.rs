pub mod question;

pub use question::{Alternative, Question};
