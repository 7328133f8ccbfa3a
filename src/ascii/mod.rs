pub mod number;

pub use number::{decimal_point, digit, digits, fraction, greater_than_one, number, number_value, one_to_nine};
