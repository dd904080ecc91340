mod action_enum;
mod parse;

pub use action_enum::*;
pub use parse::parse_amount;
