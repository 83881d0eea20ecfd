pub mod filter;
pub mod parse;
pub mod text;
pub mod validate;
