pub mod locale;
pub mod payload;
