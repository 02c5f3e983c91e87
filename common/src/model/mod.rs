pub mod category;
pub mod diff;
pub mod field;
pub mod marker;
pub mod poi;
pub mod record;
pub mod translation;
