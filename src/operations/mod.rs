pub mod hull;
pub mod query;
