pub mod criteria;
pub mod vehicle;
