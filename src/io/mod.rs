pub mod packages;
pub mod reporting;
