pub mod pages;
pub mod payments;
