pub mod application;
pub mod adapter;
