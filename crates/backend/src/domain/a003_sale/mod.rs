pub mod entry_model;
pub mod repository;
