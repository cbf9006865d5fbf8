pub mod activity_directory;
pub mod seed_catalog;
