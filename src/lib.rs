pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod dates;
pub mod export;
pub mod sample;
pub mod supabase;
pub mod tracing;
pub mod views;
