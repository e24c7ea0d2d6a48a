pub mod analysis;
pub mod cards;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod sideboard;
pub mod stats;
pub mod table;
pub mod traits;
// cmd and reports belong to the binary (main.rs).
