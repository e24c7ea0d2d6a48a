pub mod data;
pub mod matchups;
pub mod simulate;
pub mod traits;
pub mod trend;
