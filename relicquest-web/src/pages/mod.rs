pub mod records;
pub mod scene;
pub mod start;
