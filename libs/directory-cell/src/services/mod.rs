pub mod directory;
pub mod filter;

pub use directory::DirectoryService;
pub use filter::{filter_doctors, specialties};
