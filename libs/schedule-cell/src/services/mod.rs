pub mod fetch;
pub mod normalizer;
pub mod resolver;

pub use fetch::ScheduleService;
pub use normalizer::normalize;
pub use resolver::{available_dates, time_slots_for_date};
