pub mod coordinator;
pub mod transport;

pub use coordinator::BookingCoordinator;
pub use transport::{BookingTransport, HttpBookingApi};
