pub mod passenger;
pub mod shore;
pub mod side;
pub mod violation;

pub use passenger::{Passenger, PassengerKind};
pub use shore::Shore;
pub use side::Side;
pub use violation::Violation;
