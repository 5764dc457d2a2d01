//! Constants shared across the address checker.

mod footer;
pub use footer::*;

mod logging;
pub use logging::*;

mod server;
pub use server::*;

mod validation;
pub use validation::*;
