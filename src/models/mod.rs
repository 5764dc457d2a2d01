mod api_response;
pub use api_response::*;

mod app_state;
pub use app_state::*;

mod blockchain;
pub use blockchain::*;

mod check;
pub use check::*;

mod error;
pub use error::*;

mod form;
pub use form::*;

mod validation;
pub use validation::*;
