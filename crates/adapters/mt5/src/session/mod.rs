//! Login session handling: credential resolution, persistence and the
//! connection state machine.

pub mod backend;
pub mod controller;
pub mod manager;
pub mod state;

pub use backend::Mt5Backend;
pub use controller::SessionController;
pub use manager::{CredentialManager, LoginPlan, Persistence};
pub use state::{Notice, SessionState};
