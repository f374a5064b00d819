pub mod error;
pub mod processor;
pub mod reader;
pub mod session;

pub use error::IrpvError;
pub use processor::{process_uploads, Upload};
pub use session::SessionStore;
