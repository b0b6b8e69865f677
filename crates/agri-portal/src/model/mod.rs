//! Pure data structures shared by services, sections and controllers.

pub mod chat;
pub mod crop;
pub mod disease;
pub mod expert;
pub mod profile;
pub mod scheme;

pub use chat::*;
pub use crop::*;
pub use disease::*;
pub use expert::*;
pub use profile::*;
pub use scheme::*;
