pub mod appointment;
pub mod assessment;
pub mod chat;
pub mod enums;

pub use appointment::*;
pub use assessment::*;
pub use chat::*;
pub use enums::*;
