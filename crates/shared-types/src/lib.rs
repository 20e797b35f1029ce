pub mod error;

// Courtnav domain modules (canonical locations for all guidance domain types)
pub mod case;
pub mod charge;
pub mod guidance;
pub mod jurisdiction;
pub mod stage;
pub mod statute;

pub use error::*;

// Re-export all domain types
pub use case::*;
pub use charge::*;
pub use guidance::*;
pub use jurisdiction::*;
pub use stage::*;
pub use statute::*;
