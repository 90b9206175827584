mod identity;
mod license;
pub use identity::*;
pub use license::*;
