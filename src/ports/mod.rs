mod id;
mod store;
pub use id::*;
pub use store::*;
