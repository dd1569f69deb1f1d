//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `chat`, `locale`) so individual
//! components can depend on small focused models. Each struct is provided
//! as an `RwSignal` context by the root `App` component; the structs
//! themselves are plain data so the mutation rules stay unit-testable.

pub mod chat;
pub mod locale;
pub mod session;
