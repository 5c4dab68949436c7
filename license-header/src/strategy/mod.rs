//! Injection source strategies.
//!
//! Only the filesystem strategy (`fs` module) exists today, with a concrete
//! `ensure_fs()` public API. An `InjectionSource` trait may be introduced
//! when a second concrete strategy demands it — until then, the design stays
//! concrete to avoid speculative abstraction.

pub mod fs;
