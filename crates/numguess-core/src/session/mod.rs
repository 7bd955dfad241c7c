mod manager;

pub use manager::{Session, SessionPaths, SessionReport};
