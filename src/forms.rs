//! Application form schemas built on the generic controller

pub mod auth;
pub mod auto_dubbing;
pub mod example;
