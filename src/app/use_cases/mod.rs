//! Use-Cases der Application-Layer-Orchestrierung.

pub mod mode;
pub mod pointer;
pub mod viewport;
