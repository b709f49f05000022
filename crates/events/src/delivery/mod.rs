//! External notification delivery channels.

pub mod email;
