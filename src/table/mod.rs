pub mod error;
pub mod flatten;
pub mod frame;
pub mod record;
