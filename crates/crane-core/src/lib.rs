pub mod correction;
pub mod queue;
pub mod scheme;
pub mod settings;
pub mod unicode;
