pub mod diagram;
pub mod record;
