// Make common test utilities available
pub mod common;

mod structured_data;
