pub mod dispatch;
pub mod generate;
