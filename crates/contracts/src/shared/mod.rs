pub mod notification;
pub mod rate_limit;
pub mod scroll;
pub mod widgets;
