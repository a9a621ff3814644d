pub mod compose;
pub mod demand;
pub mod dispatch;
pub mod feed;
