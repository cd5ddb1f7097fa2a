pub mod dispatch;
pub mod overview;
pub mod projects;
pub mod schema;
pub mod shared;
pub mod topic;
pub mod topics;
pub mod validate;
