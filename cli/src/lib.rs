//! Terminal front end for the paginated user list.

pub mod cli;
pub mod output;
pub mod render;
pub mod scroll;
pub mod timing;
