//! Paginated user list: the store, its data source boundary and the
//! randomuser.me source.

mod config;
pub mod http;
mod random_user;
mod source;
mod store;
mod test_utils;
mod user;

pub use config::{BusinessConfig, ENV_PREFIX};
pub use random_user::RandomUserSource;
pub use source::{FetchError, PageRequest, UserSource};
pub use store::{
    AppendStrategy, FailurePolicy, LOAD_FAILED_MESSAGE, PAGE_SIZE, PaginatedUserStore,
    StoreState, ViewMode,
};
pub use user::{AvatarUrls, User};
pub use userlist_states::Subscription;
