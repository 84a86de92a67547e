mod error;
mod link;

pub use error::LinkError;
pub use link::{create_directory_symlink, LinkRequest, LinkResult, ResolvedLink};
