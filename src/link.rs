use crate::error::LinkError;
use log::{debug, info, warn};
use std::env;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Windows `ERROR_PRIVILEGE_NOT_HELD`, returned by `CreateSymbolicLinkW`
/// when the caller lacks `SeCreateSymbolicLinkPrivilege`.
const ERROR_PRIVILEGE_NOT_HELD: i32 = 1314;

pub type LinkResult = Result<(), LinkError>;

/// A pair of raw command-line paths, not yet checked.
#[derive(Debug, Clone)]
pub struct LinkRequest {
    pub target_path: PathBuf,
    pub link_path: PathBuf,
}

/// Both paths of a request made absolute and lexically normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub target: PathBuf,
    pub link: PathBuf,
}

impl LinkRequest {
    pub fn new<P: AsRef<Path>, Q: AsRef<Path>>(target_path: P, link_path: Q) -> LinkRequest {
        LinkRequest {
            target_path: target_path.as_ref().to_path_buf(),
            link_path: link_path.as_ref().to_path_buf(),
        }
    }

    pub fn resolve(&self) -> Result<ResolvedLink, LinkError> {
        let target = absolute_path(&self.target_path).map_err(LinkError::PathResolutionError)?;
        let link = absolute_path(&self.link_path).map_err(LinkError::PathResolutionError)?;
        debug!("resolved {:?} -> {:?}", self.target_path, target);
        debug!("resolved {:?} -> {:?}", self.link_path, link);

        Ok(ResolvedLink { target, link })
    }
}

impl ResolvedLink {
    /// Checks the target and the link location, then creates the link.
    /// Nothing on disk changes unless every check passes.
    pub fn create(&self) -> LinkResult {
        if !self.target.is_dir() {
            warn!("target {:?} is not a directory", self.target);
            return Err(LinkError::TargetNotFound(self.target.clone()));
        }

        // lstat sees any entry, dangling links included
        if lexists(&self.link) {
            warn!("link path {:?} is occupied", self.link);
            return Err(LinkError::LinkPathOccupied(self.link.clone()));
        }

        match symlink_dir(&self.target, &self.link) {
            Ok(()) => {
                info!("linked {:?} -> {:?}", self.link, self.target);
                Ok(())
            }
            Err(why) => Err(classify(why)),
        }
    }
}

pub fn create_directory_symlink<P: AsRef<Path>, Q: AsRef<Path>>(
    target_path: P,
    link_path: Q,
) -> LinkResult {
    LinkRequest::new(target_path, link_path).resolve()?.create()
}

fn absolute_path(path: &Path) -> io::Result<PathBuf> {
    if path.to_string_lossy().contains('\0') {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("path contains a nul byte: {:?}", path),
        ));
    }

    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };

    Ok(normalize(&joined))
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            // pop() is a no-op at the root, so "/.." stays "/"
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

fn classify(why: io::Error) -> LinkError {
    if is_privilege_error(&why) {
        warn!("symlink creation needs elevated rights: {}", why);
        LinkError::InsufficientPrivilege(why)
    } else {
        warn!("symlink creation failed: {}", why);
        LinkError::LinkCreationFailed(why)
    }
}

fn is_privilege_error(why: &io::Error) -> bool {
    cfg!(windows) && why.raw_os_error() == Some(ERROR_PRIVILEGE_NOT_HELD)
}

#[cfg(unix)]
fn lexists(path: &Path) -> bool {
    nix::sys::stat::lstat(path).is_ok()
}

#[cfg(not(unix))]
fn lexists(path: &Path) -> bool {
    std::fs::symlink_metadata(path).is_ok()
}

#[cfg(unix)]
fn symlink_dir(original: &Path, link: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(original, link)
}

#[cfg(windows)]
fn symlink_dir(original: &Path, link: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_dir(original, link)
}
