use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

#[derive(Debug)]
pub enum LinkError {
    PathResolutionError(io::Error),
    TargetNotFound(PathBuf),
    LinkPathOccupied(PathBuf),
    InsufficientPrivilege(io::Error),
    LinkCreationFailed(io::Error),
}

impl Error for LinkError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LinkError::PathResolutionError(why)
            | LinkError::InsufficientPrivilege(why)
            | LinkError::LinkCreationFailed(why) => Some(why),
            LinkError::TargetNotFound(_) | LinkError::LinkPathOccupied(_) => None,
        }
    }
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LinkError::PathResolutionError(why) => write!(f, "Error resolving paths: {}", why),
            LinkError::TargetNotFound(target) => write!(
                f,
                "Error: Target directory '{}' does not exist.\nSkipping link creation.",
                target.display()
            ),
            LinkError::LinkPathOccupied(link) => write!(
                f,
                "Error: A file or link already exists at '{}'. Please remove it first.",
                link.display()
            ),
            LinkError::InsufficientPrivilege(_) => write!(
                f,
                "\n--- PERMISSION ERROR ---\n\
                 On Windows, this program must be run as an Administrator to create symbolic links.\n\
                 Please right-click your terminal (Command Prompt/PowerShell) and select 'Run as Administrator'."
            ),
            LinkError::LinkCreationFailed(why) => write!(f, "\n...Error creating link: {}", why),
        }
    }
}
