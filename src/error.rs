use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    RepositoryNotFound {
        path: PathBuf,
    },
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    TomlParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    YamlParseError {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    ConfigKeyNotFound {
        key: String,
        path: PathBuf,
    },
    TagParseError {
        tag: String,
        source: semver::Error,
    },
    RenameError {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
    GitError(Box<dyn std::error::Error + Send + Sync>),
    GitDiscoverError(Box<gix::discover::Error>),
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RepositoryNotFound { path } => {
                write!(f, "git repository not found in path: {}", path.display())
            }
            Error::FileReadError { path, source } => {
                write!(f, "failed to read file: {} ({})", path.display(), source)
            }
            Error::TomlParseError { path, source } => {
                write!(
                    f,
                    "failed to parse toml file: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::YamlParseError { path, source } => {
                write!(
                    f,
                    "failed to parse yaml file: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::ConfigKeyNotFound { key, path } => {
                write!(f, "key '{}' not found in {}", key, path.display())
            }
            Error::TagParseError { tag, source } => {
                write!(f, "tag '{}' is not a semantic version ({})", tag, source)
            }
            Error::RenameError { from, to, source } => {
                write!(
                    f,
                    "failed to rename {} to {} ({})",
                    from.display(),
                    to.display(),
                    source
                )
            }
            Error::GitError(err) => {
                write!(f, "git error: {}", err)
            }
            Error::GitDiscoverError(err) => {
                write!(f, "git discover error: {}", err)
            }
            Error::IoError(err) => {
                write!(f, "io error: {}", err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileReadError { source, .. } => Some(source),
            Error::TomlParseError { source, .. } => Some(source),
            Error::YamlParseError { source, .. } => Some(source),
            Error::TagParseError { source, .. } => Some(source),
            Error::RenameError { source, .. } => Some(source),
            Error::GitError(err) => Some(err.as_ref()),
            Error::GitDiscoverError(err) => Some(err.as_ref()),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<gix::open::Error> for Error {
    fn from(err: gix::open::Error) -> Self {
        Error::GitError(Box::new(err))
    }
}

impl From<gix::discover::Error> for Error {
    fn from(err: gix::discover::Error) -> Self {
        Error::GitDiscoverError(Box::new(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

// Helper function to convert various git errors
impl Error {
    pub fn from_git_error<T: std::error::Error + Send + Sync + 'static>(err: T) -> Self {
        Error::GitError(Box::new(err))
    }
}
