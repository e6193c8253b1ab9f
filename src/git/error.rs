//! git::error
//!
//! Uniform error type for every wrapper operation.
//!
//! Each fallible libgit2 call surfaces its failure at the call site as a
//! [`GitError::Native`], carrying the categorized [`ErrorKind`] together with
//! the raw native code, class and message. Failures detected by the wrapper
//! itself (operating on an unopened repository, a failed typed downcast, a
//! malformed identifier) get their own variants.
//!
//! There is no retry and no local recovery: callers decide what to do.

use thiserror::Error;

use super::object::ObjectKind;

/// Coarse category of a failure.
///
/// Not-found and ambiguous-prefix lookups are distinct kinds here, but both
/// still arrive as [`GitError::Native`] with the native code attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The requested object, ref or path does not exist.
    NotFound,
    /// A short identifier matched more than one object.
    Ambiguous,
    /// An object or ref with that name already exists.
    Exists,
    /// HEAD points at a branch with no commits yet.
    UnbornHead,
    /// A name, spec or identifier is malformed.
    InvalidSpec,
    /// A lock file prevented the write.
    Locked,
    /// The repository has not been opened or initialized.
    NotOpen,
    /// A typed view was requested over an object of another type.
    WrongType,
    /// Text data was not valid UTF-8.
    InvalidUtf8,
    /// Anything else.
    Other,
}

impl ErrorKind {
    fn from_code(code: git2::ErrorCode) -> Self {
        match code {
            git2::ErrorCode::NotFound => ErrorKind::NotFound,
            git2::ErrorCode::Ambiguous => ErrorKind::Ambiguous,
            git2::ErrorCode::Exists => ErrorKind::Exists,
            git2::ErrorCode::UnbornBranch => ErrorKind::UnbornHead,
            git2::ErrorCode::InvalidSpec | git2::ErrorCode::Invalid => ErrorKind::InvalidSpec,
            git2::ErrorCode::Locked => ErrorKind::Locked,
            _ => ErrorKind::Other,
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorKind::NotFound => "not found",
            ErrorKind::Ambiguous => "ambiguous",
            ErrorKind::Exists => "already exists",
            ErrorKind::UnbornHead => "unborn head",
            ErrorKind::InvalidSpec => "invalid spec",
            ErrorKind::Locked => "locked",
            ErrorKind::NotOpen => "not open",
            ErrorKind::WrongType => "wrong type",
            ErrorKind::InvalidUtf8 => "invalid utf-8",
            ErrorKind::Other => "error",
        };
        f.write_str(s)
    }
}

/// Errors from wrapper operations.
#[derive(Debug, Error)]
pub enum GitError {
    /// A libgit2 call reported failure.
    #[error("{context}: {message} ({kind}, code {code})")]
    Native {
        /// Category derived from the native code
        kind: ErrorKind,
        /// Raw libgit2 error code
        code: i32,
        /// libgit2 error class (subsystem)
        class: String,
        /// libgit2 error message
        message: String,
        /// The operation or argument that failed
        context: String,
    },

    /// The repository wrapper holds no handle yet.
    #[error("repository is not open")]
    NotOpen,

    /// Object identifier text could not be parsed.
    #[error("invalid object id: {oid}")]
    InvalidOid {
        /// The rejected input
        oid: String,
    },

    /// Checked downcast of a generic object failed.
    #[error("object {oid} is a {actual}, not a {expected}")]
    WrongType {
        /// The object's identifier
        oid: String,
        /// The requested type
        expected: ObjectKind,
        /// The object's actual type
        actual: ObjectKind,
    },

    /// Parent index is past the end of the parent list.
    #[error("commit {oid} has {count} parent(s), no parent at index {index}")]
    ParentOutOfRange {
        /// The commit's identifier
        oid: String,
        /// The requested index
        index: usize,
        /// The number of parents
        count: usize,
    },

    /// Stored text is not valid UTF-8.
    #[error("{what} is not valid UTF-8")]
    InvalidUtf8 {
        /// What was being decoded
        what: String,
    },
}

impl GitError {
    /// Translate a libgit2 failure, naming the call or argument in `context`.
    pub(crate) fn from_git2(err: git2::Error, context: impl Into<String>) -> Self {
        GitError::Native {
            kind: ErrorKind::from_code(err.code()),
            code: err.raw_code(),
            class: format!("{:?}", err.class()),
            message: err.message().to_string(),
            context: context.into(),
        }
    }

    /// The category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GitError::Native { kind, .. } => *kind,
            GitError::NotOpen => ErrorKind::NotOpen,
            GitError::InvalidOid { .. } => ErrorKind::InvalidSpec,
            GitError::WrongType { .. } => ErrorKind::WrongType,
            GitError::ParentOutOfRange { .. } => ErrorKind::NotFound,
            GitError::InvalidUtf8 { .. } => ErrorKind::InvalidUtf8,
        }
    }

    /// Raw libgit2 code, if the failure came from libgit2.
    pub fn code(&self) -> Option<i32> {
        match self {
            GitError::Native { code, .. } => Some(*code),
            _ => None,
        }
    }

    /// Whether the error means "no such object/ref/path".
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        let context = format!("{:?}", err.class()).to_lowercase();
        GitError::from_git2(err, context)
    }
}

/// Shorthand used throughout the wrapper modules.
pub type Result<T> = std::result::Result<T, GitError>;

#[cfg(test)]
mod tests {
    use super::*;

    mod kind {
        use super::*;

        #[test]
        fn native_codes_map_to_kinds() {
            assert_eq!(
                ErrorKind::from_code(git2::ErrorCode::NotFound),
                ErrorKind::NotFound
            );
            assert_eq!(
                ErrorKind::from_code(git2::ErrorCode::Ambiguous),
                ErrorKind::Ambiguous
            );
            assert_eq!(
                ErrorKind::from_code(git2::ErrorCode::Exists),
                ErrorKind::Exists
            );
            assert_eq!(
                ErrorKind::from_code(git2::ErrorCode::UnbornBranch),
                ErrorKind::UnbornHead
            );
            assert_eq!(
                ErrorKind::from_code(git2::ErrorCode::GenericError),
                ErrorKind::Other
            );
        }

        #[test]
        fn wrapper_variants_have_kinds() {
            assert_eq!(GitError::NotOpen.kind(), ErrorKind::NotOpen);
            assert_eq!(
                GitError::InvalidOid {
                    oid: "xyz".to_string()
                }
                .kind(),
                ErrorKind::InvalidSpec
            );
            assert!(GitError::ParentOutOfRange {
                oid: "abc".to_string(),
                index: 1,
                count: 1,
            }
            .is_not_found());
        }
    }

    mod native {
        use super::*;

        #[test]
        fn keeps_code_and_message() {
            let raw = git2::Error::new(
                git2::ErrorCode::NotFound,
                git2::ErrorClass::Reference,
                "reference 'refs/heads/nope' not found",
            );
            let err = GitError::from_git2(raw, "lookup_ref refs/heads/nope");

            assert!(err.is_not_found());
            assert_eq!(err.code(), Some(-3));
            let text = err.to_string();
            assert!(text.contains("lookup_ref refs/heads/nope"));
            assert!(text.contains("not found"));
        }

        #[test]
        fn ambiguous_is_distinct_from_not_found() {
            let raw = git2::Error::new(
                git2::ErrorCode::Ambiguous,
                git2::ErrorClass::Odb,
                "ambiguous SHA1 prefix",
            );
            let err: GitError = raw.into();
            assert_eq!(err.kind(), ErrorKind::Ambiguous);
            assert!(!err.is_not_found());
            assert_eq!(err.code(), Some(-5));
        }

        #[test]
        fn wrapper_errors_have_no_native_code() {
            assert_eq!(GitError::NotOpen.code(), None);
        }
    }
}
