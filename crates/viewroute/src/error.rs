/// Errors raised while deriving a route table
///
/// Every variant is a build-time or start-time configuration fault: the
/// discovery step handed over a path the resolver cannot turn into a route.
/// None of them can occur during navigation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Path does not live under the configured views root
    #[error("view path `{path}` is outside the views root `{root}`")]
    OutsideRoot { path: String, root: String },

    /// Path does not end with the configured view extension
    #[error("view path `{path}` does not end with `.{extension}`")]
    MissingExtension { path: String, extension: String },

    /// Nothing is left once the root and extension are stripped
    #[error("view path `{path}` has an empty file stem")]
    EmptyStem { path: String },

    /// Two source files derive the same pattern under `DuplicatePolicy::Deny`
    #[error("route pattern `{pattern}` is produced by both `{first}` and `{second}`")]
    DuplicatePattern {
        pattern: String,
        first: String,
        second: String,
    },
}

/// Result alias used across the crate
pub type Result<T, E = RouteError> = std::result::Result<T, E>;
