use thiserror::Error;

/// A structural property that a tree failed to uphold.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum InvariantViolation {
    #[error("value {value} is not greater than its in-order predecessor")]
    OutOfOrder { value: i32 },
    #[error("node {value} caches height {cached} but its subtrees give {actual}")]
    StaleHeight { value: i32, cached: i32, actual: i32 },
    #[error("node {value} has balance factor {balance}")]
    Unbalanced { value: i32, balance: i32 },
    #[error("root {value} is red")]
    RedRoot { value: i32 },
    #[error("red node {value} has a red child")]
    RedChildOfRed { value: i32 },
    #[error("subtrees of node {value} have black heights {left} and {right}")]
    UnequalBlackHeight { value: i32, left: usize, right: usize },
}

/// Malformed input to the command language in [`script`](crate::script).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("'{command}' expects an integer argument")]
    MissingArgument { command: String },
    #[error("invalid argument '{0}'")]
    InvalidArgument(String),
}
