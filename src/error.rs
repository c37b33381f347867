#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("unknown operator: {0}")]
    UnknownOperator(String),
}

pub type Result<T> = std::result::Result<T, Error>;
