use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Funds are not allowed")]
    FundsNotAllowed,

    #[error("Empty value: {kind}")]
    EmptyValue { kind: String },

    #[error("Invalid code id {code_id} for artifact {name}")]
    InvalidCodeId { name: String, code_id: u64 },

    #[error("Duplicate artifact: {name}")]
    DuplicateArtifact { name: String },

    #[error("Could not find artifact with name: {name}")]
    UnknownArtifact { name: String },

    #[error("Serialization error")]
    SerializationError,

    #[error("Unknown reply id: {id}")]
    UnknownReplyId { id: u64 },

    #[error("Reply is missing the instantiated contract address")]
    MissingContractAddress,

    #[error("Deployment of {artifact} failed: {reason}")]
    DeploymentFailed { artifact: String, reason: String },
}

pub type ContractResult<T> = Result<T, ContractError>;
