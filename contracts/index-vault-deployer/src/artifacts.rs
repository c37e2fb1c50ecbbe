use crate::error::{ContractError, ContractResult};
use crate::state::ARTIFACTS;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::Storage;

pub const INDEX_VAULT: &str = "IndexVault";
pub const ROUTER: &str = "IUniswapV2Router02";

/// A named contract code stored on chain.
#[cw_serde]
pub struct Artifact {
    pub name: String,
    pub code_id: u64,
}

/// Resolves artifacts by name.
pub trait ArtifactRegistry {
    fn require(&self, name: &str) -> ContractResult<Artifact>;
}

/// Registry backed by the `ARTIFACTS` map.
pub struct StoredArtifacts<'a> {
    storage: &'a dyn Storage,
}

impl<'a> StoredArtifacts<'a> {
    pub fn new(storage: &'a dyn Storage) -> Self {
        Self { storage }
    }
}

impl ArtifactRegistry for StoredArtifacts<'_> {
    fn require(&self, name: &str) -> ContractResult<Artifact> {
        let code_id = ARTIFACTS
            .may_load(self.storage, name)?
            .ok_or_else(|| ContractError::UnknownArtifact {
                name: name.to_string(),
            })?;

        Ok(Artifact {
            name: name.to_string(),
            code_id,
        })
    }
}

/// Validate an artifact before it is registered
pub fn validate_artifact(name: &str, code_id: u64) -> ContractResult<()> {
    if name.trim().is_empty() {
        return Err(ContractError::EmptyValue {
            kind: "artifact name".to_string(),
        });
    }
    if code_id == 0 {
        return Err(ContractError::InvalidCodeId {
            name: name.to_string(),
            code_id,
        });
    }
    Ok(())
}

/// Validate a batch of artifacts, rejecting repeated names
pub fn validate_artifacts(artifacts: &[Artifact]) -> ContractResult<()> {
    let mut seen = std::collections::HashSet::new();
    for artifact in artifacts {
        validate_artifact(&artifact.name, artifact.code_id)?;
        if !seen.insert(artifact.name.as_str()) {
            return Err(ContractError::DuplicateArtifact {
                name: artifact.name.clone(),
            });
        }
    }
    Ok(())
}
