use crate::artifacts::{ArtifactRegistry, INDEX_VAULT, ROUTER};
use crate::deployer::Deployer;
use crate::error::{ContractError, ContractResult};
use crate::vault::IndexVaultInstantiateMsg;
use cosmwasm_std::to_json_binary;

pub type MigrationFn = fn(&mut dyn Deployer, &dyn ArtifactRegistry) -> ContractResult<()>;

/// A numbered deployment step. Ids are strictly increasing.
pub struct Migration {
    pub id: u64,
    pub name: &'static str,
    pub run: MigrationFn,
}

pub const MIGRATIONS: &[Migration] = &[Migration {
    id: 1,
    name: "initial_migration",
    run: initial_migration,
}];

/// Migrations that have not completed yet, in order.
pub fn pending(last_completed: u64) -> impl Iterator<Item = &'static Migration> {
    MIGRATIONS.iter().filter(move |m| m.id > last_completed)
}

/// Deploys IndexVault with the router, token list and weight list.
///
/// The router artifact must be resolvable even though only its address is
/// passed on.
pub fn initial_migration(
    deployer: &mut dyn Deployer,
    artifacts: &dyn ArtifactRegistry,
) -> ContractResult<()> {
    let index_vault = artifacts.require(INDEX_VAULT)?;
    artifacts.require(ROUTER)?;

    let args = to_json_binary(&IndexVaultInstantiateMsg::initial())
        .map_err(|_| ContractError::SerializationError)?;

    deployer.deploy(&index_vault, args)
}
