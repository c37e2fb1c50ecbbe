use cosmwasm_std::Addr;
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const INSTANTIATE_REPLY_ID: u64 = 1;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct Config {
    /// Address allowed to register artifacts and run migrations.
    /// Also set as wasm admin of every deployed instance.
    pub admin: Addr,
}

/// A contract instance created by a migration.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct Deployment {
    pub artifact: String,
    pub code_id: u64,
    pub address: Addr,
    pub migration: u64,
}

pub const CONFIG: Item<Config> = Item::new("config");
/// artifact name -> code id
pub const ARTIFACTS: Map<&str, u64> = Map::new("artifacts");
pub const LAST_COMPLETED_MIGRATION: Item<u64> = Item::new("last_completed_migration");
/// artifact name -> latest deployment
pub const DEPLOYMENTS: Map<&str, Deployment> = Map::new("deployments");
