use crate::artifacts::Artifact;
use crate::state::{Config, Deployment};
use cosmwasm_schema::{cw_serde, QueryResponses};

#[cw_serde]
pub struct InstantiateMsg {
    /// Address allowed to register artifacts and run migrations, defaults to the sender
    pub admin: Option<String>,
    /// Artifacts registered up front
    pub artifacts: Vec<Artifact>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Register or replace the code id behind an artifact name (admin-only)
    RegisterArtifact { name: String, code_id: u64 },
    /// Run every migration newer than the last completed one (admin-only)
    RunMigrations {},
    /// Overwrite the last completed migration id (admin-only)
    SetCompleted { completed: u64 },
    /// Hand the contract over to a new admin (admin-only)
    UpdateAdmin { admin: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(Config)]
    GetConfig {},
    #[returns(Artifact)]
    GetArtifact { name: String },
    #[returns(LastCompletedMigrationResponse)]
    LastCompletedMigration {},
    #[returns(Deployment)]
    GetDeployment { artifact: String },
    #[returns(DeploymentListResponse)]
    ListDeployments {},
}

#[cw_serde]
pub struct LastCompletedMigrationResponse {
    pub last_completed: u64,
}

#[cw_serde]
pub struct DeploymentListResponse {
    pub deployments: Vec<Deployment>,
}

#[cw_serde]
pub struct MigrateMsg {}
