use crate::artifacts::Artifact;
use crate::error::{ContractError, ContractResult};
use crate::state::INSTANTIATE_REPLY_ID;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Binary, SubMsg, WasmMsg};

/// Capability through which migrations create contract instances.
pub trait Deployer {
    /// Request a new instance of `artifact` built with the JSON encoded
    /// constructor arguments `args`.
    fn deploy(&mut self, artifact: &Artifact, args: Binary) -> ContractResult<()>;
}

/// Carried from the instantiate submessage to its reply.
#[cw_serde]
pub struct DeploymentPayload {
    pub migration: u64,
    pub artifact: String,
    pub code_id: u64,
}

/// Turns deployments into `WasmMsg::Instantiate` submessages that reply on success.
pub struct WasmDeployer {
    admin: Option<String>,
    migration: u64,
    messages: Vec<SubMsg>,
}

impl WasmDeployer {
    pub fn new(admin: Option<String>) -> Self {
        Self {
            admin,
            migration: 0,
            messages: vec![],
        }
    }

    /// Tag subsequent deployments with migration `id`
    pub fn start_migration(&mut self, id: u64) {
        self.migration = id;
    }

    pub fn into_messages(self) -> Vec<SubMsg> {
        self.messages
    }
}

impl Deployer for WasmDeployer {
    fn deploy(&mut self, artifact: &Artifact, args: Binary) -> ContractResult<()> {
        let payload = to_json_binary(&DeploymentPayload {
            migration: self.migration,
            artifact: artifact.name.clone(),
            code_id: artifact.code_id,
        })
        .map_err(|_| ContractError::SerializationError)?;

        let instantiate = WasmMsg::Instantiate {
            admin: self.admin.clone(),
            code_id: artifact.code_id,
            msg: args,
            funds: vec![],
            label: format!("{}-{}", artifact.name, self.migration),
        };

        self.messages
            .push(SubMsg::reply_on_success(instantiate, INSTANTIATE_REPLY_ID).with_payload(payload));
        Ok(())
    }
}
