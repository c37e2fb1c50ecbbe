use crate::artifacts::{validate_artifact, validate_artifacts, ArtifactRegistry, StoredArtifacts};
use crate::deployer::{DeploymentPayload, WasmDeployer};
use crate::error::{ContractError, ContractResult};
use crate::migrations::pending;
use crate::msg::{
    DeploymentListResponse, ExecuteMsg, InstantiateMsg, LastCompletedMigrationResponse,
    MigrateMsg, QueryMsg,
};
use crate::state::{
    Config, Deployment, ARTIFACTS, CONFIG, DEPLOYMENTS, INSTANTIATE_REPLY_ID,
    LAST_COMPLETED_MIGRATION,
};
use cosmwasm_std::{
    attr, entry_point, from_json, to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo,
    Order, Reply, Response, StdResult,
};
use cw2::set_contract_version;

const CONTRACT_NAME: &str = concat!("crates.io:neutron-contracts__", env!("CARGO_PKG_NAME"));
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

///////////////////
/// INSTANTIATE ///
///////////////////

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> ContractResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = match msg.admin {
        Some(admin) => deps.api.addr_validate(&admin)?,
        None => info.sender,
    };

    validate_artifacts(&msg.artifacts)?;
    for artifact in &msg.artifacts {
        ARTIFACTS.save(deps.storage, &artifact.name, &artifact.code_id)?;
    }

    CONFIG.save(
        deps.storage,
        &Config {
            admin: admin.clone(),
        },
    )?;
    LAST_COMPLETED_MIGRATION.save(deps.storage, &0)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract_name", CONTRACT_NAME)
        .add_attribute("contract_version", CONTRACT_VERSION)
        .add_attribute("artifact_count", msg.artifacts.len().to_string())
        .add_attribute("admin", admin.to_string()))
}

///////////////
/// EXECUTE ///
///////////////

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> ContractResult<Response> {
    if !info.funds.is_empty() {
        return Err(ContractError::FundsNotAllowed);
    }

    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    match msg {
        ExecuteMsg::RegisterArtifact { name, code_id } => {
            execute_register_artifact(deps, name, code_id)
        }
        ExecuteMsg::RunMigrations {} => execute_run_migrations(deps, config.admin),
        ExecuteMsg::SetCompleted { completed } => execute_set_completed(deps, completed),
        ExecuteMsg::UpdateAdmin { admin } => execute_update_admin(deps, admin),
    }
}

fn execute_register_artifact(
    deps: DepsMut,
    name: String,
    code_id: u64,
) -> ContractResult<Response> {
    validate_artifact(&name, code_id)?;
    ARTIFACTS.save(deps.storage, &name, &code_id)?;

    Ok(Response::new().add_attributes([
        attr("action", "register_artifact"),
        attr("artifact", name),
        attr("code_id", code_id.to_string()),
    ]))
}

/// Run all pending migrations. A failing migration aborts the whole
/// execution, so progress is only recorded when every one of them succeeded.
fn execute_run_migrations(deps: DepsMut, admin: Addr) -> ContractResult<Response> {
    let last_completed = LAST_COMPLETED_MIGRATION.load(deps.storage)?;

    let mut deployer = WasmDeployer::new(Some(admin.to_string()));
    let mut attrs = vec![attr("action", "run_migrations")];
    let mut completed = last_completed;
    {
        let registry = StoredArtifacts::new(deps.storage);
        for migration in pending(last_completed) {
            deployer.start_migration(migration.id);
            (migration.run)(&mut deployer, &registry)?;
            completed = migration.id;
            attrs.push(attr(
                "migration",
                format!("{}:{}", migration.id, migration.name),
            ));
        }
    }

    LAST_COMPLETED_MIGRATION.save(deps.storage, &completed)?;
    attrs.push(attr("last_completed", completed.to_string()));

    Ok(Response::new()
        .add_submessages(deployer.into_messages())
        .add_attributes(attrs))
}

fn execute_set_completed(deps: DepsMut, completed: u64) -> ContractResult<Response> {
    LAST_COMPLETED_MIGRATION.save(deps.storage, &completed)?;

    Ok(Response::new().add_attributes([
        attr("action", "set_completed"),
        attr("last_completed", completed.to_string()),
    ]))
}

fn execute_update_admin(deps: DepsMut, admin: String) -> ContractResult<Response> {
    let admin = deps.api.addr_validate(&admin)?;
    CONFIG.save(
        deps.storage,
        &Config {
            admin: admin.clone(),
        },
    )?;

    Ok(Response::new().add_attributes([
        attr("action", "update_admin"),
        attr("new_admin", admin.to_string()),
    ]))
}

/////////////
/// QUERY ///
/////////////

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> ContractResult<Binary> {
    match msg {
        QueryMsg::GetConfig {} => {
            let config = CONFIG.load(deps.storage)?;
            to_json_binary(&config).map_err(|_| ContractError::SerializationError)
        }
        QueryMsg::GetArtifact { name } => {
            let artifact = StoredArtifacts::new(deps.storage).require(&name)?;
            to_json_binary(&artifact).map_err(|_| ContractError::SerializationError)
        }
        QueryMsg::LastCompletedMigration {} => {
            let response = LastCompletedMigrationResponse {
                last_completed: LAST_COMPLETED_MIGRATION.load(deps.storage)?,
            };
            to_json_binary(&response).map_err(|_| ContractError::SerializationError)
        }
        QueryMsg::GetDeployment { artifact } => {
            let deployment = DEPLOYMENTS.load(deps.storage, &artifact)?;
            to_json_binary(&deployment).map_err(|_| ContractError::SerializationError)
        }
        QueryMsg::ListDeployments {} => {
            let deployments = DEPLOYMENTS
                .range(deps.storage, None, None, Order::Ascending)
                .map(|item| item.map(|(_, deployment)| deployment))
                .collect::<StdResult<Vec<Deployment>>>()?;
            to_json_binary(&DeploymentListResponse { deployments })
                .map_err(|_| ContractError::SerializationError)
        }
    }
}

/////////////
/// REPLY ///
/////////////

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> ContractResult<Response> {
    match msg.id {
        INSTANTIATE_REPLY_ID => handle_instantiate_reply(deps, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

fn handle_instantiate_reply(deps: DepsMut, msg: Reply) -> ContractResult<Response> {
    let payload: DeploymentPayload = from_json(&msg.payload)?;

    let response = msg
        .result
        .into_result()
        .map_err(|reason| ContractError::DeploymentFailed {
            artifact: payload.artifact.clone(),
            reason,
        })?;

    let address = response
        .events
        .iter()
        .filter(|event| event.ty == "instantiate")
        .flat_map(|event| event.attributes.iter())
        .find(|attribute| attribute.key == "_contract_address")
        .map(|attribute| attribute.value.clone())
        .ok_or(ContractError::MissingContractAddress)?;
    let address = deps.api.addr_validate(&address)?;

    let deployment = Deployment {
        artifact: payload.artifact,
        code_id: payload.code_id,
        address,
        migration: payload.migration,
    };
    DEPLOYMENTS.save(deps.storage, &deployment.artifact, &deployment)?;

    Ok(Response::new().add_attributes([
        attr("action", "record_deployment"),
        attr("artifact", deployment.artifact),
        attr("code_id", deployment.code_id.to_string()),
        attr("address", deployment.address.to_string()),
        attr("migration", deployment.migration.to_string()),
    ]))
}

///////////////
/// MIGRATE ///
///////////////

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> ContractResult<Response> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("contract_name", CONTRACT_NAME)
        .add_attribute("contract_version", CONTRACT_VERSION))
}
