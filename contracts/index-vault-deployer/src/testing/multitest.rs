use crate::artifacts::{Artifact, INDEX_VAULT, ROUTER};
use crate::contract::{execute, instantiate, query, reply};
use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, LastCompletedMigrationResponse, QueryMsg};
use crate::state::Deployment;
use crate::vault::IndexVaultInstantiateMsg;
use cosmwasm_std::{Addr, Empty};
use cw_multi_test::{App, ContractWrapper, Executor};

/// Stand-in for the IndexVault contract: keeps its constructor arguments.
mod stub_vault {
    use crate::vault::IndexVaultInstantiateMsg;
    use cosmwasm_std::{
        to_json_binary, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response, StdResult,
    };
    use cw_storage_plus::Item;

    const ARGS: Item<IndexVaultInstantiateMsg> = Item::new("args");

    pub fn instantiate(
        deps: DepsMut,
        _env: Env,
        _info: MessageInfo,
        msg: IndexVaultInstantiateMsg,
    ) -> StdResult<Response> {
        ARGS.save(deps.storage, &msg)?;
        Ok(Response::new())
    }

    pub fn execute(_deps: DepsMut, _env: Env, _info: MessageInfo, _msg: Empty) -> StdResult<Response> {
        Ok(Response::new())
    }

    pub fn query(deps: Deps, _env: Env, _msg: Empty) -> StdResult<Binary> {
        to_json_binary(&ARGS.load(deps.storage)?)
    }
}

struct Suite {
    app: App,
    admin: Addr,
    deployer: Addr,
    vault_code_id: u64,
}

fn setup_suite() -> Suite {
    let mut app = App::default();
    let admin = app.api().addr_make("admin");

    let deployer_code_id = app.store_code(Box::new(
        ContractWrapper::new(execute, instantiate, query).with_reply(reply),
    ));
    let vault_code_id = app.store_code(Box::new(ContractWrapper::new(
        stub_vault::execute,
        stub_vault::instantiate,
        stub_vault::query,
    )));
    let router_code_id = app.store_code(Box::new(ContractWrapper::new(
        stub_vault::execute,
        stub_vault::instantiate,
        stub_vault::query,
    )));

    let deployer = app
        .instantiate_contract(
            deployer_code_id,
            admin.clone(),
            &InstantiateMsg {
                admin: None,
                artifacts: vec![
                    Artifact {
                        name: INDEX_VAULT.to_string(),
                        code_id: vault_code_id,
                    },
                    Artifact {
                        name: ROUTER.to_string(),
                        code_id: router_code_id,
                    },
                ],
            },
            &[],
            "index-vault-deployer",
            None,
        )
        .unwrap();

    Suite {
        app,
        admin,
        deployer,
        vault_code_id,
    }
}

#[test]
fn test_initial_migration_end_to_end() {
    let mut suite = setup_suite();

    suite
        .app
        .execute_contract(
            suite.admin.clone(),
            suite.deployer.clone(),
            &ExecuteMsg::RunMigrations {},
            &[],
        )
        .unwrap();

    let deployment: Deployment = suite
        .app
        .wrap()
        .query_wasm_smart(
            suite.deployer.clone(),
            &QueryMsg::GetDeployment {
                artifact: INDEX_VAULT.to_string(),
            },
        )
        .unwrap();
    assert_eq!(deployment.artifact, INDEX_VAULT);
    assert_eq!(deployment.code_id, suite.vault_code_id);
    assert_eq!(deployment.migration, 1);

    let args: IndexVaultInstantiateMsg = suite
        .app
        .wrap()
        .query_wasm_smart(deployment.address, &Empty {})
        .unwrap();
    assert_eq!(
        args,
        IndexVaultInstantiateMsg {
            router: "0x77c21c770Db1156e271a3516F89380BA53D594FA".to_string(),
            tokens: vec!["0x7ef95a0FEE0Dd31b22626fA2e10Ee6A223F8a684".to_string()],
            weights: vec![100],
        }
    );

    let progress: LastCompletedMigrationResponse = suite
        .app
        .wrap()
        .query_wasm_smart(suite.deployer.clone(), &QueryMsg::LastCompletedMigration {})
        .unwrap();
    assert_eq!(progress.last_completed, 1);
}

#[test]
fn test_rerun_deploys_nothing() {
    let mut suite = setup_suite();

    suite
        .app
        .execute_contract(
            suite.admin.clone(),
            suite.deployer.clone(),
            &ExecuteMsg::RunMigrations {},
            &[],
        )
        .unwrap();
    let res = suite
        .app
        .execute_contract(
            suite.admin.clone(),
            suite.deployer.clone(),
            &ExecuteMsg::RunMigrations {},
            &[],
        )
        .unwrap();

    assert!(!res.events.iter().any(|event| event.ty == "instantiate"));
}

#[test]
fn test_run_migrations_unauthorized() {
    let mut suite = setup_suite();
    let stranger = suite.app.api().addr_make("stranger");

    let err = suite
        .app
        .execute_contract(stranger, suite.deployer.clone(), &ExecuteMsg::RunMigrations {}, &[])
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<ContractError>(),
        Some(&ContractError::Unauthorized)
    );

    let progress: LastCompletedMigrationResponse = suite
        .app
        .wrap()
        .query_wasm_smart(suite.deployer.clone(), &QueryMsg::LastCompletedMigration {})
        .unwrap();
    assert_eq!(progress.last_completed, 0);
}
