use cosmwasm_schema::cw_serde;

/// Router the vault swaps through. Referenced by address only, never deployed here.
pub const INDEX_VAULT_ROUTER: &str = "0x77c21c770Db1156e271a3516F89380BA53D594FA";
pub const INDEX_VAULT_TOKENS: [&str; 1] = ["0x7ef95a0FEE0Dd31b22626fA2e10Ee6A223F8a684"];
pub const INDEX_VAULT_WEIGHTS: [u64; 1] = [100];

/// Constructor arguments of the IndexVault contract.
///
/// Field order is the constructor's positional order and is kept on the wire.
/// `weights[i]` belongs to `tokens[i]`.
#[cw_serde]
pub struct IndexVaultInstantiateMsg {
    pub router: String,
    pub tokens: Vec<String>,
    pub weights: Vec<u64>,
}

impl IndexVaultInstantiateMsg {
    /// Arguments used by the initial migration. Passed through unchecked,
    /// the vault constructor owns the length and weight-sum rules.
    pub fn initial() -> Self {
        Self {
            router: INDEX_VAULT_ROUTER.to_string(),
            tokens: INDEX_VAULT_TOKENS.iter().map(|t| t.to_string()).collect(),
            weights: INDEX_VAULT_WEIGHTS.to_vec(),
        }
    }
}
