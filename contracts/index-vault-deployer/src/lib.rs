//! # IndexVault Deployer Contract
//!
//! Deploys the IndexVault contract from a stored code id, Truffle style:
//! deployments are grouped into numbered migrations and the contract
//! remembers the last one that completed.
//!
//! ## Overview
//!
//! 1. The admin registers artifacts (a name mapped to a stored code id)
//! 2. `RunMigrations {}` runs every pending migration
//! 3. Each migration looks up its artifacts and hands constructor arguments
//!    to a [`deployer::Deployer`], which emits one `WasmMsg::Instantiate`
//! 4. The reply records the address of the new instance
//!
//! The initial migration instantiates `IndexVault` with a router address,
//! a list of token addresses and a parallel list of weights.
//!

pub mod artifacts;
pub mod contract;
pub mod deployer;
pub mod error;
pub mod migrations;
pub mod msg;
pub mod state;
pub mod vault;
