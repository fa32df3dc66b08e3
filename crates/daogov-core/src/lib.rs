//! # daogov-core — Domain Model for Governance Proposals
//!
//! Defines the typed representation of a governance proposal: a versioned,
//! kind-tagged union over six proposal payloads, plus the on-chain
//! sub-entities (contract calls, ERC20 transfers) and vote records that
//! hang off it.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** [`Address`] and
//!    [`SpecVersion`] are newtypes with validated constructors. No bare
//!    strings for account addresses.
//!
//! 2. **Closed tagged union.** [`ProposalContent`] is a serde internally
//!    tagged enum keyed on `kind`. A payload shaped for one kind never
//!    deserializes under another; unknown kinds are rejected.
//!
//! 3. **Lossless serialization.** Serializing a well-formed [`Proposal`]
//!    produces a document that validates against its declared schema
//!    revision. Optional fields are omitted, never emitted as `null`.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `daogov-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement
//!   `Serialize`/`Deserialize`.

pub mod address;
pub mod proposal;

pub use address::{Address, AddressError, DAO_AGENTS, MAINNET_CHAIN_ID};
pub use proposal::{
    Agreement, BinaryChoice, ContractCall, Erc20Transfer, Kind, MultiChoice, OnChainVote,
    Proposal, ProposalContent, Proposer, SnapshotVote, SpecVersion, Vote, VoteParameters,
    VotingSystem, KIND_COUNT,
};
