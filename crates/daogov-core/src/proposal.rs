//! # Proposal Types
//!
//! The [`Proposal`] entity and its payloads. A proposal is authored once,
//! immutable except for the later, append-only addition of vote records,
//! and carries a `spec` field naming the schema revision that governs its
//! interpretation.
//!
//! [`ProposalContent`] is the closed tagged union at the heart of the model:
//! the `kind` discriminator decides exactly which payload fields are
//! required and permitted. Field names on the wire follow the published
//! schema documents (camelCase, `prURI`), so serialized proposals validate
//! unchanged.

use serde::{Deserialize, Serialize};

use crate::address::Address;

/// Schema revision number a proposal declares via its `spec` field.
///
/// Revisions are append-only: a published revision's meaning never changes,
/// breaking changes allocate the next number.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SpecVersion(pub u32);

impl SpecVersion {
    /// Access the inner revision number.
    pub fn as_u32(&self) -> u32 {
        self.0
    }
}

impl From<u32> for SpecVersion {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

impl std::fmt::Display for SpecVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Proposal kind discriminator.
///
/// One variant per payload shape in [`ProposalContent`]; the wire values
/// are the kebab-case strings used by the `kind` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Kind {
    Meta,
    Proclamation,
    Expense,
    ParameterChange,
    TreasuryManagement,
    CustodialTreasuryManagement,
}

/// Number of proposal kinds in the current revision.
pub const KIND_COUNT: usize = 6;

impl Kind {
    /// All kinds, in declaration order.
    pub const ALL: [Kind; KIND_COUNT] = [
        Kind::Meta,
        Kind::Proclamation,
        Kind::Expense,
        Kind::ParameterChange,
        Kind::TreasuryManagement,
        Kind::CustodialTreasuryManagement,
    ];

    /// The wire string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Meta => "meta",
            Kind::Proclamation => "proclamation",
            Kind::Expense => "expense",
            Kind::ParameterChange => "parameter-change",
            Kind::TreasuryManagement => "treasury-management",
            Kind::CustodialTreasuryManagement => "custodial-treasury-management",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A call to a smart contract owned or controlled by the DAO.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ContractCall {
    /// Chain the transaction executes on.
    pub chain_id: u64,
    /// DAO agent account triggering the transaction.
    pub from: Address,
    /// Address the transaction is sent to.
    pub to: Address,
    /// Method to call.
    pub method: String,
    /// Encoded call parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<String>>,
    /// ETH value attached to the call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// An ERC20 transfer out of the DAO treasury.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Erc20Transfer {
    /// Chain the transfer executes on.
    pub chain_id: u64,
    /// DAO agent account triggering the transfer.
    pub from: Address,
    /// Recipient of the tokens.
    pub recipient: Address,
    /// Token contract address.
    pub token: Address,
    /// Amount to transfer, in the token's display units.
    pub amount: f64,
    /// Amount already advanced by the recipient and reimbursed here.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reimbursement: Option<f64>,
}

/// Voting system used for a snapshot vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VotingSystem {
    SingleChoice,
    RankedChoice,
    Weighted,
}

/// Approve-or-reject vote parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BinaryChoice {
    /// Always single-choice for a binary vote.
    pub voting_system: VotingSystem,
    /// The two fixed choices, `["Approve", "Reject"]`.
    pub choices: [String; 2],
}

impl BinaryChoice {
    /// The canonical approve/reject parameters.
    pub fn approve_reject() -> Self {
        Self {
            voting_system: VotingSystem::SingleChoice,
            choices: ["Approve".to_string(), "Reject".to_string()],
        }
    }
}

/// Vote parameters where multiple choices can pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MultiChoice {
    pub voting_system: VotingSystem,
    pub choices: Vec<String>,
    /// How many of the choices win.
    pub winning_choices_amount: u32,
}

/// Parameters of the off-chain vote attached to a proclamation.
///
/// Distinguished structurally: a multiple-choice vote carries
/// `winningChoicesAmount`, a binary vote does not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VoteParameters {
    Binary(BinaryChoice),
    Multi(MultiChoice),
}

/// Payload of a proposal, discriminated by `kind`.
///
/// This union is closed: for a given kind exactly the listed fields are
/// permitted, and a payload shaped for one kind is rejected under another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ProposalContent {
    /// Changes the governance process itself; points at the pull request
    /// carrying the change.
    Meta {
        #[serde(rename = "prURI")]
        pr_uri: String,
    },
    /// The DAO adopts a statement.
    Proclamation {
        statement: String,
        choices: Vec<String>,
        parameters: VoteParameters,
    },
    /// Moves ERC20 tokens out of the treasury for good.
    Expense { transfers: Vec<Erc20Transfer> },
    /// Changes a parameter in a DAO-controlled contract.
    ParameterChange { calls: Vec<ContractCall> },
    /// On-chain treasury operation; funds stay under DAO custody.
    TreasuryManagement { calls: Vec<ContractCall> },
    /// Treasury operation through a third-party custodian.
    CustodialTreasuryManagement { transfers: Vec<Erc20Transfer> },
}

impl ProposalContent {
    /// The kind discriminator of this payload.
    pub fn kind(&self) -> Kind {
        match self {
            ProposalContent::Meta { .. } => Kind::Meta,
            ProposalContent::Proclamation { .. } => Kind::Proclamation,
            ProposalContent::Expense { .. } => Kind::Expense,
            ProposalContent::ParameterChange { .. } => Kind::ParameterChange,
            ProposalContent::TreasuryManagement { .. } => Kind::TreasuryManagement,
            ProposalContent::CustodialTreasuryManagement { .. } => {
                Kind::CustodialTreasuryManagement
            }
        }
    }
}

/// Outcome of the snapshot vote on a proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SnapshotVote {
    /// Full URI where the vote is accessible.
    pub uri: String,
    /// Whether the proposal had a positive outcome.
    pub passed: bool,
    /// Winning choice or choices.
    pub winning_choices: Vec<String>,
}

/// Outcome of an on-chain vote related to the proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OnChainVote {
    /// Full URI where the vote is accessible.
    pub uri: String,
    /// Whether the proposal had a positive outcome.
    pub passed: bool,
}

/// A vote record appended to a proposal after voting concludes.
///
/// The first record is the snapshot vote; on-chain votes follow as they
/// go live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Vote {
    Snapshot(SnapshotVote),
    OnChain(OnChainVote),
}

/// Account submitting the proposal, with a signature attesting to the
/// proposer role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Proposer {
    pub account: Address,
    pub signature: String,
}

/// Agreement entered by the proposer in order to send a proposal.
/// Slashable in case of breach of proposer duties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Agreement {
    pub chain_id: u64,
    /// Agreements framework contract holding the agreement.
    pub agreements_framework: Address,
    pub agreement_id: u64,
}

/// A governance proposal presented to the DAO.
///
/// Authored once, immutable except for the append-only `votes` field.
/// `proposer` and `agreement` stay `None` while the court backing them is
/// not operational.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Proposal {
    /// Schema revision this proposal adheres to.
    pub spec: SpecVersion,
    /// Numeric identifier assigned at proposal submission.
    pub id: u64,
    /// URI where the discussion leading to this proposal can be found.
    pub discussion: String,
    /// The kind-tagged payload.
    pub content: ProposalContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub proposer: Option<Proposer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agreement: Option<Agreement>,
    /// Vote records, present only after off-chain voting concludes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub votes: Option<Vec<Vote>>,
}
