//! Built-in tool tables
//!
//! The tool set exposed by the Stellar agent. Order here is output order.

use crate::manifest::{Manifest, WriteEntry};
use crate::types::Color;

/// Number of built-in tools.
pub const BUILTIN_COUNT: usize = 66;

const WRITE_TOOLS: &[(&str, &str, Color)] = &[
    // Token operations
    ("tokenTransfer", "Transfer Token", Color::Amber),
    ("tokenTransferFrom", "Transfer Token From", Color::Amber),
    ("tokenApprove", "Approve Token Spending", Color::Amber),
    ("tokenMint", "Mint Tokens", Color::Amber),
    ("tokenBurn", "Burn Tokens", Color::Amber),
    ("tokenBurnFrom", "Burn Tokens From", Color::Amber),
    ("tokenPause", "Pause Token", Color::Amber),
    ("tokenUnpause", "Unpause Token", Color::Amber),
    // NFT operations
    ("nftMint", "Mint NFT", Color::Blue),
    ("nftTransfer", "Transfer NFT", Color::Blue),
    ("nftTransferFrom", "Transfer NFT From", Color::Blue),
    ("nftApprove", "Approve NFT", Color::Blue),
    ("nftApproveForAll", "Approve All NFTs", Color::Blue),
    ("nftBurn", "Burn NFT", Color::Blue),
    ("nftBurnFrom", "Burn NFT From", Color::Blue),
    // Governance
    ("governanceVote", "Cast Vote", Color::Green),
];

const READ_TOOLS: &[&str] = &[
    "tokenBalance",
    "tokenTotalSupply",
    "tokenAllowance",
    "tokenDecimals",
    "tokenName",
    "tokenSymbol",
    "tokenPaused",
    "nftBalance",
    "nftOwnerOf",
    "nftGetApproved",
    "nftIsApprovedForAll",
    "nftTokenUri",
    "nftName",
    "nftSymbol",
    "nftTotalSupply",
    "nftGetOwnerTokenId",
    "nftGetTokenId",
    "governanceHasVoted",
    "governanceGetVoteResults",
    "getBalance",
    "getContractInfo",
];

const FACTORY_TOOLS: &[&str] = &[
    "getDeployedTokens",
    "getTokensByType",
    "getTokensByAdmin",
    "getTokenCount",
    "getDeployedNFTs",
    "getNFTsByType",
    "getNFTsByOwner",
    "getNFTCount",
    "getDeployedGovernance",
    "getGovernanceByType",
    "getGovernanceByAdmin",
    "getGovernanceCount",
];

const UTILITY_TOOLS: &[&str] = &[
    "utilitiesBuildAllowlistConfig",
    "utilitiesBuildCappedConfig",
    "utilitiesBuildGovernanceConfig",
    "utilitiesBuildMerkleTree",
    "utilitiesBuildNftConfig",
    "utilitiesBuildPausableConfig",
    "utilitiesBuildTokenConfig",
    "utilitiesCreateMerkleRoot",
    "utilitiesFormatAmountFromContract",
    "utilitiesFormatAmountToContract",
    "utilitiesFormatWithDecimals",
    "utilitiesGenerateMultipleSalts",
    "utilitiesGenerateSalt",
    "utilitiesParseAmount",
    "utilitiesValidateAddress",
    "utilitiesValidateGovernanceConfig",
    "utilitiesValidateTokenConfig",
];

fn names(table: &[&str]) -> Vec<String> {
    table.iter().map(|s| s.to_string()).collect()
}

/// Returns the built-in tool tables as a manifest.
pub fn builtin_manifest() -> Manifest {
    Manifest {
        write: WRITE_TOOLS
            .iter()
            .map(|&(name, title, color)| WriteEntry::new(name, title, color))
            .collect(),
        read: names(READ_TOOLS),
        factory: names(FACTORY_TOOLS),
        utility: names(UTILITY_TOOLS),
    }
}
