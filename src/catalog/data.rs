//! Built-in example catalog

use super::{Category, Difficulty, Example};

use Category::*;
use Difficulty::*;

struct Seed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    long_description: &'static str,
    slug: &'static str,
    categories: &'static [Category],
    difficulty: Difficulty,
    estimated_time: &'static str,
    tags: &'static [&'static str],
    is_new: bool,
    user_stories: [&'static str; 2],
}

const BASE_URL: &str = "https://learn.aptoslabs.com/en/code-examples";

const SEEDS: &[Seed] = &[
    Seed {
        id: "todo",
        title: "To-Do List",
        description: "Build a To-Do List on Web3",
        long_description: "A simple introduction to building a stateful To-Do List on Aptos. Perfect for beginners to understand on-chain state management.",
        slug: "todo-list",
        categories: &[Basics],
        difficulty: Beginner,
        estimated_time: "1-2 hours",
        tags: &["web3", "beginner-friendly", "state-management"],
        is_new: false,
        user_stories: [
            "As a beginner, I want to understand on-chain state management.",
            "I need a simple project to learn the basics of dApp development.",
        ],
    },
    Seed {
        id: "nft",
        title: "NFT Marketplace",
        description: "Create a Marketplace for NFTs",
        long_description: "Build a decentralized marketplace for minting and trading NFTs. Learn how to handle digital assets and marketplace transactions.",
        slug: "nft-marketplace",
        categories: &[Nft, Defi],
        difficulty: Intermediate,
        estimated_time: "3-4 hours",
        tags: &["nft", "marketplace", "digital-assets", "trading"],
        is_new: false,
        user_stories: [
            "As an artist, I want to list and trade my digital art.",
            "I need to learn how to create a secure NFT marketplace.",
        ],
    },
    Seed {
        id: "billboard",
        title: "Billboard",
        description: "Build a Billboard on Web3",
        long_description: "Create an on-chain billboard where messages can be stored and updated. A fun project to understand state changes and data persistence.",
        slug: "billboard",
        categories: &[Basics],
        difficulty: Beginner,
        estimated_time: "1-2 hours",
        tags: &["web3", "beginner-friendly", "state-management"],
        is_new: false,
        user_stories: [
            "I want to learn how to display dynamic data on-chain.",
            "I need a quick project to understand blockchain state updates.",
        ],
    },
    Seed {
        id: "launchpad",
        title: "Launchpad",
        description: "Develop a Fungible Asset Launchpad",
        long_description: "Learn how to develop a platform for launching fungible tokens. Covers token creation, distribution, and fundraising mechanics.",
        slug: "launchpad",
        categories: &[Defi],
        difficulty: Intermediate,
        estimated_time: "3-4 hours",
        tags: &["fungible-assets", "tokens", "fundraising"],
        is_new: false,
        user_stories: [
            "I need to launch a new token and understand distribution mechanics.",
            "I'm evaluating decentralized fundraising options for my project.",
        ],
    },
    Seed {
        id: "aptosfriend",
        title: "Aptos Friend",
        description: "Build an Aptos Friend Social App",
        long_description: "Create a social application that leverages on-chain identity and interactions. Bridge Web2 social paradigms with decentralized technologies.",
        slug: "aptos-friend",
        categories: &[Social],
        difficulty: Intermediate,
        estimated_time: "2-3 hours",
        tags: &["social", "web3", "identity"],
        is_new: true,
        user_stories: [
            "I want to integrate social features into my dApp.",
            "I'm looking to blend familiar social experiences with blockchain technology.",
        ],
    },
    Seed {
        id: "vesting",
        title: "Vesting Token",
        description: "Staked Locked APT Example",
        long_description: "Dive into the mechanics of token vesting, showing how tokens can be locked and released gradually. Essential for secure reward systems.",
        slug: "vesting-token",
        categories: &[Defi],
        difficulty: Intermediate,
        estimated_time: "2-3 hours",
        tags: &["staking", "tokens", "vesting"],
        is_new: true,
        user_stories: [
            "I need to understand token vesting for team member distributions.",
            "I'm looking for examples of locking tokens with vesting schedules.",
        ],
    },
    Seed {
        id: "epoch",
        title: "Epoch-based Rewards Pool",
        description: "Manage Rewards for Multiple Tokens",
        long_description: "An advanced rewards system that operates on epochs. Perfect for DeFi projects where token rewards are issued over specific time intervals.",
        slug: "epoch-based-rewards-pool",
        categories: &[Defi],
        difficulty: Advanced,
        estimated_time: "4-5 hours",
        tags: &["rewards", "tokens", "defi-advanced"],
        is_new: false,
        user_stories: [
            "I want to see how rewards are distributed in intervals (epochs).",
            "I'm interested in multi-token reward systems for my DeFi project.",
        ],
    },
    Seed {
        id: "upgrades",
        title: "Managing Contract Upgrades",
        description: "Package Management System Example",
        long_description: "Learn best practices for managing smart contract upgrades. Maintain a consistent contract interface while enabling versioning and improvements.",
        slug: "managing-contract-upgrades",
        categories: &[Infrastructure],
        difficulty: Advanced,
        estimated_time: "3-4 hours",
        tags: &["upgrades", "smart-contracts", "versioning"],
        is_new: false,
        user_stories: [
            "I need to safely upgrade my smart contracts without breaking functionality.",
            "I'm looking for strategies to manage contract versioning and deployment.",
        ],
    },
    Seed {
        id: "dex",
        title: "Swap: Solidity Style ve(3,3) DEX",
        description: "Modules for DEX Implementation",
        long_description: "Build a decentralized exchange on Aptos, modeled after popular Solidity-based DEX patterns. Focuses on token swapping and liquidity management.",
        slug: "swap-ve33-dex",
        categories: &[Defi],
        difficulty: Advanced,
        estimated_time: "5+ hours",
        tags: &["dex", "swap", "solidity", "liquidity"],
        is_new: false,
        user_stories: [
            "I'm transitioning from Ethereum and want to build a DEX on Aptos.",
            "I need robust token swap logic for my DeFi application.",
        ],
    },
    Seed {
        id: "dutch",
        title: "Dutch Auction",
        description: "Build a Dutch Auction",
        long_description: "Implement a Dutch Auction where the price of an asset drops over time until a buyer emerges. Ideal for experimenting with dynamic pricing models.",
        slug: "dutch-auction",
        categories: &[Defi, Nft],
        difficulty: Intermediate,
        estimated_time: "3-4 hours",
        tags: &["auction", "marketplace", "pricing"],
        is_new: true,
        user_stories: [
            "I want to implement a descending price auction for selling assets.",
            "I'm exploring alternative pricing mechanisms for my marketplace.",
        ],
    },
    Seed {
        id: "stablecoin",
        title: "Stablecoin",
        description: "Create a Stablecoin on Aptos",
        long_description: "Learn how to create and manage a blockchain-based stablecoin. Covers pegging mechanisms and collateralization strategies.",
        slug: "stablecoin",
        categories: &[Defi],
        difficulty: Advanced,
        estimated_time: "4-5 hours",
        tags: &["stablecoin", "tokens", "pegging"],
        is_new: false,
        user_stories: [
            "I'm creating a stablecoin and need to understand the mechanics.",
            "I want to explore strategies for maintaining price stability.",
        ],
    },
    Seed {
        id: "dispatch",
        title: "Dispatchable Fungible Assets",
        description: "Inject Custom Logic During Asset Transfers",
        long_description: "Learn how to override default token transfer behavior by injecting custom logic. Perfect for projects with specific business rules.",
        slug: "dispatchable-fungible-assets",
        categories: &[Defi, Infrastructure],
        difficulty: Advanced,
        estimated_time: "3-4 hours",
        tags: &["fungible-assets", "transfers", "custom-logic"],
        is_new: false,
        user_stories: [
            "I need to inject custom logic into token transfers for business rules.",
            "I'm looking to add extra checks during asset transfers for security.",
        ],
    },
    Seed {
        id: "thirdparty",
        title: "Depend on Third-Party Smart Contracts",
        description: "Invoke External Smart Contract Methods",
        long_description: "Learn how to integrate third-party smart contracts safely. Provides guidance on invoking external methods for modular dApp development.",
        slug: "depend-on-third-party-smart-contracts",
        categories: &[Infrastructure],
        difficulty: Intermediate,
        estimated_time: "2-3 hours",
        tags: &["smart-contracts", "integration", "external-calls"],
        is_new: false,
        user_stories: [
            "I want to call external smart contracts to extend my dApp's functionality.",
            "I need to build a system where contracts depend on external logic safely.",
        ],
    },
    Seed {
        id: "randomness",
        title: "On-Chain Randomness",
        description: "Implement Fair and Transparent Minting",
        long_description: "Tackle the challenge of on-chain randomness with methods for generating unbiased random numbers. Essential for gaming and fair distributions.",
        slug: "on-chain-randomness",
        categories: &[Infrastructure, Nft],
        difficulty: Intermediate,
        estimated_time: "2-3 hours",
        tags: &["randomness", "minting", "gaming"],
        is_new: false,
        user_stories: [
            "I need a transparent method for generating random numbers for games.",
            "I'm building a lottery and need fair randomization.",
        ],
    },
    Seed {
        id: "keyless",
        title: "Aptos Keyless",
        description: "Seamless Login Experience with Web2 Logins",
        long_description: "Combine Web2 login convenience with blockchain security. Improve user experience for non-crypto natives with familiar authentication flows.",
        slug: "aptos-keyless",
        categories: &[Auth],
        difficulty: Intermediate,
        estimated_time: "2-3 hours",
        tags: &["authentication", "web2", "user-experience"],
        is_new: true,
        user_stories: [
            "I want to implement a seamless login experience without key management.",
            "I need to integrate Web2 login methods for better onboarding.",
        ],
    },
    Seed {
        id: "voting",
        title: "Voting",
        description: "On-Chain Voting System on Aptos",
        long_description: "Create a secure on-chain voting system from proposal submission to vote tallying. Vital for decentralized governance frameworks.",
        slug: "voting",
        categories: &[Social, Infrastructure],
        difficulty: Intermediate,
        estimated_time: "3-4 hours",
        tags: &["voting", "governance", "dao"],
        is_new: true,
        user_stories: [
            "I need a reliable on-chain voting system for governance.",
            "I'm building a DAO and need transparent decision-making mechanisms.",
        ],
    },
];

/// Materialize the built-in examples in catalog order
pub(super) fn builtin_examples() -> Vec<Example> {
    SEEDS
        .iter()
        .map(|seed| Example {
            id: seed.id.to_string(),
            title: seed.title.to_string(),
            description: seed.description.to_string(),
            long_description: seed.long_description.to_string(),
            url: format!("{}/{}", BASE_URL, seed.slug),
            categories: seed.categories.to_vec(),
            difficulty: seed.difficulty,
            estimated_time: Some(seed.estimated_time.to_string()),
            tags: seed.tags.iter().map(|t| t.to_string()).collect(),
            is_new: seed.is_new,
            user_stories: seed.user_stories.iter().map(|s| s.to_string()).collect(),
        })
        .collect()
}
