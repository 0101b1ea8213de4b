/// A single customer account: balance, debit and credit with range checks.
pub mod account;

/// Commands built from raw operation rows, later executed by [`account`].
pub mod command;

/// Operation processor interface, plus an implementation owning one account.
/// Parses commands and applies them, reporting both kinds of failure.
pub mod processor;

/// CSV replay of an operation list against one account. Lives in the library
/// so integration tests can drive it.
pub mod bin_utils;
