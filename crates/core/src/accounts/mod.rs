//! Accounts module - the per-account valuation engine.

mod accounts_model;


pub use accounts_model::InvestmentAccount;
