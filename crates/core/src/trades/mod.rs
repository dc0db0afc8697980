//! Trades module - recorded purchases and input parsing.

mod trades_model;


pub use trades_model::{normalize_symbol, parse_amount, parse_trade_date, NewTrade, Trade};
