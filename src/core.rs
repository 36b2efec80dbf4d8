pub mod donate;
pub mod ledger;
pub mod registry;
pub mod report;
