pub mod regimes;
pub mod report;
pub mod scenarios;
pub mod statement;
