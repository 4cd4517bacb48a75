pub mod budgets;
pub mod conversions;
pub mod enrichment;
pub mod error;
pub mod extractors;
pub mod resolve;
pub mod success_response;
