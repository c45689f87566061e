//! Operator-side core of the investor administration client: session state,
//! the investor-creation form engine and the record-creation HTTP client.

pub mod api;
pub mod catalog;
pub mod form;
pub mod login;
pub mod navigation;
pub mod session;

pub use api::{HttpInvestorApi, InvestorApi, SubmissionError};
pub use catalog::{InterestCatalog, DEFAULT_INTERESTS};
pub use form::{InvestorFormModel, SubmissionOutcome, SubmitError};
pub use login::{LoginError, LoginForm};
pub use navigation::{NavigationHistory, Navigator};
pub use session::{Authenticator, SessionState};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5006/api";
