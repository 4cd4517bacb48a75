pub mod currency;
pub mod error;
pub mod models;


pub use currency::currency_converter::CurrencyConverter;
pub use currency::fixed_rate_converter::{DEFAULT_TTD_RATE, FixedRateConverter};
pub use currency::{TTD, USD, as_of_date, round_to_cents};
pub use error::{CoreError, Result as CoreResult};
pub use error_location::ErrorLocation;
pub use models::project::Project;
pub use models::project_patch::ProjectPatch;
pub use models::ttd_allow_list::{DEFAULT_TTD_PROJECTS, TtdAllowList};
