pub mod current_user;
pub mod error;
pub mod extract;

pub use current_user::{bearer_token, CurrentUser};
pub use error::{envelope_response, map_error, ApiError};
pub use extract::{
    form_config, json_config, path_config, query_config, ValidatedForm, ValidatedJson,
    ValidatedQuery,
};
