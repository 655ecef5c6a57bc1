//! Layered configuration loading
//!
//! Later layers win:
//! 1. built-in defaults, with logging defaults for the environment
//! 2. `config/<environment>.toml`, when present
//! 3. `HSE_`-prefixed variables, `__` between levels
//!    (`HSE_SERVER__PORT=9090`, `HSE_CORS__ALLOWED_ORIGINS=a,b`)
//! 4. the plain variables `JWT_SECRET`, `JWT_EXPIRATION`, `I18N_BASENAME`,
//!    `I18N_CACHE_SECONDS`, `I18N_DEFAULT_LOCALE`, `SERVER_HOST`,
//!    `SERVER_PORT`, `REDIS_URL`, `REDIS_KEY_PREFIX` and `REDIS_DEFAULT_TTL`

use std::env;

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File};

use hse_shared::{AppConfig, Environment, LoggingConfig};

const ENV_PREFIX: &str = "HSE";

const LIST_KEYS: [&str; 4] = [
    "cors.allowed_origins",
    "cors.allowed_methods",
    "cors.allowed_headers",
    "cors.exposed_headers",
];

const PLAIN_OVERRIDES: [(&str, &str); 10] = [
    ("JWT_SECRET", "jwt.secret"),
    ("JWT_EXPIRATION", "jwt.expiration_ms"),
    ("I18N_BASENAME", "i18n.basename"),
    ("I18N_CACHE_SECONDS", "i18n.cache_seconds"),
    ("I18N_DEFAULT_LOCALE", "i18n.default_locale"),
    ("SERVER_HOST", "server.host"),
    ("SERVER_PORT", "server.port"),
    ("REDIS_URL", "cache.url"),
    ("REDIS_KEY_PREFIX", "cache.key_prefix"),
    ("REDIS_DEFAULT_TTL", "cache.default_ttl"),
];

/// Load the configuration for the environment named by `ENVIRONMENT`
pub fn load() -> Result<AppConfig, ConfigError> {
    let environment = Environment::from_env();

    let mut environment_source = config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .list_separator(",");
    for key in LIST_KEYS {
        environment_source = environment_source.with_list_parse_key(key);
    }

    let mut builder = defaults(environment)?
        .add_source(File::with_name(environment.config_file()).required(false))
        .add_source(environment_source);

    for (variable, key) in PLAIN_OVERRIDES {
        builder = builder.set_override_option(key, env::var(variable).ok())?;
    }

    builder.build()?.try_deserialize()
}

/// Builder seeded with the defaults for `environment`
pub fn defaults(environment: Environment) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = AppConfig {
        environment,
        logging: LoggingConfig::for_environment(environment),
        ..Default::default()
    };

    Ok(Config::builder()
        .add_source(Config::try_from(&defaults)?)
        .set_override("environment", environment.to_string())?)
}
