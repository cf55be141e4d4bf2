use clap::Parser;
use larder_core::domain::common::{
    AuthConfig, DatabaseConfig, GenerationLimits, LLMConfig, LarderConfig,
};

#[derive(Debug, Clone, Parser)]
#[command(name = "larder-api", about = "Recipe generation API")]
pub struct Args {
    #[command(flatten)]
    pub server: ServerArgs,

    #[command(flatten)]
    pub database: DatabaseArgs,

    #[command(flatten)]
    pub llm: LlmArgs,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(flatten)]
    pub limits: LimitArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

#[derive(clap::Args, Debug, Clone)]
pub struct ServerArgs {
    #[arg(long = "server-host", env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long = "server-port", env = "PORT", default_value_t = 3333)]
    pub port: u16,

    /// Prefix prepended to every route, e.g. `/api`.
    #[arg(long = "server-root-path", env = "SERVER_ROOT_PATH", default_value = "")]
    pub root_path: String,

    /// Comma separated list of origins; `*` allows any origin.
    #[arg(
        long = "allowed-origins",
        env = "ALLOWED_ORIGINS",
        value_delimiter = ',',
        default_value = "*"
    )]
    pub allowed_origins: Vec<String>,
}

#[derive(clap::Args, Debug, Clone)]
pub struct DatabaseArgs {
    #[arg(long = "database-url", env = "DATABASE_URL", hide_env_values = true)]
    pub url: String,

    #[arg(
        long = "database-max-connections",
        env = "DATABASE_MAX_CONNECTIONS",
        default_value_t = 10
    )]
    pub max_connections: u32,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LlmArgs {
    #[arg(long = "openai-api-key", env = "OPENAI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    #[arg(long = "openai-model", env = "OPENAI_MODEL", default_value = "gpt-4o")]
    pub model: String,

    #[arg(
        long = "openai-base-url",
        env = "OPENAI_BASE_URL",
        default_value = "https://api.openai.com/v1"
    )]
    pub base_url: String,

    #[arg(long = "openai-temperature", env = "OPENAI_TEMPERATURE", default_value_t = 0.8)]
    pub temperature: f32,

    #[arg(long = "openai-max-tokens", env = "OPENAI_MAX_TOKENS", default_value_t = 1000)]
    pub max_tokens: u32,
}

#[derive(clap::Args, Debug, Clone)]
pub struct AuthArgs {
    #[arg(long = "jwt-secret", env = "SUPABASE_JWT_SECRET", hide_env_values = true)]
    pub jwt_secret: String,

    /// Expected `aud` claim. An empty value disables the check.
    #[arg(long = "jwt-audience", env = "JWT_AUDIENCE", default_value = "authenticated")]
    pub jwt_audience: String,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LimitArgs {
    #[arg(long = "max-ingredients", env = "MAX_INGREDIENTS", default_value_t = 50)]
    pub max_ingredients: usize,

    #[arg(
        long = "max-ingredient-length",
        env = "MAX_INGREDIENT_LENGTH",
        default_value_t = 100
    )]
    pub max_ingredient_length: usize,

    #[arg(
        long = "max-preferences-length",
        env = "MAX_PREFERENCES_LENGTH",
        default_value_t = 500
    )]
    pub max_preferences_length: usize,
}

#[derive(clap::Args, Debug, Clone)]
pub struct LogArgs {
    #[arg(long = "log-filter", env = "RUST_LOG", default_value = "info")]
    pub filter: String,

    #[arg(long = "log-json", env = "LOG_JSON")]
    pub json: bool,
}

impl From<&LimitArgs> for GenerationLimits {
    fn from(args: &LimitArgs) -> Self {
        Self {
            max_ingredients: args.max_ingredients,
            max_ingredient_length: args.max_ingredient_length,
            max_preferences_length: args.max_preferences_length,
        }
    }
}

impl From<&LlmArgs> for LLMConfig {
    fn from(args: &LlmArgs) -> Self {
        Self {
            api_key: args.api_key.clone().filter(|key| !key.trim().is_empty()),
            model: args.model.clone(),
            base_url: args.base_url.clone(),
            temperature: args.temperature,
            max_tokens: args.max_tokens,
        }
    }
}

impl From<Args> for LarderConfig {
    fn from(args: Args) -> Self {
        let jwt_audience = Some(args.auth.jwt_audience.trim().to_string()).filter(|a| !a.is_empty());

        Self {
            database: DatabaseConfig {
                url: args.database.url,
                max_connections: args.database.max_connections,
            },
            llm: LLMConfig::from(&args.llm),
            auth: AuthConfig {
                jwt_secret: args.auth.jwt_secret,
                jwt_audience,
            },
            limits: GenerationLimits::from(&args.limits),
        }
    }
}
