use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::OnceLock;

use crate::utils::upload::CollisionPolicy;

#[derive(Clone, Debug)]
pub struct EnvConfig {
    pub host: String,
    pub port: u16,
    pub static_dir: PathBuf,
    pub upload: UploadConfig,
}

#[derive(Clone, Debug)]
pub struct UploadConfig {
    pub collision_policy: CollisionPolicy,
}

impl EnvConfig {
    fn get_env_or(key: &str, default: &str) -> String {
        env::var(key).unwrap_or_else(|_| default.to_string())
    }

    pub fn from_env() -> Self {
        dotenv::dotenv().ok();

        let policy = Self::get_env_or("UPLOAD_COLLISION_POLICY", "overwrite");
        let collision_policy = CollisionPolicy::from_str(&policy)
            .unwrap_or_else(|e| panic!("Environment variable UPLOAD_COLLISION_POLICY invalid: {}", e));

        EnvConfig {
            host: Self::get_env_or("HOST", "0.0.0.0"),
            port: Self::get_env_or("PORT", "8000").parse().unwrap_or(8000),
            static_dir: PathBuf::from(Self::get_env_or("STATIC_DIR", "static")),
            upload: UploadConfig { collision_policy },
        }
    }
}

pub static CONFIG: OnceLock<EnvConfig> = OnceLock::new();

pub fn config() -> &'static EnvConfig {
    CONFIG.get_or_init(EnvConfig::from_env)
}
