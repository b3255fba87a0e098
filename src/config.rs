//! Env-driven configuration for the service and library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binary. Defaults are provided for convenience during development.
use std::env;
use dotenv;


pub struct Config {
    pub provider_api_url: String,
    pub provider_api_token: String,
    pub image_model: String,
    pub video_model: String,
    pub dance_video_model: String,
    pub api_host: String,
    pub api_port: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }
    pub fn new() -> Result<Self, env::VarError> {
        Ok(Config {
            provider_api_url: env::var("PROVIDER_API_URL").unwrap_or_else(|_| "https://api.generation.example/v1".to_string()),
            provider_api_token: env::var("PROVIDER_API_TOKEN").unwrap_or_else(|_| "".to_string()),
            image_model: env::var("IMAGE_MODEL").unwrap_or_else(|_| "image-restyle-v1".to_string()),
            video_model: env::var("VIDEO_MODEL").unwrap_or_else(|_| "photo-animate-v1".to_string()),
            dance_video_model: env::var("DANCE_VIDEO_MODEL").unwrap_or_else(|_| "photo-animate-dance-v1".to_string()),
            api_host: env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            api_port: env::var("API_PORT").unwrap_or_else(|_| "8190".to_string()),

        })
    }
    pub fn print_env_vars() {
        let token_state = match env::var("PROVIDER_API_TOKEN") {
            Ok(v) if !v.is_empty() => "<set>",
            _ => "<unset>",
        };
        println!("PROVIDER_API_URL: {}", env::var("PROVIDER_API_URL").unwrap_or_else(|_| "<unset>".to_string()));
        println!("PROVIDER_API_TOKEN: {}", token_state);
        println!("IMAGE_MODEL: {}", env::var("IMAGE_MODEL").unwrap_or_else(|_| "<unset>".to_string()));
        println!("VIDEO_MODEL: {}", env::var("VIDEO_MODEL").unwrap_or_else(|_| "<unset>".to_string()));
        println!("DANCE_VIDEO_MODEL: {}", env::var("DANCE_VIDEO_MODEL").unwrap_or_else(|_| "<unset>".to_string()));
        println!("API_HOST: {}", env::var("API_HOST").unwrap_or_else(|_| "<unset>".to_string()));
        println!("API_PORT: {}", env::var("API_PORT").unwrap_or_else(|_| "<unset>".to_string()));
    }
}
