use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use stylize_api_gateway::prompt::{builder, styles};
use stylize_api_gateway::{Config, ProviderClient};

#[derive(Parser, Debug)]
#[command(name = "stylectl", about = "CLI for the Stylize API Gateway", version)]
struct Cli {
    /// Override PROVIDER_API_URL
    #[arg(global = true, long)]
    provider_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Submit an image transform job
    Transform {
        /// Path to the source image
        image: PathBuf,
        /// Style identifier from the image catalog (empty uses the default)
        #[arg(long, default_value = "")]
        style: String,
        /// Override IMAGE_MODEL
        #[arg(long)]
        model: Option<String>,
    },
    /// Submit a video animation job
    Animate {
        /// Path to the source image
        image: PathBuf,
        /// Style identifier from the motion catalog (empty uses the default)
        #[arg(long, default_value = "")]
        style: String,
        /// Override VIDEO_MODEL
        #[arg(long)]
        model: Option<String>,
        /// Override DANCE_VIDEO_MODEL
        #[arg(long)]
        dance_model: Option<String>,
    },
    /// Query a job by provider id
    Status {
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    Config::dotenv_load();
    let cfg = Config::new().expect("Failed to load config");
    let cli = Cli::parse();
    let base_url = cli.provider_url.unwrap_or(cfg.provider_api_url);
    let client = ProviderClient::new(base_url, cfg.provider_api_token);

    match cli.command {
        Commands::Transform { image, style, model } => {
            let bytes = tokio::fs::read(&image).await?;
            let spec = styles::resolve_image_style(&style);
            let prompt = builder::build_image_prompt(spec);
            let data_url = builder::image_data_url(&bytes, mime_from_path(&image));
            let model = model.unwrap_or(cfg.image_model);
            let id = client
                .create_prediction(&model, builder::image_input(&prompt, &data_url))
                .await?;
            println!("{}", id);
        }
        Commands::Animate { image, style, model, dance_model } => {
            let bytes = tokio::fs::read(&image).await?;
            let spec = styles::resolve_video_style(&style);
            let prompt = builder::build_video_prompt(spec);
            let data_url = builder::image_data_url(&bytes, mime_from_path(&image));
            let model = if spec.high_energy {
                dance_model.unwrap_or(cfg.dance_video_model)
            } else {
                model.unwrap_or(cfg.video_model)
            };
            let id = client
                .create_prediction(&model, builder::video_input(&prompt, &data_url, spec.high_energy))
                .await?;
            println!("{}", id);
        }
        Commands::Status { id } => {
            let job = client.get_prediction(&id).await?;
            match job.output_url {
                Some(url) => println!("{} {}", job.status, url),
                None => println!("{}", job.status),
            }
        }
    }
    Ok(())
}

fn mime_from_path(path: &Path) -> Option<&'static str> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("jpg") | Some("jpeg") => Some("image/jpeg"),
        Some("png") => Some("image/png"),
        Some("webp") => Some("image/webp"),
        _ => None,
    }
}
