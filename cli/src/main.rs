use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use detections::{DataUrlError, Detection, HealthReport, PredictError, PredictResponse};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    ReadImage { path: PathBuf, source: std::io::Error },
    #[error("cannot write {path}: {source}")]
    WriteImage { path: PathBuf, source: std::io::Error },
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Predict(#[from] PredictError),
    #[error("annotated image: {0}")]
    AnnotatedImage(#[from] DataUrlError),
    #[error("inference endpoint unhealthy: {0}")]
    Unhealthy(String),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

#[derive(Parser, Debug)]
#[command(name = "objectdetect-cli", about = "Send images to an ObjectDetect inference endpoint")]
struct Cli {
    #[arg(long, env = "OBJECTDETECT_PREDICT_URL", default_value = detections::DEFAULT_PREDICT_URL)]
    endpoint: String,

    /// Request timeout in seconds.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Detect objects in one image file.
    Predict {
        image: PathBuf,
        /// Directory to save `<stem>_annotated.jpg` into.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Hide detections below this confidence (0.0 to 1.0).
        #[arg(long, default_value_t = 0.0)]
        min_confidence: f64,
        /// Print the raw response instead of the summary.
        #[arg(long)]
        json: bool,
    },
    /// Check the endpoint's `/health`.
    Health,
}

#[derive(Debug, Clone)]
struct CliContext {
    endpoint: String,
    client: reqwest::Client,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    let ctx = CliContext {
        endpoint: cli.endpoint,
        client: reqwest::Client::builder().timeout(Duration::from_secs(cli.timeout)).build()?,
    };

    match cli.command {
        Command::Predict { image, out, min_confidence, json } => {
            let response = run_predict(&ctx, &image).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&response)?);
            } else {
                for line in report_lines(&response.detections, min_confidence) {
                    println!("{line}");
                }
            }
            if let Some(dir) = out {
                let path = save_annotated(&response, &image, &dir).await?;
                println!("Annotated image saved: {}", path.display());
            }
            Ok(())
        }
        Command::Health => run_health(&ctx).await,
    }
}

async fn run_predict(ctx: &CliContext, image: &Path) -> Result<PredictResponse, CliError> {
    let bytes = tokio::fs::read(image)
        .await
        .map_err(|source| CliError::ReadImage { path: image.to_path_buf(), source })?;
    let file_name = image
        .file_name()
        .map_or_else(|| "upload".to_owned(), |n| n.to_string_lossy().into_owned());
    let part = reqwest::multipart::Part::bytes(bytes)
        .file_name(file_name)
        .mime_str(content_type_for(image))?;
    let form = reqwest::multipart::Form::new().part(detections::IMAGE_FIELD, part);

    let response = ctx.client.post(&ctx.endpoint).multipart(form).send().await?;
    let status = response.status().as_u16();
    let body = response.text().await?;
    Ok(detections::parse_predict_response(status, &body)?)
}

async fn run_health(ctx: &CliContext) -> Result<(), CliError> {
    let url = detections::health_url_for(&ctx.endpoint);
    let response = ctx.client.get(&url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(CliError::Unhealthy(format!("{url} returned HTTP {}", status.as_u16())));
    }
    let report: HealthReport = serde_json::from_str(&response.text().await?)?;
    println!("{}", health_line(&report));
    if report.model_loaded {
        Ok(())
    } else {
        Err(CliError::Unhealthy("model not loaded".to_owned()))
    }
}

async fn save_annotated(response: &PredictResponse, image: &Path, dir: &Path) -> Result<PathBuf, CliError> {
    let (_, bytes) = detections::decode_data_url(&response.image)?;
    let path = annotated_path(image, dir);
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| CliError::WriteImage { path: dir.to_path_buf(), source })?;
    tokio::fs::write(&path, bytes)
        .await
        .map_err(|source| CliError::WriteImage { path: path.clone(), source })?;
    Ok(path)
}

// =============================================================================
// OUTPUT HELPERS
// =============================================================================

fn content_type_for(path: &Path) -> &'static str {
    let ext = path.extension().map(|e| e.to_string_lossy().to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        _ => "application/octet-stream",
    }
}

fn annotated_path(image: &Path, dir: &Path) -> PathBuf {
    let stem = image.file_stem().map_or_else(|| "image".into(), |s| s.to_string_lossy());
    dir.join(format!("{stem}_annotated.jpg"))
}

fn report_lines(detections: &[Detection], min_confidence: f64) -> Vec<String> {
    let kept: Vec<&Detection> = detections.iter().filter(|d| d.confidence >= min_confidence).collect();
    let mut lines = vec![format!("Detected {} objects:", kept.len())];
    lines.extend(
        kept.iter()
            .enumerate()
            .map(|(i, d)| format!("  {}. {} (confidence: {:.2}%)", i + 1, d.class_name, d.confidence * 100.0)),
    );
    lines
}

fn health_line(report: &HealthReport) -> String {
    if report.model_loaded {
        "ok (model loaded)".to_owned()
    } else {
        format!("{} (model not loaded)", report.status)
    }
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;
