use std::path::{Path, PathBuf};

use anyhow::Context;
use bytes::Bytes;
use clap::Parser;
use futures::StreamExt;
use futures::stream::{self, BoxStream};
use tokio::io::AsyncReadExt;
use uuid::Uuid;

use recap::domain::{AudioObject, MediaFormat};
use recap::infrastructure::observability::{TracingConfig, init_tracing};
use recap::presentation::{Environment, Settings, build_services};

const CHUNK_SIZE: usize = 1024 * 1024;

#[derive(Parser)]
#[command(name = "recap-summarize-file")]
#[command(about = "Upload a local recording and print its transcript and summary", long_about = None)]
struct Cli {
    /// Local audio file to upload.
    #[arg(long)]
    file: PathBuf,

    #[arg(long, env = "RECAP_BUCKET")]
    bucket: String,

    #[arg(long, default_value_t = String::from("audio/"))]
    prefix: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&TracingConfig::default());

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment).context("failed to load settings")?;
    let services = build_services(&settings)
        .await
        .context("failed to wire services")?;

    let audio = AudioObject::new(&cli.bucket, upload_key(&cli.prefix, &cli.file));
    let configured = settings.transcription.media_format;
    match audio.extension().and_then(MediaFormat::from_extension) {
        Some(format) if format == configured => {}
        Some(format) => tracing::warn!(
            file_format = %format,
            configured = %configured,
            "Recording format differs from the configured transcription format"
        ),
        None => anyhow::bail!("{} is not a supported audio format", cli.file.display()),
    }
    let file = tokio::fs::File::open(&cli.file)
        .await
        .with_context(|| format!("cannot open {}", cli.file.display()))?;

    let uploaded = services
        .store
        .upload(&audio, file_stream(file))
        .await
        .context("upload failed")?;
    tracing::info!(object = %audio, bytes = uploaded, "Recording uploaded");

    let correlation_id = Uuid::new_v4().to_string();
    let outcome = services
        .pipeline
        .process(&audio, &correlation_id)
        .await
        .context("summarization failed")?;

    println!("=== Transcript ===\n{}\n", outcome.transcript);
    println!("=== Analysis ===\n{}\n", outcome.summary.text);
    println!(
        "=== Metrics ===\n{}",
        serde_json::to_string_pretty(&outcome.metrics)?
    );

    Ok(())
}

/// `<prefix><uuid>.<ext>`, keeping the local file's extension.
fn upload_key(prefix: &str, file: &Path) -> String {
    let id = Uuid::new_v4();
    match file.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!("{}{}.{}", prefix, id, ext.to_lowercase()),
        None => format!("{}{}", prefix, id),
    }
}

fn file_stream(file: tokio::fs::File) -> BoxStream<'static, Result<Bytes, std::io::Error>> {
    stream::try_unfold(file, |mut file| async move {
        let mut buf = vec![0u8; CHUNK_SIZE];
        let read = file.read(&mut buf).await?;
        if read == 0 {
            return Ok(None);
        }
        buf.truncate(read);
        Ok(Some((Bytes::from(buf), file)))
    })
    .boxed()
}
