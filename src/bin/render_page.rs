// Render a page template against a content document
//
// Usage: render_page <template.html> <content.json> [output.html]
//
// Writes the bound page to `output` (stdout when omitted). When the document
// cannot be loaded the fallback page is written instead and the exit code is 1.

use anyhow::{bail, Context, Result};
use content_binder::{ContentLoader, FsSource, LoadState};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

struct Args {
    template: PathBuf,
    content: PathBuf,
    output: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args_os().skip(1).map(PathBuf::from);
    let (Some(template), Some(content)) = (args.next(), args.next()) else {
        bail!("Usage: render_page <template.html> <content.json> [output.html]");
    };
    Ok(Args {
        template,
        content,
        output: args.next(),
    })
}

async fn run() -> Result<LoadState> {
    let args = parse_args()?;

    let template = tokio::fs::read_to_string(&args.template)
        .await
        .with_context(|| format!("Failed to read template {}", args.template.display()))?;

    let loader = ContentLoader::new(FsSource::new(&args.content), template);
    let state = loader.load().await;

    if let Some(report) = loader.report() {
        tracing::info!(
            "Bound {} element(s), {} rule(s) active",
            report.total_touched(),
            report.touched.len()
        );
    }

    let html = loader.page_html();
    match &args.output {
        Some(path) => {
            tokio::fs::write(path, html)
                .await
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{}", html),
    }

    Ok(state)
}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "content_binder=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run().await {
        Ok(LoadState::Ready) => ExitCode::SUCCESS,
        Ok(state) => {
            tracing::error!("Content load ended in {:?}; fallback page written", state);
            ExitCode::FAILURE
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
