use anyhow::{Context, Result};
use clap::Parser;
use tokio::io::{AsyncWrite, AsyncWriteExt, BufWriter};
use tracing_subscriber::EnvFilter;

mod commands;
mod models;

use commands::Args;
use models::Person;

/// Writes the greeting and the info line of every person, in order.
async fn write_introductions<W>(writer: &mut W, people: &[Person]) -> Result<()>
where
    W: AsyncWrite + Unpin,
{
    for person in people {
        tracing::debug!(
            name = person.name(),
            age = person.age(),
            city = person.city(),
            "Introducing person"
        );

        writer.write_all(person.greet().as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.write_all(person.info().as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }

    Ok(())
}

async fn introduce(people: &[Person]) -> Result<()> {
    let start = std::time::Instant::now();

    let mut writer = BufWriter::new(tokio::io::stdout());
    write_introductions(&mut writer, people)
        .await
        .context("Failed to write introductions to stdout")?;
    writer.flush().await.context("Failed to flush stdout")?;

    tracing::info!("Introduced {} people in {:?}", people.len(), start.elapsed());

    Ok(())
}

/// Installs the log subscriber on stderr, filtered by `RUST_LOG`.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    if !args.ignored.is_empty() {
        tracing::debug!("Ignoring {} command-line arguments", args.ignored.len());
    }

    introduce(&Person::samples()).await?;

    Ok(())
}
