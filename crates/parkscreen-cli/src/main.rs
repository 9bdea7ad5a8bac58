mod display;

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use parkscreen_client::PredictClient;
use parkscreen_core::FeatureVector;
use parkscreen_model::Classifier;

#[derive(Parser)]
#[command(name = "parkscreen", version, about = "Parkinson's detection inference service")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP inference API.
    Serve {
        /// Path to the model artifact.
        #[arg(long, env = "PARKSCREEN_MODEL", default_value = "models/parkinsons.json")]
        model: PathBuf,
        /// Address to bind.
        #[arg(long, env = "PARKSCREEN_ADDR", default_value = "127.0.0.1:8000")]
        addr: SocketAddr,
    },
    /// Classify one feature vector and print the verdict.
    Predict {
        /// Path to the model artifact (ignored with --url).
        #[arg(long, env = "PARKSCREEN_MODEL", default_value = "models/parkinsons.json")]
        model: PathBuf,
        /// Predict against a running server instead of loading the
        /// artifact locally, e.g. `--url http://localhost:8000`.
        #[arg(long)]
        url: Option<String>,
        /// Feature values, in the model's declared order.
        #[arg(required = true, value_name = "VALUE", allow_negative_numbers = true)]
        features: Vec<f64>,
    },
    /// List the model's declared input feature names.
    Features {
        /// Path to the model artifact.
        #[arg(long, env = "PARKSCREEN_MODEL", default_value = "models/parkinsons.json")]
        model: PathBuf,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    tracing::info!("parkscreen v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();
    match cli.command {
        Command::Serve { model, addr } => {
            let classifier = Classifier::load(&model)
                .with_context(|| format!("loading model artifact {}", model.display()))?;
            parkscreen_server::serve(classifier, addr)
                .await
                .context("running HTTP server")?;
        }
        Command::Predict {
            model,
            url,
            features,
        } => {
            let features = FeatureVector::new(features);
            let prediction = match url {
                Some(base) => PredictClient::new(base)
                    .predict(features)
                    .await
                    .context("remote prediction")?,
                None => {
                    let classifier = Classifier::load(&model)
                        .with_context(|| format!("loading model artifact {}", model.display()))?;
                    classifier.predict(&features)?
                }
            };
            println!("{}", display::verdict_line(&prediction));
        }
        Command::Features { model } => {
            let classifier = Classifier::load(&model)
                .with_context(|| format!("loading model artifact {}", model.display()))?;
            for name in classifier.feature_names() {
                println!("{name}");
            }
        }
    }

    Ok(())
}
