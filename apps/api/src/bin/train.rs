//! Offline trainer for the resume category classifier.
//!
//! Reads a labeled CSV, fits TF-IDF + logistic regression, prints the
//! held-out evaluation and writes JSON artifacts the server loads at startup.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use screener_api::classifier::dataset::load_csv;
use screener_api::classifier::logistic::TrainingParams;
use screener_api::classifier::tfidf::VectorizerConfig;
use screener_api::classifier::training::{train, TrainingOptions};
use screener_api::classifier::{save_report, write_json_atomic, ROLE_SKILLS_FILE};
use screener_api::models::taxonomy::Taxonomy;
use screener_api::screening::normalize::Normalizer;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Labeled resume CSV with a header row.
    #[arg(long, default_value = "data/Resume.csv")]
    data: PathBuf,

    #[arg(long, default_value = "Resume")]
    text_column: String,

    #[arg(long, default_value = "Category")]
    label_column: String,

    #[arg(long, default_value = "models")]
    out_dir: PathBuf,

    /// Fraction of each category held out for evaluation.
    #[arg(long, default_value_t = 0.2)]
    test_size: f64,

    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value_t = 5000)]
    max_features: usize,

    #[arg(long, default_value_t = TrainingParams::default().max_iter)]
    max_iter: usize,

    #[arg(long, default_value_t = TrainingParams::default().learning_rate)]
    learning_rate: f64,

    #[arg(long, default_value_t = TrainingParams::default().l2)]
    l2: f64,

    /// Drop stopwords and lemmatize before vectorizing.
    #[arg(long)]
    lemmatize: bool,

    /// Also write the built-in role taxonomy as role_skills.json.
    #[arg(long)]
    export_taxonomy: bool,
}

impl Args {
    fn training_options(&self) -> TrainingOptions {
        let normalizer = if self.lemmatize {
            Normalizer::Lemmatized
        } else {
            Normalizer::Basic
        };
        TrainingOptions {
            test_size: self.test_size,
            seed: self.seed,
            vectorizer: VectorizerConfig {
                max_features: self.max_features,
                normalizer,
                ..VectorizerConfig::default()
            },
            params: TrainingParams {
                max_iter: self.max_iter,
                learning_rate: self.learning_rate,
                l2: self.l2,
                ..TrainingParams::default()
            },
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("screener_api=info,train=info")
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let dataset = load_csv(&args.data, &args.text_column, &args.label_column)?;

    let outcome = train(&dataset, &args.training_options())?;

    outcome.artifacts.save(&args.out_dir)?;
    save_report(&args.out_dir, &outcome.report)?;

    if args.export_taxonomy {
        let path = args.out_dir.join(ROLE_SKILLS_FILE);
        write_json_atomic(&path, &Taxonomy::builtin())
            .with_context(|| format!("Failed to export taxonomy to '{}'", path.display()))?;
        info!("Exported role taxonomy to {}", path.display());
    }

    println!(
        "Trained on {} resumes, evaluated on {}\n",
        outcome.train_size, outcome.test_size
    );
    println!("{}", outcome.report);
    println!("Artifacts written to {}", args.out_dir.display());

    Ok(())
}
