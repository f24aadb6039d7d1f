use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use java_quiz::{
    load_seed_questions, logging, QuestionRepository, QuestionStore, Quiz, QuizError,
    RepositoryWorker, TomlSettingsStore,
};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// SQLite file holding the question store
    #[arg(short, long, default_value = "java_quiz.db")]
    database: PathBuf,

    /// JSON file to seed the store from on first run
    #[arg(short, long)]
    questions: Option<PathBuf>,

    /// TOML file holding user settings
    #[arg(short, long, default_value = "settings.toml")]
    settings: PathBuf,

    /// File to write logs to
    #[arg(short, long, default_value = "java-quiz.log")]
    log_file: PathBuf,
}

fn run(args: Args) -> Result<(), QuizError> {
    logging::init(&args.log_file)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()?;

    info!("Opening question store at {}", args.database.display());
    let repository = Arc::new(QuestionRepository::new(QuestionStore::open(&args.database)?));
    let (worker, events) = RepositoryWorker::spawn(repository, runtime.handle());
    worker.seed(load_seed_questions(args.questions.as_deref()));

    let settings = Box::new(TomlSettingsStore::new(&args.settings));
    Quiz::new(worker, events, settings).run()
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        error!("Fatal: {}", e);
        eprintln!("Error running quiz: {}", e);
        std::process::exit(1);
    }
}
