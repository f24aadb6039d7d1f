//! Runs repository calls off the interactive thread.
//!
//! Commands are handled one at a time, in the order they were sent, so the
//! startup seed always lands before the first read. Every read carries a
//! [`Ticket`]; the UI drops results whose ticket it is no longer waiting on.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tracing::{debug, error, warn};

use crate::config::QuestionCount;
use crate::models::Question;

use super::repository::{QuestionFilter, QuestionRepository};

/// Tag identifying one background read.
pub type Ticket = u64;

/// Results delivered back to the interactive thread.
#[derive(Debug, Clone)]
pub enum WorkerEvent {
    /// Seeding finished; zero when the store already had rows.
    Seeded { inserted: usize },
    /// Seeding failed; the store may be empty.
    SeedFailed { reason: String },
    /// Versions and categories for the selection screen.
    Choices {
        ticket: Ticket,
        versions: Vec<String>,
        categories: Vec<String>,
    },
    /// The store was written to; queries shown on screen are stale.
    Changed { generation: u64 },
    /// Questions resolved for a run.
    Resolved {
        ticket: Ticket,
        filter: QuestionFilter,
        questions: Vec<Question>,
    },
}

enum Command {
    Seed(Vec<Question>),
    LoadChoices(Ticket),
    Resolve(Ticket, QuestionFilter, QuestionCount),
}

pub struct RepositoryWorker {
    commands: mpsc::UnboundedSender<Command>,
    last_ticket: Ticket,
}

impl RepositoryWorker {
    /// Start the worker on `runtime`. Events arrive on the returned receiver.
    pub fn spawn(
        repository: Arc<QuestionRepository>,
        runtime: &Handle,
    ) -> (Self, mpsc::UnboundedReceiver<WorkerEvent>) {
        let (command_tx, mut command_rx) = mpsc::unbounded_channel::<Command>();
        let (event_tx, event_rx) = mpsc::unbounded_channel::<WorkerEvent>();

        let mut changes = repository.subscribe();
        let change_tx = event_tx.clone();
        runtime.spawn(async move {
            while changes.changed().await.is_ok() {
                let generation = *changes.borrow_and_update();
                if change_tx.send(WorkerEvent::Changed { generation }).is_err() {
                    break;
                }
            }
        });

        runtime.spawn(async move {
            while let Some(command) = command_rx.recv().await {
                let repository = Arc::clone(&repository);
                match tokio::task::spawn_blocking(move || execute(&repository, command)).await {
                    Ok(event) => {
                        if event_tx.send(event).is_err() {
                            break;
                        }
                    }
                    Err(e) => error!("Repository task failed: {}", e),
                }
            }
            debug!("Repository worker stopped");
        });

        let worker = Self {
            commands: command_tx,
            last_ticket: 0,
        };
        (worker, event_rx)
    }

    pub fn seed(&self, questions: Vec<Question>) {
        self.send(Command::Seed(questions));
    }

    pub fn load_choices(&mut self) -> Ticket {
        let ticket = self.next_ticket();
        self.send(Command::LoadChoices(ticket));
        ticket
    }

    pub fn resolve(&mut self, filter: QuestionFilter, count: QuestionCount) -> Ticket {
        let ticket = self.next_ticket();
        self.send(Command::Resolve(ticket, filter, count));
        ticket
    }

    fn next_ticket(&mut self) -> Ticket {
        self.last_ticket += 1;
        self.last_ticket
    }

    fn send(&self, command: Command) {
        if self.commands.send(command).is_err() {
            warn!("Repository worker is gone, request dropped");
        }
    }
}

fn execute(repository: &QuestionRepository, command: Command) -> WorkerEvent {
    match command {
        Command::Seed(questions) => match repository.seed_if_empty(&questions) {
            Ok(inserted) => WorkerEvent::Seeded { inserted },
            Err(e) => {
                error!("Failed to seed question store: {}", e);
                WorkerEvent::SeedFailed {
                    reason: e.to_string(),
                }
            }
        },
        Command::LoadChoices(ticket) => WorkerEvent::Choices {
            ticket,
            versions: repository.distinct_versions(),
            categories: repository.distinct_categories(),
        },
        Command::Resolve(ticket, filter, count) => {
            let questions = repository.random_subset(count, &filter);
            debug!(
                "Resolved {} questions for {:?} (ticket {})",
                questions.len(),
                filter,
                ticket
            );
            WorkerEvent::Resolved {
                ticket,
                filter,
                questions,
            }
        }
    }
}
