use std::{
    sync::{
        mpsc,
        Arc,
    },
    thread,
};

use tokio::runtime::Runtime;

use super::TaskResult;
use crate::feed::{
    self,
    CardFeed,
};

/// Runs background work off the UI thread and hands results back through a
/// channel the GUI drains once per frame.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
}

impl TaskManager {
    pub fn new() -> Self {
        let runtime = Arc::new(Runtime::new().expect("Failed to create TaskManager runtime"));

        let (sender, receiver) = mpsc::channel();

        Self { runtime, receiver, sender }
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<Runtime>) {
        (self.sender.clone(), self.runtime.clone())
    }

    /// Fire-and-forget startup load. No retry and no cancellation: the
    /// outcome lands in `poll_results` exactly once, success or not.
    pub fn load_cards(&self, card_feed: CardFeed) {
        let (sender, runtime) = self.task_context();

        thread::spawn(move || {
            let _ = sender.send(TaskResult::LoadingMessage("Loading cards...".to_string()));

            let result = runtime
                .block_on(async { feed::load_cards(&card_feed).await.map_err(|e| e.to_string()) });

            let _ = sender.send(TaskResult::CardsLoaded(result));
        });
    }
}
