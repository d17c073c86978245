use crate::core::Card;

#[derive(Debug, Clone)]
pub enum TaskResult {
    CardsLoaded(Result<Vec<Card>, String>),
    LoadingMessage(String),
}
