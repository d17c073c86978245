pub mod errors;
pub mod models;
pub mod tasks;

pub use errors::BinderError;
pub use models::{
    Card,
    TrustedHtml,
};
