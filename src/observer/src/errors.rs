use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Observer {observer} failed at position {position}: {source}")]
    ObserverFailed {
        observer: String,
        position: usize,
        source: anyhow::Error,
    },
}

impl NotifyError {
    pub fn observer(&self) -> &str {
        return match self {
            NotifyError::ObserverFailed { observer, .. } => observer,
        };
    }
}
