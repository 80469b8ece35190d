use anyhow::{anyhow, Result};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::OnceCell;

use nomadchat_assistant::TravelAssistant;

type AssistantFactory = Box<dyn Fn() -> Result<TravelAssistant> + Send + Sync>;

/// The shared assistant, built the first time a request needs it.
///
/// A failed build leaves the slot empty so the next request tries again.
pub struct AssistantSlot {
    cell: OnceCell<Arc<TravelAssistant>>,
    factory: AssistantFactory,
}

impl AssistantSlot {
    pub fn lazy<F>(factory: F) -> Self
    where
        F: Fn() -> Result<TravelAssistant> + Send + Sync + 'static,
    {
        Self {
            cell: OnceCell::new(),
            factory: Box::new(factory),
        }
    }

    /// Slot holding an assistant that already exists
    pub fn ready(assistant: TravelAssistant) -> Self {
        Self {
            cell: OnceCell::new_with(Some(Arc::new(assistant))),
            factory: Box::new(|| Err(anyhow!("assistant already initialized"))),
        }
    }

    pub async fn get_or_init(&self) -> Result<Arc<TravelAssistant>> {
        let assistant = self
            .cell
            .get_or_try_init(|| async {
                let assistant = (self.factory)()?;
                log::info!("🚀 Travel assistant initialized and ready!");
                Ok::<_, anyhow::Error>(Arc::new(assistant))
            })
            .await?;

        Ok(assistant.clone())
    }
}

/// Application state shared across routes
#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<AssistantSlot>,
    pub static_dir: PathBuf,
    pub environment: String,
}

impl AppState {
    pub fn new(
        assistant: AssistantSlot,
        static_dir: impl Into<PathBuf>,
        environment: impl Into<String>,
    ) -> Self {
        Self {
            assistant: Arc::new(assistant),
            static_dir: static_dir.into(),
            environment: environment.into(),
        }
    }
}
