use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use feedmix_core::{ContentItem, ContentProvider, FeedError, ProviderKey};

use crate::generate_items;

/// Instruction for how `fetch` should behave.
#[derive(Clone, Debug)]
pub enum MockBehavior {
    /// Return exactly the requested number of generated items (the default).
    Generate,
    /// Return the provided items, regardless of the requested count.
    Return(Vec<ContentItem>),
    /// Fail immediately with the provided error.
    Fail(FeedError),
    /// Hang indefinitely (simulate a provider that never answers).
    Hang,
    /// Sleep for the duration, then behave as the inner instruction.
    Delay(Duration, Box<MockBehavior>),
}

impl MockBehavior {
    /// Convenience for `Delay(d, Box::new(then))`.
    #[must_use]
    pub fn delayed(d: Duration, then: Self) -> Self {
        Self::Delay(d, Box::new(then))
    }
}

/// One recorded invocation of `fetch`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FetchCall {
    /// Requester identity passed by the orchestrator.
    pub identity: String,
    /// Number of items requested.
    pub count: usize,
}

struct InternalState {
    behavior: MockBehavior,
    calls: Vec<FetchCall>,
    completed: usize,
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
#[derive(Clone)]
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for subsequent `fetch` calls.
    pub async fn set_behavior(&self, behavior: MockBehavior) {
        let mut guard = self.state.lock().await;
        guard.behavior = behavior;
    }

    /// Return a copy of the call log.
    pub async fn calls(&self) -> Vec<FetchCall> {
        self.state.lock().await.calls.clone()
    }

    /// Number of fetches that ran to completion (success or failure).
    ///
    /// A fetch that was abandoned while hanging or sleeping is not counted.
    pub async fn completed(&self) -> usize {
        self.state.lock().await.completed
    }
}

/// A provider that defers all behavior to an external controller.
pub struct DynamicMockProvider {
    key: ProviderKey,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockProvider {
    /// Create a new dynamic mock provider and its controller.
    ///
    /// The provider starts in [`MockBehavior::Generate`].
    pub fn new_with_controller(
        key: impl Into<ProviderKey>,
    ) -> (Arc<dyn ContentProvider>, DynamicMockController) {
        Self::with_behavior(key, MockBehavior::Generate)
    }

    /// Create a provider already scripted with `behavior`.
    pub fn with_behavior(
        key: impl Into<ProviderKey>,
        behavior: MockBehavior,
    ) -> (Arc<dyn ContentProvider>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState {
            behavior,
            calls: Vec::new(),
            completed: 0,
        }));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self {
            key: key.into(),
            state,
        });
        (me as Arc<dyn ContentProvider>, controller)
    }

    async fn run(&self, behavior: MockBehavior, count: usize) -> Result<Vec<ContentItem>, FeedError> {
        let mut behavior = behavior;
        loop {
            match behavior {
                MockBehavior::Generate => return Ok(generate_items(self.key.as_str(), count)),
                MockBehavior::Return(items) => return Ok(items),
                MockBehavior::Fail(e) => return Err(e),
                MockBehavior::Hang => std::future::pending::<()>().await,
                MockBehavior::Delay(d, then) => {
                    tokio::time::sleep(d).await;
                    behavior = *then;
                }
            }
        }
    }
}

#[async_trait]
impl ContentProvider for DynamicMockProvider {
    fn key(&self) -> &ProviderKey {
        &self.key
    }

    fn vendor(&self) -> &'static str {
        "DynamicMock"
    }

    async fn fetch(&self, identity: &str, count: usize) -> Result<Vec<ContentItem>, FeedError> {
        // Snapshot behavior without holding the lock across await points
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.calls.push(FetchCall {
                identity: identity.to_string(),
                count,
            });
            guard.behavior.clone()
        };

        let res = self.run(behavior, count).await;
        self.state.lock().await.completed += 1;
        res
    }
}
