use std::collections::VecDeque;

use tracing::warn;

use crate::api::ProductsApi;
use crate::state::{self, Action, AppState, Effect, Mutation};

/// Drives the state model against the HTTP API.
///
/// Effects run sequentially: one in-flight request at a time, each outcome
/// fed back through the model before the next effect starts. Failed
/// requests surface as generic notices; nothing is retried.
pub struct App {
    api: ProductsApi,
    state: AppState,
}

impl App {
    pub fn new(api: ProductsApi) -> Self {
        Self { api, state: AppState::default() }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply an action, then run every resulting effect to completion.
    pub async fn dispatch(&mut self, action: Action) {
        let (next, effects) = state::update(self.state.clone(), action);
        self.state = next;

        let mut queue: VecDeque<Effect> = effects.into();
        while let Some(effect) = queue.pop_front() {
            let outcome = self.run_effect(effect).await;
            let (next, effects) = state::update(self.state.clone(), outcome);
            self.state = next;
            queue.extend(effects);
        }
    }

    async fn run_effect(&self, effect: Effect) -> Action {
        match effect {
            Effect::FetchProducts => match self.api.list().await {
                Ok(products) => Action::ProductsLoaded(products),
                Err(e) => {
                    warn!(err = %e, "fetch products failed");
                    Action::LoadFailed
                }
            },
            // Mutation responses are deliberately dropped: the follow-up
            // refetch is the only way new data enters the list.
            Effect::Create(input) => match self.api.create(&input).await {
                Ok(_) => Action::MutationSucceeded(Mutation::Create),
                Err(e) => {
                    warn!(err = %e, "create request failed");
                    Action::MutationFailed(Mutation::Create)
                }
            },
            Effect::Update(id, input) => match self.api.update(id, &input).await {
                Ok(_) => Action::MutationSucceeded(Mutation::Update),
                Err(e) => {
                    warn!(err = %e, "update request failed");
                    Action::MutationFailed(Mutation::Update)
                }
            },
            Effect::Delete(id) => match self.api.delete(id).await {
                Ok(()) => Action::MutationSucceeded(Mutation::Delete),
                Err(e) => {
                    warn!(err = %e, "delete request failed");
                    Action::MutationFailed(Mutation::Delete)
                }
            },
        }
    }
}
