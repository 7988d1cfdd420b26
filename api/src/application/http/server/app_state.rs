use std::sync::Arc;

use freshkeep_core::application::FreshKeepService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: FreshKeepService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: FreshKeepService) -> Self {
        Self { args, service }
    }
}
