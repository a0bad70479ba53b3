use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use partscout::prelude::*;

/// One scripted oracle response.
pub enum Step {
    Text(String),
    Failure(String),
}

impl Step {
    pub fn text(text: &str) -> Self {
        Step::Text(text.to_string())
    }

    pub fn failure(message: &str) -> Self {
        Step::Failure(message.to_string())
    }
}

/// Mock OracleTransport that replays a fixed script of responses, in order.
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Step>>,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Step>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl OracleTransport for ScriptedTransport {
    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.script.lock().unwrap().pop_front() {
            Some(Step::Text(text)) => Ok(text),
            Some(Step::Failure(message)) => anyhow::bail!("{}", message),
            None => anyhow::bail!("script exhausted"),
        }
    }
}
