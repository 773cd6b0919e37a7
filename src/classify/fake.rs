#![cfg(test)]

use crate::error::{ForkpruneError, Result};
use crate::github::client::GraphQuery;
use crate::test_utils::*;
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::Mutex;

#[derive(Default)]
struct Script {
    forks: VecDeque<Result<Value>>,
    refs: VecDeque<Result<Value>>,
    endless_forks: bool,
    endless_refs: bool,
    forks_calls: usize,
    refs_calls: usize,
    refs_cursors: Vec<Option<String>>,
}

/// Answers GraphQL calls from queued responses, recording what was asked.
#[derive(Default)]
pub struct ScriptedApi {
    script: Mutex<Script>,
}

impl ScriptedApi {
    /// Every forks page claims there is another one.
    pub fn endless_forks() -> Self {
        let api = Self::default();
        api.script.lock().unwrap().endless_forks = true;
        api
    }

    /// Every refs page claims there is another one.
    pub fn endless_refs() -> Self {
        let api = Self::default();
        api.script.lock().unwrap().endless_refs = true;
        api
    }

    pub fn push_forks(&self, response: Result<Value>) {
        self.script.lock().unwrap().forks.push_back(response);
    }

    pub fn push_refs(&self, response: Result<Value>) {
        self.script.lock().unwrap().refs.push_back(response);
    }

    pub fn forks_calls(&self) -> usize {
        self.script.lock().unwrap().forks_calls
    }

    pub fn refs_calls(&self) -> usize {
        self.script.lock().unwrap().refs_calls
    }

    pub fn refs_cursors(&self) -> Vec<Option<String>> {
        self.script.lock().unwrap().refs_cursors.clone()
    }
}

#[async_trait::async_trait]
impl GraphQuery for ScriptedApi {
    async fn query(&self, document: &str, variables: Value) -> Result<Value> {
        let mut script = self.script.lock().unwrap();
        if document.contains("getForks") {
            script.forks_calls += 1;
            let n = script.forks_calls;
            if let Some(next) = script.forks.pop_front() {
                return next;
            }
            if script.endless_forks {
                let fork = fork_json(
                    &format!("fork-{n}"),
                    vec![],
                    page_info_json(None, false),
                );
                return Ok(forks_page_json(
                    "a@x.com",
                    vec![fork],
                    page_info_json(Some(&format!("f{n}")), true),
                ));
            }
        } else {
            script.refs_calls += 1;
            let n = script.refs_calls;
            let cursor = variables["after"].as_str().map(str::to_string);
            script.refs_cursors.push(cursor);
            if let Some(next) = script.refs.pop_front() {
                return next;
            }
            if script.endless_refs {
                return Ok(refs_page_json(
                    vec![ref_json(&format!("extra-{n}"), "a@x.com", &[])],
                    page_info_json(Some(&format!("r{n}")), true),
                ));
            }
        }
        Err(ForkpruneError::Transport("script exhausted".to_string()))
    }
}
