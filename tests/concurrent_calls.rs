mod common;

use anyhow::Result;
use cert_patch::{Config, PatchHelper};
use common::applicant;
use serde_json::json;
use std::sync::Arc;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn shared_helper_serves_independent_calls() -> Result<()> {
    let helper = Arc::new(PatchHelper::default());
    let mut handles = Vec::new();

    for age in 18..50u32 {
        let helper = Arc::clone(&helper);
        handles.push(tokio::task::spawn_blocking(move || {
            helper.merge_patch(&json!({ "age": age }), &applicant())
        }));
    }

    for (offset, handle) in handles.into_iter().enumerate() {
        let merged = handle.await??;
        assert_eq!(merged.age, Some(18 + offset as u32));
    }

    Ok(())
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn failures_do_not_affect_other_calls() -> Result<()> {
    let helper = Arc::new(PatchHelper::from_config(&Config {
        max_operations: 4,
        max_merge_depth: 8,
    }));
    let target = Arc::new(applicant());

    let failing = {
        let helper = Arc::clone(&helper);
        let target = Arc::clone(&target);
        tokio::task::spawn_blocking(move || {
            let patch = serde_json::from_value(json!([
                { "op": "test", "path": "/name", "value": "Bea" }
            ]))
            .expect("valid patch");
            helper.patch(&patch, target.as_ref())
        })
    };
    let succeeding = {
        let helper = Arc::clone(&helper);
        let target = Arc::clone(&target);
        tokio::task::spawn_blocking(move || {
            let patch = serde_json::from_value(json!([
                { "op": "replace", "path": "/age", "value": 18 }
            ]))
            .expect("valid patch");
            helper.patch(&patch, target.as_ref())
        })
    };

    assert!(failing.await?.unwrap_err().is_unprocessable());
    assert_eq!(succeeding.await??.age, Some(18));
    assert_eq!(*target, applicant());
    Ok(())
}
