// SPDX-FileCopyrightText: 2026 Taskroute Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Subcommand implementations. Each returns the JSON or text to print.

use serde_json::json;
use taskroute_config::TaskrouteConfig;
use taskroute_core::TaskrouteError;
use taskroute_router::Router;

fn to_json(value: &serde_json::Value) -> Result<String, TaskrouteError> {
    serde_json::to_string_pretty(value).map_err(|e| TaskrouteError::Internal(e.to_string()))
}

/// Classify `text` without consulting any routing table.
pub fn classify(router: &Router, text: &str) -> Result<String, TaskrouteError> {
    let (classification, rule) = router.classifier().classify_with_rule(text);
    to_json(&json!({
        "task_type": classification.task_type,
        "confidence": classification.confidence,
        "reasoning": classification.reasoning,
        "rule": rule.map(|r| r.name),
    }))
}

/// Route `text` (or the explicit `task`) and report the decision.
///
/// When no preference resolves, the fallback model is reported alongside.
pub async fn route(
    router: &Router,
    text: &str,
    task: Option<&str>,
) -> Result<String, TaskrouteError> {
    let decision = match task {
        Some(task) => router.route_request(text, Some(task)).await?,
        None => router.route_message(text).await?,
    };

    let fallback = decision
        .model
        .is_none()
        .then(|| router.fallback_model(&decision.task_type));

    to_json(&json!({
        "decision": decision,
        "fallback_model": fallback,
    }))
}

/// List predefined and operator-defined task types.
pub async fn task_types(router: &Router) -> Result<String, TaskrouteError> {
    let types = router.available_task_types().await?;
    to_json(&json!(types))
}

/// Summarise an already-validated configuration.
///
/// Preferences shadowed by an earlier entry for the same task type are
/// listed one per line after the summary.
pub fn check(config: &TaskrouteConfig) -> String {
    let routing = match &config.routing {
        None => "routing not configured".to_string(),
        Some(r) => format!(
            "routing {} with {} preference(s)",
            if r.enabled { "enabled" } else { "disabled" },
            r.preferences.len()
        ),
    };
    let mut out = format!(
        "config OK: default model {}, {routing}",
        config.model.default_model
    );

    let shadowed = config
        .routing
        .as_ref()
        .map(|r| r.shadowed_preferences())
        .unwrap_or_default();
    for (i, pref) in shadowed {
        out.push_str(&format!(
            "\nwarning: routing.preferences[{i}] ({} -> {}) is shadowed by an earlier entry",
            pref.task_type, pref.model
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use taskroute_router::LiveConfig;
    use taskroute_test_utils::routing_table;

    use super::*;

    fn router(config: TaskrouteConfig) -> Router {
        let live = Arc::new(LiveConfig::new(config));
        Router::new(live.clone(), live)
    }

    #[test]
    fn classify_reports_rule() {
        let router = router(TaskrouteConfig::default());
        let out: serde_json::Value =
            serde_json::from_str(&classify(&router, "Fix the bug in the parser").unwrap()).unwrap();
        assert_eq!(out["task_type"], "bug_fixing");
        assert_eq!(out["rule"], "bug_fixing");
    }

    #[test]
    fn classify_fallback_has_no_rule() {
        let router = router(TaskrouteConfig::default());
        let out: serde_json::Value = serde_json::from_str(&classify(&router, "").unwrap()).unwrap();
        assert!(out["rule"].is_null());
    }

    #[tokio::test]
    async fn route_reports_fallback_when_unmatched() {
        let config = TaskrouteConfig {
            routing: Some(routing_table(&[("creative_writing", "poet")])),
            ..TaskrouteConfig::default()
        };
        let out: serde_json::Value = serde_json::from_str(
            &route(&router(config), "Write a function to add numbers", None)
                .await
                .unwrap(),
        )
        .unwrap();
        assert!(out["decision"]["model"].is_null());
        assert_eq!(out["fallback_model"], "claude-sonnet-4-20250514");
    }

    #[tokio::test]
    async fn route_honours_task_prefix() {
        let config = TaskrouteConfig {
            routing: Some(routing_table(&[("creative_writing", "poet")])),
            ..TaskrouteConfig::default()
        };
        let out: serde_json::Value = serde_json::from_str(
            &route(&router(config), "/task creative_writing anything", None)
                .await
                .unwrap(),
        )
        .unwrap();
        assert_eq!(out["decision"]["model"], "poet");
        assert_eq!(out["decision"]["is_explicit"], true);
        assert!(out["fallback_model"].is_null());
    }

    #[tokio::test]
    async fn task_types_lists_taxonomy() {
        let out: serde_json::Value =
            serde_json::from_str(&task_types(&router(TaskrouteConfig::default())).await.unwrap())
                .unwrap();
        assert_eq!(out.as_array().unwrap().len(), 7);
        assert_eq!(out[0]["id"], "code_generation");
    }

    #[test]
    fn check_summarises_routing() {
        assert!(check(&TaskrouteConfig::default()).contains("routing not configured"));
        let config = TaskrouteConfig {
            routing: Some(routing_table(&[("a", "m")])),
            ..TaskrouteConfig::default()
        };
        assert!(check(&config).contains("routing enabled with 1 preference(s)"));
    }

    #[test]
    fn check_reports_shadowed_preferences() {
        let config = TaskrouteConfig {
            routing: Some(routing_table(&[
                ("code_generation", "gpt-4o"),
                ("creative_writing", "poet"),
                ("code_generation", "gpt-4o-mini"),
            ])),
            ..TaskrouteConfig::default()
        };
        let out = check(&config);
        assert!(out.starts_with("config OK"));
        assert!(out.contains(
            "warning: routing.preferences[2] (code_generation -> gpt-4o-mini) is shadowed"
        ));
        assert_eq!(out.lines().count(), 2);
    }
}
