use super::{
    InfoContext, InfoOperation, addon_names, build_display_model, collaborator_emails,
    shell_lines,
};
use crate::models::heroku::{AppRecord, FieldValue};
use crate::providers::heroku::heroku_dtos::{AddonDto, CollaboratorDto};
use crate::providers::recording_api::RecordingApi;
use serde_json::{Value, json};

fn record(value: Value) -> AppRecord {
    serde_json::from_value(value).expect("app record fixture")
}

fn text(value: &str) -> FieldValue {
    FieldValue::Text(value.to_string())
}

fn list(values: &[&str]) -> FieldValue {
    FieldValue::List(values.iter().map(|v| v.to_string()).collect())
}

fn basic_app() -> AppRecord {
    record(json!({
        "name": "foo",
        "stack": "cedar",
        "owner_email": "a@x.com",
        "tier": "basic",
        "git_url": "g://foo",
        "web_url": "http://foo"
    }))
}

#[test]
fn addon_names_are_sorted() {
    let addons = vec![
        AddonDto { name: "redis".to_string() },
        AddonDto { name: "logging".to_string() },
    ];
    assert_eq!(addon_names(addons), vec!["logging", "redis"]);
}

#[test]
fn collaborator_emails_exclude_owner_and_sort() {
    let collaborators = ["c@x.com", "a@x.com", "b@x.com"]
        .iter()
        .map(|email| CollaboratorDto { email: email.to_string() })
        .collect::<Vec<_>>();

    let emails = collaborator_emails(collaborators, Some("a@x.com"));
    assert_eq!(emails, vec!["b@x.com", "c@x.com"]);

    let again = emails
        .iter()
        .map(|email| CollaboratorDto { email: email.clone() })
        .collect::<Vec<_>>();
    assert_eq!(collaborator_emails(again, Some("a@x.com")), emails);
}

#[test]
fn table_model_for_cedar_app_without_addons() {
    let app = basic_app();
    let collaborators = vec!["b@x.com".to_string()];
    let model = build_display_model(&InfoContext {
        record: &app,
        addons: &[],
        collaborators: &collaborators,
    });

    assert_eq!(
        model.labels(),
        vec!["Collaborators", "Git URL", "Owner Email", "Stack", "Web URL", "Tier"]
    );
    assert_eq!(model.get("Collaborators"), Some(&list(&["b@x.com"])));
    assert_eq!(model.get("Git URL"), Some(&text("g://foo")));
    assert_eq!(model.get("Owner Email"), Some(&text("a@x.com")));
    assert_eq!(model.get("Stack"), Some(&text("cedar")));
    assert_eq!(model.get("Web URL"), Some(&text("http://foo")));
    assert_eq!(model.get("Tier"), Some(&text("Basic")));
    assert_eq!(model.get("Addons"), None);
}

#[test]
fn table_model_keeps_rule_order_for_full_record() {
    let app = record(json!({
        "name": "bar",
        "stack": "bamboo-mri-1.9.2",
        "owner_email": "a@x.com",
        "create_status": "provisioning",
        "cron_finished_at": "2012-06-01T12:00:00Z",
        "cron_next_run": "2012-06-02T12:00:00Z",
        "database_size": 12288,
        "database_tables": 1,
        "git_url": "g://bar",
        "dyno_hours": { "web": 1.5, "worker": 0.25 },
        "repo_size": 2048,
        "slug_size": 0,
        "dynos": 2,
        "workers": 0,
        "web_url": "http://bar",
        "tier": "production"
    }));
    let addons = vec!["redis".to_string()];
    let model = build_display_model(&InfoContext {
        record: &app,
        addons: &addons,
        collaborators: &[],
    });

    assert_eq!(
        model.labels(),
        vec![
            "Addons",
            "Collaborators",
            "Create Status",
            "Cron Finished At",
            "Cron Next Run",
            "Database Size",
            "Git URL",
            "Dyno Hours",
            "Owner Email",
            "Repo Size",
            "Slug Size",
            "Stack",
            "Dynos",
            "Workers",
            "Web URL",
            "Tier",
        ]
    );
    assert_eq!(model.get("Addons"), Some(&list(&["redis"])));
    assert_eq!(model.get("Collaborators"), Some(&list(&[])));
    assert_eq!(model.get("Cron Finished At"), Some(&text("2012/06/01 12:00:00 UTC")));
    assert_eq!(model.get("Database Size"), Some(&text("12K in 1 table")));
    assert_eq!(
        model.get("Dyno Hours"),
        Some(&list(&["Web - 1.50 dyno-hours", "Worker - 0.25 dyno-hours"]))
    );
    assert_eq!(model.get("Repo Size"), Some(&text("2.0K")));
    assert_eq!(model.get("Slug Size"), Some(&text("(empty)")));
    assert_eq!(model.get("Dynos"), Some(&text("2")));
    assert_eq!(model.get("Workers"), Some(&text("0")));
    assert_eq!(model.get("Tier"), Some(&text("Production")));
}

#[test]
fn database_size_appends_pluralized_table_count() {
    let app = record(json!({ "name": "foo", "database_size": "12K", "database_tables": 3 }));
    let model = build_display_model(&InfoContext {
        record: &app,
        addons: &[],
        collaborators: &[],
    });
    assert_eq!(model.get("Database Size"), Some(&text("12K in 3 tables")));

    let empty = record(json!({ "name": "foo", "database_size": 0, "database_tables": 0 }));
    let model = build_display_model(&InfoContext {
        record: &empty,
        addons: &[],
        collaborators: &[],
    });
    assert_eq!(model.get("Database Size"), Some(&text("0K in 0 tables")));
}

#[test]
fn complete_create_status_and_null_fields_are_omitted() {
    let app = record(json!({
        "name": "foo",
        "stack": "cedar",
        "create_status": "complete",
        "cron_next_run": null,
        "tier": null,
        "dyno_hours": "n/a"
    }));
    let model = build_display_model(&InfoContext {
        record: &app,
        addons: &[],
        collaborators: &[],
    });

    let labels = model.labels();
    assert!(!labels.contains(&"Create Status"));
    assert!(!labels.contains(&"Cron Next Run"));
    assert!(!labels.contains(&"Tier"));
    assert!(!labels.contains(&"Dyno Hours"));
    assert_eq!(model.get("Git URL"), Some(&FieldValue::Blank));
}

#[test]
fn shell_lines_flatten_domain_and_sort_keys() {
    let app = record(json!({
        "name": "foo",
        "web_url": "http://foo",
        "domain_name": { "domain": "foo.example.com", "id": 3 },
        "dynos": 1,
        "tier": null
    }));
    let addons = vec!["logging".to_string(), "redis".to_string()];
    let collaborators = vec!["b@x.com".to_string(), "c@x.com".to_string()];

    let lines = shell_lines(&InfoContext {
        record: &app,
        addons: &addons,
        collaborators: &collaborators,
    });

    assert_eq!(
        lines,
        vec![
            "addons=logging,redis",
            "collaborators=b@x.com,c@x.com",
            "domain_name=foo.example.com",
            "dynos=1",
            "name=foo",
            "tier=",
            "web_url=http://foo",
        ]
    );
}

#[test]
fn shell_lines_leave_out_empty_lists() {
    let app = record(json!({ "name": "foo", "domain_name": null }));
    let lines = shell_lines(&InfoContext {
        record: &app,
        addons: &[],
        collaborators: &[],
    });
    assert_eq!(lines, vec!["domain_name=", "name=foo"]);
}

#[tokio::test]
async fn run_prints_header_then_table() {
    let api = RecordingApi {
        collaborators: vec!["a@x.com".to_string(), "b@x.com".to_string()],
        ..RecordingApi::with_app(json!({
            "name": "foo",
            "stack": "cedar",
            "owner_email": "a@x.com",
            "tier": "basic",
            "git_url": "g://foo",
            "web_url": "http://foo"
        }))
    };

    let mut lines = Vec::new();
    let mut callback = Some(|msg: &str| lines.push(msg.to_string()));
    InfoOperation::new(&api)
        .run("foo", false, &mut callback)
        .await
        .expect("info succeeds");

    assert_eq!(
        api.calls(),
        vec![
            "GET /apps/foo",
            "GET /apps/foo/addons",
            "GET /apps/foo/collaborators",
        ]
    );
    assert_eq!(
        lines,
        vec![
            "=== foo",
            "Collaborators: b@x.com",
            "Git URL:       g://foo",
            "Owner Email:   a@x.com",
            "Stack:         cedar",
            "Web URL:       http://foo",
            "Tier:          Basic",
        ]
    );
}

#[tokio::test]
async fn run_in_shell_mode_skips_header() {
    let api = RecordingApi {
        addons: vec!["redis".to_string()],
        ..RecordingApi::with_app(json!({ "name": "foo", "owner_email": "a@x.com" }))
    };

    let mut lines = Vec::new();
    let mut callback = Some(|msg: &str| lines.push(msg.to_string()));
    InfoOperation::new(&api)
        .run("foo", true, &mut callback)
        .await
        .expect("info succeeds");

    assert_eq!(lines, vec!["addons=redis", "name=foo", "owner_email=a@x.com"]);
}

#[tokio::test]
async fn run_stops_when_app_fetch_fails() {
    let api = RecordingApi {
        missing_app: true,
        ..RecordingApi::default()
    };

    let mut lines = Vec::new();
    let mut callback = Some(|msg: &str| lines.push(msg.to_string()));
    let result = InfoOperation::new(&api).run("ghost", false, &mut callback).await;

    assert!(result.is_err());
    assert_eq!(api.calls(), vec!["GET /apps/ghost"]);
    assert!(lines.is_empty());
}
