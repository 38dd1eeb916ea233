use anyhow::Result;
use serde_json::Value;

use crate::models::heroku::app_record::value_text;
use crate::models::heroku::{AppRecord, DisplayModel, FieldValue};
use crate::providers::apps_api::AppsApi;
use crate::providers::heroku::heroku_dtos::{AddonDto, CollaboratorDto};
use crate::utils::formatting::{capitalize, format_bytes, format_date, integer_value, quantify};

macro_rules! message {
    ($cb:expr, $($arg:tt)*) => {{
        if let Some(cb) = $cb.as_mut() {
            cb(&format!($($arg)*));
        }
    }};
}

/// Stack whose apps are scaled through the process model instead of
/// dyno/worker counts.
const PROCESS_MODEL_STACK: &str = "cedar";

pub fn addon_names(addons: Vec<AddonDto>) -> Vec<String> {
    let mut names: Vec<String> = addons.into_iter().map(|addon| addon.name).collect();
    names.sort();
    names
}

pub fn collaborator_emails(
    collaborators: Vec<CollaboratorDto>,
    owner: Option<&str>,
) -> Vec<String> {
    let mut emails: Vec<String> = collaborators
        .into_iter()
        .map(|collaborator| collaborator.email)
        .filter(|email| Some(email.as_str()) != owner)
        .collect();
    emails.sort();
    emails
}

/// Everything a field rule may look at.
pub struct InfoContext<'a> {
    pub record: &'a AppRecord,
    pub addons: &'a [String],
    pub collaborators: &'a [String],
}

impl InfoContext<'_> {
    fn has(&self, key: &str) -> bool {
        self.record.present(key).is_some()
    }

    fn raw(&self, key: &str) -> FieldValue {
        FieldValue::from_raw(self.record.get(key))
    }

    fn formatted(&self, key: &str, format: fn(&Value) -> String) -> FieldValue {
        match self.record.present(key) {
            Some(value) => FieldValue::Text(format(value)),
            None => FieldValue::Blank,
        }
    }

    fn shows_dyno_counts(&self) -> bool {
        self.record.stack() != Some(PROCESS_MODEL_STACK)
    }
}

/// One row of the `apps:info` table: shown when `include` holds, valued by `extract`.
pub struct FieldRule {
    pub label: &'static str,
    pub include: fn(&InfoContext) -> bool,
    pub extract: fn(&InfoContext) -> FieldValue,
}

fn always(_: &InfoContext) -> bool {
    true
}

fn database_size(ctx: &InfoContext) -> FieldValue {
    let Some(size) = ctx.record.present("database_size") else {
        return FieldValue::Blank;
    };
    let size = format_bytes(size);

    match ctx.record.present("database_tables") {
        Some(tables) => FieldValue::Text(format!(
            "{} in {}",
            size.replace("(empty)", "0K"),
            quantify("table", integer_value(tables))
        )),
        None => FieldValue::Text(size),
    }
}

fn dyno_hours(ctx: &InfoContext) -> FieldValue {
    let Some(Value::Object(hours)) = ctx.record.get("dyno_hours") else {
        return FieldValue::Blank;
    };

    FieldValue::List(
        hours
            .iter()
            .map(|(process_type, hours)| {
                format!(
                    "{} - {:.2} dyno-hours",
                    capitalize(process_type),
                    hours.as_f64().unwrap_or_default()
                )
            })
            .collect(),
    )
}

fn tier(ctx: &InfoContext) -> FieldValue {
    match ctx.record.present("tier") {
        Some(Value::String(tier)) => FieldValue::Text(capitalize(tier)),
        other => FieldValue::from_raw(other),
    }
}

/// Table rows in display order.
pub fn field_rules() -> Vec<FieldRule> {
    vec![
        FieldRule {
            label: "Addons",
            include: |ctx| !ctx.addons.is_empty(),
            extract: |ctx| FieldValue::List(ctx.addons.to_vec()),
        },
        FieldRule {
            label: "Collaborators",
            include: always,
            extract: |ctx| FieldValue::List(ctx.collaborators.to_vec()),
        },
        FieldRule {
            label: "Create Status",
            include: |ctx| {
                ctx.record
                    .present("create_status")
                    .is_some_and(|status| status.as_str() != Some("complete"))
            },
            extract: |ctx| ctx.raw("create_status"),
        },
        FieldRule {
            label: "Cron Finished At",
            include: |ctx| ctx.has("cron_finished_at"),
            extract: |ctx| ctx.formatted("cron_finished_at", format_date),
        },
        FieldRule {
            label: "Cron Next Run",
            include: |ctx| ctx.has("cron_next_run"),
            extract: |ctx| ctx.formatted("cron_next_run", format_date),
        },
        FieldRule {
            label: "Database Size",
            include: |ctx| ctx.has("database_size"),
            extract: database_size,
        },
        FieldRule {
            label: "Git URL",
            include: always,
            extract: |ctx| ctx.raw("git_url"),
        },
        FieldRule {
            label: "Dyno Hours",
            include: |ctx| ctx.record.get("dyno_hours").is_some_and(Value::is_object),
            extract: dyno_hours,
        },
        FieldRule {
            label: "Owner Email",
            include: always,
            extract: |ctx| ctx.raw("owner_email"),
        },
        FieldRule {
            label: "Repo Size",
            include: |ctx| ctx.has("repo_size"),
            extract: |ctx| ctx.formatted("repo_size", format_bytes),
        },
        FieldRule {
            label: "Slug Size",
            include: |ctx| ctx.has("slug_size"),
            extract: |ctx| ctx.formatted("slug_size", format_bytes),
        },
        FieldRule {
            label: "Stack",
            include: always,
            extract: |ctx| ctx.raw("stack"),
        },
        FieldRule {
            label: "Dynos",
            include: |ctx| ctx.shows_dyno_counts(),
            extract: |ctx| ctx.raw("dynos"),
        },
        FieldRule {
            label: "Workers",
            include: |ctx| ctx.shows_dyno_counts(),
            extract: |ctx| ctx.raw("workers"),
        },
        FieldRule {
            label: "Web URL",
            include: always,
            extract: |ctx| ctx.raw("web_url"),
        },
        FieldRule {
            label: "Tier",
            include: |ctx| ctx.has("tier"),
            extract: tier,
        },
    ]
}

pub fn build_display_model(ctx: &InfoContext) -> DisplayModel {
    let mut model = DisplayModel::new();
    for rule in field_rules() {
        if (rule.include)(ctx) {
            model.push(rule.label, (rule.extract)(ctx));
        }
    }
    model
}

/// `key=value` lines for `--shell`, sorted by key.
///
/// Works on a copy of the record: `domain_name` is flattened to its domain and
/// non-empty addon/collaborator lists are added comma-joined.
pub fn shell_lines(ctx: &InfoContext) -> Vec<String> {
    let mut fields = ctx.record.fields().clone();

    let domain = match fields.get("domain_name") {
        Some(Value::Object(domain)) => Some(domain.get("domain").cloned().unwrap_or(Value::Null)),
        _ => None,
    };
    if let Some(domain) = domain {
        fields.insert("domain_name".to_string(), domain);
    }
    if !ctx.addons.is_empty() {
        fields.insert("addons".to_string(), Value::String(ctx.addons.join(",")));
    }
    if !ctx.collaborators.is_empty() {
        fields.insert(
            "collaborators".to_string(),
            Value::String(ctx.collaborators.join(",")),
        );
    }

    let mut entries: Vec<(&String, &Value)> = fields.iter().collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries
        .into_iter()
        .map(|(key, value)| format!("{}={}", key, value_text(value)))
        .collect()
}

pub struct InfoOperation<'a, A: AppsApi> {
    api: &'a A,
}

impl<'a, A: AppsApi> InfoOperation<'a, A> {
    pub fn new(api: &'a A) -> Self {
        Self { api }
    }

    pub async fn run<F>(
        &self,
        app: &str,
        shell: bool,
        message_callback: &mut Option<F>,
    ) -> Result<()>
    where
        F: FnMut(&str),
    {
        let record = self.api.get_app(app).await?;

        if !shell {
            message!(message_callback, "=== {}", record.name().unwrap_or(app));
        }

        let addons = addon_names(self.api.get_addons(app).await?);
        let collaborators =
            collaborator_emails(self.api.get_collaborators(app).await?, record.owner_email());
        tracing::debug!(
            app,
            addons = addons.len(),
            collaborators = collaborators.len(),
            "fetched app info"
        );

        let ctx = InfoContext {
            record: &record,
            addons: &addons,
            collaborators: &collaborators,
        };

        let lines = if shell {
            shell_lines(&ctx)
        } else {
            build_display_model(&ctx).render_lines()
        };
        for line in lines {
            message!(message_callback, "{}", line);
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "../../../tests/application/operations/info_operation.rs"]
mod tests;
