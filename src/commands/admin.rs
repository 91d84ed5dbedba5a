//! Admin panel: staff-only create/update/delete over the API collections.
//!
//! The panel keeps the last loaded list of a collection. A write that
//! succeeds triggers a reload; a write that fails leaves the list as it was
//! and surfaces the error.

use log::warn;
use serde_json::{Map, Value};

use crate::{
    api::{types::Me, ApiClient},
    cli::AdminCmd,
    EsportsError, Resource, Result,
};

use super::{common::CommandContext, output::print_json};

/// Path of a single record: `{collection}{id}/`.
pub fn record_path(resource: Resource, id: u64) -> String {
    format!("{}{id}/", resource.path())
}

/// JSON body from `key=value` assignments. Keys must be editable fields of
/// `resource`; values are sent as strings, the way form input is.
pub fn build_payload(resource: Resource, fields: &[(String, String)]) -> Result<Value> {
    if fields.is_empty() {
        return Err(EsportsError::Validation(format!(
            "Нет полей. Доступные поля: {}",
            resource.fields().join(", ")
        )));
    }

    let mut body = Map::new();
    for (key, value) in fields {
        if !resource.fields().contains(&key.as_str()) {
            return Err(EsportsError::Validation(format!(
                "Неизвестное поле «{key}» для {resource}. Доступные поля: {}",
                resource.fields().join(", ")
            )));
        }
        body.insert(key.clone(), Value::String(value.clone()));
    }
    Ok(Value::Object(body))
}

/// Cell text for a raw record value.
pub fn cell_text(v: Option<&Value>) -> String {
    match v {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Loaded state of one admin tab.
#[derive(Debug, Clone)]
pub struct AdminPanel {
    resource: Resource,
    items: Vec<Value>,
}

impl AdminPanel {
    pub fn new(resource: Resource) -> Self {
        Self {
            resource,
            items: Vec::new(),
        }
    }

    pub fn resource(&self) -> Resource {
        self.resource
    }

    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Replace the list with a fresh copy from the server.
    pub async fn reload(&mut self, client: &ApiClient) -> Result<()> {
        self.items = client.fetch_raw(self.resource.path()).await?;
        Ok(())
    }

    async fn reload_after_write(&mut self, client: &ApiClient) {
        if let Err(e) = self.reload(client).await {
            warn!("{} reload after write failed: {e}", self.resource);
        }
    }

    /// POST a new record, then reload.
    pub async fn create(&mut self, client: &ApiClient, fields: &[(String, String)]) -> Result<Value> {
        let payload = build_payload(self.resource, fields)?;
        let created = client.post_json(self.resource.path(), &payload).await?;
        self.reload_after_write(client).await;
        Ok(created)
    }

    /// PATCH the given fields of record `id`, then reload.
    pub async fn update(
        &mut self,
        client: &ApiClient,
        id: u64,
        fields: &[(String, String)],
    ) -> Result<Value> {
        let payload = build_payload(self.resource, fields)?;
        let updated = client
            .patch_json(&record_path(self.resource, id), &payload)
            .await?;
        self.reload_after_write(client).await;
        Ok(updated)
    }

    /// DELETE record `id`, then reload.
    pub async fn delete(&mut self, client: &ApiClient, id: u64) -> Result<()> {
        client.delete(&record_path(self.resource, id)).await?;
        self.reload_after_write(client).await;
        Ok(())
    }

    /// Table rows: id followed by the editable fields.
    pub fn rows(&self) -> Vec<Vec<String>> {
        self.items
            .iter()
            .map(|item| {
                std::iter::once(cell_text(item.get("id")))
                    .chain(self.resource.fields().iter().map(|f| cell_text(item.get(*f))))
                    .collect()
            })
            .collect()
    }

    pub fn render(&self) {
        println!("OK: {} ({})", self.resource.title(), self.items.len());

        let header: Vec<&str> = std::iter::once("id")
            .chain(self.resource.fields().iter().copied())
            .collect();
        println!("{}", header.join(" | "));
        for row in self.rows() {
            println!("{}", row.join(" | "));
        }
    }
}

/// Current user, if they may use the admin panel.
///
/// A missing or rejected token is `NotLoggedIn` (the rejected token is
/// forgotten); a plain user is `StaffRequired`.
pub async fn require_staff(ctx: &CommandContext) -> Result<Me> {
    if !ctx.client.has_token() {
        return Err(EsportsError::NotLoggedIn);
    }
    match ctx.client.me().await? {
        None => {
            ctx.forget_token();
            Err(EsportsError::NotLoggedIn)
        }
        Some(me) if !me.is_admin() => Err(EsportsError::StaffRequired),
        Some(me) => Ok(me),
    }
}

async fn run_admin(ctx: &CommandContext, cmd: AdminCmd) -> Result<()> {
    require_staff(ctx).await?;

    match cmd {
        AdminCmd::List { resource, json } => {
            let mut panel = AdminPanel::new(resource);
            panel.reload(&ctx.client).await?;
            if json {
                print_json(panel.items())?;
            } else {
                panel.render();
            }
        }
        AdminCmd::Create { resource, fields } => {
            let mut panel = AdminPanel::new(resource);
            let created = panel.create(&ctx.client, &fields).await?;
            println!("Создано: id={}", cell_text(created.get("id")));
            panel.render();
        }
        AdminCmd::Update {
            resource,
            id,
            fields,
        } => {
            let mut panel = AdminPanel::new(resource);
            panel.update(&ctx.client, id, &fields).await?;
            println!("Сохранено: id={id}");
            panel.render();
        }
        AdminCmd::Delete { resource, id } => {
            let mut panel = AdminPanel::new(resource);
            panel.delete(&ctx.client, id).await?;
            println!("Удалено: id={id}");
            panel.render();
        }
    }
    Ok(())
}

/// Handle `admin ...`. A 401 anywhere discards the stored token.
pub async fn handle_admin(ctx: &CommandContext, cmd: AdminCmd) -> Result<()> {
    let result = run_admin(ctx, cmd).await;
    if result.as_ref().is_err_and(EsportsError::is_unauthorized) {
        ctx.forget_token();
    }
    ctx.finish();
    result
}
