//! Register, login, logout and current-user commands

use crate::{api::types::AuthResponse, EsportsError, Result};

use super::{common::CommandContext, output::print_json};

/// Minimum password length accepted at registration.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Check credentials before sending them.
pub fn validate_credentials(username: &str, password: &str, registering: bool) -> Result<()> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(EsportsError::Validation(
            "Заполни username и пароль.".to_string(),
        ));
    }
    if registering && password.chars().count() < MIN_PASSWORD_LEN {
        return Err(EsportsError::Validation(format!(
            "Пароль должен быть минимум {MIN_PASSWORD_LEN} символов."
        )));
    }
    Ok(())
}

fn store_token(ctx: &CommandContext, res: &AuthResponse) -> Result<()> {
    if let Some(token) = res.token.as_deref() {
        ctx.tokens.save(token)?;
    }
    Ok(())
}

/// Handle `auth register`
pub async fn handle_register(
    ctx: &CommandContext,
    username: &str,
    email: Option<&str>,
    password: &str,
) -> Result<()> {
    validate_credentials(username, password, true)?;

    let res = ctx
        .client
        .register(username.trim(), email.unwrap_or_default().trim(), password)
        .await?;
    store_token(ctx, &res)?;

    println!("Аккаунт создан: {}", res.username.as_deref().unwrap_or(username.trim()));
    Ok(())
}

/// Handle `auth login`
pub async fn handle_login(ctx: &CommandContext, username: &str, password: &str) -> Result<()> {
    validate_credentials(username, password, false)?;

    let res = ctx.client.login(username.trim(), password).await?;
    store_token(ctx, &res)?;

    println!("Успешный вход.");
    if res.is_staff {
        println!("Доступна админ-панель: esports-db admin --help");
    }
    Ok(())
}

/// Handle `auth logout`. The local token is removed even if the server call fails.
pub async fn handle_logout(ctx: &CommandContext) -> Result<()> {
    ctx.client.logout().await;
    ctx.tokens.clear()?;
    println!("Вы вышли.");
    Ok(())
}

/// Handle `auth me`
pub async fn handle_me(ctx: &CommandContext, as_json: bool) -> Result<()> {
    let me = ctx.client.me().await?;

    match me {
        None => {
            if ctx.client.has_token() {
                ctx.forget_token();
            }
            if as_json {
                print_json(&serde_json::Value::Null)?;
            } else {
                println!("Не выполнен вход.");
            }
        }
        Some(me) if as_json => print_json(&me)?,
        Some(me) => {
            println!("Пользователь: {}", me.username.as_deref().unwrap_or("—"));
            if let Some(email) = me.email.as_deref().filter(|e| !e.is_empty()) {
                println!("Email: {email}");
            }
            println!("Роль: {}", if me.is_admin() { "staff" } else { "user" });
        }
    }
    Ok(())
}
