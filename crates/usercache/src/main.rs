use anyhow::{Context as _, Result};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use usercache::{config::Config, state::AppState};
use usercache_core::cache::user_key;
use usercache_core::context::Context;
use usercache_core::user::{validate_user_fields, User, UserFields, UserId};

/// usercache - Cache-aside user records over a durable store
#[derive(Parser, Debug)]
#[command(name = "usercache")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Deadline for the whole command in milliseconds
    #[arg(long, global = true, env = "OPERATION_TIMEOUT_MS")]
    timeout_ms: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a user and print it
    Create(UserArgs),
    /// Read a user through the cache
    Get {
        /// User ID
        id: UserId,
    },
    /// Replace a user's fields and invalidate its cache entry
    Update {
        /// User ID
        id: UserId,
        #[command(flatten)]
        fields: UserArgs,
    },
    /// Delete a user and invalidate its cache entry
    Delete {
        /// User ID
        id: UserId,
    },
    /// Show whether a user is cached and for how long
    CacheStatus {
        /// User ID
        id: UserId,
    },
    /// Walk through create, read, update, read, delete in one process
    Demo(DemoArgs),
}

#[derive(Args, Debug, Clone)]
struct UserArgs {
    /// Email address
    #[arg(long)]
    email: String,

    /// Display name
    #[arg(long)]
    name: String,
}

#[derive(Args, Debug, Clone)]
struct DemoArgs {
    /// Email address of the demo user
    #[arg(long, default_value = "a@x.com")]
    email: String,

    /// Display name of the demo user
    #[arg(long, default_value = "A")]
    name: String,
}

fn validated(email: &str, name: &str) -> Result<UserFields> {
    let fields = UserFields::new(email, name);
    validate_user_fields(&fields)?;
    Ok(fields)
}

#[derive(Serialize)]
struct CacheStatus {
    key: String,
    cached: bool,
    ttl_ms: Option<u128>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "usercache=info,usercache_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut config = Config::from_env();
    if let Some(timeout_ms) = cli.timeout_ms {
        config.operation_timeout_ms = timeout_ms;
    }

    let state = AppState::new(&config)
        .await
        .context("Failed to initialize backends")?;

    // Interrupts cancel the in-flight command
    let ctx = state.operation_context();
    let interrupt = ctx.clone();
    tokio::spawn(async move {
        shutdown_signal().await;
        interrupt.cancel();
    });

    run(&state, &ctx, cli.command).await
}

async fn run(state: &AppState, ctx: &Context, command: Command) -> Result<()> {
    match command {
        Command::Create(args) => {
            let fields = validated(&args.email, &args.name)?;
            let user = state.users.create_user(ctx, &fields).await?;
            print_json(&user)
        }
        Command::Get { id } => {
            let user = state.users.get_user(ctx, id).await?;
            print_json(&user)
        }
        Command::Update { id, fields } => {
            let fields = validated(&fields.email, &fields.name)?;
            state.users.update_user(ctx, id, &fields).await?;
            tracing::info!(user_id = %id, "User updated");
            Ok(())
        }
        Command::Delete { id } => {
            state.users.delete_user(ctx, id).await?;
            tracing::info!(user_id = %id, "User deleted");
            Ok(())
        }
        Command::CacheStatus { id } => print_json(&cache_status(state, ctx, id).await?),
        Command::Demo(args) => {
            let fields = validated(&args.email, &args.name)?;
            for line in demo(state, ctx, fields).await? {
                println!("{line}");
            }
            Ok(())
        }
    }
}

async fn cache_status(state: &AppState, ctx: &Context, id: UserId) -> Result<CacheStatus> {
    let key = user_key(id);
    let cached = state.cache.exists(ctx, &key).await?;
    let ttl = state.cache.ttl(ctx, &key).await?;

    Ok(CacheStatus {
        key,
        cached,
        ttl_ms: ttl.map(|d| d.as_millis()),
    })
}

/// Runs the full lifecycle against a single process, so it also works with
/// the non-persistent in-memory store. Returns one report line per step.
async fn demo(state: &AppState, ctx: &Context, fields: UserFields) -> Result<Vec<String>> {
    let mut report = Vec::new();

    let user = state.users.create_user(ctx, &fields).await?;
    report.push(step("created", &user, state, ctx).await?);

    let user = state.users.get_user(ctx, user.id).await?;
    report.push(step("read (miss, populated)", &user, state, ctx).await?);

    let user = state.users.get_user(ctx, user.id).await?;
    report.push(step("read (hit)", &user, state, ctx).await?);

    let changed = UserFields::new(
        format!("updated.{}", fields.email),
        format!("{} (updated)", fields.name),
    );
    validate_user_fields(&changed)?;
    state.users.update_user(ctx, user.id, &changed).await?;
    let updated = User::from_fields(user.id, changed);
    report.push(step("updated (invalidated)", &updated, state, ctx).await?);

    let user = state.users.get_user(ctx, user.id).await?;
    report.push(step("read (miss, repopulated)", &user, state, ctx).await?);

    state.users.delete_user(ctx, user.id).await?;
    match state.users.get_user(ctx, user.id).await {
        Err(err) if err.is_not_found() => {
            report.push(format!("deleted: read now fails with \"{err}\""));
            Ok(report)
        }
        Err(err) => Err(err.into()),
        Ok(user) => anyhow::bail!("user {} still readable after delete", user.id),
    }
}

async fn step(label: &str, user: &User, state: &AppState, ctx: &Context) -> Result<String> {
    let status = cache_status(state, ctx, user.id).await?;
    Ok(format!(
        "{label}: {} | {}",
        serde_json::to_string(user)?,
        serde_json::to_string(&status)?
    ))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Wait for shutdown signals (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::warn!(error = %err, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::warn!(error = %err, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, canceling...");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, canceling...");
        }
    }
}

#[cfg(all(test, feature = "inmemory", feature = "memory"))]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            cache_ttl_seconds: 300,
            cache_max_entries: 100,
            operation_timeout_ms: 1_000,
            sqlite_path: "unused.db".to_string(),
            redis_url: "redis://unused".to_string(),
        }
    }

    #[tokio::test]
    async fn test_demo_reports_each_step() {
        let state = AppState::new(&test_config()).await.unwrap();
        let ctx = state.operation_context();

        let report = demo(&state, &ctx, UserFields::new("demo@example.com", "Demo"))
            .await
            .unwrap();

        assert_eq!(report.len(), 6);
        assert!(report[1].contains(r#""cached":true"#));
        assert!(report[2].contains(r#""cached":true"#));
        assert!(report[5].starts_with("deleted:"));
    }

    #[tokio::test]
    async fn test_demo_update_step_shows_new_fields() {
        let state = AppState::new(&test_config()).await.unwrap();
        let ctx = state.operation_context();

        let report = demo(&state, &ctx, UserFields::new("demo@example.com", "Demo"))
            .await
            .unwrap();

        let updated = &report[3];
        assert!(updated.starts_with("updated (invalidated):"));
        assert!(updated.contains("updated.demo@example.com"));
        assert!(updated.contains("Demo (updated)"));
        assert!(updated.contains(r#""cached":false"#));
    }
}
