//! Handlers for the `config` verbs.

use std::io::{self, Write};

use lanlords_config::ConfigDocument;

use crate::cli::ConfigInitArgs;
use crate::client::{AppContext, CliError, CliResult};
use crate::output::render_config;

/// Create (or wholesale replace) the CLI configuration file.
pub(crate) fn handle_config_init(ctx: &AppContext, args: ConfigInitArgs) -> CliResult<()> {
    if !args.yes && !confirm("Are you sure? Any existing config will be overwritten!")? {
        return Err(CliError::Aborted);
    }

    let api_url = match args.api_url {
        Some(value) => value,
        None => prompt("Enter API url")?,
    };
    let api_url = api_url.trim();
    if api_url.is_empty() {
        return Err(CliError::validation("API URL must not be empty"));
    }

    let mut document = ConfigDocument::new();
    document.set("api", "url", api_url);
    ctx.store.save(&document)?;

    println!("Configuration file has been created/updated");
    Ok(())
}

/// Print the current configuration file.
pub(crate) fn handle_config_show(ctx: &AppContext) -> CliResult<()> {
    let document = ctx.store.load()?;
    render_config(ctx.store.path(), &document);
    Ok(())
}

fn confirm(question: &str) -> CliResult<bool> {
    let answer = read_reply(&format!("{question} [y/N]: "))?;
    Ok(matches!(answer.to_ascii_lowercase().as_str(), "y" | "yes"))
}

fn prompt(label: &str) -> CliResult<String> {
    read_reply(&format!("{label}: "))
}

fn read_reply(prompt_text: &str) -> CliResult<String> {
    print!("{prompt_text}");
    io::stdout().flush().map_err(CliError::failure)?;
    let mut reply = String::new();
    io::stdin().read_line(&mut reply).map_err(CliError::failure)?;
    Ok(reply.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lanlords_config::{ConfigError, ConfigStore, OptionResolver};
    use tempfile::TempDir;

    use crate::client::ApiClient;

    fn context_in(dir: &TempDir) -> AppContext {
        let store = ConfigStore::new(dir.path().join("config"));
        let resolver = OptionResolver::new(store.clone());
        AppContext {
            client: ApiClient::new(resolver.clone()).expect("client should build"),
            resolver,
            store,
        }
    }

    #[test]
    fn init_writes_single_section_document() {
        let dir = TempDir::new().expect("temp dir");
        let ctx = context_in(&dir);
        let args = ConfigInitArgs {
            api_url: Some("http://localhost:8080".to_string()),
            yes: true,
        };

        handle_config_init(&ctx, args).expect("init should succeed");

        let document = ctx.store.load().expect("config should load back");
        assert_eq!(document.get("api", "url"), Some("http://localhost:8080"));
        assert_eq!(document.sections().count(), 1);
    }

    #[test]
    fn init_overwrites_previous_config_wholesale() {
        let dir = TempDir::new().expect("temp dir");
        let ctx = context_in(&dir);
        let mut stale = ConfigDocument::new();
        stale.set("api", "url", "http://old");
        stale.set("extra", "key", "value");
        ctx.store.save(&stale).expect("seed stale config");

        let args = ConfigInitArgs {
            api_url: Some("http://new".to_string()),
            yes: true,
        };
        handle_config_init(&ctx, args).expect("init should succeed");

        let document = ctx.store.load().expect("config should load back");
        assert_eq!(document.get("api", "url"), Some("http://new"));
        assert_eq!(document.get("extra", "key"), None);
    }

    #[test]
    fn init_rejects_blank_url() {
        let dir = TempDir::new().expect("temp dir");
        let ctx = context_in(&dir);
        let args = ConfigInitArgs {
            api_url: Some("   ".to_string()),
            yes: true,
        };

        let err = handle_config_init(&ctx, args).expect_err("blank URL should fail");
        assert!(matches!(err, CliError::Validation(_)));
    }

    #[test]
    fn show_fails_visibly_when_config_is_missing() {
        let dir = TempDir::new().expect("temp dir");
        let ctx = context_in(&dir);

        let err = handle_config_show(&ctx).expect_err("missing config should fail");
        assert!(matches!(err, CliError::Config(ConfigError::ConfigMissing { .. })));
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn show_renders_saved_config() {
        let dir = TempDir::new().expect("temp dir");
        let ctx = context_in(&dir);
        let args = ConfigInitArgs {
            api_url: Some("http://localhost:8080".to_string()),
            yes: true,
        };
        handle_config_init(&ctx, args).expect("init should succeed");

        handle_config_show(&ctx).expect("show should succeed");
    }
}
