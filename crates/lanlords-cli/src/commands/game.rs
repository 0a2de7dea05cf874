//! Handler for the `game list` verb.

use anyhow::anyhow;
use reqwest::Method;

use crate::cli::{ListArgs, OutputFormat};
use crate::client::{ApiPayload, AppContext, CliError, CliResult};
use crate::output::render_records;

/// Endpoint listing the games defined in the management API.
const GAMES_PATH: &str = "/servermanagement/games";

/// Fetch the defined games and render them as a table or JSON.
pub(crate) async fn handle_game_list(ctx: &AppContext, args: ListArgs) -> CliResult<()> {
    let format = OutputFormat::from_output_json(args.output_json);
    let ApiPayload::Json(records) = ctx.client.call(Method::GET, GAMES_PATH, None).await? else {
        return Err(CliError::failure(anyhow!(
            "expected a decoded JSON payload from GET {GAMES_PATH}"
        )));
    };
    render_records(&records, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::MockServer;
    use httpmock::prelude::*;
    use lanlords_config::{ConfigDocument, ConfigStore, OptionResolver};
    use serde_json::json;
    use tempfile::TempDir;

    use crate::client::ApiClient;

    fn context_for(server: &MockServer) -> (TempDir, AppContext) {
        let dir = TempDir::new().expect("temp dir");
        let store = ConfigStore::new(dir.path().join("config"));
        let mut document = ConfigDocument::new();
        document.set("api", "url", &server.base_url());
        store.save(&document).expect("save config fixture");
        let resolver = OptionResolver::new(store.clone());
        let ctx = AppContext {
            client: ApiClient::new(resolver.clone()).expect("client should build"),
            resolver,
            store,
        };
        (dir, ctx)
    }

    #[tokio::test]
    async fn game_list_fetches_and_renders() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/servermanagement/games");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    {"name": "factorio", "port": 34197},
                    {"name": "valheim", "port": 2456}
                ]));
        });

        let (_dir, ctx) = context_for(&server);
        handle_game_list(&ctx, ListArgs::default())
            .await
            .expect("game list should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn game_list_renders_json_output() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/servermanagement/games");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([{"name": "factorio"}]));
        });

        let (_dir, ctx) = context_for(&server);
        let args = ListArgs { output_json: true };
        handle_game_list(&ctx, args)
            .await
            .expect("json output should succeed");
    }
}
