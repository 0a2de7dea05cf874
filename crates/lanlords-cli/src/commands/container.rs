//! Handler for the `container list` verb.

use anyhow::anyhow;
use reqwest::Method;

use crate::cli::{ListArgs, OutputFormat};
use crate::client::{ApiPayload, AppContext, CliError, CliResult};
use crate::output::render_records;

/// Endpoint listing the containers known to the management API.
const CONTAINERS_PATH: &str = "/servermanagement/listContainers";

/// Fetch the running containers and render them as a table or JSON.
pub(crate) async fn handle_container_list(ctx: &AppContext, args: ListArgs) -> CliResult<()> {
    let format = OutputFormat::from_output_json(args.output_json);
    let ApiPayload::Json(records) = ctx.client.call(Method::GET, CONTAINERS_PATH, None).await?
    else {
        return Err(CliError::failure(anyhow!(
            "expected a decoded JSON payload from GET {CONTAINERS_PATH}"
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

    use crate::client::{ApiClient, ApiError};

    fn context_for(base_url: &str) -> (TempDir, AppContext) {
        let dir = TempDir::new().expect("temp dir");
        let store = ConfigStore::new(dir.path().join("config"));
        let mut document = ConfigDocument::new();
        document.set("api", "url", base_url);
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
    async fn container_list_fetches_and_renders() {
        let server = MockServer::start_async().await;
        let mock = server.mock(|when, then| {
            when.method(GET).path("/servermanagement/listContainers");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!([
                    {"id": "b2f9", "image": "lanlords/factorio", "state": "running"}
                ]));
        });

        let (_dir, ctx) = context_for(&server.base_url());
        handle_container_list(&ctx, ListArgs::default())
            .await
            .expect("container list should succeed");
        mock.assert();
    }

    #[tokio::test]
    async fn container_list_surfaces_decode_failures() {
        let server = MockServer::start_async().await;
        server.mock(|when, then| {
            when.method(GET).path("/servermanagement/listContainers");
            then.status(200).body("<html>oops</html>");
        });

        let (_dir, ctx) = context_for(&server.base_url());
        let err = handle_container_list(&ctx, ListArgs::default())
            .await
            .expect_err("non-JSON body should fail");
        assert!(matches!(
            err,
            crate::client::CliError::Api(ApiError::ResponseDecode { .. })
        ));
        assert_eq!(err.exit_code(), 6);
    }
}
