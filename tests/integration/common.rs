use assert_cmd::Command;
use httpmock::prelude::*;
use serde_json::{Value, json};
use tempfile::TempDir;

pub const ENDPOINT: &str = "/service/extdirect";

pub struct TestEnv {
    pub data_dir: TempDir,
    pub server: MockServer,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            data_dir: TempDir::new().expect("failed to create data_dir"),
            server: MockServer::start(),
        }
    }

    /// Build a storetypes Command pre-configured with --data-dir and no ambient overrides.
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("storetypes"));
        cmd.env_remove("STORETYPES_BASE_URL")
            .env_remove("STORETYPES_PASSWORD")
            .env_remove("RUST_LOG")
            .arg("--data-dir")
            .arg(self.data_dir.path());
        cmd
    }

    /// Same as `cmd`, pointed at the mock server.
    pub fn cmd_against_server(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--base-url").arg(self.server.base_url());
        cmd
    }

    /// Answer the datastore type read with the given `result` object.
    pub fn serve_result(&self, result: Value) -> httpmock::Mock<'_> {
        self.server.mock(|when, then| {
            when.method(Method::POST)
                .path(ENDPOINT)
                .body_includes(r#""action":"coreui_Datastore","method":"readTypes""#);
            then.status(200).json_body(json!({
                "tid": 1,
                "action": "coreui_Datastore",
                "method": "readTypes",
                "type": "rpc",
                "result": result
            }));
        })
    }

    pub fn serve_types(&self, data: Value) -> httpmock::Mock<'_> {
        self.serve_result(json!({"success": true, "data": data}))
    }
}
