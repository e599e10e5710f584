// mcp-call: send one JSON-RPC request to an MCP server and print the reply
//
//   mcp-call --url http://localhost:8081 --key <USER_API_KEY> --method tools/list
//   mcp-call --method tools/call --name todo.lists.get --params '{}'

use anyhow::{Context, Result};
use mcp_call_core::{ArgumentMap, EnvDefaults, InputError, RequestBuilder};
use mcp_call_sdk::{render, McpCallClient, SdkError};
use std::process::ExitCode;
use tracing::{debug, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Load .env before reading the environment; variables already set win
    let dotenv = dotenvy::dotenv();

    // Initialize tracing on stderr, stdout carries only the response
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "Loaded .env"),
        Err(e) if !e.not_found() => warn!(error = %e, "Failed to load .env"),
        Err(_) => {}
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("[ERR] {err:#}");
            ExitCode::from(exit_code(&err))
        }
    }
}

async fn run() -> Result<()> {
    let args = ArgumentMap::parse(
        std::env::args_os()
            .skip(1)
            .map(|arg| arg.to_string_lossy().into_owned()),
    );
    let env = EnvDefaults::from_env();

    let plan = RequestBuilder::new(&args, &env).build()?;

    let client = McpCallClient::from_plan(&plan)?;
    let reply = client
        .call(&plan.request)
        .await
        .with_context(|| format!("request to {} failed", plan.endpoint))?;

    render::print_response(&reply.body).context("failed to write response")?;
    Ok(())
}

fn exit_code(err: &anyhow::Error) -> u8 {
    if err.downcast_ref::<InputError>().is_some() {
        InputError::EXIT_CODE
    } else {
        SdkError::EXIT_CODE
    }
}
