use anyhow::Result;
use rmcp::{
    ServerHandler, ServiceExt,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    schemars, tool, tool_handler, tool_router,
};
use serde::Deserialize;
use std::path::PathBuf;

use crate::commands::{self, Written};

// Request structs for tools

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfSplitRequest {
    #[schemars(description = "Selected PDF files; split needs exactly one")]
    pub paths: Vec<String>,
    #[schemars(description = "Comma-separated 1-based page numbers, in output order (e.g., '3,1,3')")]
    pub pages: String,
    #[schemars(description = "Output directory or file (default: current directory, as split.pdf)")]
    #[serde(default)]
    pub output: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PdfMergeRequest {
    #[schemars(description = "PDF files to concatenate, in order; at least two")]
    pub paths: Vec<String>,
    #[schemars(description = "Output directory or file (default: current directory, as merged.pdf)")]
    #[serde(default)]
    pub output: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PdfServer {
    tool_router: ToolRouter<Self>,
}

impl PdfServer {
    pub fn new() -> Self {
        Self {
            tool_router: Self::tool_router(),
        }
    }
}

impl Default for PdfServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl PdfServer {
    #[tool(description = "Create a new PDF from selected pages of one PDF. Pages may repeat and appear in any order.")]
    async fn pdf_split(&self, Parameters(req): Parameters<PdfSplitRequest>) -> String {
        let inputs = to_paths(&req.paths);
        let output = output_dir(req.output);
        render(commands::split::run(&inputs, &req.pages, &output).await)
    }

    #[tool(description = "Concatenate all pages of two or more PDFs, in the order given, into one PDF")]
    async fn pdf_merge(&self, Parameters(req): Parameters<PdfMergeRequest>) -> String {
        let inputs = to_paths(&req.paths);
        let output = output_dir(req.output);
        render(commands::merge::run(&inputs, &output).await)
    }
}

fn to_paths(paths: &[String]) -> Vec<PathBuf> {
    paths.iter().map(PathBuf::from).collect()
}

fn output_dir(output: Option<String>) -> PathBuf {
    output.map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."))
}

fn render(result: Result<Written>) -> String {
    match result {
        Ok(written) => {
            serde_json::to_string_pretty(&written).unwrap_or_else(|e| format!("Error: {}", e))
        }
        Err(e) => format!("Error: {}", e),
    }
}

#[tool_handler]
impl ServerHandler for PdfServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "PDF split and merge tools. Use pdf_split to build a PDF from chosen pages of one \
                 file (written as split.pdf), and pdf_merge to concatenate several files \
                 (written as merged.pdf)."
                    .to_string(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

pub async fn run_server() -> Result<()> {
    let server = PdfServer::new();
    tracing::info!("serving MCP on stdio");

    // Serve using stdin/stdout as a tuple
    let service = server.serve((tokio::io::stdin(), tokio::io::stdout())).await?;

    service.waiting().await?;

    Ok(())
}
