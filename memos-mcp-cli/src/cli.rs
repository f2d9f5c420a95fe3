use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "memos-mcp")]
#[command(version)]
#[command(about = "An MCP server bridging agents to a Memos note-taking instance")]
#[command(long_about = "
memos-mcp is an MCP (Model Context Protocol) server that exposes a remote
Memos instance as resources, tools, and prompt templates. It lets an AI
assistant read, search, create, update, delete, and tag memos without
speaking the Memos REST API directly.

Configuration is taken from the environment:
  MEMOS_URL          Base URL of the Memos instance (required)
  MEMOS_API_KEY      API access token (required)
  MEMOS_DEFAULT_TAG  Tag applied to untagged memos (default: mcp; empty disables)

Example usage:
  memos-mcp serve     # Run as MCP server on stdio
")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub debug: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run as MCP server (default when invoked via stdio)
    #[command(long_about = "
Runs memos-mcp as an MCP server. This is the default mode when invoked via
stdio (e.g., by Claude Code). The server will:

- Connect to the Memos instance named by MEMOS_URL
- Expose memos as resources (memos://recent, memos://all, memos://memos/{id})
- Expose search/create/update/delete/tag tools
- Serve prompt templates for memo workflows

Example:
  memos-mcp serve
  # Or configure in your MCP client's server settings
")]
    Serve,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_serve() {
        let cli = Cli::try_parse_from(["memos-mcp", "serve"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Serve)));
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from(["memos-mcp", "--quiet", "serve"]).unwrap();
        assert!(cli.quiet);
    }

    #[test]
    fn test_cli_allows_no_command() {
        let cli = Cli::try_parse_from(["memos-mcp"]).unwrap();
        assert!(cli.command.is_none());
    }
}
