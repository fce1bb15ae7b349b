//! Instruction interpreter for logical cluster paths.
//!
//! This module provides a simple DSL for inspecting and composing logical
//! cluster paths. Instructions follow the format:
//!
//! `ACTION argument [argument]`
//!
//! where:
//! - ACTION := "VALIDATE" | "SPLIT" | "PARENT" | "BASE" | "JOIN" | "PREFIX" | "NAME" | "REQUEST" | "HELP"
//! - argument := a path, a segment (second argument of JOIN) or `""` for the empty value
//!
//! Examples:
//! - `VALIDATE root:accounting:us-west`
//! - `SPLIT root:accounting:us-west`
//! - `JOIN root:accounting us-west`
//! - `PREFIX elephant2 elephant`
//! - `REQUEST root:accounting`
//!
//! Each instruction produces output lines instead of printing them, the
//! binary decides where they go.

use std::collections::BTreeMap;
use std::convert::TryFrom;

use logicalcluster::{Name, Object, Path, from_object};
use serde::Deserialize;

/// Token standing for an empty argument.
const EMPTY_ARGUMENT: &str = "\"\"";

/// Represents a command action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Nil,
    Validate,
    Split,
    Parent,
    Base,
    Join,
    Prefix,
    Name,
    Request,
    Help,
}

impl Command {
    /// Parse a command from a string
    fn parse(s: &str) -> anyhow::Result<Self> {
        match s.to_uppercase().as_str() {
            "VALIDATE" | "V" => Ok(Command::Validate),
            "SPLIT" | "S" => Ok(Command::Split),
            "PARENT" | "P" => Ok(Command::Parent),
            "BASE" | "B" => Ok(Command::Base),
            "JOIN" | "J" => Ok(Command::Join),
            "PREFIX" | "PX" => Ok(Command::Prefix),
            "NAME" | "N" => Ok(Command::Name),
            "REQUEST" | "R" => Ok(Command::Request),
            "HELP" | "H" | "?" => Ok(Command::Help),
            _ => Err(anyhow::anyhow!("Unknown command: {}", s)),
        }
    }

    /// Number of arguments following the command.
    fn arity(&self) -> usize {
        match self {
            Command::Nil | Command::Help => 0,
            Command::Join | Command::Prefix => 2,
            Command::Validate
            | Command::Split
            | Command::Parent
            | Command::Base
            | Command::Name
            | Command::Request => 1,
        }
    }
}

/// Represents a complete instruction: ACTION ARGUMENTS
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    pub command: Command,
    pub arguments: Vec<String>,
}

fn argument(token: &str) -> String {
    if token == EMPTY_ARGUMENT { String::new() } else { token.to_string() }
}

impl TryFrom<&str> for Instruction {
    type Error = anyhow::Error;

    /// Parse an instruction string in the format "ACTION arguments"
    ///
    /// # Examples
    /// - `JOIN root:org ws`
    /// - `SPLIT ""`
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let s = s.trim();

        // Skip empty lines and comments
        if s.is_empty() || s.starts_with('#') {
            return Ok(Instruction { command: Command::Nil, arguments: Vec::new() });
        }

        let mut tokens = s.split_whitespace();
        let command = match tokens.next() {
            Some(token) => Command::parse(token)?,
            None => return Err(anyhow::anyhow!("Invalid instruction format")),
        };
        let arguments: Vec<String> = tokens.map(argument).collect();
        if arguments.len() != command.arity() {
            return Err(anyhow::anyhow!(
                "Invalid number of arguments for command: {:?}, expected {}, got {}",
                command,
                command.arity(),
                arguments.len()
            ));
        }

        Ok(Instruction { command, arguments })
    }
}

impl TryFrom<String> for Instruction {
    type Error = anyhow::Error;

    fn try_from(s: String) -> Result<Instruction, anyhow::Error> {
        Instruction::try_from(s.as_str())
    }
}

/// Renders a value for output, spelling out the empty value.
fn show(value: &str) -> String {
    if value.is_empty() { EMPTY_ARGUMENT.to_string() } else { value.to_string() }
}

fn verdict(valid: bool) -> &'static str {
    if valid { "valid" } else { "invalid" }
}

fn help() -> Vec<String> {
    [
        "Available instructions:",
        "Inspection:",
        " $ VALIDATE <path>                # Check the path (and name) grammar",
        " $ SPLIT <path>                   # Split into parent and last segment",
        " $ PARENT <path>                  # All but the last segment",
        " $ BASE <path>                    # Last segment",
        " $ NAME <path>                    # Path as a name, if it has no parent",
        " $ REQUEST <path>                 # URL path of the logical cluster API",
        "",
        "Composition:",
        " $ JOIN <path> <segment>          # Append a segment",
        " $ PREFIX <path> <prefix>         # Raw string prefix test",
        "",
        "Utility:",
        " $ HELP                           # Show this help message",
        " $ # [comment]                    # Comment line",
        "",
        "Argument format:",
        " - Path: root:accounting:us-west, or * for all logical clusters",
        " - Empty value: \"\"",
    ]
    .iter()
    .map(|line| line.to_string())
    .collect()
}

/// Executes instructions against logical cluster paths.
#[derive(Debug, Default)]
pub struct PathHandler {
    executed: usize,
}

impl PathHandler {
    /// Number of instructions executed so far, comments and blank lines excluded.
    pub fn executed(&self) -> usize {
        self.executed
    }

    /// Execute an instruction and return its output lines
    pub fn execute(&mut self, instruction: &Instruction) -> anyhow::Result<Vec<String>> {
        let args = &instruction.arguments;
        if args.len() != instruction.command.arity() {
            return Err(anyhow::anyhow!("{:?} command has wrong arguments", instruction.command));
        }
        let output = match instruction.command {
            Command::Nil => return Ok(Vec::new()),
            Command::Help => help(),
            Command::Validate => validate(&Path::new(args[0].as_str())),
            Command::Split => {
                let path = Path::new(args[0].as_str());
                let (parent, base) = path.split();
                vec![format!("parent {}", show(parent.as_str())), format!("base {}", show(base))]
            }
            Command::Parent => match Path::new(args[0].as_str()).parent() {
                Some(parent) => vec![parent.to_string()],
                None => vec!["(none)".to_string()],
            },
            Command::Base => vec![show(Path::new(args[0].as_str()).base())],
            Command::Join => {
                vec![show(Path::new(args[0].as_str()).join(&args[1]).as_str())]
            }
            Command::Prefix => {
                let path = Path::new(args[0].as_str());
                vec![path.has_prefix(&Path::new(args[1].as_str())).to_string()]
            }
            Command::Name => match Name::try_from(Path::new(args[0].as_str())) {
                Ok(name) => vec![show(name.as_str())],
                Err(e) => vec![e.to_string()],
            },
            Command::Request => vec![Path::new(args[0].as_str()).request_path()],
        };
        self.executed += 1;
        tracing::debug!(command = ?instruction.command, lines = output.len(), "executed instruction");
        Ok(output)
    }
}

fn validate(path: &Path) -> Vec<String> {
    let mut output = vec![format!("path {} {}", show(path.as_str()), verdict(path.is_valid()))];
    if let Some(name) = path.name().filter(|name| !name.is_empty()) {
        output.push(format!("name {} {}", name, verdict(name.is_valid())));
    }
    output
}

/// Minimal shape of an API object manifest, enough to reach its annotations.
#[derive(Debug, Default, Deserialize)]
pub struct Manifest {
    #[serde(default)]
    pub metadata: Metadata,
}

/// Object metadata holding the annotations.
#[derive(Debug, Default, Deserialize)]
pub struct Metadata {
    #[serde(default)]
    pub annotations: Option<BTreeMap<String, String>>,
}

impl Object for Manifest {
    fn annotations(&self) -> Option<&BTreeMap<String, String>> {
        self.metadata.annotations.as_ref()
    }
}

/// Parse a JSON manifest and return the logical cluster it is annotated with.
pub fn manifest_cluster(content: &str) -> anyhow::Result<Name> {
    let manifest: Manifest = serde_json::from_str(content)
        .map_err(|e| anyhow::anyhow!("Failed to parse manifest: {}", e))?;
    Ok(from_object(&manifest))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(line: &str) -> Vec<String> {
        let instruction = Instruction::try_from(line).unwrap();
        PathHandler::default().execute(&instruction).unwrap()
    }

    #[test]
    fn unit_interactive_parse_instruction() {
        let instruction = Instruction::try_from("join root:org ws").unwrap();
        assert_eq!(instruction.command, Command::Join);
        assert_eq!(instruction.arguments, vec!["root:org", "ws"]);

        let instruction = Instruction::try_from("S \"\"").unwrap();
        assert_eq!(instruction.command, Command::Split);
        assert_eq!(instruction.arguments, vec![String::new()]);
    }

    #[test]
    fn unit_interactive_parse_comment_and_blank() {
        assert_eq!(Instruction::try_from("# comment").unwrap().command, Command::Nil);
        assert_eq!(Instruction::try_from("   ").unwrap().command, Command::Nil);
    }

    #[test]
    fn unit_interactive_parse_errors() {
        assert!(Instruction::try_from("FROB root").is_err());
        assert!(Instruction::try_from("JOIN root").is_err());
        assert!(Instruction::try_from("SPLIT").is_err());
        assert!(Instruction::try_from("HELP me").is_err());
    }

    #[test]
    fn unit_interactive_validate() {
        assert_eq!(run("VALIDATE root:org"), vec!["path root:org valid"]);
        assert_eq!(run("VALIDATE root"), vec!["path root valid", "name root valid"]);
        assert_eq!(run("VALIDATE r"), vec!["path r valid", "name r invalid"]);
        assert_eq!(run("VALIDATE root::org"), vec!["path root::org invalid"]);
        assert_eq!(run("VALIDATE \"\""), vec!["path \"\" invalid"]);
        assert_eq!(run("VALIDATE *"), vec!["path * valid", "name * invalid"]);
    }

    #[test]
    fn unit_interactive_structure() {
        assert_eq!(run("SPLIT foo::baz"), vec!["parent foo:", "base baz"]);
        assert_eq!(run("SPLIT foo"), vec!["parent \"\"", "base foo"]);
        assert_eq!(run("PARENT root:org:ws"), vec!["root:org"]);
        assert_eq!(run("PARENT root"), vec!["(none)"]);
        assert_eq!(run("BASE root:org:ws"), vec!["ws"]);
        assert_eq!(run("BASE root:"), vec!["\"\""]);
    }

    #[test]
    fn unit_interactive_composition() {
        assert_eq!(run("JOIN root:org ws"), vec!["root:org:ws"]);
        assert_eq!(run("JOIN \"\" root"), vec!["root"]);
        assert_eq!(run("PREFIX elephant2 elephant"), vec!["true"]);
        assert_eq!(run("PREFIX root root:org"), vec!["false"]);
    }

    #[test]
    fn unit_interactive_name_and_request() {
        assert_eq!(run("NAME root"), vec!["root"]);
        assert_eq!(
            run("NAME root:org"),
            vec![
                logicalcluster::LogicalClusterError::HasParent("root:org".to_string()).to_string()
            ]
        );
        assert_eq!(run("REQUEST root:org"), vec!["/clusters/root:org"]);
        assert_eq!(run("REQUEST \"\""), vec!["/clusters"]);
    }

    #[test]
    fn unit_interactive_counts_executed() {
        let mut handler = PathHandler::default();
        for line in ["# header", "BASE root:org", "", "HELP"] {
            handler.execute(&Instruction::try_from(line).unwrap()).unwrap();
        }
        assert_eq!(handler.executed(), 2);
    }

    #[test]
    fn unit_interactive_manifest_cluster() {
        let content = r#"{"metadata":{"name":"cm","annotations":{"kcp.dev/cluster":"f5865fce"}}}"#;
        assert_eq!(manifest_cluster(content).unwrap(), Name::new("f5865fce"));
        assert!(manifest_cluster(r#"{"metadata":{"name":"cm"}}"#).unwrap().is_empty());
        assert!(manifest_cluster(r#"{"kind":"ConfigMap"}"#).unwrap().is_empty());
        assert!(manifest_cluster("not json").is_err());
    }
}
