//! CLI command implementations

use crate::error::CliResult;
use clap::Subcommand;
use faultline::{FailureStrategy, PolicyKind};

pub mod demo;
pub mod divide;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Divide two integers under a chosen policy and strategy
    Divide(divide::DivideArgs),

    /// Replay the default/explicit policy walkthrough
    Demo(demo::DemoArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List failure-signaling policies
    Policies,

    /// List failure strategies in precedence order
    Strategies,
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> CliResult<()> {
        match self {
            Commands::Divide(args) => args.execute(),
            Commands::Demo(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.lines() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed for this listing
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Policies => PolicyKind::ALL
                .iter()
                .map(|policy| {
                    if policy.is_default() {
                        format!("{policy} (default)")
                    } else {
                        policy.to_string()
                    }
                })
                .collect(),
            ListCommands::Strategies => FailureStrategy::PRECEDENCE
                .iter()
                .map(|strategy| format!("{}. {strategy}", strategy.rank() + 1))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_debug_format() {
        let list_cmd = Commands::List {
            subcommand: ListCommands::Policies,
        };

        let debug_str = format!("{:?}", list_cmd);
        assert!(debug_str.contains("List"));
        assert!(debug_str.contains("Policies"));
    }

    #[test]
    fn test_list_policies_marks_default() {
        let lines = ListCommands::Policies.lines();

        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines.iter().filter(|line| line.ends_with("(default)")).count(),
            1
        );
        assert!(lines.contains(&format!("{} (default)", PolicyKind::DEFAULT)));
    }

    #[test]
    fn test_list_strategies_in_precedence_order() {
        assert_eq!(
            ListCommands::Strategies.lines(),
            vec!["1. in-place", "2. functor", "3. callable", "4. conversion"]
        );
    }

    #[test]
    fn test_list_commands_completeness() {
        match ListCommands::Policies {
            ListCommands::Policies => (),
            ListCommands::Strategies => panic!("Should be Policies"),
        }

        match ListCommands::Strategies {
            ListCommands::Policies => panic!("Should be Strategies"),
            ListCommands::Strategies => (),
        }
    }
}
