//! Member CLI commands
//!
//! Implements CLI commands for roster management.

use clap::Subcommand;

use crate::error::OnSplitResult;
use crate::services::RosterService;
use crate::storage::Storage;

/// Member subcommands
#[derive(Subcommand)]
pub enum MemberCommands {
    /// Add a member to the roster
    Add {
        /// Member name
        name: String,
        /// Avatar reference (URL or path)
        #[arg(short, long)]
        avatar: Option<String>,
    },
    /// List all members
    List,
    /// Remove a member from the roster
    Remove {
        /// Member name or ID
        member: String,
    },
}

/// Handle a member subcommand
pub fn handle_member_command(storage: &Storage, command: MemberCommands) -> OnSplitResult<()> {
    let service = RosterService::new(storage);

    match command {
        MemberCommands::Add { name, avatar } => {
            let member = service.add(&name, avatar)?;
            println!("Added member {}", member);
        }
        MemberCommands::List => {
            let members = service.list()?;
            if members.is_empty() {
                println!("No members yet. Add one with 'onsplit member add <name>'.");
            } else {
                for member in members {
                    match &member.avatar {
                        Some(avatar) => println!("{}  [{}]", member, avatar),
                        None => println!("{}", member),
                    }
                }
            }
        }
        MemberCommands::Remove { member } => {
            let removed = service.remove(&member)?;
            println!("Removed member {}", removed.name);
        }
    }

    Ok(())
}
