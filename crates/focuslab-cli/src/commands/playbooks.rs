//! Playbooks command implementation.

use crate::cli::PlaybooksArgs;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use focuslab_domain::{find_playbook, PLAYBOOKS};

/// Execute the playbooks command.
pub fn execute_playbooks(args: PlaybooksArgs, formatter: &Formatter) -> Result<()> {
    let output = match args.id {
        Some(id) => {
            let playbook = find_playbook(&id)
                .ok_or_else(|| CliError::InvalidInput(format!("Unknown playbook '{}'", id)))?;
            formatter.format_playbook(playbook)?
        }
        None => formatter.format_playbooks(&PLAYBOOKS)?,
    };

    println!("{}", output);
    Ok(())
}
