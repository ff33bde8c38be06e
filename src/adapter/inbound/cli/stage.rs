//! Handler for the `stage` command.

use crate::adapter::inbound::cli::command::StageArgs;
use crate::adapter::inbound::cli::output;
use crate::domain::Stage;

/// Execute `stage <probability>`.
pub fn execute(args: &StageArgs) {
    let stage = Stage::from_probability(args.probability);
    output::value("stage", stage);
}
