use colored::Colorize;
use foldertree::mutation::Outcome;

/// Human phrasing of an outcome. `action` is the verb the user asked for,
/// e.g. "delete" or "move".
pub fn describe(outcome: &Outcome, action: &str) -> String {
    match outcome {
        Outcome::Ok => "Done".to_string(),
        Outcome::NotFound { id } => format!("Nothing with id '{id}' exists"),
        Outcome::PermissionDenied { kind, .. } => {
            format!("You don't have permission to {action} this {kind}")
        }
        Outcome::WouldCreateCycle { source, destination } => {
            format!("Cannot move '{source}' into '{destination}', which is inside it")
        }
        Outcome::NotAFolder { id } => format!("'{id}' is a file, pick a folder instead"),
    }
}

pub fn print_outcome(outcome: &Outcome, action: &str) {
    let message = describe(outcome, action);
    if outcome.is_ok() {
        println!("{}", message.green());
    } else {
        println!("{}", message.yellow().bold());
    }
}
