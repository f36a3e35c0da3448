use directory_core::{CategoryFilter, DraftField, Msg};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  list                     show the directory again
  category <label|all>     filter by category
  search <term>            filter by name, description or category
  clear                    clear the search term
  all                      reset category and search
  add                      open the Add Business form
  set <field> <value>      edit a form field (name, category, address, phone, description, image)
  submit                   submit the form
  cancel                   close the form, keeping what was typed
  help                     show this text
  quit                     leave the directory";

/// One line typed at the prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Dispatch(Msg),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command `{0}`; type `help` for the list")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
    #[error("unknown field `{0}`; expected one of name, category, address, phone, description, image")]
    UnknownField(String),
}

/// Parses a prompt line. Blank lines redisplay the directory.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim_start();
    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (trimmed, ""),
    };

    let command = match word.to_ascii_lowercase().as_str() {
        "" | "list" => Command::Show,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        "all" => Command::Dispatch(Msg::ShowAllClicked),
        "clear" => Command::Dispatch(Msg::SearchCleared),
        "add" => Command::Dispatch(Msg::FormOpened),
        "submit" => Command::Dispatch(Msg::FormSubmitted),
        "cancel" => Command::Dispatch(Msg::FormClosed),
        // Search terms are matched verbatim, so only the separator is removed.
        "search" => Command::Dispatch(Msg::SearchChanged(rest.to_string())),
        "category" => {
            let label = rest.trim();
            if label.is_empty() {
                return Err(CommandError::MissingArgument("category"));
            }
            let filter = CategoryFilter::parse(label)
                .ok_or_else(|| CommandError::UnknownCategory(label.to_string()))?;
            Command::Dispatch(Msg::CategorySelected(filter))
        }
        "set" => {
            let rest = rest.trim_start();
            let (key, value) = match rest.split_once(char::is_whitespace) {
                Some((key, value)) => (key, value),
                None => (rest, ""),
            };
            if key.is_empty() {
                return Err(CommandError::MissingArgument("set"));
            }
            let field = DraftField::from_key(&key.to_ascii_lowercase())
                .ok_or_else(|| CommandError::UnknownField(key.to_string()))?;
            Command::Dispatch(Msg::FormFieldEdited {
                field,
                value: value.to_string(),
            })
        }
        other => return Err(CommandError::Unknown(other.to_string())),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use directory_core::Category;
    use pretty_assertions::assert_eq;

    fn dispatched(line: &str) -> Msg {
        match parse_command(line) {
            Ok(Command::Dispatch(msg)) => msg,
            other => panic!("expected a message for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn plain_commands() {
        assert_eq!(parse_command(""), Ok(Command::Show));
        assert_eq!(parse_command("list\n"), Ok(Command::Show));
        assert_eq!(parse_command("HELP"), Ok(Command::Help));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
        assert_eq!(dispatched("all"), Msg::ShowAllClicked);
        assert_eq!(dispatched("clear"), Msg::SearchCleared);
        assert_eq!(dispatched("add"), Msg::FormOpened);
        assert_eq!(dispatched("submit"), Msg::FormSubmitted);
        assert_eq!(dispatched("cancel"), Msg::FormClosed);
    }

    #[test]
    fn category_accepts_labels_and_all() {
        assert_eq!(
            dispatched("category hair salon"),
            Msg::CategorySelected(CategoryFilter::Only(Category::HairSalon))
        );
        assert_eq!(dispatched("category ALL"), Msg::CategorySelected(CategoryFilter::All));
        assert_eq!(
            parse_command("category bakery"),
            Err(CommandError::UnknownCategory("bakery".to_string()))
        );
        assert_eq!(
            parse_command("category"),
            Err(CommandError::MissingArgument("category"))
        );
    }

    #[test]
    fn search_keeps_term_verbatim() {
        assert_eq!(dispatched("search pizza "), Msg::SearchChanged("pizza ".to_string()));
        assert_eq!(dispatched("search  two words"), Msg::SearchChanged(" two words".to_string()));
        assert_eq!(dispatched("search"), Msg::SearchChanged(String::new()));
    }

    #[test]
    fn set_edits_one_field() {
        assert_eq!(
            dispatched("set phone (410) 555-0101"),
            Msg::FormFieldEdited {
                field: DraftField::Phone,
                value: "(410) 555-0101".to_string(),
            }
        );
        assert_eq!(
            dispatched("set Name"),
            Msg::FormFieldEdited {
                field: DraftField::Name,
                value: String::new(),
            }
        );
        assert_eq!(
            parse_command("set colour blue"),
            Err(CommandError::UnknownField("colour".to_string()))
        );
        assert_eq!(parse_command("set"), Err(CommandError::MissingArgument("set")));
    }

    #[test]
    fn unknown_words_are_rejected() {
        assert_eq!(
            parse_command("dance"),
            Err(CommandError::Unknown("dance".to_string()))
        );
    }
}
