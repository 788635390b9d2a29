use crate::domain::payment_type::PaymentTypeId;
use crate::error::PaymentSheetError;
use std::str::FromStr;
use std::time::Duration;

/// One line of terminal input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open,
    Close,
    Query(String),
    Refresh,
    Select(PaymentTypeId),
    Done,
    Finish,
    Show,
    Wait(Duration),
}

impl FromStr for Command {
    type Err = PaymentSheetError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word {
            "open" => Command::Open,
            "close" => Command::Close,
            // Everything after the keyword is the query, spaces included.
            "query" => Command::Query(rest.to_string()),
            "refresh" => Command::Refresh,
            "select" => Command::Select(rest.parse().map_err(|_| {
                PaymentSheetError::CommandError(format!("select expects a numeric id, got {rest:?}"))
            })?),
            "done" => Command::Done,
            "finish" => Command::Finish,
            "show" => Command::Show,
            "wait" => Command::Wait(Duration::from_millis(rest.parse().map_err(|_| {
                PaymentSheetError::CommandError(format!(
                    "wait expects milliseconds, got {rest:?}"
                ))
            })?)),
            other => {
                return Err(PaymentSheetError::CommandError(format!(
                    "unknown command {other:?}"
                )));
            }
        };

        let takes_argument = matches!(
            command,
            Command::Query(_) | Command::Select(_) | Command::Wait(_)
        );
        if !rest.is_empty() && !takes_argument {
            return Err(PaymentSheetError::CommandError(format!(
                "{word} takes no arguments"
            )));
        }
        Ok(command)
    }
}
