use super::command::Command;
use super::view_writer::ViewWriter;
use crate::application::events::Action;
use crate::application::session::SessionHandle;
use crate::application::view::AppView;
use crate::domain::payment_type::{PaymentType, PaymentTypeId};
use crate::error::{PaymentSheetError, Result};
use std::io::Write;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::debug;

/// Feeds line commands from `input` into the session, writing the resulting view after
/// each one. Bad commands and unavailable actions are reported on stderr and skipped.
///
/// Returns at end of input; the handle is dropped so the session can wind down.
pub async fn drive<R, W>(handle: SessionHandle, input: R, writer: &mut ViewWriter<W>) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
{
    writer.write_view(&handle.view())?;

    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let outcome = match line.parse::<Command>() {
            Ok(command) => execute(&handle, command).await,
            Err(e) => Err(e),
        };
        match outcome {
            Ok(Some(view)) => writer.write_view(&view)?,
            Ok(None) => {}
            Err(e) => eprintln!("Error: {e}"),
        }
    }
    debug!("end of input");
    Ok(())
}

async fn execute(handle: &SessionHandle, command: Command) -> Result<Option<AppView>> {
    let action = match command {
        Command::Open => Action::OpenSheet,
        Command::Close => Action::DismissSheet,
        Command::Query(query) => Action::SetQuery(query),
        Command::Refresh => Action::Refresh,
        Command::Select(id) => Action::Select(visible_row(handle, id)?),
        Command::Done => Action::Done,
        Command::Finish => Action::Finish,
        Command::Show => return Ok(Some(handle.view())),
        Command::Wait(duration) => {
            tokio::time::sleep(duration).await;
            return Ok(None);
        }
    };
    handle.dispatch(action).await.map(Some)
}

/// Rows can only be tapped while they are on screen.
fn visible_row(handle: &SessionHandle, id: PaymentTypeId) -> Result<PaymentType> {
    let view = handle.view();
    let sheet = view
        .sheet
        .ok_or(PaymentSheetError::ActionUnavailable("payment sheet is not open"))?;
    sheet
        .rows
        .into_iter()
        .find(|row| row.id == id)
        .map(|row| PaymentType::new(row.id, row.name))
        .ok_or(PaymentSheetError::UnknownPaymentType(id))
}
