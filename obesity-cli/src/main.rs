use std::{error::Error, io};

use log::{error, info};
use obesity_cli::{input::StdinInput, Session};
use obesity_db::{Connection, WorksheetImpl};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    log4rs::init_file("log4rs.yml", Default::default())?;

    info!("Connecting to worksheet");
    let conn = Connection::establish().await?;
    let worksheet = Box::new(WorksheetImpl::new(conn));

    let mut session = Session::new(worksheet, Box::new(StdinInput::new()));
    match session.run(&mut io::stdout()).await {
        Ok(submission) => {
            info!("Stored record {}", submission.record.id);
            Ok(())
        }
        Err(e) => {
            error!("Run aborted: {}", e);
            Err(e.into())
        }
    }
}
