pub mod explore;
pub mod input;
pub mod report;

use std::io::{self, Write};

use log::{debug, info, warn};
use obesity_db::{next_id, StoredRecord, Worksheet};
use obesity_model::{Comparison, Statistics, Table, UserEntry};

use crate::{explore::MenuChoice, input::InputSource};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Store(#[from] obesity_db::Error),
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("input closed before valid data was entered")]
    InputClosed,
}

pub type Result<T> = std::result::Result<T, Error>;

/// What a completed run stored and reported.
#[derive(Debug)]
pub struct Submission {
    pub record: StoredRecord,
    pub statistics: Statistics,
    pub comparison: Option<Comparison>,
}

pub struct Session {
    worksheet: Box<dyn Worksheet>,
    input: Box<dyn InputSource>,
}

impl Session {
    pub fn new(worksheet: Box<dyn Worksheet>, input: Box<dyn InputSource>) -> Self {
        Self { worksheet, input }
    }

    pub async fn run<W: Write>(&mut self, out: &mut W) -> Result<Submission> {
        let entry = self.read_entry(out)?;
        let result = entry.bmi();
        info!("Validated entry, BMI {:.1} ({})", result.bmi, result.category);
        report::write_bmi(out, &result)?;

        info!("Updating worksheet");
        let rows = self.worksheet.read_all_rows().await?;
        let record = StoredRecord::new(next_id(&rows), &entry);
        debug!("Appending {:?}", record);
        self.worksheet.append_row(record.clone().into()).await?;
        writeln!(out, "Worksheet updated successfully.\n")?;

        let table = Table::new(self.worksheet.read_all_rows().await?);
        let statistics = Statistics::from_table(&table);
        debug!("Statistics over {} rows: {:?}", table.data_len(), statistics);
        let comparison = report::write_comparison(out, record.stored_bmi(), &statistics)?;
        if comparison.is_none() {
            warn!("No numeric BMI values in worksheet");
        }
        writeln!(out)?;
        report::write_statistics(out, "Descriptive statistics:", &statistics)?;

        self.explore(out, &table)?;

        Ok(Submission {
            record,
            statistics,
            comparison,
        })
    }

    /// Prompts until a valid entry is given. Bad input never ends the loop,
    /// only closed input does.
    pub fn read_entry<W: Write>(&mut self, out: &mut W) -> Result<UserEntry> {
        loop {
            writeln!(out, "Please enter your age, gender, height, and weight.")?;
            writeln!(out, "Data should be four values, separated by commas.")?;
            writeln!(out, "Example: 25, Male, 180, 80\n")?;

            let line = self.prompt(out, "Enter your data here: ")?;
            let Some(line) = line else {
                info!("Input closed while waiting for data");
                return Err(Error::InputClosed);
            };

            match UserEntry::try_from(line.as_str()) {
                Ok(entry) => {
                    writeln!(out, "Data is valid!")?;
                    return Ok(entry);
                }
                Err(e) => {
                    debug!("Rejected input {:?}: {}", line, e);
                    writeln!(out, "Invalid data: {}, please try again.\n", e)?;
                }
            }
        }
    }

    /// Menu loop filtering the stored rows. Ends on quit or closed input.
    fn explore<W: Write>(&mut self, out: &mut W, table: &Table) -> Result<()> {
        loop {
            writeln!(
                out,
                "\nExplore the data: filter by (g)ender, (a)ge range, (c)ategory, or (q)uit."
            )?;
            let Some(line) = self.prompt(out, "Choose an option: ")? else {
                return Ok(());
            };
            let choice = match MenuChoice::parse(&line) {
                Some(MenuChoice::Quit) => return Ok(()),
                Some(choice) => choice,
                None => {
                    writeln!(out, "Invalid option \"{}\", please try again.", line.trim())?;
                    continue;
                }
            };

            let Some(argument) = self.prompt(out, choice.prompt())? else {
                return Ok(());
            };
            match choice.filter(&argument) {
                Ok(filter) => {
                    debug!("Applying filter {:?}", filter);
                    let statistics = Statistics::from_table_filtered(table, &filter);
                    writeln!(out)?;
                    let title = format!("Statistics for {}:", filter);
                    report::write_statistics(out, &title, &statistics)?;
                }
                Err(message) => writeln!(out, "Invalid filter: {}, please try again.", message)?,
            }
        }
    }

    fn prompt<W: Write>(&mut self, out: &mut W, prompt: &str) -> io::Result<Option<String>> {
        write!(out, "{}", prompt)?;
        out.flush()?;
        self.input.read_line()
    }
}
