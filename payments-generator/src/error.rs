use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("Please specify the number of records that will be generated: --recordsCnt")]
    MissingRecordsCount,
    #[error("I/O Error: {0}")]
    IoError(#[from] io::Error),
}
