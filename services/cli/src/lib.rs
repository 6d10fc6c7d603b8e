mod cli;
mod render;

use peopleflow::error::AppError;

pub fn run() -> Result<(), AppError> {
    cli::run()
}
