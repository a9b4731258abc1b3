use std::error;

use rusqlite::Connection;

const VERSION: &str = "0.1.0"; // keep in synch w/ ver from Cargo.toml
const DB_NAME: &str = "college_food_data.db";

fn main() -> Result<(), Box<dyn error::Error>>
{
    println!();
    println!("College food analytics");
    println!("Version : {}", VERSION);
    println!("Database used: {:?}", DB_NAME);

    // create/open db in the working directory;
    // whatever a previous run left behind is rebuilt from scratch
    let mut db = Connection::open(DB_NAME)?;

    let report = foodtracker::run(&mut db)?;

    // aggregation is done, rendering works off the report alone
    db.close().map_err(|(_, err)| err)?;

    foodtracker::display(&report);
    foodtracker::render(&report)?;

    Ok(())
}
