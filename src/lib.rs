//! one shot analytics over the college food choices db;
//! rebuild schema, load the fixed sample records, aggregate, render

use std::error;

use rusqlite::Connection;

pub mod chart;
pub mod db;

use db::stat::Report;

/// the db bound part of the pipeline:
/// schema initialization, integrity check, sample loading, aggregation;
/// everything after this works off the returned Report alone
pub fn run(db : &mut Connection) -> Result<Report, Box<dyn error::Error>>
{
    db::init(db)?;
    db::check(db)?;

    let inserted = db::load_samples(db)?;
    println!("loaded {} sample records into {}",
             inserted, db::queries::SQL_TABLEN);

    let report = db::stat::report(db)?;

    Ok(report)
}

/// best effort interactive display of the aggregation results
pub fn display(report : &Report)
{
    db::stat::printreport(report);
}

/// write the four chart artifacts into the working directory
pub fn render(report : &Report) -> Result<(), Box<dyn error::Error>>
{
    chart::render_all(report)?;

    println!();
    println!("charts written:");
    println!("  {}", chart::CHART_CATEGORY);
    println!("  {}", chart::CHART_PROTEIN);
    println!("  {}", chart::CHART_TREND);
    println!("  {}", chart::CHART_FREQUENCY);

    Ok(())
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    // the full db bound pipeline on a fresh in memory db
    fn run_produces_complete_report()
    {
        let mut testdb = Connection::open_in_memory().unwrap();
        let report = run(&mut testdb).unwrap();

        assert_eq!(report.calories_by_category.len(), 6);
        assert_eq!(report.protein_by_student.len(), 3);
        assert_eq!(report.daily_calories.len(), 5);
        assert_eq!(report.frequency_counts.len(), 3);
    }

    #[test]
    // run twice on the same connection; the drop and recreate at the
    // start of every run makes the outcome identical
    fn run_twice_is_idempotent()
    {
        let mut testdb = Connection::open_in_memory().unwrap();

        let first = run(&mut testdb).unwrap();
        let second = run(&mut testdb).unwrap();

        assert_eq!(first, second);
    }
}
