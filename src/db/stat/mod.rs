//! submodule dealing with statistics
//! four read only aggregations over the food_choices table,
//! bundled into a Report the rendering stage works off

use std::error;

use rusqlite::Connection;

use crate::db::helpers::{round, weekday_of};
use crate::db::queries::*;

/// total calories per food category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryCalories {
    pub category: String,
    pub total_calories: i64,
}

/// total protein grams per student
#[derive(Debug, Clone, PartialEq)]
pub struct StudentProtein {
    pub student_id: String,
    pub total_protein: f64,
}

/// total calories per intake date
#[derive(Debug, Clone, PartialEq)]
pub struct DailyCalories {
    pub intake_date: String,
    pub daily_calories: i64,
}

/// record count per frequency bucket
#[derive(Debug, Clone, PartialEq)]
pub struct FrequencyCount {
    pub frequency: String,
    pub count: i64,
}

/// all four aggregation results of one run;
/// transient, only ever consumed by display and rendering
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub calories_by_category : Vec<CategoryCalories>,
    pub protein_by_student   : Vec<StudentProtein>,
    pub daily_calories       : Vec<DailyCalories>,
    pub frequency_counts     : Vec<FrequencyCount>,
}

pub fn calories_by_category(db : &Connection)
    -> Result<Vec<CategoryCalories>, Box<dyn error::Error>>
{
    let mut stmt = db.prepare(SQL_CALORIES_BY_CATEGORY)?;

    let db_rows = stmt.query_map([], |row| {
        Ok(CategoryCalories {
            category: row.get(0)?,
            total_calories: row.get(1)?,
        })
    })?;

    let mut totals = Vec::new();
    for row in db_rows { totals.push(row?); }

    Ok(totals)
}

pub fn protein_by_student(db : &Connection)
    -> Result<Vec<StudentProtein>, Box<dyn error::Error>>
{
    let mut stmt = db.prepare(SQL_PROTEIN_BY_STUDENT)?;

    let db_rows = stmt.query_map([], |row| {
        Ok(StudentProtein {
            student_id: row.get(0)?,
            total_protein: row.get(1)?,
        })
    })?;

    let mut totals = Vec::new();
    for row in db_rows { totals.push(row?); }

    Ok(totals)
}

/// ascending by date; the ISO date strings in the db sort chronologically
pub fn daily_calories(db : &Connection)
    -> Result<Vec<DailyCalories>, Box<dyn error::Error>>
{
    let mut stmt = db.prepare(SQL_DAILY_CALORIES)?;

    let db_rows = stmt.query_map([], |row| {
        Ok(DailyCalories {
            intake_date: row.get(0)?,
            daily_calories: row.get(1)?,
        })
    })?;

    let mut days = Vec::new();
    for row in db_rows { days.push(row?); }

    Ok(days)
}

pub fn frequency_counts(db : &Connection)
    -> Result<Vec<FrequencyCount>, Box<dyn error::Error>>
{
    let mut stmt = db.prepare(SQL_FREQUENCY_COUNTS)?;

    let db_rows = stmt.query_map([], |row| {
        Ok(FrequencyCount {
            frequency: row.get(0)?,
            count: row.get(1)?,
        })
    })?;

    let mut counts = Vec::new();
    for row in db_rows { counts.push(row?); }

    Ok(counts)
}

/// run all four aggregations; only reads from db
pub fn report(db : &Connection) -> Result<Report, Box<dyn error::Error>>
{
    Ok(Report {
        calories_by_category : calories_by_category(db)?,
        protein_by_student   : protein_by_student(db)?,
        daily_calories       : daily_calories(db)?,
        frequency_counts     : frequency_counts(db)?,
    })
}

/// print all four result tables; the terminal stand-in for
/// interactively displayed charts, cannot fail the run
pub fn printreport(report : &Report)
{
    println!();
    println!("---------------------------------------------------------------");
    println!("Calories by food category");
    println!("---------------------------------------------------------------");

    for row in &report.calories_by_category
    {
        println!("{:<14} {:>6}", row.category, row.total_calories);
    }

    println!("---------------------------------------------------------------");
    println!("Total protein intake per student (g)");
    println!("---------------------------------------------------------------");

    for row in &report.protein_by_student
    {
        println!("{:<14} {:>6.1}", row.student_id, round(row.total_protein));
    }

    println!("---------------------------------------------------------------");
    println!("Daily calorie intake trend");
    println!("---------------------------------------------------------------");

    for day in &report.daily_calories
    {
        // weekday is display sugar; an unparsable date just loses it
        let weekday = weekday_of(&day.intake_date)
            .map(|wd| wd.to_string())
            .unwrap_or_default();

        println!("{} {}    {:>6}",
                 weekday, day.intake_date, day.daily_calories);
    }

    println!("---------------------------------------------------------------");
    println!("Food frequency distribution");
    println!("---------------------------------------------------------------");

    let total : i64 = report.frequency_counts.iter().map(|c| c.count).sum();

    for row in &report.frequency_counts
    {
        let percentage = 100. * row.count as f64 / total as f64;
        println!("{:<14} {:>3}  ({:.1}%)", row.frequency, row.count, percentage);
    }

    println!("---------------------------------------------------------------");
}

#[cfg(test)]
mod tests
{
    use super::*;
    use crate::db;
    use crate::test; // crate w/ shared test logic

    const EPSILON : f64 = 0.001;

    fn category_total(totals : &[CategoryCalories], category : &str) -> i64
    {
        totals.iter()
            .find(|t| t.category == category)
            .map(|t| t.total_calories)
            .unwrap_or_else(|| panic!("missing category {}", category))
    }

    #[test]
    fn category_totals_match_sample_data()
    {
        let testdb = test::setup_db();
        let totals = calories_by_category(&testdb).unwrap();

        assert_eq!(totals.len(), 6);
        assert_eq!(category_total(&totals, "Fruit"), 200);
        assert_eq!(category_total(&totals, "Protein"), 420);
        assert_eq!(category_total(&totals, "Carbohydrate"), 420);
        assert_eq!(category_total(&totals, "Vegetable"), 23);
        assert_eq!(category_total(&totals, "Junk Food"), 597);
        assert_eq!(category_total(&totals, "Dairy"), 150);

        // grouped sums must add up to the plain sum over all records
        let alltime : i64 = db::SAMPLE_DATA.iter().map(|rec| rec.3).sum();
        let grouped : i64 = totals.iter().map(|t| t.total_calories).sum();

        assert_eq!(alltime, 1810);
        assert_eq!(grouped, alltime);
    }

    #[test]
    fn protein_totals_match_sample_data()
    {
        let testdb = test::setup_db();
        let totals = protein_by_student(&testdb).unwrap();

        assert_eq!(totals.len(), 3);

        for (student, expected) in
            [("S001", 12.5), ("S002", 26.5), ("S003", 29.2)]
        {
            let total = totals.iter()
                .find(|t| t.student_id == student)
                .map(|t| t.total_protein)
                .unwrap_or_else(|| panic!("missing student {}", student));

            assert!((total - expected).abs() <= EPSILON);
        }

        let alltime : f64 = db::SAMPLE_DATA.iter().map(|rec| rec.4).sum();
        let grouped : f64 = totals.iter().map(|t| t.total_protein).sum();

        assert!((grouped - alltime).abs() <= EPSILON);
    }

    #[test]
    fn daily_trend_is_ascending_and_complete()
    {
        let testdb = test::setup_db();
        let days = daily_calories(&testdb).unwrap();

        let expected = [
            ("2025-06-13", 360),
            ("2025-06-14", 227),
            ("2025-06-15", 467),
            ("2025-06-16", 321),
            ("2025-06-17", 435),
        ];

        assert_eq!(days.len(), expected.len());

        for (day, (date, calories)) in days.iter().zip(expected)
        {
            assert_eq!(day.intake_date, date);
            assert_eq!(day.daily_calories, calories);
        }

        // ascending in actual date terms, not just lexically
        for pair in days.windows(2)
        {
            let beg = db::helpers::parse_ymd(&pair[0].intake_date).unwrap();
            let end = db::helpers::parse_ymd(&pair[1].intake_date).unwrap();
            assert!(beg < end);
        }
    }

    #[test]
    fn frequency_counts_cover_all_records()
    {
        let testdb = test::setup_db();
        let counts = frequency_counts(&testdb).unwrap();

        assert_eq!(counts.len(), 3);

        for (frequency, expected) in
            [("Daily", 5), ("Weekly", 3), ("Occasionally", 2)]
        {
            let count = counts.iter()
                .find(|c| c.frequency == frequency)
                .map(|c| c.count)
                .unwrap_or_else(|| panic!("missing frequency {}", frequency));

            assert_eq!(count, expected);
        }

        let total : i64 = counts.iter().map(|c| c.count).sum();
        assert_eq!(total, 10);
    }

    #[test]
    // full rebuild plus reload must yield the identical report
    fn rerun_is_idempotent()
    {
        let mut testdb = test::setup_db();
        let first = report(&testdb).unwrap();

        db::init(&mut testdb).unwrap();
        db::load_samples(&mut testdb).unwrap();
        let second = report(&testdb).unwrap();

        assert_eq!(first, second);
    }
}
