//! handles most db specific functionality
//! (initialization, integrity checking, sample data loading)
//! stat functionality ousted to submodule stat

pub mod helpers;
pub mod queries;
pub mod stat;

use std::error;
use rusqlite::params;
use rusqlite::Connection;
use rusqlite::Result;
use queries::*;
use helpers::*;

/// representing a full row from the food_choices table
#[derive(Debug, Clone, PartialEq)]
pub struct FoodChoiceRow {
    pub id: i64,
    pub student_id: String,
    pub food_item: String,
    pub category: String,
    pub calories: i64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub frequency: String,
    pub intake_date: String,
}

/// the ten sample records every run loads; fixed, never varies;
/// (student_id, food_item, category, calories,
///  protein, carbs, fat, frequency, intake_date)
pub const SAMPLE_DATA : [(&str, &str, &str, i64, f64, f64, f64, &str, &str); 10] = [
    ("S001", "Apple",       "Fruit",        95,  0.3,  25.0,  0.2, "Daily",        "2025-06-13"),
    ("S002", "Paneer",      "Protein",      265, 18.3,  1.2, 20.8, "Weekly",       "2025-06-13"),
    ("S003", "White Rice",  "Carbohydrate", 204,  4.2, 44.0,  0.4, "Daily",        "2025-06-14"),
    ("S001", "Spinach",     "Vegetable",    23,   2.9,  3.6,  0.4, "Weekly",       "2025-06-14"),
    ("S002", "Fried Chips", "Junk Food",    312,  3.2, 29.0, 22.0, "Occasionally", "2025-06-15"),
    ("S003", "Egg",         "Protein",      155, 13.0,  1.1, 11.0, "Daily",        "2025-06-15"),
    ("S001", "Banana",      "Fruit",        105,  1.3, 27.0,  0.3, "Daily",        "2025-06-16"),
    ("S002", "Brown Rice",  "Carbohydrate", 216,  5.0, 45.0,  1.8, "Weekly",       "2025-06-16"),
    ("S003", "Pizza",       "Junk Food",    285, 12.0, 36.0, 10.0, "Occasionally", "2025-06-17"),
    ("S001", "Milk",        "Dairy",        150,  8.0, 12.0,  8.0, "Daily",        "2025-06-17"),
];

/// (re)initialize the db; drops leftovers of an earlier run,
/// so no record ever outlives one execution
pub fn init(db: &mut Connection) -> Result<()> {
    db.execute(SQL_DROP, ())?;
    db.execute(SQL_CREATE, ())?;
    Ok(())
}

/// check freshly created db for integrity, conforming to expected layout
pub fn check(db : &Connection) -> Result<()> {
    // compare creation schema versus one from sqlite_master

    let mut stmt = db.prepare(
        "SELECT sql FROM sqlite_master WHERE type='table' AND name=?1",
    )?;

    let schema: String =
        stmt.query_row(params![SQL_TABLEN], |row| row.get(0))?;

    println!(
        "Checking if the table exists and is d'accord w/ creation query"
    );

    if !(clean(schema) == clean(SQL_CREATE.to_string())) {
        println!("table {} failed integrity check", SQL_TABLEN);
        panic!("DB table failed integrity check, something's off");
    }

    println!("  Passed");

    Ok(())
}

/// insert the fixed sample records; expects a freshly created table;
/// returns the number of inserted rows
pub fn load_samples(db: &mut Connection) -> Result<usize> {
    let insertquery = clean(SQL_INSERT.to_string());

    let mut inserted = 0;

    for rec in SAMPLE_DATA {
        inserted += db.execute(
            insertquery.as_str(),
            params![
                rec.0, rec.1, rec.2, rec.3, rec.4,
                rec.5, rec.6, rec.7, rec.8,
            ],
        )?;
    }

    Ok(inserted)
}

/// retrieve all records ordered by id;
/// uses FoodChoiceRow struct
pub fn get_records(
    db : &Connection,
) -> Result<Vec<FoodChoiceRow>, Box<dyn error::Error>> {

    let mut stmt = db.prepare(
        &format!("SELECT * FROM {} ORDER BY id ASC", SQL_TABLEN)
    )?;

    // create iterator
    let db_record_data = stmt.query_map([], |row| {
        Ok(FoodChoiceRow {
            id: row.get(0)?,
            student_id: row.get(1)?,
            food_item: row.get(2)?,
            category: row.get(3)?,
            calories: row.get(4)?,
            protein: row.get(5)?,
            carbs: row.get(6)?,
            fat: row.get(7)?,
            frequency: row.get(8)?,
            intake_date: row.get(9)?,
        })
    })?;

    // create data vector and use iterator to populate it
    let mut records = Vec::new();
    for rec in db_record_data {
        records.push(rec?);
    }

    Ok(records)
}
