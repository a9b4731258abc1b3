pub const SQL_TABLEN : &str = "food_choices";
// PRIMARY implies NOT NULL and UNIQUE
pub const SQL_CREATE : &str =
"CREATE TABLE food_choices (
    id INTEGER PRIMARY KEY,
    student_id TEXT NOT NULL,
    food_item TEXT NOT NULL,
    category TEXT NOT NULL,
    calories INTEGER NOT NULL,
    protein NUMERIC NOT NULL,
    carbs NUMERIC NOT NULL,
    fat NUMERIC NOT NULL,
    frequency TEXT NOT NULL,
    intake_date TEXT NOT NULL
    )";

// every run starts from a clean slate, stale tables get dropped
pub const SQL_DROP : &str = "DROP TABLE IF EXISTS food_choices";

pub const SQL_INSERT : &str =
"INSERT INTO food_choices
    (student_id, food_item, category, calories,
     protein, carbs, fat, frequency, intake_date)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)";

/*
 * the four aggregations below are the whole point of the program;
 * they only ever read, the table is never touched after loading
 */

pub const SQL_CALORIES_BY_CATEGORY : &str =
"SELECT category, SUM(calories) FROM food_choices GROUP BY category";

pub const SQL_PROTEIN_BY_STUDENT : &str =
"SELECT student_id, SUM(protein) FROM food_choices GROUP BY student_id";

pub const SQL_DAILY_CALORIES : &str =
"SELECT intake_date, SUM(calories) FROM food_choices
    GROUP BY intake_date ORDER BY intake_date ASC";

pub const SQL_FREQUENCY_COUNTS : &str =
"SELECT frequency, COUNT(*) FROM food_choices GROUP BY frequency";
