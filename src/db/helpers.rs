use regex::Regex;
use chrono::{Datelike, NaiveDate, Weekday};

// helper function to clean a sql query
pub fn clean(input : String) -> String
{
    let s = input.replace("\n", " ").replace("\t", " ");
    let r = Regex::new(r"\s{2,}").unwrap();
    r.replace_all(&s, " ").to_string()
}

// helper function to round a float to six digits after decimal point
pub fn round(f : f64) -> f64
{
    (f * 1_000_000.).round() / 1_000_000.
}

// helper function to parse a date string from the db (YYYY-MM-DD)
pub fn parse_ymd(date : &str) -> Result<NaiveDate, chrono::ParseError>
{
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
}

// helper function for display; weekday of a date string from the db
pub fn weekday_of(date : &str) -> Result<Weekday, chrono::ParseError>
{
    Ok(parse_ymd(date)?.weekday())
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn clean_works()
    {
        let s = "Test\tstring\nfor cleaning\t".to_string();
        assert_eq!(clean(s), "Test string for cleaning ".to_string());
    }

    #[test]
    fn round_works()
    {
        assert_eq!(round(12.500000049), 12.5);
        assert_eq!(round(0.1 + 0.2), 0.3);
    }

    #[test]
    fn parse_ymd_works()
    {
        let d = parse_ymd("2025-06-13").unwrap();
        assert_eq!(d.year(), 2025);
        assert_eq!(d.month(), 6);
        assert_eq!(d.day(), 13);
        assert!(parse_ymd("13.06.2025").is_err());
    }

    #[test]
    fn weekday_of_works()
    {
        // 2025-06-13 was a Friday
        assert_eq!(weekday_of("2025-06-13").unwrap(), chrono::Weekday::Fri);
    }
}
