//! renders the aggregation results as chart artifacts
//! one svg file per result, written to the working directory;
//! works off the Report alone, never touches the db

use std::error;
use std::path::Path;

use plotters::prelude::*;

use crate::db::stat::{
    CategoryCalories, DailyCalories, FrequencyCount, Report, StudentProtein,
};

pub const CHART_CATEGORY  : &str = "calories_by_category.svg";
pub const CHART_PROTEIN   : &str = "protein_by_student.svg";
pub const CHART_TREND     : &str = "daily_calorie_trend.svg";
pub const CHART_FREQUENCY : &str = "frequency_distribution.svg";

const CHART_SIZE : (u32, u32) = (800, 600);

const SKYBLUE : RGBColor = RGBColor(135, 206, 235);
const PURPLE  : RGBColor = RGBColor(128, 0, 128);

// slice colors for the pie chart; cycled should buckets ever exceed them
const PIE_COLORS : [RGBColor; 5] = [
    RGBColor(102, 153, 255),
    RGBColor(255, 178, 102),
    RGBColor(153, 221, 153),
    RGBColor(255, 153, 204),
    RGBColor(204, 153, 255),
];

/// render all four charts next to each other in the working directory
pub fn render_all(report : &Report) -> Result<(), Box<dyn error::Error>>
{
    calories_by_category(
        &report.calories_by_category, Path::new(CHART_CATEGORY))?;
    protein_by_student(
        &report.protein_by_student, Path::new(CHART_PROTEIN))?;
    daily_calorie_trend(
        &report.daily_calories, Path::new(CHART_TREND))?;
    frequency_distribution(
        &report.frequency_counts, Path::new(CHART_FREQUENCY))?;

    Ok(())
}

/// bar chart; category on x, total calories on y
pub fn calories_by_category(
    totals : &[CategoryCalories],
    path   : &Path,
) -> Result<(), Box<dyn error::Error>>
{
    if totals.is_empty()
    {
        return Err("no category totals to render".into());
    }

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let ymax = totals.iter().map(|t| t.total_calories).max().unwrap() + 50;

    let mut chart = ChartBuilder::on(&root)
        .caption("Calories by Food Category", ("sans-serif", 32))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..totals.len()).into_segmented(), 0i64..ymax)?;

    chart.configure_mesh()
        .disable_x_mesh()
        .x_desc("Category")
        .y_desc("Total Calories")
        .x_labels(totals.len())
        .x_label_formatter(&|pos : &SegmentValue<usize>| match pos {
            SegmentValue::CenterOf(index) => totals
                .get(*index)
                .map(|t| t.category.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(SKYBLUE.filled())
            .margin(10)
            .data(totals.iter().enumerate()
                  .map(|(index, t)| (index, t.total_calories))),
    )?;

    root.present()?;

    Ok(())
}

/// bar chart; student on x, total protein grams on y
pub fn protein_by_student(
    totals : &[StudentProtein],
    path   : &Path,
) -> Result<(), Box<dyn error::Error>>
{
    if totals.is_empty()
    {
        return Err("no protein totals to render".into());
    }

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let ymax = totals.iter()
        .map(|t| t.total_protein)
        .fold(0.0f64, f64::max) + 5.0;

    let mut chart = ChartBuilder::on(&root)
        .caption("Total Protein Intake per Student", ("sans-serif", 32))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d((0..totals.len()).into_segmented(), 0f64..ymax)?;

    chart.configure_mesh()
        .disable_x_mesh()
        .x_desc("Student ID")
        .y_desc("Total Protein (g)")
        .x_labels(totals.len())
        .x_label_formatter(&|pos : &SegmentValue<usize>| match pos {
            SegmentValue::CenterOf(index) => totals
                .get(*index)
                .map(|t| t.student_id.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(GREEN.filled())
            .margin(20)
            .data(totals.iter().enumerate()
                  .map(|(index, t)| (index, t.total_protein))),
    )?;

    root.present()?;

    Ok(())
}

/// line chart w/ point markers; date on x (chronological), calories on y
pub fn daily_calorie_trend(
    days : &[DailyCalories],
    path : &Path,
) -> Result<(), Box<dyn error::Error>>
{
    if days.is_empty()
    {
        return Err("no daily totals to render".into());
    }

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let ymax = days.iter().map(|d| d.daily_calories).max().unwrap() + 50;

    let mut chart = ChartBuilder::on(&root)
        .caption("Daily Calorie Intake Trend", ("sans-serif", 32))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0..days.len(), 0i64..ymax)?;

    chart.configure_mesh()
        .x_desc("Date")
        .y_desc("Calories")
        .x_labels(days.len())
        .x_label_formatter(&|index : &usize| days
            .get(*index)
            .map(|d| d.intake_date.clone())
            .unwrap_or_default())
        .draw()?;

    chart.draw_series(LineSeries::new(
        days.iter().enumerate()
            .map(|(index, d)| (index, d.daily_calories)),
        &PURPLE,
    ))?;

    // point markers on top of the line
    chart.draw_series(
        days.iter().enumerate()
            .map(|(index, d)| Circle::new(
                (index, d.daily_calories), 4, PURPLE.filled())),
    )?;

    root.present()?;

    Ok(())
}

/// pie chart; record count share per frequency bucket,
/// slices labeled w/ their percentage to one decimal place
pub fn frequency_distribution(
    counts : &[FrequencyCount],
    path   : &Path,
) -> Result<(), Box<dyn error::Error>>
{
    if counts.is_empty()
    {
        return Err("no frequency counts to render".into());
    }

    let root = SVGBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let root = root.titled("Food Frequency Distribution", ("sans-serif", 32))?;

    let dims = root.dim_in_pixel();
    let center = (dims.0 as i32 / 2, dims.1 as i32 / 2);
    let radius = 180.0;

    let sizes : Vec<f64> = counts.iter().map(|c| c.count as f64).collect();
    let labels : Vec<String> =
        counts.iter().map(|c| c.frequency.clone()).collect();
    let colors : Vec<RGBColor> = PIE_COLORS.iter()
        .cycle()
        .take(counts.len())
        .cloned()
        .collect();

    let mut pie = Pie::new(&center, &radius, &sizes, &colors, &labels);
    pie.start_angle(-90.0);
    pie.label_style(("sans-serif", 20).into_font().color(&BLACK));
    pie.percentages(("sans-serif", 16).into_font().color(&BLACK));

    root.draw(&pie)?;

    root.present()?;

    Ok(())
}
