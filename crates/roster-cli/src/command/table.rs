//! Text table rendering
//!
//! Every table starts with a title, a header and a separator line. Undefined
//! statistics are shown as `N/A`.

use std::io::{self, Write};

use roster_analysis::{AgeDivision, FamilyGroups, SurvivalDemographics};
use roster_stats::frequency::ValueCounts;

const NOT_AVAILABLE: &str = "N/A";

fn format_float(value: f64) -> String {
    if value.is_nan() {
        NOT_AVAILABLE.to_owned()
    } else {
        format!("{value:.2}")
    }
}

fn format_percent(rate: f64) -> String {
    if rate.is_nan() {
        NOT_AVAILABLE.to_owned()
    } else {
        format!("{:.1}%", rate * 100.0)
    }
}

fn write_title<W>(w: &mut W, title: &str) -> io::Result<()>
where
    W: Write,
{
    writeln!(w, "{title}")?;
    writeln!(w, "{}", "=".repeat(title.len()))?;
    writeln!(w)
}

pub(super) fn write_demographics<W>(w: &mut W, table: &SurvivalDemographics) -> io::Result<()>
where
    W: Write,
{
    write_title(w, "Survival by Class, Sex and Age Group")?;

    writeln!(
        w,
        "  {:<6} {:<8} {:<10} {:>10} {:>10} {:>10}",
        "Class", "Sex", "Age Group", "Passengers", "Survivors", "Rate",
    )?;
    // class(6) + sex(8) + age group(10) + passengers(10) + survivors(10) + rate(10) + spaces(5)
    writeln!(w, "  {}", "-".repeat(59))?;
    for row in table.iter() {
        writeln!(
            w,
            "  {:<6} {:<8} {:<10} {:>10} {:>10} {:>10}",
            row.pclass,
            row.sex,
            row.age_group,
            row.n_passengers,
            row.n_survivors,
            format_percent(row.survival_rate),
        )?;
    }

    if table.excluded() > 0 {
        writeln!(w)?;
        writeln!(
            w,
            "  {} passengers without a known age group were excluded",
            table.excluded()
        )?;
    }
    Ok(())
}

pub(super) fn write_family_groups<W>(w: &mut W, groups: &FamilyGroups) -> io::Result<()>
where
    W: Write,
{
    write_title(w, "Fares by Family Size and Class")?;

    writeln!(
        w,
        "  {:>6} {:>6} {:>8} {:>10} {:>10} {:>10}",
        "Family", "Class", "Fares", "Mean", "Min", "Max",
    )?;
    // family(6) + class(6) + fares(8) + mean(10) + min(10) + max(10) + spaces(5)
    writeln!(w, "  {}", "-".repeat(55))?;
    for row in groups.iter() {
        writeln!(
            w,
            "  {:>6} {:>6} {:>8} {:>10} {:>10} {:>10}",
            row.family_size,
            row.pclass,
            row.n_passengers,
            format_float(row.avg_fare),
            format_float(row.min_fare),
            format_float(row.max_fare),
        )?;
    }
    Ok(())
}

pub(super) fn write_last_names<W>(
    w: &mut W,
    counts: &ValueCounts<String>,
    top: Option<usize>,
) -> io::Result<()>
where
    W: Write,
{
    write_title(w, "Last Names")?;

    writeln!(w, "  {:<24} {:>8}", "Last Name", "Count")?;
    writeln!(w, "  {}", "-".repeat(33))?;
    for (last_name, count) in counts.most_common(top.unwrap_or(counts.len())) {
        writeln!(w, "  {last_name:<24} {count:>8}")?;
    }
    writeln!(w)?;
    writeln!(
        w,
        "  {} distinct last names over {} named passengers",
        counts.len(),
        counts.total()
    )
}

pub(super) fn write_age_division<W>(
    w: &mut W,
    division: &AgeDivision,
    show_rows: bool,
) -> io::Result<()>
where
    W: Write,
{
    write_title(w, "Age Relative to Class Median")?;

    writeln!(w, "  {:<6} {:>12}", "Class", "Median Age")?;
    writeln!(w, "  {}", "-".repeat(19))?;
    for (pclass, median) in division.class_medians() {
        writeln!(w, "  {pclass:<6} {:>12}", format_float(*median))?;
    }

    let (older, not_older, unknown) = division.counts();
    writeln!(w)?;
    writeln!(w, "  Older      : {older}")?;
    writeln!(w, "  Not older  : {not_older}")?;
    writeln!(w, "  Unknown    : {unknown}")?;

    if show_rows {
        writeln!(w)?;
        writeln!(w, "  {:>6} {:<10}", "Row", "Flag")?;
        writeln!(w, "  {}", "-".repeat(17))?;
        for (idx, flag) in division.flags().iter().enumerate() {
            writeln!(w, "  {idx:>6} {flag:<10}")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use roster_analysis::{Analyzer, Dataset, Passenger};

    use super::*;

    fn render<F>(f: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn dataset() -> Dataset {
        Dataset::new(vec![
            Passenger::new(1, "female")
                .with_age(30.0)
                .with_survived(true)
                .with_name("Smith, Mrs. Jane"),
            Passenger::new(2, "male").with_fare(13.0),
        ])
        .unwrap()
    }

    #[test]
    fn test_empty_groups_render_not_available() {
        let dataset = dataset();
        let table = Analyzer::default().survival_demographics(&dataset).unwrap();
        let text = render(|w| write_demographics(w, &table));
        assert!(text.contains("100.0%"));
        assert!(text.contains(NOT_AVAILABLE));
        assert!(text.contains("1 passengers without a known age group"));
    }

    #[test]
    fn test_family_groups_without_fares() {
        let groups = FamilyGroups::compute(&dataset());
        let text = render(|w| write_family_groups(w, &groups));
        assert!(text.contains("13.00"));
        assert!(text.contains(NOT_AVAILABLE));
    }

    #[test]
    fn test_last_names_summary() {
        let counts = Analyzer::default().last_names(&dataset());
        let text = render(|w| write_last_names(w, &counts, Some(10)));
        assert!(text.contains("Smith"));
        assert!(text.contains("1 distinct last names over 1 named passengers"));
    }

    #[test]
    fn test_age_division_rows() {
        let division = AgeDivision::compute(&dataset());
        let text = render(|w| write_age_division(w, &division, true));
        assert!(text.contains("not_older"));
        assert!(text.contains("unknown"));
        assert!(text.contains("30.00"));
    }

    #[test]
    fn test_format_float() {
        assert_eq!(format_float(f64::NAN), "N/A");
        assert_eq!(format_float(7.25), "7.25");
        assert_eq!(format_percent(0.5), "50.0%");
    }
}
