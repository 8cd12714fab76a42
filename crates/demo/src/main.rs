// File: crates/demo/src/main.rs
// Summary: Demo loads the salaries CSV, prints every widget, then applies a discipline filter.

use anyhow::{Context, Result};
use dashboard_core::widget::format_percent;
use dashboard_core::{load_salaries_csv, Dashboard, Sex};

fn main() -> Result<()> {
    let path = std::env::args().nth(1).unwrap_or_else(|| "Salaries.csv".to_string());

    let data = load_salaries_csv(&path).with_context(|| format!("failed to load CSV '{path}'"))?;
    println!("Loaded {} rows ({} skipped)", data.records.len(), data.skipped);

    if data.records.is_empty() {
        anyhow::bail!("no rows loaded - check headers/delimiter.");
    }

    let mut dash = Dashboard::new(data.records);
    print_widgets(&dash);

    // Pick the first discipline from the selector and focus on it.
    let first = dash.discipline_selector().options.first().map(|(d, _)| d.clone());
    if let Some(discipline) = first {
        println!("\n== filtered to discipline '{discipline}' ==");
        dash.set_discipline(Some(&discipline));
        print_widgets(&dash);

        dash.set_discipline(None);
        println!("\n== filter cleared ==");
        print_widgets(&dash);
    }

    Ok(())
}

fn print_widgets(dash: &Dashboard) {
    let selector = dash.discipline_selector();
    println!("Disciplines:");
    for (discipline, count) in &selector.options {
        println!("  {discipline}: {count} rows");
    }

    for sex in Sex::ALL {
        let display = dash.percent_professors(sex);
        println!(
            "Percent of {} that are professors: {}",
            sex.label().to_lowercase(),
            format_percent(display.value)
        );
    }

    let balance = dash.gender_balance();
    println!("Gender balance:");
    for bar in &balance.bars {
        println!("  {}: {}", bar.key, bar.value);
    }

    let salary = dash.average_salary();
    println!("Average salary:");
    for bar in &salary.bars {
        println!("  {}: {:.2}", bar.key, bar.value);
    }

    let ranks = dash.rank_distribution();
    println!("Rank distribution (% of rows per gender):");
    for stack in &ranks.stacks {
        let cells = stack
            .bars
            .iter()
            .map(|b| format!("{} {:.1}%", b.key, b.value))
            .collect::<Vec<_>>()
            .join(", ");
        println!("  {}: {}", stack.label, cells);
    }

    let service = dash.service_salary_correlation();
    println!(
        "Service/salary scatter: {} points, x in [{}, {}]",
        service.points.len(),
        service.x_domain.0,
        service.x_domain.1
    );
    let phd = dash.phd_salary_correlation();
    println!(
        "PhD/salary scatter: {} points, x in [{}, {}]",
        phd.points.len(),
        phd.x_domain.0,
        phd.x_domain.1
    );
}
